use thiserror::Error;

fn rgba_buffer_size(width: u32, height: u32) -> usize {
    width as usize * height as usize * 4
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RgbaImageError {
    #[error("image size {width}x{height} needs {expected} bytes, buffer has {actual}")]
    BoundsMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
    #[error("region at x:{x}, y:{y} size {width}x{height} is outside the {image_width}x{image_height} image")]
    RegionOutsideBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        image_width: u32,
        image_height: u32,
    },
}

/// Tightly packed RGBA8 pixels, ready to upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbaImage {
    width: u32,
    height: u32,
    buffer: Vec<u8>,
}

impl RgbaImage {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            buffer: vec![0; rgba_buffer_size(width, height)],
        }
    }

    pub fn from_data(width: u32, height: u32, buffer: Vec<u8>) -> Result<Self, RgbaImageError> {
        let expected = rgba_buffer_size(width, height);

        if expected != buffer.len() {
            return Err(RgbaImageError::BoundsMismatch {
                width,
                height,
                expected,
                actual: buffer.len(),
            });
        }

        Ok(Self {
            width,
            height,
            buffer,
        })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    pub fn buffer_mut(&mut self) -> &mut [u8] {
        &mut self.buffer
    }

    #[must_use]
    pub fn row_bytes(&self) -> usize {
        self.width as usize * 4
    }

    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }

        let offset = y as usize * self.row_bytes() + x as usize * 4;
        let mut pixel = [0; 4];
        pixel.copy_from_slice(&self.buffer[offset..offset + 4]);
        Some(pixel)
    }

    /// Copies a sub-rectangle out into its own image.
    pub fn crop(&self, x: u32, y: u32, width: u32, height: u32) -> Result<Self, RgbaImageError> {
        let fits_x = x.checked_add(width).is_some_and(|right| right <= self.width);
        let fits_y = y.checked_add(height).is_some_and(|bottom| bottom <= self.height);

        if !fits_x || !fits_y {
            return Err(RgbaImageError::RegionOutsideBounds {
                x,
                y,
                width,
                height,
                image_width: self.width,
                image_height: self.height,
            });
        }

        let row_bytes = width as usize * 4;
        let mut buffer = Vec::with_capacity(rgba_buffer_size(width, height));
        for row in y..y + height {
            let start = row as usize * self.row_bytes() + x as usize * 4;
            buffer.extend_from_slice(&self.buffer[start..start + row_bytes]);
        }

        Ok(Self {
            width,
            height,
            buffer,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(width: u32, height: u32) -> RgbaImage {
        let mut image = RgbaImage::new(width, height);
        for (i, pixel) in image.buffer_mut().chunks_exact_mut(4).enumerate() {
            pixel.copy_from_slice(&[i as u8, 0, 0, 255]);
        }
        image
    }

    #[test]
    fn new_allocates_four_bytes_per_pixel() {
        let image = RgbaImage::new(3, 2);

        assert_eq!(image.buffer().len(), 24);
        assert_eq!(image.row_bytes(), 12);
    }

    #[test]
    fn from_data_rejects_wrong_length() {
        let result = RgbaImage::from_data(2, 2, vec![0; 15]);

        assert_eq!(
            result,
            Err(RgbaImageError::BoundsMismatch {
                width: 2,
                height: 2,
                expected: 16,
                actual: 15,
            })
        );
    }

    #[test]
    fn pixel_reads_row_major() {
        let image = numbered(3, 2);

        assert_eq!(image.pixel(0, 0), Some([0, 0, 0, 255]));
        assert_eq!(image.pixel(2, 1), Some([5, 0, 0, 255]));
        assert_eq!(image.pixel(3, 0), None);
    }

    #[test]
    fn crop_copies_sub_rectangle() {
        let image = numbered(4, 3);

        let cropped = image.crop(1, 1, 2, 2).unwrap();

        assert_eq!(cropped.width(), 2);
        assert_eq!(cropped.height(), 2);
        assert_eq!(cropped.pixel(0, 0), Some([5, 0, 0, 255]));
        assert_eq!(cropped.pixel(1, 1), Some([10, 0, 0, 255]));
    }

    #[test]
    fn crop_outside_bounds_fails() {
        let image = numbered(4, 3);

        assert!(matches!(
            image.crop(3, 0, 2, 1),
            Err(RgbaImageError::RegionOutsideBounds { .. })
        ));
        assert!(image.crop(0, 0, 4, 3).is_ok());
    }
}
