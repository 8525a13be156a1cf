//! Pixel format conversion between decoder output and texture upload.

use thiserror::Error;

use crate::core::data::decoded_image::DecodedImage;
use crate::core::data::rgba_image::RgbaImage;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PixelFormatError {
    #[error("row stride {row_stride} is shorter than a {width} pixel row of {row_bytes} bytes")]
    StrideTooShort {
        width: u32,
        row_stride: usize,
        row_bytes: usize,
    },
    #[error("pixel buffer holds {actual} bytes, {height} rows need at least {expected}")]
    BufferTooShort {
        height: u32,
        expected: usize,
        actual: usize,
    },
}

/// Copies one row of RGB pixels into RGBA, setting alpha to 255.
///
/// Stops at whichever of `src` (3 bytes per pixel) or `dst` (4 bytes per
/// pixel) runs out first.
pub fn copy_rgb_to_rgba(src: &[u8], dst: &mut [u8]) {
    for (src_pixel, dst_pixel) in src.chunks_exact(3).zip(dst.chunks_exact_mut(4)) {
        dst_pixel[0] = src_pixel[0];
        dst_pixel[1] = src_pixel[1];
        dst_pixel[2] = src_pixel[2];
        dst_pixel[3] = 255;
    }
}

/// Repacks decoder output into tightly packed RGBA8, dropping row padding.
pub fn expand_to_rgba(image: &DecodedImage) -> Result<RgbaImage, PixelFormatError> {
    let row_bytes = image.width as usize * image.bytes_per_pixel();

    if image.row_stride < row_bytes {
        return Err(PixelFormatError::StrideTooShort {
            width: image.width,
            row_stride: image.row_stride,
            row_bytes,
        });
    }

    // The last row may omit its padding.
    let expected = match image.height {
        0 => 0,
        rows => (rows as usize - 1) * image.row_stride + row_bytes,
    };
    if image.pixels.len() < expected {
        return Err(PixelFormatError::BufferTooShort {
            height: image.height,
            expected,
            actual: image.pixels.len(),
        });
    }

    let mut rgba = RgbaImage::new(image.width, image.height);
    let dst_row_bytes = rgba.row_bytes();
    if dst_row_bytes == 0 {
        return Ok(rgba);
    }

    for (row, dst) in rgba.buffer_mut().chunks_exact_mut(dst_row_bytes).enumerate() {
        let start = row * image.row_stride;
        let src = &image.pixels[start..start + row_bytes];

        if image.has_alpha {
            dst.copy_from_slice(src);
        } else {
            copy_rgb_to_rgba(src, dst);
        }
    }

    Ok(rgba)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decoded(width: u32, height: u32, has_alpha: bool, row_stride: usize, pixels: Vec<u8>) -> DecodedImage {
        DecodedImage {
            width,
            height,
            has_alpha,
            row_stride,
            pixels,
        }
    }

    #[test]
    fn test_copy_rgb_to_rgba_known_values() {
        let src = vec![
            255, 0, 0, // red
            0, 255, 0, // green
            0, 0, 255, // blue
            255, 255, 255, // white
        ];
        let mut dst = vec![0; (src.len() / 3) * 4];

        copy_rgb_to_rgba(&src, &mut dst);

        assert_eq!(
            dst,
            vec![
                255, 0, 0, 255, 0, 255, 0, 255, 0, 0, 255, 255, 255, 255, 255, 255
            ]
        );
    }

    #[test]
    fn test_copy_rgb_to_rgba_empty_buffers() {
        let src: Vec<u8> = vec![];
        let mut dst: Vec<u8> = vec![];

        copy_rgb_to_rgba(&src, &mut dst);

        assert!(dst.is_empty());
    }

    #[test]
    fn rgb_rows_with_padding_are_repacked() {
        // 2x2 RGB, stride 8: two padding bytes per row.
        let image = decoded(
            2,
            2,
            false,
            8,
            vec![
                1, 2, 3, 4, 5, 6, 0xAA, 0xAA, //
                7, 8, 9, 10, 11, 12, 0xAA, 0xAA,
            ],
        );

        let rgba = expand_to_rgba(&image).unwrap();

        assert_eq!(
            rgba.buffer(),
            &[
                1, 2, 3, 255, 4, 5, 6, 255, //
                7, 8, 9, 255, 10, 11, 12, 255,
            ]
        );
    }

    #[test]
    fn rgba_rows_keep_their_alpha() {
        let image = decoded(1, 2, true, 4, vec![10, 20, 30, 40, 50, 60, 70, 80]);

        let rgba = expand_to_rgba(&image).unwrap();

        assert_eq!(rgba.pixel(0, 0), Some([10, 20, 30, 40]));
        assert_eq!(rgba.pixel(0, 1), Some([50, 60, 70, 80]));
    }

    #[test]
    fn last_row_may_omit_padding() {
        let image = decoded(1, 2, false, 4, vec![1, 2, 3, 0, 4, 5, 6]);

        let rgba = expand_to_rgba(&image).unwrap();

        assert_eq!(rgba.pixel(0, 1), Some([4, 5, 6, 255]));
    }

    #[test]
    fn short_stride_is_rejected() {
        let image = decoded(4, 1, false, 10, vec![0; 12]);

        assert_eq!(
            expand_to_rgba(&image),
            Err(PixelFormatError::StrideTooShort {
                width: 4,
                row_stride: 10,
                row_bytes: 12,
            })
        );
    }

    #[test]
    fn truncated_buffer_is_rejected() {
        let image = decoded(2, 2, true, 8, vec![0; 12]);

        assert_eq!(
            expand_to_rgba(&image),
            Err(PixelFormatError::BufferTooShort {
                height: 2,
                expected: 16,
                actual: 12,
            })
        );
    }
}
