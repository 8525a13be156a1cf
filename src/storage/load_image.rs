use std::path::Path;

use image::{DynamicImage, ImageReader};

use crate::adapters::pixel_format::expand_to_rgba;
use crate::core::data::decoded_image::DecodedImage;
use crate::core::data::rgba_image::RgbaImage;
use crate::core::ports::image_decoder::ImageDecoder;
use crate::errors::ViewerError;

/// Decodes `path` and repacks it as RGBA8 ready for upload.
pub fn load_rgba_image(decoder: &impl ImageDecoder, path: &Path) -> Result<RgbaImage, ViewerError> {
    let decoded = decoder.decode(path)?;
    Ok(expand_to_rgba(&decoded)?)
}

/// Decodes image files with the `image` crate, sniffing the format from the
/// file contents rather than the extension.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileImageDecoder;

impl FileImageDecoder {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ImageDecoder for FileImageDecoder {
    fn decode(&self, path: &Path) -> Result<DecodedImage, ViewerError> {
        let open_error = |source| ViewerError::ImageOpen {
            path: path.to_path_buf(),
            source,
        };
        let decode_error = |source| ViewerError::ImageDecode {
            path: path.to_path_buf(),
            source,
        };

        let decoded = ImageReader::open(path)
            .map_err(open_error)?
            .with_guessed_format()
            .map_err(open_error)?
            .decode()
            .map_err(decode_error)?;

        let image = into_decoded_image(decoded);
        tracing::info!(
            path = %path.display(),
            width = image.width,
            height = image.height,
            has_alpha = image.has_alpha,
            row_stride = image.row_stride,
            "image decoded"
        );

        Ok(image)
    }
}

fn into_decoded_image(decoded: DynamicImage) -> DecodedImage {
    let width = decoded.width();
    let height = decoded.height();

    if decoded.color().has_alpha() {
        DecodedImage {
            width,
            height,
            has_alpha: true,
            row_stride: width as usize * 4,
            pixels: decoded.into_rgba8().into_raw(),
        }
    } else {
        DecodedImage {
            width,
            height,
            has_alpha: false,
            row_stride: width as usize * 3,
            pixels: decoded.into_rgb8().into_raw(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage, Rgba};

    #[test]
    fn decodes_rgb_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("opaque.png");
        RgbImage::from_pixel(3, 2, Rgb([10, 20, 30])).save(&path).unwrap();

        let image = FileImageDecoder::new().decode(&path).unwrap();

        assert_eq!((image.width, image.height), (3, 2));
        assert!(!image.has_alpha);
        assert_eq!(image.row_stride, 9);
        assert_eq!(&image.pixels[..3], &[10, 20, 30]);
    }

    #[test]
    fn decodes_rgba_png_with_alpha() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("translucent.png");
        image::RgbaImage::from_pixel(2, 2, Rgba([1, 2, 3, 4])).save(&path).unwrap();

        let image = FileImageDecoder::new().decode(&path).unwrap();

        assert!(image.has_alpha);
        assert_eq!(image.row_stride, 8);
        assert_eq!(image.pixels.len(), 16);
    }

    #[test]
    fn format_is_sniffed_from_contents() {
        let dir = tempfile::tempdir().unwrap();
        let png_path = dir.path().join("real.png");
        RgbImage::from_pixel(1, 1, Rgb([0, 0, 0])).save(&png_path).unwrap();
        let disguised = dir.path().join("picture.data");
        std::fs::copy(&png_path, &disguised).unwrap();

        let image = FileImageDecoder::new().decode(&disguised).unwrap();

        assert_eq!((image.width, image.height), (1, 1));
    }

    #[test]
    fn load_rgba_image_expands_opaque_images() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("opaque.png");
        RgbImage::from_pixel(2, 1, Rgb([7, 8, 9])).save(&path).unwrap();

        let image = load_rgba_image(&FileImageDecoder::new(), &path).unwrap();

        assert_eq!(image.buffer(), &[7, 8, 9, 255, 7, 8, 9, 255]);
    }

    #[test]
    fn missing_file_is_an_open_error() {
        let dir = tempfile::tempdir().unwrap();

        let result = FileImageDecoder::new().decode(&dir.path().join("absent.png"));

        assert!(matches!(result, Err(ViewerError::ImageOpen { .. })));
    }

    #[test]
    fn garbage_is_a_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("garbage.png");
        std::fs::write(&path, b"definitely not an image").unwrap();

        let result = FileImageDecoder::new().decode(&path);

        assert!(matches!(result, Err(ViewerError::ImageDecode { .. })));
    }
}
