use std::path::Path;

use crate::core::data::decoded_image::DecodedImage;
use crate::errors::ViewerError;

pub trait ImageDecoder {
    fn decode(&self, path: &Path) -> Result<DecodedImage, ViewerError>;
}
