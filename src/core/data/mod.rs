pub mod decoded_image;
pub mod quad;
pub mod rgba_image;
pub mod texture_slice;
