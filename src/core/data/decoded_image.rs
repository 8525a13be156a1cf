/// Pixels as the decoder produced them: RGB8 or RGBA8 rows, each
/// `row_stride` bytes apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub has_alpha: bool,
    pub row_stride: usize,
    pub pixels: Vec<u8>,
}

impl DecodedImage {
    #[must_use]
    pub fn bytes_per_pixel(&self) -> usize {
        if self.has_alpha { 4 } else { 3 }
    }
}
