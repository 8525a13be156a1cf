/// A region of the source image that gets its own texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureSlice {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl TextureSlice {
    #[must_use]
    pub fn whole(width: u32, height: u32) -> Self {
        Self {
            x: 0,
            y: 0,
            width,
            height,
        }
    }

    #[cfg(test)]
    pub fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}
