use std::path::PathBuf;

use crate::core::filtering::FilterMode;

pub const DEFAULT_WINDOW_WIDTH: u32 = 1920;
pub const DEFAULT_WINDOW_HEIGHT: u32 = 1080;
pub const WINDOW_TITLE: &str = "Texture Viewer";

/// Everything the viewer needs to know before opening a window.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerConfig {
    pub image_path: PathBuf,
    pub filter_mode: FilterMode,
    pub window_width: u32,
    pub window_height: u32,
    /// Linear RGBA the surface is cleared to before drawing.
    pub clear_colour: [f64; 4],
}

impl ViewerConfig {
    #[must_use]
    pub fn new(image_path: impl Into<PathBuf>, filter_mode: FilterMode) -> Self {
        Self {
            image_path: image_path.into(),
            filter_mode,
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            clear_colour: [0.0, 0.0, 0.0, 1.0],
        }
    }
}
