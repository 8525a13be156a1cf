use std::path::PathBuf;

use thiserror::Error;

use crate::adapters::pixel_format::PixelFormatError;
use crate::core::data::rgba_image::RgbaImageError;

#[derive(Debug, Error)]
pub enum ViewerError {
    #[error("failed to open {}: {source}", path.display())]
    ImageOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode {}: {source}", path.display())]
    ImageDecode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error(transparent)]
    PixelFormat(#[from] PixelFormatError),
    #[error(transparent)]
    RgbaImage(#[from] RgbaImageError),
    #[error("texture of {width}x{height} could not be allocated, even sliced")]
    TextureAllocation { width: u32, height: u32 },
    #[cfg(feature = "gui")]
    #[error("failed to create event loop: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
    #[cfg(feature = "gui")]
    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),
    #[cfg(feature = "gui")]
    #[error("surface error: {0}")]
    Surface(#[from] pixels::Error),
}
