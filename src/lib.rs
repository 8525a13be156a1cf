pub mod adapters;
pub mod config;
pub mod core;
pub mod errors;
pub mod input;
mod presenters;
pub mod storage;

pub use config::ViewerConfig;
pub use errors::ViewerError;
pub use input::cli::{parse_args, CliCommand};

#[cfg(feature = "gui")]
pub use input::gui::RunGuiCommand;
#[cfg(feature = "gui")]
pub use presenters::pixels::factory::PixelsPresenterFactory;

/// Loads the configured image and shows it until the window is closed.
#[cfg(feature = "gui")]
pub fn run(config: ViewerConfig) -> Result<(), ViewerError> {
    let image = storage::load_image::load_rgba_image(
        &storage::load_image::FileImageDecoder::new(),
        &config.image_path,
    )?;

    RunGuiCommand::new(PixelsPresenterFactory::new()).execute(config, image)
}
