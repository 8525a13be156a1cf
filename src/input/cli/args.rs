use std::ffi::OsString;
use std::fmt::Write;
use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

use crate::config::ViewerConfig;
use crate::core::filtering::FilterMode;

/// Display an image through a GPU texture with a chosen minification filter.
#[derive(Debug, Parser)]
#[command(name = "texture-viewer", version, allow_negative_numbers = true, arg_required_else_help = true)]
pub struct CliArgs {
    /// Image file to display.
    #[arg(value_name = "IMAGE_FILE_PATH")]
    pub image_file_path: PathBuf,

    /// Position in the filter table, 0 to 5.
    #[arg(value_name = "FILTER_INDEX")]
    pub filter_mode: FilterMode,
}

#[derive(Debug)]
pub enum CliCommand {
    Run(ViewerConfig),
    /// Not enough arguments: print this and exit successfully.
    Usage(String),
}

impl From<CliArgs> for ViewerConfig {
    fn from(args: CliArgs) -> Self {
        ViewerConfig::new(args.image_file_path, args.filter_mode)
    }
}

/// Parses the process arguments. Missing arguments are not an error; they
/// produce [`CliCommand::Usage`].
pub fn parse_args<I, T>(args: I) -> Result<CliCommand, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match CliArgs::try_parse_from(args) {
        Ok(args) => Ok(CliCommand::Run(args.into())),
        Err(error)
            if matches!(
                error.kind(),
                ErrorKind::MissingRequiredArgument | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
            ) =>
        {
            Ok(CliCommand::Usage(usage_text()))
        }
        Err(error) => Err(error),
    }
}

#[must_use]
pub fn usage_text() -> String {
    let mut text = CliArgs::command().render_usage().to_string();
    text.push_str("\n\nFILTER INDEX\n");
    for (index, mode) in FilterMode::ALL.iter().enumerate() {
        let _ = writeln!(text, "{index}: {}", mode.display_name());
    }
    text
}
