use std::process::ExitCode;

use texture_viewer::CliCommand;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .try_init();

    let command = match texture_viewer::parse_args(std::env::args_os()) {
        Ok(command) => command,
        Err(error) => error.exit(),
    };

    match command {
        CliCommand::Usage(usage) => {
            println!("{usage}");
            ExitCode::SUCCESS
        }
        CliCommand::Run(config) => match texture_viewer::run(config) {
            Ok(()) => ExitCode::SUCCESS,
            Err(error) => {
                tracing::error!(%error, "texture viewer failed");
                ExitCode::FAILURE
            }
        },
    }
}
