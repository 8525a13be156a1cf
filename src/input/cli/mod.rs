//! Command-line input adapter.

mod args;

pub use args::{parse_args, usage_text, CliArgs, CliCommand};
