// CLI module
// Command-line interface and argument parsing

mod args;

pub use args::CliArgs;

use clap::Parser;

/// Parse command-line arguments using clap
///
/// If parsing fails (e.g. an unknown flag) or `--help` is given, clap prints
/// the message and exits the process.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}
