// CLI module
// Command-line interface and argument parsing

mod args;

pub use args::{CliArgs, Command};

use clap::Parser;
use log::debug;
use std::ffi::OsString;

/// Parse the process arguments into a command
///
/// See [`parse_from`].
pub fn parse_args() -> Command {
    parse_from(std::env::args_os())
}

/// Parse an argument list (program name first) into a command
///
/// The command name is matched case-insensitively. Anything the parser
/// rejects (unknown command, `--help`, stray flags) and an empty argument
/// list all resolve to [`Command::Help`] instead of a parser error.
/// Arguments that are not valid Unicode are converted lossily, with invalid
/// sequences replaced by U+FFFD.
pub fn parse_from<I, T>(args: I) -> Command
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args: Vec<String> = args
        .into_iter()
        .map(|arg| arg.into().to_string_lossy().into_owned())
        .collect();
    if let Some(name) = args.get_mut(1) {
        *name = name.to_lowercase();
    }

    match CliArgs::try_parse_from(args) {
        Ok(CliArgs {
            command: Some(command),
        }) => command,
        Ok(CliArgs { command: None }) => Command::Help,
        Err(e) => {
            debug!("falling back to help: {:?}", e.kind());
            Command::Help
        }
    }
}
