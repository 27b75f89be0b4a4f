//! Dispatch-error taxonomy for the command tree.

use thiserror::Error;

use crate::flags::ParseError;

/// Errors produced while walking the command tree.
///
/// Like [`ParseError`], every variant is a deterministic input-validation
/// failure. All of them surface at the binary edge as usage text plus an
/// `ERROR:` line.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DispatchError {
    /// A flag-parse pass at some level failed.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The leading token matches no top-level command.
    #[error("unknown command '{name}'")]
    UnknownCommand { name: String },

    /// The leading token matches no subcommand of `parent`.
    #[error("unknown '{parent}' subcommand '{name}'")]
    UnknownSubcommand { parent: String, name: String },

    /// Nothing left after the global flags.
    #[error("no command given")]
    MissingCommand,

    /// A command is missing a required positional argument.
    #[error("'{command}' requires {what}")]
    MissingArgument { command: String, what: String },

    /// Tokens remain after a terminal command's grammar was consumed.
    #[error("extraneous arguments: {}", .args.join(" "))]
    ExtraneousArguments { args: Vec<String> },
}
