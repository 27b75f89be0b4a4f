//! External kubectl invocation for terminal actions.
//!
//! The dispatcher composes one [`Invocation`] per run; this module turns it
//! into a child process. Remote effects are opaque to the rest of the
//! crate, so building and running are separated and only [`run`] touches
//! the process boundary.

use std::io;
use std::process::Command;

use thiserror::Error;
use tracing::debug;

/// Errors launching the external program.
#[derive(Debug, Error)]
pub enum ExecError {
    #[error("failed to launch '{program}': {source}")]
    Launch {
        program: String,
        #[source]
        source: io::Error,
    },
}

/// A fully composed kubectl argv, without the program itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Invocation {
    args: Vec<String>,
}

impl Invocation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pass `--context` when a kubeconfig context is configured.
    pub fn with_context(mut self, context: Option<&str>) -> Self {
        if let Some(context) = context {
            self.args.push("--context".to_string());
            self.args.push(context.to_string());
        }
        self
    }

    /// Target namespace for the invocation.
    pub fn with_namespace(mut self, namespace: &str) -> Self {
        self.args.push("--namespace".to_string());
        self.args.push(namespace.to_string());
        self
    }

    /// Append a single argument.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append a run of arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// The composed argv.
    pub fn argv(&self) -> &[String] {
        &self.args
    }
}

/// Run the invocation, inheriting stdio, and return its exit code.
///
/// A child terminated by a signal has no code; that maps to 1.
pub fn run(program: &str, invocation: &Invocation) -> Result<i32, ExecError> {
    debug!(program = %program, args = ?invocation.argv(), "running external command");
    let status = Command::new(program)
        .args(invocation.argv())
        .status()
        .map_err(|source| ExecError::Launch {
            program: program.to_string(),
            source,
        })?;
    Ok(status.code().unwrap_or(1))
}
