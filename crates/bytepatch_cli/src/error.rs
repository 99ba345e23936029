//! CLI error type.

use bytepatch_core::PatchError;
use thiserror::Error;

/// Errors surfaced by the command-line front end.
#[derive(Debug, Error)]
pub enum CliError {
    /// The arguments do not match any invocation form.
    #[error("unrecognized invocation")]
    Usage,

    /// A command failed.
    #[error(transparent)]
    Patch(#[from] PatchError),
}

/// Result type for command implementations.
pub type CliResult<T> = Result<T, CliError>;
