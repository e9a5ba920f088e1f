//! Property propagation error types.

use std::process::ExitStatus;

use thiserror::Error;

/// Result type for property operations.
pub type PropertyResult<T> = Result<T, PropertyError>;

/// Errors that can occur while publishing a root-window property.
#[derive(Debug, Error)]
pub enum PropertyError {
    /// The xprop binary could not be started.
    #[error("failed to spawn xprop: {0}")]
    Spawn(#[source] std::io::Error),

    /// xprop ran but reported failure.
    #[error("xprop failed for {name}: {status}")]
    CommandFailed {
        /// Property the command was operating on
        name: String,
        /// Exit status reported by xprop
        status: ExitStatus,
    },
}
