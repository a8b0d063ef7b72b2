//! Shared error definitions for tool primitives.

use thiserror::Error;

/// Result alias used throughout the toolcall runtime.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while describing or invoking tool callbacks.
#[derive(Debug, Error)]
pub enum Error {
    /// Tool definition failed validation.
    #[error("invalid tool definition: {reason}")]
    InvalidDefinition {
        /// Human-readable reason for rejection.
        reason: String,
    },

    /// Tool callback execution failed.
    #[error("tool execution failed: {reason}")]
    Execution {
        /// Human-readable error returned by the callback.
        reason: String,
    },
}

impl Error {
    /// Creates an execution error from the supplied reason.
    #[must_use]
    pub fn execution(reason: impl Into<String>) -> Self {
        Self::Execution {
            reason: reason.into(),
        }
    }
}
