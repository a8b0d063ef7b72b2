//! Error definitions for tool resolution.

use thiserror::Error;

/// Result alias for resolution operations.
pub type ResolutionResult<T> = Result<T, ResolutionError>;

/// Errors surfaced while resolving tool callbacks.
///
/// "Tool not found" is never an error; resolvers report it as `Ok(None)` so
/// the absence itself can be cached.
#[derive(Debug, Error)]
pub enum ResolutionError {
    /// The underlying resolver failed while constructing the callback.
    #[error("resolution failed for tool `{name}`: {reason}")]
    Failed {
        /// Name of the tool whose resolution failed.
        name: String,
        /// Human-readable context provided by the resolver backend.
        reason: String,
    },
}

impl ResolutionError {
    /// Convenience helper to construct resolution failures.
    #[must_use]
    pub fn failed(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Failed {
            name: name.into(),
            reason: reason.into(),
        }
    }
}
