//! Core shared types and traits for the toolcall resolution runtime.

#![warn(missing_docs, clippy::pedantic)]

mod callback;
mod definition;
mod error;

/// Invokable callback trait produced by resolvers.
pub use callback::ToolCallback;
/// Tool definition metadata and its builder methods.
pub use definition::ToolDefinition;
/// Error type and result alias shared across the runtime.
pub use error::{Error, Result};
