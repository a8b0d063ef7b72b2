//! Registry-backed tool resolution.
//!
//! [`ToolRegistry`] stores callbacks keyed by their definition name and acts
//! as a [`ToolResolver`](toolcall_resolution::ToolResolver) backend, making
//! it the natural delegate for a
//! [`CachingResolver`](toolcall_resolution::CachingResolver). [`FunctionTool`]
//! wraps plain async closures as callbacks.

#![warn(missing_docs, clippy::pedantic)]

mod function;
mod registry;

/// Closure-backed tool callback and its future alias.
pub use function::{CallbackFuture, FunctionTool};
/// Name-keyed callback registry plus its error and result types.
pub use registry::{RegistryError, RegistryResult, ToolRegistry};
