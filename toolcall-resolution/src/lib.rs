//! Cached tool callback resolution.
//!
//! The crate centres on two seams: [`ToolResolver`], the pluggable strategy
//! that turns a tool name into an invokable callback, and
//! [`CachingResolver`], the decorator that memoizes resolved callbacks and
//! evicts them when the host signals that a backing component is being torn
//! down.

#![warn(missing_docs, clippy::pedantic)]

mod cache;
mod error;
mod lifecycle;
mod resolver;

/// Caching decorator around any [`ToolResolver`].
pub use cache::CachingResolver;
/// Error type and result alias for resolution operations.
pub use error::{ResolutionError, ResolutionResult};
/// Host tear-down notifications and the fan-out helper that relays them.
pub use lifecycle::{DestructionListener, DestructionNotifier};
/// Resolver seam and the ordered fallback combinator.
pub use resolver::{DelegatingResolver, ToolResolver};
