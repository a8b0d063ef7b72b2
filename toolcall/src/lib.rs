//! Cached tool callback resolution facade.
//!
//! Depend on this crate via `cargo add toolcall`. It bundles the resolution
//! runtime crates behind feature flags so downstream users can enable or
//! disable components as needed.

#![warn(missing_docs, clippy::pedantic)]

/// Re-export shared primitives for convenience.
pub use toolcall_primitives as primitives;

/// Resolver seam, caching decorator, and lifecycle eviction (enabled by the
/// `resolution` feature).
#[cfg(feature = "resolution")]
pub use toolcall_resolution as resolution;

/// Registry-backed resolver and closure callbacks (enabled by the `registry`
/// feature).
#[cfg(feature = "registry")]
pub use toolcall_registry as registry;
