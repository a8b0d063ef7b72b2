//! Pluggable strategies for locating tool callbacks by name.

use std::sync::Arc;

use async_trait::async_trait;
use toolcall_primitives::ToolCallback;

use crate::error::ResolutionResult;

/// Strategy that converts a tool name into an invokable callback.
///
/// Implementations must be idempotent with respect to resolution: looking up
/// the same name twice without intervening changes to the backing store
/// yields equivalent results, and resolution has no observable side effects
/// beyond producing the callback. `Ok(None)` means the name is genuinely
/// unknown; it is a legitimate answer, not an error, and callers such as
/// [`CachingResolver`](crate::CachingResolver) cache it.
#[async_trait]
pub trait ToolResolver: Send + Sync {
    /// Attempts to locate the callback known under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`ResolutionError`](crate::ResolutionError) when the backend
    /// fails while locating or constructing the callback.
    async fn resolve(&self, name: &str) -> ResolutionResult<Option<Arc<dyn ToolCallback>>>;
}

/// Resolver that consults an ordered list of delegates.
///
/// The first delegate producing a callback wins; `Ok(None)` falls through to
/// the next delegate; failures propagate immediately without consulting the
/// remainder of the chain.
#[derive(Default)]
pub struct DelegatingResolver {
    delegates: Vec<Arc<dyn ToolResolver>>,
}

impl DelegatingResolver {
    /// Creates a resolver over the supplied delegates, consulted in order.
    #[must_use]
    pub fn new(delegates: Vec<Arc<dyn ToolResolver>>) -> Self {
        Self { delegates }
    }

    /// Appends a delegate consulted after all previously added ones.
    #[must_use]
    pub fn with_delegate(mut self, delegate: Arc<dyn ToolResolver>) -> Self {
        self.delegates.push(delegate);
        self
    }
}

impl std::fmt::Debug for DelegatingResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DelegatingResolver")
            .field("delegates", &self.delegates.len())
            .finish()
    }
}

#[async_trait]
impl ToolResolver for DelegatingResolver {
    async fn resolve(&self, name: &str) -> ResolutionResult<Option<Arc<dyn ToolCallback>>> {
        for delegate in &self.delegates {
            if let Some(callback) = delegate.resolve(name).await? {
                return Ok(Some(callback));
            }
        }
        Ok(None)
    }
}
