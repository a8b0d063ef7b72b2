//! Caching decorator that memoizes resolved tool callbacks.

use std::fmt;
use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::OnceCell;
use tracing::debug;

use async_trait::async_trait;
use toolcall_primitives::ToolCallback;

use crate::error::ResolutionResult;
use crate::lifecycle::DestructionListener;
use crate::resolver::ToolResolver;

type CachedEntry = Arc<OnceCell<Option<Arc<dyn ToolCallback>>>>;

/// Caching decorator around a [`ToolResolver`].
///
/// Each name is resolved at most once until evicted: concurrent callers for
/// the same uncached name wait on a single delegate invocation, and the
/// stored value (including a "not found" `None`) is handed out on every
/// subsequent lookup. Entries are write-once; [`remove_cache`](Self::remove_cache)
/// or a component-destruction event is the only way back to an unresolved
/// state. The map is sharded, so lookups for distinct names never wait on one
/// another.
pub struct CachingResolver {
    delegate: Arc<dyn ToolResolver>,
    entries: DashMap<String, CachedEntry>,
}

impl CachingResolver {
    /// Creates a cache around the supplied delegate resolver.
    #[must_use]
    pub fn new(delegate: Arc<dyn ToolResolver>) -> Self {
        Self {
            delegate,
            entries: DashMap::new(),
        }
    }

    /// Drops the cached entry for `name`, if any. Silent no-op when absent.
    ///
    /// A resolution already in flight for `name` still completes for the
    /// callers waiting on it, but its result is not re-stored; the next
    /// lookup resolves afresh.
    pub fn remove_cache(&self, name: &str) {
        if self.entries.remove(name).is_some() {
            debug!(tool = name, "evicted cached tool callback");
        }
    }

    /// Returns `true` when a completed resolution is cached for `name`.
    #[must_use]
    pub fn is_cached(&self, name: &str) -> bool {
        self.entries
            .get(name)
            .is_some_and(|entry| entry.value().initialized())
    }

    /// Number of entries holding a completed resolution.
    #[must_use]
    pub fn cached_len(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.value().initialized())
            .count()
    }
}

impl fmt::Debug for CachingResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cached: Vec<String> = self
            .entries
            .iter()
            .filter(|entry| entry.value().initialized())
            .map(|entry| entry.key().clone())
            .collect();
        f.debug_struct("CachingResolver")
            .field("delegate", &"dyn ToolResolver")
            .field("cached", &cached)
            .finish()
    }
}

#[async_trait]
impl ToolResolver for CachingResolver {
    async fn resolve(&self, name: &str) -> ResolutionResult<Option<Arc<dyn ToolCallback>>> {
        // A blank name signals "no tool requested", not an error.
        if name.trim().is_empty() {
            return Ok(None);
        }

        if let Some(entry) = self.entries.get(name) {
            if let Some(resolved) = entry.value().get() {
                return Ok(resolved.clone());
            }
        }

        let cell = Arc::clone(
            self.entries
                .entry(name.to_owned())
                .or_insert_with(|| Arc::new(OnceCell::new()))
                .value(),
        );

        match cell
            .get_or_try_init(|| async {
                debug!(tool = name, "resolving tool callback");
                self.delegate.resolve(name).await
            })
            .await
        {
            Ok(resolved) => Ok(resolved.clone()),
            Err(err) => {
                // Drop the pending cell so later lookups retry, unless an
                // eviction already installed a replacement under this name.
                self.entries
                    .remove_if(name, |_, candidate| Arc::ptr_eq(candidate, &cell));
                Err(err)
            }
        }
    }
}

impl DestructionListener for CachingResolver {
    fn on_component_destroyed(&self, component_id: &str) {
        self.remove_cache(component_id);
    }
}
