//! Host-lifecycle integration for cache eviction.
//!
//! The cache never learns about component tear-down on its own; the host
//! environment relays "component X is being destroyed" events through these
//! seams, and the cache treats the component identifier as a candidate cache
//! key.

use std::fmt;
use std::sync::{Arc, RwLock};

use tracing::debug;

/// Receives component tear-down notifications from the host runtime.
///
/// Implementors treat `component_id` as a candidate key into whatever state
/// they hold for that component and must tolerate identifiers they have
/// never seen.
pub trait DestructionListener: Send + Sync {
    /// Called when the component identified by `component_id` is being
    /// destroyed.
    fn on_component_destroyed(&self, component_id: &str);
}

/// Fan-out helper that relays destruction events to registered listeners.
///
/// Stands in for any host container able to emit destruction events.
/// Subscribing a [`CachingResolver`](crate::CachingResolver) keeps its cache
/// from outliving the components that back its entries.
#[derive(Default)]
pub struct DestructionNotifier {
    listeners: RwLock<Vec<Arc<dyn DestructionListener>>>,
}

impl DestructionNotifier {
    /// Creates a notifier with no listeners.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a listener for subsequent destruction events.
    ///
    /// # Panics
    ///
    /// Panics if the internal listener lock is poisoned.
    pub fn subscribe(&self, listener: Arc<dyn DestructionListener>) {
        let mut listeners = self.listeners.write().expect("listener set poisoned");
        listeners.push(listener);
    }

    /// Relays a destruction event for `component_id` to every listener.
    ///
    /// # Panics
    ///
    /// Panics if the internal listener lock is poisoned.
    pub fn notify(&self, component_id: &str) {
        let listeners = self.listeners.read().expect("listener set poisoned");
        debug!(
            component_id,
            listeners = listeners.len(),
            "relaying component destruction"
        );
        for listener in listeners.iter() {
            listener.on_component_destroyed(component_id);
        }
    }
}

impl fmt::Debug for DestructionNotifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let listeners = self.listeners.read().expect("listener set poisoned");
        f.debug_struct("DestructionNotifier")
            .field("listeners", &listeners.len())
            .finish()
    }
}
