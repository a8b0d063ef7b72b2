//! Runtime registry of tool callbacks keyed by name.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use toolcall_primitives::{ToolCallback, ToolDefinition};
use toolcall_resolution::{ResolutionResult, ToolResolver};

/// Result alias for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Registry that stores tool callbacks keyed by their definition name.
///
/// Callbacks may be registered and removed at runtime; resolution through the
/// [`ToolResolver`] impl is a plain lookup and never fails.
#[derive(Default)]
pub struct ToolRegistry {
    inner: RwLock<HashMap<String, Arc<dyn ToolCallback>>>,
}

impl std::fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.read().expect("tool registry poisoned");
        let names: Vec<_> = inner.keys().cloned().collect();
        f.debug_struct("ToolRegistry")
            .field("registered", &names)
            .finish()
    }
}

impl ToolRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a tool callback under its definition name.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateTool`] if the name is already
    /// present.
    ///
    /// # Panics
    ///
    /// Panics if the internal registry lock is poisoned.
    pub fn register(&self, callback: Arc<dyn ToolCallback>) -> RegistryResult<()> {
        let name = callback.definition().name().to_owned();
        let mut inner = self.inner.write().expect("tool registry poisoned");
        if inner.contains_key(&name) {
            return Err(RegistryError::DuplicateTool { name });
        }

        debug!(tool = %name, "registered tool callback");
        inner.insert(name, callback);
        Ok(())
    }

    /// Removes the callback registered under `name`, returning it if present.
    ///
    /// # Panics
    ///
    /// Panics if the internal registry lock is poisoned.
    pub fn remove(&self, name: &str) -> Option<Arc<dyn ToolCallback>> {
        let mut inner = self.inner.write().expect("tool registry poisoned");
        let removed = inner.remove(name);
        if removed.is_some() {
            debug!(tool = name, "removed tool callback");
        }
        removed
    }

    /// Returns the callback matching the supplied name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Arc<dyn ToolCallback>> {
        let inner = self.inner.read().ok()?;
        inner.get(name).cloned()
    }

    /// Lists the definitions of all registered callbacks.
    ///
    /// # Panics
    ///
    /// Panics if the internal registry lock is poisoned.
    #[must_use]
    pub fn list(&self) -> Vec<ToolDefinition> {
        let inner = self.inner.read().expect("tool registry poisoned");
        inner
            .values()
            .map(|callback| callback.definition().clone())
            .collect()
    }

    /// Invokes a registered callback directly.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UnknownTool`] when the tool is not found or
    /// propagates the callback's own failure.
    pub async fn invoke(&self, name: &str, input: Value) -> RegistryResult<Value> {
        let callback = self.get(name).ok_or_else(|| RegistryError::UnknownTool {
            name: name.to_owned(),
        })?;
        Ok(callback.call(input).await?)
    }
}

#[async_trait]
impl ToolResolver for ToolRegistry {
    async fn resolve(&self, name: &str) -> ResolutionResult<Option<Arc<dyn ToolCallback>>> {
        Ok(self.get(name))
    }
}

/// Errors produced by tool registration and invocation.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Tool name collided with an existing registration.
    #[error("tool `{name}` is already registered")]
    DuplicateTool {
        /// Name of the offending tool.
        name: String,
    },

    /// Requested tool does not exist.
    #[error("tool `{name}` is not registered")]
    UnknownTool {
        /// Name of the missing tool.
        name: String,
    },

    /// Callback execution failed.
    #[error(transparent)]
    Callback(#[from] toolcall_primitives::Error),
}
