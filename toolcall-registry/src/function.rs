//! Closure-backed tool callbacks.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use toolcall_primitives::{Result as ToolResult, ToolCallback, ToolDefinition};

/// Future alias produced by function-backed callbacks.
pub type CallbackFuture = Pin<Box<dyn Future<Output = ToolResult<Value>> + Send>>;

/// Tool callback backed by a plain async function or closure.
pub struct FunctionTool {
    definition: ToolDefinition,
    handler: Box<dyn Fn(Value) -> CallbackFuture + Send + Sync>,
}

impl FunctionTool {
    /// Creates a callback from a definition and an async handler.
    pub fn new<F, Fut>(definition: ToolDefinition, handler: F) -> Self
    where
        F: Fn(Value) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ToolResult<Value>> + Send + 'static,
    {
        Self {
            definition,
            handler: Box::new(move |input| Box::pin(handler(input))),
        }
    }

    /// Creates the callback directly as a shared trait object.
    #[must_use]
    pub fn shared<F, Fut>(definition: ToolDefinition, handler: F) -> Arc<dyn ToolCallback>
    where
        F: Fn(Value) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ToolResult<Value>> + Send + 'static,
    {
        Arc::new(Self::new(definition, handler))
    }
}

impl std::fmt::Debug for FunctionTool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FunctionTool")
            .field("definition", &self.definition)
            .finish()
    }
}

#[async_trait]
impl ToolCallback for FunctionTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn call(&self, input: Value) -> ToolResult<Value> {
        (self.handler)(input).await
    }
}
