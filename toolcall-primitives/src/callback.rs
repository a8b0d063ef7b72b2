//! Invokable tool callbacks produced by resolution.

use async_trait::async_trait;
use serde_json::Value;

use crate::definition::ToolDefinition;
use crate::error::Result;

/// A named capability that can be invoked with a JSON payload.
///
/// Resolvers hand these out as `Arc<dyn ToolCallback>`. The definition names
/// the callback and describes its input surface; the name is also the key
/// under which resolvers and caches track the callback.
#[async_trait]
pub trait ToolCallback: Send + Sync {
    /// Returns the definition describing this callback.
    fn definition(&self) -> &ToolDefinition;

    /// Returns the callback name, shorthand for `definition().name()`.
    fn name(&self) -> &str {
        self.definition().name()
    }

    /// Invokes the callback with the given JSON input, returning JSON output.
    ///
    /// # Errors
    ///
    /// Propagates [`Error::Execution`](crate::Error::Execution) when the
    /// underlying implementation fails.
    async fn call(&self, input: Value) -> Result<Value>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct UpperCallback {
        definition: ToolDefinition,
    }

    #[async_trait]
    impl ToolCallback for UpperCallback {
        fn definition(&self) -> &ToolDefinition {
            &self.definition
        }

        async fn call(&self, input: Value) -> Result<Value> {
            let text = input
                .as_str()
                .ok_or_else(|| crate::Error::execution("expected a string payload"))?;
            Ok(Value::String(text.to_uppercase()))
        }
    }

    #[tokio::test]
    async fn callback_exposes_name_and_invokes() {
        let callback = UpperCallback {
            definition: ToolDefinition::new("upper", "1.0.0").unwrap(),
        };

        assert_eq!(callback.name(), "upper");
        let output = callback.call(Value::String("mesh".into())).await.unwrap();
        assert_eq!(output, Value::String("MESH".into()));
    }

    #[tokio::test]
    async fn callback_surfaces_execution_errors() {
        let callback = UpperCallback {
            definition: ToolDefinition::new("upper", "1.0.0").unwrap(),
        };

        let err = callback
            .call(Value::Null)
            .await
            .expect_err("non-string payload should error");
        assert!(matches!(err, crate::Error::Execution { .. }));
    }
}
