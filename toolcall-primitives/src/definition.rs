//! Tool definition metadata shared between resolvers and callers.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};

/// Metadata describing a resolvable tool callback.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ToolDefinition {
    name: String,
    version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    input_schema: Option<Value>,
}

impl ToolDefinition {
    /// Creates a definition for the supplied name and version.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDefinition`] if either field is blank.
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(Error::InvalidDefinition {
                reason: "tool name cannot be empty".into(),
            });
        }

        let version = version.into();
        if version.trim().is_empty() {
            return Err(Error::InvalidDefinition {
                reason: "tool version cannot be empty".into(),
            });
        }

        Ok(Self {
            name,
            version,
            description: None,
            input_schema: None,
        })
    }

    /// Sets the human-readable description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Attaches the JSON schema describing the expected input payload.
    #[must_use]
    pub fn with_input_schema(mut self, schema: Value) -> Self {
        self.input_schema = Some(schema);
        self
    }

    /// Returns the tool name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the semantic version string.
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Returns the optional description.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the optional input schema.
    #[must_use]
    pub fn input_schema(&self) -> Option<&Value> {
        self.input_schema.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_definition_with_schema() {
        let definition = ToolDefinition::new("echo", "1.0.0")
            .unwrap()
            .with_description("Echo incoming payload")
            .with_input_schema(serde_json::json!({ "type": "object" }));

        assert_eq!(definition.name(), "echo");
        assert_eq!(definition.version(), "1.0.0");
        assert_eq!(definition.description(), Some("Echo incoming payload"));
        assert!(definition.input_schema().is_some());
    }

    #[test]
    fn blank_fields_error() {
        let err = ToolDefinition::new("", "1.0.0").expect_err("empty name should error");
        assert!(matches!(err, Error::InvalidDefinition { .. }));

        let err = ToolDefinition::new("echo", "   ").expect_err("blank version should error");
        assert!(matches!(err, Error::InvalidDefinition { .. }));
    }
}
