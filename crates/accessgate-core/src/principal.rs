//! The authenticated subject and its attributes

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The authenticated subject: a stable identifier plus attributes that
/// belong to the subject itself, independent of any authentication event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Principal {
    /// Subject identifier (e.g., "alice")
    pub id: String,

    /// Attributes of the subject (keys unique)
    #[serde(default)]
    pub attributes: HashMap<String, serde_json::Value>,
}

impl Principal {
    /// Create a new principal with no attributes
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            attributes: HashMap::new(),
        }
    }

    /// Add an attribute
    pub fn with_attribute(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.attributes.insert(key.into(), value);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_principal_attributes() {
        let principal = Principal::new("alice")
            .with_attribute("email", serde_json::json!("alice@example.org"))
            .with_attribute("display_name", serde_json::json!("Alice"));

        assert_eq!(principal.id, "alice");
        assert_eq!(
            principal.attributes.get("email"),
            Some(&serde_json::json!("alice@example.org"))
        );
    }
}
