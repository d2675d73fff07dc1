//! The identity profile materialized from a validated token

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

/// Well-known attribute name under which the scope-gated authenticator
/// attaches a snapshot of the source token record, for downstream
/// consumers that need the original grant (e.g., UMA permission-ticket
/// issuance)
pub const ACCESS_TOKEN_ATTRIBUTE: &str = "urn:accessgate:access-token";

/// An authenticated identity profile
///
/// Built fresh on every successful validation and handed to the caller;
/// it has no persistence of its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Subject identifier, taken from the principal
    pub id: String,

    /// Merged attribute mapping (keys unique)
    #[serde(default)]
    pub attributes: HashMap<String, serde_json::Value>,

    /// Permissions copied from the token's scope set (scope-gated variant
    /// only; empty for the best-effort variant)
    #[serde(default)]
    pub permissions: BTreeSet<String>,
}

impl UserProfile {
    /// Create a new profile for a subject
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            attributes: HashMap::new(),
            permissions: BTreeSet::new(),
        }
    }

    /// Add a single attribute, replacing any existing value for the key
    pub fn add_attribute(&mut self, key: impl Into<String>, value: serde_json::Value) {
        self.attributes.insert(key.into(), value);
    }

    /// Overlay a map of attributes; entries applied here win over entries
    /// already present on key collision
    pub fn add_attributes(&mut self, attributes: &HashMap<String, serde_json::Value>) {
        for (key, value) in attributes {
            self.attributes.insert(key.clone(), value.clone());
        }
    }

    /// Add permissions
    pub fn add_permissions<I, S>(&mut self, permissions: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.permissions.extend(permissions.into_iter().map(Into::into));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_later_overlay_wins() {
        let mut profile = UserProfile::new("alice");

        let mut first = HashMap::new();
        first.insert("email".to_string(), serde_json::json!("a"));
        first.insert("locale".to_string(), serde_json::json!("en"));

        let mut second = HashMap::new();
        second.insert("email".to_string(), serde_json::json!("b"));

        profile.add_attributes(&first);
        profile.add_attributes(&second);

        assert_eq!(profile.attributes.get("email"), Some(&serde_json::json!("b")));
        assert_eq!(profile.attributes.get("locale"), Some(&serde_json::json!("en")));
    }

    #[test]
    fn test_permissions_are_a_set() {
        let mut profile = UserProfile::new("alice");
        profile.add_permissions(vec!["read", "read", "write"]);
        assert_eq!(profile.permissions.len(), 2);
    }
}
