//! Authentication-time snapshot attached to a token record

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::principal::Principal;

/// The snapshot taken when a grant was issued: the principal plus
/// attributes asserted at authentication time
///
/// Authentication attributes live in a separate namespace from the
/// principal's own attributes; which namespace wins on a key collision is
/// a policy decision made by the profile builder, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthenticationContext {
    /// The authenticated principal
    pub principal: Principal,

    /// Attributes asserted at authentication time (keys unique)
    #[serde(default)]
    pub attributes: HashMap<String, serde_json::Value>,
}

impl AuthenticationContext {
    /// Create a new authentication context with no attributes of its own
    pub fn new(principal: Principal) -> Self {
        Self {
            principal,
            attributes: HashMap::new(),
        }
    }

    /// Add an authentication-time attribute
    pub fn with_attribute(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.attributes.insert(key.into(), value);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_namespaces_are_distinct() {
        let ctx = AuthenticationContext::new(
            Principal::new("alice").with_attribute("email", serde_json::json!("subject@example.org")),
        )
        .with_attribute("email", serde_json::json!("asserted@example.org"));

        // Same key, two namespaces, both preserved until a builder merges them
        assert_eq!(
            ctx.principal.attributes.get("email"),
            Some(&serde_json::json!("subject@example.org"))
        );
        assert_eq!(
            ctx.attributes.get("email"),
            Some(&serde_json::json!("asserted@example.org"))
        );
    }
}
