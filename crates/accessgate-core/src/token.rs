//! The registry-owned access-token record

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::authentication::AuthenticationContext;

/// A token record as held by the ticket registry
///
/// Read-only to the authentication pipeline: records are created and
/// destroyed by the issuing side, and once a record has expired it never
/// transitions back to valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessToken {
    /// Token identifier (the registry lookup key)
    pub id: String,

    /// Authentication snapshot taken when the grant was issued
    pub authentication: AuthenticationContext,

    /// Granted scopes (no duplicates, order irrelevant)
    #[serde(default)]
    pub scopes: BTreeSet<String>,

    /// When the token expires (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,

    /// Whether the token has been explicitly invalidated
    #[serde(default)]
    pub revoked: bool,
}

impl AccessToken {
    /// Create a new token record
    pub fn new(id: impl Into<String>, authentication: AuthenticationContext) -> Self {
        Self {
            id: id.into(),
            authentication,
            scopes: BTreeSet::new(),
            expires_at: None,
            revoked: false,
        }
    }

    /// Grant a scope
    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scopes.insert(scope.into());
        self
    }

    /// Grant a set of scopes
    pub fn with_scopes<I, S>(mut self, scopes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.scopes.extend(scopes.into_iter().map(Into::into));
        self
    }

    /// Set expiration time
    pub fn with_expires_at(mut self, expires_at: DateTime<Utc>) -> Self {
        self.expires_at = Some(expires_at);
        self
    }

    /// Check whether the token is expired (revoked counts as expired)
    pub fn is_expired(&self) -> bool {
        if self.revoked {
            return true;
        }
        match self.expires_at {
            Some(exp) => exp < Utc::now(),
            None => false,
        }
    }

    /// Check whether a scope was granted
    pub fn has_scope(&self, scope: &str) -> bool {
        self.scopes.contains(scope)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::principal::Principal;

    fn token(id: &str) -> AccessToken {
        AccessToken::new(id, AuthenticationContext::new(Principal::new("alice")))
    }

    #[test]
    fn test_token_without_expiry_is_live() {
        assert!(!token("AT-1").is_expired());
    }

    #[test]
    fn test_expired_token() {
        let t = token("AT-2").with_expires_at(Utc::now() - chrono::Duration::hours(1));
        assert!(t.is_expired());
    }

    #[test]
    fn test_revoked_token_is_expired() {
        let mut t = token("AT-3").with_expires_at(Utc::now() + chrono::Duration::hours(1));
        assert!(!t.is_expired());
        t.revoked = true;
        assert!(t.is_expired());
    }

    #[test]
    fn test_scope_set_deduplicates() {
        let t = token("AT-4")
            .with_scope("uma_protection")
            .with_scopes(vec!["uma_protection", "read"]);

        assert_eq!(t.scopes.len(), 2);
        assert!(t.has_scope("uma_protection"));
        assert!(!t.has_scope("write"));
    }
}
