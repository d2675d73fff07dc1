//! Validation policies over a fetched token record
//!
//! Two policies share the same liveness rule and differ in how they
//! report failure: the basic policy fails soft (returns `None`) and the
//! strict policy fails hard (returns a `CredentialsError`). Both treat an
//! absent record and an expired record identically in the decision; the
//! distinction survives only in the logs.

use tracing::{error, warn};

use accessgate_core::{AccessToken, CredentialsError};

/// Basic policy: reduce a lookup result to a live record or nothing
///
/// No scope check is performed. Returns `None` for an absent or expired
/// record so the best-effort authenticator can leave the credentials
/// unauthenticated without raising.
pub fn live_or_none(record: Option<AccessToken>, token_id: &str) -> Option<AccessToken> {
    match record {
        Some(token) if !token.is_expired() => Some(token),
        Some(_) => {
            error!(token_id = %token_id, "Access token has expired");
            None
        }
        None => {
            error!(token_id = %token_id, "Access token not found in the ticket registry");
            None
        }
    }
}

/// Strict policy, liveness step: require a live record
///
/// Absent and expired records produce the same error; the lookup key is
/// included for diagnostics.
pub fn require_live(
    record: Option<AccessToken>,
    token_id: &str,
) -> Result<AccessToken, CredentialsError> {
    live_or_none(record, token_id).ok_or_else(|| CredentialsError::NotFoundOrExpired {
        token_id: token_id.to_string(),
    })
}

/// Strict policy, scope step: require a granted scope
///
/// An empty scope set fails like any other missing scope; there is no
/// "unscoped success".
pub fn require_scope(token: &AccessToken, scope: &str) -> Result<(), CredentialsError> {
    if token.has_scope(scope) {
        Ok(())
    } else {
        warn!(
            token_id = %token.id,
            required_scope = %scope,
            granted_scopes = ?token.scopes,
            "Access token is missing the required scope"
        );
        Err(CredentialsError::MissingScope {
            scope: scope.to_string(),
            token_id: token.id.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use accessgate_core::{AuthenticationContext, Principal};
    use chrono::Utc;

    fn token(id: &str) -> AccessToken {
        AccessToken::new(id, AuthenticationContext::new(Principal::new("alice")))
    }

    #[test]
    fn test_live_or_none_passes_live_token() {
        let result = live_or_none(Some(token("AT-1")), "AT-1");
        assert!(result.is_some());
    }

    #[test]
    fn test_live_or_none_absent_and_expired_are_identical() {
        let expired = token("AT-2").with_expires_at(Utc::now() - chrono::Duration::minutes(5));
        assert!(live_or_none(Some(expired), "AT-2").is_none());
        assert!(live_or_none(None, "AT-2").is_none());
    }

    #[test]
    fn test_require_live_mentions_token_id() {
        let err = require_live(None, "AT-3").unwrap_err();
        assert!(err.to_string().contains("AT-3"));
    }

    #[test]
    fn test_require_scope() {
        let t = token("AT-4").with_scope("uma_protection");
        assert!(require_scope(&t, "uma_protection").is_ok());

        let err = require_scope(&t, "uma_authorization").unwrap_err();
        assert!(err.to_string().contains("uma_authorization"));
        assert!(err.to_string().contains("AT-4"));
    }

    #[test]
    fn test_empty_scope_set_fails() {
        let t = token("AT-5");
        assert!(t.scopes.is_empty());
        assert!(require_scope(&t, "uma_protection").is_err());
    }
}
