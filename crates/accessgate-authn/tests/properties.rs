//! Property-Based Tests for the Authentication Pipeline
//!
//! Verifies the pipeline's deterministic properties for arbitrary inputs:
//!
//! 1. Extraction is deterministic and whitespace-insensitive at the edges
//! 2. The merge precedence of each profile builder holds for any
//!    colliding attribute value, not just the canonical "email" case
//! 3. Gated permissions always equal the token's scope set exactly
//!
//! Uses proptest for property-based testing with arbitrary inputs.

use proptest::prelude::*;

use accessgate_authn::{
    build_profile, build_scoped_profile, AccessToken, AuthenticationContext,
    PlainTokenIdExtractor, Principal, TokenIdExtractor,
};

fn conflicted_token(key: &str, principal_value: &str, authn_value: &str) -> AccessToken {
    let principal = Principal::new("alice").with_attribute(key, serde_json::json!(principal_value));
    let authentication =
        AuthenticationContext::new(principal).with_attribute(key, serde_json::json!(authn_value));
    AccessToken::new("AT-prop", authentication)
}

proptest! {
    /// Same raw token, same lookup key, always
    #[test]
    fn prop_extraction_is_deterministic(raw in "[A-Za-z0-9_-]{1,64}") {
        let extractor = PlainTokenIdExtractor;
        prop_assert_eq!(extractor.extract_id(&raw), extractor.extract_id(&raw));
    }

    /// Trimming before extraction makes surrounding whitespace irrelevant
    #[test]
    fn prop_surrounding_whitespace_never_changes_the_key(
        raw in "[A-Za-z0-9_-]{1,64}",
        pad_left in "[ \t]{0,4}",
        pad_right in "[ \t\n]{0,4}",
    ) {
        let extractor = PlainTokenIdExtractor;
        let padded = format!("{pad_left}{raw}{pad_right}");
        prop_assert_eq!(extractor.extract_id(padded.trim()), extractor.extract_id(&raw));
    }

    /// Best-effort merge: the authentication-context value wins for any
    /// colliding key and value pair
    #[test]
    fn prop_best_effort_merge_authn_wins(
        key in "[a-z]{1,12}",
        principal_value in "[a-z0-9]{1,16}",
        authn_value in "[a-z0-9]{1,16}",
    ) {
        let token = conflicted_token(&key, &principal_value, &authn_value);
        let profile = build_profile(&token);
        prop_assert_eq!(
            profile.attributes.get(&key),
            Some(&serde_json::json!(authn_value))
        );
    }

    /// Gated merge: the principal value wins for any colliding key and
    /// value pair
    #[test]
    fn prop_gated_merge_principal_wins(
        key in "[a-z]{1,12}",
        principal_value in "[a-z0-9]{1,16}",
        authn_value in "[a-z0-9]{1,16}",
    ) {
        let token = conflicted_token(&key, &principal_value, &authn_value);
        let profile = build_scoped_profile(&token).unwrap();
        prop_assert_eq!(
            profile.attributes.get(&key),
            Some(&serde_json::json!(principal_value))
        );
    }

    /// Gated permissions are exactly the token's scopes: no additions, no
    /// omissions, duplicates collapsed by set semantics
    #[test]
    fn prop_gated_permissions_equal_scopes(
        scopes in proptest::collection::vec("[a-z_]{1,16}", 0..8),
    ) {
        let token = conflicted_token("email", "a", "b").with_scopes(scopes);
        let profile = build_scoped_profile(&token).unwrap();
        prop_assert_eq!(&profile.permissions, &token.scopes);
    }
}
