//! Profile materialization from a validated token record
//!
//! Pure transformation over already-fetched data: no network or storage
//! side effects. The two builders differ in attribute-merge precedence,
//! and the precedence difference is intentional policy, not an accident:
//! the best-effort pipeline trusts what was asserted at authentication
//! time, while the scope-gated pipeline lets the principal's own
//! attributes have the last word. Downstream consumers depend on which
//! source wins for a given variant.

use tracing::debug;

use accessgate_core::{
    AccessToken, CredentialsError, RegistryError, UserProfile, ACCESS_TOKEN_ATTRIBUTE,
};

/// Build the best-effort profile for a live token
///
/// Subject id is the principal's id. Principal attributes are applied
/// first, then authentication-context attributes overlay them, so the
/// authentication context wins on key collision. No permissions are
/// attached.
pub fn build_profile(token: &AccessToken) -> UserProfile {
    let authentication = &token.authentication;
    let principal = &authentication.principal;

    let mut profile = UserProfile::new(&principal.id);
    profile.add_attributes(&principal.attributes);
    profile.add_attributes(&authentication.attributes);

    debug!(token_id = %token.id, subject = %profile.id, "Built user profile from access token");
    profile
}

/// Build the scope-gated profile for a live, sufficiently scoped token
///
/// Authentication-context attributes are applied first, then principal
/// attributes overlay them, so the principal wins on key collision. The
/// token's scope set is copied into the profile's permissions, and a
/// snapshot of the record itself is attached under
/// [`ACCESS_TOKEN_ATTRIBUTE`] for downstream consumers that need the
/// original grant.
pub fn build_scoped_profile(token: &AccessToken) -> Result<UserProfile, CredentialsError> {
    let authentication = &token.authentication;
    let principal = &authentication.principal;

    let mut profile = UserProfile::new(&principal.id);
    profile.add_attributes(&authentication.attributes);
    profile.add_attributes(&principal.attributes);

    profile.add_permissions(token.scopes.iter().cloned());

    let snapshot = serde_json::to_value(token)
        .map_err(|e| CredentialsError::Registry(RegistryError::Serialization(e.to_string())))?;
    profile.add_attribute(ACCESS_TOKEN_ATTRIBUTE, snapshot);

    debug!(token_id = %token.id, subject = %profile.id, "Built scoped user profile from access token");
    Ok(profile)
}
