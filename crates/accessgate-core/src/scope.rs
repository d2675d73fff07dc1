//! Well-known scope names for UMA-gated operations

/// Scope required of a requesting-party token before it may reach
/// UMA-protected resource operations
pub const UMA_PROTECTION_SCOPE: &str = "uma_protection";

/// Scope required of an access token presented with an UMA authorization
/// request
pub const UMA_AUTHORIZATION_SCOPE: &str = "uma_authorization";
