//! # Accessgate Core
//!
//! Domain model for the Accessgate bearer-token access layer.
//!
//! ## Key Concepts
//!
//! - **Access Token**: the registry-owned record behind an opaque bearer
//!   token: expiry state, granted scopes, and the authentication snapshot
//!   taken when the grant was issued
//! - **Principal**: the authenticated subject and its attributes,
//!   independent of the authentication event
//! - **Authentication Context**: the principal plus attributes asserted at
//!   authentication time (a separate attribute namespace)
//! - **User Profile**: the materialized result of a successful validation,
//!   consumed by downstream authorization
//!
//! Token issuance and lifecycle live outside this crate; everything here is
//! a read-only snapshot or a freshly built projection.

pub mod authentication;
pub mod error;
pub mod principal;
pub mod profile;
pub mod scope;
pub mod token;

pub use authentication::AuthenticationContext;
pub use error::{CredentialsError, RegistryError, Result};
pub use principal::Principal;
pub use profile::{UserProfile, ACCESS_TOKEN_ATTRIBUTE};
pub use token::AccessToken;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get the library version
pub fn version() -> &'static str {
    VERSION
}
