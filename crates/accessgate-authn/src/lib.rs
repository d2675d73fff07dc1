//! # Accessgate Authn
//!
//! Bearer-token authentication pipeline: given an opaque bearer token,
//! decide whether it corresponds to a live, sufficiently scoped grant and,
//! if so, materialize an identity profile for downstream authorization.
//!
//! ## Pipeline
//!
//! Both authenticator variants share the same four steps:
//!
//! 1. **Extract** — normalize the raw credential text into a lookup key
//! 2. **Lookup** — resolve the key against the ticket registry
//! 3. **Validate** — enforce expiry (and, for the strict variant,
//!    required-scope membership)
//! 4. **Materialize** — build the identity profile and attach it to the
//!    credentials
//!
//! They diverge only in failure policy:
//!
//! - [`AccessTokenAuthenticator`] fails soft: a dead token leaves the
//!   credentials unauthenticated and returns without error, so the variant
//!   composes inside an authentication chain where other mechanisms may
//!   still succeed
//! - [`ScopedTokenAuthenticator`] is a hard gate: a dead or under-scoped
//!   token aborts validation with a [`CredentialsError`] and no partial
//!   profile is ever attached
//!
//! Registry failures (connectivity, decoding) are neither: they propagate
//! as errors from both variants and are never reinterpreted as "token not
//! found".
//!
//! ## Usage
//!
//! ```ignore
//! use std::sync::Arc;
//! use accessgate_authn::{
//!     MemoryTicketRegistry, PlainTokenIdExtractor, RequestContext,
//!     ScopedTokenAuthenticator, TokenAuthenticator, TokenCredentials,
//! };
//!
//! let registry = Arc::new(MemoryTicketRegistry::new());
//! let authenticator = ScopedTokenAuthenticator::requesting_party(
//!     registry,
//!     Arc::new(PlainTokenIdExtractor),
//! );
//!
//! let mut credentials = TokenCredentials::new("AT-123");
//! authenticator.validate(&mut credentials, &RequestContext::default()).await?;
//! println!("subject: {}", credentials.profile().unwrap().id);
//! ```

pub mod authenticator;
pub mod extract;
pub mod profile;
pub mod registry;
pub mod validate;

pub use accessgate_core::{
    AccessToken, AuthenticationContext, CredentialsError, Principal, RegistryError, Result,
    UserProfile, ACCESS_TOKEN_ATTRIBUTE,
};
pub use authenticator::{
    AccessTokenAuthenticator, RequestContext, ScopedTokenAuthenticator, TokenAuthenticator,
    TokenCredentials,
};
pub use extract::{PlainTokenIdExtractor, TokenIdExtractor};
pub use profile::{build_profile, build_scoped_profile};
pub use registry::{MemoryTicketRegistry, TicketRegistry};
