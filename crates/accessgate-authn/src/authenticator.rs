//! Authenticator variants sharing the extract → lookup → validate →
//! materialize pipeline
//!
//! Both variants are stateless after construction (their only fields are
//! the injected registry and extractor), so a single instance is safe to
//! share across concurrent requests. Every `validate` invocation is
//! independent and all intermediate state is request-scoped.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

use accessgate_core::scope::{UMA_AUTHORIZATION_SCOPE, UMA_PROTECTION_SCOPE};
use accessgate_core::{CredentialsError, UserProfile};

use crate::extract::TokenIdExtractor;
use crate::profile::{build_profile, build_scoped_profile};
use crate::registry::TicketRegistry;
use crate::validate::{live_or_none, require_live, require_scope};

/// Credentials presented on a request: raw bearer-token text plus the
/// slot that receives the profile on successful authentication
#[derive(Debug, Clone, Default)]
pub struct TokenCredentials {
    /// Raw bearer-token text as presented by the client
    pub token: String,

    profile: Option<UserProfile>,
}

impl TokenCredentials {
    /// Create credentials for a raw token
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            profile: None,
        }
    }

    /// The attached profile, if authentication succeeded
    pub fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    /// Attach a profile
    pub fn set_profile(&mut self, profile: UserProfile) {
        self.profile = Some(profile);
    }

    /// Whether a profile has been attached
    ///
    /// Callers of the best-effort variant must treat a missing profile as
    /// "authentication did not succeed", not as a failure of the call.
    pub fn is_authenticated(&self) -> bool {
        self.profile.is_some()
    }
}

/// Request-scoped context from the surrounding transport layer
///
/// Passed through the pipeline opaquely; the authenticators delegate it
/// but never inspect it.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    /// Correlation id assigned by the transport layer, if any
    pub request_id: Option<String>,
}

/// Trait for bearer-token authenticators
#[async_trait]
pub trait TokenAuthenticator: Send + Sync {
    /// Validate the presented credentials, attaching a profile on success
    ///
    /// Whether rejection surfaces as an error or as an absent profile is
    /// the variant's failure policy; registry failures propagate from
    /// every variant.
    async fn validate(
        &self,
        credentials: &mut TokenCredentials,
        ctx: &RequestContext,
    ) -> Result<(), CredentialsError>;

    /// Get a description of this authenticator (for logging)
    fn description(&self) -> &str {
        "token authenticator"
    }
}

/// Best-effort access-token authenticator
///
/// Meant to compose inside an authentication chain: a token that is not
/// found or has expired leaves the credentials unauthenticated and
/// returns without error, so other mechanisms in the chain may still
/// succeed. Only a registry failure surfaces as an error.
pub struct AccessTokenAuthenticator {
    registry: Arc<dyn TicketRegistry>,
    extractor: Arc<dyn TokenIdExtractor>,
}

impl AccessTokenAuthenticator {
    /// Create an authenticator over the given registry and extractor
    pub fn new(registry: Arc<dyn TicketRegistry>, extractor: Arc<dyn TokenIdExtractor>) -> Self {
        Self { registry, extractor }
    }
}

#[async_trait]
impl TokenAuthenticator for AccessTokenAuthenticator {
    async fn validate(
        &self,
        credentials: &mut TokenCredentials,
        _ctx: &RequestContext,
    ) -> Result<(), CredentialsError> {
        let token = credentials.token.trim();
        let token_id = self.extractor.extract_id(token);
        debug!(token_id = %token_id, "Received access token for authentication");

        let record = self.registry.access_token(&token_id).await?;
        let Some(record) = live_or_none(record, &token_id) else {
            return Ok(());
        };

        let profile = build_profile(&record);
        debug!(token_id = %record.id, subject = %profile.id, "Authenticated access token");
        credentials.set_profile(profile);
        Ok(())
    }

    fn description(&self) -> &str {
        "best-effort access token authenticator"
    }
}

/// Scope-gated access-token authenticator
///
/// A hard gate protecting a specific operation: a token that is not
/// found, has expired, or lacks the required scope aborts validation with
/// a [`CredentialsError`], and no partial profile is ever attached. The
/// required scope is the one point of customization; the strict policy is
/// otherwise identical for every instance.
pub struct ScopedTokenAuthenticator {
    registry: Arc<dyn TicketRegistry>,
    extractor: Arc<dyn TokenIdExtractor>,
    required_scope: String,
}

impl ScopedTokenAuthenticator {
    /// Create an authenticator requiring the given scope
    pub fn new(
        registry: Arc<dyn TicketRegistry>,
        extractor: Arc<dyn TokenIdExtractor>,
        required_scope: impl Into<String>,
    ) -> Self {
        Self {
            registry,
            extractor,
            required_scope: required_scope.into(),
        }
    }

    /// Gate for UMA requesting-party tokens (requires `uma_protection`)
    pub fn requesting_party(
        registry: Arc<dyn TicketRegistry>,
        extractor: Arc<dyn TokenIdExtractor>,
    ) -> Self {
        Self::new(registry, extractor, UMA_PROTECTION_SCOPE)
    }

    /// Gate for UMA authorization requests (requires `uma_authorization`)
    pub fn authorization_request(
        registry: Arc<dyn TicketRegistry>,
        extractor: Arc<dyn TokenIdExtractor>,
    ) -> Self {
        Self::new(registry, extractor, UMA_AUTHORIZATION_SCOPE)
    }

    /// The scope this gate requires
    pub fn required_scope(&self) -> &str {
        &self.required_scope
    }
}

#[async_trait]
impl TokenAuthenticator for ScopedTokenAuthenticator {
    async fn validate(
        &self,
        credentials: &mut TokenCredentials,
        _ctx: &RequestContext,
    ) -> Result<(), CredentialsError> {
        let token = credentials.token.trim();
        let token_id = self.extractor.extract_id(token);
        debug!(
            token_id = %token_id,
            required_scope = %self.required_scope,
            "Received access token for scope-gated authentication"
        );

        let record = require_live(self.registry.access_token(&token_id).await?, &token_id)?;
        require_scope(&record, &self.required_scope)?;

        let profile = build_scoped_profile(&record)?;
        debug!(token_id = %record.id, subject = %profile.id, "Authenticated scoped access token");
        credentials.set_profile(profile);
        Ok(())
    }

    fn description(&self) -> &str {
        "scope-gated access token authenticator"
    }
}
