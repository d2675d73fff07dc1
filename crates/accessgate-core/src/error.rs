//! Error types for the Accessgate access layer

use thiserror::Error;

/// Result type alias using CredentialsError
pub type Result<T> = std::result::Result<T, CredentialsError>;

/// Errors raised when a bearer token fails validation
///
/// This is the single error type the strict (scope-gated) authenticator
/// surfaces to its caller. The variants carry diagnostic detail; callers
/// that only care about pass/fail treat every variant as "rejected",
/// except `Registry`, which is an infrastructure failure rather than an
/// authentication outcome.
#[derive(Error, Debug)]
pub enum CredentialsError {
    /// Token key has no live record in the registry
    #[error("access token is not found or has expired: unable to authenticate access token {token_id}")]
    NotFoundOrExpired {
        /// The lookup key that produced no live record
        token_id: String,
    },

    /// Record is live but lacks the required capability
    #[error("missing scope [{scope}]: unable to authenticate access token {token_id}")]
    MissingScope {
        /// The required scope that was absent from the grant
        scope: String,
        /// The lookup key of the rejected token
        token_id: String,
    },

    /// The registry lookup itself failed (connectivity, serialization)
    ///
    /// Never conflated with `NotFoundOrExpired`: a registry that cannot
    /// answer is a defect, not an authentication outcome.
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// Errors raised by a ticket-registry backend
#[derive(Error, Debug)]
pub enum RegistryError {
    /// Could not reach the registry backend
    #[error("registry connection error: {0}")]
    Connection(String),

    /// The backend answered but the operation failed
    #[error("registry backend error: {0}")]
    Backend(String),

    /// A stored record could not be decoded
    #[error("registry serialization error: {0}")]
    Serialization(String),
}
