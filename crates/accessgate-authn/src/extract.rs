//! Token-id extraction
//!
//! Normalizes raw credential text into the registry lookup key. The key
//! format belongs to the extractor; the rest of the pipeline treats it as
//! opaque.

/// Trait for deriving a registry lookup key from raw credential text
///
/// Implementations must be deterministic (same input, same key) and free
/// of side effects. The authenticator trims surrounding whitespace before
/// delegating, so implementations see the bare token text.
pub trait TokenIdExtractor: Send + Sync {
    /// Derive the lookup key for a raw token
    fn extract_id(&self, raw_token: &str) -> String;

    /// Get a description of this extractor (for logging)
    fn description(&self) -> &str {
        "token id extractor"
    }
}

/// Extractor for deployments where the bearer token *is* the ticket id
///
/// Returns the token text unchanged. This is the common opaque-ticket
/// setup; deployments with encoded token ids supply their own extractor.
pub struct PlainTokenIdExtractor;

impl TokenIdExtractor for PlainTokenIdExtractor {
    fn extract_id(&self, raw_token: &str) -> String {
        raw_token.to_string()
    }

    fn description(&self) -> &str {
        "plain token id extractor"
    }
}
