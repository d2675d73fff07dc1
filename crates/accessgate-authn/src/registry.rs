//! Ticket-registry contract and the in-memory implementation
//!
//! The registry is the authoritative source of token validity. The
//! authentication pipeline only ever queries it by id; creation, refresh,
//! and destruction of records happen on the issuing side.
//!
//! The contract separates two outcomes the pipeline must never conflate:
//! `Ok(None)` means the key has no record (an authentication outcome),
//! while `Err(RegistryError)` means the registry itself failed (an
//! infrastructure defect that propagates to the caller).

use async_trait::async_trait;
use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::RwLock;
use tracing::info;

use accessgate_core::{AccessToken, RegistryError};

/// Registry of issued access-token records
///
/// Implementations must be thread-safe and support concurrent lookups.
/// A lookup may block on a remote or distributed store; the pipeline does
/// not manage retries or timeouts on its behalf.
#[async_trait]
pub trait TicketRegistry: Send + Sync + Debug {
    /// Resolve a token id to its record, or `None` when no record exists
    async fn access_token(&self, id: &str) -> Result<Option<AccessToken>, RegistryError>;

    /// Get a description of this registry (for logging)
    fn description(&self) -> &str {
        "ticket registry"
    }
}

/// In-memory ticket registry
///
/// Default implementation using an in-memory hashmap. Suitable for
/// development, testing, and single-instance deployments; records are
/// lost on restart.
#[derive(Debug, Default)]
pub struct MemoryTicketRegistry {
    tokens: RwLock<HashMap<String, AccessToken>>,
}

impl MemoryTicketRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            tokens: RwLock::new(HashMap::new()),
        }
    }

    /// Register a token record under its id
    pub fn register(&self, token: AccessToken) {
        let mut tokens = self.tokens.write().unwrap();
        info!(token_id = %token.id, "Registering access token");
        tokens.insert(token.id.clone(), token);
    }

    /// Mark a token as revoked; returns false if the id is unknown
    pub fn revoke(&self, id: &str) -> bool {
        let mut tokens = self.tokens.write().unwrap();
        if let Some(token) = tokens.get_mut(id) {
            info!(token_id = %id, "Revoking access token");
            token.revoked = true;
            true
        } else {
            false
        }
    }

    /// Remove a token record entirely
    pub fn remove(&self, id: &str) -> bool {
        let mut tokens = self.tokens.write().unwrap();
        let removed = tokens.remove(id).is_some();
        if removed {
            info!(token_id = %id, "Removed access token");
        }
        removed
    }

    /// List all registered token ids
    pub fn list(&self) -> Vec<String> {
        let tokens = self.tokens.read().unwrap();
        tokens.keys().cloned().collect()
    }
}

#[async_trait]
impl TicketRegistry for MemoryTicketRegistry {
    async fn access_token(&self, id: &str) -> Result<Option<AccessToken>, RegistryError> {
        let tokens = self.tokens.read().unwrap();
        Ok(tokens.get(id).cloned())
    }

    fn description(&self) -> &str {
        "in-memory ticket registry"
    }
}
