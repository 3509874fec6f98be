//! Persistence Collaborator
//!
//! The tree engine stays storage-agnostic: callers load an in-memory
//! snapshot keyed by a scope (notebook) identifier, mutate it through the
//! engine, and save the full collection back. `MemoryNodeStore` is the
//! in-process implementation used in tests and early development; real
//! backends implement [`NodeStore`] outside this crate.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

use crate::models::DocumentNode;

/// Errors from the persistence collaborator
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Storage backend failure: {0}")]
    Backend(String),
}

/// Full-replace persistence contract keyed by scope identifier.
///
/// There is no partial-update or diff protocol; every mutation saves the
/// whole collection for its scope.
#[async_trait]
pub trait NodeStore {
    async fn load_nodes(&self, scope_id: &str) -> Result<Vec<DocumentNode>, StoreError>;
    async fn save_nodes(&self, scope_id: &str, nodes: &[DocumentNode]) -> Result<(), StoreError>;
}

/// In-memory store for testing and early development
pub struct MemoryNodeStore {
    scopes: Arc<Mutex<HashMap<String, Vec<DocumentNode>>>>,
}

impl MemoryNodeStore {
    pub fn new() -> Self {
        Self {
            scopes: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub fn with_test_data(scope_id: &str, nodes: Vec<DocumentNode>) -> Self {
        let mut scopes = HashMap::new();
        scopes.insert(scope_id.to_string(), nodes);
        Self {
            scopes: Arc::new(Mutex::new(scopes)),
        }
    }
}

impl Default for MemoryNodeStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NodeStore for MemoryNodeStore {
    async fn load_nodes(&self, scope_id: &str) -> Result<Vec<DocumentNode>, StoreError> {
        let scopes = self
            .scopes
            .lock()
            .map_err(|_| StoreError::Backend("Failed to acquire lock".to_string()))?;

        Ok(scopes.get(scope_id).cloned().unwrap_or_default())
    }

    async fn save_nodes(&self, scope_id: &str, nodes: &[DocumentNode]) -> Result<(), StoreError> {
        let mut scopes = self
            .scopes
            .lock()
            .map_err(|_| StoreError::Backend("Failed to acquire lock".to_string()))?;

        scopes.insert(scope_id.to_string(), nodes.to_vec());
        Ok(())
    }
}
