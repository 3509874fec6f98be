//! Service Layer Error Types

use crate::models::ValidationError;
use crate::services::node_store::StoreError;
use thiserror::Error;

/// Errors surfaced by `KnowledgeService` operations.
///
/// User-input misuse at the engine level (bad drop targets) never reaches
/// this type; only missing documents, validation failures, and store
/// failures do.
#[derive(Error, Debug)]
pub enum KnowledgeServiceError {
    /// Document not found by ID
    #[error("Document not found: {id}")]
    NodeNotFound { id: String },

    /// Validation failed for a document node
    #[error("Document validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),

    /// Persistence collaborator failed
    #[error("Store operation failed: {0}")]
    StoreError(#[from] StoreError),
}

impl KnowledgeServiceError {
    /// Create a node not found error
    pub fn node_not_found(id: impl Into<String>) -> Self {
        Self::NodeNotFound { id: id.into() }
    }
}
