//! Business Services
//!
//! This module contains the orchestration layer between the tree engine and
//! the injected persistence collaborator:
//!
//! - `KnowledgeService` - Page/folder CRUD, drop application, tree queries
//! - `NodeStore` - Persistence collaborator trait (full-replace save)
//! - `MemoryNodeStore` - In-memory store for tests and early development
//!
//! Services load an in-memory snapshot, run the pure engine over it, and
//! save the whole collection back; there is no partial-update protocol.

pub mod error;
pub mod knowledge_service;
pub mod node_store;

pub use error::KnowledgeServiceError;
pub use knowledge_service::KnowledgeService;
pub use node_store::{MemoryNodeStore, NodeStore, StoreError};
