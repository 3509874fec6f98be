//! DocSpace Core Business Logic Layer
//!
//! This crate provides the knowledge-base core for the DocSpace admin
//! platform: the slash-command engine and the document tree engine, plus the
//! service layer that orchestrates them against an injected store.
//!
//! # Architecture
//!
//! - **Pure engines**: Both engines are synchronous state machines over
//!   in-memory snapshots; rendering, persistence, and the rich-text
//!   primitive are injected collaborators
//! - **No error channel for user misuse**: Bad drop targets and empty
//!   command menus degrade to no-ops; only caller bugs panic
//! - **Full-replace persistence**: The service layer loads a scope's whole
//!   collection, mutates a copy, and saves it back
//!
//! # Modules
//!
//! - [`models`] - Data structures (DocumentNode, Command catalog)
//! - [`editor`] - Slash-command session state machine and host capability traits
//! - [`tree`] - Tree construction and drop resolution
//! - [`services`] - KnowledgeService and the NodeStore collaborator

pub mod editor;
pub mod models;
pub mod services;
pub mod tree;

// Re-export commonly used types
pub use editor::*;
pub use models::*;
pub use services::*;
pub use tree::*;
