//! Data Models
//!
//! Core data structures shared by both engines:
//!
//! - `DocumentNode` - Persisted document/folder shape with parent reference and sibling order
//! - `Command` / `CommandAction` - Static slash-command catalog entries
//! - `ValidationError` - Field-level validation failures

pub mod command;
pub mod document_node;

pub use command::{default_catalog, Command, CommandAction, ListKind};
pub use document_node::{DocumentNode, ValidationError};
