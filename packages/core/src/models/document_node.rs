//! Document Node Data Structures
//!
//! This module defines the `DocumentNode` struct used by the document tree
//! engine and the knowledge service.
//!
//! # Architecture
//!
//! - **Flat collection**: Nodes are stored as a flat list; hierarchy is
//!   expressed through `parent_id` references, never nested structures
//! - **Sibling order**: `order` is an integer position within a sibling
//!   group; ties in legacy data are broken by stable original array order
//! - **Folder promotion**: A non-folder node may become a folder as a side
//!   effect of receiving a dropped sibling; folders are never auto-demoted
//!
//! # Examples
//!
//! ```rust
//! use docspace_core::models::DocumentNode;
//!
//! // A root-level page
//! let page = DocumentNode::new("Getting Started".to_string(), None, false, 0);
//!
//! // A folder with a page inside it
//! let folder = DocumentNode::new("Guides".to_string(), None, true, 1);
//! let child = DocumentNode::new("FAQ".to_string(), Some(folder.id.clone()), false, 0);
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Maximum accepted title length in characters
const MAX_TITLE_LENGTH: usize = 512;

/// Validation errors for DocumentNode operations
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid node ID format: {0}")]
    InvalidId(String),

    #[error("Invalid parent reference: {0}")]
    InvalidParent(String),

    #[error("Invalid title: {0}")]
    InvalidTitle(String),
}

/// A single document or folder in the knowledge base tree.
///
/// # Fields
///
/// - `id`: Unique identifier (UUID)
/// - `title`: Display name
/// - `parent_id`: Optional reference to the containing node; `None` means
///   root level. Must never form a cycle
/// - `order`: Integer sibling position, ascending within a sibling group
/// - `is_folder`: Whether the node can contain children
/// - `created_at` / `modified_at`: Timestamps
///
/// Hierarchy mutations (`parent_id`, `order`, `is_folder`) happen only
/// through the tree engine's drop resolution and the knowledge service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentNode {
    /// Unique identifier (UUID v4)
    pub id: String,

    /// Display name
    pub title: String,

    /// Parent node ID; `None` means root level
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,

    /// Sibling ordering position (ascending)
    pub order: i64,

    /// Whether this node can contain children
    pub is_folder: bool,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last modification timestamp
    pub modified_at: DateTime<Utc>,
}

impl DocumentNode {
    /// Create a new node with an auto-generated UUID
    pub fn new(title: String, parent_id: Option<String>, is_folder: bool, order: i64) -> Self {
        Self::new_with_id(
            Uuid::new_v4().to_string(),
            title,
            parent_id,
            is_folder,
            order,
        )
    }

    /// Create a new node with an explicit ID (imports, tests)
    pub fn new_with_id(
        id: String,
        title: String,
        parent_id: Option<String>,
        is_folder: bool,
        order: i64,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            title,
            parent_id,
            order,
            is_folder,
            created_at: now,
            modified_at: now,
        }
    }

    /// Validate field-level constraints
    ///
    /// Structural invariants spanning the whole collection (no cycles,
    /// consistent sibling orders) are enforced by the tree engine, not here.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id.is_empty() {
            return Err(ValidationError::MissingField("id".to_string()));
        }

        if self.title.trim().is_empty() {
            return Err(ValidationError::InvalidTitle(
                "Title cannot be empty".to_string(),
            ));
        }

        if self.title.chars().count() > MAX_TITLE_LENGTH {
            return Err(ValidationError::InvalidTitle(format!(
                "Title exceeds maximum length of {} characters",
                MAX_TITLE_LENGTH
            )));
        }

        if self.parent_id.as_deref() == Some(self.id.as_str()) {
            return Err(ValidationError::InvalidParent(
                "Node cannot be its own parent".to_string(),
            ));
        }

        Ok(())
    }

    /// Rename the node, touching `modified_at`
    pub fn rename(&mut self, title: String) -> Result<(), ValidationError> {
        if title.trim().is_empty() {
            return Err(ValidationError::InvalidTitle(
                "Title cannot be empty".to_string(),
            ));
        }

        self.title = title;
        self.modified_at = Utc::now();
        Ok(())
    }

    /// True when the node sits at root level
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}
