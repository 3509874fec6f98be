//! Knowledge Service - Document Tree Orchestration
//!
//! This module provides the business logic layer over the tree engine and
//! the persistence collaborator:
//!
//! - Page/folder creation, rename, delete
//! - Drop application (load, resolve, full-replace save)
//! - Tree queries for rendering
//!
//! Every mutation loads the scope's full collection, runs the pure engine
//! over it, and saves the whole collection back. Drop application is
//! serialized per service instance: a drop must fully complete, including
//! sibling order reassignment, before the next one is processed.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::debug;

use crate::models::{DocumentNode, ValidationError};
use crate::services::error::KnowledgeServiceError;
use crate::services::node_store::NodeStore;
use crate::tree::{build_tree, resolve_drop, DropEvent, Permissions, TreeNode};

/// Orchestrates tree mutations against an injected [`NodeStore`]
pub struct KnowledgeService {
    store: Arc<dyn NodeStore + Send + Sync>,
    /// Serializes drop application; overlapping gestures must not interleave
    drop_gate: Mutex<()>,
}

impl KnowledgeService {
    pub fn new(store: Arc<dyn NodeStore + Send + Sync>) -> Self {
        Self {
            store,
            drop_gate: Mutex::new(()),
        }
    }

    /// Ordered root forest for a scope
    pub async fn tree(&self, scope_id: &str) -> Result<Vec<TreeNode>, KnowledgeServiceError> {
        let nodes = self.store.load_nodes(scope_id).await?;
        Ok(build_tree(&nodes, None))
    }

    /// Create a page at the end of its sibling group
    pub async fn create_page(
        &self,
        scope_id: &str,
        title: &str,
        parent_id: Option<&str>,
    ) -> Result<DocumentNode, KnowledgeServiceError> {
        self.create(scope_id, title, parent_id, false).await
    }

    /// Create a folder at the end of its sibling group
    pub async fn create_folder(
        &self,
        scope_id: &str,
        title: &str,
        parent_id: Option<&str>,
    ) -> Result<DocumentNode, KnowledgeServiceError> {
        self.create(scope_id, title, parent_id, true).await
    }

    async fn create(
        &self,
        scope_id: &str,
        title: &str,
        parent_id: Option<&str>,
        is_folder: bool,
    ) -> Result<DocumentNode, KnowledgeServiceError> {
        let mut nodes = self.store.load_nodes(scope_id).await?;

        if let Some(parent) = parent_id {
            let parent_node = nodes
                .iter()
                .find(|n| n.id == parent)
                .ok_or_else(|| KnowledgeServiceError::node_not_found(parent))?;
            // Only folders hold children; nesting under a page would leave
            // the child invisible to tree rendering
            if !parent_node.is_folder {
                return Err(ValidationError::InvalidParent(format!(
                    "Parent {} is not a folder",
                    parent
                ))
                .into());
            }
        }

        let order = nodes
            .iter()
            .filter(|n| n.parent_id.as_deref() == parent_id)
            .count() as i64;

        let node = DocumentNode::new(
            title.to_string(),
            parent_id.map(|p| p.to_string()),
            is_folder,
            order,
        );
        node.validate()?;

        debug!(id = %node.id, scope = scope_id, is_folder, "document created");
        nodes.push(node.clone());
        self.store.save_nodes(scope_id, &nodes).await?;
        Ok(node)
    }

    /// Rename a document, touching its modification timestamp
    pub async fn rename(
        &self,
        scope_id: &str,
        id: &str,
        title: &str,
    ) -> Result<DocumentNode, KnowledgeServiceError> {
        let mut nodes = self.store.load_nodes(scope_id).await?;

        let node = nodes
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| KnowledgeServiceError::node_not_found(id))?;
        node.rename(title.to_string())?;
        let renamed = node.clone();

        self.store.save_nodes(scope_id, &nodes).await?;
        Ok(renamed)
    }

    /// Delete a document.
    ///
    /// Children of the deleted node are re-parented to the deleted node's
    /// parent; the destination sibling group is renumbered sequentially with
    /// the adopted children appended after the existing members in their
    /// prior relative order. Nothing is cascaded.
    pub async fn delete(&self, scope_id: &str, id: &str) -> Result<(), KnowledgeServiceError> {
        let mut nodes = self.store.load_nodes(scope_id).await?;

        let position = nodes
            .iter()
            .position(|n| n.id == id)
            .ok_or_else(|| KnowledgeServiceError::node_not_found(id))?;
        let removed = nodes.remove(position);

        // Re-parent orphaned children, then renumber the destination group
        let destination = removed.parent_id.clone();

        let mut existing: Vec<usize> = (0..nodes.len())
            .filter(|&i| nodes[i].parent_id == destination)
            .collect();
        existing.sort_by_key(|&i| nodes[i].order);

        let mut adopted: Vec<usize> = (0..nodes.len())
            .filter(|&i| nodes[i].parent_id.as_deref() == Some(id))
            .collect();
        adopted.sort_by_key(|&i| nodes[i].order);

        for (position, &index) in existing.iter().chain(adopted.iter()).enumerate() {
            nodes[index].order = position as i64;
        }
        for &index in &adopted {
            nodes[index].parent_id = destination.clone();
        }

        debug!(id, scope = scope_id, adopted = adopted.len(), "document deleted");
        self.store.save_nodes(scope_id, &nodes).await?;
        Ok(())
    }

    /// Apply a drop gesture and persist the result.
    ///
    /// Rejected drops (the engine returned the collection unchanged) skip
    /// the save. Serialized per service instance so a gesture fully
    /// completes before the next one is applied.
    pub async fn apply_drop(
        &self,
        scope_id: &str,
        event: &DropEvent,
        permissions: Permissions,
    ) -> Result<Vec<DocumentNode>, KnowledgeServiceError> {
        let _gate = self.drop_gate.lock().await;

        let nodes = self.store.load_nodes(scope_id).await?;
        let updated = resolve_drop(&nodes, event, permissions);

        if updated != nodes {
            self.store.save_nodes(scope_id, &updated).await?;
        }
        Ok(updated)
    }
}
