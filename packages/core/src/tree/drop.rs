//! Drop Resolution
//!
//! Resolves a single drag-and-drop gesture into a structural mutation over a
//! copy of the flat collection. Every rejection path returns the input
//! unchanged; there is no error channel for user-input misuse.
//!
//! Drop cases:
//!
//! 1. Target node is a folder: the dragged node is appended as its last child
//! 2. Target node is a page: the target is promoted to a folder and the
//!    dragged node becomes its first child
//! 3. Target is a root-level slot: same-level reorder of the root siblings
//!
//! Dropping a node onto its own descendant would create a cycle and is
//! rejected before any mutation.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, warn};

use crate::models::DocumentNode;

/// Where the pointer was released.
///
/// `Node` is a drop onto a node's body (nest or promote); `RootSlot` is a
/// drop onto the root-level position occupied by the named node (reorder).
/// The presentation layer knows which zone received the drop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "camelCase")]
pub enum DropTarget {
    Node(String),
    RootSlot(String),
}

impl DropTarget {
    fn id(&self) -> &str {
        match self {
            DropTarget::Node(id) | DropTarget::RootSlot(id) => id,
        }
    }
}

/// Transient drop gesture input; never persisted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DropEvent {
    pub dragged_id: String,
    pub target: DropTarget,
}

/// Caller capabilities checked before any mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Permissions {
    pub can_edit: bool,
}

impl Permissions {
    pub fn editor() -> Self {
        Self { can_edit: true }
    }

    pub fn read_only() -> Self {
        Self { can_edit: false }
    }
}

/// True when `node_id` sits below `ancestor_id` in the tree.
///
/// Walks the parent chain upward. A visited set guards against pre-existing
/// corrupt cycles in imported data, which would otherwise loop forever.
pub fn is_descendant(nodes: &[DocumentNode], ancestor_id: &str, node_id: &str) -> bool {
    let mut visited: HashSet<&str> = HashSet::new();
    let mut current = node_id;

    loop {
        if !visited.insert(current) {
            return false;
        }
        let Some(node) = nodes.iter().find(|n| n.id == current) else {
            return false;
        };
        match node.parent_id.as_deref() {
            Some(parent) if parent == ancestor_id => return true,
            Some(parent) => current = parent,
            None => return false,
        }
    }
}

/// Resolve a drop gesture into a new collection.
///
/// The input is never mutated; the returned collection equals the input on
/// every rejection path (self-drop, unknown ids, missing permission,
/// cycle-producing drop, reorder involving non-root nodes).
pub fn resolve_drop(
    nodes: &[DocumentNode],
    event: &DropEvent,
    permissions: Permissions,
) -> Vec<DocumentNode> {
    let target_id = event.target.id();

    if !permissions.can_edit {
        debug!(dragged = %event.dragged_id, "drop rejected: no edit permission");
        return nodes.to_vec();
    }

    if event.dragged_id == target_id {
        debug!(dragged = %event.dragged_id, "drop rejected: self drop");
        return nodes.to_vec();
    }

    let Some(dragged_index) = nodes.iter().position(|n| n.id == event.dragged_id) else {
        debug!(dragged = %event.dragged_id, "drop rejected: unknown dragged id");
        return nodes.to_vec();
    };
    let Some(target_index) = nodes.iter().position(|n| n.id == target_id) else {
        debug!(target = %target_id, "drop rejected: unknown target id");
        return nodes.to_vec();
    };

    if is_descendant(nodes, &event.dragged_id, target_id) {
        warn!(
            dragged = %event.dragged_id,
            target = %target_id,
            "drop rejected: target is a descendant of the dragged node"
        );
        return nodes.to_vec();
    }

    let mut updated = nodes.to_vec();

    match &event.target {
        DropTarget::Node(_) if updated[target_index].is_folder => {
            // Nest into folder: order = count of existing children, so the
            // dragged node lands after every current sibling even when it
            // already sits inside the target
            let child_count = updated
                .iter()
                .filter(|n| n.parent_id.as_deref() == Some(target_id))
                .count();
            updated[dragged_index].parent_id = Some(target_id.to_string());
            updated[dragged_index].order = child_count as i64;
            debug!(
                dragged = %event.dragged_id,
                folder = %target_id,
                order = child_count,
                "drop resolved: nest into folder"
            );
        }
        DropTarget::Node(_) => {
            // Promote the page to a folder, then nest the dragged node as
            // its first (and only) child
            updated[target_index].is_folder = true;
            updated[dragged_index].parent_id = Some(target_id.to_string());
            updated[dragged_index].order = 0;
            debug!(
                dragged = %event.dragged_id,
                promoted = %target_id,
                "drop resolved: promote sibling to folder"
            );
        }
        DropTarget::RootSlot(_) => {
            if updated[dragged_index].parent_id.is_some() || updated[target_index].parent_id.is_some()
            {
                debug!(
                    dragged = %event.dragged_id,
                    target = %target_id,
                    "drop rejected: root reorder with non-root node"
                );
                return nodes.to_vec();
            }

            // Root sibling list in display order (stable on order ties)
            let mut roots: Vec<usize> = (0..updated.len())
                .filter(|&i| updated[i].parent_id.is_none())
                .collect();
            roots.sort_by_key(|&i| updated[i].order);

            let from = roots
                .iter()
                .position(|&i| i == dragged_index)
                .expect("dragged root present in root list");
            let to = roots
                .iter()
                .position(|&i| i == target_index)
                .expect("target root present in root list");

            // Array move semantics: remove, then insert at the target index
            let moved = roots.remove(from);
            roots.insert(to, moved);

            for (position, &index) in roots.iter().enumerate() {
                updated[index].order = position as i64;
            }
            debug!(
                dragged = %event.dragged_id,
                target = %target_id,
                "drop resolved: root reorder"
            );
        }
    }

    updated
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(id: &str, parent_id: Option<&str>, order: i64) -> DocumentNode {
        DocumentNode::new_with_id(
            id.to_string(),
            format!("Node {}", id),
            parent_id.map(|p| p.to_string()),
            false,
            order,
        )
    }

    fn folder(id: &str, parent_id: Option<&str>, order: i64) -> DocumentNode {
        let mut n = node(id, parent_id, order);
        n.is_folder = true;
        n
    }

    fn find<'a>(nodes: &'a [DocumentNode], id: &str) -> &'a DocumentNode {
        nodes.iter().find(|n| n.id == id).unwrap()
    }

    fn onto(dragged: &str, target: &str) -> DropEvent {
        DropEvent {
            dragged_id: dragged.to_string(),
            target: DropTarget::Node(target.to_string()),
        }
    }

    fn at_slot(dragged: &str, target: &str) -> DropEvent {
        DropEvent {
            dragged_id: dragged.to_string(),
            target: DropTarget::RootSlot(target.to_string()),
        }
    }

    #[test]
    fn test_drop_into_folder_appends_last() {
        // Folder with two existing children; dragged lands at order 2
        let nodes = vec![
            folder("f", None, 0),
            node("c1", Some("f"), 0),
            node("c2", Some("f"), 1),
            node("p", None, 1),
        ];

        let updated = resolve_drop(&nodes, &onto("p", "f"), Permissions::editor());

        let dragged = find(&updated, "p");
        assert_eq!(dragged.parent_id.as_deref(), Some("f"));
        assert_eq!(dragged.order, 2);
    }

    #[test]
    fn test_drop_into_empty_folder() {
        // Scenario: single folder F, page P dropped onto it
        let nodes = vec![folder("f", None, 0), node("p", None, 1)];

        let updated = resolve_drop(&nodes, &onto("p", "f"), Permissions::editor());

        let dragged = find(&updated, "p");
        assert_eq!(dragged.parent_id.as_deref(), Some("f"));
        assert_eq!(dragged.order, 0);

        // Folder otherwise unchanged
        let target = find(&updated, "f");
        assert!(target.is_folder);
        assert!(target.parent_id.is_none());
        assert_eq!(target.order, 0);
    }

    #[test]
    fn test_drop_onto_page_promotes_to_folder() {
        // Scenario: drop Y onto page X; X becomes a folder holding Y
        let nodes = vec![node("x", None, 0), node("y", None, 1)];

        let updated = resolve_drop(&nodes, &onto("y", "x"), Permissions::editor());

        let target = find(&updated, "x");
        assert!(target.is_folder);

        let dragged = find(&updated, "y");
        assert_eq!(dragged.parent_id.as_deref(), Some("x"));
        assert_eq!(dragged.order, 0);

        let children: Vec<&DocumentNode> = updated
            .iter()
            .filter(|n| n.parent_id.as_deref() == Some("x"))
            .collect();
        assert_eq!(children.len(), 1);
    }

    #[test]
    fn test_root_reorder_moves_to_target_index() {
        // Scenario: A, B, C at root; dropping A onto C's slot yields
        // B=0, C=1, A=2
        let nodes = vec![node("a", None, 0), node("b", None, 1), node("c", None, 2)];

        let updated = resolve_drop(&nodes, &at_slot("a", "c"), Permissions::editor());

        assert_eq!(find(&updated, "b").order, 0);
        assert_eq!(find(&updated, "c").order, 1);
        assert_eq!(find(&updated, "a").order, 2);
    }

    #[test]
    fn test_root_reorder_moves_backward() {
        let nodes = vec![node("a", None, 0), node("b", None, 1), node("c", None, 2)];

        let updated = resolve_drop(&nodes, &at_slot("c", "a"), Permissions::editor());

        assert_eq!(find(&updated, "c").order, 0);
        assert_eq!(find(&updated, "a").order, 1);
        assert_eq!(find(&updated, "b").order, 2);
    }

    #[test]
    fn test_root_reorder_preserves_id_set_and_nesting() {
        let nodes = vec![
            node("a", None, 0),
            node("b", None, 1),
            folder("f", None, 2),
            node("child", Some("f"), 0),
        ];

        let updated = resolve_drop(&nodes, &at_slot("a", "f"), Permissions::editor());

        // Same ids, only root orders changed
        let mut before: Vec<&str> = nodes.iter().map(|n| n.id.as_str()).collect();
        let mut after: Vec<&str> = updated.iter().map(|n| n.id.as_str()).collect();
        before.sort_unstable();
        after.sort_unstable();
        assert_eq!(before, after);

        // Nested node untouched by the root reorder branch
        let child = find(&updated, "child");
        assert_eq!(child.parent_id.as_deref(), Some("f"));
        assert_eq!(child.order, 0);
    }

    #[test]
    fn test_root_reorder_rejects_nested_participants() {
        let nodes = vec![
            folder("f", None, 0),
            node("child", Some("f"), 0),
            node("a", None, 1),
        ];

        let updated = resolve_drop(&nodes, &at_slot("child", "a"), Permissions::editor());
        assert_eq!(updated, nodes);

        let updated = resolve_drop(&nodes, &at_slot("a", "child"), Permissions::editor());
        assert_eq!(updated, nodes);
    }

    #[test]
    fn test_self_drop_is_noop() {
        let nodes = vec![node("a", None, 0), node("b", None, 1)];
        let updated = resolve_drop(&nodes, &onto("a", "a"), Permissions::editor());
        assert_eq!(updated, nodes);
    }

    #[test]
    fn test_unknown_ids_are_noop() {
        let nodes = vec![node("a", None, 0)];

        let updated = resolve_drop(&nodes, &onto("ghost", "a"), Permissions::editor());
        assert_eq!(updated, nodes);

        let updated = resolve_drop(&nodes, &onto("a", "ghost"), Permissions::editor());
        assert_eq!(updated, nodes);
    }

    #[test]
    fn test_missing_permission_is_noop() {
        let nodes = vec![folder("f", None, 0), node("p", None, 1)];
        let updated = resolve_drop(&nodes, &onto("p", "f"), Permissions::read_only());
        assert_eq!(updated, nodes);
    }

    #[test]
    fn test_cycle_drop_rejected() {
        // Dragging a folder onto its own grandchild must not corrupt the tree
        let nodes = vec![
            folder("f", None, 0),
            folder("g", Some("f"), 0),
            node("deep", Some("g"), 0),
        ];

        let updated = resolve_drop(&nodes, &onto("f", "deep"), Permissions::editor());
        assert_eq!(updated, nodes);

        let updated = resolve_drop(&nodes, &onto("f", "g"), Permissions::editor());
        assert_eq!(updated, nodes);
    }

    #[test]
    fn test_drop_onto_non_descendant_folder_allowed() {
        let nodes = vec![
            folder("f", None, 0),
            node("child", Some("f"), 0),
            folder("g", None, 1),
        ];

        let updated = resolve_drop(&nodes, &onto("f", "g"), Permissions::editor());
        let dragged = find(&updated, "f");
        assert_eq!(dragged.parent_id.as_deref(), Some("g"));
    }

    #[test]
    fn test_redrop_onto_current_folder_appends_last() {
        // Re-dropping a child onto its own folder moves it behind every
        // sibling without duplicating any order value
        let nodes = vec![
            folder("f", None, 0),
            node("c1", Some("f"), 0),
            node("c2", Some("f"), 1),
        ];

        let updated = resolve_drop(&nodes, &onto("c1", "f"), Permissions::editor());
        let dragged = find(&updated, "c1");
        assert_eq!(dragged.parent_id.as_deref(), Some("f"));
        assert_eq!(dragged.order, 2);
        assert_eq!(find(&updated, "c2").order, 1);

        let mut orders: Vec<i64> = updated
            .iter()
            .filter(|n| n.parent_id.as_deref() == Some("f"))
            .map(|n| n.order)
            .collect();
        orders.sort_unstable();
        orders.dedup();
        assert_eq!(orders.len(), 2);
    }

    #[test]
    fn test_is_descendant() {
        let nodes = vec![
            folder("f", None, 0),
            folder("g", Some("f"), 0),
            node("deep", Some("g"), 0),
            node("root", None, 1),
        ];

        assert!(is_descendant(&nodes, "f", "deep"));
        assert!(is_descendant(&nodes, "f", "g"));
        assert!(!is_descendant(&nodes, "g", "f"));
        assert!(!is_descendant(&nodes, "f", "root"));
        assert!(!is_descendant(&nodes, "f", "f"));
    }

    #[test]
    fn test_is_descendant_survives_corrupt_cycle() {
        // Imported data with a parent cycle must not loop forever
        let a = node("a", Some("b"), 0);
        let b = node("b", Some("a"), 0);

        assert!(!is_descendant(&[a, b], "x", "a"));
    }

    #[test]
    fn test_input_collection_never_mutated() {
        let nodes = vec![folder("f", None, 0), node("p", None, 1)];
        let snapshot = nodes.clone();

        let _ = resolve_drop(&nodes, &onto("p", "f"), Permissions::editor());
        assert_eq!(nodes, snapshot);
    }
}
