//! Tree Construction Queries
//!
//! Pure transformations between the flat `DocumentNode` collection and the
//! nested view the presentation layer renders. Sibling groups are sorted
//! ascending by `order` with a stable sort, so legacy data with duplicate
//! order values keeps its original array position as the tie-break.

use serde::Serialize;

use crate::models::DocumentNode;

/// One node of the nested tree view with its ordered children
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeNode {
    #[serde(flatten)]
    pub node: DocumentNode,
    pub children: Vec<TreeNode>,
}

/// Build the ordered subtree rooted at `parent_id`.
///
/// `None` builds the root forest. Direct children are selected by
/// `parent_id` equality and stable-sorted ascending by `order`; each child's
/// own children are attached recursively the same way.
pub fn build_tree(nodes: &[DocumentNode], parent_id: Option<&str>) -> Vec<TreeNode> {
    let mut level: Vec<&DocumentNode> = nodes
        .iter()
        .filter(|n| n.parent_id.as_deref() == parent_id)
        .collect();
    level.sort_by_key(|n| n.order);

    level
        .into_iter()
        .map(|n| TreeNode {
            node: n.clone(),
            children: build_tree(nodes, Some(&n.id)),
        })
        .collect()
}

/// Flatten a nested tree back into a flat collection, depth-first.
///
/// Inverse of [`build_tree`]: parent/order relationships survive a
/// build/flatten round trip.
pub fn flatten_tree(tree: &[TreeNode]) -> Vec<DocumentNode> {
    let mut flat = Vec::new();
    collect(tree, &mut flat);
    flat
}

fn collect(tree: &[TreeNode], flat: &mut Vec<DocumentNode>) {
    for entry in tree {
        flat.push(entry.node.clone());
        collect(&entry.children, flat);
    }
}
