//! Document Tree Engine
//!
//! Maintains the forest structure of documents/folders over flat
//! `DocumentNode` collections:
//!
//! - `build_tree` / `flatten_tree` - Pure queries between the flat collection
//!   and the nested `TreeNode` view
//! - `resolve_drop` - Deterministic resolution of a drag-and-drop gesture
//!   into reorder-sibling, nest-into-folder, or promote-to-folder-and-nest
//!
//! The engine never mutates its input; `resolve_drop` validates fully and
//! returns a new collection, so a rejected drop cannot leave partial writes.

pub mod build;
pub mod drop;

pub use build::{build_tree, flatten_tree, TreeNode};
pub use drop::{is_descendant, resolve_drop, DropEvent, DropTarget, Permissions};
