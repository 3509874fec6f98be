//! Slash Command Engine
//!
//! Turns a trigger character typed inside a rich-text surface into a
//! transient, filterable, keyboard-navigable command menu:
//!
//! - `SlashEngine` - Session state machine (trigger detection, live
//!   filtering, clamped selection, confirm/cancel)
//! - `HostEditor` / `ValuePrompt` - Capability traits the host surface and
//!   prompt collaborator implement; the engine is testable without any real
//!   rendering surface
//! - `filter_commands` - Catalog filtering by keyword/label/id substring
//!
//! The engine never touches document-tree data; it only mutates the host
//! editor's own content through the capability trait.

pub mod filter;
pub mod host;
pub mod insert;
pub mod session;

pub use filter::filter_commands;
pub use host::{EditOp, HostEditor, ScreenPoint, ValuePrompt};
pub use insert::extract_youtube_id;
pub use session::{SessionKey, SlashEngine, SlashSession};
