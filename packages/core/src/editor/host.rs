//! Host Editor Capability Traits
//!
//! The slash engine consumes the rich-text surface through [`HostEditor`]
//! and obtains supplementary values (URLs) through [`ValuePrompt`]. Both are
//! injected, so the session state machine runs against mocks in tests.
//!
//! Document positions are character offsets from the start of the document.

use crate::models::ListKind;

/// On-screen coordinates of a document position, used for menu placement
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

/// The fixed set of named rich-text operations the host editor exposes
#[derive(Debug, Clone, PartialEq)]
pub enum EditOp {
    ToggleBold,
    ToggleHeading { level: u8 },
    ToggleList { kind: ListKind },
    InsertTable { rows: u32, cols: u32 },
    SetLink { url: String },
    SetImage { url: String },
}

/// Capability interface of the host rich-text surface.
///
/// The cursor/selection model, undo history, and DOM rendering all live on
/// the host side; the engine only reads positions and issues edits.
pub trait HostEditor {
    /// Current cursor position as a character offset into the document
    fn cursor_position(&self) -> usize;

    /// Plain text of the block containing the cursor, from block start up to
    /// the cursor (exclusive)
    fn block_text_before_cursor(&self) -> String;

    /// On-screen coordinates of a document position
    fn screen_coordinates(&self, at: usize) -> ScreenPoint;

    /// Delete the character range `[from, to)`
    fn delete_range(&mut self, from: usize, to: usize);

    /// Apply one of the named rich-text operations at the cursor
    fn apply(&mut self, op: EditOp);

    /// Insert raw content (HTML) at the cursor
    fn insert_raw(&mut self, html: &str);

    /// Return keyboard focus to the editing surface
    fn focus(&mut self);
}

/// Synchronous value-prompt collaborator.
///
/// Returns `None` when the user cancels, which turns the pending insertion
/// into a no-op.
pub trait ValuePrompt {
    fn prompt(&self, message: &str) -> Option<String>;
}
