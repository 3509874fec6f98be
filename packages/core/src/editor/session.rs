//! Slash Session State Machine
//!
//! One engine instance owns the command catalog and at most one active
//! session. A session begins when the trigger character is typed at the start
//! of a block or after whitespace, tracks the query typed since the trigger,
//! and ends on confirm, cancel, or when the typed text stops matching the
//! trigger pattern.
//!
//! The engine is notified *after* the host has applied each text-mutating
//! keystroke (`notify_input`); navigation and commit keys go through
//! `handle_key` and are fully consumed while a session is active.

use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

use crate::editor::filter::filter_commands;
use crate::editor::host::{HostEditor, ScreenPoint, ValuePrompt};
use crate::editor::insert::execute_action;
use crate::models::Command;

/// Conventional trigger character
pub const DEFAULT_TRIGGER: char = '/';

/// Letters-only pattern the text after the trigger must keep matching
fn query_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[A-Za-z]*$").expect("query pattern is valid"))
}

/// Keys the engine consumes while a session is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionKey {
    Up,
    Down,
    Enter,
    Tab,
    Escape,
}

/// Ephemeral state of one in-progress command menu interaction.
///
/// `anchor` is the character offset of the trigger character itself, so the
/// range `[anchor, cursor)` covers the trigger plus the typed query and is
/// exactly what confirm/cancel delete.
#[derive(Debug, Clone, PartialEq)]
pub struct SlashSession {
    /// Offset of the trigger character
    pub anchor: usize,
    /// Text typed since the trigger, lowercase-normalized
    pub query: String,
    /// Index into the currently filtered command list, clamped when the
    /// filtered list shrinks
    pub selected: usize,
}

/// Session lifecycle state
#[derive(Debug, Default)]
enum SessionState {
    /// No session active; keystrokes are ordinary typing
    #[default]
    Idle,
    /// A trigger was detected and the menu is live
    Active(SlashSession),
}

/// Slash-command engine: catalog plus at most one active session.
///
/// All methods are synchronous and complete within the keystroke that
/// triggered them. Starting a new session implicitly discards any previous
/// one.
pub struct SlashEngine {
    catalog: Vec<Command>,
    trigger: char,
    state: SessionState,
}

impl SlashEngine {
    /// Create an engine over the given catalog with the conventional `/`
    /// trigger
    pub fn new(catalog: Vec<Command>) -> Self {
        Self::with_trigger(catalog, DEFAULT_TRIGGER)
    }

    /// Create an engine with a custom trigger character
    pub fn with_trigger(catalog: Vec<Command>, trigger: char) -> Self {
        Self {
            catalog,
            trigger,
            state: SessionState::Idle,
        }
    }

    /// True while a session is active
    pub fn is_active(&self) -> bool {
        matches!(self.state, SessionState::Active(_))
    }

    /// The active session, if any
    pub fn session(&self) -> Option<&SlashSession> {
        match &self.state {
            SessionState::Active(session) => Some(session),
            SessionState::Idle => None,
        }
    }

    /// Commands matching the current query, in catalog order.
    ///
    /// Empty when no session is active.
    pub fn filtered(&self) -> Vec<&Command> {
        match &self.state {
            SessionState::Active(session) => filter_commands(&self.catalog, &session.query),
            SessionState::Idle => Vec::new(),
        }
    }

    /// Index of the highlighted entry in the filtered list
    pub fn selected_index(&self) -> usize {
        self.session().map(|s| s.selected).unwrap_or(0)
    }

    /// Screen coordinates of the trigger position, for menu placement
    pub fn menu_position(&self, host: &dyn HostEditor) -> Option<ScreenPoint> {
        self.session()
            .map(|session| host.screen_coordinates(session.anchor))
    }

    /// Notify the engine that the host applied a text-mutating keystroke.
    ///
    /// `typed` is the inserted character, or `None` for deletions. While
    /// active, recomputes the query from the text between the trigger and
    /// the cursor; the session ends silently when that text stops matching
    /// the letters-only pattern, when the trigger was deleted, or when the
    /// cursor left the trigger's block. When idle (including a session that
    /// just ended), a keystroke that typed the trigger at the start of a
    /// block or after whitespace begins a session; a deletion never does.
    pub fn notify_input(&mut self, host: &dyn HostEditor, typed: Option<char>) {
        let cursor = host.cursor_position();
        let block: Vec<char> = host.block_text_before_cursor().chars().collect();
        let block_start = cursor.saturating_sub(block.len());

        if let SessionState::Active(session) = &mut self.state {
            match Self::recompute_query(session, self.trigger, &block, block_start) {
                Some(query) => {
                    let filtered_len = filter_commands(&self.catalog, &query).len();
                    session.query = query;
                    session.selected = session.selected.min(filtered_len.saturating_sub(1));
                    return;
                }
                None => {
                    debug!(anchor = session.anchor, "slash session ended by input");
                    self.state = SessionState::Idle;
                }
            }
        }

        // Idle (possibly just ended above): look for a fresh trigger. The
        // ended-session branch never re-triggers here because a trigger
        // typed directly after the old query text is preceded by a letter,
        // not whitespace.
        if typed == Some(self.trigger) && block.last() == Some(&self.trigger) {
            let at_block_start = block.len() == 1;
            let after_whitespace = block.len() >= 2 && block[block.len() - 2].is_whitespace();
            if at_block_start || after_whitespace {
                let anchor = cursor - 1;
                debug!(anchor, "slash session started");
                self.state = SessionState::Active(SlashSession {
                    anchor,
                    query: String::new(),
                    selected: 0,
                });
            }
        }
    }

    /// Text between trigger and cursor, when still a valid session query
    fn recompute_query(
        session: &SlashSession,
        trigger: char,
        block: &[char],
        block_start: usize,
    ) -> Option<String> {
        if session.anchor < block_start {
            // Cursor moved to another block
            return None;
        }

        let trigger_index = session.anchor - block_start;
        if block.get(trigger_index) != Some(&trigger) {
            // Trigger character was deleted or replaced
            return None;
        }

        let candidate: String = block[trigger_index + 1..].iter().collect();
        if query_pattern().is_match(&candidate) {
            Some(candidate.to_lowercase())
        } else {
            None
        }
    }

    /// Move the highlight down one entry, clamped to the last entry.
    ///
    /// Returns false (key not consumed) when no session is active.
    pub fn select_next(&mut self) -> bool {
        let filtered_len = match &self.state {
            SessionState::Active(session) => filter_commands(&self.catalog, &session.query).len(),
            SessionState::Idle => return false,
        };
        if let SessionState::Active(session) = &mut self.state {
            if filtered_len > 0 {
                session.selected = (session.selected + 1).min(filtered_len - 1);
            }
        }
        true
    }

    /// Move the highlight up one entry, clamped to the first entry.
    ///
    /// Returns false (key not consumed) when no session is active.
    pub fn select_previous(&mut self) -> bool {
        match &mut self.state {
            SessionState::Active(session) => {
                session.selected = session.selected.saturating_sub(1);
                true
            }
            SessionState::Idle => false,
        }
    }

    /// Execute the highlighted command and end the session.
    ///
    /// Deletes the trigger/query range `[anchor, cursor)`, performs the
    /// command's action (prompt-backed actions may still turn into a no-op
    /// when cancelled), and refocuses the host. An empty filtered list only
    /// ends the session.
    ///
    /// # Panics
    ///
    /// Panics when no session is active; that is a caller bug, not an input
    /// condition.
    pub fn confirm(&mut self, host: &mut dyn HostEditor, prompt: &dyn ValuePrompt) {
        let session = match std::mem::take(&mut self.state) {
            SessionState::Active(session) => session,
            SessionState::Idle => panic!("confirm called with no active slash session"),
        };

        let filtered = filter_commands(&self.catalog, &session.query);
        let Some(command) = filtered.get(session.selected).copied() else {
            debug!(query = %session.query, "confirm with empty command list");
            return;
        };

        let cursor = host.cursor_position();
        host.delete_range(session.anchor, cursor);
        execute_action(&command.action, host, prompt);
        host.focus();
        debug!(command = %command.id, "slash command executed");
    }

    /// Remove the typed trigger and query text and end the session.
    ///
    /// # Panics
    ///
    /// Panics when no session is active; that is a caller bug, not an input
    /// condition.
    pub fn cancel(&mut self, host: &mut dyn HostEditor) {
        let session = match std::mem::take(&mut self.state) {
            SessionState::Active(session) => session,
            SessionState::Idle => panic!("cancel called with no active slash session"),
        };

        let cursor = host.cursor_position();
        host.delete_range(session.anchor, cursor);
        debug!(anchor = session.anchor, "slash session cancelled");
    }

    /// Route a navigation/commit key.
    ///
    /// Returns true when the key was consumed (a session is active) and must
    /// not reach the underlying editor.
    pub fn handle_key(
        &mut self,
        key: SessionKey,
        host: &mut dyn HostEditor,
        prompt: &dyn ValuePrompt,
    ) -> bool {
        if !self.is_active() {
            return false;
        }

        match key {
            SessionKey::Down => self.select_next(),
            SessionKey::Up => self.select_previous(),
            SessionKey::Enter | SessionKey::Tab => {
                self.confirm(host, prompt);
                true
            }
            SessionKey::Escape => {
                self.cancel(host);
                true
            }
        }
    }
}
