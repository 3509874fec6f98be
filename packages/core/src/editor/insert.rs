//! Insertion Execution
//!
//! Translates a chosen [`CommandAction`] into concrete host-editor calls.
//! Prompt-backed actions ask the value-prompt collaborator for a URL; a
//! cancelled prompt leaves only the already-performed range deletion behind.

use std::sync::OnceLock;

use regex::Regex;

use crate::editor::host::{EditOp, HostEditor, ValuePrompt};
use crate::models::CommandAction;

/// Matches the video id after `youtube.com/watch?v=` or `youtu.be/`, up to
/// the next `&`, newline, `?`, or `#`
fn youtube_id_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?:youtube\.com/watch\?v=|youtu\.be/)([^&\n?#]+)")
            .expect("youtube id pattern is valid")
    })
}

/// Extract a YouTube video identifier from a pasted URL.
///
/// Falls back to the raw input verbatim when no recognized URL shape is
/// found, degrading gracefully instead of failing.
pub fn extract_youtube_id(input: &str) -> &str {
    match youtube_id_pattern().captures(input) {
        Some(captures) => captures.get(1).map(|m| m.as_str()).unwrap_or(input),
        None => input,
    }
}

/// Execute a command action against the host editor.
///
/// Called by the session state machine after the trigger/query range has
/// been deleted. Prompt cancellation makes the remaining insertion a no-op.
pub fn execute_action(
    action: &CommandAction,
    host: &mut dyn HostEditor,
    prompt: &dyn ValuePrompt,
) {
    match action {
        CommandAction::ToggleBold => host.apply(EditOp::ToggleBold),
        CommandAction::ToggleHeading { level } => {
            host.apply(EditOp::ToggleHeading { level: *level })
        }
        CommandAction::ToggleList { kind } => host.apply(EditOp::ToggleList { kind: *kind }),
        CommandAction::InsertTable { rows, cols } => host.apply(EditOp::InsertTable {
            rows: *rows,
            cols: *cols,
        }),
        CommandAction::InsertRaw { html } => host.insert_raw(html),
        CommandAction::SetLink => {
            if let Some(url) = prompt.prompt("Enter link URL") {
                host.apply(EditOp::SetLink { url });
            }
        }
        CommandAction::SetImage => {
            if let Some(url) = prompt.prompt("Enter image URL") {
                host.apply(EditOp::SetImage { url });
            }
        }
        CommandAction::InsertVideo => {
            if let Some(url) = prompt.prompt("Enter video URL") {
                host.insert_raw(&format!("<video controls src=\"{}\"></video>", url));
            }
        }
        CommandAction::InsertYoutube => {
            if let Some(input) = prompt.prompt("Enter YouTube URL") {
                let video_id = extract_youtube_id(&input);
                host.insert_raw(&format!(
                    "<iframe src=\"https://www.youtube.com/embed/{}\" allowfullscreen></iframe>",
                    video_id
                ));
            }
        }
        CommandAction::InsertFile => {
            if let Some(url) = prompt.prompt("Enter file URL") {
                host.insert_raw(&format!(
                    "<a href=\"{}\" target=\"_blank\">{}</a>",
                    url, url
                ));
            }
        }
    }
}
