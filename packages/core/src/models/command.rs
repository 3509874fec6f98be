//! Slash Command Catalog
//!
//! Commands are static data defined once at startup. Each command carries its
//! host-editor operation as a structured [`CommandAction`] descriptor, so
//! adding a command is a data change rather than a new dispatch arm.

use serde::{Deserialize, Serialize};

/// List flavor for the toggle-list operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ListKind {
    Bullet,
    Numbered,
}

/// Structured descriptor of the host-editor operation a command performs.
///
/// Actions that need a supplementary value (URL, file location) obtain it
/// through the synchronous prompt collaborator at execution time; a cancelled
/// prompt turns the insertion into a no-op.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum CommandAction {
    ToggleBold,
    ToggleHeading { level: u8 },
    ToggleList { kind: ListKind },
    InsertTable { rows: u32, cols: u32 },
    InsertRaw { html: String },
    SetLink,
    SetImage,
    InsertVideo,
    InsertYoutube,
    InsertFile,
}

/// A single entry in the slash-command catalog.
///
/// Defined once per process and never mutated. `keywords` are lowercase
/// substrings used by the live filter alongside the label and id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Command {
    /// Unique identifier, e.g. "heading1"
    pub id: String,

    /// Human-readable menu label
    pub label: String,

    /// Lowercase keywords for substring matching
    pub keywords: Vec<String>,

    /// Host-editor operation to perform on confirm
    pub action: CommandAction,
}

impl Command {
    /// Keywords are lowercased here so the filter can match without
    /// normalizing them on every keystroke.
    pub fn new(id: &str, label: &str, keywords: &[&str], action: CommandAction) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
            action,
        }
    }
}

/// Built-in command catalog.
///
/// Covers the fixed operation set the host editor exposes: headings, bold,
/// lists, tables, raw-content insertion (divider, quote), and the
/// prompt-backed link/image/video/youtube/file insertions.
pub fn default_catalog() -> Vec<Command> {
    vec![
        Command::new(
            "heading1",
            "Heading 1",
            &["h1", "heading", "title"],
            CommandAction::ToggleHeading { level: 1 },
        ),
        Command::new(
            "heading2",
            "Heading 2",
            &["h2", "heading", "subtitle"],
            CommandAction::ToggleHeading { level: 2 },
        ),
        Command::new(
            "heading3",
            "Heading 3",
            &["h3", "heading"],
            CommandAction::ToggleHeading { level: 3 },
        ),
        Command::new(
            "bold",
            "Bold",
            &["b", "strong"],
            CommandAction::ToggleBold,
        ),
        Command::new(
            "bulletList",
            "Bullet List",
            &["list", "bullet", "ul"],
            CommandAction::ToggleList {
                kind: ListKind::Bullet,
            },
        ),
        Command::new(
            "numberedList",
            "Numbered List",
            &["list", "numbered", "ordered", "ol"],
            CommandAction::ToggleList {
                kind: ListKind::Numbered,
            },
        ),
        Command::new(
            "table",
            "Table",
            &["table", "grid"],
            CommandAction::InsertTable { rows: 3, cols: 3 },
        ),
        Command::new(
            "divider",
            "Divider",
            &["hr", "rule", "separator"],
            CommandAction::InsertRaw {
                html: "<hr>".to_string(),
            },
        ),
        Command::new(
            "quote",
            "Quote",
            &["blockquote", "citation"],
            CommandAction::InsertRaw {
                html: "<blockquote></blockquote>".to_string(),
            },
        ),
        Command::new("link", "Link", &["url", "href"], CommandAction::SetLink),
        Command::new(
            "image",
            "Image",
            &["img", "picture", "photo"],
            CommandAction::SetImage,
        ),
        Command::new(
            "video",
            "Video",
            &["movie", "mp4"],
            CommandAction::InsertVideo,
        ),
        Command::new(
            "youtube",
            "YouTube",
            &["video", "embed", "yt"],
            CommandAction::InsertYoutube,
        ),
        Command::new(
            "file",
            "File",
            &["attachment", "upload", "document"],
            CommandAction::InsertFile,
        ),
    ]
}
