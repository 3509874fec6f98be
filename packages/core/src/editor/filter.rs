//! Catalog Filtering
//!
//! Substring matching of the lowercase query against each command's
//! keywords, label, and id. An empty query keeps the whole catalog.

use crate::models::Command;

/// Filter the catalog against a lowercase query.
///
/// A command is included when the query is empty, or when any keyword, the
/// lowercased label, or the lowercased id contains the query as a substring.
/// Catalog order is preserved.
pub fn filter_commands<'a>(catalog: &'a [Command], query: &str) -> Vec<&'a Command> {
    if query.is_empty() {
        return catalog.iter().collect();
    }

    let query = query.to_lowercase();
    catalog
        .iter()
        .filter(|command| {
            command.keywords.iter().any(|k| k.contains(&query))
                || command.label.to_lowercase().contains(&query)
                || command.id.to_lowercase().contains(&query)
        })
        .collect()
}
