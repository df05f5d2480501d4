//! Plain text rendering
//!
//! Joins rows into a single payload and optionally fences it for markdown.

use std::fs;
use std::path::Path;

use crate::error::{Result, TreeError};
use crate::tree::TreeRow;

const FENCE_OPEN: &str = "```text\n";
const FENCE_CLOSE: &str = "\n```";

/// Join rows with newlines, without a trailing newline.
pub fn render_rows(rows: &[TreeRow]) -> String {
    rows.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Wrap `text` in a fenced `text` code block.
pub fn wrap_markdown(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + FENCE_OPEN.len() + FENCE_CLOSE.len());
    out.push_str(FENCE_OPEN);
    out.push_str(text);
    out.push_str(FENCE_CLOSE);
    out
}

/// Final text payload: joined rows, fenced when `markdown` is set.
pub fn render_text(rows: &[TreeRow], markdown: bool) -> String {
    let text = render_rows(rows);
    if markdown { wrap_markdown(&text) } else { text }
}

/// Write the payload to `path` as UTF-8, replacing any existing file.
pub fn write_file(path: &Path, text: &str) -> Result<()> {
    fs::write(path, text).map_err(|e| TreeError::io(path, e))
}
