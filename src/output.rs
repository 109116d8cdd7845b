//! Markdown rendering of gathered files.
//!
//! Content is written verbatim inside a plain code fence. Fence sequences inside
//! the content are not escaped.

use crate::{FileEntry, ProjctxError};
use std::fs;
use std::path::Path;

/// Renders one file as a second-level heading followed by its fenced content.
pub fn render_section(relative: &str, content: &str) -> String {
    format!("## {}\n\n```\n{}\n```\n", relative, content)
}

/// Renders every file in order, separating sections with a single newline.
///
/// An empty file list renders as an empty string.
pub fn render_document(files: &[FileEntry]) -> String {
    files
        .iter()
        .map(|file| render_section(&file.relative, &file.content))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Writes a rendered document to a file.
pub fn write_document(document: &str, path: impl AsRef<Path>) -> Result<(), ProjctxError> {
    fs::write(&path, document).map_err(|e| ProjctxError::io(path.as_ref(), e))?;
    Ok(())
}
