use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A file that survived filtering, with its content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    /// The path as discovered by the walk (root joined with the relative part).
    pub path: PathBuf,
    /// The path relative to the root, always joined with `/`.
    pub relative: String,
    /// The file content decoded as UTF-8.
    ///
    /// Invalid byte sequences are replaced with `U+FFFD`.
    pub content: String,
}
