use crate::error::ProjctxError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Patterns included when no include list is given.
pub const DEFAULT_INCLUDE: &[&str] = &[
    "**/*.rs",
    "**/*.toml",
    "**/*.ts",
    "**/*.tsx",
    "**/*.js",
    "**/*.jsx",
    "**/*.vue",
    "**/*.json",
    "**/*.yaml",
    "**/*.yml",
    "**/*.md",
    ".editorconfig",
    ".gitignore",
];

/// Patterns excluded when no exclude list is given.
pub const DEFAULT_EXCLUDE: &[&str] = &[
    "node_modules",
    "dist",
    "build",
    "out",
    "coverage",
    "target",
    ".git",
    "package-lock.json",
    "Cargo.lock",
    "LICENSE",
];

/// Default ceiling on the rendered document, in characters.
pub const DEFAULT_LIMIT: usize = 10_000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContextOptions {
    pub root: PathBuf,
    pub include: Vec<String>,
    pub exclude: Vec<String>,
    pub limit: usize,
}
impl Default for ContextOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            include: DEFAULT_INCLUDE.iter().map(|p| p.to_string()).collect(),
            exclude: DEFAULT_EXCLUDE.iter().map(|p| p.to_string()).collect(),
            limit: DEFAULT_LIMIT,
        }
    }
}
impl ContextOptions {
    /// Loads options from a JSON file. Missing fields keep their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ProjctxError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|e| ProjctxError::io(path, e))?;
        serde_json::from_str(&raw)
            .map_err(|e| ProjctxError::Config(format!("{}: {}", path.display(), e)))
    }
}
#[derive(Debug, Default)]
pub struct ContextBuilder {
    options: ContextOptions,
}
impl ContextBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            options: ContextOptions {
                root: root.into(),
                ..Default::default()
            },
        }
    }
    pub fn from_options(options: ContextOptions) -> Self {
        Self { options }
    }
    pub fn root(mut self, root: impl Into<PathBuf>) -> Self {
        self.options.root = root.into();
        self
    }
    pub fn include(mut self, patterns: Vec<String>) -> Self {
        self.options.include = patterns;
        self
    }
    pub fn exclude(mut self, patterns: Vec<String>) -> Self {
        self.options.exclude = patterns;
        self
    }
    pub fn limit(mut self, limit: usize) -> Self {
        self.options.limit = limit;
        self
    }
    pub fn build(self) -> ContextOptions {
        self.options
    }
}
