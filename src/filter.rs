//! Include/exclude path filtering.
//!
//! Each pattern is tested two ways and the results are OR'd:
//!
//! - as a glob, where `*` stays inside a path segment, `**` crosses segments and
//!   leading dots match like any other character;
//! - as a plain path prefix, when the pattern has no glob metacharacters: the path
//!   matches if it equals the pattern or lies underneath it.
//!
//! Exclusion always wins over inclusion. A pattern that fails to compile as a glob
//! never matches as a glob, but can still match as a plain prefix.

use globset::{GlobBuilder, GlobMatcher};

const GLOB_META: &[char] = &['*', '?', '[', ']', '{', '}'];

/// A single compiled pattern.
#[derive(Debug, Clone)]
struct Pattern {
    glob: Option<GlobMatcher>,
    plain: Option<String>,
}
impl Pattern {
    fn new(raw: &str) -> Self {
        let glob = match GlobBuilder::new(raw).literal_separator(true).build() {
            Ok(glob) => Some(glob.compile_matcher()),
            Err(_e) => {
                #[cfg(feature = "logging")]
                tracing::debug!("Skipping invalid glob pattern '{}': {}", raw, _e);
                None
            }
        };
        let plain = is_plain(raw).then(|| normalize(raw));
        Self { glob, plain }
    }
    fn matches(&self, path: &str) -> bool {
        self.glob.as_ref().is_some_and(|g| glob_match(g, path))
            || self.plain.as_deref().is_some_and(|p| prefix_match(p, path))
    }
}

fn glob_match(glob: &GlobMatcher, path: &str) -> bool {
    glob.is_match(path)
}

fn prefix_match(pattern: &str, path: &str) -> bool {
    path == pattern
        || path
            .strip_prefix(pattern)
            .is_some_and(|rest| rest.starts_with('/'))
}

/// Returns true if the pattern contains none of `* ? [ ] { }`.
pub fn is_plain(pattern: &str) -> bool {
    !pattern.contains(GLOB_META)
}

fn normalize(path: &str) -> String {
    path.replace('\\', "/")
}

fn compile(patterns: &[impl AsRef<str>]) -> Vec<Pattern> {
    patterns
        .iter()
        .map(|p| p.as_ref())
        .filter(|p| !p.is_empty())
        .map(Pattern::new)
        .collect()
}

/// Precompiled include and exclude lists.
///
/// Build one per invocation; it holds no mutable state.
#[derive(Debug, Clone)]
pub struct PathFilter {
    include: Vec<Pattern>,
    exclude: Vec<Pattern>,
    include_all: bool,
}
impl PathFilter {
    pub fn new(include: &[impl AsRef<str>], exclude: &[impl AsRef<str>]) -> Self {
        Self {
            include: compile(include),
            exclude: compile(exclude),
            include_all: include.is_empty(),
        }
    }

    /// Decides whether a root-relative path survives filtering.
    ///
    /// An empty include list includes every path that is not excluded.
    pub fn is_included(&self, relative: &str) -> bool {
        let path = normalize(relative);
        if self.exclude.iter().any(|p| p.matches(&path)) {
            return false;
        }
        if self.include_all {
            return true;
        }
        self.include.iter().any(|p| p.matches(&path))
    }
}

/// One-shot form of [`PathFilter::is_included`].
pub fn should_include(
    relative: &str,
    exclude: &[impl AsRef<str>],
    include: &[impl AsRef<str>],
) -> bool {
    PathFilter::new(include, exclude).is_included(relative)
}
