//! # Projctx
//!
//! `projctx` produces a single markdown snapshot of a project: it walks a directory
//! tree, keeps the files accepted by include/exclude patterns, and renders each one
//! as a `## relative/path` heading followed by its content in a code fence.
//!
//! Output is deterministic: files appear in byte-wise order of their walked paths.
//! If the document is longer than the configured limit the call fails instead of
//! truncating.
//!
//! # Features
//!
//! - `logging`: Enables debug logging via the `tracing` crate.
//!
//! # Example
//!
//! ```no_run
//! use projctx::{ContextBuilder, project_context};
//!
//! let options = ContextBuilder::new(".")
//!     .include(vec!["**/*.rs".into(), "Cargo.toml".into()])
//!     .exclude(vec!["target".into()])
//!     .limit(50_000)
//!     .build();
//!
//! let document = project_context(options).expect("Failed to snapshot project");
//! println!("{}", document);
//! ```

mod engine;
mod error;
pub mod filter;
mod options;
pub mod output;
mod types;

pub use engine::{collect_files, gather, project_context, relative_path};
pub use error::ProjctxError;
pub use filter::{PathFilter, should_include};
pub use options::{ContextBuilder, ContextOptions, DEFAULT_EXCLUDE, DEFAULT_INCLUDE, DEFAULT_LIMIT};
pub use types::FileEntry;
