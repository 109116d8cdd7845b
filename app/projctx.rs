//! Command-line interface for projctx.
//!
//! Walks a project directory and prints a markdown snapshot of the selected files,
//! or just the list of paths that would be included.

use clap::{Parser, ValueEnum};
use projctx::{ContextBuilder, ContextOptions, ProjctxError, gather, output, project_context};
use std::path::PathBuf;
use std::process::exit;

/// projctx — project snapshot for prompts and reviews
#[derive(Parser)]
#[command(name = "projctx", version, about, long_about = None)]
struct Cli {
    /// Root directory (default current dir)
    root: Option<PathBuf>,

    /// Include patterns, replacing the defaults (can be repeated)
    #[arg(short = 'i', long = "include")]
    include: Vec<String>,

    /// Exclude patterns, replacing the defaults (can be repeated)
    #[arg(short = 'e', long = "exclude")]
    exclude: Vec<String>,

    /// Start from an empty include list (every file not excluded is kept)
    #[arg(long)]
    no_default_include: bool,

    /// Start from an empty exclude list
    #[arg(long)]
    no_default_exclude: bool,

    /// Maximum document length in characters
    #[arg(long)]
    limit: Option<usize>,

    /// JSON file with root, include, exclude and limit
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write the document to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Markdown)]
    format: OutputFormat,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Markdown,
    Paths,
}

impl Cli {
    fn into_options(self) -> Result<(ContextOptions, OutputFormat, Option<PathBuf>), ProjctxError> {
        let base = match &self.config {
            Some(path) => ContextOptions::from_json_file(path)?,
            None => ContextOptions::default(),
        };
        let mut builder = ContextBuilder::from_options(base);

        if let Some(root) = self.root {
            builder = builder.root(root);
        }
        if self.no_default_include {
            builder = builder.include(Vec::new());
        }
        if !self.include.is_empty() {
            builder = builder.include(self.include);
        }
        if self.no_default_exclude {
            builder = builder.exclude(Vec::new());
        }
        if !self.exclude.is_empty() {
            builder = builder.exclude(self.exclude);
        }
        if let Some(limit) = self.limit {
            builder = builder.limit(limit);
        }

        Ok((builder.build(), self.format, self.output))
    }
}

#[cfg(feature = "logging")]
fn init_logging() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() {
    #[cfg(feature = "logging")]
    init_logging();

    let cli = Cli::parse();
    let (options, format, output_path) = cli.into_options().unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        exit(1);
    });

    let rendered = match format {
        OutputFormat::Markdown => project_context(options),
        OutputFormat::Paths => gather(&options).map(|files| {
            files
                .iter()
                .map(|file| format!("{}\n", file.relative))
                .collect::<String>()
        }),
    };

    let document = rendered.unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        exit(1);
    });

    match output_path {
        Some(path) => {
            if let Err(e) = output::write_document(&document, &path) {
                eprintln!("Error: {}", e);
                exit(1);
            }
        }
        None => print!("{}", document),
    }
}
