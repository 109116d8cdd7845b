use crate::error::ProjctxError;
use crate::filter::PathFilter;
use crate::options::ContextOptions;
use crate::output::render_document;
use crate::types::FileEntry;
use ignore::WalkBuilder;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
struct Walker {
    inner: ignore::Walk,
}
impl Walker {
    fn new(root: &Path) -> Result<Self, ProjctxError> {
        let metadata = fs::metadata(root).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => ProjctxError::NotFound(root.to_path_buf()),
            _ => ProjctxError::io(root, e),
        })?;
        if !metadata.is_dir() {
            return Err(ProjctxError::NotADirectory(root.to_path_buf()));
        }
        let mut builder = WalkBuilder::new(root);
        builder.standard_filters(false).follow_links(true);
        Ok(Self {
            inner: builder.build(),
        })
    }
    fn into_iter(self) -> impl Iterator<Item = Result<PathBuf, ProjctxError>> {
        self.inner.filter_map(|result| match result {
            Ok(entry) if entry.depth() > 0 && entry.path().is_file() => {
                Some(Ok(entry.into_path()))
            }
            Ok(_) => None,
            Err(e) => Some(Err(ProjctxError::Walk(e.to_string()))),
        })
    }
}

/// Lists every regular file under `root`, unordered and unfiltered.
///
/// Directory links are descended and file links are listed as files. A link
/// loop surfaces as a walk error.
///
/// Fails if `root` is missing or not a directory, and on the first directory
/// that cannot be read.
pub fn collect_files(root: impl AsRef<Path>) -> Result<Vec<PathBuf>, ProjctxError> {
    Walker::new(root.as_ref())?.into_iter().collect()
}

/// Root-relative path joined with `/` regardless of the host separator.
pub fn relative_path(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

fn read_file_content(path: &Path) -> Result<String, ProjctxError> {
    let bytes = fs::read(path).map_err(|e| ProjctxError::io(path, e))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Walks, sorts, filters and reads the files selected by `options`.
pub fn gather(options: &ContextOptions) -> Result<Vec<FileEntry>, ProjctxError> {
    #[cfg(feature = "logging")]
    tracing::debug!("Gathering files under root: {}", options.root.display());
    let mut paths = collect_files(&options.root)?;
    paths.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));
    let filter = PathFilter::new(options.include.as_slice(), options.exclude.as_slice());
    let mut files = Vec::new();
    for path in paths {
        let relative = relative_path(&options.root, &path);
        if !filter.is_included(&relative) {
            #[cfg(feature = "logging")]
            tracing::trace!("Filtered out: {}", relative);
            continue;
        }
        let content = read_file_content(&path)?;
        files.push(FileEntry {
            path,
            relative,
            content,
        });
    }
    #[cfg(feature = "logging")]
    tracing::debug!("Included {} files", files.len());
    Ok(files)
}

/// Renders the markdown snapshot of the files selected by `options`.
///
/// Fails with [`ProjctxError::LimitExceeded`] rather than truncating when the
/// document is longer than `options.limit` characters, counted as UTF-16 code units.
pub fn project_context(options: ContextOptions) -> Result<String, ProjctxError> {
    let files = gather(&options)?;
    let document = render_document(&files);
    let actual = document.encode_utf16().count();
    if actual > options.limit {
        #[cfg(feature = "logging")]
        tracing::debug!("Document too large ({} > {})", actual, options.limit);
        return Err(ProjctxError::LimitExceeded {
            limit: options.limit,
            actual,
        });
    }
    Ok(document)
}
