//! Context types for rule execution.

use std::path::{Path, PathBuf};

/// Context provided to rules for one declaration dump.
///
/// The interesting content lives in the dump itself; the context carries
/// where the dump came from so reports can reference it.
#[derive(Debug, Clone)]
pub struct FileContext<'a> {
    /// Absolute path to the dump file.
    pub path: &'a Path,
    /// Dump path relative to the analysis root.
    pub relative_path: PathBuf,
}

impl<'a> FileContext<'a> {
    /// Creates a new file context.
    #[must_use]
    pub fn new(path: &'a Path, root: &Path) -> Self {
        let relative_path = path
            .strip_prefix(root)
            .map_or_else(|_| path.to_path_buf(), Path::to_path_buf);
        Self {
            path,
            relative_path,
        }
    }
}
