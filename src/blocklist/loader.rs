//! File-based blocklist loader.
//!
//! Reads blocklists, ignore lists and CDN lists from the local filesystem.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Error type for blocklist file loading operations.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// File was not found at the specified path.
    #[error("file not found: {0:?}")]
    NotFound(PathBuf),

    /// Permission denied when accessing the file.
    #[error("permission denied: {0:?}")]
    PermissionDenied(PathBuf),

    /// I/O error while reading the file.
    #[error("I/O error reading {path:?}")]
    Io {
        /// Path to the file that caused the error.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Loads raw blocklist lines from local files.
pub struct FileLoader;

impl FileLoader {
    /// Load a file and split it into raw lines.
    ///
    /// Lines are returned exactly as read, minus the line terminator; comments,
    /// blank lines and hosts prefixes are left for the
    /// [`ListBuilder`](super::ListBuilder) to deal with.
    ///
    /// # Errors
    ///
    /// Returns a [`LoadError`] if:
    /// - The file does not exist ([`LoadError::NotFound`])
    /// - Permission is denied ([`LoadError::PermissionDenied`])
    /// - An I/O error occurs or the file is not UTF-8 ([`LoadError::Io`])
    ///
    /// # Example
    ///
    /// ```no_run
    /// use std::path::Path;
    /// use blocklist_parser::blocklist::{FileLoader, ListBuilder};
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let lines = FileLoader::load(Path::new("/etc/blocklists/hosts.txt")).await?;
    /// let domains = ListBuilder::new().build(&lines);
    /// println!("Loaded {} domains", domains.len());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn load(path: &Path) -> Result<Vec<String>, LoadError> {
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|err| match err.kind() {
                ErrorKind::NotFound => LoadError::NotFound(path.to_path_buf()),
                ErrorKind::PermissionDenied => LoadError::PermissionDenied(path.to_path_buf()),
                _ => LoadError::Io {
                    path: path.to_path_buf(),
                    source: err,
                },
            })?;

        let lines: Vec<String> = content.lines().map(str::to_owned).collect();
        tracing::debug!(path = ?path, lines = lines.len(), "read blocklist file");
        Ok(lines)
    }
}
