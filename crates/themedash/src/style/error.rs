//! Stylesheet loading errors.

use std::io;
use std::path::PathBuf;

/// Error returned when a stylesheet resource cannot be loaded.
///
/// Both variants are recoverable: the host reports them as notices and keeps
/// rendering with whatever styling is already active.
#[derive(Debug, thiserror::Error)]
pub enum StyleError {
    /// The stylesheet file does not exist.
    #[error("stylesheet not found: {}", path.display())]
    NotFound { path: PathBuf },
    /// The file exists but could not be read as text.
    #[error("failed to read stylesheet {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl StyleError {
    /// Path of the stylesheet that failed to load.
    pub fn path(&self) -> &PathBuf {
        match self {
            StyleError::NotFound { path } | StyleError::Read { path, .. } => path,
        }
    }
}
