//! Error types for the tree printer and exporter

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for bundle operations
pub type Result<T> = std::result::Result<T, BundleError>;

/// Errors that abort a run. Per-file read failures are not errors at this
/// level; the exporter reports and skips them.
#[derive(Error, Debug)]
pub enum BundleError {
    /// Listing a directory failed
    #[error("cannot read directory '{}': {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The exporter's directory walk failed
    #[error("walk failed: {0}")]
    Walk(#[from] ignore::Error),

    /// Creating or writing an output chunk failed
    #[error("cannot write chunk '{}': {source}", .path.display())]
    Chunk {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing console output failed
    #[error("error writing output: {0}")]
    Io(#[from] io::Error),
}

impl BundleError {
    pub fn read_dir(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::ReadDir {
            path: path.into(),
            source,
        }
    }

    pub fn chunk(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Chunk {
            path: path.into(),
            source,
        }
    }
}
