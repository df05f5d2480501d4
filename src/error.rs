//! Error types for tree building and output

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal errors raised while building or writing a tree.
///
/// Access-denied directories below the root are not errors: they are
/// rendered as `[denied]` rows and the walk continues.
#[derive(Debug, Error)]
pub enum TreeError {
    #[error("path not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl TreeError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        TreeError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T, E = TreeError> = std::result::Result<T, E>;
