//! Errors raised while loading PGN files

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("cannot read {}: {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read PGN data: {0}")]
    Io(#[from] io::Error),

    #[error("game {game} is malformed: {message}")]
    Parse { game: usize, message: String },

    #[error("no games found in {origin}")]
    NoGames { origin: String },
}

impl LoadError {
    /// Attach the file path to a bare stream error.
    pub(crate) fn with_path(self, path: impl Into<PathBuf>) -> Self {
        match self {
            LoadError::Io(source) => LoadError::FileAccess {
                path: path.into(),
                source,
            },
            other => other,
        }
    }
}
