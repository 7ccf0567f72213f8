//! Error types for the recoverable failure paths.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Food or power-up placement failure.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    #[error("no free cell left on the board ({cells} cells occupied)")]
    BoardFull { cells: usize },
}

/// Invalid or unreadable game configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("tile count {value} is outside {min}..={max}")]
    TileCountOutOfRange { value: u16, min: u16, max: u16 },

    #[error("points per food {value} exceeds {max}")]
    PointsOutOfRange { value: u32, max: u32 },

    #[error("invalid tick interval: {0}")]
    InvalidTickInterval(String),

    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Best-score persistence failure.
#[derive(Error, Debug)]
pub enum ScoreError {
    #[error("score file I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("score file is malformed: {0}")]
    Parse(#[from] serde_json::Error),
}

impl From<ConfigError> for io::Error {
    fn from(error: ConfigError) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, error)
    }
}
