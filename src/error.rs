use std::path::PathBuf;
use thiserror::Error;

/// Core library errors
#[derive(Error, Debug)]
pub enum SeekerError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Listing(#[from] ListingError),

    #[error("IO error at path '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Errors that abort a directory listing.
///
/// Failures on individual children never surface here; those entries are
/// dropped from the listing instead.
#[derive(Error, Debug)]
pub enum ListingError {
    #[error("No such directory: {0}")]
    NotFound(PathBuf),

    #[error("Permission denied: {0}")]
    PermissionDenied(PathBuf),

    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("Cannot read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ListingError {
    /// Classify an OS error raised while opening `path`.
    pub fn from_io(path: PathBuf, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => ListingError::NotFound(path),
            std::io::ErrorKind::PermissionDenied => ListingError::PermissionDenied(path),
            _ => ListingError::Io { path, source: err },
        }
    }

    /// Path the failed listing was attempted on.
    pub fn path(&self) -> &std::path::Path {
        match self {
            ListingError::NotFound(path)
            | ListingError::PermissionDenied(path)
            | ListingError::NotADirectory(path) => path,
            ListingError::Io { path, .. } => path,
        }
    }
}

/// Configuration-specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, SeekerError>;
