//! Error types for status icon generation.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The base icon does not exist.
    #[error("base icon not found at {path}")]
    InputNotFound { path: PathBuf },

    /// The base icon exists but could not be decoded.
    #[error("failed to decode image {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// PNG encoding failed.
    #[error("failed to encode PNG {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The OS refused to let us write an output file or directory.
    #[error("permission denied writing {path}: {source}")]
    WritePermissionDenied {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Any other IO failure while writing outputs.
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid {name} color: {value}")]
    InvalidColor { name: String, value: String },

    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    #[error("failed to serialize icons.json: {0}")]
    Manifest(#[from] serde_json::Error),
}

impl Error {
    /// Classify an IO error raised while writing `path`.
    pub fn from_write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::PermissionDenied {
            Error::WritePermissionDenied { path, source }
        } else {
            Error::Write { path, source }
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error as IoError, ErrorKind};

    #[test]
    fn test_permission_denied_is_classified() {
        let err = Error::from_write("out/icon.png", IoError::from(ErrorKind::PermissionDenied));
        assert!(matches!(err, Error::WritePermissionDenied { .. }));
    }

    #[test]
    fn test_other_io_errors_are_plain_write_errors() {
        let err = Error::from_write("out/icon.png", IoError::from(ErrorKind::NotFound));
        assert!(matches!(err, Error::Write { .. }));
        assert!(err.to_string().contains("out/icon.png"));
    }
}
