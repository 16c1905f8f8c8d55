use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong for a single job. None of these abort a batch.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("source not found at {path}")]
    SourceMissing { path: PathBuf },
    #[error("Failed to create destination directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },
    #[error("Failed to encode {path} as WebP: {message}")]
    Encode { path: PathBuf, message: String },
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to remove legacy file {path}: {source}")]
    RemoveLegacy {
        path: PathBuf,
        source: std::io::Error,
    },
}
