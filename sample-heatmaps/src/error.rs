//! Error types shared by every generator and the JSON writer.

use std::path::PathBuf;
use thiserror::Error;

/// Failures surfaced while generating or writing a sample array.
///
/// Nothing is retried. Callers decide whether to continue with the next
/// sample or halt.
#[derive(Error, Debug)]
pub enum SampleError {
    /// Source image is missing, corrupt, or in an unknown format.
    #[error("Failed to load image {path}: {source}")]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Source image decoded fine but carries fewer than three colour channels.
    #[error("Image {path} has {channels} channel(s), need at least 3")]
    UnsupportedImage { path: PathBuf, channels: u8 },

    /// Preview image could not be encoded or written.
    #[error("Failed to save image {path}: {source}")]
    ImageSave {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Output file could not be created or written.
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Array file could not be read back.
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error for {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, SampleError>;
