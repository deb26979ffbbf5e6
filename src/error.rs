//! Error types for icon composition.

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while loading, composing, or writing an icon.
///
/// Every variant is terminal for a single run; nothing is retried.
#[derive(Error, Debug)]
pub enum Error {
    /// The source path does not exist or cannot be read as a file.
    ///
    /// `source` is set when the path exists but reading it failed, for
    /// instance a directory or a file without read permission.
    #[error("input image not found or unreadable: {}", path.display())]
    InputNotFound {
        path: PathBuf,
        #[source]
        source: Option<std::io::Error>,
    },

    /// A profile file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The bytes at the source path are not a supported image.
    #[error("failed to decode image from {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The image has zero width or height.
    #[error("invalid image dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// A composition parameter is out of range.
    #[error("invalid parameter {name}: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    /// Encoding the output image failed.
    #[error("failed to encode image for {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The output directory or file could not be written.
    #[error("failed to write {}: {source}", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A composition profile could not be read or parsed.
    #[error("invalid profile {}: {source}", path.display())]
    Profile {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Result type alias for iconpad operations.
pub type Result<T> = std::result::Result<T, Error>;
