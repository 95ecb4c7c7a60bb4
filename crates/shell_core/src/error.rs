use std::path::PathBuf;

use thiserror::Error;

/// Failures while loading the read-only startup assets.
///
/// These are never fatal at the application level: callers log a warning and
/// fall back to running without the asset.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to read asset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode asset: {0}")]
    Decode(#[from] image::ImageError),

    #[error("animation contains no frames")]
    NoFrames,
}
