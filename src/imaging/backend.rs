//! Image I/O backend trait and shared types.
//!
//! The [`ImageBackend`] trait covers the two file operations the badge
//! pipeline needs: decode an image from disk and encode one back. Everything
//! in between is pure pixel work in [`operations`](super::operations).
//!
//! The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend), built on the `image`
//! crate.

use super::params::{OutputFormat, Quality};
use image::DynamicImage;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to decode {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("Failed to encode {}: {source}", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("Cannot infer an output format from {}", .0.display())]
    UnsupportedFormat(PathBuf),
}

/// Trait for image I/O backends.
pub trait ImageBackend {
    /// Decode the image at `path`.
    fn load(&self, path: &Path) -> Result<DynamicImage, BackendError>;

    /// Encode `image` to `path`.
    ///
    /// With `format` unset, the encoding follows the extension of `path`.
    /// `quality` applies to lossy encodings only.
    fn save(
        &self,
        image: &DynamicImage,
        path: &Path,
        format: Option<OutputFormat>,
        quality: Quality,
    ) -> Result<(), BackendError>;
}
