//! Output filename derivation.
//!
//! Without `--out`, the output name is built from the input's file name:
//!
//! - `photos/image.png` → `bdg_image.png`
//! - `photos/image.png` with `--format jpeg` → `bdg_image.jpeg`
//! - `shot.v2.png` with `--format png` → `bdg_shot.png` (stem ends at the
//!   first dot)
//!
//! The derived name carries no directory, so it lands in the current working
//! directory regardless of where the input lives.

use crate::imaging::OutputFormat;
use std::path::{Path, PathBuf};

/// Everything before the first `.` of a file name.
///
/// - `"image.png"` → `"image"`
/// - `"archive.tar.gz"` → `"archive"`
/// - `".hidden.png"` → `""`
/// - `"README"` → `"README"`
pub fn first_stem(file_name: &str) -> &str {
    file_name.split('.').next().unwrap_or(file_name)
}

/// Build the default output file name for `source`.
pub fn derive_output_name(source: &Path, prefix: &str, format: Option<OutputFormat>) -> PathBuf {
    let file_name = source
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_else(|| source.to_string_lossy());

    let name = match format {
        Some(f) => format!("{prefix}{}.{}", first_stem(&file_name), f.extension()),
        None => format!("{prefix}{file_name}"),
    };
    PathBuf::from(name)
}

/// The path the result is written to: `out` if given, else the derived name.
pub fn resolve_output_path(
    source: &Path,
    out: Option<&Path>,
    prefix: &str,
    format: Option<OutputFormat>,
) -> PathBuf {
    match out {
        Some(path) => path.to_path_buf(),
        None => derive_output_name(source, prefix, format),
    }
}
