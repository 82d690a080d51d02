//! Parameter types for image operations.
//!
//! These structs describe *what* to do, not *how* to do it. They sit between
//! the pure [`calculations`](super::calculations), the
//! [`operations`](super::operations) that apply them to pixels, and the
//! [`backend`](super::backend) that reads and writes files.
//!
//! ## Types
//!
//! - [`CropBox`]: Sub-rectangle to extract, as left/top/right/bottom edges.
//! - [`BadgeLayout`]: Font size and text anchor for the badge.
//! - [`OutputFormat`]: Explicit encoding for the saved file (JPEG or PNG).
//! - [`Quality`]: Lossy encoding quality (1–100, default 75). Clamped on construction.

use std::fmt;

/// Rectangle to crop, with exclusive `right` and `bottom` edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropBox {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl CropBox {
    pub fn new(left: u32, top: u32, right: u32, bottom: u32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> u32 {
        self.right - self.left
    }

    pub fn height(&self) -> u32 {
        self.bottom - self.top
    }
}

/// Where and how large to draw the badge text.
///
/// `(x, y)` is the top-left corner of the first glyph's ascender line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BadgeLayout {
    pub font_size: u32,
    pub x: f32,
    pub y: f32,
}

/// Output encodings selectable with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Jpeg,
    Png,
}

impl OutputFormat {
    /// File extension used when deriving an output name.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Jpeg => "jpeg",
            Self::Png => "png",
        }
    }

    pub fn image_format(self) -> image::ImageFormat {
        match self {
            Self::Jpeg => image::ImageFormat::Jpeg,
            Self::Png => image::ImageFormat::Png,
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Quality setting for lossy image encoding (1-100).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quality(pub u8);

impl Quality {
    pub fn new(value: u32) -> Self {
        Self(value.clamp(1, 100) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl Default for Quality {
    fn default() -> Self {
        Self(75)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crop_box_dimensions() {
        let b = CropBox::new(25, 0, 75, 50);
        assert_eq!(b.width(), 50);
        assert_eq!(b.height(), 50);
    }

    #[test]
    fn quality_clamps_to_valid_range() {
        assert_eq!(Quality::new(0).value(), 1);
        assert_eq!(Quality::new(50).value(), 50);
        assert_eq!(Quality::new(150).value(), 100);
    }

    #[test]
    fn quality_default_is_75() {
        assert_eq!(Quality::default().value(), 75);
    }

    #[test]
    fn output_format_extensions() {
        assert_eq!(OutputFormat::Jpeg.extension(), "jpeg");
        assert_eq!(OutputFormat::Png.to_string(), "png");
        assert_eq!(OutputFormat::Png.image_format(), image::ImageFormat::Png);
    }
}
