//! Shared test utilities for the numbadge test suite.
//!
//! Provides synthetic images, the block bitmap font fixture, and pixel
//! assertions used by the imaging and pipeline tests.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::test_helpers::*;
//!
//! let tmp = tempfile::TempDir::new().unwrap();
//! let font = block_font_path();
//! let source = tmp.path().join("image.png");
//! create_test_png(&source, 400, 300);
//! ```

use image::{DynamicImage, ImageEncoder, Rgb, RgbImage, Rgba, RgbaImage};
use std::path::{Path, PathBuf};

/// Fully opaque red, the badge color.
pub const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);

/// BDF font with a solid 8x14 block for every digit, advance 10, ascent 14.
pub const BLOCK_BDF: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/fixtures/block.bdf"
));

/// Path to the block font fixture on disk.
pub fn block_font_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/block.bdf")
}

// =========================================================================
// Synthetic images
// =========================================================================

/// A gradient that never contains pure red, so badge pixels stand out.
pub fn gradient_rgb(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x % 200) as u8, (y % 256) as u8, 128])
    })
}

pub fn gradient_image(width: u32, height: u32) -> DynamicImage {
    DynamicImage::ImageRgb8(gradient_rgb(width, height))
}

/// Create a small valid PNG file with the given dimensions.
pub fn create_test_png(path: &Path, width: u32, height: u32) {
    gradient_rgb(width, height).save(path).unwrap();
}

/// Create a small valid JPEG file with the given dimensions.
pub fn create_test_jpeg(path: &Path, width: u32, height: u32) {
    let img = gradient_rgb(width, height);
    let file = std::fs::File::create(path).unwrap();
    let writer = std::io::BufWriter::new(file);
    image::codecs::jpeg::JpegEncoder::new(writer)
        .write_image(img.as_raw(), width, height, image::ExtendedColorType::Rgb8)
        .unwrap();
}

// =========================================================================
// Pixel assertions
// =========================================================================

/// Count pure opaque red pixels inside `[x0, x1) x [y0, y1)`.
pub fn count_red(img: &RgbaImage, x0: u32, y0: u32, x1: u32, y1: u32) -> usize {
    let x1 = x1.min(img.width());
    let y1 = y1.min(img.height());
    (y0..y1)
        .flat_map(|y| (x0..x1).map(move |x| (x, y)))
        .filter(|&(x, y)| *img.get_pixel(x, y) == RED)
        .count()
}

/// Count pure opaque red pixels in the upper-right quadrant.
pub fn count_red_upper_right(img: &RgbaImage) -> usize {
    let (w, h) = img.dimensions();
    count_red(img, w / 2, 0, w, h / 2)
}

/// Find an installed TrueType font, for tests that exercise outline rendering.
///
/// Returns `None` on machines without one; those tests then skip.
pub fn find_system_ttf() -> Option<PathBuf> {
    ["/usr/share/fonts", "/usr/local/share/fonts", "/Library/Fonts"]
        .iter()
        .flat_map(|dir| walkdir::WalkDir::new(dir).into_iter().filter_map(Result::ok))
        .map(|e| e.into_path())
        .find(|p| {
            p.extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| e.eq_ignore_ascii_case("ttf"))
        })
}
