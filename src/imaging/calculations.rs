//! Pure calculation functions for crop and badge geometry.
//!
//! All functions here are pure and testable without any I/O or images.

use super::params::{BadgeLayout, CropBox};

/// Calculate the largest centered square inside a `width` x `height` image.
///
/// Equal amounts are trimmed from both sides of the longer edge. When the
/// difference between the edges is odd, the extra pixel stays on the
/// trailing edge (right or bottom), so the box is one pixel longer along
/// that axis.
///
/// # Examples
/// ```
/// # use numbadge::imaging::{CropBox, calculate_square_crop};
/// // 100x50 landscape → trim 25px left and right
/// assert_eq!(calculate_square_crop(100, 50), CropBox::new(25, 0, 75, 50));
///
/// // 50x101 portrait → trim 25px top and bottom, 51px tall
/// assert_eq!(calculate_square_crop(50, 101), CropBox::new(0, 25, 50, 76));
/// ```
pub fn calculate_square_crop(width: u32, height: u32) -> CropBox {
    let padding = width.abs_diff(height) / 2;

    if width > height {
        // Landscape: trim left and right
        CropBox::new(padding, 0, width - padding, height)
    } else {
        // Portrait or square: trim top and bottom
        CropBox::new(0, padding, width, height - padding)
    }
}

/// Badge font size: a quarter of the shorter edge, rounded down.
pub fn calculate_font_size(width: u32, height: u32) -> u32 {
    width.min(height) / 4
}

/// Calculate where the badge text starts.
///
/// The position is an empirical fit for "upper-right corner", not a measured
/// text bounding box. Long numbers or extreme aspect ratios can push the text
/// off the image; that is accepted.
///
/// - `x = width - floor_div(font_size * digits, 1.6)`
/// - `y = floor(height / font_size) * 2.5`
///
/// Returns `None` when `font_size` is zero.
pub fn calculate_badge_layout(width: u32, height: u32, digits: usize) -> Option<BadgeLayout> {
    let font_size = calculate_font_size(width, height);
    if font_size == 0 {
        return None;
    }

    let text_width = floor_div(font_size as f64 * digits as f64, 1.6);
    let x = width as f64 - text_width;
    let y = (height / font_size) as f64 * 2.5;

    Some(BadgeLayout {
        font_size,
        x: x as f32,
        y: y as f32,
    })
}

/// Floored float division computed through the remainder.
///
/// `1.6` is not exact in binary; its `f64` value is slightly larger, so
/// `80.0 / 1.6` rounds up to `50.0` while the true quotient is just below 50.
/// Subtracting the remainder first keeps the quotient below the boundary
/// (`floor_div(80.0, 1.6) == 49.0`).
fn floor_div(a: f64, b: f64) -> f64 {
    let rem = a % b;
    let mut div = (a - rem) / b;
    if rem != 0.0 && (b < 0.0) != (rem < 0.0) {
        div -= 1.0;
    }
    if div == 0.0 {
        return 0.0;
    }
    let mut floored = div.floor();
    if div - floored > 0.5 {
        floored += 1.0;
    }
    floored
}
