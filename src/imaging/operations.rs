//! High-level image operations.
//!
//! These functions combine calculations with pixel work. They never mutate
//! their input image; each returns a new one.

use super::calculations::{calculate_badge_layout, calculate_square_crop};
use super::font::{BadgeFont, FontError, FontKind, FontLoader};
use super::params::{BadgeLayout, CropBox};
use image::{DynamicImage, GenericImageView, Rgba, RgbaImage, imageops};
use thiserror::Error;

/// Badge text color: opaque red.
pub const BADGE_COLOR: Rgba<u8> = Rgba([255, 0, 0, 255]);

/// Initial overlay color: white with zero alpha.
const TRANSPARENT: Rgba<u8> = Rgba([255, 255, 255, 0]);

#[derive(Error, Debug)]
pub enum BadgeError {
    #[error("image {width}x{height} is too small for a badge (needs at least 4px per side)")]
    ImageTooSmall { width: u32, height: u32 },
    #[error(transparent)]
    Font(#[from] FontError),
}

/// Result of [`draw_badge`]: the composited image and how it was drawn.
pub struct BadgedImage {
    pub image: RgbaImage,
    pub layout: BadgeLayout,
    pub font_kind: FontKind,
}

/// Crop the largest centered square out of `image`.
///
/// Returns the cropped copy and the box that was used.
pub fn square_crop(image: &DynamicImage) -> (DynamicImage, CropBox) {
    let (width, height) = image.dimensions();
    let crop = calculate_square_crop(width, height);
    let square = image.crop_imm(crop.left, crop.top, crop.width(), crop.height());
    (square, crop)
}

/// Draw `number` in red near the upper-right corner of `image`.
///
/// The font named `font_name` is loaded at a quarter of the shorter edge (see
/// [`FontLoader::load`] for the bitmap fallback). The text goes on a
/// transparent overlay which is then alpha-composited over an RGBA copy of
/// the image.
pub fn draw_badge(
    image: &DynamicImage,
    number: i64,
    loader: &FontLoader,
    font_name: &str,
) -> Result<BadgedImage, BadgeError> {
    let (width, height) = image.dimensions();
    let text = number.to_string();
    let layout = calculate_badge_layout(width, height, text.chars().count())
        .ok_or(BadgeError::ImageTooSmall { width, height })?;

    let font = loader.load(font_name, layout.font_size)?;
    let overlay = render_text(width, height, &text, &layout, &font);

    let mut base = image.to_rgba8();
    composite(&mut base, &overlay);

    Ok(BadgedImage {
        image: base,
        layout,
        font_kind: font.kind(),
    })
}

/// Render `text` onto a fresh transparent `width` x `height` overlay.
pub fn render_text(
    width: u32,
    height: u32,
    text: &str,
    layout: &BadgeLayout,
    font: &BadgeFont,
) -> RgbaImage {
    let mut overlay = RgbaImage::from_pixel(width, height, TRANSPARENT);
    let x = layout.x.floor() as i32;
    let y = layout.y.floor() as i32;

    match font {
        BadgeFont::Outline { font, scale } => {
            imageproc::drawing::draw_text_mut(&mut overlay, BADGE_COLOR, x, y, *scale, font, text);
        }
        BadgeFont::Bitmap(bitmap) => {
            bitmap.for_each_pixel(text, x, y, |px, py| {
                if let (Ok(px), Ok(py)) = (u32::try_from(px), u32::try_from(py))
                    && px < width
                    && py < height
                {
                    overlay.put_pixel(px, py, BADGE_COLOR);
                }
            });
        }
    }

    overlay
}

/// Alpha-composite `overlay` over `base` in place ("over" operator).
///
/// Fully transparent overlay pixels leave `base` untouched; fully opaque
/// ones replace it.
pub fn composite(base: &mut RgbaImage, overlay: &RgbaImage) {
    imageops::overlay(base, overlay, 0, 0);
}
