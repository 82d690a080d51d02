//! # numbadge
//!
//! Stamp a red number onto the upper-right corner of an image, optionally
//! cropping it to a centered square first.
//!
//! ```text
//! image.png ──load──▶ (square crop) ──▶ badge overlay ──▶ alpha composite ──▶ bdg_image.png
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`imaging`] | Crop and badge geometry, font loading, compositing, image I/O backend |
//! | [`process`] | The load → crop → badge → save pipeline for one job |
//! | [`naming`] | Output filename derivation (`bdg_` prefix, format extension) |
//! | [`config`] | Optional `badge.toml` defaults and validation |
//! | [`output`] | `--verbose` summary formatting |
//!
//! # Design Decisions
//!
//! ## Heuristic Badge Placement
//!
//! The badge anchor is an empirical formula, not a measured text box:
//! `x = width - floor_div(size * digits, 1.6)`, `y = floor(height / size) * 2.5`
//! with `size = min(width, height) / 4`. It looks right for short numbers on
//! ordinary photos and can misplace long numbers; it is kept literally so
//! output matches earlier badges pixel for pixel. `floor_div` divides by the
//! binary value of `1.6` through the remainder, so `80 / 1.6` floors to 49.
//!
//! ## Odd Crop Margins
//!
//! The square crop trims `|w - h| / 2` (rounded down) from both sides of the
//! long edge. With an odd difference the result is one pixel longer than the
//! short edge. This is deterministic and intentionally not corrected.
//!
//! ## Outline Fonts With a Bitmap Fallback
//!
//! Fonts are loaded as TrueType/OpenType through `ab_glyph`. If that fails the
//! same name is opened as a BDF bitmap font, which draws at its own fixed
//! size regardless of the image. See [`imaging::font`].

pub mod config;
pub mod imaging;
pub mod naming;
pub mod output;
pub mod process;

#[cfg(test)]
pub(crate) mod test_helpers;
