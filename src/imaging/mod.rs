//! Image processing in pure Rust.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Decode / encode** | `image` (`ImageReader`, `JpegEncoder`, `write_to`) |
//! | **Square crop** | `DynamicImage::crop_imm` |
//! | **Outline text** | `ab_glyph` + `imageproc::drawing::draw_text_mut` |
//! | **Bitmap text** | custom BDF parser |
//! | **Composite** | `image::imageops::overlay` |
//!
//! The module is split into:
//! - **Calculations**: Pure functions for crop and badge geometry (unit testable)
//! - **Parameters**: Data structures describing image operations
//! - **Font**: Font resolution with the outline → bitmap fallback
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]
//! - **Operations**: High-level functions combining calculations + pixels

pub mod backend;
pub mod bdf_parser;
mod calculations;
pub mod font;
pub mod operations;
mod params;
pub mod rust_backend;

pub use backend::{BackendError, ImageBackend};
pub use calculations::{calculate_badge_layout, calculate_font_size, calculate_square_crop};
pub use font::{BadgeFont, FontError, FontKind, FontLoader};
pub use operations::{BadgeError, BadgedImage, draw_badge, square_crop};
pub use params::{BadgeLayout, CropBox, OutputFormat, Quality};
pub use rust_backend::RustBackend;
