//! Pure Rust image I/O backend.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Decode (JPEG, PNG, TIFF, WebP) | `image::ImageReader`, format sniffed from content |
//! | Encode → JPEG | `image::codecs::jpeg::JpegEncoder`, RGB8 at the given quality |
//! | Encode → anything else | `DynamicImage::write_to` with the chosen `ImageFormat` |

use super::backend::{BackendError, ImageBackend};
use super::params::{OutputFormat, Quality};
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageFormat, ImageReader};
use log::debug;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Pure Rust backend using the `image` crate.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Pick the encoding for `path`: the explicit format, else its extension.
fn output_format(path: &Path, format: Option<OutputFormat>) -> Result<ImageFormat, BackendError> {
    match format {
        Some(f) => Ok(f.image_format()),
        None => ImageFormat::from_path(path)
            .map_err(|_| BackendError::UnsupportedFormat(path.to_path_buf())),
    }
}

impl ImageBackend for RustBackend {
    fn load(&self, path: &Path) -> Result<DynamicImage, BackendError> {
        let reader = ImageReader::open(path)?.with_guessed_format()?;
        debug!("decoding {} as {:?}", path.display(), reader.format());
        reader.decode().map_err(|source| BackendError::Decode {
            path: path.to_path_buf(),
            source,
        })
    }

    fn save(
        &self,
        image: &DynamicImage,
        path: &Path,
        format: Option<OutputFormat>,
        quality: Quality,
    ) -> Result<(), BackendError> {
        let format = output_format(path, format)?;
        debug!("encoding {} as {format:?}", path.display());

        let file = std::fs::File::create(path)?;
        let mut writer = BufWriter::new(file);
        let encode_err = |source| BackendError::Encode {
            path: path.to_path_buf(),
            source,
        };

        if format == ImageFormat::Jpeg {
            // JPEG has no alpha channel
            let rgb = image.to_rgb8();
            JpegEncoder::new_with_quality(&mut writer, quality.value())
                .encode_image(&rgb)
                .map_err(encode_err)?;
        } else {
            image.write_to(&mut writer, format).map_err(encode_err)?;
        }
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{create_test_jpeg, create_test_png};
    use image::GenericImageView;

    #[test]
    fn load_synthetic_png() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("test.png");
        create_test_png(&path, 200, 150);

        let img = RustBackend::new().load(&path).unwrap();
        assert_eq!(img.dimensions(), (200, 150));
    }

    #[test]
    fn load_sniffs_format_despite_wrong_extension() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("actually-jpeg.png");
        create_test_jpeg(&path, 64, 32);

        let img = RustBackend::new().load(&path).unwrap();
        assert_eq!(img.dimensions(), (64, 32));
    }

    #[test]
    fn load_nonexistent_file_errors() {
        let result = RustBackend::new().load(Path::new("/nonexistent/image.jpg"));
        assert!(matches!(result, Err(BackendError::Io(_))));
    }

    #[test]
    fn load_garbage_errors() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("garbage.png");
        std::fs::write(&path, b"definitely not an image").unwrap();

        let result = RustBackend::new().load(&path);
        assert!(matches!(result, Err(BackendError::Decode { .. })));
    }

    #[test]
    fn save_png_by_extension_keeps_alpha() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("out.png");
        let img = DynamicImage::new_rgba8(30, 20);

        let backend = RustBackend::new();
        backend.save(&img, &path, None, Quality::default()).unwrap();

        let decoded = backend.load(&path).unwrap();
        assert_eq!(decoded.dimensions(), (30, 20));
        assert!(decoded.color().has_alpha());
    }

    #[test]
    fn save_rgba_as_jpeg_flattens() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("out.jpeg");
        let img = DynamicImage::new_rgba8(30, 20);

        let backend = RustBackend::new();
        backend
            .save(&img, &path, Some(OutputFormat::Jpeg), Quality::new(90))
            .unwrap();

        let decoded = backend.load(&path).unwrap();
        assert_eq!(decoded.dimensions(), (30, 20));
        assert!(!decoded.color().has_alpha());
    }

    #[test]
    fn save_explicit_format_overrides_extension() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("out.jpg");
        let img = DynamicImage::new_rgba8(10, 10);

        RustBackend::new()
            .save(&img, &path, Some(OutputFormat::Png), Quality::default())
            .unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(image::guess_format(&bytes).unwrap(), ImageFormat::Png);
    }

    #[test]
    fn save_unknown_extension_errors() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("out.unknown");
        let img = DynamicImage::new_rgb8(10, 10);

        let result = RustBackend::new().save(&img, &path, None, Quality::default());
        assert!(matches!(result, Err(BackendError::UnsupportedFormat(_))));
        assert!(!path.exists());
    }
}
