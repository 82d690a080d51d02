//! Badge font resolution and loading.
//!
//! A font is named either by path or by a bare name like `Ubuntu-L`. Loading
//! tries two strategies in order:
//!
//! 1. **Outline**: resolve the name to a `.ttf`/`.otf` file (literal path
//!    first, then a recursive search of the font directories) and load it with
//!    `ab_glyph` at the requested pixel size.
//! 2. **Bitmap**: open the name literally as a BDF file. Bitmap fonts have a
//!    single built-in size, so the requested size is ignored.
//!
//! Only when both fail is a [`FontError::Load`] returned, carrying both
//! causes.

use super::bdf_parser::{BdfError, BitmapFont, parse_bdf};
use ab_glyph::{Font, FontVec, PxScale};
use log::debug;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum FontError {
    #[error("no font file found for {0:?}")]
    NotFound(String),
    #[error("IO error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{} is not a TrueType/OpenType font", .0.display())]
    InvalidOutline(PathBuf),
    #[error("{}: {source}", .path.display())]
    Bdf {
        path: PathBuf,
        #[source]
        source: BdfError,
    },
    #[error("cannot load font {name:?} (outline: {outline}; bitmap: {bitmap})")]
    Load {
        name: String,
        outline: Box<FontError>,
        bitmap: Box<FontError>,
    },
}

/// A loaded badge font, ready to draw.
pub enum BadgeFont {
    /// Scalable font rendered at `scale`.
    Outline { font: FontVec, scale: PxScale },
    /// Fixed-size font drawn at its native pixel size.
    Bitmap(BitmapFont),
}

/// Which loading strategy produced a [`BadgeFont`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontKind {
    Outline,
    Bitmap,
}

impl BadgeFont {
    pub fn kind(&self) -> FontKind {
        match self {
            Self::Outline { .. } => FontKind::Outline,
            Self::Bitmap(_) => FontKind::Bitmap,
        }
    }
}

impl fmt::Display for FontKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Outline => f.write_str("outline"),
            Self::Bitmap => f.write_str("bitmap"),
        }
    }
}

/// Standard per-user and system font directories for this platform.
pub fn system_font_dirs() -> Vec<PathBuf> {
    let mut dirs = Vec::new();
    if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
        dirs.push(home.join(".fonts"));
        dirs.push(home.join(".local/share/fonts"));
        dirs.push(home.join("Library/Fonts"));
    }
    if let Some(windir) = std::env::var_os("WINDIR").map(PathBuf::from) {
        dirs.push(windir.join("Fonts"));
    }
    dirs.extend(
        [
            "/usr/share/fonts",
            "/usr/local/share/fonts",
            "/Library/Fonts",
            "/System/Library/Fonts",
        ]
        .map(PathBuf::from),
    );
    dirs
}

/// Resolves font names against a list of directories and loads them.
#[derive(Debug, Clone, Default)]
pub struct FontLoader {
    search_dirs: Vec<PathBuf>,
}

impl FontLoader {
    /// Search `extra_dirs` first, then the system font directories.
    pub fn new(extra_dirs: &[PathBuf]) -> Self {
        let mut search_dirs = extra_dirs.to_vec();
        search_dirs.extend(system_font_dirs());
        Self { search_dirs }
    }

    /// Search exactly `dirs`.
    pub fn with_dirs(dirs: Vec<PathBuf>) -> Self {
        Self { search_dirs: dirs }
    }

    /// Find the outline font file for `name`.
    ///
    /// A name without an extension is tried as `<name>.ttf`, then
    /// `<name>.otf`. Each candidate is checked as a path relative to the
    /// working directory before the search directories are walked.
    pub fn resolve(&self, name: &str) -> Option<PathBuf> {
        let literal = Path::new(name);
        if literal.is_file() {
            return Some(literal.to_path_buf());
        }

        for candidate in candidate_names(name) {
            let candidate_path = Path::new(&candidate);
            if candidate_path.is_file() {
                return Some(candidate_path.to_path_buf());
            }
            let Some(file_name) = candidate_path.file_name() else {
                continue;
            };
            for dir in &self.search_dirs {
                let found = WalkDir::new(dir)
                    .follow_links(true)
                    .into_iter()
                    .filter_map(Result::ok)
                    .find(|e| e.file_type().is_file() && e.file_name() == file_name);
                if let Some(entry) = found {
                    return Some(entry.into_path());
                }
            }
        }
        None
    }

    /// Load `name` at `size` pixels, falling back to a bitmap font.
    pub fn load(&self, name: &str, size: u32) -> Result<BadgeFont, FontError> {
        let outline = match self.load_outline(name, size) {
            Ok(font) => return Ok(font),
            Err(e) => e,
        };
        debug!("outline font {name:?} unavailable ({outline}), trying bitmap");

        match load_bitmap(Path::new(name)) {
            Ok(font) => {
                debug!("using bitmap font {name:?}; requested size {size}px ignored");
                Ok(BadgeFont::Bitmap(font))
            }
            Err(bitmap) => Err(FontError::Load {
                name: name.to_string(),
                outline: Box::new(outline),
                bitmap: Box::new(bitmap),
            }),
        }
    }

    fn load_outline(&self, name: &str, size: u32) -> Result<BadgeFont, FontError> {
        let path = self
            .resolve(name)
            .ok_or_else(|| FontError::NotFound(name.to_string()))?;
        debug!("loading outline font {}", path.display());

        let bytes = std::fs::read(&path).map_err(|source| FontError::Io {
            path: path.clone(),
            source,
        })?;
        let font = FontVec::try_from_vec(bytes).map_err(|_| FontError::InvalidOutline(path))?;

        // Size is the em height in pixels, like a point size at 72 dpi.
        let px = size as f32;
        let scale = font.pt_to_px_scale(px).unwrap_or(PxScale::from(px));
        Ok(BadgeFont::Outline { font, scale })
    }
}

fn candidate_names(name: &str) -> Vec<String> {
    if Path::new(name).extension().is_some() {
        vec![name.to_string()]
    } else {
        vec![format!("{name}.ttf"), format!("{name}.otf")]
    }
}

/// Load a BDF bitmap font from `path`.
pub fn load_bitmap(path: &Path) -> Result<BitmapFont, FontError> {
    let source = std::fs::read_to_string(path).map_err(|source| FontError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_bdf(&source).map_err(|source| FontError::Bdf {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{block_font_path, find_system_ttf};
    use tempfile::TempDir;

    #[test]
    fn candidate_names_add_extensions_to_bare_names() {
        assert_eq!(candidate_names("Ubuntu-L"), vec!["Ubuntu-L.ttf", "Ubuntu-L.otf"]);
        assert_eq!(candidate_names("fonts/x.ttf"), vec!["fonts/x.ttf"]);
    }

    #[test]
    fn resolve_finds_font_in_nested_search_dir() {
        let tmp = TempDir::new().unwrap();
        let nested = tmp.path().join("truetype/ubuntu");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(nested.join("Badge-Test.otf"), b"not really a font").unwrap();

        let loader = FontLoader::with_dirs(vec![tmp.path().to_path_buf()]);
        assert_eq!(
            loader.resolve("Badge-Test"),
            Some(nested.join("Badge-Test.otf"))
        );
    }

    #[test]
    fn resolve_prefers_ttf_over_otf() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("Dup.otf"), b"").unwrap();
        std::fs::write(tmp.path().join("Dup.ttf"), b"").unwrap();

        let loader = FontLoader::with_dirs(vec![tmp.path().to_path_buf()]);
        assert_eq!(loader.resolve("Dup"), Some(tmp.path().join("Dup.ttf")));
    }

    #[test]
    fn resolve_literal_path() {
        let loader = FontLoader::with_dirs(Vec::new());
        let path = block_font_path();
        assert_eq!(loader.resolve(path.to_str().unwrap()), Some(path));
    }

    #[test]
    fn resolve_missing_returns_none() {
        let tmp = TempDir::new().unwrap();
        let loader = FontLoader::with_dirs(vec![tmp.path().to_path_buf()]);
        assert_eq!(loader.resolve("No-Such-Font-Anywhere"), None);
    }

    #[test]
    fn load_falls_back_to_bitmap() {
        let loader = FontLoader::with_dirs(Vec::new());
        let font = loader
            .load(block_font_path().to_str().unwrap(), 100)
            .unwrap();
        assert_eq!(font.kind(), FontKind::Bitmap);
        let BadgeFont::Bitmap(bitmap) = font else {
            unreachable!()
        };
        // Native size, not the requested 100px
        assert_eq!(bitmap.ascent, 14);
    }

    #[test]
    fn load_invalid_outline_then_bitmap_fallback() {
        let tmp = TempDir::new().unwrap();
        let fake = tmp.path().join("fake.ttf");
        std::fs::copy(block_font_path(), &fake).unwrap();

        // Resolves as an outline candidate, fails to parse, then loads as BDF
        let loader = FontLoader::with_dirs(Vec::new());
        let font = loader.load(fake.to_str().unwrap(), 40).unwrap();
        assert_eq!(font.kind(), FontKind::Bitmap);
    }

    #[test]
    fn load_missing_font_reports_both_failures() {
        let tmp = TempDir::new().unwrap();
        let loader = FontLoader::with_dirs(vec![tmp.path().to_path_buf()]);
        let err = loader.load("No-Such-Font-Anywhere", 20).err().unwrap();
        match err {
            FontError::Load {
                name,
                outline,
                bitmap,
            } => {
                assert_eq!(name, "No-Such-Font-Anywhere");
                assert!(matches!(*outline, FontError::NotFound(_)));
                assert!(matches!(*bitmap, FontError::Io { .. }));
            }
            other => panic!("expected Load error, got {other:?}"),
        }
    }

    #[test]
    fn load_garbage_file_is_error() {
        let tmp = TempDir::new().unwrap();
        let junk = tmp.path().join("junk.bin");
        std::fs::write(&junk, b"\x00\x01\x02garbage").unwrap();

        let loader = FontLoader::with_dirs(Vec::new());
        let err = loader.load(junk.to_str().unwrap(), 20).err().unwrap();
        let FontError::Load { outline, bitmap, .. } = err else {
            panic!("expected Load error");
        };
        assert!(matches!(*outline, FontError::InvalidOutline(_)));
        assert!(matches!(*bitmap, FontError::Bdf { .. }));
    }

    #[test]
    fn load_bdf_glyph_missing_bitmap_is_error() {
        let tmp = TempDir::new().unwrap();
        let bad = tmp.path().join("bad.bdf");
        std::fs::write(
            &bad,
            "STARTFONT 2.1\nSTARTCHAR one\nENCODING 49\nBBX 8 14 0 0\nENDCHAR\nENDFONT\n",
        )
        .unwrap();

        let loader = FontLoader::with_dirs(Vec::new());
        let err = loader.load(bad.to_str().unwrap(), 20).err().unwrap();
        let FontError::Load { bitmap, .. } = err else {
            panic!("expected Load error");
        };
        assert!(matches!(
            *bitmap,
            FontError::Bdf {
                source: BdfError::Truncated(_),
                ..
            }
        ));
    }

    #[test]
    fn load_system_ttf_as_outline() {
        let Some(path) = find_system_ttf() else {
            eprintln!("no TrueType font installed, skipping");
            return;
        };
        let loader = FontLoader::with_dirs(Vec::new());
        let font = loader.load(path.to_str().unwrap(), 64).unwrap();
        assert_eq!(font.kind(), FontKind::Outline);
    }
}
