//! Minimal parser for X11 BDF (Bitmap Distribution Format) fonts.
//!
//! BDF is a line-oriented text format. Only the keywords needed to place and
//! draw glyphs are read:
//! - `STARTFONT`: must be the first keyword
//! - `FONTBOUNDINGBOX w h xoff yoff`: fallback advance and ascent
//! - `FONT_ASCENT n`: distance from the top of the line to the baseline
//! - `STARTCHAR` … `ENDCHAR`: one glyph, with `ENCODING`, `DWIDTH`, `BBX`
//!   and `BITMAP` rows
//!
//! Everything else (properties, `SWIDTH`, comments) is skipped.
//!
//! Bitmap rows are hex strings, most significant bit first, padded to whole
//! bytes. A glyph's box sits `yoff` pixels above the baseline and `xoff`
//! pixels right of the pen position.

use std::collections::HashMap;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum BdfError {
    #[error("not a BDF font: missing STARTFONT")]
    NotBdf,
    #[error("line {line}: malformed {keyword}")]
    Malformed { line: usize, keyword: &'static str },
    #[error("line {line}: invalid bitmap row {row:?}")]
    BadBitmap { line: usize, row: String },
    #[error("glyph {0:?} ends before its bitmap is complete")]
    Truncated(String),
}

/// One decoded glyph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitmapGlyph {
    pub width: u32,
    pub height: u32,
    pub x_offset: i32,
    pub y_offset: i32,
    pub advance: i32,
    /// Row-major coverage, `width * height` entries.
    bits: Vec<bool>,
}

impl BitmapGlyph {
    pub fn is_set(&self, col: u32, row: u32) -> bool {
        col < self.width && row < self.height && self.bits[(row * self.width + col) as usize]
    }
}

/// A fixed-size bitmap font. It renders at one pixel size only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitmapFont {
    pub ascent: i32,
    /// Advance for characters the font has no glyph for.
    pub default_advance: i32,
    glyphs: HashMap<char, BitmapGlyph>,
}

impl BitmapFont {
    pub fn glyph(&self, c: char) -> Option<&BitmapGlyph> {
        self.glyphs.get(&c)
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Visit every set pixel of `text` laid out with its top-left at `(x, y)`.
    ///
    /// The callback receives absolute coordinates, which may be negative or
    /// past the canvas; clipping is the caller's job.
    pub fn for_each_pixel(&self, text: &str, x: i32, y: i32, mut f: impl FnMut(i32, i32)) {
        let baseline = y + self.ascent;
        let mut pen = x;

        for c in text.chars() {
            let Some(glyph) = self.glyph(c) else {
                pen += self.default_advance;
                continue;
            };
            let left = pen + glyph.x_offset;
            let top = baseline - glyph.y_offset - glyph.height as i32;
            for row in 0..glyph.height {
                for col in 0..glyph.width {
                    if glyph.is_set(col, row) {
                        f(left + col as i32, top + row as i32);
                    }
                }
            }
            pen += glyph.advance;
        }
    }
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Glyph under construction between `STARTCHAR` and `ENDCHAR`.
struct PendingGlyph {
    name: String,
    encoding: Option<u32>,
    advance: Option<i32>,
    bbx: Option<[i32; 4]>,
    bits: Vec<bool>,
    rows_left: u32,
    in_bitmap: bool,
}

/// Parse a BDF font from its text contents.
pub fn parse_bdf(source: &str) -> Result<BitmapFont, BdfError> {
    let mut lines = source
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty());

    match lines.next() {
        Some((_, l)) if keyword(l) == "STARTFONT" => {}
        _ => return Err(BdfError::NotBdf),
    }

    let mut bounding_box = [0i32; 4];
    let mut ascent: Option<i32> = None;
    let mut glyphs = HashMap::new();
    let mut pending: Option<PendingGlyph> = None;

    for (line, text) in lines {
        if let Some(glyph) = pending.as_mut()
            && glyph.in_bitmap
            && keyword(text) != "ENDCHAR"
        {
            if glyph.rows_left == 0 {
                continue;
            }
            let width = glyph.bbx.map(|b| b[0]).unwrap_or(0).max(0) as u32;
            decode_row(text, width, &mut glyph.bits).ok_or_else(|| BdfError::BadBitmap {
                line,
                row: text.to_string(),
            })?;
            glyph.rows_left -= 1;
            continue;
        }

        match keyword(text) {
            "FONTBOUNDINGBOX" => bounding_box = numbers(text, line, "FONTBOUNDINGBOX")?,
            "FONT_ASCENT" => {
                let [a] = numbers::<1>(text, line, "FONT_ASCENT")?;
                ascent = Some(a);
            }
            "STARTCHAR" => {
                pending = Some(PendingGlyph {
                    name: text["STARTCHAR".len()..].trim().to_string(),
                    encoding: None,
                    advance: None,
                    bbx: None,
                    bits: Vec::new(),
                    rows_left: 0,
                    in_bitmap: false,
                });
            }
            "ENCODING" => {
                if let Some(glyph) = pending.as_mut() {
                    // `ENCODING -1 n` marks a glyph outside the standard encoding
                    let code: i64 = text
                        .split_whitespace()
                        .nth(1)
                        .and_then(|v| v.parse().ok())
                        .ok_or(BdfError::Malformed {
                            line,
                            keyword: "ENCODING",
                        })?;
                    glyph.encoding = u32::try_from(code).ok();
                }
            }
            "DWIDTH" => {
                if let Some(glyph) = pending.as_mut() {
                    let [dx, _dy] = numbers::<2>(text, line, "DWIDTH")?;
                    glyph.advance = Some(dx);
                }
            }
            "BBX" => {
                if let Some(glyph) = pending.as_mut() {
                    let bbx: [i32; 4] = numbers(text, line, "BBX")?;
                    if glyph_area(bbx[0], bbx[1]).is_none() {
                        return Err(BdfError::Malformed {
                            line,
                            keyword: "BBX",
                        });
                    }
                    glyph.bbx = Some(bbx);
                }
            }
            "BITMAP" => {
                if let Some(glyph) = pending.as_mut() {
                    let [_, h, ..] = *glyph.bbx.get_or_insert(bounding_box);
                    glyph.rows_left = h.max(0) as u32;
                    glyph.in_bitmap = true;
                }
            }
            "ENDCHAR" => {
                let Some(glyph) = pending.take() else {
                    continue;
                };
                let [w, h, xoff, yoff] = glyph.bbx.unwrap_or(bounding_box);
                if glyph.rows_left > 0 || glyph_area(w, h) != Some(glyph.bits.len()) {
                    return Err(BdfError::Truncated(glyph.name));
                }
                let Some(c) = glyph.encoding.and_then(char::from_u32) else {
                    continue;
                };
                glyphs.insert(
                    c,
                    BitmapGlyph {
                        width: w.max(0) as u32,
                        height: h.max(0) as u32,
                        x_offset: xoff,
                        y_offset: yoff,
                        advance: glyph.advance.unwrap_or(bounding_box[0]),
                        bits: glyph.bits,
                    },
                );
            }
            "ENDFONT" => break,
            _ => {}
        }
    }

    let [bb_w, bb_h, _, bb_yoff] = bounding_box;
    Ok(BitmapFont {
        ascent: ascent.unwrap_or(bb_h + bb_yoff),
        default_advance: bb_w,
        glyphs,
    })
}

/// Pixel count of a `w` x `h` box; `None` for negative or overflowing sizes.
fn glyph_area(w: i32, h: i32) -> Option<usize> {
    let w = usize::try_from(w).ok()?;
    let h = usize::try_from(h).ok()?;
    w.checked_mul(h)
}

fn keyword(line: &str) -> &str {
    line.split_whitespace().next().unwrap_or("")
}

/// Parse exactly `N` integers following the keyword.
fn numbers<const N: usize>(
    line_text: &str,
    line: usize,
    keyword: &'static str,
) -> Result<[i32; N], BdfError> {
    let malformed = || BdfError::Malformed { line, keyword };
    let mut out = [0i32; N];
    let mut fields = line_text.split_whitespace().skip(1);
    for slot in out.iter_mut() {
        *slot = fields
            .next()
            .and_then(|v| v.parse().ok())
            .ok_or_else(malformed)?;
    }
    Ok(out)
}

/// Append the first `width` bits of a hex row to `bits`.
fn decode_row(row: &str, width: u32, bits: &mut Vec<bool>) -> Option<()> {
    let bytes_needed = width.div_ceil(8) as usize;
    if row.len() < bytes_needed * 2 || !row.is_ascii() {
        return None;
    }
    let mut col = 0;
    for i in 0..bytes_needed {
        let byte = u8::from_str_radix(&row[i * 2..i * 2 + 2], 16).ok()?;
        for bit in (0..8).rev() {
            if col == width {
                break;
            }
            bits.push(byte & (1 << bit) != 0);
            col += 1;
        }
    }
    Some(())
}
