//! CLI output formatting.
//!
//! A successful run is silent. With `--verbose`, a short summary is printed:
//!
//! ```text
//! image.png (400x300)
//!     Crop: 50,0 → 350,300 (300x300)
//!     Badge: 3 at (354, 10), 75px
//!     Font: Ubuntu-L (outline)
//!     Output: bdg_image.png (300x300)
//! ```
//!
//! Format functions are pure and return `Vec<String>`; the `print_*` wrapper
//! writes them to stdout.

use crate::process::BadgeOutcome;

/// Summary lines for one finished badge job.
pub fn format_outcome(outcome: &BadgeOutcome) -> Vec<String> {
    let (sw, sh) = outcome.source_dims;
    let (ow, oh) = outcome.output_dims;
    let mut lines = vec![format!("{} ({sw}x{sh})", outcome.source.display())];

    if let Some(c) = outcome.crop {
        lines.push(format!(
            "    Crop: {},{} → {},{} ({}x{})",
            c.left,
            c.top,
            c.right,
            c.bottom,
            c.width(),
            c.height()
        ));
    }

    let layout = &outcome.layout;
    lines.push(format!(
        "    Badge: {} at ({}, {}), {}px",
        outcome.number, layout.x, layout.y, layout.font_size
    ));
    lines.push(format!("    Font: {} ({})", outcome.font, outcome.font_kind));
    lines.push(format!(
        "    Output: {} ({ow}x{oh})",
        outcome.output.display()
    ));
    lines
}

pub fn print_outcome(outcome: &BadgeOutcome) {
    for line in format_outcome(outcome) {
        println!("{line}");
    }
}
