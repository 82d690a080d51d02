//! The badge pipeline: one input image in, one badged image out.
//!
//! ```text
//! load → (crop) → badge → save
//! ```
//!
//! Each step is a single call; nothing is retried and the first failure is
//! returned as-is. The input file is fully decoded before any pixel work
//! starts, and the output file is only created once the final image exists.

use crate::config::BadgeConfig;
use crate::imaging::{
    BackendError, BadgeError, BadgeLayout, CropBox, FontKind, FontLoader, ImageBackend,
    OutputFormat, Quality, draw_badge, square_crop,
};
use crate::naming::resolve_output_path;
use image::DynamicImage;
use log::debug;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("Source image not found: {}", .0.display())]
    SourceNotFound(PathBuf),
    #[error(transparent)]
    Imaging(#[from] BackendError),
    #[error(transparent)]
    Badge(#[from] BadgeError),
}

/// One invocation's worth of work.
#[derive(Debug, Clone, PartialEq)]
pub struct BadgeJob {
    pub source: PathBuf,
    pub number: i64,
    pub crop: bool,
    pub out: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    /// Font override; the configured font is used when unset.
    pub font: Option<String>,
}

/// What a job did, for reporting.
#[derive(Debug, Clone, PartialEq)]
pub struct BadgeOutcome {
    pub source: PathBuf,
    pub output: PathBuf,
    pub number: i64,
    pub source_dims: (u32, u32),
    pub output_dims: (u32, u32),
    pub crop: Option<CropBox>,
    pub layout: BadgeLayout,
    pub font: String,
    pub font_kind: FontKind,
}

/// Run `job` against `backend` using `config` defaults.
pub fn run(
    backend: &impl ImageBackend,
    job: &BadgeJob,
    config: &BadgeConfig,
) -> Result<BadgeOutcome, ProcessError> {
    if !job.source.exists() {
        return Err(ProcessError::SourceNotFound(job.source.clone()));
    }
    let loader = FontLoader::new(&config.font_dirs);
    run_with_loader(backend, job, config, &loader)
}

/// [`run`] with an explicit font loader.
pub fn run_with_loader(
    backend: &impl ImageBackend,
    job: &BadgeJob,
    config: &BadgeConfig,
    loader: &FontLoader,
) -> Result<BadgeOutcome, ProcessError> {
    let image = backend.load(&job.source)?;
    let source_dims = (image.width(), image.height());
    debug!(
        "loaded {} ({}x{})",
        job.source.display(),
        source_dims.0,
        source_dims.1
    );

    let (base, crop) = if job.crop {
        let (square, crop) = square_crop(&image);
        debug!("cropped to {crop:?}");
        (square, Some(crop))
    } else {
        (image, None)
    };

    let font = job.font.as_deref().unwrap_or(&config.font);
    let badged = draw_badge(&base, job.number, loader, font)?;
    debug!(
        "badge {} at ({}, {}) size {}px, {} font",
        job.number, badged.layout.x, badged.layout.y, badged.layout.font_size, badged.font_kind
    );

    let output = resolve_output_path(
        &job.source,
        job.out.as_deref(),
        &config.prefix,
        job.format,
    );
    let result = DynamicImage::ImageRgba8(badged.image);
    let output_dims = (result.width(), result.height());
    backend.save(
        &result,
        &output,
        job.format,
        Quality::new(config.jpeg_quality),
    )?;

    Ok(BadgeOutcome {
        source: job.source.clone(),
        output,
        number: job.number,
        source_dims,
        output_dims,
        crop,
        layout: badged.layout,
        font: font.to_string(),
        font_kind: badged.font_kind,
    })
}
