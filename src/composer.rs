//! The icon composer: one operation, one set of parameters, one run.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::compose::{center_on_canvas, pad_border, Composed, CompositionParameters};
use crate::error::Result;
use crate::io::{load_raster, save_raster, OutputFormat, JPEG_QUALITY};
use crate::profile::CompositionProfile;
use crate::raster::{RasterImage, RectPx, SizePx};

// ============================================================================
// Configurable Trait
// ============================================================================

/// Trait for types that can be configured from a [`CompositionProfile`].
pub trait Configurable {
    /// Applies a profile's settings to this instance.
    fn apply_profile(&mut self, profile: &CompositionProfile);

    /// Exports the current settings as a profile.
    fn export_profile(&self) -> CompositionProfile;
}

// ============================================================================
// Operation
// ============================================================================

/// The transform an [`IconComposer`] runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Scale into a transparent square canvas; written as PNG.
    CenteredIcon,
    /// Surround with a solid border; written as JPEG.
    PaddedBorder,
}

impl Operation {
    /// The file format this operation's output is written in.
    pub fn output_format(&self) -> OutputFormat {
        match self {
            Operation::CenteredIcon => OutputFormat::Png,
            Operation::PaddedBorder => OutputFormat::Jpeg {
                quality: JPEG_QUALITY,
            },
        }
    }

    pub fn apply(&self, source: &RasterImage, params: &CompositionParameters) -> Result<Composed> {
        match self {
            Operation::CenteredIcon => center_on_canvas(source, params),
            Operation::PaddedBorder => pad_border(source, params),
        }
    }
}

// ============================================================================
// CompositionReport
// ============================================================================

/// What a completed run produced, for the summary printed afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct CompositionReport {
    pub operation: Operation,
    /// Parameters the run used.
    pub params: CompositionParameters,
    pub output_path: PathBuf,
    /// Dimensions of the decoded source.
    pub source: SizePx,
    /// Dimensions of the written image.
    pub output: SizePx,
    /// Where the source content sits inside the output.
    pub content: RectPx,
}

impl CompositionReport {
    /// Border thickness on each side, for padded outputs.
    pub fn padding(&self) -> u32 {
        self.content.x
    }
}

// ============================================================================
// IconComposer
// ============================================================================

/// Runs one composition operation with fixed parameters.
///
/// # Example
///
/// ```
/// use iconpad::{CompositionParameters, IconComposer, Operation, RasterImage};
/// use image::{Rgb, RgbImage};
///
/// let composer = IconComposer::new(Operation::CenteredIcon)
///     .with_params(CompositionParameters::new().with_canvas_size(256));
///
/// let source = RasterImage::opaque(RgbImage::from_pixel(80, 40, Rgb([10, 20, 30])));
/// let composed = composer.compose(&source).unwrap();
///
/// assert_eq!(composed.image.width(), 256);
/// assert_eq!(composed.content.width, 153);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct IconComposer {
    pub operation: Operation,
    pub params: CompositionParameters,
}

impl IconComposer {
    /// Creates a composer with default parameters.
    pub fn new(operation: Operation) -> Self {
        Self {
            operation,
            params: CompositionParameters::default(),
        }
    }

    pub fn with_params(mut self, params: CompositionParameters) -> Self {
        self.params = params;
        self
    }

    /// Composes an in-memory image. The source is never modified.
    pub fn compose(&self, source: &RasterImage) -> Result<Composed> {
        self.operation.apply(source, &self.params)
    }

    /// Loads `input`, composes it, and writes the result to `output`.
    ///
    /// A missing input fails before anything is created at `output`.
    pub fn run<I: AsRef<Path>, O: AsRef<Path>>(&self, input: I, output: O) -> Result<CompositionReport> {
        let input = input.as_ref();
        let output = output.as_ref();
        let format = self.operation.output_format();

        let source = load_raster(input)?;
        let composed = self.compose(&source)?;

        let extension_matches = output
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| matches_format(e, format));
        if !extension_matches {
            warn!(
                path = %output.display(),
                expected = format.extension(),
                "output extension does not match the encoded format"
            );
        }

        let report = CompositionReport {
            operation: self.operation,
            params: self.params,
            output_path: output.to_path_buf(),
            source: source.dimensions(),
            output: composed.image.dimensions(),
            content: composed.content,
        };

        save_raster(composed.image, output, format)?;
        info!(
            operation = ?report.operation,
            source = %report.source,
            output = %report.output,
            "composition complete"
        );

        Ok(report)
    }
}

fn matches_format(extension: &str, format: OutputFormat) -> bool {
    match format {
        OutputFormat::Png => extension.eq_ignore_ascii_case("png"),
        OutputFormat::Jpeg { .. } => {
            extension.eq_ignore_ascii_case("jpg") || extension.eq_ignore_ascii_case("jpeg")
        }
    }
}

impl Configurable for IconComposer {
    fn apply_profile(&mut self, profile: &CompositionProfile) {
        self.params = profile.apply_to(self.params);
    }

    fn export_profile(&self) -> CompositionProfile {
        CompositionProfile::from_parameters(&self.params)
    }
}

// ============================================================================
// Tests
// ============================================================================
