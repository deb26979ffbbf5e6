//! Icon composition transforms.
//!
//! Both transforms are pure functions from a [`RasterImage`] and a set of
//! [`CompositionParameters`] to a new image:
//!
//! - [`center_on_canvas`] scales the source into a fixed square transparent
//!   canvas so it sits inside the adaptive icon safe zone.
//! - [`pad_border`] surrounds the source with a uniform solid border.
//!
//! Source color modes are reconciled up front by [`normalize`], which maps
//! every [`PixelData`](crate::PixelData) variant to the canonical form the
//! chosen transform expects.

pub mod blend;
pub mod border;
pub mod centered;
pub mod normalize;

pub use border::pad_border;
pub use centered::center_on_canvas;
pub use normalize::{normalize, Canonical};

use std::fmt;
use std::str::FromStr;

use image::Rgb;
use palette::Srgb;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::raster::{RasterImage, RectPx};

/// Side length of the adaptive icon canvas.
pub const DEFAULT_CANVAS_SIZE: u32 = 1024;

/// Share of the canvas the scaled logo occupies. 60% stays inside the 66%
/// safe zone with a little room to spare.
pub const DEFAULT_LOGO_SIZE_PERCENT: u32 = 60;

/// Border thickness as a share of the smaller source side.
pub const DEFAULT_PADDING_PERCENT: u32 = 20;

/// Brand color `icon_logo --flatten` puts behind transparent sources.
pub const ICON_BACKGROUND: Rgb<u8> = Rgb([0x6A, 0x1B, 0x9A]);

pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

// ============================================================================
// Background
// ============================================================================

/// Background fill for a composition.
///
/// Serializes as `"transparent"` or a `#rrggbb` hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Background {
    #[default]
    Transparent,
    Solid(Rgb<u8>),
}

impl Background {
    /// Returns the solid color, or `fallback` for a transparent background.
    pub fn solid_or(&self, fallback: Rgb<u8>) -> Rgb<u8> {
        match self {
            Background::Solid(color) => *color,
            Background::Transparent => fallback,
        }
    }
}

impl FromStr for Background {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("transparent") || trimmed.eq_ignore_ascii_case("none") {
            return Ok(Background::Transparent);
        }

        let color: Srgb<u8> = trimmed.parse().map_err(|e| Error::InvalidParameter {
            name: "background",
            reason: format!("`{trimmed}` is not a hex color: {e}"),
        })?;
        Ok(Background::Solid(Rgb([color.red, color.green, color.blue])))
    }
}

impl fmt::Display for Background {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Background::Transparent => f.write_str("transparent"),
            Background::Solid(Rgb([r, g, b])) => write!(f, "#{r:02x}{g:02x}{b:02x}"),
        }
    }
}

impl TryFrom<String> for Background {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Background> for String {
    fn from(background: Background) -> Self {
        background.to_string()
    }
}

// ============================================================================
// CompositionParameters
// ============================================================================

/// Sizing and fill options shared by both transforms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompositionParameters {
    /// Side length of the square output canvas (centered icon only).
    pub target_canvas_size: u32,

    /// Fraction of the canvas the scaled content occupies, in `(0, 1]`
    /// (centered icon only).
    pub content_fraction: f64,

    /// Fraction of the smaller source side added as border on each edge,
    /// `>= 0` (border padding only).
    pub padding_fraction: f64,

    pub background: Background,
}

impl Default for CompositionParameters {
    fn default() -> Self {
        Self {
            target_canvas_size: DEFAULT_CANVAS_SIZE,
            content_fraction: f64::from(DEFAULT_LOGO_SIZE_PERCENT) / 100.0,
            padding_fraction: f64::from(DEFAULT_PADDING_PERCENT) / 100.0,
            background: Background::Transparent,
        }
    }
}

impl CompositionParameters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_canvas_size(mut self, size: u32) -> Self {
        self.target_canvas_size = size;
        self
    }

    pub fn with_content_fraction(mut self, fraction: f64) -> Self {
        self.content_fraction = fraction;
        self
    }

    pub fn with_padding_fraction(mut self, fraction: f64) -> Self {
        self.padding_fraction = fraction;
        self
    }

    pub fn with_background(mut self, background: Background) -> Self {
        self.background = background;
        self
    }

    /// Checks every field against its documented range.
    pub fn validate(&self) -> Result<()> {
        if self.target_canvas_size == 0 {
            return Err(Error::InvalidParameter {
                name: "target_canvas_size",
                reason: "must be positive".into(),
            });
        }
        if !(self.content_fraction > 0.0 && self.content_fraction <= 1.0) {
            return Err(Error::InvalidParameter {
                name: "content_fraction",
                reason: format!("{} is outside (0, 1]", self.content_fraction),
            });
        }
        if !(self.padding_fraction >= 0.0 && self.padding_fraction.is_finite()) {
            return Err(Error::InvalidParameter {
                name: "padding_fraction",
                reason: format!("{} is not a non-negative number", self.padding_fraction),
            });
        }
        Ok(())
    }

    /// `floor(target_canvas_size * content_fraction)`; zero is rejected.
    pub fn logo_size(&self) -> Result<u32> {
        let size = (f64::from(self.target_canvas_size) * self.content_fraction).floor() as u32;
        if size == 0 {
            return Err(Error::InvalidParameter {
                name: "content_fraction",
                reason: format!(
                    "{} of a {}px canvas leaves no room for content",
                    self.content_fraction, self.target_canvas_size
                ),
            });
        }
        Ok(size)
    }

    /// `floor(shorter_side * padding_fraction)`.
    pub fn padding_pixels(&self, shorter_side: u32) -> u32 {
        (f64::from(shorter_side) * self.padding_fraction).floor() as u32
    }
}

// ============================================================================
// Composed
// ============================================================================

/// The output of a transform together with where the source landed in it.
#[derive(Debug, Clone, PartialEq)]
pub struct Composed {
    pub image: RasterImage,

    /// Bounds of the placed source content within `image`.
    pub content: RectPx,
}
