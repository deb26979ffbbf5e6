//! iconpad: adaptive app icon asset preparation
//!
//! This crate turns a single logo image into an asset that survives the
//! masks launchers apply to adaptive icons. Two transforms are provided:
//!
//! - [`Operation::CenteredIcon`] scales the logo into the middle of a square
//!   transparent canvas (PNG output).
//! - [`Operation::PaddedBorder`] surrounds the logo with a uniform solid
//!   border (JPEG output).
//!
//! # Example
//!
//! ```
//! use iconpad::{CompositionParameters, RasterImage, center_on_canvas, pad_border};
//! use image::{Rgb, RgbImage};
//!
//! let logo = RasterImage::opaque(RgbImage::from_pixel(800, 600, Rgb([200, 40, 40])));
//! let params = CompositionParameters::default();
//!
//! let icon = center_on_canvas(&logo, &params).unwrap();
//! assert_eq!((icon.content.x, icon.content.y), (205, 282));
//!
//! let padded = pad_border(&logo, &params).unwrap();
//! assert_eq!(padded.image.width(), 800 + 2 * 120);
//! ```
//!
//! # Profiles
//!
//! Settings can be kept in a JSON [`CompositionProfile`] and applied through
//! the [`Configurable`] trait:
//!
//! ```
//! use iconpad::{Configurable, CompositionProfile, IconComposer, Operation};
//!
//! let mut composer = IconComposer::new(Operation::PaddedBorder);
//! let profile = CompositionProfile::from_json(r#"{ "paddingPercent": 10 }"#).unwrap();
//! composer.apply_profile(&profile);
//!
//! assert_eq!(composer.params.padding_fraction, 0.1);
//! ```

mod composer;
mod error;
mod profile;
mod raster;

pub mod compose;
pub mod io;

#[cfg(feature = "cli")]
pub mod cli;

pub use compose::{
    center_on_canvas, normalize, pad_border, Background, Canonical, Composed,
    CompositionParameters, DEFAULT_CANVAS_SIZE, DEFAULT_LOGO_SIZE_PERCENT,
    DEFAULT_PADDING_PERCENT, ICON_BACKGROUND, WHITE,
};
pub use composer::{CompositionReport, Configurable, IconComposer, Operation};
pub use error::{Error, Result};
pub use io::{load_raster, save_raster, OutputFormat, JPEG_QUALITY};
pub use profile::CompositionProfile;
pub use raster::{ColorMode, PixelData, RasterImage, RectPx, SizePx};
