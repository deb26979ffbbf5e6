//! Surround the source with a uniform solid border.

use image::imageops;
use image::RgbImage;
use tracing::debug;

use super::blend::flatten;
use super::normalize::{normalize, Canonical};
use super::{Composed, CompositionParameters, WHITE};
use crate::error::{Error, Result};
use crate::raster::{PixelData, RasterImage, RectPx};

/// Pads the source on every side by `floor(min(w, h) * padding_fraction)`.
///
/// Transparency is flattened onto the background color first, so the result
/// is always RGB. A transparent background falls back to white. The source is
/// pasted unchanged at `(padding, padding)`.
pub fn pad_border(source: &RasterImage, params: &CompositionParameters) -> Result<Composed> {
    params.validate()?;
    source.ensure_not_empty()?;

    let background = params.background.solid_or(WHITE);
    let flattened = match normalize(source, Canonical::Flatten(background)).into_pixels() {
        PixelData::Opaque(rgb) => rgb,
        // not produced by Canonical::Flatten
        PixelData::HasAlpha(rgba) | PixelData::Indexed(rgba) => flatten(&rgba, background),
    };

    let (width, height) = flattened.dimensions();
    let padding = params.padding_pixels(width.min(height));

    let padded_width = padded_side(width, padding)?;
    let padded_height = padded_side(height, padding)?;
    debug!(
        width,
        height,
        padding,
        padded_width,
        padded_height,
        "padding source with border"
    );

    let mut canvas = RgbImage::from_pixel(padded_width, padded_height, background);
    imageops::replace(&mut canvas, &flattened, i64::from(padding), i64::from(padding));

    Ok(Composed {
        image: RasterImage::opaque(canvas),
        content: RectPx::new(padding, padding, width, height),
    })
}

fn padded_side(side: u32, padding: u32) -> Result<u32> {
    padding
        .checked_mul(2)
        .and_then(|border| border.checked_add(side))
        .ok_or_else(|| Error::InvalidParameter {
            name: "padding_fraction",
            reason: format!("padding of {padding}px overflows a {side}px side"),
        })
}
