//! Scale the source into the middle of a transparent square canvas.

use image::imageops::{self, FilterType};
use image::RgbaImage;
use tracing::debug;

use super::blend::{opaque_rgba, resize_premultiplied};
use super::normalize::{normalize, Canonical};
use super::{Background, Composed, CompositionParameters};
use crate::error::Result;
use crate::raster::{PixelData, RasterImage, RectPx, SizePx};

/// Produces a `target_canvas_size` square RGBA icon with the source centered.
///
/// The source is scaled (Lanczos3) so its longer side equals
/// `floor(target_canvas_size * content_fraction)`, then composited over a
/// fully transparent canvas using its own alpha. Everything outside the
/// content rectangle keeps alpha 0.
///
/// A [`Background::Solid`] flattens transparent sources onto that color before
/// scaling. Opaque sources are never given a background; they are placed as
/// fully opaque content.
pub fn center_on_canvas(source: &RasterImage, params: &CompositionParameters) -> Result<Composed> {
    params.validate()?;
    source.ensure_not_empty()?;

    let canvas_size = params.target_canvas_size;
    let logo_size = params.logo_size()?;

    let flatten_onto = match params.background {
        Background::Solid(color) => Some(color),
        Background::Transparent => None,
    };
    let normalized = normalize(source, Canonical::KeepAlpha { flatten_onto });

    let scaled_size = normalized.dimensions().fit_longer_side(logo_size);
    let content = scale_to_rgba(normalized, scaled_size);

    let x = (canvas_size - scaled_size.width) / 2;
    let y = (canvas_size - scaled_size.height) / 2;
    debug!(
        source = %source.dimensions(),
        scaled = %scaled_size,
        x,
        y,
        canvas_size,
        "centering content on canvas"
    );

    let mut canvas = RgbaImage::new(canvas_size, canvas_size);
    imageops::overlay(&mut canvas, &content, i64::from(x), i64::from(y));

    Ok(Composed {
        image: RasterImage::with_alpha(canvas),
        content: RectPx::new(x, y, scaled_size.width, scaled_size.height),
    })
}

/// Resizes in the image's own channel layout, then widens to RGBA.
///
/// Transparent sources are filtered on premultiplied alpha.
fn scale_to_rgba(image: RasterImage, size: SizePx) -> RgbaImage {
    match image.into_pixels() {
        PixelData::Opaque(rgb) => {
            let scaled = imageops::resize(&rgb, size.width, size.height, FilterType::Lanczos3);
            opaque_rgba(&scaled)
        }
        PixelData::HasAlpha(rgba) | PixelData::Indexed(rgba) => {
            resize_premultiplied(&rgba, size.width, size.height)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::ICON_BACKGROUND;
    use crate::error::Error;
    use crate::raster::ColorMode;
    use image::{Rgb, RgbImage, Rgba};

    fn solid_rgb(width: u32, height: u32) -> RasterImage {
        RasterImage::opaque(RgbImage::from_pixel(width, height, Rgb([200, 40, 40])))
    }

    fn assert_clear_outside(canvas: &RgbaImage, content: RectPx) {
        for (x, y, pixel) in canvas.enumerate_pixels() {
            if !content.contains(x, y) {
                assert_eq!(pixel[3], 0, "pixel ({x}, {y}) outside content must be clear");
            }
        }
    }

    #[test]
    fn landscape_jpeg_scenario() {
        let params = CompositionParameters::default();
        let out = center_on_canvas(&solid_rgb(800, 600), &params).unwrap();

        assert_eq!(out.image.dimensions(), SizePx::new(1024, 1024));
        assert_eq!(out.image.color_mode(), ColorMode::Rgba);
        assert_eq!(out.content, RectPx::new(205, 282, 614, 460));

        let canvas = out.image.as_rgba().unwrap();
        assert_eq!(canvas.get_pixel(512, 512)[3], 255);
        assert_eq!(canvas.get_pixel(205, 282)[3], 255);
        assert_eq!(canvas.get_pixel(818, 741)[3], 255);
        assert_clear_outside(canvas, out.content);
    }

    #[test]
    fn canvas_size_independent_of_aspect_ratio() {
        let params = CompositionParameters::new()
            .with_canvas_size(128)
            .with_content_fraction(0.5);

        for (w, h) in [(10, 10), (300, 20), (20, 300), (64, 63), (1, 1)] {
            let out = center_on_canvas(&solid_rgb(w, h), &params).unwrap();
            assert_eq!(out.image.dimensions(), SizePx::new(128, 128));
            assert_eq!(out.content.width.max(out.content.height), 64);
            assert_clear_outside(out.image.as_rgba().unwrap(), out.content);
        }
    }

    #[test]
    fn portrait_source_is_centered() {
        let params = CompositionParameters::new()
            .with_canvas_size(100)
            .with_content_fraction(0.6);
        let out = center_on_canvas(&solid_rgb(30, 60), &params).unwrap();

        assert_eq!(out.content, RectPx::new(35, 20, 30, 60));
    }

    #[test]
    fn transparent_source_keeps_alpha() {
        let mut src = RgbaImage::from_pixel(40, 40, Rgba([0, 0, 0, 0]));
        for y in 10..30 {
            for x in 10..30 {
                src.put_pixel(x, y, Rgba([0, 200, 0, 255]));
            }
        }
        let params = CompositionParameters::new()
            .with_canvas_size(80)
            .with_content_fraction(0.5);
        let out = center_on_canvas(&RasterImage::with_alpha(src), &params).unwrap();
        let canvas = out.image.as_rgba().unwrap();

        assert_eq!(out.content, RectPx::new(20, 20, 40, 40));
        // Corners of the content stay transparent, middle is opaque green
        assert_eq!(canvas.get_pixel(21, 21)[3], 0);
        assert_eq!(canvas.get_pixel(40, 40).0, [0, 200, 0, 255]);
    }

    #[test]
    fn solid_background_flattens_transparent_source() {
        let src = RgbaImage::from_pixel(40, 40, Rgba([0, 0, 0, 0]));
        let params = CompositionParameters::new()
            .with_canvas_size(80)
            .with_content_fraction(0.5)
            .with_background(Background::Solid(ICON_BACKGROUND));
        let out = center_on_canvas(&RasterImage::with_alpha(src), &params).unwrap();
        let canvas = out.image.as_rgba().unwrap();

        assert_eq!(canvas.get_pixel(40, 40).0, [0x6A, 0x1B, 0x9A, 255]);
        assert_eq!(canvas.get_pixel(0, 0)[3], 0);
    }

    #[test]
    fn transparent_edges_keep_their_color() {
        let src = RgbaImage::from_fn(40, 40, |x, _| {
            if x < 20 { Rgba([0, 0, 0, 0]) } else { Rgba([255, 255, 255, 255]) }
        });
        let params = CompositionParameters::new()
            .with_canvas_size(40)
            .with_content_fraction(0.5);
        let out = center_on_canvas(&RasterImage::with_alpha(src), &params).unwrap();
        let canvas = out.image.as_rgba().unwrap();

        assert_eq!(out.content, RectPx::new(10, 10, 20, 20));
        for (x, y, pixel) in canvas.enumerate_pixels() {
            if pixel[3] > 16 {
                assert!(pixel[0] >= 254, "dark halo at ({x}, {y}): {:?}", pixel.0);
            }
        }
    }

    #[test]
    fn small_sources_are_scaled_up() {
        let params = CompositionParameters::default();
        let out = center_on_canvas(&solid_rgb(16, 8), &params).unwrap();
        assert_eq!(out.content, RectPx::new(205, 358, 614, 307));
    }

    #[test]
    fn zero_area_source_rejected() {
        let params = CompositionParameters::default();
        let err = center_on_canvas(&solid_rgb(0, 10), &params).unwrap_err();
        assert!(matches!(err, Error::InvalidDimensions { width: 0, height: 10 }));
    }
}
