//! Mapping source pixel variants to the form a transform expects.

use image::Rgb;

use super::blend::flatten;
use crate::raster::{PixelData, RasterImage};

/// The canonical pixel form a transform works on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Canonical {
    /// Keep transparency as RGBA; opaque sources stay RGB.
    ///
    /// With `flatten_onto` set, transparent sources are flattened onto that
    /// color instead and come out opaque.
    KeepAlpha { flatten_onto: Option<Rgb<u8>> },

    /// Always RGB, with any transparency blended onto the given color.
    Flatten(Rgb<u8>),
}

/// Produces a new image in the requested canonical form.
///
/// Indexed sources are treated like any other transparent source: the
/// palette is already expanded, so only the alpha policy differs by target.
pub fn normalize(image: &RasterImage, canonical: Canonical) -> RasterImage {
    match (image.pixels(), canonical) {
        (PixelData::Opaque(rgb), _) => RasterImage::opaque(rgb.clone()),
        (
            PixelData::HasAlpha(rgba) | PixelData::Indexed(rgba),
            Canonical::KeepAlpha { flatten_onto: None },
        ) => RasterImage::with_alpha(rgba.clone()),
        (
            PixelData::HasAlpha(rgba) | PixelData::Indexed(rgba),
            Canonical::KeepAlpha {
                flatten_onto: Some(background),
            }
            | Canonical::Flatten(background),
        ) => RasterImage::opaque(flatten(rgba, background)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::ColorMode;
    use image::{RgbImage, Rgba, RgbaImage};

    const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

    fn half_transparent() -> RgbaImage {
        let mut img = RgbaImage::from_pixel(2, 1, Rgba([0, 0, 0, 0]));
        img.put_pixel(1, 0, Rgba([10, 20, 30, 255]));
        img
    }

    #[test]
    fn opaque_stays_rgb_for_every_target() {
        let src = RasterImage::opaque(RgbImage::from_pixel(3, 3, Rgb([1, 2, 3])));
        for canonical in [
            Canonical::KeepAlpha { flatten_onto: None },
            Canonical::KeepAlpha { flatten_onto: Some(WHITE) },
            Canonical::Flatten(WHITE),
        ] {
            assert_eq!(normalize(&src, canonical), src);
        }
    }

    #[test]
    fn keep_alpha_preserves_transparency() {
        let src = RasterImage::indexed(half_transparent());
        let out = normalize(&src, Canonical::KeepAlpha { flatten_onto: None });

        assert_eq!(out.color_mode(), ColorMode::Rgba);
        assert_eq!(out.as_rgba().unwrap().get_pixel(0, 0)[3], 0);
    }

    #[test]
    fn flatten_removes_transparency() {
        let src = RasterImage::with_alpha(half_transparent());
        let out = normalize(&src, Canonical::Flatten(WHITE));

        assert_eq!(out.color_mode(), ColorMode::Rgb);
        let rgb = out.as_rgb().unwrap();
        assert_eq!(*rgb.get_pixel(0, 0), WHITE);
        assert_eq!(*rgb.get_pixel(1, 0), Rgb([10, 20, 30]));
    }

    #[test]
    fn keep_alpha_with_background_flattens() {
        let purple = Rgb([0x6A, 0x1B, 0x9A]);
        let src = RasterImage::with_alpha(half_transparent());
        let out = normalize(&src, Canonical::KeepAlpha { flatten_onto: Some(purple) });

        assert_eq!(*out.as_rgb().unwrap().get_pixel(0, 0), purple);
    }
}
