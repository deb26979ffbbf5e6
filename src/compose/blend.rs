//! Pixel blending helpers shared by both transforms.

use image::imageops::{self, FilterType};
use image::{Rgb, RgbImage, Rgba, Rgba32FImage, RgbaImage};

/// Blends one straight-alpha pixel onto an opaque background color.
pub fn flatten_pixel(src: Rgba<u8>, background: Rgb<u8>) -> Rgb<u8> {
    let a = u32::from(src[3]);
    let mix = |c: u8, b: u8| ((u32::from(c) * a + u32::from(b) * (255 - a) + 127) / 255) as u8;
    Rgb([
        mix(src[0], background[0]),
        mix(src[1], background[1]),
        mix(src[2], background[2]),
    ])
}

/// Flattens an RGBA image onto a solid background, dropping alpha.
pub fn flatten(src: &RgbaImage, background: Rgb<u8>) -> RgbImage {
    RgbImage::from_fn(src.width(), src.height(), |x, y| {
        flatten_pixel(*src.get_pixel(x, y), background)
    })
}

/// Wraps an RGB image into RGBA with every pixel fully opaque.
pub fn opaque_rgba(src: &RgbImage) -> RgbaImage {
    RgbaImage::from_fn(src.width(), src.height(), |x, y| {
        let Rgb([r, g, b]) = *src.get_pixel(x, y);
        Rgba([r, g, b, 255])
    })
}

/// Resizes an RGBA image with Lanczos3 on premultiplied alpha.
///
/// Fully transparent pixels carry no color weight, so their RGB values do not
/// bleed into the edges of opaque content.
pub fn resize_premultiplied(src: &RgbaImage, width: u32, height: u32) -> RgbaImage {
    let premultiplied = Rgba32FImage::from_fn(src.width(), src.height(), |x, y| {
        let [r, g, b, a] = src.get_pixel(x, y).0.map(|c| f32::from(c) / 255.0);
        Rgba([r * a, g * a, b * a, a])
    });

    let scaled = imageops::resize(&premultiplied, width, height, FilterType::Lanczos3);

    RgbaImage::from_fn(width, height, |x, y| {
        let [r, g, b, a] = scaled.get_pixel(x, y).0;
        let a = a.clamp(0.0, 1.0);
        if a <= 0.0 {
            return Rgba([0, 0, 0, 0]);
        }
        let to_u8 = |v: f32| (v * 255.0).round().clamp(0.0, 255.0) as u8;
        Rgba([to_u8(r / a), to_u8(g / a), to_u8(b / a), to_u8(a)])
    })
}
