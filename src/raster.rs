//! Raster image types.
//!
//! A [`RasterImage`] wraps decoded pixels in a [`PixelData`] variant that is
//! resolved once, when the image is loaded or constructed. Transforms match on
//! the variant instead of inspecting color modes at each step.

use image::{DynamicImage, RgbImage, RgbaImage};

use crate::error::{Error, Result};

/// A rectangle defined in pixel coordinates.
///
/// Used to describe where source content landed inside an output canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RectPx {
    /// X offset from the left edge of the image
    pub x: u32,
    /// Y offset from the top edge of the image
    pub y: u32,
    /// Width of the rectangle
    pub width: u32,
    /// Height of the rectangle
    pub height: u32,
}

impl RectPx {
    /// Creates a new rectangle with the given position and dimensions.
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// Returns the right edge coordinate (x + width).
    pub fn right(&self) -> u32 {
        self.x + self.width
    }

    /// Returns the bottom edge coordinate (y + height).
    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }

    /// Returns true if the pixel at `(x, y)` lies inside the rectangle.
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }
}

/// A 2D size in pixel units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SizePx {
    pub width: u32,
    pub height: u32,
}

impl SizePx {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Returns true if either side is zero.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn longer_side(&self) -> u32 {
        self.width.max(self.height)
    }

    pub fn shorter_side(&self) -> u32 {
        self.width.min(self.height)
    }

    /// Scales so the longer side equals `target`, preserving aspect ratio.
    ///
    /// The shorter side is floored and never drops below one pixel.
    pub fn fit_longer_side(&self, target: u32) -> SizePx {
        let long = u64::from(self.longer_side().max(1));
        let short = u64::from(self.shorter_side());
        let scaled_short = ((short * u64::from(target)) / long).max(1) as u32;

        if self.width >= self.height {
            SizePx::new(target, scaled_short)
        } else {
            SizePx::new(scaled_short, target)
        }
    }
}

impl std::fmt::Display for SizePx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Channel layout of a raster image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    /// Three channels, no transparency.
    Rgb,
    /// Four channels with straight (non-premultiplied) alpha.
    Rgba,
}

/// Decoded pixels, tagged by how the source represented color.
#[derive(Debug, Clone, PartialEq)]
pub enum PixelData {
    /// No alpha channel in the source.
    Opaque(RgbImage),
    /// The source carried its own alpha channel (RGBA, gray + alpha).
    HasAlpha(RgbaImage),
    /// The source was palette based. The palette is expanded on decode and
    /// any palette transparency is kept in the alpha channel.
    Indexed(RgbaImage),
}

/// A decoded image with a single, uniform channel layout.
#[derive(Debug, Clone, PartialEq)]
pub struct RasterImage {
    pixels: PixelData,
}

impl RasterImage {
    pub fn new(pixels: PixelData) -> Self {
        Self { pixels }
    }

    pub fn opaque(data: RgbImage) -> Self {
        Self::new(PixelData::Opaque(data))
    }

    pub fn with_alpha(data: RgbaImage) -> Self {
        Self::new(PixelData::HasAlpha(data))
    }

    pub fn indexed(data: RgbaImage) -> Self {
        Self::new(PixelData::Indexed(data))
    }

    /// Classifies a decoded image.
    ///
    /// `indexed` marks sources whose container stored a palette; the decoder
    /// has already expanded it. Everything else is sorted by whether the
    /// decoded color type carries alpha. Grayscale, 16-bit and float inputs
    /// are converted to 8-bit RGB or RGBA.
    pub fn from_decoded(image: DynamicImage, indexed: bool) -> Self {
        if indexed {
            Self::indexed(image.to_rgba8())
        } else if image.color().has_alpha() {
            Self::with_alpha(image.to_rgba8())
        } else {
            Self::opaque(image.to_rgb8())
        }
    }

    pub fn pixels(&self) -> &PixelData {
        &self.pixels
    }

    pub fn into_pixels(self) -> PixelData {
        self.pixels
    }

    pub fn width(&self) -> u32 {
        match &self.pixels {
            PixelData::Opaque(img) => img.width(),
            PixelData::HasAlpha(img) | PixelData::Indexed(img) => img.width(),
        }
    }

    pub fn height(&self) -> u32 {
        match &self.pixels {
            PixelData::Opaque(img) => img.height(),
            PixelData::HasAlpha(img) | PixelData::Indexed(img) => img.height(),
        }
    }

    /// Returns the pixel dimensions of the image.
    pub fn dimensions(&self) -> SizePx {
        SizePx::new(self.width(), self.height())
    }

    pub fn color_mode(&self) -> ColorMode {
        match self.pixels {
            PixelData::Opaque(_) => ColorMode::Rgb,
            PixelData::HasAlpha(_) | PixelData::Indexed(_) => ColorMode::Rgba,
        }
    }

    /// Returns the RGB buffer if the image is opaque.
    pub fn as_rgb(&self) -> Option<&RgbImage> {
        match &self.pixels {
            PixelData::Opaque(img) => Some(img),
            _ => None,
        }
    }

    /// Returns the RGBA buffer if the image carries alpha.
    pub fn as_rgba(&self) -> Option<&RgbaImage> {
        match &self.pixels {
            PixelData::HasAlpha(img) | PixelData::Indexed(img) => Some(img),
            PixelData::Opaque(_) => None,
        }
    }

    /// Fails with [`Error::InvalidDimensions`] if the image has no area.
    pub fn ensure_not_empty(&self) -> Result<()> {
        let size = self.dimensions();
        if size.is_empty() {
            return Err(Error::InvalidDimensions {
                width: size.width,
                height: size.height,
            });
        }
        Ok(())
    }

    /// Converts into an image-crate value for encoding.
    pub fn into_dynamic(self) -> DynamicImage {
        match self.pixels {
            PixelData::Opaque(img) => DynamicImage::ImageRgb8(img),
            PixelData::HasAlpha(img) | PixelData::Indexed(img) => DynamicImage::ImageRgba8(img),
        }
    }
}
