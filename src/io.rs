//! Loading and saving raster images.
//!
//! Inputs are read fully into memory before decoding. Outputs are encoded
//! into memory, written to a temporary sibling file and renamed into place,
//! so a failed run never leaves a truncated image at the destination.

use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::codecs::jpeg::JpegEncoder;
use image::ImageFormat;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::raster::RasterImage;

/// JPEG quality used for padded outputs.
pub const JPEG_QUALITY: u8 = 95;

/// PNG color type byte for palette images (IHDR offset 25).
const PNG_INDEXED_COLOR_TYPE: u8 = 3;
const PNG_COLOR_TYPE_OFFSET: usize = 25;

/// Encoded file format of an output image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Lossless, keeps the alpha channel.
    Png,
    /// Lossy at the given quality (1-100); alpha is not representable.
    Jpeg { quality: u8 },
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Jpeg { .. } => "jpeg",
        }
    }
}

/// Loads an image from disk and classifies its pixel layout.
///
/// # Errors
///
/// - [`Error::InputNotFound`] if `path` does not exist (checked before
///   reading) or cannot be read as a file
/// - [`Error::Decode`] if the bytes are not a supported image
/// - [`Error::InvalidDimensions`] if the decoded image has no area
pub fn load_raster<P: AsRef<Path>>(path: P) -> Result<RasterImage> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(Error::InputNotFound {
            path: path.to_path_buf(),
            source: None,
        });
    }

    let bytes = fs::read(path).map_err(|source| Error::InputNotFound {
        path: path.to_path_buf(),
        source: Some(source),
    })?;

    let raster = decode_raster(&bytes).map_err(|source| Error::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    raster.ensure_not_empty()?;

    debug!(
        path = %path.display(),
        size = %raster.dimensions(),
        mode = ?raster.color_mode(),
        "loaded source image"
    );
    Ok(raster)
}

/// Decodes an in-memory encoded image.
pub fn decode_raster(bytes: &[u8]) -> image::ImageResult<RasterImage> {
    let format = image::guess_format(bytes)?;
    let decoded = image::load_from_memory_with_format(bytes, format)?;
    Ok(RasterImage::from_decoded(decoded, is_palette_source(bytes, format)))
}

/// Returns true if the container stores pixels as palette indices.
fn is_palette_source(bytes: &[u8], format: ImageFormat) -> bool {
    match format {
        ImageFormat::Gif => true,
        ImageFormat::Png => bytes.get(PNG_COLOR_TYPE_OFFSET) == Some(&PNG_INDEXED_COLOR_TYPE),
        _ => false,
    }
}

/// Encodes an image in the given format.
pub fn encode_raster(image: RasterImage, format: OutputFormat) -> image::ImageResult<Vec<u8>> {
    let image = image.into_dynamic();
    let mut buffer = Cursor::new(Vec::new());

    match format {
        OutputFormat::Png => image.write_to(&mut buffer, ImageFormat::Png)?,
        OutputFormat::Jpeg { quality } => {
            let encoder = JpegEncoder::new_with_quality(&mut buffer, quality);
            image.into_rgb8().write_with_encoder(encoder)?;
        }
    }

    Ok(buffer.into_inner())
}

/// Encodes and writes an image, creating missing parent directories.
///
/// # Errors
///
/// - [`Error::Encode`] if the encoder rejects the image
/// - [`Error::OutputWrite`] if a directory or the file cannot be written
pub fn save_raster<P: AsRef<Path>>(image: RasterImage, path: P, format: OutputFormat) -> Result<()> {
    let path = path.as_ref();

    let bytes = encode_raster(image, format).map_err(|source| Error::Encode {
        path: path.to_path_buf(),
        source,
    })?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| Error::OutputWrite {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    write_atomically(path, &bytes).map_err(|source| Error::OutputWrite {
        path: path.to_path_buf(),
        source,
    })?;

    info!(path = %path.display(), bytes = bytes.len(), ?format, "wrote image");
    Ok(())
}

fn write_atomically(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let temp = temp_sibling(path);

    let result = fs::write(&temp, bytes).and_then(|()| fs::rename(&temp, path));
    if result.is_err() {
        let _ = fs::remove_file(&temp);
    }
    result
}

fn temp_sibling(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(format!(".{}.tmp", std::process::id()));
    path.with_file_name(name)
}
