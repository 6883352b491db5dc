//! PNG decoding to RGB and size-optimized PNG encoding

use crate::io::error::{InfillError, Result};
use image::RgbImage;
use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Decode an image and convert it to 8-bit RGB
///
/// Alpha and palette information is discarded, not composited.
///
/// # Errors
///
/// Returns [`InfillError::ImageLoad`] if the file is missing, unreadable,
/// or not a decodable image
pub fn load_rgb(path: &Path) -> Result<RgbImage> {
    let img = image::open(path).map_err(|e| InfillError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(img.into_rgb8())
}

/// Encode as PNG with maximum compression, overwriting any existing file
///
/// The parent directory must already exist.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be created (missing directory, permissions)
/// - PNG encoding fails
/// - Buffered data cannot be flushed to disk
pub fn save_png_optimized(img: &RgbImage, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|e| InfillError::FileSystem {
        path: path.to_path_buf(),
        operation: "create file",
        source: e,
    })?;
    let mut writer = BufWriter::new(file);

    let encoder =
        PngEncoder::new_with_quality(&mut writer, CompressionType::Best, FilterType::Adaptive);
    img.write_with_encoder(encoder)
        .map_err(|e| InfillError::ImageExport {
            path: path.to_path_buf(),
            source: e,
        })?;

    writer.flush().map_err(|e| InfillError::FileSystem {
        path: path.to_path_buf(),
        operation: "flush file",
        source: e,
    })?;

    Ok(())
}
