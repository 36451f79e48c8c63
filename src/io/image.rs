//! Image decoding into rasters and raster export

use std::path::Path;

use image::ImageFormat;

use crate::imaging::raster::Raster;
use crate::io::error::{Result, SearchError};

/// Decode raw bytes, trying TIFF before sniffing the standard formats
///
/// # Errors
///
/// Returns the decoder error if neither attempt recognises the data
pub fn decode_raster(bytes: &[u8]) -> std::result::Result<Raster, image::ImageError> {
    let decoded = image::load_from_memory_with_format(bytes, ImageFormat::Tiff)
        .or_else(|_| image::load_from_memory(bytes))?;
    Ok(Raster::from_dynamic(&decoded))
}

/// Read and decode an image file
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read
/// - The contents are not a supported image format
pub fn load_raster<P: AsRef<Path>>(path: P) -> Result<Raster> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| SearchError::FileSystem {
        path: path.to_path_buf(),
        operation: "read image",
        source,
    })?;
    decode_raster(&bytes).map_err(|source| SearchError::ImageLoad {
        path: path.to_path_buf(),
        source,
    })
}

/// Encode a raster, choosing the format from the file extension
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The extension is unknown or encoding fails
pub fn export_raster<P: AsRef<Path>>(raster: &Raster, output_path: P) -> Result<()> {
    let output_path = output_path.as_ref();
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| SearchError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    raster
        .to_rgba_image()
        .save(output_path)
        .map_err(|e| SearchError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}
