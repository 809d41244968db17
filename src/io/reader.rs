use std::path::Path;

use image::{ImageReader, RgbaImage};

use crate::error::Result;

/// Decode any supported raster at `path` into an owned RGBA buffer.
///
/// The file handle is released before this returns, so the caller may
/// overwrite the same path with the result.
pub fn read_rgba(path: &Path) -> Result<RgbaImage> {
    let decoded = ImageReader::open(path)?.with_guessed_format()?.decode()?;
    Ok(decoded.into_rgba8())
}
