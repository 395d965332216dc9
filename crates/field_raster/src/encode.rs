//! Encoding pixel buffers into image files.
//!
//! The container format follows the file extension of the target path and
//! must support single-channel 16-bit pixels; PNG and TIFF are compiled in.
use std::path::Path;

use image::{ImageBuffer, Luma};
use tracing::info;

use crate::error::{Error, Result};
use crate::quantize::Gray16;

/// Single-channel 16-bit image buffer.
pub type Gray16Image = ImageBuffer<Luma<u16>, Vec<u16>>;

/// Converts a pixel buffer into an [`image`] buffer of matching dimensions.
pub fn to_image(gray: Gray16) -> Result<Gray16Image> {
    let Gray16 {
        width,
        height,
        data,
    } = gray;
    ImageBuffer::from_raw(width, height, data).ok_or_else(|| {
        Error::InvalidConfig(format!("pixel buffer does not match {width}x{height}"))
    })
}

/// Writes a pixel buffer to `path`, inferring the container format from the
/// file extension.
pub fn write_gray16(gray: Gray16, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let img = to_image(gray)?;
    img.save(path)?;
    info!("Saved image to '{}'.", path.display());
    Ok(())
}
