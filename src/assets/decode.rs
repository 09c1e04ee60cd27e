use std::path::Path;

use crate::foundation::{
    core::Size,
    error::{StitchError, StitchResult},
};
use crate::render::raster::RasterImage;

/// Decode an encoded image (PNG, JPEG, BMP, GIF, ...) into premultiplied RGBA8.
pub fn decode_image(bytes: &[u8]) -> StitchResult<RasterImage> {
    let dyn_img = image::load_from_memory(bytes)
        .map_err(|e| StitchError::invalid_input(format!("decode image from memory: {e}")))?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();
    RasterImage::from_straight_rgba8(width, height, rgba.into_raw())
}

/// Read and decode the image at `path`.
pub fn load_image(path: &Path) -> StitchResult<RasterImage> {
    let bytes = std::fs::read(path).map_err(|e| {
        StitchError::invalid_input(format!("read image '{}': {e}", path.display()))
    })?;
    let image = decode_image(&bytes).map_err(|e| match e {
        StitchError::InvalidInput(msg) => {
            StitchError::invalid_input(format!("'{}': {msg}", path.display()))
        }
        other => other,
    })?;
    tracing::debug!(
        path = %path.display(),
        width = image.width(),
        height = image.height(),
        "loaded source image"
    );
    Ok(image)
}

/// Read only the dimensions of the image at `path`, without decoding pixels.
pub fn probe_size(path: &Path) -> StitchResult<Size> {
    let (width, height) = image::image_dimensions(path).map_err(|e| {
        StitchError::invalid_input(format!("probe image '{}': {e}", path.display()))
    })?;
    Ok(Size::new(width, height))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
