use std::sync::Arc;

use crate::foundation::{
    core::{Size, premul_channel, unpremul_channel},
    error::{StitchError, StitchResult},
};

/// An immutable raster image as premultiplied RGBA8.
///
/// Pixels are tightly packed and row-major. The constructor enforces `width > 0`, `height > 0`
/// and `data.len() == width * height * 4`, so every value of this type is a valid stitch input.
/// Cloning is cheap; the pixel buffer is shared.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RasterImage {
    width: u32,
    height: u32,
    rgba8_premul: Arc<Vec<u8>>,
}

impl RasterImage {
    /// Wrap an existing premultiplied RGBA8 buffer.
    pub fn new(width: u32, height: u32, rgba8_premul: Vec<u8>) -> StitchResult<Self> {
        let size = Size::new(width, height);
        if size.is_empty() {
            return Err(StitchError::invalid_input(format!(
                "raster image must be non-zero in both dimensions (got {width}x{height})"
            )));
        }
        let expected = size.rgba8_len()?;
        if rgba8_premul.len() != expected {
            return Err(StitchError::invalid_input(format!(
                "raster buffer length {} does not match {width}x{height}x4 = {expected}",
                rgba8_premul.len()
            )));
        }
        Ok(Self {
            width,
            height,
            rgba8_premul: Arc::new(rgba8_premul),
        })
    }

    /// Build from a straight-alpha RGBA8 buffer, premultiplying in place.
    pub fn from_straight_rgba8(width: u32, height: u32, mut rgba8: Vec<u8>) -> StitchResult<Self> {
        premultiply_rgba8_in_place(&mut rgba8);
        Self::new(width, height, rgba8)
    }

    /// Build a single-colour image. Handy for backgrounds and tests.
    pub fn filled(width: u32, height: u32, px: [u8; 4]) -> StitchResult<Self> {
        let len = Size::new(width, height).rgba8_len()?;
        let mut data = Vec::with_capacity(len);
        for _ in 0..len / 4 {
            data.extend_from_slice(&px);
        }
        Self::new(width, height, data)
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Both dimensions.
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Premultiplied RGBA8 bytes.
    pub fn data(&self) -> &[u8] {
        self.rgba8_premul.as_slice()
    }

    /// Bytes of row `y` (premultiplied RGBA8).
    pub fn row(&self, y: u32) -> Option<&[u8]> {
        if y >= self.height {
            return None;
        }
        let stride = self.width as usize * 4;
        let start = y as usize * stride;
        self.rgba8_premul.get(start..start + stride)
    }

    /// Premultiplied pixel at `(x, y)`.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width {
            return None;
        }
        let row = self.row(y)?;
        let i = x as usize * 4;
        Some([row[i], row[i + 1], row[i + 2], row[i + 3]])
    }

    /// Return `true` when every pixel has alpha 255.
    pub fn is_opaque(&self) -> bool {
        self.rgba8_premul.chunks_exact(4).all(|px| px[3] == 255)
    }

    /// Copy out as straight-alpha RGBA8, the layout most encoders expect.
    pub fn to_straight_rgba8(&self) -> Vec<u8> {
        let mut out = self.rgba8_premul.to_vec();
        for px in out.chunks_exact_mut(4) {
            let a = px[3];
            if a == 255 {
                continue;
            }
            px[0] = unpremul_channel(px[0], a);
            px[1] = unpremul_channel(px[1], a);
            px[2] = unpremul_channel(px[2], a);
        }
        out
    }
}

pub(crate) fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3];
        if a == 255 {
            continue;
        }
        px[0] = premul_channel(px[0], a);
        px[1] = premul_channel(px[1], a);
        px[2] = premul_channel(px[2], a);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
