use crate::foundation::error::{StitchError, StitchResult};

/// Pixel dimensions of an image or of the output canvas.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize,
)]
pub struct Size {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Size {
    /// Create a size without validation.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Return `true` when either dimension is zero.
    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Number of bytes an RGBA8 buffer of this size occupies.
    ///
    /// Fails when the byte count does not fit in `usize`.
    pub fn rgba8_len(self) -> StitchResult<usize> {
        (self.width as usize)
            .checked_mul(self.height as usize)
            .and_then(|v| v.checked_mul(4))
            .ok_or_else(|| {
                StitchError::invalid_input(format!(
                    "rgba8 buffer size overflow for {}x{}",
                    self.width, self.height
                ))
            })
    }
}

/// Placement of one source image on the canvas, in whole pixels.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize,
)]
pub struct PlacementRect {
    /// Left edge.
    pub x: u32,
    /// Top edge.
    pub y: u32,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl PlacementRect {
    /// Create a rect from origin and extent.
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Extent of the rect.
    pub fn size(self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Exclusive right edge, widened so it never overflows.
    pub fn right(self) -> u64 {
        u64::from(self.x) + u64::from(self.width)
    }

    /// Exclusive bottom edge, widened so it never overflows.
    pub fn bottom(self) -> u64 {
        u64::from(self.y) + u64::from(self.height)
    }

    /// Return `true` when the pixel `(px, py)` lies inside the rect.
    pub fn contains(self, px: u32, py: u32) -> bool {
        px >= self.x
            && py >= self.y
            && u64::from(px) < self.right()
            && u64::from(py) < self.bottom()
    }

    /// Return `true` when the rect lies entirely inside a canvas of `canvas` size.
    pub fn fits_within(self, canvas: Size) -> bool {
        self.right() <= u64::from(canvas.width) && self.bottom() <= u64::from(canvas.height)
    }

    /// Return `true` when the two rects share at least one pixel.
    pub fn overlaps(self, other: PlacementRect) -> bool {
        self.to_kurbo().intersect(other.to_kurbo()).area() > 0.0
    }

    /// Convert to a floating-point [`kurbo::Rect`].
    pub fn to_kurbo(self) -> kurbo::Rect {
        kurbo::Rect::new(
            f64::from(self.x),
            f64::from(self.y),
            self.right() as f64,
            self.bottom() as f64,
        )
    }
}

/// Premultiplied RGBA8 (r,g,b already multiplied by a).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8Premul {
    /// Red channel premultiplied by alpha.
    pub r: u8,
    /// Green channel premultiplied by alpha.
    pub g: u8,
    /// Blue channel premultiplied by alpha.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8Premul {
    /// Opaque white, the default canvas background.
    pub fn white() -> Self {
        Self {
            r: 255,
            g: 255,
            b: 255,
            a: 255,
        }
    }

    /// Fully transparent black.
    pub fn transparent() -> Self {
        Self {
            r: 0,
            g: 0,
            b: 0,
            a: 0,
        }
    }

    /// Convert straight-alpha RGBA8 into premultiplied RGBA8.
    pub fn from_straight_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: premul_channel(r, a),
            g: premul_channel(g, a),
            b: premul_channel(b, a),
            a,
        }
    }

    /// Channel bytes in `[r, g, b, a]` order.
    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Rgba8Premul {
    fn default() -> Self {
        Self::white()
    }
}

pub(crate) fn premul_channel(c: u8, a: u8) -> u8 {
    ((u16::from(c) * u16::from(a) + 127) / 255) as u8
}

pub(crate) fn unpremul_channel(c: u8, a: u8) -> u8 {
    if a == 0 {
        return 0;
    }
    let a = u32::from(a);
    ((u32::from(c) * 255 + a / 2) / a).min(255) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
