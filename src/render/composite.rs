use rayon::prelude::*;

use crate::foundation::{
    core::{PlacementRect, Rgba8Premul, Size},
    error::{StitchError, StitchResult},
};
use crate::render::raster::RasterImage;

/// One premultiplied RGBA8 pixel.
pub type PremulRgba8 = [u8; 4];

/// One source image and where it lands on the canvas.
#[derive(Clone, Copy, Debug)]
pub struct Placement<'a> {
    /// Source pixels.
    pub image: &'a RasterImage,
    /// Destination rect; its size must equal the image size.
    pub rect: PlacementRect,
}

impl<'a> Placement<'a> {
    /// Pair an image with its destination rect.
    pub fn new(image: &'a RasterImage, rect: PlacementRect) -> Self {
        Self { image, rect }
    }
}

/// Paint `placements` onto a fresh canvas filled with `background`.
///
/// Images are copied pixel for pixel at their rect origin; nothing is scaled. Opaque source
/// pixels replace the background, translucent ones are blended source-over. Rects must fit the
/// canvas and must not overlap, which makes the result independent of paint order.
pub fn composite(
    canvas: Size,
    background: Rgba8Premul,
    placements: &[Placement<'_>],
) -> StitchResult<RasterImage> {
    if canvas.is_empty() {
        return Err(StitchError::invalid_input(format!(
            "canvas must be non-zero in both dimensions (got {}x{})",
            canvas.width, canvas.height
        )));
    }
    validate_placements(canvas, placements)?;

    let mut data = vec![0u8; canvas.rgba8_len()?];
    let stride = canvas.width as usize * 4;
    let bg = background.to_array();

    data.par_chunks_exact_mut(stride)
        .enumerate()
        .for_each(|(y, row)| {
            for px in row.chunks_exact_mut(4) {
                px.copy_from_slice(&bg);
            }
            let y = y as u32;
            for p in placements {
                if y < p.rect.y || u64::from(y) >= p.rect.bottom() {
                    continue;
                }
                let Some(src) = p.image.row(y - p.rect.y) else {
                    continue;
                };
                let start = p.rect.x as usize * 4;
                paint_span(&mut row[start..start + src.len()], src);
            }
        });

    tracing::debug!(
        width = canvas.width,
        height = canvas.height,
        placements = placements.len(),
        "composited canvas"
    );
    RasterImage::new(canvas.width, canvas.height, data)
}

fn validate_placements(canvas: Size, placements: &[Placement<'_>]) -> StitchResult<()> {
    for (i, p) in placements.iter().enumerate() {
        if p.rect.size() != p.image.size() {
            return Err(StitchError::invalid_input(format!(
                "placement {i}: rect {}x{} does not match image {}x{} (scaling is not supported)",
                p.rect.width,
                p.rect.height,
                p.image.width(),
                p.image.height()
            )));
        }
        if !p.rect.fits_within(canvas) {
            return Err(StitchError::invalid_input(format!(
                "placement {i}: rect {:?} exceeds canvas {}x{}",
                p.rect, canvas.width, canvas.height
            )));
        }
    }
    for (i, a) in placements.iter().enumerate() {
        for (j, b) in placements.iter().enumerate().skip(i + 1) {
            if a.rect.overlaps(b.rect) {
                return Err(StitchError::invalid_input(format!(
                    "placements {i} and {j} overlap"
                )));
            }
        }
    }
    Ok(())
}

fn paint_span(dst: &mut [u8], src: &[u8]) {
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        match s[3] {
            255 => d.copy_from_slice(s),
            0 => {}
            _ => {
                let out = over([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]]);
                d.copy_from_slice(&out);
            }
        }
    }
}

/// Porter-Duff source-over for premultiplied pixels.
pub fn over(dst: PremulRgba8, src: PremulRgba8) -> PremulRgba8 {
    if src[3] == 0 {
        return dst;
    }
    let inv = 255u16 - u16::from(src[3]);

    let mut out = [0u8; 4];
    for i in 0..4 {
        out[i] = src[i].saturating_add(mul_div255(u16::from(dst[i]), inv));
    }
    out
}

fn mul_div255(x: u16, y: u16) -> u8 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
