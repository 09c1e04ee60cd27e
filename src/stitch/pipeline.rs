use crate::encode::{codec::encode, format::EncodedImage};
use crate::foundation::{core::Rgba8Premul, error::StitchResult};
use crate::layout::planner::{AlignmentMode, LayoutDirection, StitchLayout, plan_layout};
use crate::render::{
    composite::{Placement, composite},
    raster::RasterImage,
};
use crate::stitch::opts::StitchOpts;

/// Result of a full stitch: geometry, composited pixels and encoded bytes.
#[derive(Clone, Debug)]
pub struct Stitched {
    /// Canvas size and placements that were used.
    pub layout: StitchLayout,
    /// Composited canvas (premultiplied RGBA8).
    pub canvas: RasterImage,
    /// Canvas encoded as the requested format.
    pub encoded: EncodedImage,
}

/// Plan, composite and encode two images.
///
/// Steps run in a fixed order and the first failure aborts the request:
///
/// 1. options are validated ([`StitchError::InvalidOption`](crate::StitchError::InvalidOption));
/// 2. the layout is planned ([`StitchError::InvalidInput`](crate::StitchError::InvalidInput));
/// 3. the canvas is composited;
/// 4. the canvas is encoded ([`StitchError::Encoding`](crate::StitchError::Encoding)).
///
/// The call is synchronous and holds no state between invocations.
#[tracing::instrument(
    skip(first, second, opts),
    fields(
        first_w = first.width(),
        first_h = first.height(),
        second_w = second.width(),
        second_h = second.height(),
        format = %opts.format,
    )
)]
pub fn stitch(
    first: &RasterImage,
    second: &RasterImage,
    opts: &StitchOpts,
) -> StitchResult<Stitched> {
    opts.validate()?;

    let (layout, canvas) = stitch_canvas(
        first,
        second,
        opts.direction,
        opts.alignment,
        opts.background_premul(),
    )?;
    let encoded = encode(&canvas, opts.format, &opts.encode_opts())?;

    Ok(Stitched {
        layout,
        canvas,
        encoded,
    })
}

/// Plan and composite without encoding.
pub fn stitch_canvas(
    first: &RasterImage,
    second: &RasterImage,
    direction: LayoutDirection,
    alignment: AlignmentMode,
    background: Rgba8Premul,
) -> StitchResult<(StitchLayout, RasterImage)> {
    let layout = plan_layout(first.size(), second.size(), direction, alignment)?;
    let canvas = composite(
        layout.canvas,
        background,
        &[
            Placement::new(first, layout.first),
            Placement::new(second, layout.second),
        ],
    )?;
    Ok((layout, canvas))
}

#[cfg(test)]
#[path = "../../tests/unit/stitch/pipeline.rs"]
mod tests;
