use crate::foundation::{
    core::{PlacementRect, Size},
    error::{StitchError, StitchResult},
};

/// Axis along which the two images are concatenated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutDirection {
    /// Side by side, left to right.
    #[default]
    Horizontal,
    /// Stacked, top to bottom.
    Vertical,
}

/// Position of each image on the cross axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlignmentMode {
    /// Top (horizontal layout) or left (vertical layout).
    #[default]
    Start,
    /// Centered; odd remainders round toward the start.
    Center,
    /// Bottom (horizontal layout) or right (vertical layout).
    End,
}

/// Canvas size plus the placement of both source images.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct StitchLayout {
    /// Output canvas dimensions.
    pub canvas: Size,
    /// Placement of the first image.
    pub first: PlacementRect,
    /// Placement of the second image.
    pub second: PlacementRect,
}

impl StitchLayout {
    /// Both placements in paint order.
    pub fn placements(&self) -> [PlacementRect; 2] {
        [self.first, self.second]
    }
}

/// Compute canvas size and placements for two images.
///
/// The first image always sits at main-axis offset 0 and the second directly after it, so the
/// two rects never overlap. Cross-axis offsets are computed per image against the shared canvas
/// extent.
pub fn plan_layout(
    first: Size,
    second: Size,
    direction: LayoutDirection,
    alignment: AlignmentMode,
) -> StitchResult<StitchLayout> {
    for (name, size) in [("first", first), ("second", second)] {
        if size.is_empty() {
            return Err(StitchError::invalid_input(format!(
                "{name} image must be non-zero in both dimensions (got {}x{})",
                size.width, size.height
            )));
        }
    }

    let layout = match direction {
        LayoutDirection::Horizontal => {
            let width = first
                .width
                .checked_add(second.width)
                .ok_or_else(|| overflow("width", first.width, second.width))?;
            let height = first.height.max(second.height);
            StitchLayout {
                canvas: Size::new(width, height),
                first: PlacementRect::new(
                    0,
                    align_offset(height, first.height, alignment),
                    first.width,
                    first.height,
                ),
                second: PlacementRect::new(
                    first.width,
                    align_offset(height, second.height, alignment),
                    second.width,
                    second.height,
                ),
            }
        }
        LayoutDirection::Vertical => {
            let width = first.width.max(second.width);
            let height = first
                .height
                .checked_add(second.height)
                .ok_or_else(|| overflow("height", first.height, second.height))?;
            StitchLayout {
                canvas: Size::new(width, height),
                first: PlacementRect::new(
                    align_offset(width, first.width, alignment),
                    0,
                    first.width,
                    first.height,
                ),
                second: PlacementRect::new(
                    align_offset(width, second.width, alignment),
                    first.height,
                    second.width,
                    second.height,
                ),
            }
        }
    };

    tracing::debug!(
        ?direction,
        ?alignment,
        canvas_w = layout.canvas.width,
        canvas_h = layout.canvas.height,
        "planned stitch layout"
    );
    Ok(layout)
}

fn align_offset(container: u32, content: u32, align: AlignmentMode) -> u32 {
    let rem = container.saturating_sub(content);
    match align {
        AlignmentMode::Start => 0,
        AlignmentMode::Center => rem / 2,
        AlignmentMode::End => rem,
    }
}

fn overflow(axis: &str, a: u32, b: u32) -> StitchError {
    StitchError::invalid_input(format!("canvas {axis} overflows u32 ({a} + {b})"))
}

#[cfg(test)]
#[path = "../../tests/unit/layout/planner.rs"]
mod tests;
