//! imgstitch combines two raster images into one, side by side or stacked.
//!
//! # Pipeline overview
//!
//! 1. **Plan**: two image sizes + [`LayoutDirection`] + [`AlignmentMode`] -> [`StitchLayout`]
//!    (canvas size and one placement rect per image)
//! 2. **Composite**: paint both images onto a background-filled canvas, pixel for pixel
//! 3. **Encode**: serialize the canvas as PNG, JPEG or BMP ([`OutputFormat`])
//!
//! [`stitch`] runs all three steps. Decoding source files and writing the result are boundary
//! concerns handled by [`load_image`] / [`decode_image`] and [`write_encoded`].
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **No scaling**: source pixels are never resampled.
//! - **Stateless**: every call takes its images and options explicitly.
//! - **Premultiplied RGBA8** for every in-memory raster.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod encode;
mod foundation;
mod layout;
mod render;
mod stitch;

pub use assets::decode::{decode_image, load_image, probe_size};
pub use encode::codec::encode;
pub use encode::format::{DEFAULT_JPEG_QUALITY, EncodeOpts, EncodedImage, OutputFormat};
pub use encode::write::{default_output_name, ensure_parent_dir, write_encoded};
pub use foundation::core::{PlacementRect, Rgba8Premul, Size};
pub use foundation::error::{StitchError, StitchResult};
pub use layout::planner::{AlignmentMode, LayoutDirection, StitchLayout, plan_layout};
pub use render::composite::{Placement, PremulRgba8, composite, over};
pub use render::raster::RasterImage;
pub use stitch::opts::StitchOpts;
pub use stitch::pipeline::{Stitched, stitch, stitch_canvas};
