use std::{fs::File, io::BufReader, io::Read, path::Path};

use anyhow::Context as _;

use crate::encode::format::{DEFAULT_JPEG_QUALITY, EncodeOpts, OutputFormat};
use crate::foundation::{
    core::Rgba8Premul,
    error::{StitchError, StitchResult},
};
use crate::layout::planner::{AlignmentMode, LayoutDirection};

/// Everything a stitch request needs besides the two images.
///
/// Every field has a default, so a JSON options file only needs the keys it changes:
///
/// ```json
/// { "direction": "vertical", "alignment": "center", "format": "jpeg", "jpeg_quality": 80 }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StitchOpts {
    /// Concatenation axis.
    pub direction: LayoutDirection,
    /// Cross-axis alignment of each image.
    pub alignment: AlignmentMode,
    /// Output format.
    pub format: OutputFormat,
    /// JPEG quality, 0..=100.
    pub jpeg_quality: u8,
    /// Canvas background as straight-alpha RGBA8.
    pub background: [u8; 4],
}

impl Default for StitchOpts {
    fn default() -> Self {
        Self {
            direction: LayoutDirection::default(),
            alignment: AlignmentMode::default(),
            format: OutputFormat::default(),
            jpeg_quality: DEFAULT_JPEG_QUALITY,
            background: [255, 255, 255, 255],
        }
    }
}

impl StitchOpts {
    /// Parse options from JSON text.
    pub fn from_json_str(s: &str) -> StitchResult<Self> {
        serde_json::from_str(s).map_err(|e| StitchError::serde(format!("parse stitch options: {e}")))
    }

    /// Parse options from a JSON reader.
    pub fn from_reader<R: Read>(r: R) -> StitchResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| StitchError::serde(format!("parse stitch options: {e}")))
    }

    /// Load options from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> StitchResult<Self> {
        let path = path.as_ref();
        let f = File::open(path)
            .with_context(|| format!("open stitch options '{}'", path.display()))?;
        Self::from_reader(BufReader::new(f))
    }

    /// Check every option; called before any pixels are touched.
    pub fn validate(&self) -> StitchResult<()> {
        self.encode_opts().validate()
    }

    /// Background converted to premultiplied RGBA8.
    pub fn background_premul(&self) -> Rgba8Premul {
        let [r, g, b, a] = self.background;
        Rgba8Premul::from_straight_rgba(r, g, b, a)
    }

    /// Encoder options derived from these stitch options.
    pub fn encode_opts(&self) -> EncodeOpts {
        EncodeOpts {
            jpeg_quality: self.jpeg_quality,
            ..EncodeOpts::default()
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/stitch/opts.rs"]
mod tests;
