use std::{fmt, path::Path, str::FromStr};

use crate::foundation::{
    core::Rgba8Premul,
    error::{StitchError, StitchResult},
};

/// JPEG quality used when none is given.
pub const DEFAULT_JPEG_QUALITY: u8 = 90;

/// Output raster formats.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Lossless PNG with alpha.
    #[default]
    Png,
    /// Lossy JPEG; alpha is flattened over the matte.
    Jpeg,
    /// Uncompressed 32-bit BMP.
    Bmp,
}

impl OutputFormat {
    /// Every supported format, in dispatch order.
    pub const ALL: [OutputFormat; 3] = [OutputFormat::Png, OutputFormat::Jpeg, OutputFormat::Bmp];

    /// Conventional file extension, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Jpeg => "jpg",
            OutputFormat::Bmp => "bmp",
        }
    }

    /// Whether the encoding reproduces the canvas exactly.
    pub fn is_lossless(self) -> bool {
        !matches!(self, OutputFormat::Jpeg)
    }

    /// Matching [`image::ImageFormat`], for callers that decode the output again.
    pub fn image_format(self) -> image::ImageFormat {
        match self {
            OutputFormat::Png => image::ImageFormat::Png,
            OutputFormat::Jpeg => image::ImageFormat::Jpeg,
            OutputFormat::Bmp => image::ImageFormat::Bmp,
        }
    }

    /// Resolve a format from a file extension (`png`, `jpg`, `jpeg`, `bmp`; any case).
    pub fn from_extension(ext: &str) -> StitchResult<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "png" => Ok(OutputFormat::Png),
            "jpg" | "jpeg" => Ok(OutputFormat::Jpeg),
            "bmp" => Ok(OutputFormat::Bmp),
            other => Err(StitchError::encoding(format!(
                "unsupported output format '{other}' (expected png, jpg/jpeg or bmp)"
            ))),
        }
    }

    /// Resolve a format from the extension of `path`.
    pub fn from_path(path: &Path) -> StitchResult<Self> {
        let ext = path.extension().and_then(|e| e.to_str()).ok_or_else(|| {
            StitchError::encoding(format!(
                "cannot infer output format from '{}': missing extension",
                path.display()
            ))
        })?;
        Self::from_extension(ext)
    }
}

impl FromStr for OutputFormat {
    type Err = StitchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_extension(s)
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Png => "PNG",
            OutputFormat::Jpeg => "JPEG",
            OutputFormat::Bmp => "BMP",
        };
        f.write_str(name)
    }
}

/// Format-specific encoder options.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EncodeOpts {
    /// JPEG quality on a 0..=100 scale. Ignored by other formats.
    pub jpeg_quality: u8,
    /// Colour translucent pixels are flattened over for formats without alpha.
    pub matte: Rgba8Premul,
}

impl Default for EncodeOpts {
    fn default() -> Self {
        Self {
            jpeg_quality: DEFAULT_JPEG_QUALITY,
            matte: Rgba8Premul::white(),
        }
    }
}

impl EncodeOpts {
    /// Check option ranges.
    pub fn validate(&self) -> StitchResult<()> {
        if self.jpeg_quality > 100 {
            return Err(StitchError::invalid_option(format!(
                "jpeg quality must be within 0..=100 (got {})",
                self.jpeg_quality
            )));
        }
        if self.matte.a != 255 {
            return Err(StitchError::invalid_option("encode matte must be opaque"));
        }
        Ok(())
    }
}

/// Encoded output bytes plus the format that produced them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodedImage {
    /// Format of `bytes`.
    pub format: OutputFormat,
    /// Encoded file contents.
    pub bytes: Vec<u8>,
}

impl EncodedImage {
    /// Conventional file extension for these bytes.
    pub fn extension(&self) -> &'static str {
        self.format.extension()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/format.rs"]
mod tests;
