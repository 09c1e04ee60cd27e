use image::{
    ExtendedColorType, ImageEncoder,
    codecs::{bmp::BmpEncoder, jpeg::JpegEncoder, png::PngEncoder},
};

use crate::encode::format::{EncodeOpts, EncodedImage, OutputFormat};
use crate::foundation::{
    core::Rgba8Premul,
    error::{StitchError, StitchResult},
};
use crate::render::raster::RasterImage;

/// Encode `image` as `format`.
///
/// Options are validated before the codec runs, so an out-of-range JPEG quality fails with
/// [`StitchError::InvalidOption`] even when another format is requested.
pub fn encode(
    image: &RasterImage,
    format: OutputFormat,
    opts: &EncodeOpts,
) -> StitchResult<EncodedImage> {
    opts.validate()?;

    let bytes = match format {
        OutputFormat::Png => encode_png(image)?,
        OutputFormat::Jpeg => encode_jpeg(image, opts.jpeg_quality, opts.matte)?,
        OutputFormat::Bmp => encode_bmp(image)?,
    };

    tracing::debug!(%format, bytes = bytes.len(), "encoded canvas");
    Ok(EncodedImage { format, bytes })
}

fn encode_png(image: &RasterImage) -> StitchResult<Vec<u8>> {
    let mut buf = Vec::new();
    PngEncoder::new(&mut buf)
        .write_image(
            &image.to_straight_rgba8(),
            image.width(),
            image.height(),
            ExtendedColorType::Rgba8,
        )
        .map_err(|e| codec_error(OutputFormat::Png, e))?;
    Ok(buf)
}

fn encode_jpeg(image: &RasterImage, quality: u8, matte: Rgba8Premul) -> StitchResult<Vec<u8>> {
    let rgb = flatten_to_rgb8(image.data(), matte)?;
    let mut buf = Vec::new();
    // The codec's scale starts at 1.
    JpegEncoder::new_with_quality(&mut buf, quality.max(1))
        .write_image(&rgb, image.width(), image.height(), ExtendedColorType::Rgb8)
        .map_err(|e| codec_error(OutputFormat::Jpeg, e))?;
    Ok(buf)
}

fn encode_bmp(image: &RasterImage) -> StitchResult<Vec<u8>> {
    let mut buf = Vec::new();
    BmpEncoder::new(&mut buf)
        .write_image(
            &image.to_straight_rgba8(),
            image.width(),
            image.height(),
            ExtendedColorType::Rgba8,
        )
        .map_err(|e| codec_error(OutputFormat::Bmp, e))?;
    Ok(buf)
}

fn codec_error(format: OutputFormat, e: image::ImageError) -> StitchError {
    StitchError::encoding(format!("{format} encoder rejected the canvas: {e}"))
}

/// Flatten premultiplied RGBA8 over an opaque matte into packed RGB8.
pub(crate) fn flatten_to_rgb8(src: &[u8], matte: Rgba8Premul) -> StitchResult<Vec<u8>> {
    if !src.len().is_multiple_of(4) {
        return Err(StitchError::encoding(
            "flatten_to_rgb8 expects an rgba8 buffer",
        ));
    }

    let bg = [u16::from(matte.r), u16::from(matte.g), u16::from(matte.b)];
    let mut out = Vec::with_capacity(src.len() / 4 * 3);
    for s in src.chunks_exact(4) {
        let a = u16::from(s[3]);
        if a == 255 {
            out.extend_from_slice(&s[..3]);
            continue;
        }
        let inv = 255u16 - a;
        for i in 0..3 {
            let v = u16::from(s[i]) + mul_div255(bg[i], inv);
            out.push(v.min(255) as u8);
        }
    }
    Ok(out)
}

fn mul_div255(x: u16, y: u16) -> u16 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u16
}

#[cfg(test)]
#[path = "../../tests/unit/encode/codec.rs"]
mod tests;
