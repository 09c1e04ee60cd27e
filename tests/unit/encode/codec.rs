use super::*;

fn checker(width: u32, height: u32) -> RasterImage {
    let mut data = Vec::with_capacity((width * height * 4) as usize);
    for y in 0..height {
        for x in 0..width {
            if (x + y) % 2 == 0 {
                data.extend_from_slice(&[220, 30, 40, 255]);
            } else {
                data.extend_from_slice(&[10, 200, 90, 255]);
            }
        }
    }
    RasterImage::new(width, height, data).unwrap()
}

#[test]
fn png_output_has_png_signature() {
    let enc = encode(&checker(4, 3), OutputFormat::Png, &EncodeOpts::default()).unwrap();
    assert_eq!(enc.format, OutputFormat::Png);
    assert_eq!(&enc.bytes[..8], b"\x89PNG\r\n\x1a\n");
}

#[test]
fn jpeg_output_has_soi_marker() {
    let enc = encode(&checker(8, 8), OutputFormat::Jpeg, &EncodeOpts::default()).unwrap();
    assert_eq!(&enc.bytes[..2], &[0xFF, 0xD8]);
    assert_eq!(enc.extension(), "jpg");
}

#[test]
fn bmp_output_has_bm_header() {
    let enc = encode(&checker(3, 2), OutputFormat::Bmp, &EncodeOpts::default()).unwrap();
    assert_eq!(&enc.bytes[..2], b"BM");
}

#[test]
fn quality_zero_is_accepted() {
    let opts = EncodeOpts {
        jpeg_quality: 0,
        ..Default::default()
    };
    encode(&checker(4, 4), OutputFormat::Jpeg, &opts).unwrap();
}

#[test]
fn out_of_range_quality_fails_before_encoding() {
    let opts = EncodeOpts {
        jpeg_quality: 150,
        ..Default::default()
    };
    let err = encode(&checker(4, 4), OutputFormat::Jpeg, &opts).unwrap_err();
    assert!(matches!(err, StitchError::InvalidOption(_)));
}

#[test]
fn jpeg_dimension_limit_surfaces_as_encoding_error() {
    let wide = RasterImage::filled(70_000, 1, [0, 0, 0, 255]).unwrap();
    let err = encode(&wide, OutputFormat::Jpeg, &EncodeOpts::default()).unwrap_err();
    assert!(matches!(err, StitchError::Encoding(_)), "{err:?}");
    assert!(err.to_string().contains("JPEG"));
}

#[test]
fn lower_quality_produces_smaller_jpeg() {
    let img = checker(64, 64);
    let hi = encode(
        &img,
        OutputFormat::Jpeg,
        &EncodeOpts {
            jpeg_quality: 100,
            ..Default::default()
        },
    )
    .unwrap();
    let lo = encode(
        &img,
        OutputFormat::Jpeg,
        &EncodeOpts {
            jpeg_quality: 5,
            ..Default::default()
        },
    )
    .unwrap();
    assert!(lo.bytes.len() < hi.bytes.len());
}

#[test]
fn flatten_premul_over_white_matte() {
    // Premultiplied black @ ~50% alpha => mid grey over white.
    let rgb = flatten_to_rgb8(&[0, 0, 0, 128, 1, 2, 3, 255], Rgba8Premul::white()).unwrap();
    assert_eq!(rgb, vec![127, 127, 127, 1, 2, 3]);
}

#[test]
fn flatten_transparent_pixel_yields_matte() {
    let matte = Rgba8Premul {
        r: 18,
        g: 20,
        b: 28,
        a: 255,
    };
    let rgb = flatten_to_rgb8(&[0, 0, 0, 0], matte).unwrap();
    assert_eq!(rgb, vec![18, 20, 28]);
}

#[test]
fn flatten_rejects_partial_pixels() {
    assert!(flatten_to_rgb8(&[0, 0, 0], Rgba8Premul::white()).is_err());
}
