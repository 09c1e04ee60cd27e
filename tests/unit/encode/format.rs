use super::*;

#[test]
fn extensions_are_conventional() {
    assert_eq!(OutputFormat::Png.extension(), "png");
    assert_eq!(OutputFormat::Jpeg.extension(), "jpg");
    assert_eq!(OutputFormat::Bmp.extension(), "bmp");
}

#[test]
fn from_extension_accepts_aliases_and_case() {
    assert_eq!(OutputFormat::from_extension("JPEG").unwrap(), OutputFormat::Jpeg);
    assert_eq!(OutputFormat::from_extension("jpg").unwrap(), OutputFormat::Jpeg);
    assert_eq!("Bmp".parse::<OutputFormat>().unwrap(), OutputFormat::Bmp);
}

#[test]
fn unknown_format_is_an_encoding_error() {
    let err = OutputFormat::from_extension("gif").unwrap_err();
    assert!(matches!(err, StitchError::Encoding(_)));
    assert!(err.to_string().contains("gif"));
}

#[test]
fn from_path_uses_extension() {
    assert_eq!(
        OutputFormat::from_path(Path::new("out/stitched.PNG")).unwrap(),
        OutputFormat::Png
    );
    assert!(OutputFormat::from_path(Path::new("out/stitched")).is_err());
}

#[test]
fn defaults_match_documented_values() {
    assert_eq!(OutputFormat::default(), OutputFormat::Png);
    let opts = EncodeOpts::default();
    assert_eq!(opts.jpeg_quality, 90);
    assert_eq!(opts.matte, Rgba8Premul::white());
    opts.validate().unwrap();
}

#[test]
fn quality_bounds_are_inclusive() {
    for q in [0u8, 1, 100] {
        EncodeOpts {
            jpeg_quality: q,
            ..Default::default()
        }
        .validate()
        .unwrap();
    }
    let err = EncodeOpts {
        jpeg_quality: 101,
        ..Default::default()
    }
    .validate()
    .unwrap_err();
    assert!(matches!(err, StitchError::InvalidOption(_)));
}

#[test]
fn translucent_matte_is_rejected() {
    let err = EncodeOpts {
        matte: Rgba8Premul::transparent(),
        ..Default::default()
    }
    .validate()
    .unwrap_err();
    assert!(matches!(err, StitchError::InvalidOption(_)));
}

#[test]
fn lossless_flags() {
    assert!(OutputFormat::Png.is_lossless());
    assert!(OutputFormat::Bmp.is_lossless());
    assert!(!OutputFormat::Jpeg.is_lossless());
}
