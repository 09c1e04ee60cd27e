use std::io::Cursor;

use super::*;

fn png_bytes(width: u32, height: u32, rgba: Vec<u8>) -> Vec<u8> {
    let img = image::RgbaImage::from_raw(width, height, rgba).unwrap();
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

#[test]
fn decode_image_png_dimensions_and_premul() {
    let bytes = png_bytes(1, 1, vec![100u8, 50u8, 200u8, 128u8]);

    let decoded = decode_image(&bytes).unwrap();
    assert_eq!(decoded.width(), 1);
    assert_eq!(decoded.height(), 1);
    assert_eq!(
        decoded.data(),
        &[
            ((100u16 * 128 + 127) / 255) as u8,
            ((50u16 * 128 + 127) / 255) as u8,
            ((200u16 * 128 + 127) / 255) as u8,
            128u8
        ]
    );
}

#[test]
fn decode_garbage_is_invalid_input() {
    let err = decode_image(b"not an image").unwrap_err();
    assert!(matches!(err, StitchError::InvalidInput(_)));
}

#[test]
fn load_and_probe_from_disk() {
    let dir = std::env::temp_dir().join(format!("imgstitch_decode_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("two_by_three.png");
    std::fs::write(&path, png_bytes(2, 3, vec![7u8; 2 * 3 * 4])).unwrap();

    assert_eq!(probe_size(&path).unwrap(), Size::new(2, 3));
    let img = load_image(&path).unwrap();
    assert_eq!(img.size(), Size::new(2, 3));

    let _ = std::fs::remove_dir_all(dir);
}

#[test]
fn missing_file_error_names_the_path() {
    let err = load_image(Path::new("definitely/not/here.png")).unwrap_err();
    assert!(matches!(err, StitchError::InvalidInput(_)));
    assert!(err.to_string().contains("here.png"));
}
