use super::*;

#[test]
fn new_rejects_zero_dimensions() {
    let err = RasterImage::new(0, 4, vec![]).unwrap_err();
    assert!(matches!(err, StitchError::InvalidInput(_)));
    let err = RasterImage::new(4, 0, vec![]).unwrap_err();
    assert!(matches!(err, StitchError::InvalidInput(_)));
}

#[test]
fn new_rejects_mismatched_buffer_length() {
    let err = RasterImage::new(2, 2, vec![0u8; 15]).unwrap_err();
    assert!(matches!(err, StitchError::InvalidInput(_)));
    RasterImage::new(2, 2, vec![0u8; 16]).unwrap();
}

#[test]
fn pixel_and_row_accessors_are_bounds_checked() {
    let mut data = vec![0u8; 3 * 2 * 4];
    data[(3 + 2) * 4..(3 + 2) * 4 + 4].copy_from_slice(&[9, 8, 7, 255]);
    let img = RasterImage::new(3, 2, data).unwrap();

    assert_eq!(img.pixel(2, 1), Some([9, 8, 7, 255]));
    assert_eq!(img.pixel(3, 0), None);
    assert_eq!(img.pixel(0, 2), None);
    assert_eq!(img.row(1).unwrap().len(), 12);
    assert!(img.row(2).is_none());
}

#[test]
fn straight_round_trip_preserves_premultiplied_pixels() {
    let straight = vec![100u8, 50, 200, 128, 10, 20, 30, 255, 255, 255, 255, 0];
    let img = RasterImage::from_straight_rgba8(3, 1, straight).unwrap();
    assert_eq!(img.pixel(2, 0), Some([0, 0, 0, 0]));
    assert!(!img.is_opaque());

    let back = RasterImage::from_straight_rgba8(3, 1, img.to_straight_rgba8()).unwrap();
    assert_eq!(back, img);
}

#[test]
fn filled_repeats_the_pixel() {
    let img = RasterImage::filled(4, 3, [1, 2, 3, 255]).unwrap();
    assert_eq!(img.data().len(), 48);
    assert!(img.data().chunks_exact(4).all(|px| px == [1, 2, 3, 255]));
    assert!(img.is_opaque());
}
