use super::*;

#[test]
fn size_rgba8_len_and_emptiness() {
    assert_eq!(Size::new(3, 2).rgba8_len().unwrap(), 24);
    assert!(Size::new(0, 2).is_empty());
    assert!(Size::new(2, 0).is_empty());
    assert!(!Size::new(1, 1).is_empty());
}

#[test]
fn rect_edges_do_not_overflow() {
    let r = PlacementRect::new(u32::MAX, 0, u32::MAX, 1);
    assert_eq!(r.right(), 2 * u64::from(u32::MAX));
    assert!(!r.fits_within(Size::new(u32::MAX, 1)));
}

#[test]
fn rect_contains_is_half_open() {
    let r = PlacementRect::new(10, 5, 4, 2);
    assert!(r.contains(10, 5));
    assert!(r.contains(13, 6));
    assert!(!r.contains(14, 6));
    assert!(!r.contains(13, 7));
    assert!(!r.contains(9, 5));
}

#[test]
fn touching_rects_do_not_overlap() {
    let a = PlacementRect::new(0, 0, 100, 50);
    let b = PlacementRect::new(100, 0, 80, 80);
    assert!(!a.overlaps(b));
    assert!(!b.overlaps(a));

    let c = PlacementRect::new(99, 49, 2, 2);
    assert!(a.overlaps(c));
}

#[test]
fn premul_conversion_matches_rounding() {
    let p = Rgba8Premul::from_straight_rgba(100, 50, 200, 128);
    assert_eq!(
        p.to_array(),
        [
            ((100u16 * 128 + 127) / 255) as u8,
            ((50u16 * 128 + 127) / 255) as u8,
            ((200u16 * 128 + 127) / 255) as u8,
            128
        ]
    );
    assert_eq!(Rgba8Premul::default(), Rgba8Premul::white());
}

#[test]
fn unpremul_then_premul_is_identity_for_valid_pixels() {
    for a in 0..=255u8 {
        for c in 0..=a {
            let straight = unpremul_channel(c, a);
            assert_eq!(premul_channel(straight, a), c, "c={c} a={a}");
        }
    }
}
