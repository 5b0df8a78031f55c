use super::*;

#[test]
fn rgb8_hex_is_lowercase_and_padded() {
    assert_eq!(Rgb8::new(0xEF, 0x44, 0x04).to_hex(), "#ef4404");
    assert_eq!(Rgb8::black().to_string(), "#000000");
}

#[test]
fn view_box_rejects_degenerate_extents() {
    assert!(ViewBox::new(0.0, 10.0).is_err());
    assert!(ViewBox::new(10.0, -1.0).is_err());
    assert!(ViewBox::new(f64::NAN, 1.0).is_err());
    assert!(ViewBox::new(974.0, 872.0).is_ok());
}

#[test]
fn fit_preserves_aspect_and_centers() {
    let vb = ViewBox::new(100.0, 50.0).unwrap();
    let t = vb.fit(400.0, 400.0);

    // Width-limited: scale 4, vertical letterbox of (400 - 200) / 2.
    let p0 = t * Point::new(0.0, 0.0);
    let p1 = t * Point::new(100.0, 50.0);
    assert!((p0.x - 0.0).abs() < 1e-9);
    assert!((p0.y - 100.0).abs() < 1e-9);
    assert!((p1.x - 400.0).abs() < 1e-9);
    assert!((p1.y - 300.0).abs() < 1e-9);
}
