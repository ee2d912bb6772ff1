use super::*;

#[test]
fn frame_range_contains_boundaries() {
    let r = FrameRange::new(FrameIndex(2), FrameIndex(5)).unwrap();
    assert!(!r.contains(FrameIndex(1)));
    assert!(r.contains(FrameIndex(2)));
    assert!(r.contains(FrameIndex(4)));
    assert!(!r.contains(FrameIndex(5)));
    assert_eq!(r.clamp(FrameIndex(99)), FrameIndex(4));
}

#[test]
fn frame_range_rejects_inverted_bounds() {
    assert!(FrameRange::new(FrameIndex(5), FrameIndex(2)).is_err());
    assert_eq!(FrameRange::with_len(FrameIndex(3), 4).end, FrameIndex(7));
}

#[test]
fn fps_frames_secs_roundtrip_floor() {
    let fps = Fps::new(30000, 1001).unwrap();
    let secs = fps.frames_to_secs(123);
    assert_eq!(fps.secs_to_frames_floor(secs), 123);
    assert!(Fps::new(30, 0).is_err());
    assert!(Fps::whole(0).is_err());
}

#[test]
fn canvas_requires_non_zero_extents() {
    assert!(Canvas::new(0, 720).is_err());
    let c = Canvas::new(1280, 720).unwrap();
    assert_eq!(c.size(), Vec2::new(1280.0, 720.0));
}

#[test]
fn colour_hex_parsing_and_formatting() {
    let c = Rgba8::from_hex("#38BDF8").unwrap();
    assert_eq!(c, Rgba8::rgb(0x38, 0xBD, 0xF8));
    assert_eq!(c.to_hex(), "#38BDF8");

    let translucent = Rgba8::from_hex("22c55e20").unwrap();
    assert_eq!(translucent.a, 0x20);
    assert_eq!(translucent.to_hex(), "#22C55E20");

    assert!(Rgba8::from_hex("#12345").is_err());
    assert!(Rgba8::from_hex("#GG0000").is_err());
}

#[test]
fn colour_serializes_as_hex_string() {
    let json = serde_json::to_string(&Rgba8::rgb(15, 23, 42)).unwrap();
    assert_eq!(json, "\"#0F172A\"");
    let back: Rgba8 = serde_json::from_str(&json).unwrap();
    assert_eq!(back, Rgba8::rgb(15, 23, 42));
    assert!(serde_json::from_str::<Rgba8>("\"nope\"").is_err());
}

#[test]
fn with_opacity_clamps() {
    assert_eq!(Rgba8::WHITE.with_opacity(2.0).a, 255);
    assert_eq!(Rgba8::WHITE.with_opacity(-1.0).a, 0);
    assert_eq!(Rgba8::WHITE.with_opacity(0.5).a, 128);
}

#[test]
fn transform_to_affine_identity_and_translation() {
    let size = Vec2::new(200.0, 100.0);
    let t = Transform2D::default();
    assert!(t.is_identity());
    assert_eq!(t.to_affine(size), Affine::IDENTITY);

    let t = Transform2D::translate(10.0, -2.5);
    assert_eq!(t.to_affine(size), Affine::translate(Vec2::new(10.0, -2.5)));
}

#[test]
fn uniform_scale_pivots_on_box_centre() {
    let size = Vec2::new(200.0, 100.0);
    let t = Transform2D::uniform_scale(0.8);
    assert_eq!(t.origin, Vec2::new(0.5, 0.5));
    assert!(!t.is_identity());

    let a = t.to_affine(size);
    let centre = a * kurbo::Point::new(100.0, 50.0);
    assert!((centre.x - 100.0).abs() < 1e-9 && (centre.y - 50.0).abs() < 1e-9);
    let corner = a * kurbo::Point::new(0.0, 0.0);
    assert!((corner.x - 20.0).abs() < 1e-9 && (corner.y - 10.0).abs() < 1e-9);

    let top_left = t.with_origin(0.0, 0.0).to_affine(size) * kurbo::Point::new(0.0, 0.0);
    assert!(top_left.x.abs() < 1e-9 && top_left.y.abs() < 1e-9);
}
