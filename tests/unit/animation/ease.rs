use super::*;

const ALL: [Ease; 11] = [
    Ease::Linear,
    Ease::InQuad,
    Ease::OutQuad,
    Ease::InOutQuad,
    Ease::InCubic,
    Ease::OutCubic,
    Ease::InOutCubic,
    Ease::InSine,
    Ease::OutSine,
    Ease::InOutSine,
    Ease::Bezier {
        x1: 0.42,
        y1: 0.0,
        x2: 0.58,
        y2: 1.0,
    },
];

#[test]
fn endpoints_are_stable() {
    for ease in ALL {
        assert!(ease.apply(0.0).abs() < 1e-9, "{ease:?}");
        assert!((ease.apply(1.0) - 1.0).abs() < 1e-9, "{ease:?}");
    }
}

#[test]
fn monotonic_spot_check() {
    for ease in ALL {
        let a = ease.apply(0.25);
        let b = ease.apply(0.5);
        let c = ease.apply(0.75);
        assert!(a < b, "{ease:?}");
        assert!(b < c, "{ease:?}");
    }
}

#[test]
fn input_is_clamped() {
    assert_eq!(Ease::OutCubic.apply(-3.0), 0.0);
    assert_eq!(Ease::InQuad.apply(7.0), 1.0);
}

#[test]
fn symmetric_bezier_hits_midpoint() {
    let ease = Ease::Bezier {
        x1: 0.42,
        y1: 0.0,
        x2: 0.58,
        y2: 1.0,
    };
    assert!((ease.apply(0.5) - 0.5).abs() < 1e-4);
    let linear = Ease::Bezier {
        x1: 0.25,
        y1: 0.25,
        x2: 0.75,
        y2: 0.75,
    };
    assert!((linear.apply(0.3) - 0.3).abs() < 1e-4);
}

#[test]
fn bezier_validation_rejects_out_of_range_x() {
    let bad = Ease::Bezier {
        x1: 1.5,
        y1: 0.0,
        x2: 0.5,
        y2: 1.0,
    };
    assert!(bad.validate().is_err());
    assert!(Ease::InOutSine.validate().is_ok());
}

#[test]
fn serde_uses_snake_case_names() {
    let json = serde_json::to_string(&Ease::InOutCubic).unwrap();
    assert_eq!(json, "\"in_out_cubic\"");
    let de: Ease = serde_json::from_str("\"out_sine\"").unwrap();
    assert_eq!(de, Ease::OutSine);
}
