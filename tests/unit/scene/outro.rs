use super::*;
use crate::{
    foundation::core::{Canvas, Fps, FrameIndex, Vec2},
    theme::Theme,
};

fn render_at(scene: &Outro, theme: &Theme, frame: u64) -> Node {
    scene.render(&SceneCtx {
        frame: FrameIndex(frame),
        fps: Fps::whole(30).unwrap(),
        canvas: Canvas::new(1280, 720).unwrap(),
        duration: 90,
        theme,
    })
}

#[test]
fn pulse_peaks_mid_period() {
    let outro = Outro::new(OutroParams::default()).unwrap();
    assert_eq!(outro.pulse(0), (1.0, 0.0));
    let (scale, glow) = outro.pulse(20);
    assert!((scale - 1.05).abs() < 1e-12);
    assert!((glow - 20.0).abs() < 1e-12);
    assert_eq!(outro.pulse(40), outro.pulse(0));
    assert_eq!(outro.pulse(89), outro.pulse(9));
}

#[test]
fn button_scale_and_glow_stay_in_range() {
    let theme = Theme::default();
    let outro = Outro::new(OutroParams::default()).unwrap();
    for f in 0..90 {
        let tree = render_at(&outro, &theme, f);
        let button = tree.find("button").unwrap();
        let s = button.style.transform.scale.x;
        assert!((1.0..=1.05 + 1e-12).contains(&s), "frame {f}: {s}");
        assert_eq!(button.style.transform.origin, Vec2::new(0.5, 0.5));
        let alpha = button.style.shadow.unwrap().color.a;
        assert!((0x20..=0x40).contains(&alpha), "frame {f}: {alpha}");
    }
}

#[test]
fn uses_surface_backdrop_and_brand_gradient() {
    let theme = Theme::default();
    let outro = Outro::new(OutroParams::default()).unwrap();
    let tree = render_at(&outro, &theme, 0);
    assert_eq!(tree.style.background, Some(Paint::solid(theme.colors.surface)));
    assert_eq!(tree.find("headline").unwrap().text_content(), "Start Reading Today");
    let button = tree.find("button").unwrap();
    assert_eq!(button.text_content(), "SUBSCRIBE");
    assert_eq!(
        button.style.background,
        Some(Paint::linear(135.0, theme.colors.primary, theme.colors.secondary))
    );
}

#[test]
fn short_pulse_period_is_rejected() {
    assert!(
        Outro::new(OutroParams {
            pulse_period: 1,
            ..OutroParams::default()
        })
        .is_err()
    );
}

#[test]
fn glow_level_reads_as_hex_alpha() {
    assert_eq!(glow_alpha(0.0), 0x20);
    assert_eq!(glow_alpha(5.4), 0x25);
    assert_eq!(glow_alpha(20.0), 0x40);

    let theme = Theme::default();
    let outro = Outro::new(OutroParams::default()).unwrap();
    let shadow = |f| render_at(&outro, &theme, f).find("button").unwrap().style.shadow.unwrap();
    assert_eq!(shadow(0).color, theme.colors.primary.with_alpha(0x20));
    assert_eq!(shadow(20).color, theme.colors.primary.with_alpha(0x40));
    assert_eq!(shadow(40).color.a, 0x20);
}
