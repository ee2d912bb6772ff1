use super::*;
use crate::{
    foundation::core::{Canvas, Fps, FrameIndex},
    theme::Theme,
};

fn ctx(theme: &Theme, frame: u64) -> SceneCtx<'_> {
    SceneCtx {
        frame: FrameIndex(frame),
        fps: Fps::whole(30).unwrap(),
        canvas: Canvas::new(1280, 720).unwrap(),
        duration: 90,
        theme,
    }
}

#[test]
fn renders_three_cards_in_order() {
    let theme = Theme::default();
    let scene = Features::new(FeaturesParams::default()).unwrap();
    let tree = scene.render(&ctx(&theme, 45));
    assert_eq!(tree.children.len(), 3);
    assert_eq!(tree.find("feature-0-label").unwrap().text_content(), "Deep Research");
    assert_eq!(tree.find("feature-1-label").unwrap().text_content(), "Smart Summary");
    assert_eq!(tree.find("feature-2-label").unwrap().text_content(), "Fully Automated");
    assert_eq!(tree.find("feature-2-icon").unwrap().text_content(), "🤖");
}

#[test]
fn delayed_cards_wait_offscreen() {
    let theme = Theme::default();
    let scene = Features::new(FeaturesParams::default()).unwrap();
    let tree = scene.render(&ctx(&theme, 10));

    let first = tree.find("feature-0").unwrap();
    assert!(first.style.opacity > 0.5);

    for (key, _) in [("feature-1", 10), ("feature-2", 20)] {
        let card = tree.find(key).unwrap();
        assert_eq!(card.style.opacity, 0.0, "{key}");
        assert_eq!(card.style.transform.translate.x, -100.0, "{key}");
    }
}

#[test]
fn cards_settle_at_rest() {
    let theme = Theme::default();
    let scene = Features::new(FeaturesParams::default()).unwrap();
    let c = ctx(&theme, 89);
    for i in 0..3 {
        assert!((scene.progress(i, &c) - 1.0).abs() < 1e-3);
    }
    let tree = scene.render(&c);
    let x = tree.find("feature-2").unwrap().style.transform.translate.x;
    assert!(x.abs() < 0.1, "{x}");
}

#[test]
fn opacity_stays_in_unit_range() {
    let theme = Theme::default();
    let scene = Features::new(FeaturesParams::default()).unwrap();
    for f in 0..90 {
        let tree = scene.render(&ctx(&theme, f));
        for i in 0..3 {
            let o = tree.find(&format!("feature-{i}")).unwrap().style.opacity;
            assert!((0.0..=1.0).contains(&o), "frame {f} card {i}: {o}");
        }
    }
}

#[test]
fn label_gradient_follows_role_colour() {
    let theme = Theme::default();
    let scene = Features::new(FeaturesParams::default()).unwrap();
    let tree = scene.render(&ctx(&theme, 60));
    let fill = tree.find("feature-1-label").unwrap().style.text_fill.clone();
    assert_eq!(
        fill,
        Some(Paint::linear(
            90.0,
            theme.colors.secondary,
            theme.colors.secondary.with_alpha(0x80)
        ))
    );
}

#[test]
fn empty_item_list_is_rejected() {
    let err = Features::factory(&serde_json::json!({ "items": [] })).unwrap_err();
    assert!(err.to_string().contains("at least one"));
}
