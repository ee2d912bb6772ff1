use super::*;
use crate::{foundation::core::FrameIndex, root::promo_config};

const SMALL: &str = r##"{
    "id": "Teaser",
    "fps": { "num": 24, "den": 1 },
    "width": 640,
    "height": 360,
    "theme": { "colors": { "primary": "#FF8800" } },
    "timeline": [
        { "scene": { "name": "intro", "duration_frames": 48, "params": { "title": "Hi" } } },
        { "transition": {
            "presentation": { "kind": "wipe", "direction": "from-left" },
            "timing": { "kind": "linear", "duration_frames": 8, "ease": "in_out_cubic" }
        } },
        { "scene": { "name": "outro", "duration_frames": 24 } }
    ]
}"##;

#[test]
fn parses_and_builds_a_custom_composition() {
    let cfg = CompositionConfig::from_json_str(SMALL).unwrap();
    assert_eq!(cfg.timeline.len(), 3);
    assert_eq!(cfg.duration_frames, None);

    let comp = cfg.build(&SceneRegistry::with_builtin()).unwrap();
    assert_eq!(comp.id(), "Teaser");
    assert_eq!(comp.duration(), 64);
    assert_eq!(comp.theme().colors.primary.to_hex(), "#FF8800");

    let frame = comp.render_frame(FrameIndex(4));
    assert_eq!(frame.layers[0].tree.find("typed").unwrap().text_content(), "Hi");
    let overlap = comp.render_frame(FrameIndex(44));
    assert_eq!(overlap.layers.len(), 2);
    assert!(overlap.layers[1].clip.is_some());
}

#[test]
fn promo_config_round_trips_through_json() {
    let cfg = promo_config();
    let json = cfg.to_json_pretty().unwrap();
    assert!(json.contains("\"from-right\""));
    assert_eq!(CompositionConfig::from_json_str(&json).unwrap(), cfg);
}

#[test]
fn declared_duration_mismatch_fails_to_build() {
    let mut cfg = promo_config();
    cfg.duration_frames = Some(330);
    let err = cfg.build(&SceneRegistry::with_builtin()).unwrap_err();
    assert!(err.to_string().contains("320"), "{err}");
}

#[test]
fn unknown_fields_and_scenes_are_rejected() {
    let err = CompositionConfig::from_json_str(r#"{ "id": "x", "fps": { "num": 30, "den": 1 }, "width": 1, "height": 1, "timeline": [], "extra": 1 }"#)
        .unwrap_err();
    assert!(matches!(err, ReelError::Serde(_)), "{err:?}");

    let mut cfg = promo_config();
    cfg.timeline[0] = TimelineItem::scene("credits", 60);
    assert!(cfg.build(&SceneRegistry::with_builtin()).is_err());
}

#[test]
fn zero_canvas_and_fps_are_rejected() {
    let mut cfg = promo_config();
    cfg.width = 0;
    assert!(cfg.build(&SceneRegistry::with_builtin()).is_err());

    let mut cfg = promo_config();
    cfg.fps = Fps { num: 0, den: 1 };
    assert!(cfg.build(&SceneRegistry::with_builtin()).is_err());
}

#[test]
fn missing_file_reports_the_path() {
    let err = CompositionConfig::from_path(Path::new("/definitely/not/here.json")).unwrap_err();
    assert!(format!("{err:#}").contains("/definitely/not/here.json"));
}

#[test]
fn huge_scene_lengths_are_a_validation_error() {
    let json = r#"{
        "id": "Huge",
        "fps": { "num": 30, "den": 1 },
        "width": 1280,
        "height": 720,
        "timeline": [
            { "scene": { "name": "intro", "duration_frames": 18446744073709551615 } },
            { "scene": { "name": "outro", "duration_frames": 18446744073709551615 } }
        ]
    }"#;
    let cfg = CompositionConfig::from_json_str(json).unwrap();
    let err = cfg.build(&SceneRegistry::with_builtin()).unwrap_err();
    assert!(matches!(err, ReelError::Validation(_)), "{err}");
}
