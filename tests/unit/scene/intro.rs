use super::*;
use crate::{
    foundation::core::{Canvas, Fps, FrameIndex},
    theme::Theme,
};

fn render_at(scene: &Intro, theme: &Theme, frame: u64) -> Node {
    scene.render(&SceneCtx {
        frame: FrameIndex(frame),
        fps: Fps::whole(30).unwrap(),
        canvas: Canvas::new(1280, 720).unwrap(),
        duration: 60,
        theme,
    })
}

#[test]
fn first_frame_shows_nothing_typed_and_a_solid_cursor() {
    let theme = Theme::default();
    let intro = Intro::new(IntroParams::default()).unwrap();
    let tree = render_at(&intro, &theme, 0);
    assert_eq!(tree.find("typed").unwrap().text_content(), "");
    assert_eq!(tree.find("cursor").unwrap().style.opacity, 1.0);
    assert_eq!(tree.find("subtitle").unwrap().style.opacity, 0.0);
}

#[test]
fn typing_reveals_one_char_every_two_frames() {
    let theme = Theme::default();
    let intro = Intro::new(IntroParams::default()).unwrap();
    assert_eq!(
        render_at(&intro, &theme, 11).find("typed").unwrap().text_content(),
        "Daily"
    );
    assert_eq!(
        render_at(&intro, &theme, 59).find("typed").unwrap().text_content(),
        "Daily AI News Agent"
    );
}

#[test]
fn typing_counts_chars_not_bytes() {
    let theme = Theme::default();
    let intro = Intro::new(IntroParams {
        title: "Ünïcödé".to_string(),
        char_frames: 1,
        ..IntroParams::default()
    })
    .unwrap();
    assert_eq!(
        render_at(&intro, &theme, 3).find("typed").unwrap().text_content(),
        "Ünï"
    );
}

#[test]
fn cursor_blinks_with_a_fifteen_frame_period() {
    let theme = Theme::default();
    let intro = Intro::new(IntroParams::default()).unwrap();
    let cursor = |f| render_at(&intro, &theme, f).find("cursor").unwrap().style.opacity;
    assert_eq!(cursor(8), 0.0);
    assert_eq!(cursor(15), 1.0);
    assert!((cursor(4) - 0.5).abs() < 1e-12);
    assert_eq!(cursor(23), cursor(8));
}

#[test]
fn subtitle_rises_between_frames_forty_and_sixty() {
    let theme = Theme::default();
    let intro = Intro::new(IntroParams::default()).unwrap();
    let at = |f| render_at(&intro, &theme, f).find("subtitle").unwrap().style.clone();

    let start = at(40);
    assert_eq!(start.opacity, 0.0);
    assert_eq!(start.transform.translate.y, 20.0);

    let mid = at(50);
    assert!((mid.opacity - 0.5).abs() < 1e-12);
    assert!((mid.transform.translate.y - 10.0).abs() < 1e-12);

    let end = at(75);
    assert_eq!(end.opacity, 1.0);
    assert_eq!(end.transform.translate.y, 0.0);
}

#[test]
fn rejects_degenerate_params() {
    assert!(
        Intro::new(IntroParams {
            char_frames: 0,
            ..IntroParams::default()
        })
        .is_err()
    );
    assert!(
        Intro::new(IntroParams {
            subtitle_start: 60.0,
            subtitle_end: 40.0,
            ..IntroParams::default()
        })
        .is_err()
    );
}
