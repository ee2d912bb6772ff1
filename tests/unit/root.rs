use super::*;

#[test]
fn default_root_registers_the_promo() {
    let root = Root::default();
    assert_eq!(root.ids().collect::<Vec<_>>(), [PROMO_ID]);
    let comp = root.build(PROMO_ID).unwrap();
    assert_eq!(comp.duration(), 320);
    assert_eq!(comp.fps().as_f64(), 30.0);
}

#[test]
fn promo_scene_order_and_transitions() {
    let comp = promo().unwrap();
    let names: Vec<_> = comp
        .timeline()
        .scenes()
        .iter()
        .map(|e| e.scene.name().to_string())
        .collect();
    assert_eq!(names, ["intro", "problem", "solution", "features", "outro"]);
    assert_eq!(comp.timeline().transition_windows().len(), 4);
}

#[test]
fn register_validates_and_rejects_duplicates() {
    let mut root = Root::default();
    assert!(root.register(promo_config()).is_err());

    let mut short = promo_config();
    short.id = "Short".to_string();
    short.duration_frames = None;
    short.timeline.truncate(3);
    root.register(short).unwrap();
    assert_eq!(root.build("Short").unwrap().duration(), 110);

    let mut broken = promo_config();
    broken.id = "Broken".to_string();
    broken.duration_frames = Some(1);
    assert!(root.register(broken).is_err());
    assert!(root.get("Broken").is_none());
}

#[test]
fn unknown_id_lists_known_ones() {
    let err = Root::default().build("Nope").unwrap_err();
    assert!(err.to_string().contains(PROMO_ID), "{err}");
}

#[test]
fn promo_is_reachable_by_its_alias() {
    let root = Root::default();
    assert_eq!(root.get(PROMO_ALIAS), root.get(PROMO_ID));
    assert_eq!(root.build(PROMO_ALIAS).unwrap().id(), PROMO_ID);
    assert_eq!(root.ids().collect::<Vec<_>>(), [PROMO_ID]);

    let mut root = Root::default();
    let mut clash = promo_config();
    clash.id = PROMO_ALIAS.to_string();
    assert!(root.register(clash).is_err());
    assert!(root.alias("Promo", "Missing").is_err());
    assert!(root.alias(PROMO_ALIAS, PROMO_ID).is_err());
    root.alias("Promo", PROMO_ID).unwrap();
    assert_eq!(root.build("Promo").unwrap().duration(), 320);
}
