use super::*;

#[test]
fn default_palette_matches_brand_tokens() {
    let theme = Theme::default();
    assert_eq!(theme.colors.background.to_hex(), "#0F172A");
    assert_eq!(theme.colors.primary.to_hex(), "#38BDF8");
    assert_eq!(theme.colors.text.muted.to_hex(), "#94A3B8");
    assert!(theme.fonts.mono.starts_with("Menlo"));
}

#[test]
fn roles_resolve_to_palette_slots() {
    let p = Palette::default();
    assert_eq!(p.get(ColorRole::Alert), p.alert);
    assert_eq!(p.get(ColorRole::TextMain), p.text.main);
    assert_eq!(p.get(ColorRole::Accent), p.accent);
}

#[test]
fn partial_json_overrides_keep_defaults() {
    let theme: Theme =
        serde_json::from_str(r##"{ "colors": { "primary": "#FF0000" } }"##).unwrap();
    assert_eq!(theme.colors.primary, Rgba8::rgb(255, 0, 0));
    assert_eq!(theme.colors.surface, Palette::default().surface);
    assert_eq!(theme.fonts, Fonts::default());
}
