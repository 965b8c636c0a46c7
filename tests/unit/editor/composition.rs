use super::*;

fn id(s: &str) -> ElementId {
    ElementId::new(s)
}

#[test]
fn absent_entry_means_default() {
    let c = VisualComposition::new();
    assert!(c.get(&id("title")).is_none());
    assert_eq!(c.position_delta(&id("title")), Vec2::ZERO);
    assert!(!c.is_hidden(&id("title")));
}

#[test]
fn set_position_replaces() {
    let mut c = VisualComposition::new();
    c.set_position(&id("title"), Vec2::new(10.0, 5.0));
    c.set_position(&id("title"), Vec2::new(-3.0, 2.0));
    assert_eq!(c.position_delta(&id("title")), Vec2::new(-3.0, 2.0));
}

#[test]
fn restyle_merges_fields() {
    let mut c = VisualComposition::new();
    assert!(c.restyle(
        &id("title"),
        StylePatch {
            font_size: Some(40.0),
            ..StylePatch::default()
        }
    ));
    assert!(c.restyle(
        &id("title"),
        StylePatch {
            color: Some(Color::WHITE),
            ..StylePatch::default()
        }
    ));
    let o = c.get(&id("title")).unwrap();
    assert_eq!(o.font_size, Some(40.0));
    assert_eq!(o.color, Some(Color::WHITE));
    assert!(!c.restyle(&id("title"), StylePatch::default()));
}

#[test]
fn hidden_element_ignores_restyle() {
    let mut c = VisualComposition::new();
    c.hide(&id("point-0"));
    let before = c.clone();
    assert!(!c.restyle(
        &id("point-0"),
        StylePatch {
            font_family: Some(FontFamily::Mono),
            ..StylePatch::default()
        }
    ));
    assert_eq!(c, before);
}

#[test]
fn serializes_as_map() {
    let mut c = VisualComposition::new();
    c.hide(&id("hero"));
    let v = serde_json::to_value(&c).unwrap();
    assert_eq!(v["hero"]["hidden"], serde_json::json!(true));
}
