use super::*;
use crate::foundation::core::Color;
use crate::summary::model::GoldenQuote;
use crate::template::scene::{BlockContent, Fill, ResolvedImage};
use crate::template::style::FontFamily;

fn summary() -> Summary {
    Summary {
        title: "T".into(),
        core_idea: "C".into(),
        key_points: vec!["k1".into(), "k2".into(), "k3".into()],
        golden_quotes: vec![GoldenQuote::new("q1", "00:10")],
        supplementary_image_urls: None,
    }
}

fn images() -> SourceDescriptor {
    SourceDescriptor::Images {
        images: vec![ImageRef::new("A"), ImageRef::new("B")],
        caption: "x".into(),
    }
}

fn session(kind: SourceKind) -> EditorSession {
    EditorSession::new(kind, EditorOpts::default())
}

fn title() -> ElementId {
    ElementId::new("title")
}

fn size_patch(px: f64) -> StylePatch {
    StylePatch {
        font_size: Some(px),
        ..StylePatch::default()
    }
}

#[test]
fn starts_on_cover_with_nothing_selected() {
    let s = session(SourceKind::Images);
    assert_eq!(s.mode(), RenderMode::Infographic(TemplateId::Cover));
    assert!(s.selection().is_none());
    assert!(s.composition().is_empty());
}

#[test]
fn restyle_routes_by_selection() {
    let mut s = session(SourceKind::Images);
    s.restyle(size_patch(32.0));
    assert_eq!(s.style().font_scale, 2.0);
    assert!(s.composition().is_empty());

    s.select("title");
    s.restyle(StylePatch {
        color: Some(Color::rgb(1, 1, 1)),
        ..StylePatch::default()
    });
    assert_eq!(s.style().base_text_color, None);
    assert_eq!(
        s.composition().get(&title()).unwrap().color,
        Some(Color::rgb(1, 1, 1))
    );

    s.clear_selection();
    s.restyle(StylePatch {
        font_family: Some(FontFamily::Mono),
        ..StylePatch::default()
    });
    assert_eq!(s.style().active_font_family, Some(FontFamily::Mono));
}

#[test]
fn drag_commits_exact_delta_without_drift() {
    let mut s = session(SourceKind::Images);
    s.begin_drag(&title(), Point::new(100.0, 100.0));
    s.drag_to(&title(), Point::new(120.0, 90.0));
    assert_eq!(s.composition().position_delta(&title()), Vec2::new(20.0, -10.0));
    s.drag_to(&title(), Point::new(130.0, 95.0));
    let effect = s.end_drag(&title(), Point::new(130.0, 95.0));
    assert_eq!(
        effect,
        DragEffect::Committed {
            delta: Vec2::new(30.0, -5.0)
        }
    );

    for _ in 0..3 {
        s.select("title");
        s.clear_selection();
    }
    assert_eq!(s.composition().position_delta(&title()), Vec2::new(30.0, -5.0));

    // A second gesture continues from the committed offset.
    s.nudge(&title(), Vec2::new(-30.0, 5.0));
    assert_eq!(s.composition().position_delta(&title()), Vec2::ZERO);
}

#[test]
fn nudges_add_up_while_a_held_gesture_does_not() {
    let mut s = session(SourceKind::Images);
    s.nudge(&title(), Vec2::new(10.0, 0.0));
    s.nudge(&title(), Vec2::new(10.0, 0.0));
    assert_eq!(s.composition().position_delta(&title()), Vec2::new(20.0, 0.0));

    s.begin_drag(&title(), Point::new(0.0, 0.0));
    s.drag_to(&title(), Point::new(10.0, 0.0));
    s.drag_to(&title(), Point::new(10.0, 0.0));
    s.end_drag(&title(), Point::new(10.0, 0.0));
    assert_eq!(s.composition().position_delta(&title()), Vec2::new(30.0, 0.0));
}

#[test]
fn highlight_color_reaches_highlight_painted_blocks() {
    let (sum, src) = (summary(), images());
    let mut s = session(SourceKind::Images);
    let pink = Color::rgb(255, 0, 128);
    s.set_highlight_color(pink);
    assert_eq!(s.style().highlight_color, Some(pink));

    let tree = s.render(&sum, &src);
    assert_eq!(tree.block("deco-kicker").unwrap().as_text().unwrap().color, pink);
    match &tree.block("deco-bullet-0").unwrap().content {
        BlockContent::Shape(shape) => assert_eq!(shape.fill, Fill::Solid(pink)),
        other => panic!("bullet is not a shape: {other:?}"),
    }
    assert_ne!(tree.block("title").unwrap().as_text().unwrap().color, pink);
}

#[test]
fn cancel_restores_previous_offset() {
    let mut s = session(SourceKind::Images);
    s.nudge(&title(), Vec2::new(5.0, 5.0));
    s.begin_drag(&title(), Point::ZERO);
    s.drag_to(&title(), Point::new(50.0, 50.0));
    s.cancel_drag(&title());
    assert_eq!(s.composition().position_delta(&title()), Vec2::new(5.0, 5.0));
}

#[test]
fn gestures_are_per_element() {
    let mut s = session(SourceKind::Images);
    let core = ElementId::new("core-idea");
    s.begin_drag(&title(), Point::ZERO);
    s.begin_drag(&core, Point::ZERO);
    s.end_drag(&core, Point::new(1.0, 2.0));
    s.end_drag(&title(), Point::new(3.0, 4.0));
    assert_eq!(s.composition().position_delta(&core), Vec2::new(1.0, 2.0));
    assert_eq!(s.composition().position_delta(&title()), Vec2::new(3.0, 4.0));
}

#[test]
fn delete_then_restyle_leaves_output_unchanged() {
    let (sum, src) = (summary(), images());
    let mut s = session(SourceKind::Images);
    s.select("title");
    s.delete(&title());
    let before = s.render(&sum, &src);
    assert!(before.block("title").is_none());

    s.restyle(size_patch(90.0));
    assert!(!s.restyle_element(
        &title(),
        StylePatch {
            color: Some(Color::BLACK),
            ..StylePatch::default()
        }
    ));
    assert_eq!(s.nudge(&title(), Vec2::new(10.0, 10.0)), DragEffect::Noop);
    assert_eq!(s.render(&sum, &src), before);
}

#[test]
fn template_switch_resets_composition() {
    let mut s = session(SourceKind::Images);
    s.select("title");
    s.delete(&title());
    s.nudge(&ElementId::new("core-idea"), Vec2::new(4.0, 4.0));
    s.begin_text_edit(&summary(), TextPath::Title);

    s.switch_template(TemplateId::Magazine);
    assert!(s.composition().is_empty());
    assert!(s.selection().is_none());
    assert!(s.draft().is_none());

    s.delete(&title());
    s.switch_template(TemplateId::Magazine);
    assert!(s.composition().is_empty());
}

#[test]
fn text_edit_writes_back_on_commit_only() {
    let mut sum = summary();
    let mut s = session(SourceKind::Video);
    assert!(s.begin_text_edit(&sum, TextPath::KeyPoint(1)));
    s.update_text_draft("k");
    s.update_text_draft("k2 edited");
    assert_eq!(sum.key_points[1], "k2");
    assert!(s.commit_text_edit(&mut sum));
    assert_eq!(sum.key_points[1], "k2 edited");
    assert!(!s.commit_text_edit(&mut sum));
    assert!(!s.begin_text_edit(&sum, TextPath::KeyPoint(9)));
}

#[test]
fn cancelled_text_edit_leaves_summary_alone() {
    let mut sum = summary();
    let mut s = session(SourceKind::Images);
    assert!(s.begin_text_edit(&sum, TextPath::Title));
    s.update_text_draft("discarded");
    s.cancel_text_edit();
    assert!(s.draft().is_none());
    assert!(!s.commit_text_edit(&mut sum));
    assert_eq!(sum.title, "T");
}

#[test]
fn set_style_replaces_global_style() {
    let (sum, src) = (summary(), images());
    let mut s = session(SourceKind::Images);
    let base = s.render(&sum, &src).block("title").unwrap().as_text().unwrap().font_size;

    let style = StyleConfig {
        font_scale: 2.0,
        ..StyleConfig::default()
    };
    s.set_style(style.clone());
    assert_eq!(s.style(), &style);
    let scaled = s.render(&sum, &src).block("title").unwrap().as_text().unwrap().font_size;
    assert_eq!(scaled, base * 2.0);
}

#[test]
fn shuffle_images_policy_per_source_kind() {
    let sum = summary();
    let src = images();

    let mut s = session(SourceKind::Images);
    s.upload_slot_image(SlotId::Hero, ImageRef::new("U"));
    s.shuffle_images();
    assert!(matches!(
        s.render(&sum, &src).slot_image(SlotId::Hero),
        Some(ResolvedImage::Placeholder { .. })
    ));

    for kind in [SourceKind::Video, SourceKind::Search] {
        let mut s = session(kind);
        s.upload_slot_image(SlotId::Hero, ImageRef::new("U"));
        s.shuffle_images();
        assert_eq!(
            s.render(&sum, &src).slot_image(SlotId::Hero),
            Some(&ResolvedImage::Uploaded {
                image: ImageRef::new("U")
            }),
            "{kind:?}"
        );
    }

    let forced = EditorOpts {
        shuffle_policy: Some(ShufflePolicy::KeepUploads),
        ..EditorOpts::default()
    };
    let s = EditorSession::new(SourceKind::Images, forced);
    assert_eq!(s.shuffle_policy(), ShufflePolicy::KeepUploads);
}

#[test]
fn shuffle_images_changes_hero_without_uploads() {
    let (sum, src) = (summary(), images());
    let mut s = session(SourceKind::Images);
    let before = s.render(&sum, &src).slot_image(SlotId::Hero).cloned();
    s.shuffle_images();
    let after = s.render(&sum, &src).slot_image(SlotId::Hero).cloned();
    assert_ne!(before, after);
}

#[test]
fn shuffle_text_reorders_points() {
    let mut sum = summary();
    let before = sum.key_points.clone();
    let mut s = session(SourceKind::Images);
    s.shuffle_text(&mut sum);
    assert_ne!(sum.key_points, before);
    let mut sorted = sum.key_points.clone();
    sorted.sort();
    assert_eq!(sorted, before);
}

#[test]
fn slot_state_survives_template_switch() {
    let (sum, src) = (summary(), images());
    let mut s = session(SourceKind::Images);
    s.upload_slot_image(SlotId::Hero, ImageRef::new("U"));
    s.switch_template(TemplateId::Polaroid);
    assert_eq!(
        s.render(&sum, &src).slot_image(SlotId::Hero),
        Some(&ResolvedImage::Uploaded {
            image: ImageRef::new("U")
        })
    );
    s.refresh_slot(SlotId::Hero);
    assert_eq!(
        s.render(&sum, &src).slot_image(SlotId::Hero),
        Some(&ResolvedImage::SourceDefault {
            image: ImageRef::new("A")
        })
    );
}
