use std::collections::HashSet;

use super::*;
use crate::editor::composition::StylePatch;
use crate::foundation::core::Color;
use crate::source::descriptor::ImageRef;
use crate::summary::model::{GoldenQuote, TextPath};
use crate::template::catalog::catalog;
use crate::template::scene::{ElementId, ResolvedImage};
use crate::template::style::FontFamily;

fn summary(points: usize) -> Summary {
    Summary {
        title: "T".into(),
        core_idea: "C".into(),
        key_points: (1..=points).map(|i| format!("k{i}")).collect(),
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

struct Fixture {
    summary: Summary,
    source: SourceDescriptor,
    style: StyleConfig,
    slots: SlotBoard,
    composition: VisualComposition,
}

impl Fixture {
    fn new() -> Self {
        Self {
            summary: summary(3),
            source: images(),
            style: StyleConfig::default(),
            slots: SlotBoard::new(1),
            composition: VisualComposition::new(),
        }
    }

    fn render(&self, mode: RenderMode) -> VisualTree {
        render_scene(&RenderInput {
            summary: &self.summary,
            source: &self.source,
            mode,
            style: &self.style,
            slots: &self.slots,
            composition: &self.composition,
            canvas: Canvas::default(),
        })
    }
}

fn text_of<'t>(tree: &'t VisualTree, id: &str) -> &'t crate::template::scene::TextBlock {
    tree.block(id).and_then(|b| b.as_text()).unwrap()
}

#[test]
fn cover_binds_hero_to_first_image() {
    let tree = render(&summary(3), &images(), TemplateId::Cover, &StyleConfig::default());
    assert_eq!(
        tree.slot_image(SlotId::Hero),
        Some(&ResolvedImage::SourceDefault {
            image: ImageRef::new("A")
        })
    );
    assert_eq!(text_of(&tree, "title").text, "T");
    assert_eq!(text_of(&tree, "title").binding, Some(TextPath::Title));
    assert_eq!(text_of(&tree, "core-idea").text, "C");
    assert_eq!(text_of(&tree, "quote-0").text, "q1");
}

#[test]
fn cover_surfaces_only_three_points() {
    let tree = render(&summary(6), &images(), TemplateId::Cover, &StyleConfig::default());
    assert!(tree.block("point-2").is_some());
    assert!(tree.block("point-3").is_none());
}

#[test]
fn every_template_renders_unique_ids_and_title() {
    let s = summary(6);
    for entry in catalog() {
        let tree = render(&s, &images(), entry.id, &StyleConfig::default());
        let mut seen = HashSet::new();
        for id in tree.element_ids() {
            assert!(seen.insert(id.clone()), "{:?} repeats {id}", entry.id);
        }
        assert_eq!(text_of(&tree, "title").text, "T", "{:?}", entry.id);
        assert!(tree.block("point-0").is_some(), "{:?}", entry.id);
        for slot in entry.slots {
            assert!(tree.slot_image(*slot).is_some(), "{:?} {slot:?}", entry.id);
        }
    }
}

#[test]
fn rendering_is_deterministic() {
    let f = Fixture::new();
    for id in TemplateId::ALL {
        assert_eq!(
            f.render(RenderMode::Infographic(id)),
            f.render(RenderMode::Infographic(id))
        );
    }
}

#[test]
fn hidden_elements_are_omitted() {
    let mut f = Fixture::new();
    f.composition.hide(&ElementId::new("title"));
    let tree = f.render(RenderMode::default());
    assert!(tree.block("title").is_none());
    assert!(tree.block("core-idea").is_some());
}

#[test]
fn position_delta_translates_frame() {
    let mut f = Fixture::new();
    let base = f.render(RenderMode::default()).block("title").unwrap().frame;
    f.composition
        .set_position(&ElementId::new("title"), Vec2::new(12.0, -30.0));
    let moved = f.render(RenderMode::default()).block("title").unwrap().frame;
    assert_eq!(moved.x0, base.x0 + 12.0);
    assert_eq!(moved.y0, base.y0 - 30.0);
    assert_eq!(moved.width(), base.width());
}

#[test]
fn hiding_a_text_block_hides_its_decorations() {
    let mut f = Fixture::new();
    let tree = f.render(RenderMode::default());
    assert!(tree.block("deco-bullet-1").is_some());
    assert!(tree.block("deco-quote-card").is_some());

    f.composition.hide(&ElementId::for_text(TextPath::KeyPoint(1)));
    f.composition.hide(&ElementId::for_text(TextPath::Quote(0)));
    let tree = f.render(RenderMode::default());
    assert!(tree.block("point-1").is_none());
    assert!(tree.block("deco-bullet-1").is_none());
    assert!(tree.block("quote-0").is_none());
    assert!(tree.block("deco-quote-card").is_none());
    assert!(tree.block("deco-bullet-0").is_some());
}

#[test]
fn decorations_move_with_their_text_block() {
    let mut f = Fixture::new();
    let base = f.render(RenderMode::default());
    let bullet = base.block("deco-bullet-0").unwrap().frame;
    let other = base.block("deco-bullet-1").unwrap().frame;

    f.composition
        .set_position(&ElementId::for_text(TextPath::KeyPoint(0)), Vec2::new(40.0, 8.0));
    let moved = f.render(RenderMode::default());
    let frame = moved.block("deco-bullet-0").unwrap().frame;
    assert_eq!(frame.x0, bullet.x0 + 40.0);
    assert_eq!(frame.y0, bullet.y0 + 8.0);
    assert_eq!(moved.block("deco-bullet-1").unwrap().frame, other);
}

#[test]
fn every_owner_names_a_rendered_text_block() {
    let f = Fixture::new();
    for entry in catalog() {
        let tree = f.render(RenderMode::Infographic(entry.id));
        for block in tree.blocks.iter().filter(|b| b.owner.is_some()) {
            let owner = block.governing_id();
            assert!(tree.block(owner.as_str()).is_some(), "{} owned by {owner}", block.element_id);
        }
    }
}

#[test]
fn element_override_beats_global_style_beats_template() {
    let mut f = Fixture::new();
    let template_color = text_of(&f.render(RenderMode::default()), "core-idea").color;
    assert_eq!(template_color, Color::WHITE);

    f.style.base_text_color = Some(Color::rgb(1, 2, 3));
    f.style.active_font_family = Some(FontFamily::Serif);
    let tree = f.render(RenderMode::default());
    assert_eq!(text_of(&tree, "core-idea").color, Color::rgb(1, 2, 3));
    assert_eq!(text_of(&tree, "core-idea").font_family, FontFamily::Serif);

    f.composition.restyle(
        &ElementId::new("core-idea"),
        StylePatch {
            color: Some(Color::rgb(9, 9, 9)),
            font_family: Some(FontFamily::Mono),
            font_size: Some(50.0),
        },
    );
    let tree = f.render(RenderMode::default());
    let t = text_of(&tree, "core-idea");
    assert_eq!(t.color, Color::rgb(9, 9, 9));
    assert_eq!(t.font_family, FontFamily::Mono);
    assert_eq!(t.font_size, 50.0);
    assert_eq!(text_of(&tree, "title").color, Color::rgb(1, 2, 3));
}

#[test]
fn font_scale_multiplies_template_sizes() {
    let mut f = Fixture::new();
    let base = text_of(&f.render(RenderMode::default()), "title").font_size;
    f.style.font_scale = 2.0;
    let scaled = text_of(&f.render(RenderMode::default()), "title").font_size;
    assert_eq!(scaled, base * 2.0);
}

#[test]
fn text_respects_max_lines() {
    let mut f = Fixture::new();
    f.summary.title = "word ".repeat(200);
    let tree = f.render(RenderMode::default());
    let t = text_of(&tree, "title");
    let max = t.max_lines.unwrap();
    let font = text::FontSpec {
        family: t.font_family,
        size: t.font_size,
        weight: t.weight,
        italic: t.italic,
    };
    let shown = if t.uppercase {
        t.text.to_uppercase()
    } else {
        t.text.clone()
    };
    let full = text::wrap(&shown, &font, tree.block("title").unwrap().frame.width(), None);
    if full.len() > max {
        assert_eq!(t.lines.len(), max);
        assert!(t.lines.last().unwrap().ends_with('…'));
    } else {
        // No shaping font resolved on this machine; nothing overflowed.
        assert_eq!(t.lines, full);
    }
}

#[test]
fn subtitle_stitch_has_three_blurred_rows() {
    let mut f = Fixture::new();
    f.summary = summary(5);
    let tree = f.render(RenderMode::SubtitleStitch);
    for i in 0..3 {
        let row = tree.block(&format!("deco-row-{i}")).unwrap();
        assert!(row.as_image().unwrap().filter.blur > 0.0);
        assert_eq!(text_of(&tree, &format!("point-{i}")).text, format!("k{}", i + 1));
    }
    assert!(tree.block("point-3").is_none());
    assert!(tree.slot_image(SlotId::Hero).is_some());
}

#[test]
fn render_mode_serde_shape() {
    let v = serde_json::to_value(RenderMode::Infographic(TemplateId::NoteApp)).unwrap();
    assert_eq!(v, serde_json::json!({"mode": "infographic", "template": "note-app"}));
    let v = serde_json::to_value(RenderMode::SubtitleStitch).unwrap();
    assert_eq!(v, serde_json::json!({"mode": "subtitle_stitch"}));
}
