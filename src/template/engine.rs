use crate::editor::composition::VisualComposition;
use crate::foundation::core::{Canvas, Vec2};
use crate::source::descriptor::SourceDescriptor;
use crate::summary::model::Summary;
use crate::template::catalog::TemplateId;
use crate::template::layout::{LayoutCx, LayoutFn};
use crate::template::scene::{Block, BlockContent, VisualTree};
use crate::template::slots::{SlotBoard, SlotId};
use crate::template::stitch;
use crate::template::style::{Palette, StyleConfig};
use crate::template::text;

/// Top-level rendering mode; the two are mutually exclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "mode", content = "template", rename_all = "snake_case")]
pub enum RenderMode {
    /// One of the catalog templates.
    Infographic(TemplateId),
    /// Hero image plus three blurred key-point rows.
    SubtitleStitch,
}

impl Default for RenderMode {
    fn default() -> Self {
        RenderMode::Infographic(TemplateId::default())
    }
}

/// Everything a render reads. Rendering is pure over this.
#[derive(Clone, Copy, Debug)]
pub struct RenderInput<'a> {
    pub summary: &'a Summary,
    pub source: &'a SourceDescriptor,
    pub mode: RenderMode,
    pub style: &'a StyleConfig,
    pub slots: &'a SlotBoard,
    pub composition: &'a VisualComposition,
    pub canvas: Canvas,
}

/// Render `template` with default slots and no overrides.
pub fn render(
    summary: &Summary,
    source: &SourceDescriptor,
    template: TemplateId,
    style: &StyleConfig,
) -> VisualTree {
    let slots = SlotBoard::new(0);
    let composition = VisualComposition::new();
    render_scene(&RenderInput {
        summary,
        source,
        mode: RenderMode::Infographic(template),
        style,
        slots: &slots,
        composition: &composition,
        canvas: Canvas::default(),
    })
}

/// Build the visual tree, then apply overrides with precedence element > global style > template.
pub fn render_scene(input: &RenderInput<'_>) -> VisualTree {
    let (palette, layout): (Palette, LayoutFn) = match input.mode {
        RenderMode::Infographic(id) => {
            let entry = id.entry();
            (entry.palette(), entry.layout)
        }
        RenderMode::SubtitleStitch => (stitch::palette(), stitch::layout),
    };

    let resolve = |slot: SlotId| input.slots.resolve(slot, input.source, input.summary);
    let mut cx = LayoutCx::new(input.summary, input.canvas, &palette, input.style, &resolve);
    layout(&mut cx);

    let background = cx.background;
    let mut blocks: Vec<Block> = cx
        .blocks
        .into_iter()
        .filter(|b| {
            !input.composition.is_hidden(&b.element_id)
                && !input.composition.is_hidden(b.governing_id())
        })
        .collect();
    for block in &mut blocks {
        apply_override(block, input.composition);
        fit_text(block);
    }
    blocks.sort_by_key(|b| b.z);

    tracing::debug!(mode = ?input.mode, blocks = blocks.len(), "rendered scene");
    VisualTree {
        canvas: input.canvas,
        background,
        blocks,
    }
}

fn apply_override(block: &mut Block, composition: &VisualComposition) {
    if let Some(owner) = &block.owner
        && let Some(o) = composition.get(owner)
    {
        block.frame = block.frame + o.position_delta;
    }
    let Some(o) = composition.get(&block.element_id) else {
        return;
    };
    if o.position_delta != Vec2::ZERO {
        block.frame = block.frame + o.position_delta;
    }
    if let BlockContent::Text(t) = &mut block.content {
        if let Some(size) = o.font_size {
            t.font_size = size;
        }
        if let Some(c) = o.color {
            t.color = c;
        }
        if let Some(f) = o.font_family {
            t.font_family = f;
        }
    }
}

fn fit_text(block: &mut Block) {
    let width = block.frame.width();
    if let BlockContent::Text(t) = &mut block.content {
        let shown = if t.uppercase {
            t.text.to_uppercase()
        } else {
            t.text.clone()
        };
        let font = text::FontSpec {
            family: t.font_family,
            size: t.font_size,
            weight: t.weight,
            italic: t.italic,
        };
        t.lines = text::wrap(&shown, &font, width, t.max_lines);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/template/engine.rs"]
mod tests;
