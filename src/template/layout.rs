use crate::foundation::core::{Canvas, Color, Rect};
use crate::summary::model::{Summary, TextPath};
use crate::template::scene::{
    Block, BlockContent, ElementId, Fill, ImageBlock, ImageFilter, ResolvedImage, ShapeBlock,
    TextAlign, TextBlock,
};
use crate::template::slots::SlotId;
use crate::template::style::{FontFamily, Paint, Palette, StyleConfig, Typeface};

/// Declarative text styling as written by a layout.
#[derive(Clone, Copy, Debug)]
pub(crate) struct TextSpec {
    pub size: f64,
    pub weight: u16,
    pub italic: bool,
    pub paint: Paint,
    pub face: Typeface,
    pub align: TextAlign,
    pub line_height: f64,
    pub max_lines: Option<usize>,
    pub uppercase: bool,
}

impl TextSpec {
    pub fn new(size: f64) -> Self {
        Self {
            size,
            weight: 400,
            italic: false,
            paint: Paint::Base,
            face: Typeface::Active,
            align: TextAlign::Start,
            line_height: 1.35,
            max_lines: None,
            uppercase: false,
        }
    }

    pub fn weight(mut self, w: u16) -> Self {
        self.weight = w;
        self
    }

    pub fn bold(self) -> Self {
        self.weight(700)
    }

    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub fn paint(mut self, p: Paint) -> Self {
        self.paint = p;
        self
    }

    pub fn highlight(self) -> Self {
        self.paint(Paint::Highlight)
    }

    pub fn face(mut self, f: FontFamily) -> Self {
        self.face = Typeface::Fixed(f);
        self
    }

    pub fn center(mut self) -> Self {
        self.align = TextAlign::Middle;
        self
    }

    pub fn end(mut self) -> Self {
        self.align = TextAlign::End;
        self
    }

    pub fn lines(mut self, n: usize) -> Self {
        self.max_lines = Some(n);
        self
    }

    pub fn leading(mut self, lh: f64) -> Self {
        self.line_height = lh;
        self
    }

    pub fn upper(mut self) -> Self {
        self.uppercase = true;
        self
    }
}

/// Builder state handed to every layout function.
///
/// Text color, typeface and size are resolved against palette and global style here; the
/// engine applies per-element overrides afterwards.
pub(crate) struct LayoutCx<'a> {
    pub summary: &'a Summary,
    pub canvas: Canvas,
    pub palette: &'a Palette,
    style: &'a StyleConfig,
    images: &'a dyn Fn(SlotId) -> ResolvedImage,
    pub(crate) background: Fill,
    pub(crate) blocks: Vec<Block>,
    next_z: i32,
}

impl<'a> LayoutCx<'a> {
    pub fn new(
        summary: &'a Summary,
        canvas: Canvas,
        palette: &'a Palette,
        style: &'a StyleConfig,
        images: &'a dyn Fn(SlotId) -> ResolvedImage,
    ) -> Self {
        Self {
            summary,
            canvas,
            palette,
            style,
            images,
            background: palette.background.clone(),
            blocks: Vec::new(),
            next_z: 0,
        }
    }

    pub fn w(&self) -> f64 {
        self.canvas.w()
    }

    pub fn h(&self) -> f64 {
        self.canvas.h()
    }

    fn push(&mut self, element_id: ElementId, frame: Rect, content: BlockContent) -> &mut Block {
        let z = self.next_z;
        self.next_z += 1;
        self.blocks.push(Block {
            element_id,
            frame,
            z,
            rotation_deg: 0.0,
            opacity: 1.0,
            owner: None,
            content,
        });
        let last = self.blocks.len() - 1;
        &mut self.blocks[last]
    }

    fn text_content(&self, text: String, binding: Option<TextPath>, spec: TextSpec) -> TextBlock {
        TextBlock {
            text,
            binding,
            font_family: self.palette.resolve_typeface(spec.face, self.style),
            font_size: spec.size * self.style.font_scale,
            weight: spec.weight,
            italic: spec.italic,
            color: self.palette.resolve_paint(spec.paint, self.style),
            align: spec.align,
            line_height: spec.line_height,
            max_lines: spec.max_lines,
            uppercase: spec.uppercase,
            lines: Vec::new(),
        }
    }

    /// Editable block bound to a summary field.
    pub fn text(&mut self, path: TextPath, frame: Rect, spec: TextSpec) -> &mut Block {
        let text = self.summary.text(path).unwrap_or_default().to_string();
        let content = self.text_content(text, Some(path), spec);
        self.push(ElementId::for_text(path), frame, BlockContent::Text(content))
    }

    /// Decorative text not bound to the summary.
    pub fn label(
        &mut self,
        name: &str,
        text: impl Into<String>,
        frame: Rect,
        spec: TextSpec,
    ) -> &mut Block {
        let content = self.text_content(text.into(), None, spec);
        self.push(ElementId::deco(name), frame, BlockContent::Text(content))
    }

    pub fn image(&mut self, slot: SlotId, frame: Rect, corner_radius: f64) -> &mut Block {
        self.image_with(ElementId::for_slot(slot), slot, frame, corner_radius, ImageFilter::NONE)
    }

    /// Image block with its own id, e.g. a blurred copy of a slot used as a backdrop.
    pub fn image_with(
        &mut self,
        id: ElementId,
        slot: SlotId,
        frame: Rect,
        corner_radius: f64,
        filter: ImageFilter,
    ) -> &mut Block {
        let image = (self.images)(slot);
        self.push(
            id,
            frame,
            BlockContent::Image(ImageBlock {
                slot,
                image,
                corner_radius,
                filter,
            }),
        )
    }

    pub fn shape(&mut self, name: &str, frame: Rect, fill: Fill, corner_radius: f64) -> &mut Block {
        self.push(
            ElementId::deco(name),
            frame,
            BlockContent::Shape(ShapeBlock {
                fill,
                stroke: None,
                corner_radius,
            }),
        )
    }

    pub fn outline(
        &mut self,
        name: &str,
        frame: Rect,
        stroke: (Color, f64),
        corner_radius: f64,
    ) -> &mut Block {
        self.push(
            ElementId::deco(name),
            frame,
            BlockContent::Shape(ShapeBlock {
                fill: Fill::Solid(Color::rgba(0, 0, 0, 0)),
                stroke: Some(stroke),
                corner_radius,
            }),
        )
    }

    /// Resolved highlight color, for decoration that follows the style panel.
    pub fn highlight(&self) -> Color {
        self.palette.resolve_paint(Paint::Highlight, self.style)
    }

    pub fn base(&self) -> Color {
        self.palette.resolve_paint(Paint::Base, self.style)
    }
}

/// Layout entry point: one per template.
pub(crate) type LayoutFn = fn(&mut LayoutCx<'_>);
