//! Composed visual tree: what a template produces and what export rasterizes.

use crate::foundation::core::{Canvas, Color, Rect};
use crate::source::descriptor::ImageRef;
use crate::summary::model::TextPath;
use crate::template::slots::SlotId;
use crate::template::style::FontFamily;

/// Stable id of one rendered element, shared by the editor and the visual tree.
///
/// Text blocks use `title`, `core-idea`, `point-{i}` and `quote-{i}`; image blocks use their slot
/// name; decoration uses a `deco-` prefix.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct ElementId(String);

impl ElementId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Conventional id for the block bound to `path`.
    pub fn for_text(path: TextPath) -> Self {
        match path {
            TextPath::Title => Self::new("title"),
            TextPath::CoreIdea => Self::new("core-idea"),
            TextPath::KeyPoint(i) => Self::new(format!("point-{i}")),
            TextPath::Quote(i) => Self::new(format!("quote-{i}")),
        }
    }

    pub fn for_slot(slot: SlotId) -> Self {
        Self::new(slot.name())
    }

    pub fn deco(name: &str) -> Self {
        Self::new(format!("deco-{name}"))
    }
}

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ElementId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Area paint.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Fill {
    Solid(Color),
    /// Gradient along `angle_deg` (0 = left to right, 90 = top to bottom).
    LinearGradient {
        angle_deg: f64,
        stops: Vec<(f64, Color)>,
    },
}

impl Fill {
    pub fn vertical(top: Color, bottom: Color) -> Self {
        Fill::LinearGradient {
            angle_deg: 90.0,
            stops: vec![(0.0, top), (1.0, bottom)],
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAlign {
    #[default]
    Start,
    Middle,
    End,
}

/// Resolved text block; `lines` is filled by the engine after style resolution.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct TextBlock {
    pub text: String,
    /// Summary field this block edits, if any.
    pub binding: Option<TextPath>,
    pub font_family: FontFamily,
    pub font_size: f64,
    pub weight: u16,
    pub italic: bool,
    pub color: Color,
    pub align: TextAlign,
    /// Multiple of `font_size`.
    pub line_height: f64,
    pub max_lines: Option<usize>,
    pub uppercase: bool,
    pub lines: Vec<String>,
}

/// Outcome of slot resolution.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "origin", rename_all = "snake_case")]
pub enum ResolvedImage {
    /// User upload for the slot.
    Uploaded { image: ImageRef },
    /// Derived from the source descriptor.
    SourceDefault { image: ImageRef },
    /// Generated gradient keyed by the slot seed.
    Placeholder { seed: u64 },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize)]
pub struct ImageFilter {
    /// Gaussian blur std-dev in px.
    pub blur: f64,
    pub grayscale: bool,
    pub sepia: bool,
    /// `1.0` is unchanged.
    pub brightness: f64,
}

impl ImageFilter {
    pub const NONE: ImageFilter = ImageFilter {
        blur: 0.0,
        grayscale: false,
        sepia: false,
        brightness: 1.0,
    };

    pub fn is_none(&self) -> bool {
        self.blur <= 0.0 && !self.grayscale && !self.sepia && self.brightness == 1.0
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ImageBlock {
    pub slot: SlotId,
    pub image: ResolvedImage,
    pub corner_radius: f64,
    pub filter: ImageFilter,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ShapeBlock {
    pub fill: Fill,
    pub stroke: Option<(Color, f64)>,
    pub corner_radius: f64,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BlockContent {
    Text(TextBlock),
    Image(ImageBlock),
    Shape(ShapeBlock),
}

/// One positioned element.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Block {
    pub element_id: ElementId,
    pub frame: Rect,
    pub z: i32,
    pub rotation_deg: f64,
    pub opacity: f64,
    /// Element this decoration belongs to; it hides and moves with its owner.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<ElementId>,
    pub content: BlockContent,
}

impl Block {
    /// Tie this block to `path`'s text block.
    pub(crate) fn part_of(&mut self, path: TextPath) -> &mut Self {
        self.owner = Some(ElementId::for_text(path));
        self
    }

    /// Id whose overrides govern visibility and position of this block.
    pub fn governing_id(&self) -> &ElementId {
        self.owner.as_ref().unwrap_or(&self.element_id)
    }

    pub fn as_text(&self) -> Option<&TextBlock> {
        match &self.content {
            BlockContent::Text(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_image(&self) -> Option<&ImageBlock> {
        match &self.content {
            BlockContent::Image(i) => Some(i),
            _ => None,
        }
    }
}

/// Everything needed to paint one card, in paint order.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct VisualTree {
    pub canvas: Canvas,
    pub background: Fill,
    pub blocks: Vec<Block>,
}

impl VisualTree {
    pub fn block(&self, id: &str) -> Option<&Block> {
        self.blocks.iter().find(|b| b.element_id.as_str() == id)
    }

    /// Image resolved for `slot`, if the tree shows that slot.
    pub fn slot_image(&self, slot: SlotId) -> Option<&ResolvedImage> {
        self.blocks
            .iter()
            .filter_map(Block::as_image)
            .find(|i| i.slot == slot)
            .map(|i| &i.image)
    }

    pub fn element_ids(&self) -> impl Iterator<Item = &ElementId> {
        self.blocks.iter().map(|b| &b.element_id)
    }
}
