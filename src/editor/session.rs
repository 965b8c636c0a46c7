use std::collections::BTreeMap;

use crate::editor::composition::{StylePatch, VisualComposition};
use crate::editor::drag::{DragEffect, DragGesture};
use crate::export::raster::{ExportAdapter, ExportedImage};
use crate::foundation::core::{Canvas, Color, Point, Vec2};
use crate::foundation::error::CardResult;
use crate::foundation::math::Rng64;
use crate::source::descriptor::{ImageRef, SourceDescriptor, SourceKind};
use crate::summary::model::{Summary, TextPath};
use crate::template::catalog::TemplateId;
use crate::template::engine::{RenderInput, RenderMode, render_scene};
use crate::template::scene::{ElementId, VisualTree};
use crate::template::slots::{ShufflePolicy, SlotBoard, SlotId};
use crate::template::style::StyleConfig;

/// Editor settings.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EditorOpts {
    pub canvas: Canvas,
    /// Forces one shuffle policy for every source kind.
    pub shuffle_policy: Option<ShufflePolicy>,
    /// Seeds placeholders and shuffles.
    pub seed: u64,
}

impl Default for EditorOpts {
    fn default() -> Self {
        Self {
            canvas: Canvas::default(),
            shuffle_policy: None,
            seed: 0x5eed_cafe,
        }
    }
}

/// Text edit in progress; the summary changes only on commit.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TextDraft {
    pub path: TextPath,
    pub text: String,
}

/// Overlay-editor state for one result-editor visit.
///
/// The summary and source are owned by the wizard and passed in; everything visual lives here.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EditorSession {
    source_kind: SourceKind,
    mode: RenderMode,
    style: StyleConfig,
    composition: VisualComposition,
    selection: Option<ElementId>,
    slots: SlotBoard,
    gestures: BTreeMap<ElementId, DragGesture>,
    draft: Option<TextDraft>,
    rng: Rng64,
    opts: EditorOpts,
}

impl EditorSession {
    /// Start on the default template with empty overrides.
    pub fn new(source_kind: SourceKind, opts: EditorOpts) -> Self {
        Self {
            source_kind,
            mode: RenderMode::default(),
            style: StyleConfig::default(),
            composition: VisualComposition::new(),
            selection: None,
            slots: SlotBoard::new(opts.seed),
            gestures: BTreeMap::new(),
            draft: None,
            rng: Rng64::new(opts.seed.rotate_left(17) ^ 0x9e37_79b9),
            opts,
        }
    }

    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    pub fn composition(&self) -> &VisualComposition {
        &self.composition
    }

    pub fn selection(&self) -> Option<&ElementId> {
        self.selection.as_ref()
    }

    pub fn slots(&self) -> &SlotBoard {
        &self.slots
    }

    pub fn draft(&self) -> Option<&TextDraft> {
        self.draft.as_ref()
    }

    pub fn shuffle_policy(&self) -> ShufflePolicy {
        self.opts
            .shuffle_policy
            .unwrap_or_else(|| ShufflePolicy::for_kind(self.source_kind))
    }

    /// Make `id` the single selection.
    pub fn select(&mut self, id: impl Into<ElementId>) {
        let id = id.into();
        tracing::debug!(element = %id, "select");
        self.selection = Some(id);
    }

    /// Click outside every element.
    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// Press on `id` at `pointer`. Hidden elements cannot be dragged.
    pub fn begin_drag(&mut self, id: &ElementId, pointer: Point) -> DragEffect {
        if self.composition.is_hidden(id) {
            return DragEffect::Noop;
        }
        let base = self.composition.position_delta(id);
        self.gestures.entry(id.clone()).or_default().press(pointer, base)
    }

    /// Pointer moved while pressed; the live offset is written through immediately.
    pub fn drag_to(&mut self, id: &ElementId, pointer: Point) -> DragEffect {
        let effect = match self.gestures.get_mut(id) {
            Some(g) => g.move_to(pointer),
            None => DragEffect::Noop,
        };
        self.apply_drag(id, effect)
    }

    /// Release; commits the offset shown at release time.
    pub fn end_drag(&mut self, id: &ElementId, pointer: Point) -> DragEffect {
        let effect = match self.gestures.remove(id) {
            Some(mut g) => g.release(pointer),
            None => DragEffect::Noop,
        };
        self.apply_drag(id, effect)
    }

    pub fn cancel_drag(&mut self, id: &ElementId) -> DragEffect {
        let effect = match self.gestures.remove(id) {
            Some(mut g) => g.cancel(),
            None => DragEffect::Noop,
        };
        self.apply_drag(id, effect)
    }

    fn apply_drag(&mut self, id: &ElementId, effect: DragEffect) -> DragEffect {
        match effect {
            DragEffect::Moved { delta }
            | DragEffect::Committed { delta }
            | DragEffect::Canceled { delta } => self.composition.set_position(id, delta),
            DragEffect::Started | DragEffect::Noop => {}
        }
        if let DragEffect::Committed { delta } = effect {
            tracing::debug!(element = %id, dx = delta.x, dy = delta.y, "drag committed");
        }
        effect
    }

    /// Move `id` by `delta` from its current offset as one press and release.
    ///
    /// Unlike a held gesture, repeated nudges add up.
    pub fn nudge(&mut self, id: &ElementId, delta: Vec2) -> DragEffect {
        if let DragEffect::Noop = self.begin_drag(id, Point::ZERO) {
            return DragEffect::Noop;
        }
        self.end_drag(id, Point::ZERO + delta)
    }

    /// Hide `id` for the rest of this template. Cannot be undone except by switching templates.
    pub fn delete(&mut self, id: &ElementId) {
        tracing::debug!(element = %id, "delete");
        self.gestures.remove(id);
        self.composition.hide(id);
    }

    /// Style-panel edit: goes to the selected element, or to the global style when nothing is
    /// selected.
    pub fn restyle(&mut self, patch: StylePatch) {
        match self.selection.clone() {
            Some(id) => {
                self.restyle_element(&id, patch);
            }
            None => self.restyle_global(patch),
        }
    }

    /// Returns `false` when nothing changed (empty patch or hidden element).
    pub fn restyle_element(&mut self, id: &ElementId, patch: StylePatch) -> bool {
        self.composition.restyle(id, patch)
    }

    pub fn restyle_global(&mut self, patch: StylePatch) {
        if let Some(px) = patch.font_size {
            self.style.set_font_size(px);
        }
        if let Some(c) = patch.color {
            self.style.base_text_color = Some(c);
        }
        if let Some(f) = patch.font_family {
            self.style.active_font_family = Some(f);
        }
    }

    /// Global highlight color; there is no per-element highlight.
    pub fn set_highlight_color(&mut self, color: Color) {
        self.style.highlight_color = Some(color);
    }

    pub fn set_style(&mut self, style: StyleConfig) {
        self.style = style;
    }

    /// Focus a text block for editing.
    pub fn begin_text_edit(&mut self, summary: &Summary, path: TextPath) -> bool {
        let Some(text) = summary.text(path) else {
            return false;
        };
        self.draft = Some(TextDraft {
            path,
            text: text.to_string(),
        });
        true
    }

    /// Keystrokes go to the draft only.
    pub fn update_text_draft(&mut self, text: impl Into<String>) {
        if let Some(d) = &mut self.draft {
            d.text = text.into();
        }
    }

    /// Focus lost: write the draft back to the summary.
    pub fn commit_text_edit(&mut self, summary: &mut Summary) -> bool {
        let Some(draft) = self.draft.take() else {
            return false;
        };
        match summary.set_text(draft.path, draft.text) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(error = %e, path = ?draft.path, "text edit dropped");
                false
            }
        }
    }

    pub fn cancel_text_edit(&mut self) {
        self.draft = None;
    }

    /// Reseed every slot following the session's [`ShufflePolicy`].
    pub fn shuffle_images(&mut self) {
        let policy = self.shuffle_policy();
        tracing::debug!(?policy, "shuffle images");
        self.slots.shuffle(policy, &mut self.rng);
    }

    pub fn shuffle_text(&mut self, summary: &mut Summary) {
        summary.shuffle_key_points(&mut self.rng);
    }

    pub fn upload_slot_image(&mut self, slot: SlotId, image: ImageRef) {
        self.slots.upload(slot, image);
    }

    /// Clear the slot's upload if present, otherwise pick a new placeholder.
    pub fn refresh_slot(&mut self, slot: SlotId) {
        self.slots.refresh(slot, &mut self.rng);
    }

    /// Activate `template`; overrides, selection and gestures start over.
    pub fn switch_template(&mut self, template: TemplateId) {
        self.set_mode(RenderMode::Infographic(template));
    }

    /// Switch between infographic and subtitle-stitch, or between templates.
    pub fn set_mode(&mut self, mode: RenderMode) {
        tracing::debug!(from = ?self.mode, to = ?mode, "switch mode");
        self.mode = mode;
        self.composition = VisualComposition::new();
        self.selection = None;
        self.gestures.clear();
        self.draft = None;
    }

    pub fn render(&self, summary: &Summary, source: &SourceDescriptor) -> VisualTree {
        render_scene(&RenderInput {
            summary,
            source,
            mode: self.mode,
            style: &self.style,
            slots: &self.slots,
            composition: &self.composition,
            canvas: self.opts.canvas,
        })
    }

    /// Render and hand the tree to `adapter`. Editor state is unchanged whatever the outcome.
    pub fn export(
        &self,
        summary: &Summary,
        source: &SourceDescriptor,
        adapter: &dyn ExportAdapter,
    ) -> CardResult<ExportedImage> {
        let tree = self.render(summary, source);
        adapter.export(&tree).inspect_err(|e| {
            tracing::warn!(error = %e, "export failed");
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/editor/session.rs"]
mod tests;
