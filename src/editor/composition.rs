use std::collections::BTreeMap;

use crate::foundation::core::{Color, Vec2};
use crate::template::scene::ElementId;
use crate::template::style::FontFamily;

/// Per-element user override. Absent fields mean "template default".
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ElementOverride {
    /// Offset from the template position, as committed by the last drag.
    pub position_delta: Vec2,
    pub font_size: Option<f64>,
    pub color: Option<Color>,
    pub font_family: Option<FontFamily>,
    /// Set by delete; wins over every other field.
    pub hidden: bool,
}

/// Style edit routed to one element or to the global style.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StylePatch {
    pub font_size: Option<f64>,
    pub color: Option<Color>,
    pub font_family: Option<FontFamily>,
}

impl StylePatch {
    pub fn is_empty(&self) -> bool {
        self.font_size.is_none() && self.color.is_none() && self.font_family.is_none()
    }
}

/// Overrides layered on the active template, keyed by element id.
///
/// Created empty for every template and discarded on switch. There is no undo: a delete can
/// only be reversed by switching templates.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct VisualComposition {
    entries: BTreeMap<ElementId, ElementOverride>,
}

impl VisualComposition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, id: &ElementId) -> Option<&ElementOverride> {
        self.entries.get(id)
    }

    pub fn is_hidden(&self, id: &ElementId) -> bool {
        self.entries.get(id).is_some_and(|o| o.hidden)
    }

    pub fn position_delta(&self, id: &ElementId) -> Vec2 {
        self.entries
            .get(id)
            .map(|o| o.position_delta)
            .unwrap_or(Vec2::ZERO)
    }

    fn entry(&mut self, id: &ElementId) -> &mut ElementOverride {
        self.entries.entry(id.clone()).or_default()
    }

    /// Replace the element's offset with `delta`.
    pub fn set_position(&mut self, id: &ElementId, delta: Vec2) {
        self.entry(id).position_delta = delta;
    }

    pub fn hide(&mut self, id: &ElementId) {
        self.entry(id).hidden = true;
    }

    /// Merge `patch` into the element's record; a hidden element ignores it.
    pub fn restyle(&mut self, id: &ElementId, patch: StylePatch) -> bool {
        if patch.is_empty() || self.is_hidden(id) {
            return false;
        }
        let o = self.entry(id);
        if let Some(size) = patch.font_size.filter(|s| s.is_finite() && *s > 0.0) {
            o.font_size = Some(size);
        }
        if let Some(c) = patch.color {
            o.color = Some(c);
        }
        if let Some(f) = patch.font_family {
            o.font_family = Some(f);
        }
        true
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ElementId, &ElementOverride)> {
        self.entries.iter()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/editor/composition.rs"]
mod tests;
