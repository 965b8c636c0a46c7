use crate::foundation::core::{Point, Vec2};

/// Pointer lifecycle for one element.
///
/// ```text
/// Idle -> Dragging -> Idle (release commits, cancel restores)
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        /// Pointer position at press.
        origin: Point,
        /// Element offset when the press happened.
        base: Vec2,
        /// Offset currently shown.
        live: Vec2,
    },
}

/// What one gesture step asks the composition to do.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "effect", rename_all = "snake_case")]
pub enum DragEffect {
    Started,
    /// Show `delta` while the pointer is down.
    Moved { delta: Vec2 },
    /// Store `delta` as the element's offset.
    Committed { delta: Vec2 },
    /// Put the element back at `delta`.
    Canceled { delta: Vec2 },
    Noop,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DragGesture {
    state: DragState,
}

impl DragGesture {
    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Press at `pointer` on an element currently offset by `base`.
    pub fn press(&mut self, pointer: Point, base: Vec2) -> DragEffect {
        if self.is_dragging() {
            return DragEffect::Noop;
        }
        self.state = DragState::Dragging {
            origin: pointer,
            base,
            live: base,
        };
        DragEffect::Started
    }

    pub fn move_to(&mut self, pointer: Point) -> DragEffect {
        match &mut self.state {
            DragState::Idle => DragEffect::Noop,
            DragState::Dragging { origin, base, live } => {
                *live = *base + (pointer - *origin);
                DragEffect::Moved { delta: *live }
            }
        }
    }

    /// Release at `pointer`; the committed offset replaces the previous one.
    pub fn release(&mut self, pointer: Point) -> DragEffect {
        let effect = match self.move_to(pointer) {
            DragEffect::Moved { delta } => DragEffect::Committed { delta },
            other => other,
        };
        self.state = DragState::Idle;
        effect
    }

    pub fn cancel(&mut self) -> DragEffect {
        let effect = match self.state {
            DragState::Idle => DragEffect::Noop,
            DragState::Dragging { base, .. } => DragEffect::Canceled { delta: base },
        };
        self.state = DragState::Idle;
        effect
    }
}

#[cfg(test)]
#[path = "../../tests/unit/editor/drag.rs"]
mod tests;
