use crate::foundation::math::{Rng64, hash_str};
use crate::source::descriptor::{ImageRef, SourceDescriptor, SourceKind};
use crate::summary::model::Summary;
use crate::template::scene::ResolvedImage;

/// Named image placeholder. Names are shared across templates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotId {
    Hero,
    Secondary,
    Tertiary,
    Accent,
}

impl SlotId {
    pub const ALL: [SlotId; 4] = [
        SlotId::Hero,
        SlotId::Secondary,
        SlotId::Tertiary,
        SlotId::Accent,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SlotId::Hero => "hero",
            SlotId::Secondary => "secondary",
            SlotId::Tertiary => "tertiary",
            SlotId::Accent => "accent",
        }
    }

    /// Position used to pick a source default (hero is 0).
    pub fn rank(self) -> usize {
        match self {
            SlotId::Hero => 0,
            SlotId::Secondary => 1,
            SlotId::Tertiary => 2,
            SlotId::Accent => 3,
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|slot| slot.name() == s)
    }
}

/// What "shuffle images" does with a slot that holds a user upload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShufflePolicy {
    /// Drop uploads, then reseed.
    ClearUploads,
    /// Leave uploaded slots untouched.
    KeepUploads,
}

impl ShufflePolicy {
    /// Policy used when none is configured: IMAGES runs clear uploads, the others keep them.
    pub fn for_kind(kind: SourceKind) -> Self {
        match kind {
            SourceKind::Images => ShufflePolicy::ClearUploads,
            SourceKind::Video | SourceKind::Search => ShufflePolicy::KeepUploads,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SlotState {
    pub upload: Option<ImageRef>,
    pub seed: u64,
    /// Cleared once the user shuffles or refreshes, so the placeholder shows instead.
    pub use_source_default: bool,
}

/// Per-slot image state for one editor session.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SlotBoard {
    /// Indexed by [`SlotId::rank`].
    slots: [SlotState; 4],
}

impl SlotBoard {
    /// Fresh board with seeds derived from `seed`.
    pub fn new(seed: u64) -> Self {
        let slots = SlotId::ALL.map(|slot| SlotState {
            upload: None,
            seed: seed ^ hash_str(slot.name()),
            use_source_default: true,
        });
        Self { slots }
    }

    pub fn state(&self, slot: SlotId) -> &SlotState {
        &self.slots[slot.rank()]
    }

    fn state_mut(&mut self, slot: SlotId) -> &mut SlotState {
        &mut self.slots[slot.rank()]
    }

    /// Upload > source default > seeded placeholder.
    pub fn resolve(
        &self,
        slot: SlotId,
        source: &SourceDescriptor,
        summary: &Summary,
    ) -> ResolvedImage {
        let state = self.state(slot);
        if let Some(image) = &state.upload {
            return ResolvedImage::Uploaded {
                image: image.clone(),
            };
        }
        if state.use_source_default
            && let Some(image) = source.default_image(slot.rank(), summary)
        {
            return ResolvedImage::SourceDefault { image };
        }
        ResolvedImage::Placeholder { seed: state.seed }
    }

    pub fn upload(&mut self, slot: SlotId, image: ImageRef) {
        self.state_mut(slot).upload = Some(image);
    }

    /// Clear the upload if there is one, otherwise pick a new placeholder seed.
    pub fn refresh(&mut self, slot: SlotId, rng: &mut Rng64) {
        let state = self.state_mut(slot);
        if state.upload.take().is_some() {
            return;
        }
        state.seed = next_distinct(rng, state.seed);
        state.use_source_default = false;
    }

    /// Reseed every slot the policy allows to change.
    pub fn shuffle(&mut self, policy: ShufflePolicy, rng: &mut Rng64) {
        for state in &mut self.slots {
            if state.upload.is_some() {
                match policy {
                    ShufflePolicy::KeepUploads => continue,
                    ShufflePolicy::ClearUploads => state.upload = None,
                }
            }
            state.seed = next_distinct(rng, state.seed);
            state.use_source_default = false;
        }
    }
}

fn next_distinct(rng: &mut Rng64, old: u64) -> u64 {
    loop {
        let s = rng.next_u64();
        if s != old {
            return s;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/template/slots.rs"]
mod tests;
