use crate::foundation::error::{CardError, CardResult};
use crate::template::layout::LayoutFn;
use crate::template::layouts::{
    card_banner, cover, dossier, frosted_dashboard, glass_cards, literature_poster, magazine,
    note_app, polaroid, serif_timeline, terminal_neon,
};
use crate::template::slots::SlotId;
use crate::template::style::Palette;

/// Fixed set of infographic templates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateId {
    #[default]
    Cover,
    NoteApp,
    CardBanner,
    SerifTimeline,
    TerminalNeon,
    GlassCards,
    Polaroid,
    Magazine,
    Dossier,
    FrostedDashboard,
    LiteraturePoster,
}

impl TemplateId {
    pub const ALL: [TemplateId; 11] = [
        TemplateId::Cover,
        TemplateId::NoteApp,
        TemplateId::CardBanner,
        TemplateId::SerifTimeline,
        TemplateId::TerminalNeon,
        TemplateId::GlassCards,
        TemplateId::Polaroid,
        TemplateId::Magazine,
        TemplateId::Dossier,
        TemplateId::FrostedDashboard,
        TemplateId::LiteraturePoster,
    ];

    /// Stable kebab-case key, as used on the command line and in JSON.
    pub fn key(self) -> &'static str {
        match self {
            TemplateId::Cover => "cover",
            TemplateId::NoteApp => "note-app",
            TemplateId::CardBanner => "card-banner",
            TemplateId::SerifTimeline => "serif-timeline",
            TemplateId::TerminalNeon => "terminal-neon",
            TemplateId::GlassCards => "glass-cards",
            TemplateId::Polaroid => "polaroid",
            TemplateId::Magazine => "magazine",
            TemplateId::Dossier => "dossier",
            TemplateId::FrostedDashboard => "frosted-dashboard",
            TemplateId::LiteraturePoster => "literature-poster",
        }
    }

    pub fn parse(s: &str) -> CardResult<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.key().eq_ignore_ascii_case(s))
            .ok_or_else(|| CardError::validation(format!("unknown template \"{s}\"")))
    }

    pub fn entry(self) -> &'static TemplateEntry {
        &CATALOG[self as usize]
    }
}

/// Registry row: metadata plus the pure layout function.
pub struct TemplateEntry {
    pub id: TemplateId,
    pub name: &'static str,
    /// Image slots the layout shows, primary first.
    pub slots: &'static [SlotId],
    palette: fn() -> Palette,
    pub(crate) layout: LayoutFn,
}

impl TemplateEntry {
    pub fn palette(&self) -> Palette {
        (self.palette)()
    }
}

impl std::fmt::Debug for TemplateEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateEntry")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("slots", &self.slots)
            .finish_non_exhaustive()
    }
}

const HERO: &[SlotId] = &[SlotId::Hero];

// Order matches the `TemplateId` discriminants.
static CATALOG: [TemplateEntry; 11] = [
    TemplateEntry {
        id: TemplateId::Cover,
        name: "Cover",
        slots: HERO,
        palette: cover::palette,
        layout: cover::layout,
    },
    TemplateEntry {
        id: TemplateId::NoteApp,
        name: "Note App",
        slots: HERO,
        palette: note_app::palette,
        layout: note_app::layout,
    },
    TemplateEntry {
        id: TemplateId::CardBanner,
        name: "Card with Banner",
        slots: HERO,
        palette: card_banner::palette,
        layout: card_banner::layout,
    },
    TemplateEntry {
        id: TemplateId::SerifTimeline,
        name: "Serif Timeline",
        slots: &[],
        palette: serif_timeline::palette,
        layout: serif_timeline::layout,
    },
    TemplateEntry {
        id: TemplateId::TerminalNeon,
        name: "Terminal Neon",
        slots: HERO,
        palette: terminal_neon::palette,
        layout: terminal_neon::layout,
    },
    TemplateEntry {
        id: TemplateId::GlassCards,
        name: "Glass Cards",
        slots: HERO,
        palette: glass_cards::palette,
        layout: glass_cards::layout,
    },
    TemplateEntry {
        id: TemplateId::Polaroid,
        name: "Polaroid Collage",
        slots: &[SlotId::Hero, SlotId::Secondary, SlotId::Tertiary],
        palette: polaroid::palette,
        layout: polaroid::layout,
    },
    TemplateEntry {
        id: TemplateId::Magazine,
        name: "Magazine Spread",
        slots: HERO,
        palette: magazine::palette,
        layout: magazine::layout,
    },
    TemplateEntry {
        id: TemplateId::Dossier,
        name: "Dossier",
        slots: HERO,
        palette: dossier::palette,
        layout: dossier::layout,
    },
    TemplateEntry {
        id: TemplateId::FrostedDashboard,
        name: "Frosted Dashboard",
        slots: HERO,
        palette: frosted_dashboard::palette,
        layout: frosted_dashboard::layout,
    },
    TemplateEntry {
        id: TemplateId::LiteraturePoster,
        name: "Literature Poster",
        slots: HERO,
        palette: literature_poster::palette,
        layout: literature_poster::layout,
    },
];

/// All templates in display order.
pub fn catalog() -> &'static [TemplateEntry] {
    &CATALOG
}

#[cfg(test)]
#[path = "../../tests/unit/template/catalog.rs"]
mod tests;
