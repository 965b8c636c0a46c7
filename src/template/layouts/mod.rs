pub(crate) mod card_banner;
pub(crate) mod cover;
pub(crate) mod dossier;
pub(crate) mod frosted_dashboard;
pub(crate) mod glass_cards;
pub(crate) mod literature_poster;
pub(crate) mod magazine;
pub(crate) mod note_app;
pub(crate) mod polaroid;
pub(crate) mod serif_timeline;
pub(crate) mod terminal_neon;
