pub(crate) mod catalog;
pub(crate) mod engine;
pub(crate) mod layout;
pub(crate) mod layouts;
pub(crate) mod scene;
pub(crate) mod slots;
pub(crate) mod stitch;
pub(crate) mod style;
pub(crate) mod text;
