pub(crate) mod composition;
pub(crate) mod drag;
pub(crate) mod session;
