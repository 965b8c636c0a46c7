use crate::i18n::{Locale, Notice};

/// Convenience result type used across viralcard.
pub type CardResult<T> = Result<T, CardError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Every variant is recoverable: the wizard maps each one onto a [`Notice`] and stays in (or
/// returns to) an interactive step.
#[derive(thiserror::Error, Debug)]
pub enum CardError {
    /// Invalid user input, rejected before any state transition.
    #[error("validation error: {0}")]
    Validation(String),

    /// Intake submission rejected; carries the notice to show inline.
    #[error("intake rejected: {0:?}")]
    Intake(Notice),

    /// The summarization or search service failed or returned an unusable payload.
    #[error("gateway error: {0}")]
    Gateway(String),

    /// The supplied service credential was rejected.
    #[error("credential error: {0}")]
    Credential(String),

    /// Rasterizing the current composition failed.
    #[error("export error: {0}")]
    Export(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CardError {
    /// Build a [`CardError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`CardError::Gateway`] value.
    pub fn gateway(msg: impl Into<String>) -> Self {
        Self::Gateway(msg.into())
    }

    /// Build a [`CardError::Credential`] value.
    pub fn credential(msg: impl Into<String>) -> Self {
        Self::Credential(msg.into())
    }

    /// Build a [`CardError::Export`] value.
    pub fn export(msg: impl Into<String>) -> Self {
        Self::Export(msg.into())
    }

    /// Build a [`CardError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Notice shown to the user when this error reaches the UI boundary.
    pub fn notice(&self) -> Notice {
        match self {
            Self::Validation(_) => Notice::InvalidInput,
            Self::Intake(n) => *n,
            Self::Gateway(_) | Self::Serde(_) => Notice::SummarizeFailed,
            Self::Credential(_) => Notice::CredentialRejected,
            Self::Export(_) => Notice::ExportFailed,
            Self::Other(_) => Notice::Unexpected,
        }
    }

    /// Translated user-facing message for this error.
    pub fn user_message(&self, locale: Locale) -> &'static str {
        self.notice().text(locale)
    }
}

impl From<serde_json::Error> for CardError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serde(e.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
