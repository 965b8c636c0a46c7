//! Boundaries to the external generative-AI service.
//!
//! All three calls are fire-and-await; there is no timeout at this layer and no cancellation.

use async_trait::async_trait;

use crate::foundation::error::CardResult;
use crate::source::descriptor::{SearchProvider, SearchResult, SourceKind};
use crate::summary::model::Summary;

pub(crate) mod config;
pub(crate) mod http;
pub(crate) mod prompt;
pub(crate) mod response;

/// Raw text + source kind in, [`Summary`] out.
///
/// Implementations return [`crate::CardError::Gateway`] for network failures, empty input and
/// payloads that do not parse as a complete summary. A partial summary is never returned.
#[async_trait]
pub trait SummarizationGateway: Send + Sync {
    /// Condense `raw_text` into a summary.
    async fn summarize(&self, raw_text: &str, kind: SourceKind) -> CardResult<Summary>;
}

/// Query + provider in, ordered results out.
///
/// Failure is signalled by an empty list, never by an error.
#[async_trait]
pub trait SearchGateway: Send + Sync {
    /// Search `provider` for `query`.
    async fn search(&self, query: &str, provider: SearchProvider) -> Vec<SearchResult>;
}

/// Checks whether a credential can be used against the service.
#[async_trait]
pub trait CredentialValidator: Send + Sync {
    /// `true` when a trial call with `credential` succeeds.
    async fn validate(&self, credential: &str) -> bool;
}
