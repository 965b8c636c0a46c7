//! The three intake paths. Each one validates its own input and yields a [`Submission`].

use std::collections::BTreeSet;

use crate::foundation::error::{CardError, CardResult};
use crate::gateway::SearchGateway;
use crate::i18n::Notice;
use crate::source::descriptor::{
    ImageRef, MediaRef, SearchProvider, SearchResult, SourceDescriptor, SourceKind,
};

/// A validated source descriptor paired with its non-empty raw text payload.
///
/// Only the intake builders construct one, so holding a `Submission` means validation passed.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    source: SourceDescriptor,
    raw_text: String,
}

impl Submission {
    fn new(source: SourceDescriptor, raw_text: String) -> CardResult<Self> {
        if raw_text.trim().is_empty() {
            return Err(CardError::validation("raw text payload is empty"));
        }
        Ok(Self { source, raw_text })
    }

    pub fn source(&self) -> &SourceDescriptor {
        &self.source
    }

    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    pub fn kind(&self) -> SourceKind {
        self.source.kind()
    }

    pub(crate) fn into_source(self) -> SourceDescriptor {
        self.source
    }
}

/// VIDEO path: a description and/or a local video file.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VideoIntake {
    pub description: String,
    pub media: Option<MediaRef>,
    pub thumbnail: Option<ImageRef>,
}

impl VideoIntake {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            ..Self::default()
        }
    }

    pub fn with_media(mut self, media: MediaRef, thumbnail: Option<ImageRef>) -> Self {
        self.media = Some(media);
        self.thumbnail = thumbnail;
        self
    }

    /// Requires a description or an uploaded file.
    pub fn submit(&self) -> CardResult<Submission> {
        let description = self.description.trim();
        if description.is_empty() && self.media.is_none() {
            return Err(CardError::Intake(Notice::VideoInputMissing));
        }
        let mut raw = description.to_string();
        if let Some(media) = &self.media {
            if !raw.is_empty() {
                raw.push_str("\n\n");
            }
            raw.push_str(&format!("[Video file: {}]", media.file_name));
        }
        Submission::new(
            SourceDescriptor::Video {
                description: description.to_string(),
                media: self.media.clone(),
                thumbnail: self.thumbnail.clone(),
            },
            raw,
        )
    }
}

/// IMAGES path: ordered uploads plus a caption.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ImagesIntake {
    pub images: Vec<ImageRef>,
    pub caption: String,
}

impl ImagesIntake {
    pub fn new(images: Vec<ImageRef>, caption: impl Into<String>) -> Self {
        Self {
            images,
            caption: caption.into(),
        }
    }

    /// Requires at least one image or caption text.
    pub fn submit(&self) -> CardResult<Submission> {
        let caption = self.caption.trim();
        if caption.is_empty() && self.images.is_empty() {
            return Err(CardError::Intake(Notice::ImagesInputMissing));
        }
        let mut raw = caption.to_string();
        if !self.images.is_empty() {
            if !raw.is_empty() {
                raw.push_str("\n\n");
            }
            raw.push_str(&format!("[{} images attached]", self.images.len()));
        }
        Submission::new(
            SourceDescriptor::Images {
                images: self.images.clone(),
                caption: caption.to_string(),
            },
            raw,
        )
    }
}

/// SEARCH path: query, provider, fetched results and the user's selection.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchIntake {
    pub query: String,
    pub provider: SearchProvider,
    results: Vec<SearchResult>,
    selected: BTreeSet<String>,
}

impl SearchIntake {
    pub fn new(query: impl Into<String>, provider: SearchProvider) -> Self {
        Self {
            query: query.into(),
            provider,
            ..Self::default()
        }
    }

    /// Fetch results for the current query, replacing earlier results and selection.
    ///
    /// An empty list from the gateway is reported as [`Notice::SearchNoResults`].
    #[tracing::instrument(skip(self, gateway), fields(provider = self.provider.name()))]
    pub async fn search(&mut self, gateway: &dyn SearchGateway) -> CardResult<&[SearchResult]> {
        let query = self.query.trim();
        if query.is_empty() {
            return Err(CardError::Intake(Notice::SearchQueryMissing));
        }
        self.results = gateway.search(query, self.provider).await;
        self.selected.clear();
        tracing::debug!(count = self.results.len(), "search results");
        if self.results.is_empty() {
            return Err(CardError::Intake(Notice::SearchNoResults));
        }
        Ok(&self.results)
    }

    /// Install results directly (restored drafts, tests).
    pub fn set_results(&mut self, results: Vec<SearchResult>) {
        self.results = results;
        self.selected.retain(|id| self.results.iter().any(|r| &r.id == id));
    }

    pub fn results(&self) -> &[SearchResult] {
        &self.results
    }

    pub fn selected(&self) -> &BTreeSet<String> {
        &self.selected
    }

    /// Flip selection of `id`; ids not present in the results are ignored.
    pub fn toggle(&mut self, id: &str) -> bool {
        if !self.results.iter().any(|r| r.id == id) {
            return false;
        }
        if !self.selected.remove(id) {
            self.selected.insert(id.to_string());
        }
        true
    }

    /// Requires at least one selected result, whatever the query says.
    pub fn submit(&self) -> CardResult<Submission> {
        if self.selected.is_empty() {
            return Err(CardError::Intake(Notice::SearchSelectionMissing));
        }
        let mut raw = String::new();
        let q = self.query.trim();
        if !q.is_empty() {
            raw.push_str(&format!("Query: {q}\n"));
        }
        for (n, r) in self
            .results
            .iter()
            .filter(|r| self.selected.contains(&r.id))
            .enumerate()
        {
            raw.push_str(&format!("\n[{}] {}", n + 1, r.title));
            if !r.source_label.is_empty() {
                raw.push_str(&format!(" ({})", r.source_label));
            }
            if !r.snippet.is_empty() {
                raw.push_str(&format!("\n{}", r.snippet));
            }
            if !r.url.is_empty() {
                raw.push_str(&format!("\n{}", r.url));
            }
            raw.push('\n');
        }
        Submission::new(
            SourceDescriptor::Search {
                query: q.to_string(),
                provider: self.provider,
                selected_ids: self.selected.clone(),
            },
            raw,
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/source/intake.rs"]
mod tests;
