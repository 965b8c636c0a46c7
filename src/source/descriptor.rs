use std::collections::BTreeSet;

use crate::summary::model::Summary;

/// Which intake path produced the raw text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SourceKind {
    /// Video description and/or a local video file.
    Video,
    /// Uploaded images plus caption.
    Images,
    /// Selected search results.
    Search,
}

impl SourceKind {
    /// Lower-case label used in prompts and logs.
    pub fn label(self) -> &'static str {
        match self {
            SourceKind::Video => "video",
            SourceKind::Images => "images",
            SourceKind::Search => "search",
        }
    }
}

/// Search backend the user picked for SEARCH intake.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SearchProvider {
    /// Posts on X.
    X,
    /// YouTube videos.
    Youtube,
    /// General web pages.
    #[default]
    Web,
}

impl SearchProvider {
    /// Human-readable provider name.
    pub fn name(self) -> &'static str {
        match self {
            SearchProvider::X => "X",
            SearchProvider::Youtube => "YouTube",
            SearchProvider::Web => "Web",
        }
    }
}

/// Reference to an image: a local path, a `data:` URI, or a remote URL.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct ImageRef(pub String);

impl ImageRef {
    /// Wrap a reference string.
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Borrow the raw reference.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `true` for `http://` / `https://` references, which cannot be exported.
    pub fn is_remote(&self) -> bool {
        let s = self.0.trim_start();
        s.starts_with("http://") || s.starts_with("https://")
    }

    /// `true` for inline `data:` URIs.
    pub fn is_data_uri(&self) -> bool {
        self.0.trim_start().starts_with("data:")
    }
}

/// Local video file picked on the VIDEO path.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MediaRef {
    /// Display file name.
    pub file_name: String,
    /// Size in bytes, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_bytes: Option<u64>,
}

/// One search hit returned by the search-results gateway.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    /// Stable id used for selection.
    pub id: String,
    /// Result title.
    pub title: String,
    /// Short excerpt.
    #[serde(default)]
    pub snippet: String,
    /// Link to the original.
    #[serde(default)]
    pub url: String,
    /// Where it came from, e.g. `"@handle"` or a site name.
    #[serde(default)]
    pub source_label: String,
}

/// Where the raw input came from.
///
/// Created once per wizard run at the intake stage and read-only afterwards.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SourceDescriptor {
    /// Video description with optional local media.
    Video {
        /// Free-form description typed by the user.
        description: String,
        /// Optional uploaded video file.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        media: Option<MediaRef>,
        /// Thumbnail extracted from the media, when available.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        thumbnail: Option<ImageRef>,
    },
    /// Ordered images with a caption.
    Images {
        /// Uploaded images in order.
        images: Vec<ImageRef>,
        /// Caption text.
        #[serde(default)]
        caption: String,
    },
    /// Search query with the chosen provider and selected result ids.
    Search {
        /// Query text.
        query: String,
        /// Provider searched.
        provider: SearchProvider,
        /// Ids of the selected results.
        selected_ids: BTreeSet<String>,
    },
}

impl SourceDescriptor {
    /// Discriminant of this descriptor.
    pub fn kind(&self) -> SourceKind {
        match self {
            SourceDescriptor::Video { .. } => SourceKind::Video,
            SourceDescriptor::Images { .. } => SourceKind::Images,
            SourceDescriptor::Search { .. } => SourceKind::Search,
        }
    }

    /// Default image for a slot of the given `rank` (0 = primary), derived from the source.
    ///
    /// IMAGES uses the uploaded image at `rank`; VIDEO only seeds the primary slot from its
    /// thumbnail; SEARCH uses the summary's supplementary images.
    pub fn default_image(&self, rank: usize, summary: &Summary) -> Option<ImageRef> {
        match self {
            SourceDescriptor::Images { images, .. } => images.get(rank).cloned(),
            SourceDescriptor::Video { thumbnail, .. } => {
                if rank == 0 {
                    thumbnail.clone()
                } else {
                    None
                }
            }
            SourceDescriptor::Search { .. } => summary.supplementary_image(rank).map(ImageRef::new),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/source/descriptor.rs"]
mod tests;
