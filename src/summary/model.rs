use crate::foundation::error::{CardError, CardResult};
use crate::foundation::math::Rng64;

/// Structured summary produced by the summarization gateway and edited by the user.
///
/// Strings carry no length caps; templates truncate visually when they render.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// Headline.
    pub title: String,
    /// One-paragraph core idea.
    pub core_idea: String,
    /// Ordered key points; non-empty after a successful summarization.
    pub key_points: Vec<String>,
    /// Ordered quotes; non-empty after a successful summarization.
    pub golden_quotes: Vec<GoldenQuote>,
    /// Optional images suggested by the service (SEARCH intake mostly).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplementary_image_urls: Option<Vec<String>>,
}

/// A quote with a free-form timestamp label such as `"03:21"`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoldenQuote {
    /// Quote text.
    pub text: String,
    /// Position label in the source (may be empty).
    #[serde(default)]
    pub timestamp_label: String,
}

impl GoldenQuote {
    /// Build a quote.
    pub fn new(text: impl Into<String>, timestamp_label: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            timestamp_label: timestamp_label.into(),
        }
    }
}

/// Address of one editable text field inside a [`Summary`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(tag = "field", content = "index", rename_all = "snake_case")]
pub enum TextPath {
    /// [`Summary::title`].
    Title,
    /// [`Summary::core_idea`].
    CoreIdea,
    /// `key_points[i]`.
    KeyPoint(usize),
    /// `golden_quotes[i].text`.
    Quote(usize),
}

impl Summary {
    /// Check the post-summarization invariant: key points and quotes are present.
    pub fn validate(&self) -> CardResult<()> {
        if self.key_points.is_empty() {
            return Err(CardError::validation("summary keyPoints must be non-empty"));
        }
        if self.golden_quotes.is_empty() {
            return Err(CardError::validation(
                "summary goldenQuotes must be non-empty",
            ));
        }
        Ok(())
    }

    /// Borrow the text addressed by `path`, if it exists.
    pub fn text(&self, path: TextPath) -> Option<&str> {
        match path {
            TextPath::Title => Some(&self.title),
            TextPath::CoreIdea => Some(&self.core_idea),
            TextPath::KeyPoint(i) => self.key_points.get(i).map(String::as_str),
            TextPath::Quote(i) => self.golden_quotes.get(i).map(|q| q.text.as_str()),
        }
    }

    /// Overwrite the text addressed by `path`.
    pub fn set_text(&mut self, path: TextPath, value: impl Into<String>) -> CardResult<()> {
        let value = value.into();
        let slot = match path {
            TextPath::Title => &mut self.title,
            TextPath::CoreIdea => &mut self.core_idea,
            TextPath::KeyPoint(i) => self.key_points.get_mut(i).ok_or_else(|| {
                CardError::validation(format!("key point index {i} out of range"))
            })?,
            TextPath::Quote(i) => self
                .golden_quotes
                .get_mut(i)
                .map(|q| &mut q.text)
                .ok_or_else(|| CardError::validation(format!("quote index {i} out of range")))?,
        };
        *slot = value;
        Ok(())
    }

    /// Reorder key points pseudo-randomly.
    ///
    /// With two or more distinct points the order is guaranteed to change.
    pub fn shuffle_key_points(&mut self, rng: &mut Rng64) {
        if self.key_points.len() < 2 {
            return;
        }
        let before = self.key_points.clone();
        let all_same = before.windows(2).all(|w| w[0] == w[1]);
        loop {
            rng.shuffle(&mut self.key_points);
            if all_same || self.key_points != before {
                break;
            }
        }
    }

    /// First `n` key points.
    pub fn first_points(&self, n: usize) -> &[String] {
        &self.key_points[..self.key_points.len().min(n)]
    }

    /// First quote, if any.
    pub fn lead_quote(&self) -> Option<&GoldenQuote> {
        self.golden_quotes.first()
    }

    /// Supplementary image at `rank`, if the service suggested one.
    pub fn supplementary_image(&self, rank: usize) -> Option<&str> {
        self.supplementary_image_urls
            .as_ref()
            .and_then(|v| v.get(rank))
            .map(String::as_str)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/summary/model.rs"]
mod tests;
