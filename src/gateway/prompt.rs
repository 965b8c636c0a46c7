use crate::source::descriptor::{SearchProvider, SourceKind};

const OUTPUT_CONTRACT: &str = r#"
OUTPUT: Return ONLY a valid JSON object, no prose, no Markdown:
{
  "title": "Short, punchy headline",
  "coreIdea": "One paragraph with the central idea",
  "keyPoints": ["3 to 6 concise key points"],
  "goldenQuotes": [{"text": "Memorable quote", "timestampLabel": "MM:SS or empty"}],
  "supplementaryImageUrls": ["optional image URLs, may be omitted"]
}

RULES:
- keyPoints and goldenQuotes must each contain at least one entry
- Write in the same language as the input
- Keep every string free of Markdown
"#;

/// System prompt for summarizing input of `kind`.
pub(crate) fn summary_system_prompt(kind: SourceKind) -> String {
    let role = match kind {
        SourceKind::Video => {
            "You are a social-media editor. The input describes a video. Extract what makes it \
             worth sharing; use timestamps from the description for quote labels when present."
        }
        SourceKind::Images => {
            "You are a social-media editor. The input is a caption for a set of images. Infer \
             the story the images tell and condense it into a shareable summary. Quote labels \
             may be empty."
        }
        SourceKind::Search => {
            "You are a research editor. The input is a list of search results. Synthesize them \
             into one coherent summary and attribute quotes by source in the timestamp label."
        }
    };
    format!("{role}\n{OUTPUT_CONTRACT}")
}

/// System prompt for the search-results call.
pub(crate) fn search_system_prompt(provider: SearchProvider) -> String {
    format!(
        r#"You are a search assistant. Find up to 8 recent, relevant results on {name} for the
user's query.

OUTPUT: Return ONLY a valid JSON array:
[{{"id": "unique id", "title": "Result title", "snippet": "Short excerpt", "url": "https://...", "sourceLabel": "author or site"}}]
"#,
        name = provider.name()
    )
}
