use crate::foundation::error::{CardError, CardResult};
use crate::source::descriptor::SearchResult;
use crate::summary::model::Summary;

/// Remove an incidental Markdown code fence around a payload.
///
/// The first fenced block wins, wherever it starts, so a short prose lead-in is dropped. The
/// info string (`json`) is dropped whether or not a newline follows it. Text that already
/// starts as a JSON value is returned trimmed, fences inside it untouched.
pub fn strip_code_fences(text: &str) -> &str {
    let t = text.trim();
    if t.starts_with(['{', '[']) {
        return t;
    }
    let Some(open) = t.find("```") else {
        return t;
    };
    let rest = &t[open + 3..];
    let info = rest
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '-' || c == '_'))
        .unwrap_or(rest.len());
    let body = &rest[info..];
    let body = match body.find("```") {
        Some(close) => &body[..close],
        None => body,
    };
    body.trim()
}

/// Parse a gateway reply into a [`Summary`].
///
/// The reply must be a JSON object with every summary field present and non-empty key points
/// and quotes; anything else is a gateway failure.
pub fn parse_summary_response(text: &str) -> CardResult<Summary> {
    let body = strip_code_fences(text);
    if body.is_empty() {
        return Err(CardError::gateway("empty response"));
    }
    let value: serde_json::Value = serde_json::from_str(body)
        .map_err(|e| CardError::gateway(format!("response is not JSON: {e}")))?;
    if !value.is_object() {
        return Err(CardError::gateway("response is not a JSON object"));
    }
    let summary: Summary = serde_json::from_value(value)
        .map_err(|e| CardError::gateway(format!("response has unexpected shape: {e}")))?;
    summary
        .validate()
        .map_err(|e| CardError::gateway(format!("incomplete summary: {e}")))?;
    Ok(summary)
}

/// Parse a search reply into results; any malformed payload yields an empty list.
///
/// Accepts either a bare array or an object with a `results` array. Results without an id get a
/// positional one; duplicate ids keep the first occurrence.
pub fn parse_search_response(text: &str) -> Vec<SearchResult> {
    let body = strip_code_fences(text);
    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        return Vec::new();
    };
    let items = match value {
        serde_json::Value::Array(items) => items,
        serde_json::Value::Object(mut obj) => match obj.remove("results") {
            Some(serde_json::Value::Array(items)) => items,
            _ => return Vec::new(),
        },
        _ => return Vec::new(),
    };

    let mut seen = std::collections::HashSet::new();
    let mut out = Vec::with_capacity(items.len());
    for (idx, mut item) in items.into_iter().enumerate() {
        if let Some(obj) = item.as_object_mut()
            && !obj.get("id").is_some_and(|v| v.is_string())
        {
            let id = match obj.get("id") {
                Some(serde_json::Value::Number(n)) => n.to_string(),
                _ => format!("r{idx}"),
            };
            obj.insert("id".to_string(), serde_json::Value::String(id));
        }
        let Ok(result) = serde_json::from_value::<SearchResult>(item) else {
            continue;
        };
        if result.title.trim().is_empty() {
            continue;
        }
        if seen.insert(result.id.clone()) {
            out.push(result);
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/gateway/response.rs"]
mod tests;
