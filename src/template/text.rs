use std::borrow::Cow;
use std::cell::RefCell;
use std::path::Path;

use crate::template::style::FontFamily;

const ELLIPSIS: char = '…';

/// Font parameters a text block is shaped with.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct FontSpec {
    pub family: FontFamily,
    pub size: f64,
    pub weight: u16,
    pub italic: bool,
}

impl FontSpec {
    pub(crate) fn new(family: FontFamily, size: f64) -> Self {
        Self {
            family,
            size,
            weight: 400,
            italic: false,
        }
    }
}

/// Parley contexts shared by every layout on this thread.
///
/// Fonts come from the system collection plus whatever [`register_fonts_dir`] added, the same
/// sources the exporter's fontdb loads, so the lines computed here are the lines resvg draws.
struct TextShaper {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<()>,
}

impl TextShaper {
    fn new() -> Self {
        Self {
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
        }
    }

    fn layout(&mut self, text: &str, font: &FontSpec, max_width: Option<f32>) -> parley::Layout<()> {
        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(Cow::Borrowed(font.family.css_stack())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(font.size as f32));
        builder.push_default(parley::style::StyleProperty::FontWeight(
            parley::style::FontWeight::new(f32::from(font.weight)),
        ));
        if font.italic {
            builder.push_default(parley::style::StyleProperty::FontStyle(
                parley::style::FontStyle::Italic,
            ));
        }
        let mut layout: parley::Layout<()> = builder.build(text);
        layout.break_all_lines(max_width);
        layout
    }

    fn measure(&mut self, text: &str, font: &FontSpec) -> f64 {
        f64::from(self.layout(text, font, None).width())
    }

    /// Shaped lines of `text` at `max_width`, with trailing whitespace and newlines removed.
    fn break_lines(&mut self, text: &str, font: &FontSpec, max_width: f64) -> Vec<String> {
        let layout = self.layout(text, font, Some(max_width as f32));
        layout
            .lines()
            .map(|line| {
                let range = line.text_range();
                text.get(range).unwrap_or_default().trim_end().to_string()
            })
            .collect()
    }

    fn register_font(&mut self, bytes: Vec<u8>) -> usize {
        self.font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(bytes), None)
            .len()
    }
}

thread_local! {
    static SHAPER: RefCell<TextShaper> = RefCell::new(TextShaper::new());
}

fn with_shaper<R>(f: impl FnOnce(&mut TextShaper) -> R) -> R {
    SHAPER.with(|s| f(&mut s.borrow_mut()))
}

/// Register every font file in `dir` for layout on the current thread.
///
/// Returns the number of families added; unreadable files are skipped.
pub(crate) fn register_fonts_dir(dir: &Path) -> usize {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return 0;
    };
    let mut added = 0;
    for entry in entries.filter_map(Result::ok) {
        let path = entry.path();
        let is_font = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| matches!(e.to_ascii_lowercase().as_str(), "ttf" | "otf" | "ttc"));
        if !is_font {
            continue;
        }
        match std::fs::read(&path) {
            Ok(bytes) => added += with_shaper(|s| s.register_font(bytes)),
            Err(e) => tracing::warn!(path = %path.display(), error = %e, "skipping font"),
        }
    }
    tracing::debug!(dir = %dir.display(), added, "registered layout fonts");
    added
}

/// Shaped advance width of `s` on one line.
pub(crate) fn measure(s: &str, font: &FontSpec) -> f64 {
    with_shaper(|shaper| shaper.measure(s, font))
}

/// Break `text` into lines no wider than `max_width`.
///
/// Break opportunities follow the Unicode line-breaking rules applied by parley; explicit `\n`
/// always starts a new line. A single cluster run wider than the frame is split by character.
/// When `max_lines` is exceeded the last kept line ends with an ellipsis.
pub(crate) fn wrap(
    text: &str,
    font: &FontSpec,
    max_width: f64,
    max_lines: Option<usize>,
) -> Vec<String> {
    with_shaper(|shaper| {
        let mut lines = Vec::new();
        for line in shaper.break_lines(text, font, max_width) {
            split_overlong(shaper, line, font, max_width, &mut lines);
        }
        while lines.len() > 1 && lines.last().is_some_and(|l| l.is_empty()) {
            lines.pop();
        }
        if lines.is_empty() {
            lines.push(String::new());
        }

        if let Some(max) = max_lines.filter(|&m| m > 0)
            && lines.len() > max
        {
            lines.truncate(max);
            if let Some(last) = lines.last_mut() {
                *last = with_ellipsis(shaper, last, font, max_width);
            }
        }
        lines
    })
}

fn split_overlong(
    shaper: &mut TextShaper,
    line: String,
    font: &FontSpec,
    max_width: f64,
    out: &mut Vec<String>,
) {
    if line.chars().count() < 2 || shaper.measure(&line, font) <= max_width {
        out.push(line);
        return;
    }
    let mut current = String::new();
    for c in line.chars() {
        current.push(c);
        if current.chars().count() > 1 && shaper.measure(&current, font) > max_width {
            current.pop();
            out.push(std::mem::take(&mut current));
            current.push(c);
        }
    }
    out.push(current);
}

fn with_ellipsis(shaper: &mut TextShaper, line: &str, font: &FontSpec, max_width: f64) -> String {
    let mut kept = line.trim_end().to_string();
    loop {
        let candidate = format!("{kept}{ELLIPSIS}");
        if kept.is_empty() || shaper.measure(&candidate, font) <= max_width {
            return candidate;
        }
        kept.pop();
        kept.truncate(kept.trim_end().len());
    }
}

#[cfg(test)]
#[path = "../../tests/unit/template/text.rs"]
mod tests;
