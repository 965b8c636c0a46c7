use crate::foundation::core::Color;
use crate::template::scene::Fill;

/// Font choices exposed in the style panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontFamily {
    Sans,
    Serif,
    Mono,
    Handwritten,
    Display,
}

impl FontFamily {
    pub const ALL: [FontFamily; 5] = [
        FontFamily::Sans,
        FontFamily::Serif,
        FontFamily::Mono,
        FontFamily::Handwritten,
        FontFamily::Display,
    ];

    /// CSS/SVG `font-family` stack, with CJK fallbacks.
    pub fn css_stack(self) -> &'static str {
        match self {
            FontFamily::Sans => {
                "'Inter', 'Helvetica Neue', Arial, 'Noto Sans CJK SC', 'PingFang SC', sans-serif"
            }
            FontFamily::Serif => {
                "'Playfair Display', Georgia, 'Times New Roman', 'Noto Serif CJK SC', serif"
            }
            FontFamily::Mono => "'JetBrains Mono', 'Fira Code', Menlo, Consolas, monospace",
            FontFamily::Handwritten => "'Caveat', 'Comic Sans MS', 'Noto Sans CJK SC', cursive",
            FontFamily::Display => "'Oswald', Impact, 'Arial Black', 'Noto Sans CJK SC', sans-serif",
        }
    }
}

/// Global style applied to every text block that does not carry its own override.
///
/// `None` fields fall back to the active template's palette.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StyleConfig {
    pub active_font_family: Option<FontFamily>,
    pub base_text_color: Option<Color>,
    pub highlight_color: Option<Color>,
    /// Multiplier on every template font size; `1.0` is the template default.
    pub font_scale: f64,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            active_font_family: None,
            base_text_color: None,
            highlight_color: None,
            font_scale: 1.0,
        }
    }
}

impl StyleConfig {
    /// Reference body size the style panel shows and edits.
    pub const BASE_FONT_SIZE: f64 = 16.0;

    pub fn font_size(&self) -> f64 {
        Self::BASE_FONT_SIZE * self.font_scale
    }

    /// Set the global size through the style panel's px value.
    pub fn set_font_size(&mut self, px: f64) {
        if px.is_finite() && px > 0.0 {
            self.font_scale = px / Self::BASE_FONT_SIZE;
        }
    }
}

/// Template defaults that global style can override.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    pub background: Fill,
    pub base_text: Color,
    pub highlight: Color,
    pub font: FontFamily,
}

/// Where a text block takes its color from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Paint {
    /// Global base color, else palette base.
    Base,
    /// Global highlight color, else palette highlight.
    Highlight,
    /// Fixed color; only a per-element override changes it.
    Fixed(Color),
}

/// Where a text block takes its typeface from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Typeface {
    /// Global active family, else palette font.
    Active,
    /// Fixed family; only a per-element override changes it.
    Fixed(FontFamily),
}

impl Palette {
    pub(crate) fn resolve_paint(&self, paint: Paint, style: &StyleConfig) -> Color {
        match paint {
            Paint::Base => style.base_text_color.unwrap_or(self.base_text),
            Paint::Highlight => style.highlight_color.unwrap_or(self.highlight),
            Paint::Fixed(c) => c,
        }
    }

    pub(crate) fn resolve_typeface(&self, face: Typeface, style: &StyleConfig) -> FontFamily {
        match face {
            Typeface::Active => style.active_font_family.unwrap_or(self.font),
            Typeface::Fixed(f) => f,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/template/style.rs"]
mod tests;
