//! Colors and text settings.

use serde::{Deserialize, Serialize};

use super::present;

/// Theme colors. Each entry is unset or a CSS color literal (including
/// `transparent`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ColorPalette {
    pub body: Option<String>,
    pub heading: Option<String>,
    pub link: Option<String>,
    pub button: Option<String>,
    pub hover: Option<String>,
    pub brand: Option<String>,
    pub background: Option<String>,
    pub title_override: Option<String>,
    pub subtitle_override: Option<String>,
}

/// Text settings for one role (body, headings or buttons).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TextRole {
    pub family: Option<String>,
    pub weight: Option<String>,
    pub transform: Option<String>,
    pub line_height: Option<String>,
    pub size: Option<String>,
    pub letter_spacing: Option<String>,
}

impl TextRole {
    /// True when any field of the role carries a value.
    pub fn is_set(&self) -> bool {
        [
            &self.family,
            &self.weight,
            &self.transform,
            &self.line_height,
            &self.size,
            &self.letter_spacing,
        ]
        .into_iter()
        .any(|field| present(field).is_some())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Typography {
    pub body: TextRole,
    pub heading: TextRole,
    pub button: TextRole,
    pub title_size: Option<String>,
    pub title_size_mobile: Option<String>,
    pub subtitle_size: Option<String>,
    pub subtitle_size_mobile: Option<String>,
    /// Underline every link inside the widget.
    pub link_underline: bool,
    pub checkout_heading_size: Option<String>,
}
