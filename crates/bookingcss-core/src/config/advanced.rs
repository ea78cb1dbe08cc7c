use serde::{Deserialize, Serialize};

/// Named switches, each bound to one canned CSS block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AdvancedToggles {
    /// Dark-theme compatibility for hosts with dark page backgrounds.
    pub dark_theme: bool,
    /// Keeps the discount-code button the same height as its input.
    pub discount_button_fix: bool,
    pub plugin_margin_fix: bool,
    /// Margin applied by the plugin margin fix; `0` when unset.
    pub plugin_margin: Option<String>,
    pub auto_expand_description: bool,
    pub contact_guide_alignment: bool,
    pub mobile_checkout_title_color: bool,
    /// Color used by the mobile checkout title fix; the heading color when unset.
    pub mobile_checkout_title_color_value: Option<String>,
}

/// A raw selector/property pair the structured model does not cover.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CustomSnippet {
    pub id: String,
    pub name: String,
    pub selector: String,
    /// Declaration text placed inside the rule braces.
    pub properties: String,
}

impl CustomSnippet {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        selector: impl Into<String>,
        properties: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            selector: selector.into(),
            properties: properties.into(),
        }
    }
}
