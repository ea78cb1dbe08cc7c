//! Per-element style groups: buttons, inputs, modals, lists and the rest of
//! the widget chrome.

use serde::{Deserialize, Serialize};

use crate::color::{is_transparent, is_zero_alpha};

/// How a button paints its background.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonType {
    /// Filled with the button color.
    #[default]
    Solid,
    /// Transparent background with a visible border.
    Outlined,
}

impl ButtonType {
    /// Infers the button type from a CSS background value.
    ///
    /// `transparent` and zero-alpha `rgba(0,0,0,0)` (in any spacing) are
    /// outlined; every other value is solid.
    pub fn from_background(value: &str) -> Self {
        if is_transparent(value) || is_zero_alpha(value) {
            ButtonType::Outlined
        } else {
            ButtonType::Solid
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ButtonType::Solid => "solid",
            ButtonType::Outlined => "outlined",
        }
    }
}

/// Primary and secondary buttons, their hover states, and the purchase
/// button height.
///
/// Border color fields accept the `"button"` sentinel, which renders as the
/// button color variable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ButtonStyles {
    pub primary_type: Option<ButtonType>,
    pub primary_text_color: Option<String>,
    pub primary_border_width: Option<String>,
    pub primary_border_style: Option<String>,
    pub primary_border_color: Option<String>,
    pub primary_radius: Option<String>,
    pub primary_transition: Option<String>,
    pub primary_hover_type: Option<ButtonType>,
    pub hover_color: Option<String>,
    pub hover_border_color: Option<String>,

    pub secondary_type: Option<ButtonType>,
    pub secondary_text_color: Option<String>,
    pub secondary_border_width: Option<String>,
    pub secondary_border_style: Option<String>,
    pub secondary_border_color: Option<String>,
    pub secondary_radius: Option<String>,
    pub secondary_hover_type: Option<ButtonType>,
    pub secondary_hover_color: Option<String>,
    pub secondary_hover_border_color: Option<String>,

    pub purchase_height: Option<String>,
}

/// Experience-list buttons on small screens.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MobileButtonStyles {
    pub font_size: Option<String>,
    pub padding: Option<String>,
    pub width: Option<String>,
    pub height: Option<String>,
    pub radius: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InputStyles {
    pub background: Option<String>,
    pub text_color: Option<String>,
    pub border_width: Option<String>,
    pub border_style: Option<String>,
    pub border_color: Option<String>,
    pub radius: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ModalStyles {
    pub background: Option<String>,
    pub text_color: Option<String>,
    pub radius: Option<String>,
    /// Adds light-on-dark fixes for modal chrome.
    pub dark_mode: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ListStyles {
    pub background: Option<String>,
    pub text_color: Option<String>,
    pub border_width: Option<String>,
    pub border_style: Option<String>,
    pub border_color: Option<String>,
    pub radius: Option<String>,
}

/// Border of the experience cards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CardStyles {
    pub border_width: Option<String>,
    pub border_style: Option<String>,
    pub border_color: Option<String>,
    pub radius: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AtAGlanceStyles {
    /// Background of every even row in the at-a-glance table.
    pub zebra_color: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DividerStyles {
    pub width: Option<String>,
    pub style: Option<String>,
    pub color: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CheckoutSummaryStyles {
    pub background: Option<String>,
    pub divider_color: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_type_from_background() {
        assert_eq!(ButtonType::from_background("transparent"), ButtonType::Outlined);
        assert_eq!(ButtonType::from_background(" Transparent "), ButtonType::Outlined);
        assert_eq!(ButtonType::from_background("rgba(0,0,0,0)"), ButtonType::Outlined);
        assert_eq!(ButtonType::from_background("rgba( 0, 0, 0, 0 )"), ButtonType::Outlined);
        assert_eq!(ButtonType::from_background("#3D57FF"), ButtonType::Solid);
        assert_eq!(ButtonType::from_background("rgba(0,0,0,0.5)"), ButtonType::Solid);
        assert_eq!(ButtonType::from_background("var(--color-button)"), ButtonType::Solid);
    }

    #[test]
    fn test_button_type_serde() {
        let styles: ButtonStyles =
            serde_json::from_str(r#"{"primaryHoverType": "outlined"}"#).unwrap();
        assert_eq!(styles.primary_hover_type, Some(ButtonType::Outlined));
        assert_eq!(styles.primary_type, None);
    }
}
