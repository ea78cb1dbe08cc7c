//! Property-based tests for the generator and importer.

use bookingcss_core::{generate, parse, ButtonType, ParseStatus, StyleConfig};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

fn hex_color() -> impl Strategy<Value = String> {
    "#[0-9a-f]{6}"
}

fn maybe_color() -> impl Strategy<Value = Option<String>> {
    prop::option::of(hex_color())
}

fn button_type() -> impl Strategy<Value = Option<ButtonType>> {
    prop::option::of(prop_oneof![Just(ButtonType::Solid), Just(ButtonType::Outlined)])
}

fn config_strategy() -> impl Strategy<Value = StyleConfig> {
    (
        (maybe_color(), maybe_color(), maybe_color(), maybe_color()),
        (maybe_color(), maybe_color(), maybe_color()),
        (button_type(), button_type(), maybe_color(), maybe_color()),
        (any::<bool>(), any::<bool>(), any::<bool>()),
    )
        .prop_map(|(palette, elements, buttons, toggles)| {
            let mut c = StyleConfig::new();
            (c.colors.body, c.colors.heading, c.colors.button, c.colors.hover) = palette;
            (c.inputs.background, c.lists.border_color, c.dividers.color) = elements;
            (
                c.buttons.primary_type,
                c.buttons.secondary_type,
                c.buttons.primary_text_color,
                c.buttons.hover_border_color,
            ) = buttons;
            (c.advanced.dark_theme, c.modals.dark_mode, c.advanced.plugin_margin_fix) = toggles;
            c
        })
}

/// Fragments of CSS-like text, so the tokenizer sees nesting and at-rules
/// rather than pure noise.
fn css_soup() -> impl Strategy<Value = String> {
    let fragment = prop::sample::select(vec![
        "{",
        "}",
        ";",
        ":root",
        ".button",
        "@media (max-width: 768px)",
        "@import url(",
        "@font-face",
        "/* ===== Custom CSS Snippets ===== */",
        "/*",
        "*/",
        "border: 1px solid",
        "--color-button: #fff",
    ])
    .prop_map(str::to_string);
    let piece = prop_oneof![fragment, "[ -~]{0,12}", "\\PC{0,4}"];
    prop::collection::vec(piece, 0..40).prop_map(|pieces| pieces.join(" "))
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// Arbitrary text never panics the importer.
    #[test]
    fn parse_never_panics(css in "\\PC{0,400}") {
        let outcome = parse(&css);
        if css.trim().is_empty() {
            prop_assert_eq!(outcome.status, ParseStatus::Error);
        } else {
            prop_assert!(outcome.recovered.is_some());
        }
    }

    /// CSS-shaped noise never panics the importer either.
    #[test]
    fn parse_survives_css_soup(css in css_soup()) {
        let outcome = parse(&css);
        prop_assert_eq!(
            outcome.status == ParseStatus::Success,
            outcome.updated_field_count > 0
        );
    }

    /// Generated stylesheets never contain an empty rule body.
    #[test]
    fn generated_rules_have_bodies(config in config_strategy()) {
        let css = generate(&config);
        prop_assert!(!css.contains("{\n}"), "output contains an empty block");
        prop_assert!(!css.contains("{\n  }"), "output contains an empty block");
    }

    /// Importing generated CSS never invents custom snippets.
    #[test]
    fn roundtrip_adds_no_snippets(config in config_strategy()) {
        let css = generate(&config);
        let outcome = parse(&css);
        if let Some(recovered) = outcome.recovered {
            prop_assert!(recovered.custom_snippets.is_empty());
        }
    }

    /// Palette colors come back unchanged.
    #[test]
    fn roundtrip_keeps_palette(config in config_strategy()) {
        let css = generate(&config);
        let outcome = parse(&css);
        let recovered = outcome.recovered.unwrap_or_default();
        prop_assert_eq!(recovered.colors.body, config.colors.body);
        prop_assert_eq!(recovered.colors.heading, config.colors.heading);
        prop_assert_eq!(recovered.colors.button, config.colors.button);
        prop_assert_eq!(recovered.colors.hover, config.colors.hover);
    }
}
