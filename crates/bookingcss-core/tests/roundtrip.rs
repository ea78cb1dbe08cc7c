//! Generate-then-parse behavior over fully populated configurations.

use bookingcss_core::{
    generate, parse, parse_into, ButtonType, CustomSnippet, FontFamily, FontFile, FontSource,
    FontSourceKind, ParseStatus, StyleConfig,
};

fn s(value: &str) -> Option<String> {
    Some(value.to_string())
}

/// Every color field plus the three font families.
fn colorful_config() -> StyleConfig {
    let mut c = StyleConfig::new();

    c.colors.body = s("#333333");
    c.colors.heading = s("#111111");
    c.colors.link = s("#0066cc");
    c.colors.button = s("#3d57ff");
    c.colors.hover = s("#2a3fcc");
    c.colors.brand = s("#ff6600");
    c.colors.background = s("#fafafa");
    c.colors.title_override = s("#222222");
    c.colors.subtitle_override = s("#555555");

    c.typography.body.family = s("Inter");
    c.typography.heading.family = s("Playfair Display");
    c.typography.button.family = s("Roboto Mono");

    c.buttons.primary_type = Some(ButtonType::Outlined);
    c.buttons.primary_text_color = s("#101010");
    c.buttons.primary_border_color = s("#202020");
    c.buttons.hover_color = s("#ffffff");
    c.buttons.hover_border_color = s("#303030");
    c.buttons.secondary_type = Some(ButtonType::Outlined);
    c.buttons.secondary_text_color = s("#404040");
    c.buttons.secondary_border_color = s("#505050");
    c.buttons.secondary_hover_color = s("#606060");
    c.buttons.secondary_hover_border_color = s("#707070");

    c.inputs.background = s("#ffffff");
    c.inputs.text_color = s("#121212");
    c.inputs.border_color = s("#cccccc");

    c.modals.background = s("#fefefe");
    c.modals.text_color = s("#131313");

    c.lists.background = s("#f0f0f0");
    c.lists.text_color = s("#141414");
    c.lists.border_color = s("#dddddd");

    c.cards.border_color = s("button");
    c.at_a_glance.zebra_color = s("#f5f5f5");
    c.dividers.color = s("#eeeeee");
    c.checkout_summary.background = s("#f7f7f7");
    c.checkout_summary.divider_color = s("#e5e5e5");

    c.advanced.mobile_checkout_title_color = true;
    c.advanced.mobile_checkout_title_color_value = s("#151515");
    c
}

/// Everything else: fonts, sizes, toggles and snippets.
fn full_config() -> StyleConfig {
    let mut c = colorful_config();

    c.fonts = vec![
        FontSource::google(
            "google-fonts-1",
            "https://fonts.googleapis.com/css2?family=Inter:wght@400;700&display=swap",
        )
        .with_family(FontFamily::new("Inter").with_fallback("Arial")),
        FontSource::typekit("typekit-1", "https://use.typekit.net/abc1234.css"),
        FontSource::self_hosted("brand", FontFamily::new("Brand Sans").with_fallback("Arial"))
            .with_file(FontFile::new("/fonts/brand.woff2").with_weight("700")),
    ];

    c.typography.body.weight = s("400");
    c.typography.body.line_height = s("1.6");
    c.typography.heading.weight = s("700");
    c.typography.heading.transform = s("uppercase");
    c.typography.button.letter_spacing = s("0.05em");
    c.typography.title_size = s("32px");
    c.typography.title_size_mobile = s("24px");
    c.typography.subtitle_size = s("20px");
    c.typography.subtitle_size_mobile = s("16px");
    c.typography.checkout_heading_size = s("28px");
    c.typography.link_underline = true;

    c.buttons.primary_radius = s("6px");
    c.buttons.primary_transition = s("all 0.2s ease");
    c.buttons.purchase_height = s("48px");
    c.mobile_buttons.font_size = s("14px");
    c.mobile_buttons.width = s("100%");

    c.inputs.radius = s("4px");
    c.modals.radius = s("12px");
    c.modals.dark_mode = true;
    c.lists.radius = s("8px");
    c.cards.radius = s("10px");
    c.dividers.width = s("2px");
    c.dividers.style = s("dashed");

    c.advanced.dark_theme = true;
    c.advanced.discount_button_fix = true;
    c.advanced.plugin_margin_fix = true;
    c.advanced.plugin_margin = s("0 auto");
    c.advanced.auto_expand_description = true;
    c.advanced.contact_guide_alignment = true;

    c.custom_snippets = vec![
        CustomSnippet::new("snippet-1", "Promo banner", ".promo-banner", "display: none;"),
        CustomSnippet::new(
            "snippet-2",
            "Footer links",
            "#site-footer a",
            "color: #999;\ntext-decoration: none;",
        ),
    ];
    c
}

fn recovered(css: &str) -> StyleConfig {
    let outcome = parse(css);
    assert_eq!(outcome.status, ParseStatus::Success, "{}", outcome.message());
    outcome.recovered.expect("success carries a config")
}

#[test]
fn every_color_and_family_survives() {
    let original = colorful_config();
    let back = recovered(&generate(&original));

    assert_eq!(back.colors, original.colors);
    assert_eq!(back.typography.body.family, original.typography.body.family);
    assert_eq!(back.typography.heading.family, original.typography.heading.family);
    assert_eq!(back.typography.button.family, original.typography.button.family);

    let b = &back.buttons;
    assert_eq!(b.primary_type, Some(ButtonType::Outlined));
    assert_eq!(b.primary_text_color, original.buttons.primary_text_color);
    assert_eq!(b.primary_border_color, original.buttons.primary_border_color);
    assert_eq!(b.hover_color, original.buttons.hover_color);
    assert_eq!(b.hover_border_color, original.buttons.hover_border_color);
    assert_eq!(b.secondary_type, Some(ButtonType::Outlined));
    assert_eq!(b.secondary_text_color, original.buttons.secondary_text_color);
    assert_eq!(b.secondary_border_color, original.buttons.secondary_border_color);
    assert_eq!(b.secondary_hover_color, original.buttons.secondary_hover_color);
    assert_eq!(
        b.secondary_hover_border_color,
        original.buttons.secondary_hover_border_color
    );

    assert_eq!(back.inputs.background, original.inputs.background);
    assert_eq!(back.inputs.text_color, original.inputs.text_color);
    assert_eq!(back.inputs.border_color, original.inputs.border_color);
    assert_eq!(back.modals.background, original.modals.background);
    assert_eq!(back.modals.text_color, original.modals.text_color);
    assert_eq!(back.lists.background, original.lists.background);
    assert_eq!(back.lists.text_color, original.lists.text_color);
    assert_eq!(back.lists.border_color, original.lists.border_color);
    assert_eq!(back.cards.border_color.as_deref(), Some("button"));
    assert_eq!(back.at_a_glance.zebra_color, original.at_a_glance.zebra_color);
    assert_eq!(back.dividers.color, original.dividers.color);
    assert_eq!(back.checkout_summary, original.checkout_summary);
    assert!(back.advanced.mobile_checkout_title_color);
    assert_eq!(
        back.advanced.mobile_checkout_title_color_value,
        original.advanced.mobile_checkout_title_color_value
    );
}

#[test]
fn toggles_sizes_and_snippets_survive() {
    let original = full_config();
    let back = recovered(&generate(&original));

    assert_eq!(back.advanced, original.advanced);
    assert!(back.modals.dark_mode);
    assert!(back.typography.link_underline);
    assert_eq!(back.typography.title_size, original.typography.title_size);
    assert_eq!(back.typography.title_size_mobile, original.typography.title_size_mobile);
    assert_eq!(back.typography.subtitle_size, original.typography.subtitle_size);
    assert_eq!(
        back.typography.subtitle_size_mobile,
        original.typography.subtitle_size_mobile
    );
    assert_eq!(
        back.typography.checkout_heading_size,
        original.typography.checkout_heading_size
    );
    assert_eq!(back.typography.heading.transform.as_deref(), Some("uppercase"));
    assert_eq!(back.buttons.purchase_height.as_deref(), Some("48px"));
    assert_eq!(back.buttons.primary_transition.as_deref(), Some("all 0.2s ease"));
    assert_eq!(back.mobile_buttons, original.mobile_buttons);
    assert_eq!(back.dividers, original.dividers);

    let snippets: Vec<_> = back
        .custom_snippets
        .iter()
        .map(|s| (s.name.as_str(), s.selector.as_str(), s.properties.as_str()))
        .collect();
    assert_eq!(
        snippets,
        vec![
            ("Promo banner", ".promo-banner", "display: none;"),
            ("Footer links", "#site-footer a", "color: #999;\ntext-decoration: none;"),
        ]
    );
}

#[test]
fn font_sources_are_recovered() {
    let back = recovered(&generate(&full_config()));

    let kinds: Vec<_> = back.fonts.iter().map(|f| f.kind).collect();
    assert_eq!(
        kinds,
        vec![
            FontSourceKind::GoogleFonts,
            FontSourceKind::AdobeTypekit,
            FontSourceKind::SelfHosted
        ]
    );
    assert_eq!(back.fonts[0].primary_family(), Some("Inter"));
    assert_eq!(back.fonts[2].primary_family(), Some("Brand Sans"));
    assert_eq!(back.fonts[2].files[0].url, "/fonts/brand.woff2");
    assert_eq!(back.fonts[2].files[0].weight.as_deref(), Some("700"));
    assert!(back.validate().is_ok());
}

#[test]
fn generated_css_yields_no_extra_snippets() {
    let back = recovered(&generate(&colorful_config()));
    assert!(back.custom_snippets.is_empty(), "{:?}", back.custom_snippets);

    let full = full_config();
    let back = recovered(&generate(&full));
    assert_eq!(back.custom_snippets.len(), full.custom_snippets.len());
}

#[test]
fn regenerating_recovered_config_is_stable() {
    for original in [colorful_config(), full_config()] {
        let css = generate(&original);
        let again = generate(&recovered(&css));
        assert_eq!(again, css);
    }
}

#[test]
fn reimport_over_recovered_config_does_not_duplicate() {
    let css = generate(&full_config());
    let first = recovered(&css);
    let second = parse_into(&css, &first)
        .recovered
        .expect("success carries a config");

    assert_eq!(second.fonts.len(), first.fonts.len());
    assert_eq!(second.fonts[2].files.len(), 1);
    assert_eq!(second.custom_snippets, first.custom_snippets);
    assert_eq!(second, first);
}

#[test]
fn snippet_on_structural_selector_stays_a_snippet() {
    let mut original = StyleConfig::new();
    original.colors.button = s("#3D57FF");
    original.buttons.primary_type = Some(ButtonType::Solid);
    original.custom_snippets = vec![CustomSnippet::new(
        "snippet-1",
        "Red button",
        ".button",
        "color: red;",
    )];

    let css = generate(&original);
    let back = recovered(&css);
    assert_eq!(back.buttons.primary_text_color.as_deref(), Some("#FFFFFF"));
    assert_eq!(back.custom_snippets.len(), 1);
    assert_eq!(back.custom_snippets[0].selector, ".button");
    assert_eq!(generate(&back), css);
}

#[test]
fn rule_after_generated_sheet_keeps_section_intact() {
    let mut original = StyleConfig::new();
    original.custom_snippets = vec![CustomSnippet::new(
        "snippet-1",
        "Promo",
        ".promo",
        "display: none;",
    )];
    let css = format!("{}\n.after {{ color: blue; }}\n", generate(&original));

    let back = recovered(&css);
    let names: Vec<_> = back
        .custom_snippets
        .iter()
        .map(|s| (s.selector.as_str(), s.name.as_str()))
        .collect();
    assert_eq!(names, vec![(".promo", "Promo"), (".after", "Imported rule")]);

    let regenerated = generate(&back);
    assert_eq!(regenerated.matches("End Custom CSS Snippets").count(), 1);
    assert_eq!(recovered(&regenerated).custom_snippets.len(), 2);
}
