//! The emission table.
//!
//! Each [`RuleSpec`] pairs a gate with a renderer. The table order is the
//! output order. Gates read the whole configuration, so a rule may fire on a
//! field from a different section than its subject: the primary button, for
//! instance, is drawn as soon as `colors.button` is set.

use crate::color::{contrast_text_color, is_transparent};
use crate::config::{present, ButtonType, FontSource, FontSourceKind, StyleConfig, TextRole};
use crate::font::{font_format_of, google_fonts_url, resolved_stack};
use crate::selectors as sel;

use super::canned;
use super::{breaks_out, value};
use super::writer::{CssWriter, Rule};

/// One entry of the emission table.
pub(crate) struct RuleSpec {
    pub name: &'static str,
    pub gate: fn(&StyleConfig) -> bool,
    pub render: fn(&StyleConfig, &mut CssWriter),
}

pub(crate) const RULES: &[RuleSpec] = &[
    RuleSpec { name: "fonts", gate: has_fonts, render: render_fonts },
    RuleSpec { name: "root", gate: has_root, render: render_root },
    RuleSpec { name: "background", gate: has_background, render: render_background },
    RuleSpec { name: "dark-theme", gate: has_dark_theme, render: render_dark_theme },
    RuleSpec { name: "typography", gate: has_typography, render: render_typography },
    RuleSpec { name: "color-overrides", gate: has_color_overrides, render: render_color_overrides },
    RuleSpec { name: "checkout-heading", gate: has_checkout_heading, render: render_checkout_heading },
    RuleSpec { name: "link-underline", gate: has_link_underline, render: render_link_underline },
    RuleSpec { name: "primary-button", gate: has_primary_button, render: render_primary_button },
    RuleSpec { name: "secondary-button", gate: has_secondary_button, render: render_secondary_button },
    RuleSpec { name: "discount-button-fix", gate: has_discount_fix, render: render_discount_fix },
    RuleSpec { name: "inputs", gate: has_inputs, render: render_inputs },
    RuleSpec { name: "modal", gate: has_modal, render: render_modal },
    RuleSpec { name: "lists", gate: has_lists, render: render_lists },
    RuleSpec { name: "experience-card", gate: has_card, render: render_card },
    RuleSpec { name: "zebra", gate: has_zebra, render: render_zebra },
    RuleSpec { name: "dividers", gate: has_dividers, render: render_dividers },
    RuleSpec { name: "checkout-summary", gate: has_summary_background, render: render_summary_background },
    RuleSpec { name: "checkout-summary-divider", gate: has_summary_divider, render: render_summary_divider },
    RuleSpec { name: "mobile-typography", gate: has_mobile_typography, render: render_mobile_typography },
    RuleSpec { name: "mobile-list-buttons", gate: has_mobile_buttons, render: render_mobile_buttons },
    RuleSpec { name: "purchase-button", gate: has_purchase_height, render: render_purchase_height },
    RuleSpec { name: "plugin-margin-fix", gate: has_plugin_margin_fix, render: render_plugin_margin_fix },
    RuleSpec { name: "auto-expand-description", gate: has_auto_expand, render: render_auto_expand },
    RuleSpec { name: "contact-guide-alignment", gate: has_contact_guide, render: render_contact_guide },
    RuleSpec { name: "mobile-checkout-title-color", gate: has_mobile_title_color, render: render_mobile_title_color },
    RuleSpec { name: "custom-snippets", gate: has_snippets, render: render_snippets },
];

const DEFAULT_BORDER_WIDTH: &str = "1px";
const OUTLINED_BORDER_WIDTH: &str = "2px";
const DEFAULT_BORDER_STYLE: &str = "solid";
const DEFAULT_BORDER_COLOR: &str = "currentColor";

fn any_set(fields: &[&Option<String>]) -> bool {
    fields.iter().any(|field| value(field).is_some())
}

/// Resolves the `"button"` sentinel to the button color variable.
pub(crate) fn border_color(color: &str) -> &str {
    if color.eq_ignore_ascii_case(sel::BUTTON_SENTINEL) {
        sel::BUTTON_COLOR_VAR
    } else {
        color
    }
}

/// `<width> <style> <color>` with per-part defaults.
pub(crate) fn border_shorthand(
    width: &Option<String>,
    style: &Option<String>,
    color: &Option<String>,
    default_width: &str,
    default_color: &str,
) -> String {
    format!(
        "{} {} {}",
        value(width).unwrap_or(default_width),
        value(style).unwrap_or(DEFAULT_BORDER_STYLE),
        value(color).map(border_color).unwrap_or(default_color),
    )
}

fn font_stack(config: &StyleConfig, role: &TextRole) -> Option<String> {
    resolved_stack(value(&role.family), &config.fonts)
}

fn color_var(field: &Option<String>, name: &str) -> Option<String> {
    value(field).map(|_| sel::var(name))
}

// Fonts

/// A stylesheet URL that can sit inside `url("...")`. Unlike declaration
/// values, `;` is allowed: css2 axis lists use it.
fn import_url(field: &Option<String>) -> Option<&str> {
    present(field).filter(|url| !url.contains(['"', '\n']))
}

fn typekit_url(source: &FontSource) -> Option<&str> {
    (source.kind == FontSourceKind::AdobeTypekit)
        .then(|| import_url(&source.url))
        .flatten()
}

fn google_url(source: &FontSource) -> Option<String> {
    if source.kind != FontSourceKind::GoogleFonts {
        return None;
    }
    import_url(&source.url)
        .map(str::to_string)
        .or_else(|| google_fonts_url(&source.families))
}

fn font_faces(source: &FontSource) -> Vec<Rule> {
    if source.kind != FontSourceKind::SelfHosted {
        return Vec::new();
    }
    let Some(family) = source.primary_family().filter(|f| !f.contains('"')) else {
        return Vec::new();
    };
    source
        .files
        .iter()
        .filter(|file| {
            let url = file.url.trim();
            !url.is_empty() && !url.contains('"')
        })
        .map(|file| {
            let url = file.url.trim();
            let src = match font_format_of(url) {
                Some(format) => format!("url(\"{}\") format(\"{}\")", url, format),
                None => format!("url(\"{}\")", url),
            };
            Rule::plain("@font-face")
                .decl("font-family", format!("\"{}\"", family))
                .decl("src", src)
                .decl("font-weight", value(&file.weight).unwrap_or("400"))
                .decl("font-style", value(&file.style).unwrap_or("normal"))
                .decl("font-display", "swap")
        })
        .collect()
}

fn has_fonts(config: &StyleConfig) -> bool {
    config.fonts.iter().any(|source| {
        typekit_url(source).is_some()
            || google_url(source).is_some()
            || !font_faces(source).is_empty()
    })
}

fn render_fonts(config: &StyleConfig, w: &mut CssWriter) {
    let imports: Vec<String> = config
        .fonts
        .iter()
        .filter_map(|source| typekit_url(source).map(str::to_string))
        .chain(config.fonts.iter().filter_map(google_url))
        .map(|url| format!("@import url(\"{}\");", url))
        .collect();
    if !imports.is_empty() {
        w.line(imports.join("\n"));
    }
    for rule in config.fonts.iter().flat_map(font_faces) {
        w.rule(rule);
    }
}

// :root

fn has_root(config: &StyleConfig) -> bool {
    let c = &config.colors;
    any_set(&[&c.body, &c.heading, &c.button, &c.hover, &c.brand, &c.background])
        || font_stack(config, &config.typography.body).is_some()
        || font_stack(config, &config.typography.heading).is_some()
        || font_stack(config, &config.typography.button).is_some()
}

fn render_root(config: &StyleConfig, w: &mut CssWriter) {
    let c = &config.colors;
    let t = &config.typography;
    w.rule(
        Rule::plain(":root")
            .opt("--color-body", value(&c.body))
            .opt("--color-heading", value(&c.heading))
            .opt("--color-button", value(&c.button))
            .opt("--color-hover", value(&c.hover))
            .opt("--color-brand", value(&c.brand))
            .opt("--color-background", value(&c.background))
            .opt("--font-body", font_stack(config, &t.body).as_deref())
            .opt("--font-heading", font_stack(config, &t.heading).as_deref())
            .opt("--font-button", font_stack(config, &t.button).as_deref()),
    );
}

// Page background

fn has_background(config: &StyleConfig) -> bool {
    value(&config.colors.background).is_some()
}

fn render_background(config: &StyleConfig, w: &mut CssWriter) {
    w.rule(Rule::new(sel::WIDGET).decl("background-color", sel::var("color-background")));
    if value(&config.colors.background).is_some_and(is_transparent) {
        w.rule(Rule::new(sel::WIDGET_PANELS).decl("background-color", "transparent"));
    }
}

fn has_dark_theme(config: &StyleConfig) -> bool {
    config.advanced.dark_theme
}

fn render_dark_theme(_config: &StyleConfig, w: &mut CssWriter) {
    w.raw(canned::DARK_THEME);
}

// Typography

fn has_typography(config: &StyleConfig) -> bool {
    let t = &config.typography;
    t.body.is_set()
        || t.heading.is_set()
        || any_set(&[&config.colors.body, &config.colors.heading])
        || any_set(&[&t.title_size, &t.subtitle_size])
}

fn render_typography(config: &StyleConfig, w: &mut CssWriter) {
    let t = &config.typography;

    let body_font = font_stack(config, &t.body).map(|_| sel::var("font-body"));
    w.rule(
        Rule::new(sel::BODY)
            .opt("font-family", body_font.as_deref())
            .opt("font-weight", value(&t.body.weight))
            .opt("line-height", value(&t.body.line_height))
            .opt("text-transform", value(&t.body.transform))
            .opt("letter-spacing", value(&t.body.letter_spacing))
            .opt("font-size", value(&t.body.size)),
    );

    w.rule(Rule::new(sel::BODY_TEXT).opt(
        "color",
        color_var(&config.colors.body, "color-body").as_deref(),
    ));

    let heading_font = font_stack(config, &t.heading).map(|_| sel::var("font-heading"));
    let heading_color = color_var(&config.colors.heading, "color-heading");
    w.rule(
        Rule::new(sel::HEADINGS)
            .opt("font-family", heading_font.as_deref())
            .opt("color", heading_color.as_deref())
            .opt("font-weight", value(&t.heading.weight))
            .opt("text-transform", value(&t.heading.transform))
            .opt("line-height", value(&t.heading.line_height))
            .opt("letter-spacing", value(&t.heading.letter_spacing))
            .opt("font-size", value(&t.heading.size)),
    );

    w.rule(Rule::new(sel::TITLE).opt("font-size", value(&t.title_size)));
    w.rule(Rule::new(sel::SUBTITLE).opt("font-size", value(&t.subtitle_size)));
}

fn has_color_overrides(config: &StyleConfig) -> bool {
    let c = &config.colors;
    any_set(&[&c.title_override, &c.subtitle_override, &c.link])
}

fn render_color_overrides(config: &StyleConfig, w: &mut CssWriter) {
    let c = &config.colors;
    w.rule(Rule::new(sel::TITLE).opt("color", value(&c.title_override)));
    w.rule(Rule::new(sel::SUBTITLE).opt("color", value(&c.subtitle_override)));
    w.rule(Rule::new(sel::LINK).opt("color", value(&c.link)));
}

fn has_checkout_heading(config: &StyleConfig) -> bool {
    value(&config.typography.checkout_heading_size).is_some()
}

fn render_checkout_heading(config: &StyleConfig, w: &mut CssWriter) {
    w.rule(
        Rule::new(sel::CHECKOUT_HEADING)
            .opt("font-size", value(&config.typography.checkout_heading_size)),
    );
}

fn has_link_underline(config: &StyleConfig) -> bool {
    config.typography.link_underline
}

fn render_link_underline(_config: &StyleConfig, w: &mut CssWriter) {
    w.rule(Rule::new(sel::LINK).decl("text-decoration", "underline"));
}

// Buttons

/// Background implied by the primary button type. A solid button only has
/// one when the button color is set.
fn primary_background(config: &StyleConfig) -> Option<&'static str> {
    match config.buttons.primary_type.unwrap_or_default() {
        ButtonType::Solid => value(&config.colors.button).map(|_| sel::BUTTON_COLOR_VAR),
        ButtonType::Outlined => Some("transparent"),
    }
}

fn has_primary_hover(config: &StyleConfig) -> bool {
    let b = &config.buttons;
    b.primary_hover_type.is_some()
        || any_set(&[&b.hover_color, &b.hover_border_color, &config.colors.hover])
}

fn has_primary_button(config: &StyleConfig) -> bool {
    let b = &config.buttons;
    let role = &config.typography.button;
    font_stack(config, role).is_some()
        || any_set(&[
            &role.weight,
            &b.primary_text_color,
            &b.primary_radius,
            &b.primary_transition,
            &role.transform,
            &role.line_height,
            &role.size,
            &role.letter_spacing,
        ])
        || primary_background(config).is_some()
        || has_primary_hover(config)
}

/// Type-dependent declarations shared by both button kinds.
struct ButtonPaint<'a> {
    kind: ButtonType,
    text_color: &'a Option<String>,
    border_width: &'a Option<String>,
    border_style: &'a Option<String>,
    border_color: &'a Option<String>,
    radius: &'a Option<String>,
}

impl ButtonPaint<'_> {
    fn apply(&self, rule: Rule, config: &StyleConfig) -> Rule {
        let button_color = value(&config.colors.button);
        let rule = match self.kind {
            ButtonType::Solid => match button_color {
                Some(color) => rule
                    .decl("background", sel::BUTTON_COLOR_VAR)
                    .decl("border", format!("1px solid {}", sel::BUTTON_COLOR_VAR))
                    .decl(
                        "color",
                        value(self.text_color).unwrap_or_else(|| contrast_text_color(color)),
                    ),
                None => rule.opt("color", value(self.text_color)),
            },
            ButtonType::Outlined => rule
                .decl("background", "transparent")
                .decl(
                    "border",
                    border_shorthand(
                        self.border_width,
                        self.border_style,
                        self.border_color,
                        OUTLINED_BORDER_WIDTH,
                        sel::BUTTON_COLOR_VAR,
                    ),
                )
                .decl(
                    "color",
                    value(self.text_color).unwrap_or(sel::BUTTON_COLOR_VAR),
                ),
        };
        rule.opt("border-radius", value(self.radius))
    }
}

struct HoverPaint<'a> {
    kind: ButtonType,
    text_color: &'a Option<String>,
    border_color: &'a Option<String>,
}

impl HoverPaint<'_> {
    fn rule(&self, selector: &str, config: &StyleConfig) -> Rule {
        let hover_var = color_var(&config.colors.hover, "color-hover");
        let rule = Rule::new(selector);
        let rule = match self.kind {
            ButtonType::Solid => match hover_var {
                Some(hover) => rule.decl("background", hover.clone()).decl("border-color", hover),
                None => rule,
            },
            ButtonType::Outlined => {
                let border = value(self.border_color)
                    .map(|color| border_color(color).to_string())
                    .or(hover_var)
                    .unwrap_or_else(|| sel::BUTTON_COLOR_VAR.to_string());
                rule.decl("background", "transparent").decl("border-color", border)
            }
        };
        rule.opt("color", value(self.text_color))
    }
}

fn render_primary_button(config: &StyleConfig, w: &mut CssWriter) {
    let b = &config.buttons;
    let role = &config.typography.button;
    let kind = b.primary_type.unwrap_or_default();

    let font = font_stack(config, role).map(|_| sel::var("font-button"));
    let base = Rule::new(sel::PRIMARY_BUTTON)
        .opt("font-family", font.as_deref())
        .opt("font-weight", value(&role.weight))
        .opt("text-transform", value(&role.transform))
        .opt("line-height", value(&role.line_height))
        .opt("font-size", value(&role.size))
        .opt("letter-spacing", value(&role.letter_spacing));
    let paint = ButtonPaint {
        kind,
        text_color: &b.primary_text_color,
        border_width: &b.primary_border_width,
        border_style: &b.primary_border_style,
        border_color: &b.primary_border_color,
        radius: &b.primary_radius,
    };
    w.rule(
        paint
            .apply(base, config)
            .opt("transition", value(&b.primary_transition)),
    );

    if has_primary_hover(config) {
        let hover = HoverPaint {
            kind: b.primary_hover_type.unwrap_or(kind),
            text_color: &b.hover_color,
            border_color: &b.hover_border_color,
        };
        w.rule(hover.rule(sel::PRIMARY_BUTTON_HOVER, config));
    }
}

fn has_secondary_hover(config: &StyleConfig) -> bool {
    let b = &config.buttons;
    b.secondary_hover_type.is_some()
        || any_set(&[&b.secondary_hover_color, &b.secondary_hover_border_color])
}

fn has_secondary_button(config: &StyleConfig) -> bool {
    let b = &config.buttons;
    b.secondary_type.is_some()
        || any_set(&[
            &b.secondary_text_color,
            &b.secondary_border_width,
            &b.secondary_border_style,
            &b.secondary_border_color,
            &b.secondary_radius,
        ])
        || has_secondary_hover(config)
}

fn render_secondary_button(config: &StyleConfig, w: &mut CssWriter) {
    let b = &config.buttons;
    let kind = b.secondary_type.unwrap_or_default();

    let paint = ButtonPaint {
        kind,
        text_color: &b.secondary_text_color,
        border_width: &b.secondary_border_width,
        border_style: &b.secondary_border_style,
        border_color: &b.secondary_border_color,
        radius: &b.secondary_radius,
    };
    w.rule(paint.apply(Rule::new(sel::SECONDARY_BUTTON), config));

    if has_secondary_hover(config) {
        let hover = HoverPaint {
            kind: b.secondary_hover_type.unwrap_or(kind),
            text_color: &b.secondary_hover_color,
            border_color: &b.secondary_hover_border_color,
        };
        w.rule(hover.rule(sel::SECONDARY_BUTTON_HOVER, config));
    }
}

fn has_discount_fix(config: &StyleConfig) -> bool {
    config.advanced.discount_button_fix
}

fn render_discount_fix(_config: &StyleConfig, w: &mut CssWriter) {
    w.comment(&advanced_label(canned::DISCOUNT_BUTTON_FIX));
    w.raw(canned::DISCOUNT_BUTTON);
}

// Element groups

fn has_inputs(config: &StyleConfig) -> bool {
    let i = &config.inputs;
    any_set(&[
        &i.background,
        &i.text_color,
        &i.border_width,
        &i.border_style,
        &i.border_color,
        &i.radius,
    ])
}

fn render_inputs(config: &StyleConfig, w: &mut CssWriter) {
    let i = &config.inputs;
    let border = any_set(&[&i.border_width, &i.border_style, &i.border_color]).then(|| {
        border_shorthand(
            &i.border_width,
            &i.border_style,
            &i.border_color,
            DEFAULT_BORDER_WIDTH,
            DEFAULT_BORDER_COLOR,
        )
    });
    w.rule(
        Rule::new(sel::INPUTS)
            .opt("background-color", value(&i.background))
            .opt("color", value(&i.text_color))
            .opt("border", border.as_deref())
            .opt("border-radius", value(&i.radius)),
    );
}

fn has_modal(config: &StyleConfig) -> bool {
    let m = &config.modals;
    m.dark_mode || any_set(&[&m.background, &m.text_color, &m.radius])
}

fn render_modal(config: &StyleConfig, w: &mut CssWriter) {
    let m = &config.modals;
    w.rule(
        Rule::new(sel::MODAL)
            .opt("background-color", value(&m.background))
            .opt("color", value(&m.text_color))
            .opt("border-radius", value(&m.radius)),
    );
    if m.dark_mode {
        w.raw(canned::MODAL_DARK_MODE);
    }
}

fn has_lists(config: &StyleConfig) -> bool {
    let l = &config.lists;
    any_set(&[
        &l.background,
        &l.text_color,
        &l.border_width,
        &l.border_style,
        &l.border_color,
        &l.radius,
    ])
}

fn render_lists(config: &StyleConfig, w: &mut CssWriter) {
    let l = &config.lists;
    let border = any_set(&[&l.border_width, &l.border_style, &l.border_color]).then(|| {
        border_shorthand(
            &l.border_width,
            &l.border_style,
            &l.border_color,
            DEFAULT_BORDER_WIDTH,
            DEFAULT_BORDER_COLOR,
        )
    });
    w.rule(
        Rule::new(sel::LIST_ITEM)
            .opt("background-color", value(&l.background))
            .opt("color", value(&l.text_color))
            .opt("border", border.as_deref())
            .opt("border-radius", value(&l.radius)),
    );
}

fn has_card(config: &StyleConfig) -> bool {
    let c = &config.cards;
    any_set(&[&c.border_width, &c.border_style, &c.border_color, &c.radius])
}

fn render_card(config: &StyleConfig, w: &mut CssWriter) {
    let c = &config.cards;
    let border = any_set(&[&c.border_width, &c.border_style, &c.border_color]).then(|| {
        border_shorthand(
            &c.border_width,
            &c.border_style,
            &c.border_color,
            DEFAULT_BORDER_WIDTH,
            DEFAULT_BORDER_COLOR,
        )
    });
    w.rule(
        Rule::new(sel::EXPERIENCE_CARD)
            .opt("border", border.as_deref())
            .opt("border-radius", value(&c.radius)),
    );
}

fn has_zebra(config: &StyleConfig) -> bool {
    value(&config.at_a_glance.zebra_color).is_some()
}

fn render_zebra(config: &StyleConfig, w: &mut CssWriter) {
    w.rule(
        Rule::new(sel::ZEBRA_ROW).opt("background-color", value(&config.at_a_glance.zebra_color)),
    );
}

fn has_dividers(config: &StyleConfig) -> bool {
    let d = &config.dividers;
    any_set(&[&d.width, &d.style, &d.color])
}

fn render_dividers(config: &StyleConfig, w: &mut CssWriter) {
    let d = &config.dividers;
    let border = border_shorthand(
        &d.width,
        &d.style,
        &d.color,
        DEFAULT_BORDER_WIDTH,
        DEFAULT_BORDER_COLOR,
    );
    for (selector, side) in sel::DIVIDER_GROUPS {
        w.rule(Rule::new(selector).decl(side, border.clone()));
    }
    w.rule(
        Rule::new(sel::CONFIRMATION_SEPARATOR)
            .opt("background-color", value(&d.color).map(border_color)),
    );
}

fn has_summary_background(config: &StyleConfig) -> bool {
    value(&config.checkout_summary.background).is_some()
}

fn render_summary_background(config: &StyleConfig, w: &mut CssWriter) {
    let background = value(&config.checkout_summary.background);
    w.rule(Rule::new(sel::CHECKOUT_SUMMARY).opt("background-color", background));
    w.media(
        sel::MOBILE_MEDIA,
        [Rule::new(sel::CHECKOUT_SUMMARY_MOBILE).opt("background-color", background)],
    );
}

fn has_summary_divider(config: &StyleConfig) -> bool {
    value(&config.checkout_summary.divider_color).is_some()
}

fn render_summary_divider(config: &StyleConfig, w: &mut CssWriter) {
    w.rule(
        Rule::new(sel::CHECKOUT_SUMMARY_LINE)
            .opt("border-color", value(&config.checkout_summary.divider_color)),
    );
}

// Mobile

fn has_mobile_typography(config: &StyleConfig) -> bool {
    let t = &config.typography;
    any_set(&[&t.title_size_mobile, &t.subtitle_size_mobile])
}

fn render_mobile_typography(config: &StyleConfig, w: &mut CssWriter) {
    let t = &config.typography;
    w.media(
        sel::MOBILE_MEDIA,
        [
            Rule::new(sel::TITLE).opt("font-size", value(&t.title_size_mobile)),
            Rule::new(sel::SUBTITLE).opt("font-size", value(&t.subtitle_size_mobile)),
        ],
    );
}

fn has_mobile_buttons(config: &StyleConfig) -> bool {
    let m = &config.mobile_buttons;
    any_set(&[&m.font_size, &m.padding, &m.width, &m.height, &m.radius])
}

fn render_mobile_buttons(config: &StyleConfig, w: &mut CssWriter) {
    let m = &config.mobile_buttons;
    w.media(
        sel::MOBILE_MEDIA,
        [Rule::new(sel::MOBILE_LIST_BUTTON)
            .opt("font-size", value(&m.font_size))
            .opt("padding", value(&m.padding))
            .opt("width", value(&m.width))
            .opt("height", value(&m.height))
            .opt("border-radius", value(&m.radius))],
    );
}

fn has_purchase_height(config: &StyleConfig) -> bool {
    value(&config.buttons.purchase_height).is_some()
}

fn render_purchase_height(config: &StyleConfig, w: &mut CssWriter) {
    w.rule(Rule::new(sel::PURCHASE_BUTTON).opt("height", value(&config.buttons.purchase_height)));
}

// Advanced toggles

fn advanced_label(label: &str) -> String {
    format!("{} {}", sel::ADVANCED_MARKER, label)
}

fn has_plugin_margin_fix(config: &StyleConfig) -> bool {
    config.advanced.plugin_margin_fix
}

fn render_plugin_margin_fix(config: &StyleConfig, w: &mut CssWriter) {
    w.comment(&advanced_label(canned::PLUGIN_MARGIN_FIX));
    w.rule(Rule::new(sel::PLUGIN).decl("margin", value(&config.advanced.plugin_margin).unwrap_or("0")));
}

fn has_auto_expand(config: &StyleConfig) -> bool {
    config.advanced.auto_expand_description
}

fn render_auto_expand(_config: &StyleConfig, w: &mut CssWriter) {
    w.comment(&advanced_label(canned::AUTO_EXPAND_DESCRIPTION));
    w.raw(canned::AUTO_EXPAND);
}

fn has_contact_guide(config: &StyleConfig) -> bool {
    config.advanced.contact_guide_alignment
}

fn render_contact_guide(_config: &StyleConfig, w: &mut CssWriter) {
    w.comment(&advanced_label(canned::CONTACT_GUIDE_ALIGNMENT));
    w.raw(canned::CONTACT_GUIDE);
}

fn has_mobile_title_color(config: &StyleConfig) -> bool {
    config.advanced.mobile_checkout_title_color
}

fn render_mobile_title_color(config: &StyleConfig, w: &mut CssWriter) {
    let heading = sel::var("color-heading");
    let color = value(&config.advanced.mobile_checkout_title_color_value).unwrap_or(heading.as_str());
    w.comment(&advanced_label(canned::MOBILE_CHECKOUT_TITLE_COLOR));
    w.media(
        sel::MOBILE_MEDIA,
        [Rule::new(sel::CHECKOUT_TITLE).decl("color", color)],
    );
}

// Custom snippets

/// Selector and property text of a snippet that can be written without
/// breaking the surrounding stylesheet.
fn snippet_parts(selector: &str, properties: &str) -> Option<(String, String)> {
    let selector = selector.trim();
    let properties = properties.trim();
    if selector.is_empty() || properties.is_empty() {
        return None;
    }
    if selector.contains(['{', '}']) || properties.contains(['{', '}']) {
        return None;
    }
    if breaks_out(selector) || breaks_out(properties) {
        return None;
    }
    let body = properties
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| format!("  {}", line))
        .collect::<Vec<_>>()
        .join("\n");
    Some((selector.to_string(), body))
}

fn has_snippets(config: &StyleConfig) -> bool {
    config
        .custom_snippets
        .iter()
        .any(|s| snippet_parts(&s.selector, &s.properties).is_some())
}

fn render_snippets(config: &StyleConfig, w: &mut CssWriter) {
    w.line(sel::SNIPPETS_HEADER);
    for snippet in &config.custom_snippets {
        let Some((selector, body)) = snippet_parts(&snippet.selector, &snippet.properties) else {
            continue;
        };
        let name = snippet.name.trim();
        if !name.is_empty() && !sel::is_marker_comment(name) {
            w.comment(name);
        }
        w.raw(&format!("{} {{\n{}\n}}", selector, body));
    }
    w.line(sel::SNIPPETS_FOOTER);
}
