//! The extractor table.
//!
//! Every extractor reads the shared [`Document`] and returns its findings
//! as a list of [`Extraction`]s; none of them touch the configuration
//! directly. Most of the vocabulary is declarative: a [`RulePattern`] names
//! the selector forms to look for and which property feeds which field.

use serde_json::Value;

use crate::config::{ButtonType, CustomSnippet, FontSource};
use crate::error::ExtractError;
use crate::font::primary_family;
use crate::generate::{
    AUTO_EXPAND_DESCRIPTION, CONTACT_GUIDE_ALIGNMENT, DISCOUNT_BUTTON_FIX,
    MOBILE_CHECKOUT_TITLE_COLOR, PLUGIN_MARGIN_FIX,
};
use crate::selectors::{self as sel, selector_key};

use super::document::{Declarations, Document, StyleRule};
use super::{fonts, snippets};

/// A JSON pointer into the serialized configuration and its new value.
pub(crate) type FieldUpdate = (&'static str, Value);

/// One unit of recovered configuration. Each counts as one updated field.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Extraction {
    Fields(Vec<FieldUpdate>),
    FontSource(FontSource),
    Snippet(CustomSnippet),
}

impl Extraction {
    pub fn field(path: &'static str, value: impl Into<Value>) -> Self {
        Extraction::Fields(vec![(path, value.into())])
    }
}

pub(crate) type ExtractResult = Result<Vec<Extraction>, ExtractError>;

/// A named, independently failing extraction step.
pub(crate) enum Extractor {
    Custom {
        name: &'static str,
        run: fn(&Document) -> ExtractResult,
    },
    Rule(&'static RulePattern),
}

impl Extractor {
    pub fn name(&self) -> &'static str {
        match self {
            Extractor::Custom { name, .. } => *name,
            Extractor::Rule(pattern) => pattern.name,
        }
    }

    pub fn run(&self, doc: &Document) -> ExtractResult {
        match self {
            Extractor::Custom { run, .. } => run(doc),
            Extractor::Rule(pattern) => Ok(pattern.extract(doc)),
        }
    }
}

const CUSTOM: &[(&str, fn(&Document) -> ExtractResult)] = &[
    ("google-fonts-imports", fonts::extract_google_imports),
    ("typekit-imports", fonts::extract_typekit_imports),
    ("font-faces", fonts::extract_font_faces),
    ("advanced-markers", extract_advanced_markers),
    ("snippet-section", snippets::extract_section),
    ("catch-all", snippets::extract_catch_all),
];

/// Every extractor, in the order they run.
pub(crate) fn extractors() -> impl Iterator<Item = Extractor> {
    CUSTOM
        .iter()
        .map(|&(name, run)| Extractor::Custom { name, run })
        .chain(PATTERNS.iter().map(Extractor::Rule))
}

/// Where a pattern's selectors are looked up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Scope {
    TopLevel,
    /// Inside the small-screen media query.
    Mobile,
}

/// How a declaration value becomes field updates.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Target {
    /// Copied as is, unless it references a generated variable.
    Text(&'static str),
    /// First family of a `font-family` value.
    Family(&'static str),
    /// Border color; the button variable maps back to `"button"`.
    BorderColor(&'static str),
    /// `<width> <style> <color...>` split into three fields.
    Border {
        width: &'static str,
        style: &'static str,
        color: &'static str,
    },
    /// Background classified as solid or outlined.
    ButtonType(&'static str),
    /// Sets a flag when the value contains the marker text.
    Flag {
        path: &'static str,
        contains: &'static str,
    },
}

impl Target {
    fn updates(&self, raw: &str) -> Option<Vec<FieldUpdate>> {
        match *self {
            Target::Text(path) => {
                (!references_generated_var(raw)).then(|| vec![(path, text(raw))])
            }
            Target::Family(path) => {
                if references_generated_var(raw) {
                    return None;
                }
                primary_family(raw).map(|family| vec![(path, Value::String(family))])
            }
            Target::BorderColor(path) => border_color(raw).map(|color| vec![(path, text(&color))]),
            Target::Border {
                width,
                style,
                color,
            } => {
                let (w, s, c) = split_border(raw)?;
                let mut updates = vec![(width, text(w)), (style, text(s))];
                if let Some(c) = border_color(&c) {
                    updates.push((color, text(&c)));
                }
                Some(updates)
            }
            Target::ButtonType(path) => {
                Some(vec![(path, text(ButtonType::from_background(raw).as_str()))])
            }
            Target::Flag { path, contains } => raw
                .to_ascii_lowercase()
                .contains(contains)
                .then(|| vec![(path, Value::Bool(true))]),
        }
    }

    /// Config paths this target writes.
    #[cfg(test)]
    fn paths(&self) -> Vec<&'static str> {
        match *self {
            Target::Text(path)
            | Target::Family(path)
            | Target::BorderColor(path)
            | Target::ButtonType(path)
            | Target::Flag { path, .. } => vec![path],
            Target::Border {
                width,
                style,
                color,
            } => vec![width, style, color],
        }
    }
}

/// One property (with alternates) and where it goes.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Pick {
    pub properties: &'static [&'static str],
    pub target: Target,
}

impl Pick {
    fn extract(&self, decls: &Declarations) -> Option<Extraction> {
        let raw = self.properties.iter().find_map(|p| decls.get(p))?;
        self.target.updates(raw).map(Extraction::Fields)
    }
}

/// A structural selector and the properties read from it.
#[derive(Debug)]
pub(crate) struct RulePattern {
    pub name: &'static str,
    /// Selector forms tried in order; the first one present wins.
    pub selectors: &'static [&'static str],
    pub scope: Scope,
    pub picks: &'static [Pick],
}

impl RulePattern {
    fn extract(&self, doc: &Document) -> Vec<Extraction> {
        let Some(decls) = self.declarations(doc) else {
            return Vec::new();
        };
        self.picks
            .iter()
            .filter_map(|pick| pick.extract(&decls))
            .collect()
    }

    /// Declarations of every rule matching the first selector form that
    /// occurs, merged in source order. Rules in the snippet section belong
    /// to their snippets and are not read.
    fn declarations(&self, doc: &Document) -> Option<Declarations> {
        let section = snippets::section_range(doc);
        let outside = |rule: &&StyleRule| {
            !section
                .as_ref()
                .is_some_and(|range| range.contains(&rule.start))
        };
        let rules: Vec<&StyleRule> = match self.scope {
            Scope::TopLevel => doc.style_rules().filter(outside).collect(),
            Scope::Mobile => doc.media_rules(sel::MOBILE_MEDIA).filter(outside).collect(),
        };
        self.selectors.iter().find_map(|selector| {
            let key = selector_key(selector);
            let mut merged = Declarations::default();
            let mut found = false;
            for rule in rules.iter().filter(|rule| rule.key == key) {
                merged.extend(&rule.declarations);
                found = true;
            }
            found.then_some(merged)
        })
    }
}

const fn text_pick(properties: &'static [&'static str], path: &'static str) -> Pick {
    Pick {
        properties,
        target: Target::Text(path),
    }
}

const fn pick(properties: &'static [&'static str], target: Target) -> Pick {
    Pick { properties, target }
}

const fn border(width: &'static str, style: &'static str, color: &'static str) -> Target {
    Target::Border {
        width,
        style,
        color,
    }
}

const fn top(name: &'static str, selectors: &'static [&'static str], picks: &'static [Pick]) -> RulePattern {
    RulePattern {
        name,
        selectors,
        scope: Scope::TopLevel,
        picks,
    }
}

const fn mobile(
    name: &'static str,
    selectors: &'static [&'static str],
    picks: &'static [Pick],
) -> RulePattern {
    RulePattern {
        name,
        selectors,
        scope: Scope::Mobile,
        picks,
    }
}

pub(crate) const PATTERNS: &[RulePattern] = &[
    top(
        "root-variables",
        &[":root"],
        &[
            text_pick(&["--color-body"], "/colors/body"),
            text_pick(&["--color-heading"], "/colors/heading"),
            text_pick(&["--color-link"], "/colors/link"),
            text_pick(&["--color-button"], "/colors/button"),
            text_pick(&["--color-hover"], "/colors/hover"),
            text_pick(&["--color-brand"], "/colors/brand"),
            text_pick(&["--color-background"], "/colors/background"),
            pick(&["--font-body"], Target::Family("/typography/body/family")),
            pick(&["--font-heading"], Target::Family("/typography/heading/family")),
            pick(&["--font-button"], Target::Family("/typography/button/family")),
        ],
    ),
    top(
        "dark-theme",
        &[sel::WIDGET],
        &[pick(
            &["color-scheme"],
            Target::Flag {
                path: "/advanced/darkTheme",
                contains: "dark",
            },
        )],
    ),
    top(
        "body",
        &[sel::BODY],
        &[
            pick(&["font-family"], Target::Family("/typography/body/family")),
            text_pick(&["font-weight"], "/typography/body/weight"),
            text_pick(&["line-height"], "/typography/body/lineHeight"),
            text_pick(&["text-transform"], "/typography/body/transform"),
            text_pick(&["letter-spacing"], "/typography/body/letterSpacing"),
            text_pick(&["font-size"], "/typography/body/size"),
        ],
    ),
    top(
        "body-text",
        &[sel::BODY_TEXT],
        &[text_pick(&["color"], "/colors/body")],
    ),
    top(
        "headings",
        &[sel::HEADINGS],
        &[
            pick(&["font-family"], Target::Family("/typography/heading/family")),
            text_pick(&["color"], "/colors/heading"),
            text_pick(&["font-weight"], "/typography/heading/weight"),
            text_pick(&["text-transform"], "/typography/heading/transform"),
            text_pick(&["line-height"], "/typography/heading/lineHeight"),
            text_pick(&["letter-spacing"], "/typography/heading/letterSpacing"),
            text_pick(&["font-size"], "/typography/heading/size"),
        ],
    ),
    top(
        "title",
        &[sel::TITLE],
        &[
            text_pick(&["font-size"], "/typography/titleSize"),
            text_pick(&["color"], "/colors/titleOverride"),
        ],
    ),
    top(
        "subtitle",
        &[sel::SUBTITLE],
        &[
            text_pick(&["font-size"], "/typography/subtitleSize"),
            text_pick(&["color"], "/colors/subtitleOverride"),
        ],
    ),
    mobile(
        "mobile-title",
        &[sel::TITLE],
        &[text_pick(&["font-size"], "/typography/titleSizeMobile")],
    ),
    mobile(
        "mobile-subtitle",
        &[sel::SUBTITLE],
        &[text_pick(&["font-size"], "/typography/subtitleSizeMobile")],
    ),
    top(
        "checkout-heading",
        &[sel::CHECKOUT_HEADING, sel::CHECKOUT_HEADING_LEGACY],
        &[text_pick(&["font-size"], "/typography/checkoutHeadingSize")],
    ),
    mobile(
        "mobile-list-buttons",
        &[sel::MOBILE_LIST_BUTTON],
        &[
            text_pick(&["font-size"], "/mobileButtons/fontSize"),
            text_pick(&["padding"], "/mobileButtons/padding"),
            text_pick(&["width"], "/mobileButtons/width"),
            text_pick(&["height"], "/mobileButtons/height"),
            text_pick(&["border-radius"], "/mobileButtons/radius"),
        ],
    ),
    top(
        "purchase-button",
        &[sel::PURCHASE_BUTTON],
        &[text_pick(&["height"], "/buttons/purchaseHeight")],
    ),
    top(
        "primary-button",
        &[sel::PRIMARY_BUTTON],
        &[
            pick(&["background", "background-color"], Target::ButtonType("/buttons/primaryType")),
            text_pick(&["color"], "/buttons/primaryTextColor"),
            pick(
                &["border"],
                border(
                    "/buttons/primaryBorderWidth",
                    "/buttons/primaryBorderStyle",
                    "/buttons/primaryBorderColor",
                ),
            ),
            text_pick(&["border-radius"], "/buttons/primaryRadius"),
            text_pick(&["transition"], "/buttons/primaryTransition"),
            pick(&["font-family"], Target::Family("/typography/button/family")),
            text_pick(&["font-weight"], "/typography/button/weight"),
            text_pick(&["text-transform"], "/typography/button/transform"),
            text_pick(&["line-height"], "/typography/button/lineHeight"),
            text_pick(&["font-size"], "/typography/button/size"),
            text_pick(&["letter-spacing"], "/typography/button/letterSpacing"),
        ],
    ),
    top(
        "primary-button-hover",
        &[sel::PRIMARY_BUTTON_HOVER],
        &[
            pick(
                &["background", "background-color"],
                Target::ButtonType("/buttons/primaryHoverType"),
            ),
            text_pick(&["color"], "/buttons/hoverColor"),
            pick(&["border-color"], Target::BorderColor("/buttons/hoverBorderColor")),
        ],
    ),
    top(
        "secondary-button",
        &[sel::SECONDARY_BUTTON],
        &[
            pick(&["background", "background-color"], Target::ButtonType("/buttons/secondaryType")),
            text_pick(&["color"], "/buttons/secondaryTextColor"),
            pick(
                &["border"],
                border(
                    "/buttons/secondaryBorderWidth",
                    "/buttons/secondaryBorderStyle",
                    "/buttons/secondaryBorderColor",
                ),
            ),
            text_pick(&["border-radius"], "/buttons/secondaryRadius"),
        ],
    ),
    top(
        "secondary-button-hover",
        &[sel::SECONDARY_BUTTON_HOVER],
        &[
            pick(
                &["background", "background-color"],
                Target::ButtonType("/buttons/secondaryHoverType"),
            ),
            text_pick(&["color"], "/buttons/secondaryHoverColor"),
            pick(&["border-color"], Target::BorderColor("/buttons/secondaryHoverBorderColor")),
        ],
    ),
    top(
        "link",
        &[sel::LINK],
        &[
            text_pick(&["color"], "/colors/link"),
            pick(
                &["text-decoration", "text-decoration-line"],
                Target::Flag {
                    path: "/typography/linkUnderline",
                    contains: "underline",
                },
            ),
        ],
    ),
    top(
        "experience-card",
        &[sel::EXPERIENCE_CARD],
        &[
            pick(
                &["border"],
                border("/cards/borderWidth", "/cards/borderStyle", "/cards/borderColor"),
            ),
            text_pick(&["border-radius"], "/cards/radius"),
        ],
    ),
    top(
        "zebra-rows",
        &[sel::ZEBRA_ROW],
        &[text_pick(&["background-color", "background"], "/atAGlance/zebraColor")],
    ),
    top(
        "dividers",
        &[sel::DIVIDER_GROUPS[0].0, sel::DIVIDER_LEGACY],
        &[pick(
            &["border-top", "border"],
            border("/dividers/width", "/dividers/style", "/dividers/color"),
        )],
    ),
    top(
        "checkout-summary",
        &[sel::CHECKOUT_SUMMARY, sel::CHECKOUT_SUMMARY_LEGACY],
        &[text_pick(&["background-color", "background"], "/checkoutSummary/background")],
    ),
    top(
        "checkout-summary-divider",
        &[sel::CHECKOUT_SUMMARY_LINE],
        &[pick(&["border-color"], Target::BorderColor("/checkoutSummary/dividerColor"))],
    ),
    top(
        "inputs",
        &[sel::INPUTS],
        &[
            text_pick(&["background-color", "background"], "/inputs/background"),
            text_pick(&["color"], "/inputs/textColor"),
            pick(
                &["border"],
                border("/inputs/borderWidth", "/inputs/borderStyle", "/inputs/borderColor"),
            ),
            text_pick(&["border-radius"], "/inputs/radius"),
        ],
    ),
    top(
        "modal",
        &[sel::MODAL],
        &[
            text_pick(&["background-color", "background"], "/modals/background"),
            text_pick(&["color"], "/modals/textColor"),
            text_pick(&["border-radius"], "/modals/radius"),
        ],
    ),
    top(
        "modal-dark-mode",
        &[sel::MODAL_CLOSE],
        &[pick(
            &["filter"],
            Target::Flag {
                path: "/modals/darkMode",
                contains: "invert",
            },
        )],
    ),
    top(
        "lists",
        &[sel::LIST_ITEM],
        &[
            text_pick(&["background-color", "background"], "/lists/background"),
            text_pick(&["color"], "/lists/textColor"),
            pick(
                &["border"],
                border("/lists/borderWidth", "/lists/borderStyle", "/lists/borderColor"),
            ),
            text_pick(&["border-radius"], "/lists/radius"),
        ],
    ),
    top(
        "plugin-margin",
        &[sel::PLUGIN],
        &[text_pick(&["margin"], "/advanced/pluginMargin")],
    ),
    mobile(
        "mobile-checkout-title-color",
        &[sel::CHECKOUT_TITLE],
        &[text_pick(&["color"], "/advanced/mobileCheckoutTitleColorValue")],
    ),
];

/// Marker labels and the toggles they set.
pub(crate) const ADVANCED_LABELS: &[(&str, &str)] = &[
    (DISCOUNT_BUTTON_FIX, "/advanced/discountButtonFix"),
    (PLUGIN_MARGIN_FIX, "/advanced/pluginMarginFix"),
    (AUTO_EXPAND_DESCRIPTION, "/advanced/autoExpandDescription"),
    (CONTACT_GUIDE_ALIGNMENT, "/advanced/contactGuideAlignment"),
    (MOBILE_CHECKOUT_TITLE_COLOR, "/advanced/mobileCheckoutTitleColor"),
];

fn extract_advanced_markers(doc: &Document) -> ExtractResult {
    let mut seen = Vec::new();
    for comment in &doc.comments {
        let Some(label) = comment.text.strip_prefix(sel::ADVANCED_MARKER) else {
            continue;
        };
        let label = label.trim().to_ascii_lowercase();
        let path = ADVANCED_LABELS
            .iter()
            .find(|(known, _)| *known == label)
            .map(|&(_, path)| path);
        if let Some(path) = path.filter(|path| !seen.contains(path)) {
            seen.push(path);
        }
    }
    Ok(seen
        .into_iter()
        .map(|path| Extraction::field(path, true))
        .collect())
}

fn text(value: &str) -> Value {
    Value::String(value.to_string())
}

/// Values pointing at the generator's own custom properties carry no
/// information beyond what `:root` already holds.
fn references_generated_var(value: &str) -> bool {
    let lower = value.trim().to_ascii_lowercase();
    lower.starts_with("var(--color-") || lower.starts_with("var(--font-")
}

fn border_color(value: &str) -> Option<String> {
    let value = value.trim();
    if value.eq_ignore_ascii_case(sel::BUTTON_COLOR_VAR) {
        return Some(sel::BUTTON_SENTINEL.to_string());
    }
    if references_generated_var(value) || value.eq_ignore_ascii_case("currentcolor") {
        return None;
    }
    Some(value.to_string())
}

/// Splits `<width> <style> <color...>`; the color keeps every remaining
/// token so `rgb(0, 0, 0)` survives.
pub(crate) fn split_border(value: &str) -> Option<(&str, &str, String)> {
    let mut parts = value.split_whitespace();
    let width = parts.next()?;
    let style = parts.next()?;
    let color = parts.collect::<Vec<_>>().join(" ");
    (!color.is_empty()).then_some((width, style, color))
}
