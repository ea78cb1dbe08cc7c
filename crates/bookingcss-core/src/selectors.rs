//! Widget vocabulary shared by the generator and the importer: selectors,
//! custom property names, media queries and section markers.
//!
//! Keeping these in one place is what lets [`parse`](crate::parse) read back
//! what [`generate`](crate::generate) writes.

/// Root container of the widget.
pub const WIDGET: &str = ".booking-widget";
/// Inner panels that must let a transparent background through.
pub const WIDGET_PANELS: &str = ".booking-widget .panel, .booking-widget .page-content";
pub const BODY: &str = "body";
/// Running text that picks up the body color.
pub const BODY_TEXT: &str = ".booking-widget p, .booking-widget li, .booking-widget label";
pub const HEADINGS: &str = "h1, h2, h3, h4, h5, h6";
pub const TITLE: &str = ".experience-title";
pub const SUBTITLE: &str = ".experience-subtitle";
pub const CHECKOUT_HEADING: &str = ".checkout-page h2";
/// Older widget markup for the checkout heading.
pub const CHECKOUT_HEADING_LEGACY: &str = ".checkout h2";
pub const LINK: &str = ".booking-widget a";

pub const PRIMARY_BUTTON: &str = ".button";
pub const PRIMARY_BUTTON_HOVER: &str = ".button:hover";
pub const SECONDARY_BUTTON: &str = ".button-secondary";
pub const SECONDARY_BUTTON_HOVER: &str = ".button-secondary:hover";
pub const DISCOUNT_BUTTON: &str = ".discount-form .button";
pub const PURCHASE_BUTTON: &str = ".purchase-button";
pub const MOBILE_LIST_BUTTON: &str = ".experience-list .button";

pub const INPUTS: &str =
    ".booking-widget input, .booking-widget select, .booking-widget textarea";
pub const MODAL: &str = ".modal-content";
pub const MODAL_CLOSE: &str = ".modal-content .modal-close";
pub const LIST_ITEM: &str = ".experience-list-item";
pub const EXPERIENCE_CARD: &str = "a.experience-card";
pub const ZEBRA_ROW: &str = ".at-a-glance tr:nth-child(even)";

/// Divider selector groups and the border side each one uses. All four
/// share one computed border value.
pub const DIVIDER_GROUPS: [(&str, &str); 4] = [
    (".section-divider, .booking-widget hr", "border-top"),
    (".experience-details .detail-row", "border-bottom"),
    (".availability-list .availability-row", "border-bottom"),
    (".cart-items .cart-item", "border-bottom"),
];
/// Older widget markup for the first divider group.
pub const DIVIDER_LEGACY: &str = ".section-divider";
pub const CONFIRMATION_SEPARATOR: &str = ".confirmation-separator";

pub const CHECKOUT_SUMMARY: &str = ".checkout-summary";
/// Older widget markup for the checkout summary.
pub const CHECKOUT_SUMMARY_LEGACY: &str = ".order-summary";
pub const CHECKOUT_SUMMARY_MOBILE: &str = ".checkout-summary-mobile";
pub const CHECKOUT_SUMMARY_LINE: &str = ".checkout-summary .summary-line";
pub const CHECKOUT_TITLE: &str = ".checkout-title";

pub const PLUGIN: &str = ".booking-widget-plugin";
pub const DESCRIPTION: &str = ".experience-description";
pub const CONTACT_GUIDE: &str = ".contact-guide";

/// Small-screen breakpoint used by every mobile block.
pub const MOBILE_MEDIA: &str = "(max-width: 768px)";

pub const BUTTON_COLOR_VAR: &str = "var(--color-button)";
/// Config sentinel for "use the button color" in border color fields.
pub const BUTTON_SENTINEL: &str = "button";

pub const SNIPPETS_HEADER: &str = "/* ===== Custom CSS Snippets ===== */";
pub const SNIPPETS_FOOTER: &str = "/* ===== End Custom CSS Snippets ===== */";
/// Prefix of the marker comment written before each advanced block.
pub const ADVANCED_MARKER: &str = "Advanced:";

/// Selector prefixes owned by the structured model. Top-level rules that
/// start with one of these are never imported as custom snippets.
pub const STRUCTURAL_PREFIXES: [&str; 15] = [
    ".booking-widget",
    ".experience-",
    ".button",
    ".discount-form",
    ".purchase-button",
    ".modal-content",
    "a.experience-card",
    ".at-a-glance",
    ".section-divider",
    ".availability-list",
    ".cart-items",
    ".confirmation-separator",
    ".checkout",
    ".order-summary",
    ".contact-guide",
];

/// Wraps a custom property name in `var()`.
pub fn var(name: &str) -> String {
    format!("var(--{})", name)
}

/// True when the inner text of a comment is one the generator writes as a
/// marker: the snippet section bounds or an advanced block label.
pub fn is_marker_comment(text: &str) -> bool {
    let text = text.trim();
    let inner = |marker: &'static str| {
        marker
            .trim_start_matches("/*")
            .trim_end_matches("*/")
            .trim()
    };
    text == inner(SNIPPETS_HEADER)
        || text == inner(SNIPPETS_FOOTER)
        || text.starts_with(ADVANCED_MARKER)
}

/// True when `selector` starts with a structural prefix.
pub fn is_structural(selector: &str) -> bool {
    let selector = selector.trim_start();
    STRUCTURAL_PREFIXES
        .iter()
        .any(|prefix| selector.starts_with(prefix))
}

/// Canonical comparison key for a selector: whitespace collapsed and
/// removed around `,` and `>`.
pub fn selector_key(selector: &str) -> String {
    let collapsed = collapse_whitespace(selector);
    let mut key = String::with_capacity(collapsed.len());
    let mut chars = collapsed.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            ' ' if matches!(chars.peek(), Some(',') | Some('>')) => {}
            ',' | '>' => {
                key.push(c);
                if chars.peek() == Some(&' ') {
                    chars.next();
                }
            }
            _ => key.push(c),
        }
    }
    key
}

/// Collapses runs of whitespace into single spaces and trims the ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
