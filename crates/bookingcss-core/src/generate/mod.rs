//! Configuration to CSS.
//!
//! [`generate`] walks a fixed table of sections. Each section has a gate
//! (a predicate over the whole [`StyleConfig`]) and a renderer; a section is
//! written only when its gate passes and it produced at least one
//! declaration. Sections are separated by one blank line and the output is
//! byte-for-byte stable for a given configuration.
//!
//! ```rust
//! use bookingcss_core::{generate, ButtonType, StyleConfig};
//!
//! let mut config = StyleConfig::new();
//! config.colors.button = Some("#3D57FF".into());
//! config.buttons.primary_type = Some(ButtonType::Solid);
//!
//! let css = generate(&config);
//! assert!(css.starts_with(":root {\n  --color-button: #3D57FF;\n}\n"));
//! assert!(css.contains("background: var(--color-button) !important;"));
//! assert_eq!(generate(&StyleConfig::new()), "");
//! ```

mod canned;
mod rules;
mod writer;

use crate::config::{present, StyleConfig};

pub use canned::{
    AUTO_EXPAND_DESCRIPTION, CONTACT_GUIDE_ALIGNMENT, DISCOUNT_BUTTON_FIX,
    MOBILE_CHECKOUT_TITLE_COLOR, PLUGIN_MARGIN_FIX,
};

/// Renders the stylesheet for `config`.
pub fn generate(config: &StyleConfig) -> String {
    let mut sections = Vec::new();
    for spec in rules::RULES {
        if !(spec.gate)(config) {
            continue;
        }
        let mut writer = writer::CssWriter::new();
        (spec.render)(config, &mut writer);
        if writer.is_empty() {
            tracing::trace!(section = spec.name, "gate passed but section is empty");
            continue;
        }
        tracing::debug!(section = spec.name, "emitted section");
        sections.push(writer.finish());
    }
    sections.join("\n")
}

/// Names of the sections [`generate`] would write for `config`, in order.
pub fn emitted_sections(config: &StyleConfig) -> Vec<&'static str> {
    rules::RULES
        .iter()
        .filter(|spec| {
            if !(spec.gate)(config) {
                return false;
            }
            let mut writer = writer::CssWriter::new();
            (spec.render)(config, &mut writer);
            !writer.is_empty()
        })
        .map(|spec| spec.name)
        .collect()
}

/// A field value that can be written into a declaration: set, and free of
/// characters that would end the declaration or the block early.
pub(crate) fn value(field: &Option<String>) -> Option<&str> {
    present(field).filter(|v| !v.contains([';', '{', '}']) && !breaks_out(v))
}

/// Whether `text` would open or close a comment, or leave a string or an
/// escape unterminated, once written into the stylesheet.
pub(crate) fn breaks_out(text: &str) -> bool {
    if text.contains("/*") || text.contains("*/") {
        return true;
    }
    let mut quote = None;
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        match (quote, c) {
            (_, '\\') => {
                if chars.next().is_none() {
                    return true;
                }
            }
            (None, '"' | '\'') => quote = Some(c),
            (Some(open), c) if c == open => quote = None,
            _ => {}
        }
    }
    quote.is_some()
}
