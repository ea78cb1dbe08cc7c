//! Font resolution: generic families, fallback suggestions and font stacks.
//!
//! A *font stack* is the `font-family` value the generator writes into the
//! `--font-*` variables: the primary family (quoted), its fallback, and the
//! fallback's generic bucket.
//!
//! ```rust
//! use bookingcss_core::font::{build_font_stack, suggest_fallback};
//!
//! assert_eq!(build_font_stack("Inter", "Arial"), r#""Inter", Arial, sans-serif"#);
//! assert_eq!(build_font_stack("Inter", "sans-serif"), r#""Inter", sans-serif"#);
//! assert_eq!(suggest_fallback("Roboto Mono"), "Courier");
//! ```

use crate::config::{FontFamily, FontSource};

/// The CSS generic families, in lookup order.
pub const GENERIC_FAMILIES: [&str; 6] = [
    "sans-serif",
    "serif",
    "monospace",
    "cursive",
    "fantasy",
    "system-ui",
];

/// Fallback used when nothing better is known.
pub const DEFAULT_FALLBACK: &str = "Arial";

const GOOGLE_FONTS_CSS: &str = "https://fonts.googleapis.com/css2";

/// Returns the generic bucket for a fallback family.
///
/// Generic names map to themselves; the common web-safe families map to
/// their bucket. Anything else is `sans-serif`.
pub fn generic_family_of(fallback: &str) -> &'static str {
    let name = unquote(fallback).to_ascii_lowercase();
    if let Some(generic) = GENERIC_FAMILIES.iter().copied().find(|g| *g == name) {
        return generic;
    }
    match name.as_str() {
        "georgia" | "times" | "times new roman" | "garamond" | "palatino" => "serif",
        "courier" | "courier new" | "consolas" | "monaco" | "menlo" => "monospace",
        "comic sans ms" => "cursive",
        _ => "sans-serif",
    }
}

/// Builds `"<primary>", <fallback>, <generic>`, dropping the generic when it
/// equals the fallback.
pub fn build_font_stack(primary: &str, fallback: &str) -> String {
    let primary = unquote(primary);
    let fallback = fallback.trim();
    let generic = generic_family_of(fallback);

    if fallback.is_empty() || fallback.eq_ignore_ascii_case(generic) {
        format!("\"{}\", {}", primary, generic)
    } else {
        format!("\"{}\", {}, {}", primary, fallback, generic)
    }
}

/// Suggests a fallback for a family from keywords in its name.
///
/// Buckets are checked in order and the first hit wins, so "Roboto Mono
/// Serif" is still a monospace family. The script bucket also lists a few
/// popular script families whose names carry no keyword.
pub fn suggest_fallback(name: &str) -> &'static str {
    const BUCKETS: [(&[&str], &str); 3] = [
        (&["mono", "courier", "console", "code"], "Courier"),
        (
            &["serif", "times", "garamond", "georgia", "baskerville", "playfair"],
            "Georgia",
        ),
        (
            &["script", "cursive", "handwriting", "pacifico", "lobster", "caveat"],
            "cursive",
        ),
    ];

    let lower = name.to_lowercase();
    BUCKETS
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(_, fallback)| *fallback)
        .unwrap_or(DEFAULT_FALLBACK)
}

/// Finds the stored fallback for `family` across all sources.
///
/// Matching is by exact family name; a missing or blank fallback resolves to
/// [`DEFAULT_FALLBACK`].
pub fn resolve_fallback_for(family: &str, sources: &[FontSource]) -> String {
    let family = unquote(family);
    sources
        .iter()
        .flat_map(|source| source.families.iter())
        .find(|entry| entry.name.trim() == family)
        .and_then(|entry| entry.fallback.as_deref())
        .map(str::trim)
        .filter(|fallback| !fallback.is_empty())
        .unwrap_or(DEFAULT_FALLBACK)
        .to_string()
}

/// Builds the stack for a configured family, or `None` when the family is
/// unset.
pub fn resolved_stack(family: Option<&str>, sources: &[FontSource]) -> Option<String> {
    let family = unquote(family?);
    if family.is_empty() {
        return None;
    }
    Some(build_font_stack(
        family,
        &resolve_fallback_for(family, sources),
    ))
}

/// First family of a `font-family` value, unquoted.
///
/// `"Open Sans", Arial, sans-serif` yields `Open Sans`.
pub fn primary_family(stack: &str) -> Option<String> {
    let first = unquote(stack.split(',').next()?);
    (!first.is_empty()).then(|| first.to_string())
}

/// Builds a css2 import URL for Google families that have no explicit URL.
pub fn google_fonts_url(families: &[FontFamily]) -> Option<String> {
    let params: Vec<String> = families
        .iter()
        .map(|family| family.name.trim())
        .filter(|name| !name.is_empty())
        .map(|name| {
            let encoded: String = url::form_urlencoded::byte_serialize(name.as_bytes()).collect();
            format!("family={}", encoded)
        })
        .collect();

    if params.is_empty() {
        return None;
    }
    Some(format!(
        "{}?{}&display=swap",
        GOOGLE_FONTS_CSS,
        params.join("&")
    ))
}

/// `format()` hint for a font file URL, from its extension.
pub fn font_format_of(url: &str) -> Option<&'static str> {
    let path = url.split(|c: char| c == '?' || c == '#').next().unwrap_or(url);
    let extension = path.rsplit_once('.')?.1.to_ascii_lowercase();
    match extension.as_str() {
        "woff2" => Some("woff2"),
        "woff" => Some("woff"),
        "ttf" => Some("truetype"),
        "otf" => Some("opentype"),
        "eot" => Some("embedded-opentype"),
        _ => None,
    }
}

fn unquote(value: &str) -> &str {
    value.trim().trim_matches(|c: char| c == '"' || c == '\'').trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FontSourceKind;

    #[test]
    fn test_generic_family_lookup() {
        assert_eq!(generic_family_of("serif"), "serif");
        assert_eq!(generic_family_of("system-ui"), "system-ui");
        assert_eq!(generic_family_of("Monospace"), "monospace");
        assert_eq!(generic_family_of("Arial"), "sans-serif");
        assert_eq!(generic_family_of("Georgia"), "serif");
        assert_eq!(generic_family_of("Courier"), "monospace");
        assert_eq!(generic_family_of("Wingdings"), "sans-serif");
    }

    #[test]
    fn test_build_font_stack() {
        assert_eq!(build_font_stack("Inter", "Arial"), r#""Inter", Arial, sans-serif"#);
        assert_eq!(build_font_stack("Inter", "sans-serif"), r#""Inter", sans-serif"#);
        assert_eq!(build_font_stack("Pacifico", "cursive"), r#""Pacifico", cursive"#);
        assert_eq!(
            build_font_stack("Playfair Display", "Georgia"),
            r#""Playfair Display", Georgia, serif"#
        );
        assert_eq!(build_font_stack("\"Inter\"", ""), r#""Inter", sans-serif"#);
    }

    #[test]
    fn test_suggest_fallback() {
        assert_eq!(suggest_fallback("Roboto Mono"), "Courier");
        assert_eq!(suggest_fallback("Source Code Pro"), "Courier");
        assert_eq!(suggest_fallback("Playfair Display"), "Georgia");
        assert_eq!(suggest_fallback("Libre Baskerville"), "Georgia");
        assert_eq!(suggest_fallback("Dancing Script"), "cursive");
        assert_eq!(suggest_fallback("Pacifico"), "cursive");
        assert_eq!(suggest_fallback("Helvetica"), "Arial");
    }

    #[test]
    fn test_suggest_fallback_bucket_order() {
        // "mono" is checked before "serif"
        assert_eq!(suggest_fallback("IBM Plex Mono Serif"), "Courier");
        // "sans-serif" contains "serif"
        assert_eq!(suggest_fallback("PT Sans-Serif"), "Georgia");
    }

    #[test]
    fn test_resolve_fallback_for() {
        let sources = vec![
            FontSource::google("g", "https://fonts.googleapis.com/css2?family=Lora")
                .with_family(FontFamily::new("Lora").with_fallback("Georgia"))
                .with_family(FontFamily::new("Inter")),
            FontSource::new("s", FontSourceKind::SelfHosted)
                .with_family(FontFamily::new("Brand").with_fallback("  ")),
        ];
        assert_eq!(resolve_fallback_for("Lora", &sources), "Georgia");
        assert_eq!(resolve_fallback_for("Inter", &sources), "Arial");
        assert_eq!(resolve_fallback_for("Brand", &sources), "Arial");
        assert_eq!(resolve_fallback_for("Unknown", &sources), "Arial");
    }

    #[test]
    fn test_resolved_stack() {
        let sources = vec![FontSource::google("g", "u")
            .with_family(FontFamily::new("Lora").with_fallback("Georgia"))];
        assert_eq!(
            resolved_stack(Some("Lora"), &sources).as_deref(),
            Some(r#""Lora", Georgia, serif"#)
        );
        assert_eq!(resolved_stack(Some("  "), &sources), None);
        assert_eq!(resolved_stack(None, &sources), None);
    }

    #[test]
    fn test_primary_family() {
        assert_eq!(
            primary_family(r#""Open Sans", Arial, sans-serif"#).as_deref(),
            Some("Open Sans")
        );
        assert_eq!(primary_family("'Lora', serif").as_deref(), Some("Lora"));
        assert_eq!(primary_family("Inter").as_deref(), Some("Inter"));
        assert_eq!(primary_family("  "), None);
    }

    #[test]
    fn test_google_fonts_url() {
        let families = vec![FontFamily::new("Open Sans"), FontFamily::new("Inter")];
        assert_eq!(
            google_fonts_url(&families).as_deref(),
            Some("https://fonts.googleapis.com/css2?family=Open+Sans&family=Inter&display=swap")
        );
        assert_eq!(google_fonts_url(&[]), None);
    }

    #[test]
    fn test_font_format_of() {
        assert_eq!(font_format_of("/fonts/brand.woff2"), Some("woff2"));
        assert_eq!(font_format_of("/fonts/brand.WOFF?v=3"), Some("woff"));
        assert_eq!(font_format_of("brand.ttf#iefix"), Some("truetype"));
        assert_eq!(font_format_of("brand.otf"), Some("opentype"));
        assert_eq!(font_format_of("/fonts/brand"), None);
    }
}
