//! Applying extractions to a base configuration.
//!
//! Field updates go through the serialized form: the base is turned into a
//! `serde_json::Value`, each update replaces the value at its JSON pointer,
//! and the tree is deserialized back. Font sources and snippets are merged
//! into the lists afterwards so repeated imports do not pile up.

use serde_json::Value;

use crate::config::{CustomSnippet, FontSource, FontSourceKind, StyleConfig};
use crate::error::ExtractError;
use crate::selectors::selector_key;

use super::extract::Extraction;

pub(crate) fn merge(base: &StyleConfig, extractions: Vec<Extraction>) -> Result<StyleConfig, ExtractError> {
    let mut tree = serde_json::to_value(base)?;
    let mut fonts = Vec::new();
    let mut snippets = Vec::new();

    for extraction in extractions {
        match extraction {
            Extraction::Fields(updates) => {
                for (path, value) in updates {
                    set_field(&mut tree, path, value)?;
                }
            }
            Extraction::FontSource(source) => fonts.push(source),
            Extraction::Snippet(snippet) => snippets.push(snippet),
        }
    }

    let mut config: StyleConfig = serde_json::from_value(tree)?;
    for source in fonts {
        add_font_source(&mut config.fonts, source);
    }
    for snippet in snippets {
        add_snippet(&mut config.custom_snippets, snippet);
    }
    Ok(config)
}

fn set_field(tree: &mut Value, path: &'static str, value: Value) -> Result<(), ExtractError> {
    let slot = tree
        .pointer_mut(path)
        .ok_or(ExtractError::UnknownField(path))?;
    *slot = value;
    Ok(())
}

/// First `<prefix>-<n>` not already taken.
fn unique_id<'a>(prefix: &str, taken: impl Iterator<Item = &'a str> + Clone) -> String {
    (1..)
        .map(|n| format!("{}-{}", prefix, n))
        .find(|id| !taken.clone().any(|existing| existing == id))
        .unwrap_or_else(|| prefix.to_string())
}

fn id_prefix(kind: FontSourceKind) -> &'static str {
    match kind {
        FontSourceKind::GoogleFonts => "google-fonts",
        FontSourceKind::AdobeTypekit => "typekit",
        FontSourceKind::SelfHosted => "self-hosted",
    }
}

/// Appends a recovered source unless an equivalent one exists. Link sources
/// match by kind and URL; self-hosted sources match by family and gain any
/// new files.
pub(crate) fn add_font_source(fonts: &mut Vec<FontSource>, mut source: FontSource) {
    if source.kind == FontSourceKind::SelfHosted {
        let family = source.primary_family().map(str::to_string);
        let existing = fonts.iter_mut().find(|f| {
            f.kind == FontSourceKind::SelfHosted && f.primary_family() == family.as_deref()
        });
        if let Some(existing) = existing {
            for file in source.files {
                if !existing.files.iter().any(|f| f.url == file.url) {
                    existing.files.push(file);
                }
            }
            return;
        }
    } else if fonts
        .iter()
        .any(|f| f.kind == source.kind && f.url.is_some() && f.url == source.url)
    {
        return;
    }

    source.id = unique_id(id_prefix(source.kind), fonts.iter().map(|f| f.id.as_str()));
    fonts.push(source);
}

/// Adds a snippet, replacing the properties of one with the same selector.
pub(crate) fn add_snippet(snippets: &mut Vec<CustomSnippet>, mut snippet: CustomSnippet) {
    let key = selector_key(&snippet.selector);
    if let Some(existing) = snippets
        .iter_mut()
        .find(|s| selector_key(&s.selector) == key)
    {
        existing.properties = snippet.properties;
        return;
    }
    snippet.id = unique_id("snippet", snippets.iter().map(|s| s.id.as_str()));
    snippets.push(snippet);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{FontFamily, FontFile};

    #[test]
    fn test_fields_overwrite_base() {
        let mut base = StyleConfig::default();
        base.colors.body = Some("#000".into());
        base.colors.heading = Some("#111".into());

        let merged = merge(
            &base,
            vec![
                Extraction::field("/colors/body", "#333"),
                Extraction::field("/advanced/darkTheme", true),
            ],
        )
        .unwrap();
        assert_eq!(merged.colors.body.as_deref(), Some("#333"));
        assert_eq!(merged.colors.heading.as_deref(), Some("#111"));
        assert!(merged.advanced.dark_theme);
    }

    #[test]
    fn test_unknown_field_is_an_error() {
        let err = merge(
            &StyleConfig::default(),
            vec![Extraction::field("/colors/nope", "#fff")],
        )
        .unwrap_err();
        assert!(matches!(err, ExtractError::UnknownField("/colors/nope")));
    }

    #[test]
    fn test_link_sources_deduplicated_by_url() {
        let url = "https://fonts.googleapis.com/css2?family=Inter";
        let mut fonts = vec![FontSource::google("google-fonts-1", url)];
        add_font_source(&mut fonts, FontSource::google("", url));
        assert_eq!(fonts.len(), 1);

        add_font_source(&mut fonts, FontSource::google("", "https://fonts.googleapis.com/css2?family=Lora"));
        assert_eq!(fonts.len(), 2);
        assert_eq!(fonts[1].id, "google-fonts-2");
    }

    #[test]
    fn test_self_hosted_merges_files() {
        let mut fonts = vec![FontSource::self_hosted("brand", FontFamily::new("Brand"))
            .with_file(FontFile::new("/a.woff2"))];
        add_font_source(
            &mut fonts,
            FontSource::self_hosted("", FontFamily::new("Brand"))
                .with_file(FontFile::new("/a.woff2"))
                .with_file(FontFile::new("/b.woff2")),
        );
        assert_eq!(fonts.len(), 1);
        assert_eq!(fonts[0].files.len(), 2);
    }

    #[test]
    fn test_snippets_deduplicated_by_selector() {
        let mut snippets = vec![CustomSnippet::new("mine", "Promo", ".promo", "color: red;")];
        add_snippet(
            &mut snippets,
            CustomSnippet::new("", "Imported rule", ".promo ", "color: blue;"),
        );
        assert_eq!(snippets.len(), 1);
        assert_eq!(snippets[0].id, "mine");
        assert_eq!(snippets[0].name, "Promo");
        assert_eq!(snippets[0].properties, "color: blue;");

        add_snippet(&mut snippets, CustomSnippet::new("", "X", ".other", "margin: 0;"));
        assert_eq!(snippets[1].id, "snippet-1");
    }
}
