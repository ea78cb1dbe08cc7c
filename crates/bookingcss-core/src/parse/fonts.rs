//! Font recovery from `@import` and `@font-face`.

use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

use crate::config::{FontFamily, FontFile, FontSource, FontSourceKind};
use crate::error::ExtractError;
use crate::font::{primary_family, DEFAULT_FALLBACK};

use super::document::{Document, Item};
use super::extract::{ExtractResult, Extraction};

const GOOGLE_FONTS_HOST: &str = "fonts.googleapis.com";
const TYPEKIT_HOST: &str = "use.typekit.net";

static SRC_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"url\(\s*(?:"([^"]*)"|'([^']*)'|([^)'"\s]+))\s*\)"#).expect("valid regex")
});

fn imports(doc: &Document) -> impl Iterator<Item = &str> {
    doc.items.iter().filter_map(|item| match item {
        Item::Import { url } => Some(url.trim()),
        _ => None,
    })
}

/// Parses an import URL, accepting protocol-relative `//host/...` forms.
fn parse_import_url(raw: &str) -> Result<Url, ExtractError> {
    let absolute = if raw.starts_with("//") {
        format!("https:{}", raw)
    } else {
        raw.to_string()
    };
    Url::parse(&absolute).map_err(|source| ExtractError::MalformedImport {
        url: raw.to_string(),
        source,
    })
}

fn mentions_host(raw: &str, host: &str) -> bool {
    raw.to_ascii_lowercase().contains(host)
}

/// Families named by the `family=` parameters of a Google Fonts URL.
///
/// Handles both API versions: `family=Open+Sans:400,700|Lato` and
/// `family=Inter:wght@400;700&family=Lora`.
fn google_families(url: &Url) -> Vec<FontFamily> {
    let mut families: Vec<FontFamily> = Vec::new();
    for (key, value) in url.query_pairs() {
        if key != "family" {
            continue;
        }
        for entry in value.split('|') {
            let name = entry.split(':').next().unwrap_or_default().trim();
            if name.is_empty() || families.iter().any(|f| f.name == name) {
                continue;
            }
            families.push(FontFamily::new(name).with_fallback(DEFAULT_FALLBACK));
        }
    }
    families
}

fn google_source(raw: &str) -> Result<Option<FontSource>, ExtractError> {
    let url = parse_import_url(raw)?;
    if url.host_str() != Some(GOOGLE_FONTS_HOST) {
        return Ok(None);
    }
    let mut source = FontSource::new("", FontSourceKind::GoogleFonts).with_url(raw);
    source.families = google_families(&url);
    Ok(Some(source))
}

pub(crate) fn extract_google_imports(doc: &Document) -> ExtractResult {
    let mut found = Vec::new();
    for raw in imports(doc).filter(|raw| mentions_host(raw, GOOGLE_FONTS_HOST)) {
        match google_source(raw) {
            Ok(Some(source)) => found.push(Extraction::FontSource(source)),
            Ok(None) => {}
            Err(err) => tracing::warn!(error = %err, "skipping font import"),
        }
    }
    Ok(found)
}

pub(crate) fn extract_typekit_imports(doc: &Document) -> ExtractResult {
    let mut found = Vec::new();
    for raw in imports(doc).filter(|raw| mentions_host(raw, TYPEKIT_HOST)) {
        match parse_import_url(raw) {
            Ok(url) if url.host_str() == Some(TYPEKIT_HOST) => {
                let source = FontSource::new("", FontSourceKind::AdobeTypekit).with_url(raw);
                found.push(Extraction::FontSource(source));
            }
            Ok(_) => {}
            Err(err) => tracing::warn!(error = %err, "skipping font import"),
        }
    }
    Ok(found)
}

fn font_face_file(family: &Option<String>, src: Option<&str>) -> Result<FontFile, ExtractError> {
    if family.is_none() {
        return Err(ExtractError::MalformedFontFace("missing font-family"));
    }
    let url = src
        .and_then(|src| SRC_URL.captures(src))
        .and_then(|caps| caps.get(1).or_else(|| caps.get(2)).or_else(|| caps.get(3)))
        .map(|m| m.as_str().trim().to_string())
        .filter(|url| !url.is_empty())
        .ok_or(ExtractError::MalformedFontFace("missing src url"))?;
    Ok(FontFile::new(url))
}

/// Groups `@font-face` blocks by family into self-hosted sources.
pub(crate) fn extract_font_faces(doc: &Document) -> ExtractResult {
    let mut sources: Vec<FontSource> = Vec::new();
    for item in &doc.items {
        let Item::FontFace { declarations } = item else {
            continue;
        };
        let family = declarations.get("font-family").and_then(primary_family);
        let mut file = match font_face_file(&family, declarations.get("src")) {
            Ok(file) => file,
            Err(err) => {
                tracing::warn!(error = %err, "skipping @font-face");
                continue;
            }
        };
        file.weight = declarations.get("font-weight").map(str::to_string);
        file.style = declarations.get("font-style").map(str::to_string);

        let Some(family) = family else { continue };
        match sources
            .iter_mut()
            .find(|source| source.primary_family() == Some(family.as_str()))
        {
            Some(source) => source.files.push(file),
            None => sources.push(
                FontSource::self_hosted("", FontFamily::new(family).with_fallback(DEFAULT_FALLBACK))
                    .with_file(file),
            ),
        }
    }
    Ok(sources.into_iter().map(Extraction::FontSource).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sources(found: Vec<Extraction>) -> Vec<FontSource> {
        found
            .into_iter()
            .filter_map(|e| match e {
                Extraction::FontSource(source) => Some(source),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_google_import_families() {
        let doc = Document::parse(
            "@import url('https://fonts.googleapis.com/css2?family=Open+Sans:wght@400;700&family=Playfair%20Display&display=swap');",
        );
        let found = sources(extract_google_imports(&doc).unwrap());
        assert_eq!(found.len(), 1);
        let names: Vec<_> = found[0].families.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["Open Sans", "Playfair Display"]);
        assert_eq!(found[0].families[0].fallback.as_deref(), Some("Arial"));
        assert_eq!(found[0].kind, FontSourceKind::GoogleFonts);
    }

    #[test]
    fn test_google_legacy_pipe_syntax() {
        let doc = Document::parse(
            "@import url(//fonts.googleapis.com/css?family=Lato:400,700|Roboto+Mono);",
        );
        let found = sources(extract_google_imports(&doc).unwrap());
        let names: Vec<_> = found[0].families.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["Lato", "Roboto Mono"]);
        assert_eq!(found[0].url.as_deref(), Some("//fonts.googleapis.com/css?family=Lato:400,700|Roboto+Mono"));
    }

    #[test]
    fn test_one_source_per_import() {
        let doc = Document::parse(
            "@import url(\"https://fonts.googleapis.com/css2?family=Inter\");\n\
             @import url(\"https://fonts.googleapis.com/css2?family=Lora\");\n\
             @import url(\"https://example.com/site.css\");",
        );
        assert_eq!(sources(extract_google_imports(&doc).unwrap()).len(), 2);
    }

    #[test]
    fn test_typekit_import() {
        let doc = Document::parse("@import url(\"https://use.typekit.net/abc1234.css\");");
        let found = sources(extract_typekit_imports(&doc).unwrap());
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].kind, FontSourceKind::AdobeTypekit);
        assert!(found[0].families.is_empty());
    }

    #[test]
    fn test_font_faces_grouped_by_family() {
        let doc = Document::parse(
            "@font-face { font-family: \"Brand\"; src: url(\"/fonts/brand.woff2\") format(\"woff2\"); font-weight: 400; }\n\
             @font-face { font-family: 'Brand'; src: url(/fonts/brand-bold.woff2); font-weight: 700; font-style: normal; }\n\
             @font-face { font-family: Other; src: local(Other); }\n\
             @font-face { src: url(/x.woff); }",
        );
        let found = sources(extract_font_faces(&doc).unwrap());
        assert_eq!(found.len(), 1);
        let brand = &found[0];
        assert_eq!(brand.kind, FontSourceKind::SelfHosted);
        assert_eq!(brand.primary_family(), Some("Brand"));
        let urls: Vec<_> = brand.files.iter().map(|f| f.url.as_str()).collect();
        assert_eq!(urls, vec!["/fonts/brand.woff2", "/fonts/brand-bold.woff2"]);
        assert_eq!(brand.files[1].weight.as_deref(), Some("700"));
        assert!(brand.validate().is_ok());
    }
}
