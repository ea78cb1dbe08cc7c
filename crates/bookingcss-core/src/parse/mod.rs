//! CSS to configuration.
//!
//! Importing is best effort. The input is tokenized once into an immutable
//! document, then a fixed list of extractors reads it. Extractors never see
//! each other's results and a failing one is logged and skipped, so a
//! malformed `@import` cannot cost the button colors. The surviving
//! extractions are merged into a base configuration.
//!
//! ```rust
//! use bookingcss_core::{parse, ParseStatus};
//!
//! let outcome = parse(":root {\n  --color-button: #3D57FF;\n}\n");
//! assert_eq!(outcome.status, ParseStatus::Success);
//! assert_eq!(outcome.updated_field_count, 1);
//!
//! let config = outcome.recovered.unwrap();
//! assert_eq!(config.colors.button.as_deref(), Some("#3D57FF"));
//!
//! assert_eq!(parse("   ").status, ParseStatus::Error);
//! ```

mod document;
mod extract;
mod fonts;
mod merge;
mod snippets;

use serde::{Deserialize, Serialize};

use crate::config::StyleConfig;

use document::Document;

/// Overall result of an import.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParseStatus {
    /// At least one field was recovered.
    Success,
    /// The stylesheet was read but nothing in it was recognized.
    Warning,
    /// There was nothing to read.
    Error,
}

impl ParseStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParseStatus::Success => "success",
            ParseStatus::Warning => "warning",
            ParseStatus::Error => "error",
        }
    }
}

/// What [`parse`] recovered from a stylesheet.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseOutcome {
    /// Number of successful extractions. A border shorthand or a font
    /// import counts once however many fields it fills.
    pub updated_field_count: usize,
    /// The merged configuration; `None` only for [`ParseStatus::Error`].
    pub recovered: Option<StyleConfig>,
    pub status: ParseStatus,
}

impl ParseOutcome {
    fn error() -> Self {
        ParseOutcome {
            updated_field_count: 0,
            recovered: None,
            status: ParseStatus::Error,
        }
    }

    fn unchanged(base: &StyleConfig) -> Self {
        ParseOutcome {
            updated_field_count: 0,
            recovered: Some(base.clone()),
            status: ParseStatus::Warning,
        }
    }

    /// One-line summary suitable for a status bar.
    pub fn message(&self) -> String {
        match self.status {
            ParseStatus::Success if self.updated_field_count == 1 => {
                "Imported 1 setting".to_string()
            }
            ParseStatus::Success => format!("Imported {} settings", self.updated_field_count),
            ParseStatus::Warning => "No recognizable settings found in the CSS".to_string(),
            ParseStatus::Error => "No CSS to import".to_string(),
        }
    }
}

/// Recovers a configuration from `css`, starting from an empty one.
pub fn parse(css: &str) -> ParseOutcome {
    parse_into(css, &StyleConfig::default())
}

/// Recovers a configuration from `css` and merges it over `base`.
///
/// Fields the stylesheet does not mention keep their `base` values. Font
/// sources and snippets already in `base` are not duplicated.
pub fn parse_into(css: &str, base: &StyleConfig) -> ParseOutcome {
    if css.trim().is_empty() {
        return ParseOutcome::error();
    }

    let source = css.replace("\r\n", "\n").replace('\r', "\n");
    let doc = Document::parse(&source);

    let mut found = Vec::new();
    for extractor in extract::extractors() {
        match extractor.run(&doc) {
            Ok(extractions) => {
                if !extractions.is_empty() {
                    tracing::debug!(
                        extractor = extractor.name(),
                        count = extractions.len(),
                        "recovered settings"
                    );
                }
                found.extend(extractions);
            }
            Err(err) => {
                tracing::warn!(extractor = extractor.name(), error = %err, "extractor failed");
            }
        }
    }

    let count = found.len();
    if count == 0 {
        return ParseOutcome::unchanged(base);
    }

    match merge::merge(base, found) {
        Ok(config) => ParseOutcome {
            updated_field_count: count,
            recovered: Some(config),
            status: ParseStatus::Success,
        },
        Err(err) => {
            tracing::warn!(error = %err, "could not merge recovered settings");
            ParseOutcome::unchanged(base)
        }
    }
}
