//! Error types for configuration loading and stylesheet import.
//!
//! Neither [`generate`](crate::generate) nor [`parse`](crate::parse) return
//! errors: generation omits rules it cannot build, and parsing isolates each
//! extractor. [`ConfigError`] covers the fallible edges around them (reading
//! and validating configuration files), while `ExtractError` stays internal to
//! the importer and is only ever logged.

use std::path::PathBuf;

/// Errors raised while loading, saving or validating a [`StyleConfig`](crate::StyleConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file could not be read or written.
    #[error("Failed to access config '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON (de)serialization failed.
    #[error("Invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML (de)serialization failed.
    #[error("Invalid YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The file extension does not map to a known config format.
    #[error("Unsupported config format for '{path}' (expected .json, .yaml or .yml)")]
    UnsupportedFormat { path: PathBuf },

    /// A font source violates its kind's invariants.
    #[error("Invalid font source '{id}': {message}")]
    InvalidFontSource { id: String, message: String },
}

impl ConfigError {
    /// Create an I/O error for the given path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a font source validation error.
    pub fn invalid_font_source(id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidFontSource {
            id: id.into(),
            message: message.into(),
        }
    }
}

/// Failure of a single importer extractor.
///
/// The importer logs these and moves on to the next extractor.
#[derive(Debug, thiserror::Error)]
pub(crate) enum ExtractError {
    /// An `@import` pointed at a known font host but its URL did not parse.
    #[error("Malformed font import '{url}': {source}")]
    MalformedImport {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// An `@font-face` block lacks a family name or a usable `src`.
    #[error("Malformed @font-face: {0}")]
    MalformedFontFace(&'static str),

    /// An extraction targeted a field the configuration does not have.
    #[error("Unknown config field '{0}'")]
    UnknownField(&'static str),

    /// The merged configuration failed to deserialize.
    #[error("Failed to merge recovered fields: {0}")]
    Merge(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display_includes_path() {
        let err = ConfigError::io(
            "themes/site.yaml",
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        );
        let msg = err.to_string();
        assert!(msg.contains("themes/site.yaml"));
        assert!(msg.contains("missing"));
    }

    #[test]
    fn test_invalid_font_source_display() {
        let err = ConfigError::invalid_font_source("brand", "self-hosted fonts need a file");
        assert_eq!(
            err.to_string(),
            "Invalid font source 'brand': self-hosted fonts need a file"
        );
    }

    #[test]
    fn test_unknown_field_display() {
        let err = ExtractError::UnknownField("/colors/nope");
        assert_eq!(err.to_string(), "Unknown config field '/colors/nope'");
    }
}
