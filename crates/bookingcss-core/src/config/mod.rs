//! The structured style configuration shared by the generator and importer.
//!
//! A [`StyleConfig`] is a plain value: it starts empty, the caller fills in
//! fields, and [`generate`](crate::generate) reads it wholesale. Every text
//! field is an `Option<String>`; `None`, empty and whitespace-only values are
//! all treated as unset, so a rule gated on a field never fires on blanks.
//!
//! # Loading
//!
//! Configurations serialize with camelCase keys and can be loaded from JSON
//! or YAML:
//!
//! ```rust
//! use bookingcss_core::StyleConfig;
//!
//! let config = StyleConfig::from_yaml(r##"
//! colors:
//!   button: "#3D57FF"
//! buttons:
//!   primaryType: solid
//! typography:
//!   body:
//!     family: Inter
//! "##).unwrap();
//!
//! assert_eq!(config.colors.button.as_deref(), Some("#3D57FF"));
//! ```

mod advanced;
mod elements;
mod fonts;
mod typography;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub use advanced::{AdvancedToggles, CustomSnippet};
pub use elements::{
    AtAGlanceStyles, ButtonStyles, ButtonType, CardStyles, CheckoutSummaryStyles, DividerStyles,
    InputStyles, ListStyles, MobileButtonStyles, ModalStyles,
};
pub use fonts::{FontFamily, FontFile, FontSource, FontSourceKind};
pub use typography::{ColorPalette, TextRole, Typography};

/// Complete configuration for one widget stylesheet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StyleConfig {
    pub fonts: Vec<FontSource>,
    pub colors: ColorPalette,
    pub typography: Typography,
    pub buttons: ButtonStyles,
    pub mobile_buttons: MobileButtonStyles,
    pub inputs: InputStyles,
    pub modals: ModalStyles,
    pub lists: ListStyles,
    pub cards: CardStyles,
    pub at_a_glance: AtAGlanceStyles,
    pub dividers: DividerStyles,
    pub checkout_summary: CheckoutSummaryStyles,
    pub advanced: AdvancedToggles,
    pub custom_snippets: Vec<CustomSnippet>,
}

impl StyleConfig {
    /// Creates an empty configuration. Generating from it yields no CSS.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parses a configuration from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Loads and validates a configuration file.
    ///
    /// The format is picked from the extension: `.json`, `.yaml` or `.yml`.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the file cannot be read, does not parse,
    /// or contains an invalid font source.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path)?;
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;

        let config = match format {
            ConfigFormat::Json => Self::from_json(&content)?,
            ConfigFormat::Yaml => Self::from_yaml(&content)?,
        };
        config.validate()?;
        tracing::debug!(path = %path.display(), "loaded style config");
        Ok(config)
    }

    /// Writes the configuration, picking the format from the extension.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let content = match ConfigFormat::from_path(path)? {
            ConfigFormat::Json => self.to_json()?,
            ConfigFormat::Yaml => self.to_yaml()?,
        };
        std::fs::write(path, content).map_err(|e| ConfigError::io(path, e))
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Checks every font source's invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.fonts.iter().try_for_each(FontSource::validate)
    }
}

/// Serialization format of a config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Yaml,
}

impl ConfigFormat {
    /// Picks the format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());
        match extension.as_deref() {
            Some("json") => Ok(ConfigFormat::Json),
            Some("yaml") | Some("yml") => Ok(ConfigFormat::Yaml),
            _ => Err(ConfigError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

/// Returns the trimmed value of a text field, or `None` when it is unset,
/// empty or whitespace-only.
pub fn present(field: &Option<String>) -> Option<&str> {
    field
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
}
