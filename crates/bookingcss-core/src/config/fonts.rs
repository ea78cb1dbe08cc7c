//! Font source definitions.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Where a font family is loaded from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FontSourceKind {
    /// A Google Fonts stylesheet link.
    #[default]
    GoogleFonts,
    /// An Adobe Fonts (Typekit) kit link.
    AdobeTypekit,
    /// Font files served by the site itself.
    SelfHosted,
}

impl FontSourceKind {
    /// Config-facing name of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            FontSourceKind::GoogleFonts => "googleFonts",
            FontSourceKind::AdobeTypekit => "adobeTypekit",
            FontSourceKind::SelfHosted => "selfHosted",
        }
    }
}

/// A family provided by a [`FontSource`], with the fallback used in stacks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FontFamily {
    pub name: String,
    pub fallback: Option<String>,
}

impl FontFamily {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fallback: None,
        }
    }

    pub fn with_fallback(mut self, fallback: impl Into<String>) -> Self {
        self.fallback = Some(fallback.into());
        self
    }
}

/// One self-hosted font file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FontFile {
    pub url: String,
    pub weight: Option<String>,
    pub style: Option<String>,
}

impl FontFile {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            weight: None,
            style: None,
        }
    }

    pub fn with_weight(mut self, weight: impl Into<String>) -> Self {
        self.weight = Some(weight.into());
        self
    }

    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }
}

/// One configured family group: a Google Fonts link, a Typekit kit, or a
/// set of self-hosted files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FontSource {
    pub id: String,
    pub kind: FontSourceKind,
    /// Stylesheet URL for Google/Typekit sources.
    pub url: Option<String>,
    pub families: Vec<FontFamily>,
    /// File variants; only meaningful for self-hosted sources.
    pub files: Vec<FontFile>,
}

impl FontSource {
    pub fn new(id: impl Into<String>, kind: FontSourceKind) -> Self {
        Self {
            id: id.into(),
            kind,
            ..Self::default()
        }
    }

    pub fn google(id: impl Into<String>, url: impl Into<String>) -> Self {
        Self::new(id, FontSourceKind::GoogleFonts).with_url(url)
    }

    pub fn typekit(id: impl Into<String>, url: impl Into<String>) -> Self {
        Self::new(id, FontSourceKind::AdobeTypekit).with_url(url)
    }

    pub fn self_hosted(id: impl Into<String>, family: FontFamily) -> Self {
        Self::new(id, FontSourceKind::SelfHosted).with_family(family)
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_family(mut self, family: FontFamily) -> Self {
        self.families.push(family);
        self
    }

    pub fn with_file(mut self, file: FontFile) -> Self {
        self.files.push(file);
        self
    }

    /// Family name used for `@font-face` declarations of a self-hosted source.
    pub fn primary_family(&self) -> Option<&str> {
        self.families
            .first()
            .map(|family| family.name.trim())
            .filter(|name| !name.is_empty())
    }

    /// Checks the per-kind invariants.
    ///
    /// Self-hosted sources need at least one file and a family name; the
    /// link-based kinds may carry an empty family list (an unresolved
    /// Typekit kit, for instance).
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.kind {
            FontSourceKind::SelfHosted => {
                if self.files.iter().all(|file| file.url.trim().is_empty()) {
                    return Err(ConfigError::invalid_font_source(
                        &self.id,
                        "self-hosted sources need at least one font file",
                    ));
                }
                if self.primary_family().is_none() {
                    return Err(ConfigError::invalid_font_source(
                        &self.id,
                        "self-hosted sources need a family name",
                    ));
                }
            }
            FontSourceKind::GoogleFonts => {
                let has_url = self.url.as_deref().is_some_and(|u| !u.trim().is_empty());
                if !has_url && self.families.is_empty() {
                    return Err(ConfigError::invalid_font_source(
                        &self.id,
                        "Google Fonts sources need a url or at least one family",
                    ));
                }
            }
            FontSourceKind::AdobeTypekit => {}
        }
        Ok(())
    }
}
