//! # BookingCSS Core - Booking Widget Stylesheet Engine
//!
//! `bookingcss-core` turns a structured style configuration into the CSS a
//! third-party booking widget expects, and reads such a stylesheet back into
//! a configuration.
//!
//! ## Core Concepts
//!
//! - [`StyleConfig`]: Fonts, colors, typography, per-element styles, toggles
//!   and custom snippets. Every text field is optional.
//! - [`generate`]: Deterministic config to CSS. Missing or unusable values
//!   omit their rule; nothing here fails.
//! - [`parse`]: Best-effort CSS to config, reporting how many settings were
//!   recovered as a [`ParseOutcome`].
//! - [`font`]: Fallback suggestion and font stack construction across Google
//!   Fonts, Adobe Fonts and self-hosted sources.
//!
//! ## Quick Start
//!
//! ```rust
//! use bookingcss_core::{generate, parse, ButtonType, ParseStatus, StyleConfig};
//!
//! let mut config = StyleConfig::new();
//! config.colors.button = Some("#3D57FF".into());
//! config.colors.heading = Some("#1A1A1A".into());
//! config.buttons.primary_type = Some(ButtonType::Outlined);
//!
//! let css = generate(&config);
//! assert!(css.contains("--color-heading: #1A1A1A;"));
//!
//! let outcome = parse(&css);
//! assert_eq!(outcome.status, ParseStatus::Success);
//!
//! let recovered = outcome.recovered.unwrap();
//! assert_eq!(recovered.colors.button, config.colors.button);
//! assert_eq!(recovered.buttons.primary_type, Some(ButtonType::Outlined));
//! ```
//!
//! Both directions are pure functions over immutable inputs.

pub mod color;
pub mod config;
pub mod error;
pub mod font;
pub mod generate;
pub mod parse;
pub mod selectors;

pub use config::{
    AdvancedToggles, AtAGlanceStyles, ButtonStyles, ButtonType, CardStyles,
    CheckoutSummaryStyles, ColorPalette, ConfigFormat, CustomSnippet, DividerStyles, FontFamily,
    FontFile, FontSource, FontSourceKind, InputStyles, ListStyles, MobileButtonStyles,
    ModalStyles, StyleConfig, TextRole, Typography,
};
pub use error::ConfigError;
pub use generate::{emitted_sections, generate};
pub use parse::{parse, parse_into, ParseOutcome, ParseStatus};
