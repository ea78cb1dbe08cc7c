//! # BookingCSS - Command Line Front End
//!
//! Thin wrapper over [`bookingcss_core`]: load a configuration and write the
//! stylesheet, import a stylesheet back into a configuration, or preview the
//! font stacks the generator would build.
//!
//! ```text
//! bookingcss generate theme.yaml -o widget.css
//! bookingcss parse widget.css --base theme.yaml --format yaml
//! bookingcss fonts "Playfair Display" Inter
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use console::style;

use bookingcss_core::font::{build_font_stack, suggest_fallback};
use bookingcss_core::{generate, parse_into, ParseOutcome, ParseStatus, StyleConfig};

/// Generate and import booking-widget stylesheets.
#[derive(Parser, Debug)]
#[command(name = "bookingcss", version, about)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write the stylesheet for a JSON or YAML configuration
    Generate {
        /// Configuration file (.json, .yaml or .yml)
        config: PathBuf,

        /// Write to a file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Recover a configuration from an existing stylesheet
    Parse {
        /// Stylesheet to import
        css: PathBuf,

        /// Configuration to merge the recovered settings into
        #[arg(long, value_name = "CONFIG")]
        base: Option<PathBuf>,

        /// Output format of the recovered configuration
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,

        /// Write to a file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Show the suggested fallback and font stack for each family
    Fonts {
        #[arg(required = true, value_name = "FAMILY")]
        families: Vec<String>,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Yaml,
}

/// Installs a stderr `fmt` subscriber. Warnings are always shown; each `-v`
/// lowers the threshold one level.
pub fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

pub fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Command::Generate { config, output } => {
            let css = generate_file(config)?;
            write_output(output.as_deref(), &css)
        }
        Command::Parse {
            css,
            base,
            format,
            output,
        } => {
            let text = parse_file(css, base.as_deref(), *format)?;
            write_output(output.as_deref(), &text)
        }
        Command::Fonts { families } => {
            print!("{}", fonts_report(families));
            Ok(())
        }
    }
}

fn load_config(path: &Path) -> Result<StyleConfig> {
    StyleConfig::from_file(path).with_context(|| format!("Failed to load config {}", path.display()))
}

/// Loads a configuration file and renders its stylesheet.
pub fn generate_file(path: &Path) -> Result<String> {
    let config = load_config(path)?;
    let css = generate(&config);
    tracing::info!(bytes = css.len(), "generated stylesheet");
    Ok(css)
}

/// Imports a stylesheet, reporting the outcome on stderr, and serializes the
/// recovered configuration.
pub fn parse_file(path: &Path, base: Option<&Path>, format: OutputFormat) -> Result<String> {
    let css = fs::read_to_string(path)
        .with_context(|| format!("Failed to read stylesheet {}", path.display()))?;
    let base = match base {
        Some(base) => load_config(base)?,
        None => StyleConfig::default(),
    };

    let outcome = parse_into(&css, &base);
    eprintln!("{}", status_line(&outcome));

    let Some(config) = outcome.recovered else {
        bail!("{}: {}", path.display(), outcome.message());
    };
    let text = match format {
        OutputFormat::Json => config.to_json()?,
        OutputFormat::Yaml => config.to_yaml()?,
    };
    Ok(text)
}

/// Colored one-line summary of an import.
pub fn status_line(outcome: &ParseOutcome) -> String {
    let label = style(outcome.status.as_str()).bold();
    let label = match outcome.status {
        ParseStatus::Success => label.green(),
        ParseStatus::Warning => label.yellow(),
        ParseStatus::Error => label.red(),
    };
    format!("{}: {}", label.for_stderr(), outcome.message())
}

/// One line per family: the suggested fallback and the resulting stack.
pub fn fonts_report(families: &[String]) -> String {
    let mut out = String::new();
    for family in families.iter().map(|f| f.trim()).filter(|f| !f.is_empty()) {
        let fallback = suggest_fallback(family);
        out.push_str(&format!(
            "{}: fallback {} -> {}\n",
            family,
            fallback,
            build_font_stack(family, fallback)
        ));
    }
    out
}

fn write_output(path: Option<&Path>, text: &str) -> Result<()> {
    let text = if text.is_empty() || text.ends_with('\n') {
        text.to_string()
    } else {
        format!("{}\n", text)
    };
    match path {
        Some(path) => {
            fs::write(path, text).with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), "wrote output");
        }
        None => print!("{}", text),
    }
    Ok(())
}
