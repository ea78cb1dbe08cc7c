//! End-to-end runs of the command line through `run`.

use std::fs;

use bookingcss::{run, Cli};
use bookingcss_core::{ButtonType, StyleConfig};
use clap::Parser;
use tempfile::TempDir;

const THEME_YAML: &str = r##"
colors:
  button: "#3D57FF"
  heading: "#1A1A1A"
buttons:
  primaryType: outlined
typography:
  body:
    family: Inter
"##;

fn cli(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("bookingcss").chain(args.iter().copied()))
        .expect("valid arguments")
}

fn path_str(dir: &TempDir, name: &str) -> String {
    dir.path().join(name).to_string_lossy().into_owned()
}

#[test]
fn generate_writes_stylesheet() {
    let dir = TempDir::new().unwrap();
    let config = path_str(&dir, "theme.yaml");
    let output = path_str(&dir, "widget.css");
    fs::write(&config, THEME_YAML).unwrap();

    run(&cli(&["generate", &config, "-o", &output])).unwrap();

    let css = fs::read_to_string(&output).unwrap();
    assert!(css.starts_with(":root {\n"));
    assert!(css.contains("--color-button: #3D57FF;"));
    assert!(css.contains("--font-body: \"Inter\", Arial, sans-serif;"));
    assert!(css.contains("background: transparent !important;"));
}

#[test]
fn generate_then_parse_round_trips() {
    let dir = TempDir::new().unwrap();
    let config = path_str(&dir, "theme.yaml");
    let css = path_str(&dir, "widget.css");
    let recovered = path_str(&dir, "recovered.yaml");
    fs::write(&config, THEME_YAML).unwrap();

    run(&cli(&["generate", &config, "-o", &css])).unwrap();
    run(&cli(&["parse", &css, "--format", "yaml", "-o", &recovered])).unwrap();

    let back = StyleConfig::from_file(&recovered).unwrap();
    assert_eq!(back.colors.button.as_deref(), Some("#3D57FF"));
    assert_eq!(back.colors.heading.as_deref(), Some("#1A1A1A"));
    assert_eq!(back.buttons.primary_type, Some(ButtonType::Outlined));
    assert_eq!(back.typography.body.family.as_deref(), Some("Inter"));
}

#[test]
fn parse_merges_into_base() {
    let dir = TempDir::new().unwrap();
    let base = path_str(&dir, "base.json");
    let css = path_str(&dir, "site.css");
    let output = path_str(&dir, "out.json");

    let mut config = StyleConfig::new();
    config.colors.brand = Some("#FF6600".into());
    config.save(&base).unwrap();
    fs::write(&css, ".experience-list-item { border-radius: 8px; }\n").unwrap();

    run(&cli(&["parse", &css, "--base", &base, "-o", &output])).unwrap();

    let merged = StyleConfig::from_file(&output).unwrap();
    assert_eq!(merged.colors.brand.as_deref(), Some("#FF6600"));
    assert_eq!(merged.lists.radius.as_deref(), Some("8px"));
}

#[test]
fn parse_of_blank_file_fails() {
    let dir = TempDir::new().unwrap();
    let css = path_str(&dir, "empty.css");
    fs::write(&css, "  \n").unwrap();

    let err = run(&cli(&["parse", &css])).unwrap_err();
    assert!(err.to_string().contains("No CSS to import"));
}

#[test]
fn parse_of_unrelated_css_still_writes_config() {
    let dir = TempDir::new().unwrap();
    let css = path_str(&dir, "site.css");
    let output = path_str(&dir, "out.json");
    fs::write(&css, "p { margin: 0; }\n").unwrap();

    run(&cli(&["parse", &css, "-o", &output])).unwrap();
    assert_eq!(
        StyleConfig::from_file(&output).unwrap(),
        StyleConfig::default()
    );
}

#[test]
fn missing_config_reports_path() {
    let dir = TempDir::new().unwrap();
    let missing = path_str(&dir, "nope.yaml");

    let err = run(&cli(&["generate", &missing])).unwrap_err();
    assert!(format!("{:#}", err).contains("nope.yaml"));
}

#[test]
fn unsupported_extension_is_rejected() {
    let dir = TempDir::new().unwrap();
    let config = path_str(&dir, "theme.toml");
    fs::write(&config, "").unwrap();

    assert!(run(&cli(&["generate", &config])).is_err());
}
