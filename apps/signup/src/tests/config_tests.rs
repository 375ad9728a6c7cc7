use super::{apply_env, apply_file, load_settings, split_labels, OutputFormat, Settings};

use std::{collections::HashMap, fs};

fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_to_grids_a_and_b() {
    let settings = Settings::default();
    assert_eq!(settings.grid_labels, vec!["A", "B"]);
    assert_eq!(settings.log_filter, "info");
    assert_eq!(settings.output, OutputFormat::Table);
}

#[test]
fn file_values_override_defaults() {
    let mut settings = Settings::default();
    apply_file(
        &mut settings,
        r#"
grid_labels = ["Morning", "Evening", "Night"]
log_filter = "debug"
output = "json"
"#,
    )
    .expect("parse");

    assert_eq!(settings.grid_labels, vec!["Morning", "Evening", "Night"]);
    assert_eq!(settings.log_filter, "debug");
    assert_eq!(settings.output, OutputFormat::Json);
}

#[test]
fn partial_file_keeps_remaining_defaults() {
    let mut settings = Settings::default();
    apply_file(&mut settings, "log_filter = \"warn\"").expect("parse");
    assert_eq!(settings.grid_labels, vec!["A", "B"]);
    assert_eq!(settings.log_filter, "warn");
}

#[test]
fn unknown_file_keys_are_rejected() {
    let mut settings = Settings::default();
    assert!(apply_file(&mut settings, "rows = 6").is_err());
}

#[test]
fn env_overrides_file_and_signup_log_beats_rust_log() {
    let mut settings = Settings::default();
    apply_env(
        &mut settings,
        env_of(&[
            ("SIGNUP__GRID_LABELS", "X, Y ,,Z"),
            ("RUST_LOG", "trace"),
            ("SIGNUP__LOG", "signup=debug"),
            ("SIGNUP__OUTPUT", "JSON"),
        ]),
    )
    .expect("env");

    assert_eq!(settings.grid_labels, vec!["X", "Y", "Z"]);
    assert_eq!(settings.log_filter, "signup=debug");
    assert_eq!(settings.output, OutputFormat::Json);
}

#[test]
fn invalid_output_env_is_an_error() {
    let mut settings = Settings::default();
    assert!(apply_env(&mut settings, env_of(&[("SIGNUP__OUTPUT", "xml")])).is_err());
}

#[test]
fn split_labels_drops_blanks() {
    assert_eq!(split_labels(" A ,, B,"), vec!["A", "B"]);
    assert!(split_labels(" , ").is_empty());
}

#[test]
fn explicit_config_path_is_loaded() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("sheet.toml");
    fs::write(&path, "grid_labels = [\"Q\"]\n").expect("write config");

    let settings = load_settings(Some(path.as_path())).expect("load");
    // SIGNUP__GRID_LABELS in the test environment would win over the file.
    if std::env::var("SIGNUP__GRID_LABELS").is_err() {
        assert_eq!(settings.grid_labels, vec!["Q"]);
    }
}

#[test]
fn missing_explicit_config_path_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = load_settings(Some(dir.path().join("absent.toml").as_path())).expect_err("missing");
    assert!(err.to_string().contains("absent.toml"));
}

#[test]
fn malformed_config_reports_path() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("broken.toml");
    fs::write(&path, "grid_labels = [").expect("write config");

    let err = load_settings(Some(path.as_path())).expect_err("malformed");
    assert!(err.to_string().contains("broken.toml"));
}
