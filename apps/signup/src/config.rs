use std::{fs, io::ErrorKind, path::Path, str::FromStr};

use anyhow::{bail, Context};
use serde::Deserialize;
use shared::domain::DEFAULT_GRID_LABELS;

pub const DEFAULT_CONFIG_FILE: &str = "signup.toml";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "table" | "text" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            other => bail!("unknown output format '{other}', expected 'table' or 'json'"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub grid_labels: Vec<String>,
    pub log_filter: String,
    pub output: OutputFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            grid_labels: DEFAULT_GRID_LABELS.iter().map(|s| s.to_string()).collect(),
            log_filter: "info".into(),
            output: OutputFormat::Table,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileSettings {
    grid_labels: Option<Vec<String>>,
    log_filter: Option<String>,
    output: Option<OutputFormat>,
}

/// Defaults, then the config file, then `SIGNUP__*` / `RUST_LOG` environment overrides.
///
/// An explicit `path` must exist; the default `signup.toml` is optional.
pub fn load_settings(path: Option<&Path>) -> anyhow::Result<Settings> {
    let mut settings = Settings::default();

    let (path, required) = match path {
        Some(path) => (path, true),
        None => (Path::new(DEFAULT_CONFIG_FILE), false),
    };
    match fs::read_to_string(path) {
        Ok(raw) => apply_file(&mut settings, &raw)
            .with_context(|| format!("failed to parse config file '{}'", path.display()))?,
        Err(err) if err.kind() == ErrorKind::NotFound && !required => {}
        Err(err) => {
            return Err(err)
                .with_context(|| format!("failed to read config file '{}'", path.display()))
        }
    }

    apply_env(&mut settings, |key| std::env::var(key).ok())?;
    Ok(settings)
}

fn apply_file(settings: &mut Settings, raw: &str) -> anyhow::Result<()> {
    let file_cfg: FileSettings = toml::from_str(raw)?;
    if let Some(v) = file_cfg.grid_labels {
        settings.grid_labels = v;
    }
    if let Some(v) = file_cfg.log_filter {
        settings.log_filter = v;
    }
    if let Some(v) = file_cfg.output {
        settings.output = v;
    }
    Ok(())
}

fn apply_env(
    settings: &mut Settings,
    lookup: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<()> {
    if let Some(v) = lookup("SIGNUP__GRID_LABELS") {
        settings.grid_labels = split_labels(&v);
    }

    if let Some(v) = lookup("RUST_LOG") {
        settings.log_filter = v;
    }
    if let Some(v) = lookup("SIGNUP__LOG") {
        settings.log_filter = v;
    }

    if let Some(v) = lookup("SIGNUP__OUTPUT") {
        settings.output = v.parse().context("invalid SIGNUP__OUTPUT")?;
    }

    Ok(())
}

pub fn split_labels(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|label| !label.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
