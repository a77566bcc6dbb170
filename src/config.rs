use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    #[default]
    Pretty,
}

#[derive(Debug, Default, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub format: LogFormat,
}

#[derive(Debug, Default, Deserialize)]
pub struct OutputConfig {
    /// Indent the JSON written to stdout
    #[serde(default)]
    pub pretty: bool,
    /// Exit non-zero when any file fails to decode
    #[serde(default)]
    pub strict: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }
}

/// Config file location: explicit flag, then `WISTIA_CONFIG`, then the XDG and home config dirs.
pub fn find_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    if let Ok(path) = std::env::var("WISTIA_CONFIG") {
        return Some(PathBuf::from(path));
    }

    let mut candidates = Vec::new();
    if let Ok(xdg_config_home) = std::env::var("XDG_CONFIG_HOME") {
        candidates.push(PathBuf::from(xdg_config_home));
    }
    if let Some(home) = dirs::home_dir() {
        candidates.push(home.join(".config"));
    }

    candidates
        .into_iter()
        .map(|dir| dir.join("wistia-rs").join("config.toml"))
        .find(|path| path.exists())
}
