//! Runtime settings: an optional TOML file, then environment overrides.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::error::{Result, TermfolioError};
use crate::path::DEFAULT_CWD;
use crate::typewriter::DEFAULT_TICK;

/// File looked up in the working directory when `TERMFOLIO_CONFIG` is unset.
pub const DEFAULT_CONFIG_FILE: &str = "termfolio.toml";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// User half of the prompt.
    pub user: String,
    /// Host half of the prompt.
    pub host: String,
    /// Working directory shown on startup.
    pub cwd: String,
    /// Milliseconds between two revealed banner characters.
    pub typewriter_ms: u64,
    /// When false, `open` reports a failure instead of launching a browser.
    pub allow_open: bool,
    pub window_title: String,
    pub title_bar: String,
    pub tip: String,
    pub footer: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            user: "guest".to_string(),
            host: "you".to_string(),
            cwd: DEFAULT_CWD.to_string(),
            typewriter_ms: DEFAULT_TICK.as_millis() as u64,
            allow_open: true,
            window_title: "Terminal Portfolio".to_string(),
            title_bar: "my@portfolio — tty1".to_string(),
            tip: "Tip: try `help`, `projects`, `about`, `skills`, `links`, `clear`.".to_string(),
            footer: "© swag — built with Rust + egui.".to_string(),
        }
    }
}

impl Config {
    /// Load `TERMFOLIO_CONFIG` (or `termfolio.toml`) and apply environment
    /// overrides. A missing default file is not an error; a missing file
    /// that was named explicitly is.
    pub fn load() -> Result<Self> {
        let (path, explicit) = match env::var_os("TERMFOLIO_CONFIG") {
            Some(p) => (PathBuf::from(p), true),
            None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
        };
        let mut config = if explicit || path.exists() {
            Self::from_file(&path)?
        } else {
            log::debug!("no {} found, using defaults", path.display());
            Self::default()
        };
        config.apply_overrides(|key| env::var(key).ok())?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        let config = Self::from_toml(&text)?;
        log::info!("loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Apply `TERMFOLIO_*` overrides read through `lookup`.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("TERMFOLIO_USER") {
            self.user = v;
        }
        if let Some(v) = lookup("TERMFOLIO_HOST") {
            self.host = v;
        }
        if let Some(v) = lookup("TERMFOLIO_CWD") {
            self.cwd = v;
        }
        if let Some(v) = lookup("TERMFOLIO_TYPEWRITER_MS") {
            self.typewriter_ms = v.trim().parse().map_err(|_| {
                TermfolioError::Config(format!("TERMFOLIO_TYPEWRITER_MS is not a number: {v}"))
            })?;
        }
        if let Some(v) = lookup("TERMFOLIO_ALLOW_OPEN") {
            self.allow_open = match v.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => true,
                "0" | "false" | "no" | "off" => false,
                _ => {
                    return Err(TermfolioError::Config(format!(
                        "TERMFOLIO_ALLOW_OPEN must be a boolean, got {v}"
                    )))
                }
            };
        }
        Ok(())
    }

    pub fn typewriter_interval(&self) -> Duration {
        Duration::from_millis(self.typewriter_ms)
    }
}
