//! User configuration
//!
//! Read from `--config PATH` or `<config dir>/bubble/config.toml`. Every key
//! is optional; a missing default file means default settings.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::render::{RenderOptions, Theme};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Theme name, see [`Theme::NAMES`]
    pub theme: String,
    /// Syntax-highlight fenced code blocks
    pub highlight_code: bool,
    /// Show attached image URLs above message content
    pub show_attachments: bool,
    /// Tracing filter used when `RUST_LOG` is unset
    pub log_filter: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            highlight_code: true,
            show_attachments: true,
            log_filter: None,
        }
    }
}

impl Config {
    /// Default location of the config file
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("bubble").join("config.toml"))
    }

    /// Load config from an explicit path, or from the default location
    ///
    /// An explicit path must exist; the default one may be absent.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml(&text)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Resolve the configured theme, falling back to the default
    pub fn theme(&self) -> Theme {
        Theme::by_name(&self.theme).unwrap_or_else(|| {
            tracing::warn!(
                "Unknown theme '{}', expected one of {:?}; using default",
                self.theme,
                Theme::NAMES
            );
            Theme::default()
        })
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            highlight_code: self.highlight_code,
            show_attachments: self.show_attachments,
        }
    }
}
