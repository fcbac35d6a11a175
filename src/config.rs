use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{Error, Result};
use crate::node::Style;

static DEFAULT_CONFIG: &str = include_str!("default_config.toml");

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub tags: TagsConfig,
    pub html: HtmlConfig,
}

/// Element names used for each style.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TagsConfig {
    pub bold: String,
    pub underline: String,
    pub unknown: String,
}

impl Default for TagsConfig {
    fn default() -> Self {
        Self {
            bold: "b".to_string(),
            underline: "u".to_string(),
            unknown: "span".to_string(),
        }
    }
}

impl TagsConfig {
    pub fn for_style(&self, style: Style) -> &str {
        match style {
            Style::Bold => &self.bold,
            Style::Underline => &self.underline,
            Style::Unknown => &self.unknown,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HtmlConfig {
    pub wrapper: String,
    pub id: Option<String>,
    pub drop_stray_markers: bool,
}

impl Default for HtmlConfig {
    fn default() -> Self {
        Self {
            wrapper: "div".to_string(),
            id: None,
            drop_stray_markers: true,
        }
    }
}

impl Config {
    /// The config bundled with the crate (`src/default_config.toml`).
    pub fn compiled_default() -> Self {
        let config = Self::from_toml(DEFAULT_CONFIG);
        debug_assert!(config.is_ok(), "bundled default_config.toml is invalid: {config:?}");
        config.unwrap_or_default()
    }

    /// Parse a config from TOML text, filling gaps from the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] for malformed TOML or unusable tag names.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from a TOML file, or return defaults if not found.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file exists but can't be read, and
    /// [`Error::Config`] if its contents are invalid.
    pub fn load(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(content) => Self::from_toml(&content),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("No config at {}, using defaults", path.display());
                Ok(Self::compiled_default())
            }
            Err(e) => Err(e.into()),
        }
    }

    fn validate(&self) -> Result<()> {
        let names = [
            ("tags.bold", self.tags.bold.as_str()),
            ("tags.underline", self.tags.underline.as_str()),
            ("tags.unknown", self.tags.unknown.as_str()),
            ("html.wrapper", self.html.wrapper.as_str()),
        ];
        for (key, name) in names {
            if !is_element_name(name) {
                return Err(Error::Config(format!("{key} is not a valid element name: {name:?}")));
            }
        }
        Ok(())
    }
}

fn is_element_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric())
}
