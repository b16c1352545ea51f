use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::rules::placeholders::{DEFAULT_MARKER, PlaceholderSyntax};

pub const CONFIG_FILE_NAME: &str = ".transcheckrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_messages_root")]
    pub messages_root: String,
    #[serde(default = "default_reference_locale")]
    pub reference_locale: String,
    /// Glob matched against file names in `messages_root`.
    #[serde(default = "default_file_pattern")]
    pub file_pattern: String,
    #[serde(default = "default_placeholder_marker")]
    pub placeholder_marker: char,
}

fn default_messages_root() -> String {
    "./messages".to_string()
}

fn default_reference_locale() -> String {
    "en".to_string()
}

fn default_file_pattern() -> String {
    "??.json".to_string()
}

fn default_placeholder_marker() -> char {
    DEFAULT_MARKER
}

impl Default for Config {
    fn default() -> Self {
        Self {
            messages_root: default_messages_root(),
            reference_locale: default_reference_locale(),
            file_pattern: default_file_pattern(),
            placeholder_marker: default_placeholder_marker(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if `filePattern` is not a valid glob or
    /// `placeholderMarker` cannot delimit placeholders.
    pub fn validate(&self) -> Result<()> {
        self.file_pattern()?;
        self.placeholder_syntax()?;
        if self.reference_locale.trim().is_empty() {
            anyhow::bail!("'referenceLocale' must not be empty");
        }
        Ok(())
    }

    pub fn file_pattern(&self) -> Result<Pattern> {
        Pattern::new(&self.file_pattern).with_context(|| {
            format!(
                "Invalid glob pattern in 'filePattern': \"{}\"",
                self.file_pattern
            )
        })
    }

    pub fn placeholder_syntax(&self) -> Result<PlaceholderSyntax> {
        PlaceholderSyntax::new(self.placeholder_marker)
            .context("Invalid 'placeholderMarker' in configuration")
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Where the config was loaded from, `None` if using defaults.
    pub path: Option<PathBuf>,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                path: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}
