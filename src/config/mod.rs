//! Display settings loaded from an optional `codepad.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

/// File looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "codepad.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DisplayConfig {
    /// Colored panel output.
    pub color: bool,
    /// Render help answers as terminal markdown.
    pub markdown: bool,
    /// Prompt printed before each interactive line.
    pub prompt: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color: true,
            markdown: true,
            prompt: "codepad> ".to_string(),
        }
    }
}

impl Config {
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: Config = toml::from_str(text).context("Invalid configuration")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.display.prompt.contains('\n') {
            bail!("display.prompt must be a single line");
        }
        Ok(())
    }
}

/// Load the configuration.
///
/// An explicit path must exist. Without one, `codepad.toml` in the working
/// directory is used when present, and defaults otherwise.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let path: PathBuf = match path {
        Some(path) => {
            if !path.exists() {
                bail!("Config file not found: {}", path.display());
            }
            path.to_path_buf()
        }
        None => {
            let fallback = PathBuf::from(DEFAULT_CONFIG_FILE);
            if !fallback.exists() {
                tracing::debug!("no config file, using defaults");
                return Ok(Config::default());
            }
            fallback
        }
    };

    let text = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let config = Config::from_toml(&text).with_context(|| format!("In {}", path.display()))?;
    tracing::debug!(path = %path.display(), "loaded config");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.display.color);
        assert!(config.display.markdown);
        assert_eq!(config.display.prompt, "codepad> ");
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = Config::from_toml("[display]\ncolor = false\n").unwrap();
        assert!(!config.display.color);
        assert!(config.display.markdown);
    }

    #[test]
    fn test_multiline_prompt_rejected() {
        let result = Config::from_toml("[display]\nprompt = \"a\\nb\"\n");
        assert!(result.is_err());
    }
}
