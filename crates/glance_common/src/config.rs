//! Configuration file handling
//!
//! Optional TOML file at `$XDG_CONFIG_HOME/glance/config.toml`. Every field
//! has a default, so an absent file means default configuration; a file
//! that exists but fails to parse is an error.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::GlanceError;

/// Which palette the dashboard starts with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Initial theme
    pub theme: ThemeMode,

    /// Delay before the assistant's simulated reply, in milliseconds
    pub reply_delay_ms: u64,

    /// Directory for exported reports; current directory when unset
    pub export_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: ThemeMode::Light,
            reply_delay_ms: 1000,
            export_dir: None,
        }
    }
}

impl Config {
    /// Load from the default location, falling back to defaults when the
    /// file does not exist
    pub fn load() -> Result<Self, GlanceError> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load from an explicit path
    pub fn load_from(path: &Path) -> Result<Self, GlanceError> {
        let contents = std::fs::read_to_string(path).map_err(|source| GlanceError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&contents).map_err(|source| GlanceError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Default config file path: `$XDG_CONFIG_HOME/glance/config.toml`
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("glance").join("config.toml"))
    }

    /// Export directory, defaulting to the current directory
    pub fn export_dir(&self) -> PathBuf {
        self.export_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.theme, ThemeMode::Light);
        assert_eq!(config.reply_delay_ms, 1000);
        assert_eq!(config.export_dir(), PathBuf::from("."));
    }

    #[test]
    fn test_parse_full_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "theme = \"dark\"\nreply_delay_ms = 250\nexport_dir = \"/tmp/reports\""
        )
        .unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.theme, ThemeMode::Dark);
        assert_eq!(config.reply_delay_ms, 250);
        assert_eq!(config.export_dir(), PathBuf::from("/tmp/reports"));
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "theme = \"dark\"").unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.theme, ThemeMode::Dark);
        assert_eq!(config.reply_delay_ms, 1000);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "theme = \"solarized\"").unwrap();

        let result = Config::load_from(file.path());
        assert!(matches!(result, Err(GlanceError::ConfigParse { .. })));
    }
}
