//! Application configuration.
//!
//! Values are layered, later sources winning:
//!
//! 1. Built-in defaults
//! 2. An optional TOML file
//! 3. `THEMEDASH_*` environment variables
//!
//! Command-line flags are applied on top by the binary.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use serde::Deserialize;

use crate::assets::AssetDir;
use crate::theme::DefaultTheme;

/// Errors raised while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid value {value:?} for {key}: {reason}")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },
}

/// Page width mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    #[default]
    Wide,
    Centered,
}

impl Layout {
    pub fn as_str(self) -> &'static str {
        match self {
            Layout::Wide => "wide",
            Layout::Centered => "centered",
        }
    }
}

/// Initial state of the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SidebarState {
    Auto,
    #[default]
    Expanded,
    Collapsed,
}

impl SidebarState {
    pub fn as_str(self) -> &'static str {
        match self {
            SidebarState::Auto => "auto",
            SidebarState::Expanded => "expanded",
            SidebarState::Collapsed => "collapsed",
        }
    }
}

/// Runtime configuration for the shell and its HTTP host.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub assets_dir: PathBuf,
    pub icon_file: String,
    pub page_title: String,
    pub layout: Layout,
    pub sidebar: SidebarState,
    pub default_theme: DefaultTheme,
    pub session_ttl_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8501,
            assets_dir: PathBuf::from("assets"),
            icon_file: "icon.png".to_string(),
            page_title: "Dashboard Shell".to_string(),
            layout: Layout::default(),
            sidebar: SidebarState::default(),
            default_theme: DefaultTheme::default(),
            session_ttl_secs: 3600,
        }
    }
}

impl AppConfig {
    /// Loads defaults, then the optional file, then the process environment.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Parses a TOML file; keys it omits keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Applies `THEMEDASH_*` overrides read through `lookup`.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("THEMEDASH_HOST") {
            self.host = host;
        }
        if let Some(port) = lookup("THEMEDASH_PORT") {
            self.port = parse_value("THEMEDASH_PORT", &port)?;
        }
        if let Some(dir) = lookup("THEMEDASH_ASSETS_DIR") {
            self.assets_dir = PathBuf::from(dir);
        }
        if let Some(theme) = lookup("THEMEDASH_DEFAULT_THEME") {
            self.default_theme = parse_value("THEMEDASH_DEFAULT_THEME", &theme)?;
        }
        Ok(())
    }

    pub fn assets(&self) -> AssetDir {
        AssetDir::new(&self.assets_dir, self.icon_file.clone())
    }

    pub fn session_ttl(&self) -> Duration {
        Duration::from_secs(self.session_ttl_secs)
    }

    /// Socket address string for the listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_value<T>(key: &str, value: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    value.parse().map_err(|e: T::Err| ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;
    use serial_test::serial;
    use std::collections::HashMap;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.port, 8501);
        assert_eq!(config.layout, Layout::Wide);
        assert_eq!(config.sidebar, SidebarState::Expanded);
        assert_eq!(config.default_theme, DefaultTheme::Fixed(Theme::Light));
        assert_eq!(config.session_ttl(), Duration::from_secs(3600));
    }

    #[test]
    fn test_from_file_partial() {
        let file = NamedTempFile::new().unwrap();
        fs::write(
            file.path(),
            "port = 9000\nlayout = \"centered\"\ndefault_theme = \"dark\"\n",
        )
        .unwrap();

        let config = AppConfig::from_file(file.path()).unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.layout, Layout::Centered);
        assert_eq!(config.default_theme, DefaultTheme::Fixed(Theme::Dark));
        assert_eq!(config.page_title, "Dashboard Shell");
    }

    #[test]
    fn test_from_file_rejects_unknown_theme() {
        let file = NamedTempFile::new().unwrap();
        fs::write(file.path(), "default_theme = \"neon\"\n").unwrap();

        let err = AppConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_from_file_missing() {
        let err = AppConfig::from_file(Path::new("/nonexistent/themedash.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_apply_env_overrides() {
        let env: HashMap<&str, &str> = [
            ("THEMEDASH_PORT", "8080"),
            ("THEMEDASH_ASSETS_DIR", "/srv/assets"),
            ("THEMEDASH_DEFAULT_THEME", "system"),
        ]
        .into_iter()
        .collect();

        let mut config = AppConfig::default();
        config
            .apply_env(|k| env.get(k).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.assets_dir, PathBuf::from("/srv/assets"));
        assert_eq!(config.default_theme, DefaultTheme::System);
        assert_eq!(config.host, "127.0.0.1");
    }

    #[test]
    fn test_apply_env_invalid_port() {
        let mut config = AppConfig::default();
        let err = config
            .apply_env(|k| (k == "THEMEDASH_PORT").then(|| "eighty".to_string()))
            .unwrap_err();
        match err {
            ConfigError::InvalidValue { key, value, .. } => {
                assert_eq!(key, "THEMEDASH_PORT");
                assert_eq!(value, "eighty");
            }
            other => panic!("Expected InvalidValue, got {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_load_reads_process_env() {
        std::env::set_var("THEMEDASH_HOST", "0.0.0.0");
        let config = AppConfig::load(None);
        std::env::remove_var("THEMEDASH_HOST");

        assert_eq!(config.unwrap().host, "0.0.0.0");
    }
}
