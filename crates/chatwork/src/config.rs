//! Config file discovery and layered settings.
//!
//! Resolution order (later overrides earlier):
//! 1. `~/.config/chatwork/config.toml` (or `--config <path>`)
//! 2. Environment variables (`CHATWORK_API_TOKEN`, `CHATWORK_BASE_URL`)
//! 3. CLI flags
//!
//! Clap already folds 2 into 3, so this module only merges the file layer
//! underneath them.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context as _, Result};
use serde::Deserialize;

/// Application name for XDG directory resolution.
const APP_NAME: &str = "chatwork";

/// Default config filename within the config directory.
const USER_CONFIG_FILE: &str = "config.toml";

/// Default request timeout when the file does not set one.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Contents of the config file.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct FileConfig {
    /// API token (plaintext; prefer the environment variable).
    pub token: Option<String>,
    /// API base URL.
    pub base_url: Option<String>,
    /// Request timeout in seconds.
    pub timeout_secs: Option<u64>,
}

impl FileConfig {
    /// Parse config from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        Ok(toml::from_str(toml_str)?)
    }
}

/// A config file and where it came from.
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub config: FileConfig,
    /// Path that was read, if any.
    pub source: Option<PathBuf>,
}

/// Platform config path (`~/.config/chatwork/config.toml` on Linux).
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_NAME).join(USER_CONFIG_FILE))
}

/// Load the config file.
///
/// An explicit path must exist. The default path is optional.
pub fn load_config(explicit: Option<&Path>) -> Result<LoadedConfig> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match user_config_path() {
            Some(path) if path.exists() => path,
            _ => return Ok(LoadedConfig::default()),
        },
    };

    let text = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    let config = FileConfig::from_toml(&text)
        .with_context(|| format!("failed to parse config file {}", path.display()))?;

    if config.token.is_some() {
        tracing::debug!(path = %path.display(), "token loaded from config file");
    }

    Ok(LoadedConfig {
        config,
        source: Some(path),
    })
}

/// Effective settings after merging every layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub token: Option<String>,
    pub base_url: String,
    pub timeout: Duration,
    /// Config file the settings were merged from.
    pub source: Option<PathBuf>,
}

impl Settings {
    /// Merge the file layer with values from flags or the environment.
    pub fn resolve(loaded: &LoadedConfig, token: Option<String>, base_url: Option<String>) -> Self {
        let file = &loaded.config;
        Self {
            token: token.or_else(|| file.token.clone()),
            base_url: base_url
                .or_else(|| file.base_url.clone())
                .unwrap_or_else(|| chatwork_client::DEFAULT_BASE_URL.to_string()),
            timeout: Duration::from_secs(file.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS)),
            source: loaded.source.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_full_file() {
        let config = FileConfig::from_toml(
            r#"
            token = "abc"
            base_url = "http://localhost:9000/v2"
            timeout_secs = 5
            "#,
        )
        .unwrap();
        assert_eq!(config.token.as_deref(), Some("abc"));
        assert_eq!(config.base_url.as_deref(), Some("http://localhost:9000/v2"));
        assert_eq!(config.timeout_secs, Some(5));
    }

    #[test]
    fn test_parse_empty_file() {
        assert_eq!(FileConfig::from_toml("").unwrap(), FileConfig::default());
    }

    #[test]
    fn test_parse_rejects_wrong_types() {
        assert!(FileConfig::from_toml("timeout_secs = \"soon\"").is_err());
    }

    #[test]
    fn test_load_explicit_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "token = \"from-file\"").unwrap();

        let loaded = load_config(Some(file.path())).unwrap();
        assert_eq!(loaded.config.token.as_deref(), Some("from-file"));
        assert_eq!(loaded.source.as_deref(), Some(file.path()));
    }

    #[test]
    fn test_load_missing_explicit_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_config(Some(&dir.path().join("nope.toml"))).is_err());
    }

    #[test]
    fn test_flags_override_file() {
        let loaded = LoadedConfig {
            config: FileConfig {
                token: Some("file-token".to_string()),
                base_url: Some("http://file/v2".to_string()),
                timeout_secs: Some(7),
            },
            source: None,
        };

        let settings = Settings::resolve(
            &loaded,
            Some("flag-token".to_string()),
            Some("http://flag/v2".to_string()),
        );
        assert_eq!(settings.token.as_deref(), Some("flag-token"));
        assert_eq!(settings.base_url, "http://flag/v2");
        assert_eq!(settings.timeout, Duration::from_secs(7));

        let settings = Settings::resolve(&loaded, None, None);
        assert_eq!(settings.token.as_deref(), Some("file-token"));
        assert_eq!(settings.base_url, "http://file/v2");
    }

    #[test]
    fn test_defaults_without_any_layer() {
        let settings = Settings::resolve(&LoadedConfig::default(), None, None);
        assert!(settings.token.is_none());
        assert_eq!(settings.base_url, "https://api.chatwork.com/v2");
        assert_eq!(settings.timeout, Duration::from_secs(30));
    }
}
