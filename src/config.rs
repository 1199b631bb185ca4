//! Application configuration management.
//!
//! Settings merge in layers: built-in defaults, then an optional
//! `config.toml` in the platform config directory, then `ALUMNEXT_`
//! prefixed environment variables. CLI flags override the merged result
//! at the call site, not here.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::cli::ThemeArg;

/// Environment variable prefix for configuration overrides.
const ENV_PREFIX: &str = "ALUMNEXT_";

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Preferred TUI theme.
    #[serde(default)]
    pub theme: ThemeArg,

    /// Directory for the persisted session record.
    ///
    /// Defaults to the platform data directory when unset.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

impl Config {
    /// Load the merged configuration.
    ///
    /// A missing config file is normal; a malformed one falls back to
    /// defaults with a debug log rather than aborting startup.
    #[must_use]
    pub fn load() -> Self {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = Self::config_path() {
            figment = figment.merge(Toml::file(path));
        }
        figment = figment.merge(Env::prefixed(ENV_PREFIX));

        match figment.extract() {
            Ok(config) => config,
            Err(e) => {
                log::debug!("Failed to load config, using defaults: {e}");
                Self::default()
            }
        }
    }

    /// Platform-specific path of the optional config file.
    #[must_use]
    pub fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "alumnext", "alumnext")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Resolve the session data directory.
    ///
    /// Priority: explicit CLI override, then the configured `data_dir`,
    /// then the platform data directory.
    ///
    /// # Errors
    ///
    /// Returns an error only when no directory is configured and the
    /// platform data directory cannot be determined.
    pub fn resolve_data_dir(&self, cli_override: Option<&PathBuf>) -> Result<PathBuf> {
        if let Some(dir) = cli_override {
            return Ok(dir.clone());
        }
        if let Some(dir) = &self.data_dir {
            return Ok(dir.clone());
        }
        let dirs = ProjectDirs::from("com", "alumnext", "alumnext")
            .context("Failed to determine project directories")?;
        Ok(dirs.data_dir().to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::providers::Serialized;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let figment = Figment::from(Serialized::defaults(Config::default()));
        let config: Config = figment.extract().unwrap();
        assert_eq!(config.theme, ThemeArg::Auto);
        assert!(config.data_dir.is_none());
    }

    #[test]
    fn test_load_from_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "theme = \"dark\"\ndata_dir = \"/tmp/an\"\n").unwrap();

        let figment =
            Figment::from(Serialized::defaults(Config::default())).merge(Toml::file(&path));
        let config: Config = figment.extract().unwrap();

        assert_eq!(config.theme, ThemeArg::Dark);
        assert_eq!(config.data_dir, Some(PathBuf::from("/tmp/an")));
    }

    #[test]
    fn test_env_overrides_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "theme = \"dark\"\n").unwrap();

        let figment = Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(&path))
            .merge(("theme", ThemeArg::Light));
        let config: Config = figment.extract().unwrap();

        assert_eq!(config.theme, ThemeArg::Light);
    }

    #[test]
    fn test_resolve_data_dir_cli_wins() {
        let config = Config {
            theme: ThemeArg::Auto,
            data_dir: Some(PathBuf::from("/from/config")),
        };
        let cli = PathBuf::from("/from/cli");
        assert_eq!(
            config.resolve_data_dir(Some(&cli)).unwrap(),
            PathBuf::from("/from/cli")
        );
        assert_eq!(
            config.resolve_data_dir(None).unwrap(),
            PathBuf::from("/from/config")
        );
    }
}
