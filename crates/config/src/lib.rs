//! Configuration loading and validation.
//!
//! Precedence, lowest to highest: built-in defaults, then an optional
//! configuration file (TOML, YAML or JSON — first one found in the platform
//! config directory, or an explicit path), then `TUTO_`-prefixed environment
//! variables with `__` separating nesting levels
//! (`TUTO_BROWSE__PAGE_SIZE=10`).

pub mod error;

use crate::error::{ErrorKind, Result};
use directories::ProjectDirs;
use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const ENV_PREFIX: &str = "TUTO_";

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub source: SourceConfig,
    pub favorites: FavoritesConfig,
    pub browse: BrowseConfig,
}

/// Where the catalogue document lives.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Fixed path of the JSON catalogue document
    pub path: PathBuf,
}

/// Where the favourites slot lives.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct FavoritesConfig {
    /// Single file holding the persisted favourites set
    pub path: PathBuf,
}

/// Browse-view behaviour.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct BrowseConfig {
    /// Fixed page size for list and search views (must be at least 1)
    pub page_size: usize,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self { path: PathBuf::from("catalog.json") }
    }
}
impl Default for FavoritesConfig {
    fn default() -> Self {
        let path = ProjectDirs::from("", "", "tuto")
            .map(|dirs| dirs.data_dir().join("favorites.json"))
            .unwrap_or_else(|| PathBuf::from("favorites.json"));
        Self { path }
    }
}
impl Default for BrowseConfig {
    fn default() -> Self {
        Self { page_size: 5 }
    }
}
impl Default for Config {
    fn default() -> Self {
        Self {
            source: SourceConfig::default(),
            favorites: FavoritesConfig::default(),
            browse: BrowseConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from the default locations.
    ///
    /// Looks for `config.{toml,yaml,json}` in the platform configuration
    /// directory; missing files simply contribute nothing.
    pub fn load() -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Config::default()));
        if let Some(dirs) = ProjectDirs::from("", "", "tuto") {
            let dir = dirs.config_dir();
            figment = figment
                .merge(Toml::file(dir.join("config.toml")))
                .merge(Yaml::file(dir.join("config.yaml")))
                .merge(Json::file(dir.join("config.json")));
        }
        Self::extract(figment.merge(Env::prefixed(ENV_PREFIX).split("__")))
    }

    /// Load configuration with an explicit file taking the place of the
    /// platform-directory lookup. Environment variables still win.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml" | "yml") => Figment::from(Yaml::file(path)),
            Some("json") => Figment::from(Json::file(path)),
            _ => Figment::from(Toml::file(path)),
        };
        let figment = Figment::from(Serialized::defaults(Config::default()))
            .merge(file)
            .merge(Env::prefixed(ENV_PREFIX).split("__"));
        Self::extract(figment)
    }

    fn extract(figment: Figment) -> Result<Self> {
        let config: Config =
            figment.extract().map_err(|err| exn::Exn::from(ErrorKind::Figment(err)))?;
        config.validate()?;
        tracing::debug!(?config, "configuration resolved");
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.browse.page_size == 0 {
            exn::bail!(ErrorKind::Invalid("browse.page_size must be at least 1".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.browse.page_size, 5);
        assert_eq!(config.source.path, PathBuf::from("catalog.json"));
    }

    #[rstest]
    #[case("config.toml", "[browse]\npage_size = 9\n")]
    #[case("config.yaml", "browse:\n  page_size: 9\n")]
    #[case("config.json", r#"{"browse": {"page_size": 9}}"#)]
    fn test_file_overrides_defaults(#[case] name: &str, #[case] contents: &str) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(name);
        std::fs::write(&path, contents).unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.browse.page_size, 9);
        // Untouched sections keep their defaults.
        assert_eq!(config.source.path, PathBuf::from("catalog.json"));
    }

    #[test]
    fn test_env_overrides_file_and_defaults() {
        // Jail serialises env mutation and scopes it to the closure.
        figment::Jail::expect_with(|jail| {
            jail.create_file("config.toml", "[browse]\npage_size = 9\n")?;
            jail.set_env("TUTO_BROWSE__PAGE_SIZE", "3");
            let config = Config::load_from("config.toml").expect("config should load");
            assert_eq!(config.browse.page_size, 3);
            Ok(())
        });
    }

    #[test]
    fn test_missing_file_contributes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(dir.path().join("nope.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[browse]\npage_size = 0\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(&*err, ErrorKind::Invalid(_)));
    }
}
