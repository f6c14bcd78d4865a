//! # gdoc-config
//!
//! Layered configuration loading for gdoc using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`GDOC_*` prefix, `__` as separator)
//! 2. An explicit file passed by the caller (`--config`)
//! 3. Project-level `.gdoc/config.toml`
//! 4. User-level `~/.config/gdoc/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `GDOC_WALK__SKIP_HIDDEN` -> `walk.skip_hidden`,
//! `GDOC_PARSE__STRICT` -> `parse.strict`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use gdoc_config::GdocConfig;
//!
//! let config = GdocConfig::load().expect("config");
//! if config.walk.include_test_files {
//!     println!("test files are documented too");
//! }
//! ```

mod error;
mod parse;
mod walk;

pub use error::ConfigError;
pub use parse::ParseConfig;
pub use walk::WalkConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct GdocConfig {
    #[serde(default)]
    pub walk: WalkConfig,
    #[serde(default)]
    pub parse: ParseConfig,
}

impl GdocConfig {
    /// Load configuration from the TOML files and environment variables.
    ///
    /// # Errors
    /// Returns `ConfigError::Figment` when a source holds invalid values.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with one extra TOML file layered above the
    /// project file and below the environment.
    ///
    /// # Errors
    /// Returns `ConfigError::MissingFile` if `path` does not exist and
    /// `ConfigError::Figment` when a source holds invalid values.
    pub fn load_with_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::MissingFile {
                path: path.display().to_string(),
            });
        }
        Self::files()
            .merge(Toml::file(path))
            .merge(Self::env())
            .extract()
            .map_err(ConfigError::from)
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        Self::files().merge(Self::env())
    }

    /// Defaults, then user-global, then project-local TOML.
    fn files() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(".gdoc/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment
    }

    fn env() -> Env {
        Env::prefixed("GDOC_").split("__")
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("gdoc").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = GdocConfig::default();
        assert!(config.walk.include_test_files);
        assert!(config.parse.strict);
    }

    #[test]
    fn figment_builds_without_files() {
        let config: GdocConfig = Figment::from(Serialized::defaults(GdocConfig::default()))
            .extract()
            .expect("should extract defaults");
        assert_eq!(config, GdocConfig::default());
    }

    #[test]
    fn missing_explicit_file_is_reported() {
        let result = GdocConfig::load_with_file(Path::new("/definitely/not/here.toml"));
        assert!(matches!(result, Err(ConfigError::MissingFile { .. })));
    }
}
