//! Locating, parsing and validating card stack configuration.

use std::{
    env, fs,
    path::{Path, PathBuf},
};

use tracing::{debug, warn};

use crate::error::ConfigLoadError;
use crate::models::{CardStackConfig, ConfigSource, LoadedConfig};
use crate::validation::apply_guard_rails;

/// Path to a TOML or JSON config file.
pub const CONFIG_PATH_VAR: &str = "CARDSTACK_CONFIG_PATH";
/// Inline JSON config.
pub const CONFIG_JSON_VAR: &str = "CARDSTACK_CONFIG_JSON";
/// Overrides `geometry.card_count`.
pub const CARD_COUNT_VAR: &str = "CARDSTACK_CARD_COUNT";
/// Overrides `geometry.viewport_size`.
pub const VIEWPORT_VAR: &str = "CARDSTACK_VIEWPORT";

const DEFAULT_FILES: &[&str] = &[
    "cardstack.toml",
    "cardstack.json",
    "config/cardstack.toml",
    "config/cardstack.json",
];

/// Resolves configuration from an explicit path, the environment, default
/// file locations, or built-in defaults, in that order.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    search_root: PathBuf,
    explicit_path: Option<PathBuf>,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self {
            search_root: PathBuf::from("."),
            explicit_path: None,
        }
    }

    /// Directory the default file names are resolved against.
    pub fn with_search_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.search_root = root.into();
        self
    }

    /// Load from this file, ignoring the environment's file settings.
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.explicit_path = Some(path.into());
        self
    }

    /// Load using the process environment.
    pub fn load(&self) -> Result<LoadedConfig, ConfigLoadError> {
        self.load_with(|name| env::var(name).ok())
    }

    /// Load using `lookup` in place of the process environment.
    ///
    /// Evaluation order:
    /// 1) the explicit path, if one was given,
    /// 2) `$CARDSTACK_CONFIG_PATH` (TOML or JSON file),
    /// 3) `$CARDSTACK_CONFIG_JSON` (inline JSON),
    /// 4) the first default file found under the search root,
    /// 5) defaults.
    ///
    /// `$CARDSTACK_CARD_COUNT` and `$CARDSTACK_VIEWPORT` are applied on top,
    /// then the result is validated.
    pub fn load_with<F>(&self, lookup: F) -> Result<LoadedConfig, ConfigLoadError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| {
            lookup(name).filter(|value| !value.trim().is_empty())
        };

        let (mut config, source) = if let Some(path) = &self.explicit_path {
            (
                CardStackConfig::load_from_file(path)?,
                ConfigSource::File(path.clone()),
            )
        } else if let Some(path) = var(CONFIG_PATH_VAR) {
            let path = PathBuf::from(path);
            (
                CardStackConfig::load_from_file(&path)?,
                ConfigSource::EnvPath(path),
            )
        } else if let Some(raw) = var(CONFIG_JSON_VAR) {
            (CardStackConfig::parse_json(&raw)?, ConfigSource::EnvInline)
        } else if let Some(path) = self.find_default_file() {
            (
                CardStackConfig::load_from_file(&path)?,
                ConfigSource::File(path),
            )
        } else {
            (CardStackConfig::default(), ConfigSource::Default)
        };
        debug!(?source, "card stack config resolved");

        if let Some(raw) = var(CARD_COUNT_VAR) {
            config.geometry.card_count =
                raw.trim().parse().map_err(|_| ConfigLoadError::InvalidEnv {
                    name: CARD_COUNT_VAR,
                    value: raw.clone(),
                })?;
        }
        if let Some(raw) = var(VIEWPORT_VAR) {
            config.geometry.viewport_size =
                raw.trim().parse().map_err(|_| ConfigLoadError::InvalidEnv {
                    name: VIEWPORT_VAR,
                    value: raw.clone(),
                })?;
        }

        let warnings = apply_guard_rails(&config)?;
        for warning in &warnings.items {
            warn!(hint = ?warning.hint, "{}", warning.message);
        }

        Ok(LoadedConfig {
            config,
            source,
            warnings,
        })
    }

    fn find_default_file(&self) -> Option<PathBuf> {
        DEFAULT_FILES
            .iter()
            .map(|name| self.search_root.join(name))
            .find(|path| path.exists())
    }
}

impl CardStackConfig {
    /// Resolve configuration from the process environment and the current
    /// directory.
    pub fn load_from_env() -> Result<LoadedConfig, ConfigLoadError> {
        ConfigLoader::new().load()
    }

    pub fn load_from_file(path: &Path) -> Result<Self, ConfigLoadError> {
        let contents =
            fs::read_to_string(path).map_err(|source| ConfigLoadError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        let origin = path.display().to_string();

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => serde_json::from_str(&contents)
                .map_err(|source| ConfigLoadError::Json { origin, source }),
            Some("toml") | Some("tml") => toml::from_str(&contents)
                .map_err(|source| ConfigLoadError::Toml { origin, source }),
            _ => Self::parse_from_str(&contents, &origin),
        }
    }

    /// Parse TOML, falling back to JSON.
    pub fn parse_from_str(
        contents: &str,
        origin: &str,
    ) -> Result<Self, ConfigLoadError> {
        toml::from_str(contents).or_else(|toml_err: toml::de::Error| {
            serde_json::from_str(contents).map_err(|json_err| {
                ConfigLoadError::Unparseable {
                    origin: origin.to_string(),
                    toml_error: toml_err.to_string(),
                    json_error: json_err.to_string(),
                }
            })
        })
    }

    pub fn parse_json(raw: &str) -> Result<Self, ConfigLoadError> {
        serde_json::from_str(raw).map_err(|source| ConfigLoadError::Json {
            origin: CONFIG_JSON_VAR.to_string(),
            source,
        })
    }

    /// Render as TOML.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string(self)
    }
}
