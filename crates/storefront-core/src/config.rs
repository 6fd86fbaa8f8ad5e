use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

use crate::error::Error;
use crate::types::SearchField;

pub const DEFAULT_CATALOG_PATH: &str = "data/catalog.json";
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

/// The `[search]` table as written in configuration files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    pub search_fields: Vec<SearchField>,
    pub debounce_ms: u64,
    pub case_sensitive: bool,
    pub max_results: Option<usize>,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            search_fields: SearchField::DEFAULTS.to_vec(),
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            case_sensitive: false,
            max_results: None,
        }
    }
}

impl SearchSettings {
    pub fn validate(&self) -> crate::error::Result<()> {
        if self.search_fields.is_empty() {
            return Err(Error::InvalidConfig("search.search_fields must name at least one field".to_string()));
        }
        if self.max_results == Some(0) {
            return Err(Error::InvalidConfig("search.max_results must be positive when set".to_string()));
        }
        Ok(())
    }
}

pub struct Config {
    figment: Figment,
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "dev".to_string());
        Self::load_for_env(&env_name)
    }

    pub fn load_for_env(env_name: &str) -> anyhow::Result<Self> {
        let mut figment = Figment::new().merge(Toml::file("config.toml"));
        match env_name {
            "dev" | "development" => figment = figment.merge(Toml::file("config.dev.toml")),
            "prod" | "production" => figment = figment.merge(Toml::file("config.prod.toml")),
            "test" | "testing" => figment = figment.merge(Toml::file("config.test.toml")),
            other => tracing::warn!(env = other, "unknown RUST_ENV, using config.toml only"),
        }
        figment = figment.merge(Env::prefixed("APP_").split("__"));

        let config = Self::from_figment(figment);
        config.search_settings()?;
        tracing::debug!(env = env_name, "configuration loaded");
        Ok(config)
    }

    /// Wrap an already assembled provider stack. Defaults for the `[search]`
    /// table sit underneath whatever the stack provides.
    pub fn from_figment(figment: Figment) -> Self {
        let figment = Figment::from(Serialized::defaults(SearchSettings::default()).key("search")).merge(figment);
        Self { figment }
    }

    pub fn get<T>(&self, key: &str) -> anyhow::Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        self.figment
            .extract_inner(key)
            .map_err(|e| anyhow::anyhow!("Failed to get '{}': {}", key, e))
    }

    pub fn search_settings(&self) -> anyhow::Result<SearchSettings> {
        let settings: SearchSettings = self.get("search")?;
        settings.validate()?;
        Ok(settings)
    }

    /// Catalog location from `catalog.path`, expanded and resolved against `base`.
    pub fn catalog_path(&self, base: &Path) -> PathBuf {
        let raw = self
            .get::<String>("catalog.path")
            .unwrap_or_else(|_| DEFAULT_CATALOG_PATH.to_string());
        resolve_with_base(base, raw)
    }
}

/// Expand a user-provided path string:
/// - Expands leading '~' to the user's home directory
/// - Expands ${VAR} and $VAR environment variables
/// - Returns a PathBuf without attempting to canonicalize
pub fn expand_path<S: AsRef<str>>(input: S) -> PathBuf {
    let s = input.as_ref();
    let expanded_env = shellexpand::env(s).unwrap_or(std::borrow::Cow::Borrowed(s));
    let expanded = shellexpand::tilde(&expanded_env);
    PathBuf::from(expanded.as_ref())
}

/// Resolve a possibly relative path against a given base directory after expansion.
/// If `p` is absolute, it's returned as-is; otherwise `base.join(p)` is returned.
pub fn resolve_with_base<S: AsRef<str>>(base: &Path, p: S) -> PathBuf {
    let p = expand_path(p);
    if p.is_absolute() { p } else { base.join(p) }
}
