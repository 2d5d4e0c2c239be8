use color_eyre::{eyre::eyre, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::warn;

use crate::messages::Locale;

pub const ENV_API_BASE_URL: &str = "POKEDEX_API_BASE_URL";
pub const ENV_REQUEST_TIMEOUT_MS: &str = "POKEDEX_REQUEST_TIMEOUT_MS";
pub const ENV_CACHE_DURATION_MS: &str = "POKEDEX_CACHE_DURATION_MS";

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
  pub api: ApiConfig,
  pub cache: CacheConfig,
  /// Language for species text and messages
  pub locale: Locale,
  /// Entries per page for `list`
  pub page_size: u32,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      api: ApiConfig::default(),
      cache: CacheConfig::default(),
      locale: Locale::default(),
      page_size: 20,
    }
  }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ApiConfig {
  pub base_url: String,
  /// Per-request timeout in milliseconds
  pub timeout_ms: u64,
  /// `limit` used when fetching the complete collection
  pub full_list_limit: u32,
}

impl Default for ApiConfig {
  fn default() -> Self {
    Self {
      base_url: "https://pokeapi.co/api/v2".to_string(),
      timeout_ms: 10_000,
      full_list_limit: 2000,
    }
  }
}

impl ApiConfig {
  pub fn timeout(&self) -> Duration {
    Duration::from_millis(self.timeout_ms)
  }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CacheConfig {
  /// How long the cached list stays valid, in milliseconds
  pub duration_ms: i64,
}

impl Default for CacheConfig {
  fn default() -> Self {
    Self {
      duration_ms: 24 * 60 * 60 * 1000,
    }
  }
}

impl CacheConfig {
  pub fn duration(&self) -> chrono::Duration {
    chrono::Duration::milliseconds(self.duration_ms)
  }
}

impl Config {
  /// Load configuration, then apply environment overrides.
  ///
  /// Search order:
  /// 1. Explicit path if provided (must exist)
  /// 2. ./pokedex.yaml (current directory)
  /// 3. $XDG_CONFIG_HOME/pokedex/config.yaml
  ///
  /// With no file found the defaults are used.
  pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
    let path = if let Some(p) = explicit_path {
      if p.exists() {
        Some(p.to_path_buf())
      } else {
        return Err(eyre!("Config file not found: {}", p.display()));
      }
    } else {
      Self::find_config_file()
    };

    let mut config = match path {
      Some(p) => Self::load_from_path(&p)?,
      None => Self::default(),
    };
    config.apply_overrides_from(|key| std::env::var(key).ok());
    Ok(config)
  }

  fn find_config_file() -> Option<PathBuf> {
    // Check current directory
    let local = PathBuf::from("pokedex.yaml");
    if local.exists() {
      return Some(local);
    }

    // Check XDG config directory
    if let Some(config_dir) = dirs::config_dir() {
      let xdg_path = config_dir.join("pokedex").join("config.yaml");
      if xdg_path.exists() {
        return Some(xdg_path);
      }
    }

    None
  }

  fn load_from_path(path: &Path) -> Result<Self> {
    let contents = std::fs::read_to_string(path)
      .map_err(|e| eyre!("Failed to read config file {}: {}", path.display(), e))?;

    Self::from_yaml(&contents)
      .map_err(|e| eyre!("Failed to parse config file {}: {}", path.display(), e))
  }

  fn from_yaml(contents: &str) -> Result<Self> {
    // An empty file deserializes to null
    if contents.trim().is_empty() {
      return Ok(Self::default());
    }
    let config: Config = serde_yaml::from_str(contents).map_err(|e| eyre!("{}", e))?;
    Ok(config.validated())
  }

  /// Replace file values the env overrides would reject with their defaults.
  fn validated(mut self) -> Self {
    let defaults = Config::default();

    if self.api.base_url.trim().is_empty() {
      warn!(key = "api.base_url", "Ignoring empty config value");
      self.api.base_url = defaults.api.base_url;
    }
    if self.api.timeout_ms == 0 {
      warn!(key = "api.timeout_ms", "Ignoring invalid config value");
      self.api.timeout_ms = defaults.api.timeout_ms;
    }
    if self.api.full_list_limit == 0 {
      warn!(key = "api.full_list_limit", "Ignoring invalid config value");
      self.api.full_list_limit = defaults.api.full_list_limit;
    }
    if self.cache.duration_ms < 0 {
      warn!(key = "cache.duration_ms", value = self.cache.duration_ms, "Ignoring invalid config value");
      self.cache.duration_ms = defaults.cache.duration_ms;
    }
    if self.page_size == 0 {
      warn!(key = "page_size", "Ignoring invalid config value");
      self.page_size = defaults.page_size;
    }

    self
  }

  /// Apply overrides looked up through `lookup`. Values that don't parse are
  /// ignored with a warning.
  pub fn apply_overrides_from(&mut self, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(url) = lookup(ENV_API_BASE_URL) {
      let url = url.trim();
      if url.is_empty() {
        warn!(var = ENV_API_BASE_URL, "Ignoring empty override");
      } else {
        self.api.base_url = url.to_string();
      }
    }

    if let Some(raw) = lookup(ENV_REQUEST_TIMEOUT_MS) {
      match raw.trim().parse::<u64>() {
        Ok(ms) if ms > 0 => self.api.timeout_ms = ms,
        _ => warn!(var = ENV_REQUEST_TIMEOUT_MS, value = %raw, "Ignoring invalid override"),
      }
    }

    if let Some(raw) = lookup(ENV_CACHE_DURATION_MS) {
      match raw.trim().parse::<i64>() {
        Ok(ms) if ms >= 0 => self.cache.duration_ms = ms,
        _ => warn!(var = ENV_CACHE_DURATION_MS, value = %raw, "Ignoring invalid override"),
      }
    }
  }
}

/// Directory for the store and log files: `$DATA_DIR/pokedex`.
pub fn data_dir() -> Result<PathBuf> {
  dirs::data_dir()
    .map(|dir| dir.join("pokedex"))
    .ok_or_else(|| eyre!("Could not determine data directory"))
}
