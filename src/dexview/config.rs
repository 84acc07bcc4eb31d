use crate::error::{DexError, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use url::Url;

const CONFIG_FILENAME: &str = "config.json";

/// Environment variable overriding the platform config directory.
pub const CONFIG_DIR_ENV: &str = "DEXVIEW_CONFIG_DIR";

pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2/pokemon";
pub const DEFAULT_SPRITE_URL: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon";
pub const DEFAULT_PAGE_LIMIT: u32 = 50;

/// Keys accepted by [`DexConfig::get`] and [`DexConfig::set`], in display order.
pub const KEYS: &[&str] = &["base-url", "sprite-url", "page-limit", "timeout-secs"];

/// Configuration for dexview, stored as `config.json` in the config directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DexConfig {
    /// Listing endpoint; detail URLs are `<base_url>/<id>`
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Directory holding `<id>.png` sprites
    #[serde(default = "default_sprite_url")]
    pub sprite_url: String,

    /// Listing `limit` parameter; `None` leaves it to the server
    #[serde(default = "default_page_limit")]
    pub page_limit: Option<u32>,

    /// Per-request timeout; `None` waits indefinitely
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_sprite_url() -> String {
    DEFAULT_SPRITE_URL.to_string()
}

fn default_page_limit() -> Option<u32> {
    Some(DEFAULT_PAGE_LIMIT)
}

impl Default for DexConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            sprite_url: default_sprite_url(),
            page_limit: default_page_limit(),
            timeout_secs: None,
        }
    }
}

impl DexConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: DexConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "base-url" => Some(self.base_url.clone()),
            "sprite-url" => Some(self.sprite_url.clone()),
            "page-limit" => Some(
                self.page_limit
                    .map(|n| n.to_string())
                    .unwrap_or_else(|| "default".to_string()),
            ),
            "timeout-secs" => Some(
                self.timeout_secs
                    .map(|n| n.to_string())
                    .unwrap_or_else(|| "none".to_string()),
            ),
            _ => None,
        }
    }

    /// Sets a key from its textual form, validating the value.
    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "base-url" => self.base_url = parse_http_url(key, value)?,
            "sprite-url" => self.sprite_url = parse_http_url(key, value)?,
            "page-limit" => {
                self.page_limit = match value {
                    "default" => None,
                    _ => Some(parse_positive(key, value)?),
                }
            }
            "timeout-secs" => {
                self.timeout_secs = match value {
                    "none" => None,
                    _ => Some(u64::from(parse_positive(key, value)?)),
                }
            }
            _ => return Err(format!("Unknown config key: {}", key)),
        }
        Ok(())
    }

    /// All keys with their current values, in display order.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        KEYS.iter()
            .filter_map(|key| self.get(key).map(|value| (*key, value)))
            .collect()
    }
}

fn parse_http_url(key: &str, value: &str) -> std::result::Result<String, String> {
    let url = Url::parse(value).map_err(|e| format!("Invalid URL for {}: {}", key, e))?;
    match url.scheme() {
        "http" | "https" => Ok(value.trim_end_matches('/').to_string()),
        other => Err(format!("Unsupported scheme for {}: {}", key, other)),
    }
}

fn parse_positive(key: &str, value: &str) -> std::result::Result<u32, String> {
    match value.parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(format!("{} must be a positive integer, got {:?}", key, value)),
    }
}

/// Resolves the config directory: `$DEXVIEW_CONFIG_DIR`, else the platform default.
pub fn config_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "dexview", "dexview")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| DexError::Config("Could not determine config dir".to_string()))
}
