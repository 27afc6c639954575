//! # Configuration
//!
//! Settings live in `config.json` inside the digest home directory:
//!
//! 1. `DIGEST_HOME` environment variable, when set.
//! 2. Otherwise the platform data directory (via `directories`).
//!
//! A missing file means defaults.
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `sign_in_delay_ms` | `1000` | Simulated latency before password sign-in succeeds |
//! | `notification_limit` | `5` | Notifications kept in the hub queue |
//! | `notification_duration_ms` | `5000` | Default display time of a notification |
//! | `archive_page_size` | `6` | Issues per archive page |
//! | `catalog_total_issues` | `52` | Issue count advertised by the archive footer |
//! | `catalog_path` | unset | JSON file replacing the built-in catalog |

use crate::error::{DigestError, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILENAME: &str = "config.json";
pub const HOME_ENV: &str = "DIGEST_HOME";

pub const KEYS: &[&str] = &[
    "sign_in_delay_ms",
    "notification_limit",
    "notification_duration_ms",
    "archive_page_size",
    "catalog_total_issues",
    "catalog_path",
];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DigestConfig {
    #[serde(default = "default_sign_in_delay_ms")]
    pub sign_in_delay_ms: u64,

    #[serde(default = "default_notification_limit")]
    pub notification_limit: usize,

    #[serde(default = "default_notification_duration_ms")]
    pub notification_duration_ms: u64,

    #[serde(default = "default_archive_page_size")]
    pub archive_page_size: usize,

    #[serde(default = "default_catalog_total_issues")]
    pub catalog_total_issues: usize,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<PathBuf>,
}

fn default_sign_in_delay_ms() -> u64 {
    1000
}

fn default_notification_limit() -> usize {
    5
}

fn default_notification_duration_ms() -> u64 {
    5000
}

fn default_archive_page_size() -> usize {
    6
}

fn default_catalog_total_issues() -> usize {
    52
}

impl Default for DigestConfig {
    fn default() -> Self {
        Self {
            sign_in_delay_ms: default_sign_in_delay_ms(),
            notification_limit: default_notification_limit(),
            notification_duration_ms: default_notification_duration_ms(),
            archive_page_size: default_archive_page_size(),
            catalog_total_issues: default_catalog_total_issues(),
            catalog_path: None,
        }
    }
}

impl DigestConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: DigestConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn sign_in_delay(&self) -> Duration {
        Duration::from_millis(self.sign_in_delay_ms)
    }

    pub fn notification_duration(&self) -> Duration {
        Duration::from_millis(self.notification_duration_ms)
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "sign_in_delay_ms" => Some(self.sign_in_delay_ms.to_string()),
            "notification_limit" => Some(self.notification_limit.to_string()),
            "notification_duration_ms" => Some(self.notification_duration_ms.to_string()),
            "archive_page_size" => Some(self.archive_page_size.to_string()),
            "catalog_total_issues" => Some(self.catalog_total_issues.to_string()),
            "catalog_path" => Some(
                self.catalog_path
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default(),
            ),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "sign_in_delay_ms" => self.sign_in_delay_ms = parse_number(key, value, true)?,
            "notification_limit" => self.notification_limit = parse_number(key, value, false)?,
            "notification_duration_ms" => {
                self.notification_duration_ms = parse_number(key, value, false)?
            }
            "archive_page_size" => self.archive_page_size = parse_number(key, value, false)?,
            "catalog_total_issues" => {
                self.catalog_total_issues = parse_number(key, value, false)?
            }
            "catalog_path" => {
                self.catalog_path = if value.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                }
            }
            _ => return Err(format!("Unknown config key: {}", key)),
        }
        Ok(())
    }

    /// All `(key, value)` pairs in display order.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        KEYS.iter()
            .map(|key| (*key, self.get(key).unwrap_or_default()))
            .collect()
    }
}

fn parse_number<T>(key: &str, value: &str, allow_zero: bool) -> std::result::Result<T, String>
where
    T: std::str::FromStr + PartialEq + Default,
{
    let parsed: T = value
        .parse()
        .map_err(|_| format!("Invalid value for {}: {}", key, value))?;
    if !allow_zero && parsed == T::default() {
        return Err(format!("{} must be greater than zero", key));
    }
    Ok(parsed)
}

/// Resolves the directory holding `config.json`.
pub fn digest_home() -> Result<PathBuf> {
    if let Ok(home) = std::env::var(HOME_ENV) {
        if !home.is_empty() {
            return Ok(PathBuf::from(home));
        }
    }

    ProjectDirs::from("com", "thedigest", "digest")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| DigestError::Config("could not determine a data directory".to_string()))
}
