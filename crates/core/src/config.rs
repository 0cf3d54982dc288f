//! Configuration file parsing for .adzan-license.toml

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::keys::DEFAULT_KEY_PREFIX;

pub const CONFIG_FILENAME: &str = ".adzan-license.toml";

/// Main configuration structure for .adzan-license.toml
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LicenseConfig {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub contact: ContactConfig,

    #[serde(default)]
    pub ads: AdsConfig,

    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Prefix every license key must start with
    #[serde(default = "default_key_prefix")]
    pub key_prefix: String,

    /// Length of a demo session in minutes
    #[serde(default = "default_demo_minutes")]
    pub demo_minutes: i64,

    /// Length of the fallback trial written after corrupt storage
    #[serde(default = "default_trial_days")]
    pub trial_days: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactConfig {
    /// WhatsApp number in international format, digits only
    #[serde(default = "default_whatsapp_number")]
    pub whatsapp_number: String,

    #[serde(default = "default_email")]
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdsConfig {
    /// Images rotated through when an ad is shown
    #[serde(default = "default_ad_images")]
    pub images: Vec<String>,

    /// Delay before the first ad after startup
    #[serde(default = "default_first_delay_secs")]
    pub first_delay_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory for the file store (defaults to the platform config dir)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,

    /// Also write the legacy record shape for older page scripts
    #[serde(default = "default_true")]
    pub mirror_legacy: bool,
}

// Default functions
fn default_key_prefix() -> String {
    DEFAULT_KEY_PREFIX.to_string()
}

fn default_demo_minutes() -> i64 {
    15
}

fn default_trial_days() -> i64 {
    2
}

fn default_whatsapp_number() -> String {
    "6289609745090".to_string()
}

fn default_email() -> String {
    "mahallahtv@gmail.com".to_string()
}

fn default_ad_images() -> Vec<String> {
    vec![
        "ads/ad1.jpg".to_string(),
        "ads/ad2.jpg".to_string(),
        "ads/ad3.jpg".to_string(),
    ]
}

fn default_first_delay_secs() -> u64 {
    10
}

fn default_true() -> bool {
    true
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            key_prefix: default_key_prefix(),
            demo_minutes: default_demo_minutes(),
            trial_days: default_trial_days(),
        }
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            whatsapp_number: default_whatsapp_number(),
            email: default_email(),
        }
    }
}

impl Default for AdsConfig {
    fn default() -> Self {
        Self {
            images: default_ad_images(),
            first_delay_secs: default_first_delay_secs(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: None,
            mirror_legacy: true,
        }
    }
}

impl AdsConfig {
    pub fn first_delay(&self) -> Duration {
        Duration::from_secs(self.first_delay_secs)
    }
}

impl LicenseConfig {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: LicenseConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Find and load .adzan-license.toml from the given directory or its ancestors
    pub fn find_and_load(start_dir: &Path) -> Result<Self> {
        let mut current = start_dir;

        loop {
            let config_path = current.join(CONFIG_FILENAME);
            if config_path.exists() {
                tracing::debug!(path = %config_path.display(), "loading config");
                return Self::from_file(&config_path);
            }

            match current.parent() {
                Some(parent) => current = parent,
                None => break,
            }
        }

        Ok(Self::default())
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }
}
