//! Plan gating configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Where locked-feature upsells send the business owner.
pub const DEFAULT_UPGRADE_URL: &str = "https://app.salonbook.io/settings/billing";

/// Configuration for the plan permission resolver.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct PlanConfig {
    /// Upgrade page linked from denial messages. Default: the billing settings page.
    pub upgrade_url: Option<String>,
    /// Emit a debug event for every denied feature check. Default: false.
    pub log_denials: Option<bool>,
}

impl PlanConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: PlanConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Reject values that would produce broken upgrade links.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(url) = &self.upgrade_url {
            let url = url.trim();
            if url.is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "upgrade_url".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
            if !(url.starts_with("https://") || url.starts_with("http://")) {
                return Err(ConfigError::InvalidValue {
                    field: "upgrade_url".to_string(),
                    message: format!("expected an http(s) URL, got '{url}'"),
                });
            }
        }
        Ok(())
    }

    /// Returns the effective upgrade URL, defaulting to the billing settings page.
    pub fn effective_upgrade_url(&self) -> &str {
        self.upgrade_url
            .as_deref()
            .map(str::trim)
            .unwrap_or(DEFAULT_UPGRADE_URL)
    }

    /// Returns whether denials are logged, defaulting to false.
    pub fn effective_log_denials(&self) -> bool {
        self.log_denials.unwrap_or(false)
    }
}
