//! Configuration types
//!
//! Loaded by the binary from `config/default.toml`, optional override files
//! and `KEYWARD_*` environment variables.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub settings: SettingsConfig,
}

/// Where saved credentials go
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Root directory; the platform data directory when unset
    #[serde(default)]
    pub dir: Option<PathBuf>,
    /// Namespace for saved credentials
    #[serde(default = "default_context")]
    pub context: String,
}

fn default_context() -> String {
    "default".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: None,
            context: default_context(),
        }
    }
}

/// Team edition provider schemas
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SettingsConfig {
    /// JSON providers file; the embedded defaults when unset
    #[serde(default)]
    pub providers_file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert!(config.storage.dir.is_none());
        assert_eq!(config.storage.context, "default");
        assert!(config.settings.providers_file.is_none());
    }

    #[test]
    fn test_partial_document() {
        let config: AppConfig =
            serde_json::from_str(r#"{"storage": {"dir": "/tmp/kw"}}"#).unwrap();
        assert_eq!(config.storage.dir, Some(PathBuf::from("/tmp/kw")));
        assert_eq!(config.storage.context, "default");
    }
}
