//! Configuration loading
//!
//! Handles loading configuration from embedded defaults, files, and environment.

use anyhow::{Context, Result};
use config::{Config, Environment, File, FileFormat};
use keyward_core::AppConfig;
use std::path::Path;

/// Embedded default configuration (compiled into binary)
pub const DEFAULT_CONFIG: &str = include_str!("../config/default.toml");

/// Load configuration from files and environment
pub fn load_config(extra: Option<&Path>) -> Result<AppConfig> {
    let mut builder = Config::builder()
        // 1. Embedded defaults (always available)
        .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
        // 2. User config directory, then working directory overrides (optional)
        .add_source(File::from(user_config_path().as_path()).required(false))
        .add_source(File::with_name("config/local").required(false));

    // 3. Explicit --config file must exist
    if let Some(path) = extra {
        builder = builder.add_source(File::from(path).required(true));
    }

    let config = builder
        // 4. Environment variables (highest priority)
        // prefix_separator("_") so KEYWARD_STORAGE__DIR works.
        .add_source(
            Environment::with_prefix("KEYWARD")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()
        .context("Failed to build configuration")?;

    config
        .try_deserialize()
        .context("Failed to deserialize configuration")
}

/// `<config dir>/keyward/config.toml`
fn user_config_path() -> std::path::PathBuf {
    dirs::config_dir()
        .unwrap_or_default()
        .join("keyward")
        .join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_defaults_deserialize() {
        let config: AppConfig = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.storage.context, "default");
        assert!(config.storage.dir.is_none());
        assert!(config.settings.providers_file.is_none());
    }

    #[test]
    fn test_extra_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("keyward.toml");
        std::fs::write(
            &path,
            "[storage]\ncontext = \"staging\"\ndir = \"/var/lib/keyward\"\n",
        )
        .unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.storage.context, "staging");
        assert_eq!(
            config.storage.dir.as_deref(),
            Some(Path::new("/var/lib/keyward"))
        );
    }

    #[test]
    fn test_missing_extra_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_config(Some(&dir.path().join("absent.toml"))).is_err());
    }
}
