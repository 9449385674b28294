//! Provider field schemas for team edition

use crate::credential::FieldSchema;
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

#[cfg(test)]
use mockall::automock;

/// Schema shipped with the binary, used when no providers file is configured
pub const DEFAULT_PROVIDERS: &str = include_str!("default_providers.json");

/// Source of per-provider field schemas
#[cfg_attr(test, automock)]
pub trait Settings {
    /// Load the provider → fields mapping
    fn fields(&self) -> Result<FieldSchema>;
}

/// Settings backed by a JSON providers file
#[derive(Debug, Clone, Default)]
pub struct FileSettings {
    path: Option<PathBuf>,
}

impl FileSettings {
    /// Read schemas from `path`; a missing file falls back to the defaults
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// Always use the embedded defaults
    #[must_use]
    pub fn defaults() -> Self {
        Self { path: None }
    }

    /// Configured providers file, if any
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

impl Settings for FileSettings {
    fn fields(&self) -> Result<FieldSchema> {
        let raw = match self.path() {
            Some(path) if path.exists() => {
                debug!(path = %path.display(), "Loading provider settings");
                std::fs::read_to_string(path).map_err(|e| {
                    Error::Settings(format!("failed to read {}: {}", path.display(), e))
                })?
            }
            _ => {
                debug!("Using default provider settings");
                DEFAULT_PROVIDERS.to_string()
            }
        };

        parse_schema(&raw)
    }
}

/// Parse and sanity-check a providers document
pub fn parse_schema(raw: &str) -> Result<FieldSchema> {
    let schema: FieldSchema = serde_json::from_str(raw)
        .map_err(|e| Error::Settings(format!("failed to parse providers: {}", e)))?;

    if schema.is_empty() {
        return Err(Error::Settings("no providers defined".to_string()));
    }

    for (provider, fields) in &schema {
        if provider.trim().is_empty() {
            return Err(Error::Settings("provider name must not be empty".to_string()));
        }
        if let Some(field) = fields.iter().find(|f| f.name.trim().is_empty()) {
            return Err(Error::Settings(format!(
                "provider {} has a field without a name ({:?})",
                provider, field.kind
            )));
        }
    }

    Ok(schema)
}
