//! File-backed credential store

use super::{check_service, Setter};
use crate::config::StorageConfig;
use crate::credential::{CredentialDetail, CredentialType};
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Writes each record to `<root>/credentials/<context>/[<profile>/]<service>.json`
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
    context: String,
}

impl FileStore {
    /// Create a store rooted at `root`, namespaced by `context`
    #[must_use]
    pub fn new(root: impl Into<PathBuf>, context: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            context: context.into(),
        }
    }

    /// Build from configuration, defaulting to the platform data directory
    pub fn from_config(config: &StorageConfig) -> Result<Self> {
        let root = match &config.dir {
            Some(dir) => dir.clone(),
            None => dirs::data_dir()
                .or_else(dirs::home_dir)
                .ok_or_else(|| {
                    Error::Configuration("Cannot determine data directory".to_string())
                })?
                .join("keyward"),
        };

        Ok(Self::new(root, config.context.clone()))
    }

    /// Directory holding the credentials of the current context
    #[must_use]
    pub fn context_dir(&self) -> PathBuf {
        self.root.join("credentials").join(&self.context)
    }

    /// Location of a record
    #[must_use]
    pub fn record_path(
        &self,
        service: &str,
        kind: Option<CredentialType>,
        username: &str,
    ) -> PathBuf {
        let mut dir = self.context_dir();
        match kind {
            Some(CredentialType::Me) => dir.push("me"),
            Some(CredentialType::Org) => dir.push("org"),
            Some(CredentialType::Other) => {
                dir.push("other");
                dir.push(username);
            }
            None => {}
        }
        dir.join(format!("{}.json", service))
    }

    /// Read back a saved record
    pub fn load(
        &self,
        service: &str,
        kind: Option<CredentialType>,
        username: &str,
    ) -> Result<Option<CredentialDetail>> {
        let path = self.record_path(service, kind, username);
        if !path.exists() {
            return Ok(None);
        }

        let raw = std::fs::read(&path)
            .map_err(|e| Error::Storage(format!("Failed to read {}: {}", path.display(), e)))?;
        let detail = serde_json::from_slice(&raw)
            .map_err(|e| Error::Storage(format!("Failed to parse {}: {}", path.display(), e)))?;
        Ok(Some(detail))
    }
}

/// Create `dir` and restrict it to the owner on Unix
fn create_private_dir(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir)
        .map_err(|e| Error::Storage(format!("Failed to create directory: {}", e)))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let perms = std::fs::Permissions::from_mode(0o700);
        let _ = std::fs::set_permissions(dir, perms);
    }

    Ok(())
}

impl Setter for FileStore {
    fn set(&self, detail: CredentialDetail) -> Result<()> {
        check_service(&detail.service)?;
        if detail.kind == Some(CredentialType::Other) {
            check_service(&detail.username)
                .map_err(|_| Error::Storage("username is required for OTHER".to_string()))?;
        }

        let path = self.record_path(&detail.service, detail.kind, &detail.username);
        if let Some(parent) = path.parent() {
            create_private_dir(parent)?;
        }

        let json = serde_json::to_vec_pretty(&detail)
            .map_err(|e| Error::Storage(format!("Failed to serialize credential: {}", e)))?;

        std::fs::write(&path, json)
            .map_err(|e| Error::Storage(format!("Failed to write credential file: {}", e)))?;

        // Set file permissions to owner-only on Unix
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let perms = std::fs::Permissions::from_mode(0o600);
            let _ = std::fs::set_permissions(&path, perms);
        }

        debug!(path = %path.display(), "Saved credential file");
        info!(service = %detail.service, context = %self.context, "Credential stored");
        Ok(())
    }
}
