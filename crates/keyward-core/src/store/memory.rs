//! In-memory credential store

use super::{check_service, handle_lock_poison, Setter};
use crate::credential::CredentialDetail;
use crate::error::Result;
use std::collections::HashMap;
use std::sync::RwLock;
use tracing::debug;

/// Keeps saved records in a map keyed by service
#[derive(Default)]
pub struct MemoryStore {
    records: RwLock<HashMap<String, CredentialDetail>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the last record saved for `service`
    pub fn get(&self, service: &str) -> Result<Option<CredentialDetail>> {
        let records = self.records.read().map_err(handle_lock_poison)?;
        Ok(records.get(service).cloned())
    }

    /// Number of saved records
    pub fn len(&self) -> Result<usize> {
        Ok(self.records.read().map_err(handle_lock_poison)?.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}

impl Setter for MemoryStore {
    fn set(&self, detail: CredentialDetail) -> Result<()> {
        check_service(&detail.service)?;
        debug!(service = %detail.service, "Storing credential in memory");

        let mut records = self.records.write().map_err(handle_lock_poison)?;
        records.insert(detail.service.clone(), detail);
        Ok(())
    }
}
