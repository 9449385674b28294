//! Credential persistence
//!
//! The resolver never persists anything itself; the resolved record is handed
//! once to a [`Setter`]. Two implementations ship with the crate:
//! - [`FileStore`]: one JSON file per provider with owner-only permissions
//! - [`MemoryStore`]: in-memory only (for testing)

mod file;
mod memory;


use crate::credential::CredentialDetail;
use crate::error::{Error, Result};

pub use file::FileStore;
pub use memory::MemoryStore;

/// Persistence collaborator
pub trait Setter {
    /// Persist a resolved credential. Errors are returned unchanged to the caller.
    fn set(&self, detail: CredentialDetail) -> Result<()>;
}

/// Handle RwLock poison errors consistently
pub(crate) fn handle_lock_poison<T>(e: std::sync::PoisonError<T>) -> Error {
    Error::Storage(format!("Lock poisoned: {}", e))
}

/// Reject records persistence cannot address.
///
/// Piped input is only decoded structurally, so this is where an empty or
/// path-like service name is caught.
pub(crate) fn check_service(service: &str) -> Result<()> {
    if service.trim().is_empty() {
        return Err(Error::Storage("service must not be empty".to_string()));
    }
    if service.contains(['/', '\\']) || service.starts_with('.') {
        return Err(Error::Storage(format!("invalid service name: {}", service)));
    }
    Ok(())
}
