//! Abstract persistence capability backing user-owned presets.

pub mod memory;

pub use memory::MemoryGateway;

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::SyncError;
use crate::models::Preset;

/// Remote CRUD surface for user presets. Implementations own transport and
/// schema; the engine only sees ordered preset records.
#[async_trait]
pub trait SyncGateway: Send + Sync {
    /// Ordered list of the user's presets. Records may be name-only
    /// summaries (empty categories).
    async fn fetch_presets(&self) -> Result<Vec<Preset>, SyncError>;

    async fn create_preset(&self, name: &str) -> Result<Preset, SyncError>;

    async fn rename_preset(&self, id: &str, name: &str) -> Result<Preset, SyncError>;

    async fn delete_preset(&self, id: &str) -> Result<(), SyncError>;
}

/// Whether a sync gateway exists at all is decided once at startup; call
/// sites go through this capability instead of re-checking presence.
#[derive(Clone)]
pub enum SyncCapability {
    Available(Arc<dyn SyncGateway>),
    Offline,
}

impl SyncCapability {
    pub fn from_gateway<G: SyncGateway + 'static>(gateway: G) -> Self {
        SyncCapability::Available(Arc::new(gateway))
    }

    pub fn is_available(&self) -> bool {
        matches!(self, SyncCapability::Available(_))
    }

    /// The gateway, or `Unavailable` in offline mode. Nothing is contacted
    /// on the error path.
    pub fn gateway(&self) -> Result<&Arc<dyn SyncGateway>, SyncError> {
        match self {
            SyncCapability::Available(gateway) => Ok(gateway),
            SyncCapability::Offline => Err(SyncError::Unavailable),
        }
    }
}

// dyn SyncGateway carries no Debug bound; render the mode only.
impl std::fmt::Debug for SyncCapability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SyncCapability::Available(_) => f.write_str("SyncCapability::Available"),
            SyncCapability::Offline => f.write_str("SyncCapability::Offline"),
        }
    }
}
