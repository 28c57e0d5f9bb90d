use crate::models::PresetId;
use thiserror::Error;

pub type EngineResult<T> = std::result::Result<T, EngineError>;

/// Why a preset name was rejected. Shown inline next to the offending input
/// while the management flow stays open.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    #[error("preset name cannot be empty")]
    Empty,
    #[error("a preset named \"{0}\" already exists")]
    Duplicate(String),
}

/// Failure of the external sync service backing user-owned presets.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyncError {
    #[error("preset sync request failed: {0}")]
    Remote(String),
    #[error("preset sync is not available")]
    Unavailable,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error(transparent)]
    Validation(#[from] NameError),

    /// The built-in default preset cannot be renamed or deleted.
    #[error("the default preset cannot be modified")]
    Permission,

    /// An id resolved against neither the default preset nor the cache.
    /// Indicates the control and the catalog have drifted apart.
    #[error("unknown preset id \"{0}\"")]
    NotFound(PresetId),

    #[error(transparent)]
    Sync(#[from] SyncError),

    /// A management flow is already open or a sync call is still pending.
    #[error("another preset management flow is in progress")]
    FlowInProgress,

    /// The host supplied no usable default catalog. Fatal at startup.
    #[error("default catalog is missing or not marked as default")]
    NoDefaultCatalog,
}

impl EngineError {
    /// Validation failures are recovered inside the open flow; everything
    /// else aborts the operation that raised it.
    pub fn keeps_flow_open(&self) -> bool {
        matches!(self, EngineError::Validation(_))
    }
}
