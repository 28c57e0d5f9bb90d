use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tracing::debug;
use uuid::Uuid;

use crate::error::SyncError;
use crate::models::Preset;

use super::SyncGateway;

/// In-memory reference backend. Stands in for the real sync service in the
/// demo binary and in tests; `set_failing` makes every call report a remote
/// failure without touching the stored presets.
#[derive(Default)]
pub struct MemoryGateway {
    presets: Mutex<Vec<Preset>>,
    failing: AtomicBool,
}

impl MemoryGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_presets(presets: Vec<Preset>) -> Self {
        Self {
            presets: Mutex::new(presets),
            failing: AtomicBool::new(false),
        }
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    fn check_reachable(&self) -> Result<(), SyncError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(SyncError::Remote("injected backend failure".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl SyncGateway for MemoryGateway {
    async fn fetch_presets(&self) -> Result<Vec<Preset>, SyncError> {
        self.check_reachable()?;
        Ok(self.presets.lock().unwrap().clone())
    }

    async fn create_preset(&self, name: &str) -> Result<Preset, SyncError> {
        self.check_reachable()?;
        let preset = Preset {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            categories: Vec::new(),
            is_default: false,
        };
        self.presets.lock().unwrap().push(preset.clone());
        debug!(id = %preset.id, name = %preset.name, "memory gateway stored preset");
        Ok(preset)
    }

    async fn rename_preset(&self, id: &str, name: &str) -> Result<Preset, SyncError> {
        self.check_reachable()?;
        let mut presets = self.presets.lock().unwrap();
        let preset = presets
            .iter_mut()
            .find(|preset| preset.id == id)
            .ok_or_else(|| SyncError::Remote(format!("no stored preset with id {}", id)))?;
        preset.name = name.to_string();
        Ok(preset.clone())
    }

    async fn delete_preset(&self, id: &str) -> Result<(), SyncError> {
        self.check_reachable()?;
        let mut presets = self.presets.lock().unwrap();
        let before = presets.len();
        presets.retain(|preset| preset.id != id);
        if presets.len() == before {
            return Err(SyncError::Remote(format!("no stored preset with id {}", id)));
        }
        Ok(())
    }
}
