//! Logical list of available presets: one fixed default plus a cached mirror
//! of the user's synced presets.

pub mod builtin;

pub use builtin::default_preset;

use tracing::{debug, info, warn};

use crate::error::{EngineError, EngineResult, NameError};
use crate::events::ContentLoaded;
use crate::models::{ActivePreset, DEFAULT_PRESET_ID, Preset};
use crate::selection::SelectionStore;
use crate::sync::SyncCapability;

/// Owns the default preset, the user-preset cache, and the active-preset
/// pointer. The cache is replaced wholesale on every population and only
/// ever mutated incrementally after the sync service confirmed the same
/// change; a failed call leaves it untouched.
#[derive(Debug)]
pub struct PresetCatalog {
    default_preset: Preset,
    cache: Vec<Preset>,
    active: ActivePreset,
    sync: SyncCapability,
    generation: u64,
}

impl PresetCatalog {
    /// Fails when the supplied preset is not the reserved default catalog;
    /// there is nothing to fall back to without it.
    pub fn new(default_preset: Preset, sync: SyncCapability) -> EngineResult<Self> {
        if !default_preset.is_default || default_preset.id != DEFAULT_PRESET_ID {
            return Err(EngineError::NoDefaultCatalog);
        }
        let active = ActivePreset {
            id: default_preset.id.clone(),
            name: default_preset.name.clone(),
        };
        Ok(Self {
            default_preset,
            cache: Vec::new(),
            active,
            sync,
            generation: 0,
        })
    }

    /// Default preset first, then the cache in its current order.
    pub fn list(&self) -> Vec<&Preset> {
        std::iter::once(&self.default_preset)
            .chain(self.cache.iter())
            .collect()
    }

    pub fn resolve(&self, id: &str) -> Option<&Preset> {
        if self.default_preset.id == id {
            return Some(&self.default_preset);
        }
        self.cache.iter().find(|preset| preset.id == id)
    }

    pub fn active(&self) -> &ActivePreset {
        &self.active
    }

    /// Full record of the active preset. Falls back to the default preset
    /// should the active id ever become unresolvable mid-transition.
    pub fn active_full(&self) -> &Preset {
        self.resolve(&self.active.id).unwrap_or(&self.default_preset)
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn cached(&self) -> &[Preset] {
        &self.cache
    }

    pub fn is_sync_available(&self) -> bool {
        self.sync.is_available()
    }

    /// Make `id` the active preset. Clears the selection synchronously, so
    /// no stale tally is ever visible under the new preset's identity; the
    /// returned notification is for the rendering layer.
    pub fn activate(
        &mut self,
        id: &str,
        selection: &mut SelectionStore,
    ) -> EngineResult<ContentLoaded> {
        let next_active = self
            .resolve(id)
            .map(|preset| ActivePreset {
                id: preset.id.clone(),
                name: preset.name.clone(),
            })
            .ok_or_else(|| EngineError::NotFound(id.to_string()))?;
        self.active = next_active;
        self.generation += 1;
        selection.reset();
        info!(preset = %self.active.id, name = %self.active.name, "activated preset");
        Ok(ContentLoaded {
            preset_id: self.active.id.clone(),
            preset_name: self.active.name.clone(),
            generation: self.generation,
        })
    }

    /// Replace the cache wholesale from a fresh fetch. Offline mode clears
    /// it and succeeds (default-only degradation); a remote failure leaves
    /// the previous cache in place.
    pub async fn populate(&mut self) -> EngineResult<()> {
        match &self.sync {
            SyncCapability::Offline => {
                self.cache.clear();
                debug!("sync offline; catalog limited to the default preset");
            }
            SyncCapability::Available(gateway) => {
                let gateway = gateway.clone();
                let fetched = gateway.fetch_presets().await.map_err(EngineError::Sync)?;
                self.cache = fetched
                    .into_iter()
                    .filter(|preset| {
                        if preset.is_default || preset.id == DEFAULT_PRESET_ID {
                            warn!(preset = %preset.id, "sync service returned a default-flagged preset; discarded");
                            return false;
                        }
                        true
                    })
                    .collect();
                info!(count = self.cache.len(), "preset cache repopulated");
            }
        }
        self.generation += 1;
        Ok(())
    }

    /// Create a preset on the sync service and mirror it into the cache.
    /// The cache is only touched after the service confirmed the record.
    pub async fn create(&mut self, name: &str) -> EngineResult<Preset> {
        let clean = self.validate_name(name, None)?;
        let gateway = self.sync.gateway().map_err(EngineError::Sync)?.clone();
        let created = gateway
            .create_preset(&clean)
            .await
            .map_err(EngineError::Sync)?;
        self.cache.push(created.clone());
        info!(preset = %created.id, name = %created.name, "created preset");
        Ok(created)
    }

    /// Rename a cached preset. Renaming to the exact current name succeeds
    /// without contacting the service.
    pub async fn rename(&mut self, id: &str, new_name: &str) -> EngineResult<Preset> {
        if id == DEFAULT_PRESET_ID {
            return Err(EngineError::Permission);
        }
        let current = self
            .cache
            .iter()
            .find(|preset| preset.id == id)
            .ok_or_else(|| EngineError::NotFound(id.to_string()))?;
        if new_name.trim() == current.name {
            return Ok(current.clone());
        }
        let clean = self.validate_name(new_name, Some(id))?;
        let gateway = self.sync.gateway().map_err(EngineError::Sync)?.clone();
        let updated = gateway
            .rename_preset(id, &clean)
            .await
            .map_err(EngineError::Sync)?;
        if let Some(entry) = self.cache.iter_mut().find(|preset| preset.id == id) {
            entry.name = updated.name.clone();
        }
        if self.active.id == id {
            self.active.name = updated.name.clone();
        }
        info!(preset = %id, name = %updated.name, "renamed preset");
        Ok(updated)
    }

    /// Delete a cached preset. The caller is responsible for re-activating
    /// the default preset when the deleted one was active.
    pub async fn delete(&mut self, id: &str) -> EngineResult<()> {
        if id == DEFAULT_PRESET_ID {
            return Err(EngineError::Permission);
        }
        if !self.cache.iter().any(|preset| preset.id == id) {
            return Err(EngineError::NotFound(id.to_string()));
        }
        let gateway = self.sync.gateway().map_err(EngineError::Sync)?.clone();
        gateway.delete_preset(id).await.map_err(EngineError::Sync)?;
        self.cache.retain(|preset| preset.id != id);
        info!(preset = %id, "deleted preset");
        Ok(())
    }

    /// Empty/duplicate rules shared by create and rename. Collision checks
    /// are case-insensitive against the default name and every cache entry
    /// except `exclude`.
    fn validate_name(&self, name: &str, exclude: Option<&str>) -> Result<String, NameError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(NameError::Empty);
        }
        let lowered = trimmed.to_lowercase();
        if lowered == self.default_preset.name.to_lowercase() {
            return Err(NameError::Duplicate(trimmed.to_string()));
        }
        let collides = self
            .cache
            .iter()
            .filter(|preset| Some(preset.id.as_str()) != exclude)
            .any(|preset| preset.name.to_lowercase() == lowered);
        if collides {
            return Err(NameError::Duplicate(trimmed.to_string()));
        }
        Ok(trimmed.to_string())
    }
}
