//! Engine facade. Owns the state objects and wires the selector handler,
//! catalog, selection store, and notifier together for a host to embed.

use tokio::sync::mpsc::UnboundedReceiver;
use tracing::warn;

use crate::catalog::PresetCatalog;
use crate::error::EngineResult;
use crate::events::{ContentLoaded, Notifier};
use crate::models::{DEFAULT_PRESET_ID, Preset};
use crate::selection::{SelectionStore, SelectionSummary};
use crate::selector::{self, FlowOutcome, ManageFlow, SelectorOutcome, SelectorState, SelectorValue};
use crate::share;
use crate::sync::SyncCapability;

pub struct TallyCart {
    selection: SelectionStore,
    catalog: PresetCatalog,
    selector: SelectorState,
    notifier: Notifier,
}

impl TallyCart {
    /// Fails with `NoDefaultCatalog` when the host hands over anything but
    /// the reserved default preset.
    pub fn new(default_preset: Preset, sync: SyncCapability) -> EngineResult<Self> {
        Ok(Self {
            selection: SelectionStore::new(),
            catalog: PresetCatalog::new(default_preset, sync)?,
            selector: SelectorState::new(),
            notifier: Notifier::new(),
        })
    }

    /// Initial population followed by activation of the default preset.
    /// Offline mode succeeds with a default-only catalog; a remote fetch
    /// failure is surfaced and can be retried by calling again.
    pub async fn bootstrap(&mut self) -> EngineResult<ContentLoaded> {
        self.catalog.populate().await?;
        let loaded = self.catalog.activate(DEFAULT_PRESET_ID, &mut self.selection)?;
        self.notifier.emit(loaded.clone());
        Ok(loaded)
    }

    /// Feed a committed control value through the selector state machine.
    pub fn choose(&mut self, value: SelectorValue) -> EngineResult<SelectorOutcome> {
        selector::handle_choice(
            &mut self.selector,
            &mut self.catalog,
            &mut self.selection,
            &self.notifier,
            value,
        )
    }

    pub fn set_flow_input(&mut self, text: impl Into<String>) {
        self.selector.set_flow_input(text);
    }

    pub async fn submit_flow(&mut self) -> EngineResult<FlowOutcome> {
        selector::submit_flow(
            &mut self.selector,
            &mut self.catalog,
            &mut self.selection,
            &self.notifier,
        )
        .await
    }

    pub fn cancel_flow(&mut self) {
        selector::cancel_flow(&mut self.selector);
    }

    /// One tap on an item tile. The step comes from the active preset's
    /// catalog definition; unknown ids are a host wiring bug and ignored.
    pub fn increment(&mut self, item_id: &str) {
        match self.catalog.active_full().find_item(item_id) {
            Some(item) => {
                let step = item.increment_step;
                self.selection.increment(item, step);
            }
            None => warn!(item = %item_id, "increment for an item outside the active preset"),
        }
    }

    pub fn decrement(&mut self, item_id: &str) {
        self.selection.decrement(item_id);
    }

    pub fn summarize(&self) -> SelectionSummary {
        self.selection.summarize()
    }

    pub fn share_text(&self) -> String {
        share::share_text(self.catalog.active_full(), &self.selection)
    }

    /// Content-load notifications for the rendering layer; a later call
    /// replaces the previous subscriber.
    pub fn subscribe(&mut self) -> UnboundedReceiver<ContentLoaded> {
        self.notifier.subscribe()
    }

    pub fn control_value(&self) -> &str {
        self.selector.control_value()
    }

    pub fn open_flow(&self) -> Option<&ManageFlow> {
        self.selector.flow()
    }

    pub fn catalog(&self) -> &PresetCatalog {
        &self.catalog
    }

    pub fn selection(&self) -> &SelectionStore {
        &self.selection
    }
}
