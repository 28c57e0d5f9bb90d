// Public library interface for tallycart
//
// The crate exposes the selection-and-preset synchronization engine as a
// library; the binary in main.rs is a thin headless host around it.

pub mod app;
pub mod catalog;
pub mod config;
pub mod error;
pub mod events;
pub mod models;
pub mod selection;
pub mod selector;
pub mod share;
pub mod sync;

pub use app::TallyCart;
pub use catalog::{PresetCatalog, default_preset};
pub use config::AppConfig;
pub use error::{EngineError, EngineResult, NameError, SyncError};
pub use events::{ContentLoaded, Notifier};
pub use models::{
    ActivePreset, Category, DEFAULT_PRESET_ID, Item, ItemId, Preset, PresetId, SelectedEntry,
};
pub use selection::{SelectionStore, SelectionSummary};
pub use selector::{
    FlowKind, FlowOutcome, ManageFlow, SelectorOutcome, SelectorState, SelectorValue,
};
pub use share::share_text;
pub use sync::{MemoryGateway, SyncCapability, SyncGateway};
