use crate::events::ContentLoaded;
use crate::models::{Preset, PresetId};

/// Everything the preset control can hand the controller. Real ids activate
/// a preset; the rest are pseudo-values carried by the same control.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectorValue {
    Preset(PresetId),
    CreateNew,
    EditSelected,
    DeleteSelected,
    /// Visual divider row; never a selection.
    Separator,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowKind {
    Create,
    Edit,
    Delete,
}

/// What a committed control value led to. Whatever the outcome, the control
/// always settles on `SelectorState::control_value()`.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectorOutcome {
    /// A preset was activated and the content-load notification emitted.
    Activated(ContentLoaded),
    /// Nothing to do; the control snaps back to the last valid preset.
    Reverted,
    /// A management flow was opened against the current preset.
    FlowOpened(FlowKind),
}

/// Result of submitting the open management flow.
#[derive(Debug, Clone, PartialEq)]
pub enum FlowOutcome {
    Created(Preset),
    Renamed(Preset),
    /// The preset is gone and the default preset has been re-activated.
    Deleted(ContentLoaded),
    /// No flow was open; nothing happened.
    Idle,
}
