use crate::error::NameError;
use crate::models::{DEFAULT_PRESET_ID, PresetId};

use super::FlowKind;

/// The single modal management surface. At most one flow is open at a time;
/// name-editing flows carry their input text and the inline validation
/// error, the way the host renders them next to the field.
#[derive(Debug, Clone, PartialEq)]
pub enum ManageFlow {
    Create {
        name_input: String,
        error: Option<NameError>,
    },
    Edit {
        target: PresetId,
        name_input: String,
        error: Option<NameError>,
    },
    ConfirmDelete {
        target: PresetId,
    },
}

impl ManageFlow {
    pub fn kind(&self) -> FlowKind {
        match self {
            ManageFlow::Create { .. } => FlowKind::Create,
            ManageFlow::Edit { .. } => FlowKind::Edit,
            ManageFlow::ConfirmDelete { .. } => FlowKind::Delete,
        }
    }
}

/// Committed state of the preset control. `last_valid` always names a
/// resolvable preset; any pseudo-value the control reports is handled and
/// the control is settled back onto it.
#[derive(Debug)]
pub struct SelectorState {
    pub(crate) last_valid: PresetId,
    pub(crate) flow: Option<ManageFlow>,
    pub(crate) in_flight: bool,
}

impl Default for SelectorState {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectorState {
    /// Starts on the default preset, before any catalog population.
    pub fn new() -> Self {
        Self {
            last_valid: DEFAULT_PRESET_ID.to_string(),
            flow: None,
            in_flight: false,
        }
    }

    /// The value the control must display right now.
    pub fn control_value(&self) -> &PresetId {
        &self.last_valid
    }

    pub fn flow(&self) -> Option<&ManageFlow> {
        self.flow.as_ref()
    }

    /// True while a flow is open or a sync call is pending; the control and
    /// its trigger buttons stay disabled for the duration.
    pub fn is_busy(&self) -> bool {
        self.flow.is_some() || self.in_flight
    }

    /// Update the name field of the open create/edit flow. Clears the inline
    /// error so the user sees fresh validation on the next submit.
    pub fn set_flow_input(&mut self, text: impl Into<String>) {
        match &mut self.flow {
            Some(ManageFlow::Create { name_input, error })
            | Some(ManageFlow::Edit {
                name_input, error, ..
            }) => {
                *name_input = text.into();
                *error = None;
            }
            _ => {}
        }
    }

    pub(crate) fn record_flow_error(&mut self, name_error: NameError) {
        match &mut self.flow {
            Some(ManageFlow::Create { error, .. }) | Some(ManageFlow::Edit { error, .. }) => {
                *error = Some(name_error);
            }
            _ => {}
        }
    }
}
