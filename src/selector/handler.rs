use tracing::{debug, info, warn};

use crate::catalog::PresetCatalog;
use crate::error::{EngineError, EngineResult};
use crate::events::Notifier;
use crate::models::DEFAULT_PRESET_ID;
use crate::selection::SelectionStore;

use super::{FlowKind, FlowOutcome, ManageFlow, SelectorOutcome, SelectorState, SelectorValue};

/// Interpret a committed control value. Real ids activate; pseudo-values
/// open the matching management flow or are ignored. Every path leaves
/// `selector.control_value()` on a resolvable preset, so the host can
/// unconditionally snap the control back to it.
pub fn handle_choice(
    selector: &mut SelectorState,
    catalog: &mut PresetCatalog,
    selection: &mut SelectionStore,
    notifier: &Notifier,
    value: SelectorValue,
) -> EngineResult<SelectorOutcome> {
    if selector.is_busy() {
        warn!("control value received while a management flow is busy");
        return Err(EngineError::FlowInProgress);
    }

    match value {
        SelectorValue::Preset(id) => {
            let loaded = catalog.activate(&id, selection)?;
            selector.last_valid = id;
            notifier.emit(loaded.clone());
            Ok(SelectorOutcome::Activated(loaded))
        }

        SelectorValue::Separator => {
            debug!("separator row chosen; reverting control");
            Ok(SelectorOutcome::Reverted)
        }

        SelectorValue::CreateNew => {
            selector.flow = Some(ManageFlow::Create {
                name_input: String::new(),
                error: None,
            });
            Ok(SelectorOutcome::FlowOpened(FlowKind::Create))
        }

        SelectorValue::EditSelected => {
            let target = guard_user_preset(selector)?;
            let current_name = catalog
                .resolve(&target)
                .map(|preset| preset.name.clone())
                .unwrap_or_default();
            selector.flow = Some(ManageFlow::Edit {
                target,
                name_input: current_name,
                error: None,
            });
            Ok(SelectorOutcome::FlowOpened(FlowKind::Edit))
        }

        SelectorValue::DeleteSelected => {
            let target = guard_user_preset(selector)?;
            selector.flow = Some(ManageFlow::ConfirmDelete { target });
            Ok(SelectorOutcome::FlowOpened(FlowKind::Delete))
        }
    }
}

/// Submit the open flow against the catalog. Validation failures keep the
/// flow open with the error recorded inline; sync failures abort the flow.
/// A successful mutation repopulates the cache from the service, and a
/// successful delete re-activates the default preset so the control never
/// points at an absent id.
pub async fn submit_flow(
    selector: &mut SelectorState,
    catalog: &mut PresetCatalog,
    selection: &mut SelectionStore,
    notifier: &Notifier,
) -> EngineResult<FlowOutcome> {
    if selector.in_flight {
        return Err(EngineError::FlowInProgress);
    }
    let Some(flow) = selector.flow.clone() else {
        debug!("flow submit with nothing open ignored");
        return Ok(FlowOutcome::Idle);
    };

    selector.in_flight = true;
    let outcome = run_flow(selector, catalog, selection, notifier, flow).await;
    selector.in_flight = false;

    if let Err(err) = &outcome {
        warn!(error = %err, "management flow failed");
        match err {
            EngineError::Validation(name_error) => {
                selector.record_flow_error(name_error.clone());
            }
            _ => {
                // Aborted: the modal closes, the control is already on the
                // last valid preset.
                selector.flow = None;
            }
        }
    }
    outcome
}

/// Close the open flow without touching catalog or selection. Ignored while
/// a sync call is pending; in-flight calls are never cancelled.
pub fn cancel_flow(selector: &mut SelectorState) {
    if selector.in_flight {
        warn!("cancel ignored while a sync call is pending");
        return;
    }
    if selector.flow.take().is_some() {
        debug!("management flow cancelled");
    }
}

async fn run_flow(
    selector: &mut SelectorState,
    catalog: &mut PresetCatalog,
    selection: &mut SelectionStore,
    notifier: &Notifier,
    flow: ManageFlow,
) -> EngineResult<FlowOutcome> {
    match flow {
        ManageFlow::Create { name_input, .. } => {
            let created = catalog.create(&name_input).await?;
            selector.flow = None;
            refresh_cache(selector, catalog, selection, notifier).await;
            info!(preset = %created.id, "create flow completed");
            Ok(FlowOutcome::Created(created))
        }

        ManageFlow::Edit {
            target, name_input, ..
        } => {
            let renamed = catalog.rename(&target, &name_input).await?;
            selector.flow = None;
            refresh_cache(selector, catalog, selection, notifier).await;
            Ok(FlowOutcome::Renamed(renamed))
        }

        ManageFlow::ConfirmDelete { target } => {
            catalog.delete(&target).await?;
            selector.flow = None;
            if let Err(err) = catalog.populate().await {
                warn!(error = %err, "repopulation after delete failed; keeping mirrored cache");
            }
            // Designated fallback: the deleted preset must never remain the
            // committed control value.
            let loaded = catalog.activate(DEFAULT_PRESET_ID, selection)?;
            selector.last_valid = DEFAULT_PRESET_ID.to_string();
            notifier.emit(loaded.clone());
            Ok(FlowOutcome::Deleted(loaded))
        }
    }
}

/// Wholesale refresh after a confirmed mutation. The mirrored cache is
/// already consistent with the confirmed change, so a failed refetch only
/// logs; if the refresh revealed that the active preset disappeared on the
/// service side, fall back to the default preset.
async fn refresh_cache(
    selector: &mut SelectorState,
    catalog: &mut PresetCatalog,
    selection: &mut SelectionStore,
    notifier: &Notifier,
) {
    if let Err(err) = catalog.populate().await {
        warn!(error = %err, "cache repopulation failed; keeping mirrored cache");
        return;
    }
    if catalog.resolve(&selector.last_valid).is_none() {
        warn!(preset = %selector.last_valid, "active preset vanished from the service; falling back to default");
        if let Ok(loaded) = catalog.activate(DEFAULT_PRESET_ID, selection) {
            selector.last_valid = DEFAULT_PRESET_ID.to_string();
            notifier.emit(loaded);
        }
    }
}

fn guard_user_preset(selector: &SelectorState) -> EngineResult<crate::models::PresetId> {
    if selector.last_valid == DEFAULT_PRESET_ID {
        warn!("edit/delete requested for the default preset");
        return Err(EngineError::Permission);
    }
    Ok(selector.last_valid.clone())
}
