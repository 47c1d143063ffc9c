//! Handler für Datei-Operationen (Öffnen, Speichern, Restore).

use super::active_group;
use crate::app::state::Session;
use crate::app::AppState;
use crate::core::{AtomicCoordinator, LandmarkGroup};
use crate::ljson::parse_ljson;
use anyhow::Context;

/// Öffnet ein Asset.
///
/// Fehlt der persistierte Snapshot oder ist er ungültig, wird der leere
/// Snapshot des Templates verwendet.
pub fn open(
    state: &mut AppState,
    atomic: &AtomicCoordinator,
    asset: &str,
    template: &str,
) -> anyhow::Result<()> {
    if state.has_unsaved_changes() {
        if let Some(session) = state.session.as_ref() {
            log::warn!("Ungespeicherte Änderungen an '{}' verworfen", session.asset());
        }
    }

    let (group, from_template) = match state.backend.load_landmark_group(asset, template) {
        Ok(ljson) => match LandmarkGroup::new(asset, template, &ljson) {
            Ok(group) => (group, false),
            Err(e) => {
                log::warn!(
                    "Snapshot für '{}' ungültig ({}), verwende Template '{}'",
                    asset,
                    e,
                    template
                );
                (group_from_template(state, asset, template)?, true)
            }
        },
        Err(e) => {
            log::info!(
                "Kein Snapshot für '{}' ({:#}), verwende Template '{}'",
                asset,
                e,
                template
            );
            (group_from_template(state, asset, template)?, true)
        }
    };

    log::info!(
        "Asset '{}' geöffnet: {} Landmarks, {} Labels",
        asset,
        group.landmark_count(),
        group.labels().len()
    );
    let session = Session::new(group, from_template);
    state.status_message = Some(session.summary());
    state.session = Some(session);
    state.exit_confirmation_pending = false;
    atomic.mark_changed();
    Ok(())
}

fn group_from_template(state: &AppState, asset: &str, template: &str) -> anyhow::Result<LandmarkGroup> {
    let seed = state
        .backend
        .load_template(template)
        .with_context(|| format!("Template '{}' nicht verfügbar", template))?;
    let ljson = seed
        .empty_ljson(state.options.dimensionality)
        .with_context(|| format!("Template '{}' ist ungültig", template))?;
    let group = LandmarkGroup::new(asset, template, &ljson)
        .with_context(|| format!("Template '{}' erzeugt keinen gültigen Snapshot", template))?;
    Ok(group)
}

/// Schließt die Session.
pub fn close(state: &mut AppState, atomic: &AtomicCoordinator) {
    if let Some(session) = state.session.take() {
        if session.is_dirty() {
            log::warn!("Ungespeicherte Änderungen an '{}' verworfen", session.asset());
        }
        log::info!("Asset '{}' geschlossen", session.asset());
        atomic.mark_changed();
    }
    state.exit_confirmation_pending = false;
}

/// Speichert die Session über das Backend.
pub fn save(state: &mut AppState, atomic: &AtomicCoordinator) -> anyhow::Result<()> {
    let session = state.session.as_mut().context("Kein Asset geöffnet")?;
    session.group.save(state.backend.as_mut(), atomic)?;
    session.from_template = false;
    state.status_message = Some(format!("Gespeichert: {}", session.asset()));
    state.exit_confirmation_pending = false;
    Ok(())
}

/// Spielt eine LJSON-Datei als neuen Stand der Session ein.
pub fn restore_from_file(state: &mut AppState, atomic: &AtomicCoordinator, path: &str) -> anyhow::Result<()> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("Datei nicht lesbar: {}", path))?;
    let ljson = parse_ljson(&content).with_context(|| format!("Datei fehlerhaft: {}", path))?;
    active_group(state)?
        .restore(&ljson, atomic)
        .with_context(|| format!("Restore aus {} fehlgeschlagen", path))?;
    Ok(())
}
