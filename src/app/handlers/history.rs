//! Handler für Undo/Redo-Operationen.

use super::active_group;
use crate::app::AppState;
use crate::core::AtomicCoordinator;

/// Führt einen Undo-Schritt aus, falls vorhanden.
pub fn undo(state: &mut AppState, atomic: &AtomicCoordinator) -> anyhow::Result<()> {
    if active_group(state)?.undo(atomic) {
        log::info!("Undo ausgeführt");
    } else {
        state.status_message = Some("Nichts zum Rückgängigmachen".to_string());
    }
    Ok(())
}

/// Führt einen Redo-Schritt aus, falls vorhanden.
pub fn redo(state: &mut AppState, atomic: &AtomicCoordinator) -> anyhow::Result<()> {
    if active_group(state)?.redo(atomic) {
        log::info!("Redo ausgeführt");
    } else {
        state.status_message = Some("Nichts zum Wiederholen".to_string());
    }
    Ok(())
}
