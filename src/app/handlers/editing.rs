//! Handler für Editing-Operationen (Setzen, Verschieben, Löschen, Flags).

use super::active_group;
use crate::app::AppState;
use crate::core::AtomicCoordinator;
use glam::DVec3;

/// Setzt einen Punkt in den nächsten freien Slot.
pub fn insert(state: &mut AppState, atomic: &AtomicCoordinator, point: DVec3) -> anyhow::Result<()> {
    let index = active_group(state)?.insert_new(point, None, atomic)?;
    log::debug!("Landmark {} gesetzt", index);
    Ok(())
}

/// Setzt den Punkt eines bestimmten Landmarks.
pub fn set(
    state: &mut AppState,
    atomic: &AtomicCoordinator,
    index: usize,
    point: DVec3,
) -> anyhow::Result<()> {
    active_group(state)?.set_lm_at(index, point, None, atomic)?;
    Ok(())
}

/// Verschiebt alle selektierten Landmarks.
pub fn move_selected(state: &mut AppState, atomic: &AtomicCoordinator, delta: DVec3) -> anyhow::Result<()> {
    let moved = active_group(state)?.move_selected(delta, atomic)?;
    log::debug!("{} Landmark(s) verschoben", moved);
    Ok(())
}

/// Leert alle selektierten Landmarks.
pub fn delete_selected(state: &mut AppState, atomic: &AtomicCoordinator) -> anyhow::Result<()> {
    let deleted = active_group(state)?.delete_selected(atomic);
    if deleted == 0 {
        state.status_message = Some("Nichts zum Löschen selektiert".to_string());
    }
    Ok(())
}

/// Schaltet das `bad`-Flag des selektierten Landmarks um.
pub fn toggle_bad(state: &mut AppState, atomic: &AtomicCoordinator) -> anyhow::Result<()> {
    if !active_group(state)?.mark_selected_as_bad(atomic) {
        state.status_message = Some("Flag erfordert genau einen selektierten Landmark".to_string());
    }
    Ok(())
}

/// Schaltet das `invisible`-Flag des selektierten Landmarks um.
pub fn toggle_invisible(state: &mut AppState, atomic: &AtomicCoordinator) -> anyhow::Result<()> {
    if !active_group(state)?.mark_selected_as_invisible(atomic) {
        state.status_message = Some("Flag erfordert genau einen selektierten Landmark".to_string());
    }
    Ok(())
}
