//! Handler für Selektions-Operationen.

use super::active_group;
use crate::app::AppState;
use crate::core::{AtomicCoordinator, LandmarkCollectionMut};

/// Selektiert einen Landmark (additiv oder ersetzend).
pub fn select(
    state: &mut AppState,
    atomic: &AtomicCoordinator,
    index: usize,
    additive: bool,
) -> anyhow::Result<()> {
    let group = active_group(state)?;
    if !group.select(index, additive, atomic)? {
        log::debug!("Landmark {} ist leer und bleibt unselektiert", index);
    }
    Ok(())
}

/// Hebt die Selektion eines Landmarks auf.
pub fn deselect(state: &mut AppState, atomic: &AtomicCoordinator, index: usize) -> anyhow::Result<()> {
    active_group(state)?.deselect(index, atomic)?;
    Ok(())
}

/// Selektiert alle gesetzten Landmarks.
pub fn select_all(state: &mut AppState, atomic: &AtomicCoordinator) -> anyhow::Result<()> {
    active_group(state)?.select_all(atomic);
    Ok(())
}

/// Hebt die gesamte Selektion auf.
pub fn clear(state: &mut AppState, atomic: &AtomicCoordinator) -> anyhow::Result<()> {
    active_group(state)?.deselect_all(atomic);
    Ok(())
}

/// Selektiert genau die Landmarks eines Labels.
pub fn select_label(state: &mut AppState, atomic: &AtomicCoordinator, label: &str) -> anyhow::Result<()> {
    active_group(state)?.select_label(label, atomic)?;
    Ok(())
}

/// Erweitert die Selektion auf vollständige Labels.
pub fn complete_groups(state: &mut AppState, atomic: &AtomicCoordinator) -> anyhow::Result<()> {
    active_group(state)?.complete_groups(atomic);
    Ok(())
}
