//! Feature-Handler für AppCommand-Verarbeitung.
//!
//! Jeder Handler gruppiert die Command-Ausführung eines Feature-Bereichs.
//! Der Controller dispatcht an die passende Handler-Funktion.

pub mod dialog;
pub mod editing;
pub mod file_io;
pub mod history;
pub mod selection;

use crate::app::AppState;
use crate::core::LandmarkGroup;
use anyhow::Context;

/// Gruppe der offenen Session oder Fehler, wenn nichts geöffnet ist.
fn active_group(state: &mut AppState) -> anyhow::Result<&mut LandmarkGroup> {
    state
        .session
        .as_mut()
        .map(|s| &mut s.group)
        .context("Kein Asset geöffnet")
}
