//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};
use crate::core::{AtomicCoordinator, Signal};

/// Orchestriert Intents und Commands auf den AppState.
///
/// Besitzt den [`AtomicCoordinator`], der an jede Gruppen-Operation
/// weitergereicht wird; Hosts entnehmen die Signale nach jedem Intent.
#[derive(Debug, Default)]
pub struct AppController {
    atomic: AtomicCoordinator,
}

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self::default()
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    ///
    /// Fehler werden zusätzlich als Statusnachricht hinterlegt.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;
        let atomic = &self.atomic;

        let result = match command {
            // === Datei-I/O ===
            AppCommand::OpenAsset { asset, template } => {
                handlers::file_io::open(state, atomic, &asset, &template)
            }
            AppCommand::CloseAsset => {
                handlers::file_io::close(state, atomic);
                Ok(())
            }
            AppCommand::Save => handlers::file_io::save(state, atomic),
            AppCommand::RestoreFromFile { path } => {
                handlers::file_io::restore_from_file(state, atomic, &path)
            }

            // === Editing ===
            AppCommand::InsertLandmark { point } => handlers::editing::insert(state, atomic, point),
            AppCommand::SetLandmark { index, point } => {
                handlers::editing::set(state, atomic, index, point)
            }
            AppCommand::MoveSelected { delta } => {
                handlers::editing::move_selected(state, atomic, delta)
            }
            AppCommand::DeleteSelected => handlers::editing::delete_selected(state, atomic),
            AppCommand::ToggleBadOnSelected => handlers::editing::toggle_bad(state, atomic),
            AppCommand::ToggleInvisibleOnSelected => {
                handlers::editing::toggle_invisible(state, atomic)
            }

            // === Selektion ===
            AppCommand::SelectLandmark { index, additive } => {
                handlers::selection::select(state, atomic, index, additive)
            }
            AppCommand::DeselectLandmark { index } => {
                handlers::selection::deselect(state, atomic, index)
            }
            AppCommand::SelectAll => handlers::selection::select_all(state, atomic),
            AppCommand::ClearSelection => handlers::selection::clear(state, atomic),
            AppCommand::SelectLabel { label } => {
                handlers::selection::select_label(state, atomic, &label)
            }
            AppCommand::CompleteGroups => handlers::selection::complete_groups(state, atomic),

            // === History ===
            AppCommand::Undo => handlers::history::undo(state, atomic),
            AppCommand::Redo => handlers::history::redo(state, atomic),

            // === Anwendungssteuerung ===
            AppCommand::RequestExit => {
                handlers::dialog::request_exit(state);
                Ok(())
            }
        };

        if let Err(e) = &result {
            state.status_message = Some(format!("{:#}", e));
        }
        result
    }

    /// Entnimmt alle seit dem letzten Aufruf gesammelten Signale.
    pub fn take_signals(&self) -> Vec<Signal> {
        self.atomic.take_signals()
    }

    /// Read-only Zugriff auf den Coordinator
    pub fn atomic(&self) -> &AtomicCoordinator {
        &self.atomic
    }
}
