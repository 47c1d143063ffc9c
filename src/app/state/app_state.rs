use super::Session;
use crate::app::CommandLog;
use crate::backend::{LandmarkBackend, MemoryBackend};
use crate::shared::EditorOptions;

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Aktuell geöffnetes Asset (None = nichts geöffnet)
    pub session: Option<Session>,
    /// Laufzeit-Optionen
    pub options: EditorOptions,
    /// Persistenz-Kollaborateur für Snapshots und Templates
    pub backend: Box<dyn LandmarkBackend>,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Temporäre Statusnachricht (z.B. Speicherfehler)
    pub status_message: Option<String>,
    /// Beenden wurde trotz ungespeicherter Änderungen angefragt
    pub exit_confirmation_pending: bool,
    /// Signalisiert dem Host, die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen leeren App-State mit In-Memory-Backend
    pub fn new() -> Self {
        Self::with_backend(EditorOptions::default(), Box::new(MemoryBackend::new()))
    }

    /// Erstellt einen leeren App-State mit gegebenem Backend
    pub fn with_backend(options: EditorOptions, backend: Box<dyn LandmarkBackend>) -> Self {
        Self {
            session: None,
            options,
            backend,
            command_log: CommandLog::new(),
            status_message: None,
            exit_confirmation_pending: false,
            should_exit: false,
        }
    }

    /// Gibt die Anzahl der Landmarks zurück (für Statusanzeige)
    pub fn landmark_count(&self) -> usize {
        self.session
            .as_ref()
            .map_or(0, |s| s.group.landmark_count())
    }

    /// `true` wenn die offene Session ungespeicherte Änderungen hat
    pub fn has_unsaved_changes(&self) -> bool {
        self.session.as_ref().is_some_and(Session::is_dirty)
    }

    /// Gibt zurück, ob ein Undo-Schritt verfügbar ist.
    pub fn can_undo(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.group.can_undo())
    }

    /// Gibt zurück, ob ein Redo-Schritt verfügbar ist.
    pub fn can_redo(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.group.can_redo())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
