//! Handler für Anwendungssteuerung (Beenden mit Rückfrage).

use crate::app::AppState;

/// Fordert das Beenden an.
///
/// Mit ungespeicherten Änderungen (und aktiver Warnung) muss das Beenden ein
/// zweites Mal angefordert werden.
pub fn request_exit(state: &mut AppState) {
    let warn = state.options.warn_unsaved_on_exit && state.has_unsaved_changes();
    if warn && !state.exit_confirmation_pending {
        log::warn!("Beenden mit ungespeicherten Änderungen angefragt");
        state.exit_confirmation_pending = true;
        state.status_message =
            Some("Ungespeicherte Änderungen. Zum Verwerfen erneut beenden.".to_string());
        return;
    }
    state.should_exit = true;
}
