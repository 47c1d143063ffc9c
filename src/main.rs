//! Landmark Editor.
//!
//! Headless-Shell: liest Skriptzeilen von stdin und führt sie auf einer
//! Session aus. Siehe [`landmark_editor::parse_script_line`] für die Befehle.

use landmark_editor::{
    AppController, AppState, EditorOptions, FileBackend, ScriptAction, parse_script_line,
    write_ljson,
};
use std::io::BufRead;

/// Anzahl der Commands, die `status` zusätzlich anzeigt
const RECENT_COMMANDS: usize = 5;

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Landmark Editor v{} startet...", env!("CARGO_PKG_VERSION"));

    // Optionen aus TOML laden (oder Standardwerte)
    let config_path = EditorOptions::config_path();
    let options = EditorOptions::load_from_file(&config_path);
    let backend = FileBackend::new(&options.data_dir);
    log::info!("Datenverzeichnis: {}", backend.root().display());

    let mut state = AppState::with_backend(options, Box::new(backend));
    let mut controller = AppController::new();

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        match parse_script_line(&line) {
            Ok(None) => {}
            Ok(Some(ScriptAction::Intent(intent))) => {
                if let Err(e) = controller.handle_intent(&mut state, intent) {
                    log::error!("{:#}", e);
                }
                for signal in controller.take_signals() {
                    log::debug!("Signal: {:?}", signal);
                }
            }
            Ok(Some(ScriptAction::Print)) => match state.session.as_ref() {
                Some(session) => print!("{}", write_ljson(&session.group.to_ljson())?),
                None => println!("Kein Asset geöffnet"),
            },
            Ok(Some(ScriptAction::Status)) => {
                match state.session.as_ref() {
                    Some(session) => println!("{}", session.summary()),
                    None => println!("Kein Asset geöffnet"),
                }
                for command in state.command_log.tail(RECENT_COMMANDS) {
                    println!("  zuletzt: {:?}", command);
                }
            }
            Err(e) => log::error!("{:#}", e),
        }

        if let Some(message) = state.status_message.take() {
            println!("{}", message);
        }
        if state.should_exit {
            break;
        }
    }

    if state.has_unsaved_changes() {
        log::warn!("Beendet mit ungespeicherten Änderungen");
    }
    log::info!("Landmark Editor beendet");
    Ok(())
}
