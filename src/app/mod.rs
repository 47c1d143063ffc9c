//! Application-Layer: Controller, State, Events und Handler.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod script;
/// Application State
///
/// Dieses Modul verwaltet den Zustand der Anwendung (offene Session, Backend, Optionen).
pub mod state;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use script::{ScriptAction, parse_script_line};
pub use state::{AppState, Session};
