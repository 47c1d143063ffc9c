//! Application State: zentrale Datenhaltung.

mod app_state;
mod session;

pub use app_state::AppState;
pub use session::Session;
