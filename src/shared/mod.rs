//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Konfiguration, die zwischen `app` und dem Binary geteilt wird.

pub mod options;

pub use options::EditorOptions;
pub use options::{DATA_DIR, DEFAULT_TEMPLATE, OPTIONS_FILE_NAME};
