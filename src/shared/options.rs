//! Zentrale Konfiguration für den Landmark Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::Dimensionality;
use serde::{Deserialize, Serialize};

// ── Daten ───────────────────────────────────────────────────────────

/// Standard-Datenverzeichnis (relativ zum Arbeitsverzeichnis).
pub const DATA_DIR: &str = "data";
/// Standard-Template, wenn beim Öffnen keines angegeben ist.
pub const DEFAULT_TEMPLATE: &str = "face";
/// Dateiname der Optionen-Datei neben der Binary.
pub const OPTIONS_FILE_NAME: &str = "landmark_editor.toml";

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `landmark_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorOptions {
    /// Wurzel des Datenverzeichnisses (`landmarks/`, `templates/`)
    pub data_dir: String,
    /// Template für `open` ohne Template-Angabe
    pub default_template: String,
    /// Dimensionalität neuer, aus einem Template erzeugter Snapshots
    #[serde(default)]
    pub dimensionality: Dimensionality,
    /// Beim Beenden mit ungespeicherten Änderungen warnen
    #[serde(default = "default_warn_unsaved_on_exit")]
    pub warn_unsaved_on_exit: bool,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            data_dir: DATA_DIR.to_string(),
            default_template: DEFAULT_TEMPLATE.to_string(),
            dimensionality: Dimensionality::Two,
            warn_unsaved_on_exit: true,
        }
    }
}

/// Serde-Default für `warn_unsaved_on_exit` (Abwärtskompatibilität).
fn default_warn_unsaved_on_exit() -> bool {
    true
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("landmark-editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join(OPTIONS_FILE_NAME)
    }
}
