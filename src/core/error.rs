//! Fehlertypen des Landmark-Kerns.

use thiserror::Error;

/// Fehler bei Aufbau und Bearbeitung einer LandmarkGroup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LandmarkError {
    /// Ein Connectivity-Paar verweist auf einen Index außerhalb der Landmarks
    #[error("Connectivity-Paar [{a}, {b}] liegt außerhalb von [0, {len})")]
    ConnectivityOutOfBounds { a: usize, b: usize, len: usize },
    /// Eine Label-Maske verweist auf einen Index außerhalb der Landmarks
    #[error("Label '{label}' referenziert Index {index} außerhalb von [0, {len})")]
    MaskOutOfBounds {
        label: String,
        index: usize,
        len: usize,
    },
    /// Zugriff auf einen nicht existierenden Landmark
    #[error("Landmark-Index {index} existiert nicht (Gruppe hat {len} Landmarks)")]
    IndexOutOfBounds { index: usize, len: usize },
    /// Kein freier Slot mehr für `insert_new`
    #[error("Gruppe ist vollständig belegt, kein freier Landmark")]
    GroupFull,
    /// Punkte mit unterschiedlicher Dimensionalität in einem Snapshot
    #[error("Punkt {index} hat {found} Komponenten, erwartet {expected}")]
    InconsistentDimensionality {
        index: usize,
        expected: usize,
        found: usize,
    },
    /// Punkt ist weder vollständig leer noch vollständig gesetzt
    #[error("Punkt {index} ist ungültig (gemischte null-Komponenten oder falsche Länge)")]
    InvalidPoint { index: usize },
    /// Koordinate ist NaN oder unendlich
    #[error("Punkt {index} hat nicht-endliche Koordinaten")]
    NonFinitePoint { index: usize },
    /// `invisible`/`bad`-Array passt nicht zur Anzahl der Punkte
    #[error("Flag-Array '{field}' hat Länge {found}, erwartet {expected}")]
    FlagLengthMismatch {
        field: &'static str,
        expected: usize,
        found: usize,
    },
    /// LJSON-Version wird nicht unterstützt
    #[error("LJSON-Version {0} wird nicht unterstützt")]
    UnsupportedVersion(u32),
    /// Kein Label mit diesem Namen
    #[error("Unbekanntes Label '{0}'")]
    UnknownLabel(String),
}
