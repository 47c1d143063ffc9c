use glam::DVec3;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Asset mit Template laden (Fallback: leerer Template-Snapshot)
    OpenAsset { asset: String, template: String },
    /// Session verwerfen
    CloseAsset,
    /// Punkt in den nächsten freien Slot setzen
    InsertLandmark { point: DVec3 },
    /// Punkt eines Landmarks setzen
    SetLandmark { index: usize, point: DVec3 },
    /// Landmark selektieren
    SelectLandmark { index: usize, additive: bool },
    /// Selektion eines Landmarks aufheben
    DeselectLandmark { index: usize },
    /// Alle Landmarks selektieren
    SelectAll,
    /// Selektion aufheben
    ClearSelection,
    /// Genau die Landmarks eines Labels selektieren
    SelectLabel { label: String },
    /// Teilselektion auf vollständige Labels erweitern
    CompleteGroups,
    /// Selektierte Landmarks verschieben
    MoveSelected { delta: DVec3 },
    /// Selektierte Landmarks leeren
    DeleteSelected,
    /// `bad`-Flag umschalten
    ToggleBadOnSelected,
    /// `invisible`-Flag umschalten
    ToggleInvisibleOnSelected,
    /// Undo
    Undo,
    /// Redo
    Redo,
    /// Über das Backend speichern
    Save,
    /// LJSON-Datei als neuen Stand einspielen
    RestoreFromFile { path: String },
    /// Beenden (mit Warnung bei ungespeicherten Änderungen)
    RequestExit,
}
