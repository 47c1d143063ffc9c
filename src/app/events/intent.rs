use glam::DVec3;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/Skript ohne direkte Mutationslogik.
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    /// Asset öffnen; ohne Template gilt `options.default_template`
    OpenRequested {
        asset: String,
        template: Option<String>,
    },
    /// Aktuelles Asset schließen
    CloseRequested,
    /// Neuen Punkt in den nächsten freien Slot setzen
    PointPlaced { point: DVec3 },
    /// Punkt eines bestimmten Landmarks setzen
    LandmarkPlaced { index: usize, point: DVec3 },
    /// Landmark per Klick selektieren
    LandmarkClicked { index: usize, additive: bool },
    /// Selektion eines Landmarks aufheben
    LandmarkDeselectRequested { index: usize },
    /// Alle Landmarks selektieren
    SelectAllRequested,
    /// Selektion aufheben
    ClearSelectionRequested,
    /// Alle Landmarks eines Labels selektieren
    LabelSelected { label: String },
    /// Teilselektion auf vollständige Labels erweitern
    CompleteGroupsRequested,
    /// Selektierte Landmarks verschieben (Drag)
    SelectionDragged { delta: DVec3 },
    /// Selektierte Landmarks löschen
    DeleteRequested,
    /// `bad`-Flag des selektierten Landmarks umschalten
    ToggleBadRequested,
    /// `invisible`-Flag des selektierten Landmarks umschalten
    ToggleInvisibleRequested,
    /// Rückgängig
    UndoRequested,
    /// Wiederholen
    RedoRequested,
    /// Aktuelles Asset speichern
    SaveRequested,
    /// Snapshot aus Datei einspielen
    RestoreRequested { path: String },
    /// Anwendung beenden
    ExitRequested,
}
