use crate::core::LandmarkGroup;

/// Ein geöffnetes (Asset, Template)-Paar mit seiner LandmarkGroup.
#[derive(Debug, Clone)]
pub struct Session {
    /// Die bearbeitete Gruppe
    pub group: LandmarkGroup,
    /// Gruppe wurde aus dem leeren Template-Snapshot erzeugt
    pub from_template: bool,
}

impl Session {
    /// Erstellt eine Session um eine Gruppe.
    pub fn new(group: LandmarkGroup, from_template: bool) -> Self {
        Self {
            group,
            from_template,
        }
    }

    /// Asset-ID
    pub fn asset(&self) -> &str {
        self.group.id()
    }

    /// Template-Name
    pub fn template(&self) -> &str {
        self.group.template_type()
    }

    /// `true` bei ungespeicherten Änderungen
    pub fn is_dirty(&self) -> bool {
        !self.group.is_up_to_date()
    }

    /// Einzeilige Zusammenfassung für Statusanzeigen
    pub fn summary(&self) -> String {
        let filled = self
            .group
            .landmarks()
            .iter()
            .filter(|lm| !lm.is_empty())
            .count();
        let next = self
            .group
            .next_available()
            .map_or_else(|| "-".to_string(), |i| i.to_string());
        format!(
            "{} ({}): {}/{} gesetzt, {} selektiert, nächster Slot {}, {}",
            self.asset(),
            self.template(),
            filled,
            self.group.landmark_count(),
            self.group.selected_indices().len(),
            next,
            if self.is_dirty() {
                "ungespeichert"
            } else {
                "gespeichert"
            }
        )
    }
}
