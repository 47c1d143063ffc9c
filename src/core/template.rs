//! Minimale Template-Beschreibung als Saat für leere Snapshots.
//!
//! Ein Template besteht aus benannten Gruppen mit Punktanzahl und lokaler
//! Connectivity (Indizes relativ zur Gruppe). Die Gruppen werden in Reihenfolge
//! hintereinander gelegt; jede Gruppe wird zu einem Label.

use super::{Dimensionality, LJson, LJsonLabel};
use anyhow::bail;
use serde::{Deserialize, Serialize};

/// Eine Gruppe innerhalb eines Templates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateGroup {
    /// Label-Name
    pub label: String,
    /// Anzahl Landmarks der Gruppe
    pub points: usize,
    /// Verbindungen, Indizes relativ zur Gruppe
    #[serde(default)]
    pub connectivity: Vec<[usize; 2]>,
}

/// Template: geordnete Liste von Gruppen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    /// Gruppen in Reihenfolge
    pub groups: Vec<TemplateGroup>,
}

impl Template {
    /// Liest ein Template aus TOML und prüft die lokale Connectivity.
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        let template: Self = toml::from_str(content)?;
        template.validate()?;
        Ok(template)
    }

    /// Jede Verbindung muss innerhalb ihrer eigenen Gruppe bleiben.
    pub fn validate(&self) -> anyhow::Result<()> {
        for group in &self.groups {
            if let Some([a, b]) = group
                .connectivity
                .iter()
                .find(|[a, b]| *a >= group.points || *b >= group.points)
            {
                bail!(
                    "Gruppe '{}': Verbindung [{}, {}] liegt außerhalb von [0, {})",
                    group.label,
                    a,
                    b,
                    group.points
                );
            }
        }
        Ok(())
    }

    /// Gesamtzahl der Landmarks
    pub fn point_count(&self) -> usize {
        self.groups.iter().map(|g| g.points).sum()
    }

    /// Erzeugt einen leeren Snapshot mit allen Labels und globaler Connectivity.
    pub fn empty_ljson(&self, dims: Dimensionality) -> anyhow::Result<LJson> {
        self.validate()?;
        let mut ljson = LJson::empty(self.point_count(), dims);
        let mut offset = 0;

        for group in &self.groups {
            ljson.labels.push(LJsonLabel {
                label: group.label.clone(),
                mask: (offset..offset + group.points).collect(),
            });
            ljson.landmarks.connectivity.extend(
                group
                    .connectivity
                    .iter()
                    .map(|[a, b]| [a + offset, b + offset]),
            );
            offset += group.points;
        }

        Ok(ljson)
    }
}
