//! In-Memory-Backend für Tests und Sitzungen ohne Datenverzeichnis.

use super::LandmarkBackend;
use crate::core::{LJson, Template};
use anyhow::{anyhow, bail};
use std::collections::HashMap;

/// Hält Snapshots und Templates im Speicher.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    groups: HashMap<(String, String), LJson>,
    templates: HashMap<String, Template>,
    /// Wenn gesetzt, schlägt jedes Speichern fehl
    pub fail_saves: bool,
    save_count: usize,
}

impl MemoryBackend {
    /// Erstellt ein leeres Backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Hinterlegt ein Template unter `name`.
    pub fn with_template(mut self, name: impl Into<String>, template: Template) -> Self {
        self.templates.insert(name.into(), template);
        self
    }

    /// Hinterlegt einen Snapshot für (Asset, Template).
    pub fn insert_group(&mut self, asset: &str, template: &str, ljson: LJson) {
        self.groups
            .insert((asset.to_string(), template.to_string()), ljson);
    }

    /// Gespeicherter Snapshot für (Asset, Template)
    pub fn group(&self, asset: &str, template: &str) -> Option<&LJson> {
        self.groups.get(&(asset.to_string(), template.to_string()))
    }

    /// Anzahl erfolgreicher Speichervorgänge
    pub fn save_count(&self) -> usize {
        self.save_count
    }
}

impl LandmarkBackend for MemoryBackend {
    fn load_landmark_group(&self, asset: &str, template: &str) -> anyhow::Result<LJson> {
        self.group(asset, template)
            .cloned()
            .ok_or_else(|| anyhow!("Kein Snapshot für '{}' ({})", asset, template))
    }

    fn save_landmark_group(
        &mut self,
        asset: &str,
        template: &str,
        ljson: &LJson,
    ) -> anyhow::Result<()> {
        if self.fail_saves {
            bail!("Speichern von '{}' ({}) abgelehnt", asset, template);
        }
        self.insert_group(asset, template, ljson.clone());
        self.save_count += 1;
        Ok(())
    }

    fn load_template(&self, name: &str) -> anyhow::Result<Template> {
        self.templates
            .get(name)
            .cloned()
            .ok_or_else(|| anyhow!("Unbekanntes Template '{}'", name))
    }
}
