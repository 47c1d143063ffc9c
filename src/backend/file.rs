//! Verzeichnisbasiertes Backend.
//!
//! Layout unterhalb von `root`:
//! - `landmarks/<asset>_<template>.ljson`
//! - `templates/<template>.toml`

use super::LandmarkBackend;
use crate::core::{LJson, Template};
use crate::ljson::{parse_ljson, write_ljson};
use anyhow::Context;
use std::path::{Path, PathBuf};

/// Backend über ein Datenverzeichnis.
#[derive(Debug, Clone)]
pub struct FileBackend {
    root: PathBuf,
}

impl FileBackend {
    /// Erstellt ein Backend für das Datenverzeichnis `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Wurzelverzeichnis
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Pfad des Snapshots eines (Asset, Template)-Paars
    pub fn landmark_path(&self, asset: &str, template: &str) -> PathBuf {
        self.root
            .join("landmarks")
            .join(format!("{}_{}.ljson", asset, template))
    }

    /// Pfad einer Template-Datei
    pub fn template_path(&self, name: &str) -> PathBuf {
        self.root.join("templates").join(format!("{}.toml", name))
    }
}

impl LandmarkBackend for FileBackend {
    fn load_landmark_group(&self, asset: &str, template: &str) -> anyhow::Result<LJson> {
        let path = self.landmark_path(asset, template);
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Snapshot nicht lesbar: {}", path.display()))?;
        let ljson = parse_ljson(&content)
            .with_context(|| format!("Snapshot fehlerhaft: {}", path.display()))?;
        log::info!("Snapshot geladen aus: {}", path.display());
        Ok(ljson)
    }

    fn save_landmark_group(
        &mut self,
        asset: &str,
        template: &str,
        ljson: &LJson,
    ) -> anyhow::Result<()> {
        let path = self.landmark_path(asset, template);
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Verzeichnis nicht anlegbar: {}", dir.display()))?;
        }

        // Erst in Temp-Datei schreiben, dann umbenennen: alles oder nichts
        let content = write_ljson(ljson)?;
        let tmp_path = path.with_extension("ljson.tmp");
        std::fs::write(&tmp_path, content)
            .with_context(|| format!("Schreiben fehlgeschlagen: {}", tmp_path.display()))?;
        std::fs::rename(&tmp_path, &path)
            .with_context(|| format!("Umbenennen fehlgeschlagen: {}", path.display()))?;

        log::info!("Snapshot gespeichert nach: {}", path.display());
        Ok(())
    }

    fn load_template(&self, name: &str) -> anyhow::Result<Template> {
        let path = self.template_path(name);
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Template nicht lesbar: {}", path.display()))?;
        let template = Template::from_toml_str(&content)
            .with_context(|| format!("Template fehlerhaft: {}", path.display()))?;
        log::info!(
            "Template '{}' geladen: {} Gruppen, {} Punkte",
            name,
            template.groups.len(),
            template.point_count()
        );
        Ok(template)
    }
}
