//! Persistenz-Kollaborateure für LandmarkGroups.
//!
//! Der Kern kennt nur den [`LandmarkBackend`]-Trait; woher Snapshots und
//! Templates kommen (Verzeichnis, Speicher, Server), entscheidet der Host.

pub mod file;
pub mod memory;

pub use file::FileBackend;
pub use memory::MemoryBackend;

use crate::core::{LJson, Template};

/// Lädt und speichert Snapshots pro (Asset, Template)-Paar.
pub trait LandmarkBackend {
    /// Lädt den persistierten Snapshot eines Assets.
    fn load_landmark_group(&self, asset: &str, template: &str) -> anyhow::Result<LJson>;

    /// Speichert einen Snapshot. Bei Fehler bleibt der bisherige Stand erhalten.
    fn save_landmark_group(
        &mut self,
        asset: &str,
        template: &str,
        ljson: &LJson,
    ) -> anyhow::Result<()>;

    /// Lädt ein Template als Saat für leere Snapshots.
    fn load_template(&self, name: &str) -> anyhow::Result<Template>;
}
