//! LJSON-Snapshot: persistierte Form einer LandmarkGroup.
//!
//! Format (Version 2):
//! ```json
//! {
//!   "version": 2,
//!   "landmarks": {
//!     "points": [[1.0, 2.0], [null, null]],
//!     "connectivity": [[0, 1]],
//!     "invisible": [false, false],
//!     "bad": [false, false]
//!   },
//!   "labels": [{ "label": "mouth", "mask": [0, 1] }]
//! }
//! ```

use super::Dimensionality;
use serde::{Deserialize, Serialize};

/// Aktuelle LJSON-Schema-Version
pub const LJSON_VERSION: u32 = 2;

/// Vollständiger Snapshot einer LandmarkGroup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LJson {
    /// Schema-Version
    pub version: u32,
    /// Punkte, Connectivity und Flags
    pub landmarks: LJsonLandmarks,
    /// Benannte Masken über die Punkte
    #[serde(default)]
    pub labels: Vec<LJsonLabel>,
}

/// Landmark-Teil eines Snapshots (Structure of Arrays)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LJsonLandmarks {
    /// Koordinaten oder `null`-Platzhalter je Landmark
    pub points: Vec<Vec<Option<f64>>>,
    /// Index-Paare verbundener Landmarks
    #[serde(default)]
    pub connectivity: Vec<[usize; 2]>,
    /// Parallel zu `points`; fehlt = alle `false`
    #[serde(default)]
    pub invisible: Vec<bool>,
    /// Parallel zu `points`; fehlt = alle `false`
    #[serde(default)]
    pub bad: Vec<bool>,
}

/// Label mit Maske
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LJsonLabel {
    /// Name des Labels
    pub label: String,
    /// Geordnete Indizes in `points`
    pub mask: Vec<usize>,
}

impl LJson {
    /// Leerer Snapshot mit `count` leeren Punkten
    pub fn empty(count: usize, dims: Dimensionality) -> Self {
        Self {
            version: LJSON_VERSION,
            landmarks: LJsonLandmarks {
                points: vec![vec![None; dims.components()]; count],
                connectivity: Vec::new(),
                invisible: vec![false; count],
                bad: vec![false; count],
            },
            labels: Vec::new(),
        }
    }

    /// Anzahl der Punkte
    pub fn point_count(&self) -> usize {
        self.landmarks.points.len()
    }

    /// Dimensionalität aus dem ersten Punkt-Array (`None` ohne Punkte oder bei
    /// unbekannter Länge)
    pub fn dims(&self) -> Option<Dimensionality> {
        self.landmarks
            .points
            .first()
            .and_then(|p| Dimensionality::from_components(p.len()))
    }

    /// Anzahl gesetzter (nicht leerer) Punkte
    pub fn filled_count(&self) -> usize {
        self.landmarks
            .points
            .iter()
            .filter(|p| !p.is_empty() && p.iter().all(Option::is_some))
            .count()
    }
}
