//! Parser für LJSON-Snapshots.

use crate::core::{Dimensionality, LJSON_VERSION, LJson};
use anyhow::{Context, Result, bail};

/// Parsed einen LJSON-Snapshot und prüft die Form der Punkt-Arrays.
///
/// Geprüft werden Schema-Version, Punktlänge (2 oder 3) und einheitliche
/// Dimensionalität. Index-Bereiche von Connectivity und Masken prüft erst
/// [`crate::LandmarkGroup::new`].
pub fn parse_ljson(content: &str) -> Result<LJson> {
    let ljson: LJson = serde_json::from_str(content).context("LJSON ist kein gültiges JSON-Dokument")?;

    if ljson.version != LJSON_VERSION {
        bail!(
            "Nicht unterstützte LJSON-Version {} (erwartet {})",
            ljson.version,
            LJSON_VERSION
        );
    }

    let Some(first) = ljson.landmarks.points.first() else {
        log::debug!("LJSON ohne Punkte geparst");
        return Ok(ljson);
    };
    let Some(dims) = Dimensionality::from_components(first.len()) else {
        bail!(
            "Punkt 0 hat {} Komponenten, erlaubt sind 2 oder 3",
            first.len()
        );
    };

    for (index, point) in ljson.landmarks.points.iter().enumerate() {
        if point.len() != dims.components() {
            bail!(
                "Punkt {} hat {} Komponenten, erwartet {}",
                index,
                point.len(),
                dims.components()
            );
        }
    }

    log::debug!(
        "LJSON geparst: {} Punkte ({:?}), {} Verbindungen, {} Labels",
        ljson.point_count(),
        dims,
        ljson.landmarks.connectivity.len(),
        ljson.labels.len()
    );
    Ok(ljson)
}
