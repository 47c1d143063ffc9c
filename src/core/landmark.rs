//! Ein einzelner Landmark: Position, Selektion und Anzeige-Flags.

use super::LandmarkError;
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Koordinaten-Dimensionalität einer LandmarkGroup (einmal pro Gruppe festgelegt)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimensionality {
    /// 2D-Bild (z wird immer auf 0 gesetzt)
    #[default]
    Two,
    /// 3D-Mesh
    Three,
}

impl Dimensionality {
    /// Anzahl der Koordinaten-Komponenten im LJSON
    pub fn components(self) -> usize {
        match self {
            Self::Two => 2,
            Self::Three => 3,
        }
    }

    /// Leitet die Dimensionalität aus der Länge eines Punkt-Arrays ab.
    pub fn from_components(count: usize) -> Option<Self> {
        match count {
            2 => Some(Self::Two),
            3 => Some(Self::Three),
            _ => None,
        }
    }
}

/// Anzeige-Flags eines Landmarks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LandmarkFlags {
    /// Landmark als fehlerhaft markiert
    pub bad: bool,
    /// Landmark ist verdeckt/unsichtbar
    pub invisible: bool,
}

/// Vollständiger, undo-relevanter Wert eines Landmarks.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LandmarkValue {
    /// Position (`None` = leer)
    pub point: Option<DVec3>,
    /// Anzeige-Flags
    pub flags: LandmarkFlags,
}

/// Änderung eines Landmarks, wie sie im Tracker als Operation landet.
#[derive(Debug, Clone, PartialEq)]
pub struct LandmarkDiff {
    /// Index des Landmarks in seiner Gruppe
    pub index: usize,
    /// Wert vor der Änderung (für Undo)
    pub before: LandmarkValue,
    /// Wert nach der Änderung (für Redo)
    pub after: LandmarkValue,
}

/// Ein Landmark innerhalb einer Gruppe.
///
/// Invariante: ein leerer Landmark ist nie selektiert.
#[derive(Debug, Clone, PartialEq)]
pub struct Landmark {
    index: usize,
    dims: Dimensionality,
    point: Option<DVec3>,
    selected: bool,
    next_available: bool,
    bad: bool,
    invisible: bool,
}

impl Landmark {
    /// Erstellt einen leeren Landmark
    pub fn empty(index: usize, dims: Dimensionality) -> Self {
        Self {
            index,
            dims,
            point: None,
            selected: false,
            next_available: false,
            bad: false,
            invisible: false,
        }
    }

    /// Erstellt einen Landmark mit optionaler Position und Flags
    pub fn new(
        index: usize,
        dims: Dimensionality,
        point: Option<DVec3>,
        flags: LandmarkFlags,
    ) -> Result<Self, LandmarkError> {
        let mut lm = Self::empty(index, dims);
        if let Some(p) = point {
            lm.set_point(p)?;
        }
        lm.set_flags(flags);
        Ok(lm)
    }

    /// Position innerhalb der Gruppe
    pub fn index(&self) -> usize {
        self.index
    }

    /// Dimensionalität der Gruppe
    pub fn dims(&self) -> Dimensionality {
        self.dims
    }

    /// Aktuelle Position (`None` = leer)
    pub fn point(&self) -> Option<DVec3> {
        self.point
    }

    /// Prüft, ob `point` als Position taugt: alle für `dims` relevanten
    /// Komponenten müssen endlich sein (LJSON kennt kein NaN/Inf).
    pub fn check_point(&self, point: DVec3) -> Result<(), LandmarkError> {
        let finite = match self.dims {
            Dimensionality::Two => point.truncate().is_finite(),
            Dimensionality::Three => point.is_finite(),
        };
        if finite {
            Ok(())
        } else {
            Err(LandmarkError::NonFinitePoint { index: self.index })
        }
    }

    /// Setzt die Position ohne Selektions-Seiteneffekt.
    /// Nicht-endliche Koordinaten werden abgelehnt, der Landmark bleibt dann unverändert.
    pub fn set_point(&mut self, point: DVec3) -> Result<(), LandmarkError> {
        self.check_point(point)?;
        self.point = Some(match self.dims {
            Dimensionality::Two => DVec3::new(point.x, point.y, 0.0),
            Dimensionality::Three => point,
        });
        Ok(())
    }

    /// Selektiert den Landmark (No-op bei leerem Landmark)
    pub fn select(&mut self) {
        if !self.is_empty() {
            self.selected = true;
        }
    }

    /// Hebt die Selektion auf
    pub fn deselect(&mut self) {
        self.selected = false;
    }

    /// `true` wenn keine Position gesetzt ist
    pub fn is_empty(&self) -> bool {
        self.point.is_none()
    }

    /// `true` wenn selektiert
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// `true` wenn dieser Slot beim nächsten `insert_new` befüllt wird
    pub fn is_next_available(&self) -> bool {
        self.next_available
    }

    pub(crate) fn set_next_available(&mut self, next_available: bool) {
        self.next_available = next_available;
    }

    /// `true` wenn als fehlerhaft markiert
    pub fn is_bad(&self) -> bool {
        self.bad
    }

    /// `true` wenn als unsichtbar markiert
    pub fn is_invisible(&self) -> bool {
        self.invisible
    }

    /// Aktuelle Flags
    pub fn flags(&self) -> LandmarkFlags {
        LandmarkFlags {
            bad: self.bad,
            invisible: self.invisible,
        }
    }

    /// Setzt beide Anzeige-Flags
    pub fn set_flags(&mut self, flags: LandmarkFlags) {
        self.bad = flags.bad;
        self.invisible = flags.invisible;
    }

    /// Leert den Landmark und hebt die Selektion auf (Flags bleiben erhalten)
    pub fn clear(&mut self) {
        self.point = None;
        self.selected = false;
    }

    /// Undo-relevanter Wert (Position + Flags)
    pub fn value(&self) -> LandmarkValue {
        LandmarkValue {
            point: self.point,
            flags: self.flags(),
        }
    }

    /// Übernimmt einen Wert aus einem Diff. Gesetzte Punkte werden selektiert.
    pub(crate) fn apply_value(&mut self, value: &LandmarkValue) {
        match value.point {
            Some(p) => match self.set_point(p) {
                Ok(()) => self.select(),
                Err(e) => log::error!("Diff-Wert verworfen: {}", e),
            },
            None => self.clear(),
        }
        self.set_flags(value.flags);
    }

    /// LJSON-Darstellung: Komponenten oder `null`-Platzhalter passender Länge
    pub fn to_ljson(&self) -> Vec<Option<f64>> {
        match (self.point, self.dims) {
            (Some(p), Dimensionality::Two) => vec![Some(p.x), Some(p.y)],
            (Some(p), Dimensionality::Three) => vec![Some(p.x), Some(p.y), Some(p.z)],
            (None, dims) => vec![None; dims.components()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_on_empty_landmark_is_noop() {
        let mut lm = Landmark::empty(0, Dimensionality::Two);
        lm.select();
        assert!(!lm.is_selected());

        lm.set_point(DVec3::new(1.0, 2.0, 0.0)).expect("endlich");
        assert!(!lm.is_selected(), "set_point darf nicht selektieren");
        lm.select();
        lm.select();
        assert!(lm.is_selected());
    }

    #[test]
    fn clear_deselects_and_keeps_flags() {
        let mut lm = Landmark::new(
            3,
            Dimensionality::Three,
            Some(DVec3::new(1.0, 2.0, 3.0)),
            LandmarkFlags {
                bad: true,
                invisible: false,
            },
        )
        .expect("endlich");
        lm.select();
        lm.clear();

        assert!(lm.is_empty());
        assert!(!lm.is_selected());
        assert!(lm.is_bad());
    }

    #[test]
    fn two_dimensional_points_drop_z() {
        let mut lm = Landmark::empty(0, Dimensionality::Two);
        lm.set_point(DVec3::new(4.0, 5.0, 9.0)).expect("endlich");
        assert_eq!(lm.point(), Some(DVec3::new(4.0, 5.0, 0.0)));
        assert_eq!(lm.to_ljson(), vec![Some(4.0), Some(5.0)]);
    }

    #[test]
    fn empty_landmark_serializes_to_null_placeholders() {
        assert_eq!(
            Landmark::empty(0, Dimensionality::Two).to_ljson(),
            vec![None, None]
        );
        assert_eq!(
            Landmark::empty(0, Dimensionality::Three).to_ljson(),
            vec![None, None, None]
        );
    }

    #[test]
    fn apply_value_with_empty_point_clears() {
        let mut lm = Landmark::new(
            0,
            Dimensionality::Two,
            Some(DVec3::new(1.0, 1.0, 0.0)),
            LandmarkFlags::default(),
        )
        .expect("endlich");
        lm.select();
        lm.apply_value(&LandmarkValue::default());
        assert!(lm.is_empty());
        assert!(!lm.is_selected());
    }

    #[test]
    fn set_point_rejects_non_finite_coordinates() {
        let mut lm = Landmark::new(
            2,
            Dimensionality::Three,
            Some(DVec3::new(1.0, 1.0, 1.0)),
            LandmarkFlags::default(),
        )
        .expect("endlich");

        assert_eq!(
            lm.set_point(DVec3::new(f64::NAN, 1.0, 1.0)),
            Err(LandmarkError::NonFinitePoint { index: 2 })
        );
        assert_eq!(
            lm.set_point(DVec3::new(1.0, 1.0, f64::INFINITY)),
            Err(LandmarkError::NonFinitePoint { index: 2 })
        );
        assert_eq!(lm.point(), Some(DVec3::new(1.0, 1.0, 1.0)));
    }

    #[test]
    fn two_dimensional_landmark_ignores_z_when_checking() {
        let mut lm = Landmark::empty(0, Dimensionality::Two);
        assert!(lm.set_point(DVec3::new(1.0, 2.0, f64::NAN)).is_ok());
        assert_eq!(lm.point(), Some(DVec3::new(1.0, 2.0, 0.0)));
    }
}
