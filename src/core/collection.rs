//! Gemeinsame Abfragen und Selektions-Operationen über geordnete Landmark-Folgen.
//!
//! Sowohl die gesamte LandmarkGroup als auch die Maske eines Labels bieten
//! dieselbe Schnittstelle; implementiert wird sie über diese Traits statt über
//! eine gemeinsame Basisklasse.

use super::{AtomicCoordinator, Landmark};

/// Lesende Sicht auf eine geordnete Folge von Landmarks.
pub trait LandmarkCollection {
    /// Iteriert die Landmarks in Reihenfolge der Folge
    fn iter_landmarks(&self) -> impl Iterator<Item = &Landmark>;

    /// Alle selektierten Landmarks
    fn selected(&self) -> Vec<&Landmark> {
        self.iter_landmarks().filter(|lm| lm.is_selected()).collect()
    }

    /// `true` wenn jeder Landmark der Folge leer ist
    fn is_empty(&self) -> bool {
        self.iter_landmarks().all(Landmark::is_empty)
    }

    /// `true` wenn mindestens ein Landmark leer ist
    fn has_empty(&self) -> bool {
        self.iter_landmarks().any(Landmark::is_empty)
    }
}

/// Mutierende Selektions-Operationen, jeweils als atomare Operation.
pub trait LandmarkCollectionMut: LandmarkCollection {
    /// Wendet `f` auf jeden Landmark der Folge an
    fn for_each_landmark_mut(&mut self, f: &mut dyn FnMut(&mut Landmark));

    /// Selektiert alle nicht-leeren Landmarks der Folge
    fn select_all(&mut self, atomic: &AtomicCoordinator) {
        atomic.run(|| {
            self.for_each_landmark_mut(&mut |lm: &mut Landmark| lm.select());
            atomic.mark_changed();
        });
    }

    /// Hebt die Selektion aller Landmarks der Folge auf
    fn deselect_all(&mut self, atomic: &AtomicCoordinator) {
        atomic.run(|| {
            self.for_each_landmark_mut(&mut |lm: &mut Landmark| lm.deselect());
            atomic.mark_changed();
        });
    }
}
