//! Benannte Maske über die Landmarks einer Gruppe.

use super::collection::{LandmarkCollection, LandmarkCollectionMut};
use super::Landmark;

/// Label einer LandmarkGroup. Besitzt keine Landmarks, sondern nur Indizes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LandmarkLabel {
    label: String,
    mask: Vec<usize>,
}

impl LandmarkLabel {
    /// Erstellt ein Label mit fester Maske
    pub fn new(label: impl Into<String>, mask: Vec<usize>) -> Self {
        Self {
            label: label.into(),
            mask,
        }
    }

    /// Name des Labels
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Geordnete Indizes in die Landmarks der Gruppe
    pub fn mask(&self) -> &[usize] {
        &self.mask
    }

    /// Lesende Sicht über die Landmarks der Gruppe
    pub fn view<'a>(&'a self, landmarks: &'a [Landmark]) -> LabelView<'a> {
        LabelView {
            label: self,
            landmarks,
        }
    }

    /// Mutierende Sicht über die Landmarks der Gruppe
    pub fn view_mut<'a>(&'a self, landmarks: &'a mut [Landmark]) -> LabelViewMut<'a> {
        LabelViewMut {
            label: self,
            landmarks,
        }
    }
}

/// Label zusammen mit den Landmarks, auf die seine Maske zeigt.
#[derive(Debug, Clone, Copy)]
pub struct LabelView<'a> {
    label: &'a LandmarkLabel,
    landmarks: &'a [Landmark],
}

impl LabelView<'_> {
    /// Name des Labels
    pub fn label(&self) -> &str {
        self.label.label()
    }
}

impl LandmarkCollection for LabelView<'_> {
    fn iter_landmarks(&self) -> impl Iterator<Item = &Landmark> {
        self.label
            .mask
            .iter()
            .filter_map(|&i| self.landmarks.get(i))
    }
}

/// Mutierende Variante von [`LabelView`].
#[derive(Debug)]
pub struct LabelViewMut<'a> {
    label: &'a LandmarkLabel,
    landmarks: &'a mut [Landmark],
}

impl LandmarkCollection for LabelViewMut<'_> {
    fn iter_landmarks(&self) -> impl Iterator<Item = &Landmark> {
        self.label
            .mask
            .iter()
            .filter_map(|&i| self.landmarks.get(i))
    }
}

impl LandmarkCollectionMut for LabelViewMut<'_> {
    fn for_each_landmark_mut(&mut self, f: &mut dyn FnMut(&mut Landmark)) {
        for &i in &self.label.mask {
            if let Some(lm) = self.landmarks.get_mut(i) {
                f(lm);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{AtomicCoordinator, Dimensionality, LandmarkFlags};
    use glam::DVec3;

    fn landmarks() -> Vec<Landmark> {
        (0..4)
            .map(|i| {
                let point = (i != 2).then(|| DVec3::new(i as f64, 0.0, 0.0));
                Landmark::new(i, Dimensionality::Two, point, LandmarkFlags::default())
                    .expect("endlich")
            })
            .collect()
    }

    #[test]
    fn view_respects_mask_order_and_emptiness() {
        let lms = landmarks();
        let label = LandmarkLabel::new("eye", vec![3, 2]);
        let view = label.view(&lms);

        let indices: Vec<usize> = view.iter_landmarks().map(Landmark::index).collect();
        assert_eq!(indices, vec![3, 2]);
        assert!(view.has_empty());
        assert!(!view.is_empty());

        let empty_label = LandmarkLabel::new("gap", vec![2]);
        assert!(empty_label.view(&lms).is_empty());
    }

    #[test]
    fn select_all_only_touches_masked_landmarks() {
        let mut lms = landmarks();
        let label = LandmarkLabel::new("left", vec![0, 1, 2]);
        let atomic = AtomicCoordinator::new();

        label.view_mut(&mut lms).select_all(&atomic);

        assert!(lms[0].is_selected());
        assert!(lms[1].is_selected());
        assert!(!lms[2].is_selected(), "leerer Landmark bleibt unselektiert");
        assert!(!lms[3].is_selected());
        assert_eq!(label.view(&lms).selected().len(), 2);

        label.view_mut(&mut lms).deselect_all(&atomic);
        assert!(label.view(&lms).selected().is_empty());
    }
}
