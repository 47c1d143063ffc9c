//! Die LandmarkGroup: alle Landmarks, Connectivity, Labels und der Undo-Tracker
//! für ein (Asset, Template)-Paar.
//!
//! Jede mutierende Operation läuft über den [`AtomicCoordinator`], damit der
//! Renderer pro Benutzeraktion genau ein `Change`-Signal erhält.

use super::collection::{LandmarkCollection, LandmarkCollectionMut};
use super::label::{LabelView, LabelViewMut};
use super::tracker::{Reconcile, Revision, Tracker};
use super::{
    AtomicCoordinator, Dimensionality, LJSON_VERSION, LJson, LJsonLabel, LJsonLandmarks,
    Landmark, LandmarkDiff, LandmarkError, LandmarkFlags, LandmarkLabel,
};
use crate::backend::LandmarkBackend;
use anyhow::Context;
use glam::DVec3;
use indexmap::IndexSet;

/// Tracker-Typ einer Gruppe: Diff-Batches als Operationen, LJSON als Checkpoints
pub type GroupTracker = Tracker<Vec<LandmarkDiff>, LJson>;

/// Richtung beim Zurückspielen von Diffs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Replay {
    Undo,
    Redo,
}

/// Validierter Inhalt eines Snapshots
struct Contents {
    dims: Dimensionality,
    landmarks: Vec<Landmark>,
    connectivity: IndexSet<[usize; 2]>,
    labels: Vec<LandmarkLabel>,
}

impl Contents {
    /// Baut und validiert Landmarks, Connectivity und Labels aus einem Snapshot.
    fn from_ljson(ljson: &LJson) -> Result<Self, LandmarkError> {
        if ljson.version != LJSON_VERSION {
            return Err(LandmarkError::UnsupportedVersion(ljson.version));
        }

        let dims = ljson.dims().unwrap_or_default();
        let count = ljson.point_count();
        let lms = &ljson.landmarks;
        check_flag_len("invisible", &lms.invisible, count)?;
        check_flag_len("bad", &lms.bad, count)?;

        let mut landmarks = Vec::with_capacity(count);
        for (index, raw) in lms.points.iter().enumerate() {
            if raw.len() != dims.components() {
                return Err(LandmarkError::InconsistentDimensionality {
                    index,
                    expected: dims.components(),
                    found: raw.len(),
                });
            }
            let point = parse_point(index, raw)?;
            let flags = LandmarkFlags {
                bad: lms.bad.get(index).copied().unwrap_or(false),
                invisible: lms.invisible.get(index).copied().unwrap_or(false),
            };
            landmarks.push(Landmark::new(index, dims, point, flags)?);
        }

        let mut connectivity = IndexSet::with_capacity(lms.connectivity.len());
        for &[a, b] in &lms.connectivity {
            if a >= count || b >= count {
                return Err(LandmarkError::ConnectivityOutOfBounds { a, b, len: count });
            }
            connectivity.insert([a, b]);
        }

        let mut labels = Vec::with_capacity(ljson.labels.len());
        for label in &ljson.labels {
            if let Some(&index) = label.mask.iter().find(|&&i| i >= count) {
                return Err(LandmarkError::MaskOutOfBounds {
                    label: label.label.clone(),
                    index,
                    len: count,
                });
            }
            labels.push(LandmarkLabel::new(label.label.clone(), label.mask.clone()));
        }

        Ok(Self {
            dims,
            landmarks,
            connectivity,
            labels,
        })
    }
}

fn check_flag_len(field: &'static str, flags: &[bool], expected: usize) -> Result<(), LandmarkError> {
    // Fehlendes Array = alle false
    if flags.is_empty() || flags.len() == expected {
        Ok(())
    } else {
        Err(LandmarkError::FlagLengthMismatch {
            field,
            expected,
            found: flags.len(),
        })
    }
}

fn parse_point(index: usize, raw: &[Option<f64>]) -> Result<Option<DVec3>, LandmarkError> {
    if raw.iter().all(Option::is_none) {
        return Ok(None);
    }
    let coords: Vec<f64> = raw
        .iter()
        .copied()
        .collect::<Option<Vec<f64>>>()
        .ok_or(LandmarkError::InvalidPoint { index })?;
    if !coords.iter().all(|c| c.is_finite()) {
        return Err(LandmarkError::NonFinitePoint { index });
    }
    let z = coords.get(2).copied().unwrap_or(0.0);
    Ok(Some(DVec3::new(coords[0], coords[1], z)))
}

/// Aggregat für ein (Asset, Template)-Paar.
#[derive(Debug, Clone)]
pub struct LandmarkGroup {
    id: String,
    template_type: String,
    dims: Dimensionality,
    landmarks: Vec<Landmark>,
    connectivity: IndexSet<[usize; 2]>,
    labels: Vec<LandmarkLabel>,
    tracker: GroupTracker,
}

impl LandmarkGroup {
    /// Baut eine Gruppe aus einem Snapshot.
    ///
    /// Connectivity- und Masken-Indizes außerhalb der Landmarks sind fatal.
    /// Der initiale Zustand wird als gespeicherte Baseline im Tracker abgelegt.
    pub fn new(
        id: impl Into<String>,
        template_type: impl Into<String>,
        ljson: &LJson,
    ) -> Result<Self, LandmarkError> {
        let contents = Contents::from_ljson(ljson)?;
        let mut group = Self {
            id: id.into(),
            template_type: template_type.into(),
            dims: contents.dims,
            landmarks: contents.landmarks,
            connectivity: contents.connectivity,
            labels: contents.labels,
            tracker: GroupTracker::new(),
        };
        group.update_next_available(None);

        let baseline = group.to_ljson();
        group.tracker.record_state(baseline, true, false);

        log::debug!(
            "LandmarkGroup '{}' ({}) aufgebaut: {} Landmarks, {} Verbindungen, {} Labels",
            group.id,
            group.template_type,
            group.landmarks.len(),
            group.connectivity.len(),
            group.labels.len()
        );
        Ok(group)
    }

    /// Asset-ID der Gruppe
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Template-Name der Gruppe
    pub fn template_type(&self) -> &str {
        &self.template_type
    }

    /// Dimensionalität aller Punkte
    pub fn dims(&self) -> Dimensionality {
        self.dims
    }

    /// Alle Landmarks in Index-Reihenfolge
    pub fn landmarks(&self) -> &[Landmark] {
        &self.landmarks
    }

    /// Landmark an `index`
    pub fn landmark(&self, index: usize) -> Option<&Landmark> {
        self.landmarks.get(index)
    }

    /// Anzahl der Landmarks (fest seit Konstruktion bzw. letztem Restore)
    pub fn landmark_count(&self) -> usize {
        self.landmarks.len()
    }

    /// Verbindungen in Einfüge-Reihenfolge
    pub fn connectivity(&self) -> impl Iterator<Item = [usize; 2]> + '_ {
        self.connectivity.iter().copied()
    }

    /// Alle Labels
    pub fn labels(&self) -> &[LandmarkLabel] {
        &self.labels
    }

    /// Index des Labels mit diesem Namen
    pub fn label_index(&self, name: &str) -> Option<usize> {
        self.labels.iter().position(|l| l.label() == name)
    }

    /// Lesende Sicht auf ein Label
    pub fn label_view(&self, label_index: usize) -> Option<LabelView<'_>> {
        let label = self.labels.get(label_index)?;
        Some(label.view(&self.landmarks))
    }

    /// Mutierende Sicht auf ein Label (nur Selektion)
    pub fn label_view_mut(&mut self, label_index: usize) -> Option<LabelViewMut<'_>> {
        let label = self.labels.get(label_index)?;
        Some(label.view_mut(&mut self.landmarks))
    }

    /// Index des Slots, den das nächste `insert_new` befüllt
    pub fn next_available(&self) -> Option<usize> {
        self.landmarks
            .iter()
            .find(|lm| lm.is_next_available())
            .map(Landmark::index)
    }

    /// Read-only Zugriff auf den Tracker
    pub fn tracker(&self) -> &GroupTracker {
        &self.tracker
    }

    /// Höchste aufgezeichnete Revision
    pub fn latest_revision(&self) -> Option<Revision> {
        self.tracker.latest_revision()
    }

    /// `true` wenn der aktuelle Stand gespeichert ist
    pub fn is_up_to_date(&self) -> bool {
        self.tracker.is_up_to_date()
    }

    /// Gibt zurück, ob ein Undo-Schritt verfügbar ist.
    pub fn can_undo(&self) -> bool {
        self.tracker.can_undo()
    }

    /// Gibt zurück, ob ein Redo-Schritt verfügbar ist.
    pub fn can_redo(&self) -> bool {
        self.tracker.can_redo()
    }

    /// Indizes aller selektierten Landmarks
    pub fn selected_indices(&self) -> Vec<usize> {
        self.selected().into_iter().map(Landmark::index).collect()
    }

    // ── Selektion ───────────────────────────────────────────────

    /// Selektiert einen Landmark; ohne `additive` wird der Rest deselektiert.
    /// Gibt zurück, ob der Landmark danach selektiert ist (leere bleiben es nicht).
    pub fn select(
        &mut self,
        index: usize,
        additive: bool,
        atomic: &AtomicCoordinator,
    ) -> Result<bool, LandmarkError> {
        self.check_index(index)?;
        Ok(atomic.run(|| {
            if !additive {
                self.deselect_all_inner();
            }
            let lm = &mut self.landmarks[index];
            lm.select();
            atomic.mark_changed();
            lm.is_selected()
        }))
    }

    /// Hebt die Selektion eines Landmarks auf
    pub fn deselect(&mut self, index: usize, atomic: &AtomicCoordinator) -> Result<(), LandmarkError> {
        self.check_index(index)?;
        atomic.run(|| {
            self.landmarks[index].deselect();
            atomic.mark_changed();
        });
        Ok(())
    }

    /// Selektiert genau die Landmarks eines Labels.
    pub fn select_label(&mut self, name: &str, atomic: &AtomicCoordinator) -> Result<(), LandmarkError> {
        let label_index = self
            .label_index(name)
            .ok_or_else(|| LandmarkError::UnknownLabel(name.to_string()))?;
        atomic.run(|| {
            self.deselect_all_inner();
            self.labels[label_index]
                .view_mut(&mut self.landmarks)
                .select_all(atomic);
            atomic.mark_changed();
        });
        Ok(())
    }

    /// Erweitert eine Teilselektion auf alle Labels, die mindestens einen
    /// selektierten Landmark enthalten.
    pub fn complete_groups(&mut self, atomic: &AtomicCoordinator) {
        atomic.run(|| {
            // Erst sammeln, damit das Ergebnis nicht von der Label-Reihenfolge abhängt
            let to_complete: Vec<usize> = self
                .labels
                .iter()
                .enumerate()
                .filter(|(_, label)| !label.view(&self.landmarks).selected().is_empty())
                .map(|(i, _)| i)
                .collect();

            for i in to_complete {
                self.labels[i].view_mut(&mut self.landmarks).select_all(atomic);
            }
            atomic.mark_changed();
        });
    }

    // ── Editing ─────────────────────────────────────────────────

    /// Setzt einen neuen Punkt in den nächsten freien Slot.
    ///
    /// Bei voller Gruppe: `Err(GroupFull)` ohne Seiteneffekte, ebenso bei
    /// nicht-endlichen Koordinaten (`Err(NonFinitePoint)`).
    pub fn insert_new(
        &mut self,
        point: DVec3,
        flags: Option<LandmarkFlags>,
        atomic: &AtomicCoordinator,
    ) -> Result<usize, LandmarkError> {
        let Some(index) = self.next_available() else {
            log::debug!("insert_new: Gruppe '{}' ist voll", self.id);
            return Err(LandmarkError::GroupFull);
        };
        self.landmarks[index].check_point(point)?;

        atomic.run(|| -> Result<usize, LandmarkError> {
            self.deselect_all_inner();
            self.set_lm_at_inner(index, point, flags)?;
            self.update_next_available(Some(index));
            atomic.mark_changed();
            Ok(index)
        })
    }

    /// Setzt Position (und optional Flags) eines Landmarks und selektiert ihn.
    /// `flags = None` behält die bisherigen Flags.
    pub fn set_lm_at(
        &mut self,
        index: usize,
        point: DVec3,
        flags: Option<LandmarkFlags>,
        atomic: &AtomicCoordinator,
    ) -> Result<(), LandmarkError> {
        self.check_index(index)?;
        self.landmarks[index].check_point(point)?;
        atomic.run(|| -> Result<(), LandmarkError> {
            let was_next = self.landmarks[index].is_next_available();
            self.set_lm_at_inner(index, point, flags)?;
            if was_next {
                self.update_next_available(Some(index));
            }
            atomic.mark_changed();
            Ok(())
        })
    }

    /// Leert alle selektierten Landmarks als eine einzige Operation.
    /// Gibt die Anzahl geleerter Landmarks zurück.
    pub fn delete_selected(&mut self, atomic: &AtomicCoordinator) -> usize {
        atomic.run(|| {
            let mut diffs = Vec::new();
            for lm in self.landmarks.iter_mut().filter(|lm| lm.is_selected()) {
                let before = lm.value();
                lm.clear();
                diffs.push(LandmarkDiff {
                    index: lm.index(),
                    before,
                    after: lm.value(),
                });
            }

            if diffs.is_empty() {
                log::debug!("Nichts zum Löschen selektiert");
                return 0;
            }

            let count = diffs.len();
            self.tracker.record(diffs);
            self.update_next_available(None);
            atomic.mark_changed();
            log::debug!("{} Landmark(s) geleert", count);
            count
        })
    }

    /// Verschiebt alle selektierten Landmarks um `delta` (ein Diff-Batch, z.B.
    /// für einen Drag mehrerer Landmarks). Gibt die Anzahl zurück.
    ///
    /// Würde eine Zielposition nicht endlich, wird nichts verschoben.
    pub fn move_selected(
        &mut self,
        delta: DVec3,
        atomic: &AtomicCoordinator,
    ) -> Result<usize, LandmarkError> {
        for lm in self.landmarks.iter().filter(|lm| lm.is_selected()) {
            if let Some(point) = lm.point() {
                lm.check_point(point + delta)?;
            }
        }

        atomic.run(|| -> Result<usize, LandmarkError> {
            let mut diffs = Vec::new();
            for lm in self.landmarks.iter_mut().filter(|lm| lm.is_selected()) {
                let Some(point) = lm.point() else {
                    continue;
                };
                let before = lm.value();
                lm.set_point(point + delta)?;
                diffs.push(LandmarkDiff {
                    index: lm.index(),
                    before,
                    after: lm.value(),
                });
            }

            if diffs.is_empty() {
                return Ok(0);
            }
            let count = diffs.len();
            self.tracker.record(diffs);
            atomic.mark_changed();
            Ok(count)
        })
    }

    /// Schaltet das `bad`-Flag des einzigen selektierten Landmarks um.
    pub fn mark_selected_as_bad(&mut self, atomic: &AtomicCoordinator) -> bool {
        self.toggle_selected_flag(atomic, |flags| flags.bad = !flags.bad)
    }

    /// Schaltet das `invisible`-Flag des einzigen selektierten Landmarks um.
    pub fn mark_selected_as_invisible(&mut self, atomic: &AtomicCoordinator) -> bool {
        self.toggle_selected_flag(atomic, |flags| flags.invisible = !flags.invisible)
    }

    /// Setzt den `next_available`-Cursor neu (siehe [`Self::next_available`]).
    pub fn reset_next_available(&mut self, origin: Option<usize>, atomic: &AtomicCoordinator) {
        atomic.run(|| {
            self.update_next_available(origin);
            atomic.mark_changed();
        });
    }

    // ── History ─────────────────────────────────────────────────

    /// Führt einen Undo-Schritt aus. `false` (und ein `NoOp`-Signal), wenn
    /// nichts zu tun ist.
    pub fn undo(&mut self, atomic: &AtomicCoordinator) -> bool {
        let Some(step) = self.tracker.undo() else {
            log::debug!("Undo: nichts zu tun");
            atomic.notify_no_op();
            return false;
        };
        atomic.run(|| {
            self.apply_reconcile(step, Replay::Undo);
            atomic.mark_changed();
        });
        log::debug!("Undo ausgeführt");
        true
    }

    /// Führt einen Redo-Schritt aus. `false` (und ein `NoOp`-Signal), wenn
    /// nichts zu tun ist.
    pub fn redo(&mut self, atomic: &AtomicCoordinator) -> bool {
        let Some(step) = self.tracker.redo() else {
            log::debug!("Redo: nichts zu tun");
            atomic.notify_no_op();
            return false;
        };
        atomic.run(|| {
            self.apply_reconcile(step, Replay::Redo);
            atomic.mark_changed();
        });
        log::debug!("Redo ausgeführt");
        true
    }

    /// Ersetzt Punkte, Connectivity und Labels komplett durch einen Snapshot.
    ///
    /// Der bisherige Stand wird vorher als Checkpoint gesichert, damit der
    /// Restore per Undo rückgängig gemacht werden kann.
    pub fn restore(&mut self, ljson: &LJson, atomic: &AtomicCoordinator) -> Result<(), LandmarkError> {
        let contents = Contents::from_ljson(ljson)?;
        atomic.run(|| {
            let checkpoint = self.to_ljson();
            self.tracker.record_state(checkpoint, false, false);

            self.install(contents);
            self.update_next_available(None);

            let restored = self.to_ljson();
            self.tracker.record_state(restored, false, false);
            atomic.mark_changed();
        });
        log::info!(
            "LandmarkGroup '{}' wiederhergestellt ({} Landmarks)",
            self.id,
            self.landmarks.len()
        );
        Ok(())
    }

    /// Speichert den aktuellen Stand über das Backend.
    ///
    /// Nur bei Erfolg wird der Snapshot als gespeichert markiert; bei Fehler
    /// bleibt die Gruppe unverändert und nicht up-to-date.
    pub fn save(
        &mut self,
        backend: &mut dyn LandmarkBackend,
        atomic: &AtomicCoordinator,
    ) -> anyhow::Result<()> {
        let snapshot = self.to_ljson();
        backend
            .save_landmark_group(&self.id, &self.template_type, &snapshot)
            .with_context(|| {
                format!(
                    "Speichern von '{}' ({}) fehlgeschlagen",
                    self.id, self.template_type
                )
            })?;

        self.tracker.record_state(snapshot, true, false);
        atomic.mark_changed();
        log::info!("LandmarkGroup '{}' gespeichert", self.id);
        Ok(())
    }

    // ── Serialisierung ──────────────────────────────────────────

    /// Vollständiger LJSON-Snapshot des aktuellen Stands
    pub fn to_ljson(&self) -> LJson {
        LJson {
            version: LJSON_VERSION,
            landmarks: LJsonLandmarks {
                points: self.landmarks.iter().map(Landmark::to_ljson).collect(),
                connectivity: self.connectivity.iter().copied().collect(),
                invisible: self.landmarks.iter().map(Landmark::is_invisible).collect(),
                bad: self.landmarks.iter().map(Landmark::is_bad).collect(),
            },
            labels: self
                .labels
                .iter()
                .map(|l| LJsonLabel {
                    label: l.label().to_string(),
                    mask: l.mask().to_vec(),
                })
                .collect(),
        }
    }

    // ── Interna ─────────────────────────────────────────────────

    fn check_index(&self, index: usize) -> Result<(), LandmarkError> {
        if index < self.landmarks.len() {
            Ok(())
        } else {
            Err(LandmarkError::IndexOutOfBounds {
                index,
                len: self.landmarks.len(),
            })
        }
    }

    fn deselect_all_inner(&mut self) {
        for lm in &mut self.landmarks {
            lm.deselect();
        }
    }

    /// Zeichnet den Diff auf und setzt Punkt (selektiert) und Flags.
    fn set_lm_at_inner(
        &mut self,
        index: usize,
        point: DVec3,
        flags: Option<LandmarkFlags>,
    ) -> Result<(), LandmarkError> {
        let lm = &mut self.landmarks[index];
        let before = lm.value();
        lm.set_point(point)?;
        lm.select();
        if let Some(flags) = flags {
            lm.set_flags(flags);
        }
        let after = lm.value();
        self.tracker.record(vec![LandmarkDiff {
            index,
            before,
            after,
        }]);
        Ok(())
    }

    fn toggle_selected_flag(
        &mut self,
        atomic: &AtomicCoordinator,
        toggle: impl FnOnce(&mut LandmarkFlags),
    ) -> bool {
        let selected = self.selected_indices();
        let &[index] = selected.as_slice() else {
            log::debug!(
                "Flag-Änderung erfordert genau einen selektierten Landmark ({} selektiert)",
                selected.len()
            );
            return false;
        };

        atomic.run(|| {
            let lm = &mut self.landmarks[index];
            let before = lm.value();
            let mut flags = lm.flags();
            toggle(&mut flags);
            lm.set_flags(flags);
            let after = lm.value();
            self.tracker.record(vec![LandmarkDiff {
                index,
                before,
                after,
            }]);
            atomic.mark_changed();
        });
        true
    }

    /// Erster leerer Landmark ab `origin` (inklusive), sonst erster leerer davor.
    fn update_next_available(&mut self, origin: Option<usize>) {
        for lm in &mut self.landmarks {
            lm.set_next_available(false);
        }

        let len = self.landmarks.len();
        let start = origin.unwrap_or(0).min(len);
        let found = (start..len)
            .chain(0..start)
            .find(|&i| self.landmarks[i].is_empty());

        if let Some(i) = found {
            self.landmarks[i].set_next_available(true);
        }
    }

    fn apply_reconcile(&mut self, step: Reconcile<Vec<LandmarkDiff>, LJson>, replay: Replay) {
        match step {
            Reconcile::Operation(diffs) | Reconcile::OperationWithState(diffs) => {
                self.apply_diffs(&diffs, replay)
            }
            Reconcile::Snapshot(ljson) => self.apply_snapshot(&ljson),
        }
    }

    fn apply_diffs(&mut self, diffs: &[LandmarkDiff], replay: Replay) {
        self.deselect_all_inner();
        match replay {
            Replay::Undo => {
                for diff in diffs.iter().rev() {
                    if let Some(lm) = self.landmarks.get_mut(diff.index) {
                        lm.apply_value(&diff.before);
                    }
                }
            }
            Replay::Redo => {
                for diff in diffs {
                    if let Some(lm) = self.landmarks.get_mut(diff.index) {
                        lm.apply_value(&diff.after);
                    }
                }
            }
        }
        self.update_next_available(None);
    }

    fn apply_snapshot(&mut self, ljson: &LJson) {
        match Contents::from_ljson(ljson) {
            Ok(contents) => {
                self.install(contents);
                self.update_next_available(None);
            }
            Err(e) => log::error!("Checkpoint konnte nicht angewendet werden: {}", e),
        }
    }

    fn install(&mut self, contents: Contents) {
        self.dims = contents.dims;
        self.landmarks = contents.landmarks;
        self.connectivity = contents.connectivity;
        self.labels = contents.labels;
    }
}

impl LandmarkCollection for LandmarkGroup {
    fn iter_landmarks(&self) -> impl Iterator<Item = &Landmark> {
        self.landmarks.iter()
    }
}

impl LandmarkCollectionMut for LandmarkGroup {
    fn for_each_landmark_mut(&mut self, f: &mut dyn FnMut(&mut Landmark)) {
        for lm in &mut self.landmarks {
            f(lm);
        }
    }
}
