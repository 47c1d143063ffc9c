//! Revisionsbasierter Undo/Redo-Log aus Operationen und Zustands-Checkpoints.
//!
//! Der Tracker kennt die Form der Daten nicht: Operationen (`O`) und Snapshots
//! (`S`) sind opake Payloads. Jede Aufzeichnung erhält eine streng steigende
//! Revision. Ein Snapshot, der direkt nach einer Operation aufgezeichnet wird,
//! teilt deren Revision; daraus leitet `undo`/`redo` ab, ob eine Operation, ein
//! Snapshot oder beides gemeinsam zurückgespielt wird.

use std::cmp::Ordering;

/// Revisionsnummer (streng monoton steigend)
pub type Revision = u64;

/// Eintrag in einem der Tracker-Stacks
#[derive(Debug, Clone, PartialEq)]
pub struct Record<T> {
    /// Revision der Aufzeichnung
    pub rev: Revision,
    /// Opaker Payload
    pub data: T,
}

/// Ergebnis eines Undo/Redo-Schritts. Der Aufrufer wendet es auf seine Daten an.
#[derive(Debug, Clone, PartialEq)]
pub enum Reconcile<O, S> {
    /// Nur die Operation zurück- bzw. erneut anwenden
    Operation(O),
    /// Zustand komplett aus dem Snapshot wiederherstellen
    Snapshot(S),
    /// Operation und Checkpoint teilen sich die Revision: die Operation wird
    /// angewendet, der Checkpoint wandert nur in der Buchhaltung mit
    OperationWithState(O),
}

/// Welcher Stack-Kopf beim nächsten Schritt an der Reihe ist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Operation,
    State,
    Both,
}

impl Step {
    /// Wählt anhand der Revisionen der beiden Stack-Köpfe.
    /// `prefer` ist `Greater` für Undo (jüngster Eintrag) und `Less` für Redo.
    fn resolve(op: Option<Revision>, state: Option<Revision>, prefer: Ordering) -> Option<Self> {
        match (op, state) {
            (None, None) => None,
            (Some(_), None) => Some(Self::Operation),
            (None, Some(_)) => Some(Self::State),
            (Some(o), Some(s)) => Some(match o.cmp(&s) {
                Ordering::Equal => Self::Both,
                ord if ord == prefer => Self::Operation,
                _ => Self::State,
            }),
        }
    }
}

/// Undo/Redo-Log mit getrennten Stacks für Vergangenheit und Zukunft.
#[derive(Debug, Clone)]
pub struct Tracker<O, S> {
    rev: Revision,
    operations: Vec<Record<O>>,
    states: Vec<Record<S>>,
    future_operations: Vec<Record<O>>,
    future_states: Vec<Record<S>>,
    last_saved_state: Option<Revision>,
}

impl<O, S> Default for Tracker<O, S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O, S> Tracker<O, S> {
    /// Erstellt einen leeren Tracker.
    pub fn new() -> Self {
        Self {
            rev: 0,
            operations: Vec::new(),
            states: Vec::new(),
            future_operations: Vec::new(),
            future_states: Vec::new(),
            last_saved_state: None,
        }
    }

    /// Liefert bei jedem Aufruf eine neue, höhere Revision.
    pub fn rev(&mut self) -> Revision {
        self.rev += 1;
        self.rev
    }

    /// Zeichnet eine Operation auf. Verwirft jede Redo-History.
    pub fn record(&mut self, data: O) {
        let rev = self.rev();
        self.operations.push(Record { rev, data });
        self.clear_future();
    }

    /// Zeichnet einen vollständigen Zustands-Checkpoint auf.
    ///
    /// - `saved`: Checkpoint entspricht dem persistierten Stand
    /// - `override_ops`: verwirft alle Operationen, die neuer als der vorherige
    ///   Checkpoint sind (der neue Snapshot ersetzt sie)
    ///
    /// Ohne ausstehende Operation und mit unverändertem Inhalt wird nichts
    /// aufgezeichnet; `saved` markiert dann den bestehenden Checkpoint.
    pub fn record_state(&mut self, data: S, saved: bool, override_ops: bool)
    where
        S: PartialEq,
    {
        if override_ops {
            let floor = self.states.last().map_or(0, |s| s.rev);
            let before = self.operations.len();
            self.operations.retain(|op| op.rev <= floor);
            log::debug!(
                "Tracker: {} Operation(en) durch Checkpoint ersetzt",
                before - self.operations.len()
            );
        }

        let pending = self.pending_operation_rev();
        if pending.is_none() {
            if let Some(last) = self.states.last().filter(|last| last.data == data) {
                if saved {
                    self.last_saved_state = Some(last.rev);
                }
                return;
            }
        }

        let rev = match pending {
            Some(rev) => rev,
            None => self.rev(),
        };
        self.states.push(Record { rev, data });
        self.clear_future();
        if saved {
            self.last_saved_state = Some(rev);
        }
    }

    /// `true` wenn der jüngste Checkpoint gespeichert ist und keine neuere
    /// Operation existiert.
    pub fn is_up_to_date(&self) -> bool {
        let Some(state) = self.states.last() else {
            return false;
        };
        self.last_saved_state == Some(state.rev)
            && self.operations.last().is_none_or(|op| op.rev <= state.rev)
    }

    /// Mindestens eine Operation oder mehr als ein Checkpoint vorhanden.
    pub fn can_undo(&self) -> bool {
        !self.operations.is_empty() || self.states.len() > 1
    }

    /// Mindestens ein Eintrag auf einem der Zukunfts-Stacks.
    pub fn can_redo(&self) -> bool {
        !self.future_operations.is_empty() || !self.future_states.is_empty()
    }

    /// Revision des zuletzt gespeicherten Checkpoints
    pub fn last_saved_state(&self) -> Option<Revision> {
        self.last_saved_state
    }

    /// Höchste Revision auf den Vergangenheits-Stacks
    pub fn latest_revision(&self) -> Option<Revision> {
        let op = self.operations.last().map(|r| r.rev);
        let state = self.states.last().map(|r| r.rev);
        op.max(state)
    }

    /// Anzahl aufgezeichneter Operationen (Vergangenheit)
    pub fn operation_count(&self) -> usize {
        self.operations.len()
    }

    /// Anzahl aufgezeichneter Checkpoints (Vergangenheit)
    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    fn pending_operation_rev(&self) -> Option<Revision> {
        let op = self.operations.last()?;
        match self.states.last() {
            Some(state) if state.rev >= op.rev => None,
            _ => Some(op.rev),
        }
    }

    fn clear_future(&mut self) {
        self.future_operations.clear();
        self.future_states.clear();
    }
}

impl<O: Clone, S: Clone> Tracker<O, S> {
    /// Einen Schritt zurück. `None` wenn nichts zu tun ist (leerer Log oder
    /// nur noch der älteste Checkpoint).
    pub fn undo(&mut self) -> Option<Reconcile<O, S>> {
        let step = Step::resolve(
            self.operations.last().map(|r| r.rev),
            self.states.last().map(|r| r.rev),
            Ordering::Greater,
        )?;

        match step {
            Step::Operation => {
                let op = self.operations.pop()?;
                let data = op.data.clone();
                self.future_operations.push(op);
                Some(Reconcile::Operation(data))
            }
            Step::State => {
                if self.states.len() < 2 {
                    return None;
                }
                let state = self.states.pop()?;
                self.future_states.push(state);
                let previous = self.states.last()?.data.clone();
                Some(Reconcile::Snapshot(previous))
            }
            Step::Both => {
                let op = self.operations.pop()?;
                let state = self.states.pop()?;
                let data = op.data.clone();
                self.future_operations.push(op);
                self.future_states.push(state);
                Some(Reconcile::OperationWithState(data))
            }
        }
    }

    /// Einen Schritt vorwärts. `None` wenn keine Redo-History existiert.
    pub fn redo(&mut self) -> Option<Reconcile<O, S>> {
        let step = Step::resolve(
            self.future_operations.last().map(|r| r.rev),
            self.future_states.last().map(|r| r.rev),
            Ordering::Less,
        )?;

        match step {
            Step::Operation => {
                let op = self.future_operations.pop()?;
                let data = op.data.clone();
                self.operations.push(op);
                Some(Reconcile::Operation(data))
            }
            Step::State => {
                let state = self.future_states.pop()?;
                let data = state.data.clone();
                self.states.push(state);
                Some(Reconcile::Snapshot(data))
            }
            Step::Both => {
                let op = self.future_operations.pop()?;
                let state = self.future_states.pop()?;
                let data = op.data.clone();
                self.operations.push(op);
                self.states.push(state);
                Some(Reconcile::OperationWithState(data))
            }
        }
    }
}
