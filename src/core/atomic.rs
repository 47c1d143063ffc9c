//! Reentrante Klammer für zusammengesetzte Edits.
//!
//! Verschachtelte Aufrufe von [`AtomicCoordinator::run`] erzeugen genau ein
//! `AtomicEnter`/`AtomicExit`-Paar und höchstens ein `Change`-Signal, egal wie
//! viele Landmarks innerhalb mutiert werden. Der Renderer kann so das Neuzeichnen
//! bis zum Ende der äußersten Operation aufschieben.

use std::cell::{Cell, RefCell};

/// Signale, die der Kern an Kollaborateure (z.B. Renderer) meldet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// Äußerste atomare Operation beginnt
    AtomicEnter,
    /// Äußerste atomare Operation ist beendet
    AtomicExit,
    /// Gruppe oder Tracker wurden verändert
    Change,
    /// Undo/Redo ohne möglichen Schritt
    NoOp,
}

/// Batching-Gate mit Zustand `{idle, inside-operation}`.
///
/// Single-threaded: der Zustand liegt in `Cell`/`RefCell`, damit Edit-Methoden
/// den Coordinator per `&` erhalten und beliebig verschachteln können.
#[derive(Debug, Default)]
pub struct AtomicCoordinator {
    active: Cell<bool>,
    changed: Cell<bool>,
    signals: RefCell<Vec<Signal>>,
}

/// Beendet die Operation auch beim Unwinding.
struct ExitGuard<'a> {
    coordinator: &'a AtomicCoordinator,
}

impl Drop for ExitGuard<'_> {
    fn drop(&mut self) {
        self.coordinator.exit();
    }
}

impl AtomicCoordinator {
    /// Erstellt einen Coordinator im Zustand idle.
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` während eine äußere Operation läuft
    pub fn is_active(&self) -> bool {
        self.active.get()
    }

    /// Führt `f` als atomare Operation aus.
    ///
    /// Nur der äußerste Aufruf schaltet den Zustand um; verschachtelte Aufrufe
    /// rufen `f` direkt auf.
    pub fn run<R>(&self, f: impl FnOnce() -> R) -> R {
        if self.active.get() {
            return f();
        }

        self.active.set(true);
        self.push(Signal::AtomicEnter);
        log::trace!("Atomare Operation: enter");
        let _guard = ExitGuard { coordinator: self };
        f()
    }

    /// Markiert eine Änderung. Außerhalb einer Operation wird sofort gemeldet.
    pub fn mark_changed(&self) {
        if self.active.get() {
            self.changed.set(true);
        } else {
            self.push(Signal::Change);
        }
    }

    /// Meldet einen Undo/Redo-Versuch ohne Wirkung.
    pub fn notify_no_op(&self) {
        self.push(Signal::NoOp);
    }

    /// Entnimmt alle bisher gesammelten Signale.
    pub fn take_signals(&self) -> Vec<Signal> {
        std::mem::take(&mut *self.signals.borrow_mut())
    }

    fn exit(&self) {
        self.active.set(false);
        self.push(Signal::AtomicExit);
        log::trace!("Atomare Operation: exit");
        if self.changed.replace(false) {
            self.push(Signal::Change);
        }
    }

    fn push(&self, signal: Signal) {
        self.signals.borrow_mut().push(signal);
    }
}
