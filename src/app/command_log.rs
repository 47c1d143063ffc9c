//! Diagnose-Tail der zuletzt ausgeführten Commands.
//!
//! Der Controller legt jeden Command hier ab; die Shell zeigt die jüngsten
//! Einträge beim `status`-Befehl, Tests prüfen darüber den Datenfluss.

use super::AppCommand;
use std::collections::VecDeque;

/// Ringpuffer der zuletzt ausgeführten Commands.
#[derive(Debug, Default)]
pub struct CommandLog {
    entries: VecDeque<AppCommand>,
    total: usize,
}

impl CommandLog {
    /// Maximale Anzahl behaltener Einträge
    pub const CAPACITY: usize = 256;

    /// Erstellt ein leeres Log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Legt einen Command ab; ist der Puffer voll, fällt der älteste heraus.
    pub fn record(&mut self, command: &AppCommand) {
        if self.entries.len() == Self::CAPACITY {
            self.entries.pop_front();
        }
        self.entries.push_back(command.clone());
        self.total += 1;
    }

    /// Anzahl der behaltenen Einträge
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Anzahl aller je abgelegten Commands, auch der verdrängten
    pub fn total(&self) -> usize {
        self.total
    }

    /// Alle behaltenen Einträge, älteste zuerst
    pub fn entries(&self) -> impl DoubleEndedIterator<Item = &AppCommand> + '_ {
        self.entries.iter()
    }

    /// Die jüngsten `n` Einträge, älteste zuerst
    pub fn tail(&self, n: usize) -> impl Iterator<Item = &AppCommand> + '_ {
        self.entries.iter().skip(self.entries.len().saturating_sub(n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_log_drops_oldest_entry() {
        let mut log = CommandLog::new();
        for index in 0..=CommandLog::CAPACITY {
            log.record(&AppCommand::DeselectLandmark { index });
        }

        assert_eq!(log.len(), CommandLog::CAPACITY);
        assert_eq!(log.total(), CommandLog::CAPACITY + 1);
        assert_eq!(
            log.entries().next(),
            Some(&AppCommand::DeselectLandmark { index: 1 })
        );
    }

    #[test]
    fn tail_returns_newest_in_order() {
        let mut log = CommandLog::new();
        log.record(&AppCommand::Undo);
        log.record(&AppCommand::Redo);
        log.record(&AppCommand::Save);

        let tail: Vec<_> = log.tail(2).cloned().collect();
        assert_eq!(tail, vec![AppCommand::Redo, AppCommand::Save]);
        assert_eq!(log.tail(10).count(), 3);
    }
}
