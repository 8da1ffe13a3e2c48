//! Mitschrift der zuletzt ausgeführten Commands für Diagnose und
//! Host-seitige Makro-Aufzeichnung.

use super::EditorCommand;
use std::collections::VecDeque;

const DEFAULT_CAPACITY: usize = 1000;

/// Begrenzte Command-Mitschrift als Ringpuffer: ist die Kapazität
/// erreicht, fällt beim nächsten `record` der älteste Eintrag heraus.
pub struct CommandLog {
    entries: VecDeque<EditorCommand>,
    capacity: usize,
}

impl CommandLog {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Zeichnet einen ausgeführten Command auf.
    pub fn record(&mut self, command: EditorCommand) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(command);
    }

    /// Der zuletzt aufgezeichnete Command.
    pub fn last(&self) -> Option<&EditorCommand> {
        self.entries.back()
    }

    /// Alle Einträge, älteste zuerst.
    pub fn iter(&self) -> impl Iterator<Item = &EditorCommand> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for CommandLog {
    fn default() -> Self {
        Self::new()
    }
}
