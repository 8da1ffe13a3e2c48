use crate::core::{LayerId, MapLayer};
use std::collections::HashMap;
use std::sync::Arc;

/// Snapshot reduziert auf die für Undo/Redo relevanten Teile.
///
/// Nutzt Arc-Clone (Copy-on-Write): Das Erstellen eines Snapshots ist O(1) —
/// der teure Layer-Klon findet erst beim nächsten `Arc::make_mut()` in einem
/// Use-Case statt (COW-Semantik).
#[derive(Clone)]
pub struct Snapshot {
    /// Layer-Zustand (Arc-Klon für O(1)-Snapshot)
    pub layer: Arc<MapLayer>,
    /// Beschreibung der Operation, die zu diesem Zustand führte
    pub name: String,
}

impl Snapshot {
    pub fn new(layer: Arc<MapLayer>, name: impl Into<String>) -> Self {
        Self {
            layer,
            name: name.into(),
        }
    }
}

/// Generischer, begrenzter Undo/Redo-Stapel mit Cursor.
///
/// `entries[cursor]` ist immer der aktuell gültige Zustand. `push` schneidet
/// alle Vorwärts-Einträge ab; Undo/Redo bewegen nur den Cursor. Läuft der
/// Stapel über `max_depth`, wird der älteste Eintrag entfernt und der Cursor
/// dekrementiert, damit er weiter denselben logischen Zustand benennt.
pub struct SnapshotHistory<T> {
    entries: Vec<T>,
    cursor: usize,
    max_depth: usize,
}

impl<T> SnapshotHistory<T> {
    /// Erstellt einen leeren Stapel mit maximaler Tiefe (mindestens 2,
    /// sonst wäre kein Undo-Schritt möglich).
    pub fn new(max_depth: usize) -> Self {
        Self {
            entries: Vec::new(),
            cursor: 0,
            max_depth: max_depth.max(2),
        }
    }

    /// Hängt einen neuen Zustand an und macht ihn zum aktuellen.
    ///
    /// Vorwärts-Einträge (Redo-Kandidaten) werden verworfen.
    pub fn push(&mut self, state: T) {
        if !self.entries.is_empty() {
            self.entries.truncate(self.cursor + 1);
        }
        self.entries.push(state);
        self.cursor = self.entries.len() - 1;
        if self.entries.len() > self.max_depth {
            self.entries.remove(0);
            self.cursor -= 1;
        }
    }

    /// Bewegt den Cursor einen Schritt zurück und liefert den neuen
    /// aktuellen Zustand. `None` am unteren Rand.
    pub fn undo(&mut self) -> Option<&T> {
        if self.cursor == 0 || self.entries.is_empty() {
            return None;
        }
        self.cursor -= 1;
        Some(&self.entries[self.cursor])
    }

    /// Bewegt den Cursor einen Schritt vorwärts und liefert den neuen
    /// aktuellen Zustand. `None` am oberen Rand.
    pub fn redo(&mut self) -> Option<&T> {
        if self.entries.is_empty() || self.cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        Some(&self.entries[self.cursor])
    }

    /// Aktueller Zustand unter dem Cursor.
    pub fn current(&self) -> Option<&T> {
        self.entries.get(self.cursor)
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        !self.entries.is_empty() && self.cursor + 1 < self.entries.len()
    }

    /// Verwirft alle Einträge.
    pub fn reset(&mut self) {
        self.entries.clear();
        self.cursor = 0;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Undo/Redo-Zustand der App: aktiver Stapel, Layer-Seitencache,
/// Restore-Latch und Gesten-Bündelung.
///
/// Jeder Layer hat seinen eigenen Stapel; bei Layer-Wechsel wird der
/// ausgehende Stapel im Cache geparkt und der eingehende (oder ein frisch
/// initialisierter) aktiviert. Undo auf Layer A kann so niemals Zustände
/// von Layer B wiederherstellen.
pub struct HistoryState {
    active: SnapshotHistory<Snapshot>,
    cached: HashMap<LayerId, SnapshotHistory<Snapshot>>,
    max_depth: usize,
    /// Latch: solange gesetzt, werden `push`-Aufrufe verworfen
    /// (das Zurückspielen eines Snapshots darf sich nicht selbst aufzeichnen).
    restoring: bool,
    /// Offene Geste: Zwischenschritte erzeugen keine Einträge,
    /// erst `commit_gesture` schreibt genau einen.
    gesture_open: bool,
}

impl HistoryState {
    /// Erstellt den History-Zustand und legt den Basis-Snapshot des
    /// initialen Layers ab.
    pub fn new(max_depth: usize, baseline: Arc<MapLayer>) -> Self {
        let mut active = SnapshotHistory::new(max_depth);
        active.push(Snapshot::new(baseline, "initial"));
        Self {
            active,
            cached: HashMap::new(),
            max_depth,
            restoring: false,
            gesture_open: false,
        }
    }

    /// Zeichnet einen Post-Zustand auf. Verworfen, solange das Restore-Latch
    /// gesetzt oder eine Geste offen ist.
    pub fn push(&mut self, layer: Arc<MapLayer>, name: impl Into<String>) {
        if self.restoring || self.gesture_open {
            return;
        }
        self.active.push(Snapshot::new(layer, name));
    }

    /// Undo: liefert den wiederherzustellenden Snapshot, `None` am Rand.
    pub fn undo(&mut self) -> Option<Snapshot> {
        self.active.undo().cloned()
    }

    /// Redo: liefert den wiederherzustellenden Snapshot, `None` am Rand.
    pub fn redo(&mut self) -> Option<Snapshot> {
        self.active.redo().cloned()
    }

    pub fn can_undo(&self) -> bool {
        self.active.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.active.can_redo()
    }

    /// Anzahl Einträge im aktiven Stack (inklusive Baseline).
    pub fn active_len(&self) -> usize {
        self.active.len()
    }

    // ── Restore-Latch ───────────────────────────────────────────────

    pub fn begin_restore(&mut self) {
        self.restoring = true;
    }

    pub fn end_restore(&mut self) {
        self.restoring = false;
    }

    pub fn is_restoring(&self) -> bool {
        self.restoring
    }

    // ── Gesten-Bündelung ────────────────────────────────────────────

    /// Öffnet eine Geste. Idempotent: wiederholte Aufrufe während derselben
    /// Geste sind wirkungslos.
    pub fn begin_gesture(&mut self) {
        self.gesture_open = true;
    }

    /// Schließt die Geste und zeichnet genau einen Post-Zustand auf.
    pub fn commit_gesture(&mut self, layer: Arc<MapLayer>, name: impl Into<String>) {
        if !self.gesture_open {
            return;
        }
        self.gesture_open = false;
        self.push(layer, name);
    }

    /// Schließt die Geste ohne Eintrag (Abbruch).
    pub fn cancel_gesture(&mut self) {
        self.gesture_open = false;
    }

    pub fn gesture_open(&self) -> bool {
        self.gesture_open
    }

    // ── Layer-Wechsel ───────────────────────────────────────────────

    /// Parkt den Stapel des ausgehenden Layers und aktiviert den des
    /// eingehenden. Hat der eingehende Layer noch keinen Stapel, wird er
    /// mit `baseline` als Basis-Snapshot initialisiert.
    pub fn switch_layer(&mut self, outgoing: LayerId, incoming: LayerId, baseline: Arc<MapLayer>) {
        if outgoing == incoming {
            return;
        }
        let mut fresh = self.cached.remove(&incoming).unwrap_or_else(|| {
            let mut h = SnapshotHistory::new(self.max_depth);
            h.push(Snapshot::new(baseline, "initial"));
            h
        });
        std::mem::swap(&mut self.active, &mut fresh);
        self.cached.insert(outgoing, fresh);
        self.gesture_open = false;
    }

    /// Entfernt den geparkten Stapel eines gelöschten Layers.
    pub fn drop_layer(&mut self, layer: LayerId) {
        self.cached.remove(&layer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Cell, MapLayer};

    fn layer_with_cells(count: i32) -> Arc<MapLayer> {
        let mut layer = MapLayer::default();
        for i in 0..count {
            layer.cells.insert(
                (i, 0),
                Cell {
                    fill: Some([1.0, 0.0, 0.0, 1.0]),
                    ..Default::default()
                },
            );
        }
        Arc::new(layer)
    }

    fn snap(count: i32) -> Snapshot {
        Snapshot::new(layer_with_cells(count), format!("{count} cells"))
    }

    #[test]
    fn empty_history_cannot_undo_or_redo() {
        let h: SnapshotHistory<Snapshot> = SnapshotHistory::new(10);
        assert!(!h.can_undo());
        assert!(!h.can_redo());
    }

    #[test]
    fn undo_returns_previous_then_redo_returns_next() {
        let mut h = SnapshotHistory::new(10);
        h.push(snap(1));
        h.push(snap(2));

        let prev = h.undo().expect("undo vorhanden");
        assert_eq!(prev.layer.cells.len(), 1);

        let next = h.redo().expect("redo vorhanden");
        assert_eq!(next.layer.cells.len(), 2);
        assert!(!h.can_redo());
    }

    #[test]
    fn push_after_undo_truncates_forward_entries() {
        let mut h = SnapshotHistory::new(10);
        h.push(snap(1));
        h.push(snap(2));
        h.push(snap(3));

        h.undo();
        h.undo();
        h.push(snap(9));

        assert!(!h.can_redo());
        assert_eq!(h.current().unwrap().layer.cells.len(), 9);
        // 1 und 9 bleiben, 2 und 3 sind weg
        assert_eq!(h.len(), 2);
    }

    #[test]
    fn undo_at_bottom_is_noop() {
        let mut h = SnapshotHistory::new(10);
        h.push(snap(1));
        assert!(h.undo().is_none());
        assert_eq!(h.current().unwrap().layer.cells.len(), 1);
    }

    #[test]
    fn eviction_decrements_cursor() {
        let mut h = SnapshotHistory::new(3);
        for i in 1..=5 {
            h.push(snap(i));
        }
        assert_eq!(h.len(), 3);

        // Undo direkt nach der Verdrängung muss denselben logischen
        // Zustand liefern wie ohne Kappung: den Vorgänger von 5.
        let prev = h.undo().expect("undo vorhanden");
        assert_eq!(prev.layer.cells.len(), 4);
        let prev = h.undo().expect("undo vorhanden");
        assert_eq!(prev.layer.cells.len(), 3);
        assert!(h.undo().is_none());
    }

    #[test]
    fn restore_latch_suppresses_push() {
        let mut hs = HistoryState::new(10, layer_with_cells(0));
        hs.begin_restore();
        hs.push(layer_with_cells(1), "while restoring");
        hs.end_restore();
        assert!(!hs.can_undo());

        hs.push(layer_with_cells(1), "after restore");
        assert!(hs.can_undo());
    }

    #[test]
    fn gesture_batches_to_single_entry() {
        let mut hs = HistoryState::new(10, layer_with_cells(0));
        hs.begin_gesture();
        hs.begin_gesture(); // idempotent
        hs.push(layer_with_cells(1), "intermediate");
        hs.push(layer_with_cells(2), "intermediate");
        hs.commit_gesture(layer_with_cells(3), "stroke");

        // Genau ein Undo-Schritt für die ganze Geste
        let prev = hs.undo().expect("undo vorhanden");
        assert!(prev.layer.cells.is_empty());
        assert!(!hs.can_undo());
    }

    #[test]
    fn cancelled_gesture_leaves_no_entry() {
        let mut hs = HistoryState::new(10, layer_with_cells(0));
        hs.begin_gesture();
        hs.cancel_gesture();
        assert!(!hs.can_undo());
    }

    #[test]
    fn commit_without_open_gesture_is_noop() {
        let mut hs = HistoryState::new(10, layer_with_cells(0));
        hs.commit_gesture(layer_with_cells(5), "stray commit");
        assert!(!hs.can_undo());
    }

    #[test]
    fn layer_switch_isolates_stacks() {
        let mut hs = HistoryState::new(10, layer_with_cells(0));
        hs.push(layer_with_cells(2), "paint on A");

        hs.switch_layer(0, 1, layer_with_cells(0));
        assert!(!hs.can_undo(), "frischer Layer hat keine Undo-Schritte");

        hs.push(layer_with_cells(7), "paint on B");
        hs.switch_layer(1, 0, layer_with_cells(0));

        // Stapel von Layer A ist unverändert zurück
        let prev = hs.undo().expect("undo vorhanden");
        assert!(prev.layer.cells.is_empty());

        hs.switch_layer(0, 1, layer_with_cells(0));
        let prev = hs.undo().expect("undo vorhanden");
        assert!(prev.layer.cells.is_empty());
    }
}
