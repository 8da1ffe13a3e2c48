//! Dokument-Mutations-Boundary.
//!
//! Alle Schreibzugriffe auf den aktiven Layer laufen über diese vier
//! Apply-Funktionen — Tool-State-Machines mutieren das Dokument nie direkt.
//! Nur so lassen sich History-Bündelung und das Restore-Latch einheitlich
//! durchsetzen.

use crate::app::history::HistoryState;
use crate::core::{Cell, CellCoord, Edge, EdgeKey, MapDocument, MapObject, TextLabel};
use indexmap::IndexMap;

/// History-Politik eines Apply-Aufrufs.
///
/// `Suppress` für Zwischenschritte einer Geste; der Commit am Gestenende
/// schreibt genau einen Snapshot (zweiphasig über `HistoryState`).
#[derive(Debug, Clone, Copy)]
pub enum RecordHistory {
    /// Nach der Mutation einen Snapshot mit diesem Namen aufzeichnen
    Commit(&'static str),
    /// Mutation anwenden, keinen Snapshot aufzeichnen
    Suppress,
}

fn finish(doc: &MapDocument, history: &mut HistoryState, record: RecordHistory) {
    if let RecordHistory::Commit(name) = record {
        history.push(doc.active_arc(), name);
    }
}

/// Setzt oder entfernt Zellen auf dem aktiven Layer.
///
/// `None` oder eine leere Zelle entfernt den Eintrag — die Invariante
/// "keine leere Zelle wird persistiert" wird hier durchgesetzt.
pub fn apply_cells(
    doc: &mut MapDocument,
    history: &mut HistoryState,
    edits: &[(CellCoord, Option<Cell>)],
    record: RecordHistory,
) {
    if edits.is_empty() {
        return;
    }
    let layer = doc.active_mut();
    for (coord, cell) in edits {
        match cell {
            Some(c) if !c.is_empty() => {
                layer.cells.insert(*coord, c.clone());
            }
            _ => {
                layer.cells.remove(coord);
            }
        }
    }
    finish(doc, history, record);
}

/// Setzt oder entfernt Kanten unter kanonischen Schlüsseln.
pub fn apply_edges(
    doc: &mut MapDocument,
    history: &mut HistoryState,
    edits: &[(EdgeKey, Option<Edge>)],
    record: RecordHistory,
) {
    if edits.is_empty() {
        return;
    }
    let layer = doc.active_mut();
    for (key, edge) in edits {
        match edge {
            Some(e) => {
                layer.edges.insert(*key, *e);
            }
            None => {
                layer.edges.remove(key);
            }
        }
    }
    finish(doc, history, record);
}

/// Ersetzt die Objekt-Collection des aktiven Layers.
///
/// Validierung (Bounds, Kollision, Slots) passiert VOR dem Aufruf beim
/// Use-Case bzw. der Tool-Machine — hier wird nur noch geschrieben.
pub fn apply_objects(
    doc: &mut MapDocument,
    history: &mut HistoryState,
    objects: IndexMap<u64, MapObject>,
    record: RecordHistory,
) {
    doc.active_mut().objects = objects;
    finish(doc, history, record);
}

/// Ersetzt die Label-Collection des aktiven Layers.
pub fn apply_labels(
    doc: &mut MapDocument,
    history: &mut HistoryState,
    labels: IndexMap<u64, TextLabel>,
    record: RecordHistory,
) {
    doc.active_mut().labels = labels;
    finish(doc, history, record);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Cell;

    fn setup() -> (MapDocument, HistoryState) {
        let doc = MapDocument::new();
        let history = HistoryState::new(10, doc.active_arc());
        (doc, history)
    }

    #[test]
    fn commit_records_one_snapshot() {
        let (mut doc, mut history) = setup();
        apply_cells(
            &mut doc,
            &mut history,
            &[((0, 0), Some(Cell::filled([1.0, 0.0, 0.0, 1.0])))],
            RecordHistory::Commit("malen"),
        );
        assert!(history.can_undo());
        assert_eq!(doc.active().cells.len(), 1);
    }

    #[test]
    fn suppress_applies_without_snapshot() {
        let (mut doc, mut history) = setup();
        apply_cells(
            &mut doc,
            &mut history,
            &[((0, 0), Some(Cell::filled([1.0, 0.0, 0.0, 1.0])))],
            RecordHistory::Suppress,
        );
        assert!(!history.can_undo());
        assert_eq!(doc.active().cells.len(), 1);
    }

    #[test]
    fn empty_cell_is_removed_not_stored() {
        let (mut doc, mut history) = setup();
        apply_cells(
            &mut doc,
            &mut history,
            &[((0, 0), Some(Cell::filled([1.0, 0.0, 0.0, 1.0])))],
            RecordHistory::Suppress,
        );
        apply_cells(
            &mut doc,
            &mut history,
            &[((0, 0), Some(Cell::default()))],
            RecordHistory::Suppress,
        );
        assert!(doc.active().cells.is_empty());
    }

    #[test]
    fn empty_edit_list_is_noop() {
        let (mut doc, mut history) = setup();
        apply_cells(&mut doc, &mut history, &[], RecordHistory::Commit("leer"));
        assert!(!history.can_undo());
    }
}
