//! Handler für Undo/Redo.

use crate::app::AppState;

/// Macht den letzten Bearbeitungsschritt auf dem aktiven Layer rückgängig.
pub fn undo(state: &mut AppState) {
    if let Some(snapshot) = state.history.undo() {
        state.history.begin_restore();
        state.document.restore_active(snapshot.layer);
        state.history.end_restore();
        log::info!("Undo: {}", snapshot.name);
    } else {
        log::debug!("Undo: nichts rückgängig zu machen");
    }
}

/// Stellt den zuletzt rückgängig gemachten Schritt wieder her.
pub fn redo(state: &mut AppState) {
    if let Some(snapshot) = state.history.redo() {
        state.history.begin_restore();
        state.document.restore_active(snapshot.layer);
        state.history.end_restore();
        log::info!("Redo: {}", snapshot.name);
    } else {
        log::debug!("Redo: nichts wiederherzustellen");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Cell;

    #[test]
    fn undo_restores_previous_layer_state() {
        let mut state = AppState::new();
        state
            .document
            .active_mut()
            .cells
            .insert((1, 1), Cell::filled([0.5; 4]));
        state
            .history
            .push(state.document.active_arc(), "Zelle gemalt");

        undo(&mut state);

        assert!(!state.document.active().cells.contains_key(&(1, 1)));
        assert!(state.can_redo());
    }

    #[test]
    fn redo_reapplies_undone_step() {
        let mut state = AppState::new();
        state
            .document
            .active_mut()
            .cells
            .insert((1, 1), Cell::filled([0.5; 4]));
        state
            .history
            .push(state.document.active_arc(), "Zelle gemalt");

        undo(&mut state);
        redo(&mut state);

        assert!(state.document.active().cells.contains_key(&(1, 1)));
        assert!(state.can_undo());
    }

    #[test]
    fn undo_on_empty_stack_is_a_no_op() {
        let mut state = AppState::new();
        undo(&mut state);
        assert!(!state.can_redo());
    }
}
