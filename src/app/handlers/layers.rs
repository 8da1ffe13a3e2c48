//! Handler für Layer-Verwaltung.

use crate::app::use_cases::layers;
use crate::app::AppState;
use crate::core::LayerId;

/// Legt einen neuen Layer an und aktiviert ihn.
pub fn add_layer(state: &mut AppState) {
    state.selection.clear();
    layers::add_layer(&mut state.document, &mut state.history);
}

/// Entfernt einen Layer samt seiner Undo-Stacks.
pub fn remove_layer(state: &mut AppState, id: LayerId) {
    let was_active = state.document.active_layer == id;
    if layers::remove_layer(&mut state.document, &mut state.history, id) && was_active {
        state.selection.clear();
    }
}

/// Wechselt den aktiven Layer.
pub fn set_active_layer(state: &mut AppState, id: LayerId) {
    if layers::set_active_layer(&mut state.document, &mut state.history, id) {
        state.selection.clear();
    }
}
