//! Layer-Verwaltung mit History-Parkdisziplin.
//!
//! Jeder Layer führt seinen eigenen Undo/Redo-Stack; beim Wechsel wird der
//! aktive Stack im Seiten-Cache geparkt und der des Ziels reaktiviert.

use crate::app::history::HistoryState;
use crate::core::{LayerId, MapDocument};

/// Legt einen neuen leeren Layer an, aktiviert ihn und wechselt die
/// History auf dessen (frischen) Stack.
pub fn add_layer(doc: &mut MapDocument, history: &mut HistoryState) -> LayerId {
    let previous = doc.active_layer;
    let id = doc.add_layer();
    doc.set_active_layer(id);
    history.switch_layer(previous, id, doc.active_arc());
    log::info!("Layer {} angelegt und aktiviert", id);
    id
}

/// Entfernt einen Layer samt gecachtem History-Stack.
///
/// Der letzte verbleibende Layer wird still abgelehnt. War der entfernte
/// Layer aktiv, wechselt die History auf den neuen aktiven Layer.
pub fn remove_layer(doc: &mut MapDocument, history: &mut HistoryState, id: LayerId) -> bool {
    let was_active = doc.active_layer == id;
    if !doc.remove_layer(id) {
        return false;
    }
    if was_active {
        history.switch_layer(id, doc.active_layer, doc.active_arc());
    }
    history.drop_layer(id);
    log::info!("Layer {} entfernt", id);
    true
}

/// Wechselt den aktiven Layer. Unbekannte Ids und der bereits aktive
/// Layer sind No-Ops.
pub fn set_active_layer(doc: &mut MapDocument, history: &mut HistoryState, id: LayerId) -> bool {
    let previous = doc.active_layer;
    if id == previous || !doc.set_active_layer(id) {
        return false;
    }
    history.switch_layer(previous, id, doc.active_arc());
    log::debug!("Aktiver Layer: {}", id);
    true
}
