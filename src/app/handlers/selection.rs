//! Handler für Selektion, Gruppen-Drag, Resize und Kontext-Anfragen.

use super::tooling::with_tool_ctx;
use crate::app::events::PointerSource;
use crate::app::tools::ToolMachine;
use crate::app::use_cases::{items, pick};
use crate::app::AppState;

/// Selektiert das Element unter dem Klickpunkt.
///
/// `additive` (Shift) schaltet die Zugehörigkeit um; ein Klick ins Leere
/// ohne `additive` hebt die Selektion auf.
pub fn pick_item(state: &mut AppState, world: glam::Vec2, additive: bool) {
    let hit = pick::item_at(state.document.active(), state.geometry.as_ref(), world);
    match hit {
        Some(item) if additive => {
            state.selection.toggle(item);
            log::debug!("Selektion umgeschaltet: {:?}", item);
        }
        Some(item) => {
            state.selection.select_single(item);
            log::debug!("Selektiert: {:?}", item);
        }
        None if !additive => state.selection.clear(),
        None => {}
    }
}

/// Hebt die Selektion auf.
pub fn clear_selection(state: &mut AppState) {
    state.selection.clear();
}

/// Löscht alle selektierten Elemente.
pub fn delete_selected(state: &mut AppState) {
    items::delete_selected(&mut state.document, &mut state.history, &mut state.selection);
}

/// Startet den Gruppen-Drag der Selektion.
pub fn group_drag_begin(state: &mut AppState, world: glam::Vec2) {
    with_tool_ctx(state, PointerSource::Mouse, |tools, _, ctx| {
        tools.group_drag.begin(ctx, world);
    });
}

/// Aktualisiert den Gruppen-Drag.
pub fn group_drag_update(state: &mut AppState, world: glam::Vec2) {
    with_tool_ctx(state, PointerSource::Mouse, |tools, _, ctx| {
        tools.group_drag.update(ctx, world);
    });
}

/// Beendet den Gruppen-Drag an der letzten bekannten Position.
pub fn group_drag_end(state: &mut AppState) {
    with_tool_ctx(state, PointerSource::Mouse, |tools, _, ctx| {
        tools.group_drag.finish(ctx);
    });
}

/// Startet das Eckgriff-Resize des selektierten Objekts.
pub fn resize_begin(state: &mut AppState, world: glam::Vec2) {
    with_tool_ctx(state, PointerSource::Mouse, |tools, _, ctx| {
        tools.resize.begin(ctx, world);
    });
}

/// Aktualisiert das Resize.
pub fn resize_update(state: &mut AppState, world: glam::Vec2) {
    with_tool_ctx(state, PointerSource::Mouse, |tools, _, ctx| {
        tools.resize.update(ctx, world);
    });
}

/// Beendet das Resize.
pub fn resize_end(state: &mut AppState) {
    with_tool_ctx(state, PointerSource::Mouse, |tools, _, ctx| {
        tools.resize.finish(ctx);
    });
}

/// Fordert den Label-Editier-Dialog für das Label unter dem Punkt an.
pub fn request_label_edit(state: &mut AppState, world: glam::Vec2) {
    if let Some(id) = pick::label_at(state.document.active(), world) {
        state.ui.pending_label_edit = Some(id);
        log::debug!("Label-Edit angefordert: {}", id);
    }
}

/// Bestimmt das Kontextmenü-Ziel unter dem Zeiger.
pub fn set_context_target(state: &mut AppState, world: glam::Vec2) {
    state.ui.context_target =
        pick::item_at(state.document.active(), state.geometry.as_ref(), world);
}
