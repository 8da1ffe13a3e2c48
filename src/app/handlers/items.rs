//! Handler für das Platzieren und Bearbeiten von Objekten und Labels.

use crate::app::state::SelectionRef;
use crate::app::use_cases::items;
use crate::app::AppState;
use crate::core::{Rgba, TextLabel};
use glam::Vec2;

/// Platziert ein Objekt an der Weltposition und selektiert es.
pub fn place_object(state: &mut AppState, world: Vec2) {
    let placed = items::place_object(
        &mut state.document,
        &mut state.history,
        state.geometry.as_ref(),
        world,
    );
    if let Some(id) = placed {
        state.selection.select_single(SelectionRef::Object(id));
    }
}

/// Dupliziert die Selektion und selektiert die Kopien.
pub fn duplicate_selected(state: &mut AppState) {
    let created = items::duplicate_selected(
        &mut state.document,
        &mut state.history,
        state.geometry.as_ref(),
        &state.selection,
    );
    if !created.is_empty() {
        state.selection.clear();
        for item in created {
            state.selection.toggle(item);
        }
    }
}

/// Setzt oder löscht die Farbüberschreibung eines Objekts.
pub fn set_object_color(state: &mut AppState, id: u64, color: Option<Rgba>) {
    items::set_object_color(&mut state.document, &mut state.history, id, color);
}

/// Setzt die Rotation eines Objekts.
pub fn set_object_rotation(state: &mut AppState, id: u64, rotation: f32) {
    items::set_object_rotation(&mut state.document, &mut state.history, id, rotation);
}

/// Platziert ein Label am Weltpunkt und selektiert es.
pub fn place_label(state: &mut AppState, world: Vec2, content: &str) {
    let placed = items::place_label(&mut state.document, &mut state.history, world, content);
    if let Some(id) = placed {
        state.selection.select_single(SelectionRef::Label(id));
    }
}

/// Übernimmt das Ergebnis des Label-Editier-Dialogs des Hosts.
pub fn apply_label_edit(state: &mut AppState, label: TextLabel) {
    state.ui.pending_label_edit = None;
    items::update_label(&mut state.document, &mut state.history, label);
}
