//! Selektions-Drag, Undo/Redo und Layer-Wechsel über Intents.

use crate::common::{editor, editor_with, mouse_stroke, set_tool};
use glam::Vec2;
use mapwright::{EditorIntent, SquareGrid, ToolId};

fn center(cell: (i32, i32)) -> Vec2 {
    Vec2::new(cell.0 as f32 + 0.5, cell.1 as f32 + 0.5)
}

fn feed(
    controller: &mut mapwright::AppController,
    state: &mut mapwright::AppState,
    intents: Vec<EditorIntent>,
) {
    for intent in intents {
        controller.handle_intent(state, intent).unwrap();
    }
}

#[test]
fn group_drag_via_intents_moves_whole_selection() {
    let (mut controller, mut state) = editor();
    feed(
        &mut controller,
        &mut state,
        vec![
            EditorIntent::PlaceObjectRequested { world: center((0, 0)) },
            EditorIntent::PlaceObjectRequested { world: center((1, 0)) },
            // Selektion um das erste Objekt erweitern
            EditorIntent::ItemPickRequested {
                world: center((0, 0)),
                additive: true,
            },
            EditorIntent::GroupDragStarted { world: center((0, 0)) },
            EditorIntent::GroupDragMoved { world: center((2, 3)) },
            EditorIntent::GroupDragEnded,
        ],
    );

    let mut positions: Vec<_> = state
        .document
        .active()
        .objects
        .values()
        .map(|o| o.position)
        .collect();
    positions.sort_unstable();
    assert_eq!(positions, vec![(2, 3), (3, 3)]);
}

#[test]
fn group_drag_bounds_violation_moves_nothing() {
    let (mut controller, mut state) =
        editor_with(Box::new(SquareGrid::with_bounds(1.0, (0, 0), (4, 4))));
    feed(
        &mut controller,
        &mut state,
        vec![
            EditorIntent::PlaceObjectRequested { world: center((0, 0)) },
            EditorIntent::PlaceObjectRequested { world: center((4, 0)) },
            EditorIntent::ItemPickRequested {
                world: center((0, 0)),
                additive: true,
            },
            EditorIntent::GroupDragStarted { world: center((0, 0)) },
            // Das zweite Objekt fiele auf (5, 0): die Gruppe bleibt stehen
            EditorIntent::GroupDragMoved { world: center((1, 0)) },
            EditorIntent::GroupDragEnded,
        ],
    );

    let mut positions: Vec<_> = state
        .document
        .active()
        .objects
        .values()
        .map(|o| o.position)
        .collect();
    positions.sort_unstable();
    assert_eq!(positions, vec![(0, 0), (4, 0)]);
}

#[test]
fn undo_and_redo_round_trip_a_stroke() {
    let (mut controller, mut state) = editor();
    set_tool(&mut controller, &mut state, ToolId::Paint);
    mouse_stroke(&mut controller, &mut state, &[(0, 0), (1, 0)]);
    assert_eq!(state.document.active().cells.len(), 2);

    feed(&mut controller, &mut state, vec![EditorIntent::UndoRequested]);
    assert!(state.document.active().cells.is_empty());

    feed(&mut controller, &mut state, vec![EditorIntent::RedoRequested]);
    assert_eq!(state.document.active().cells.len(), 2);
}

#[test]
fn new_edit_truncates_the_redo_branch() {
    let (mut controller, mut state) = editor();
    set_tool(&mut controller, &mut state, ToolId::Paint);
    mouse_stroke(&mut controller, &mut state, &[(0, 0)]);
    feed(&mut controller, &mut state, vec![EditorIntent::UndoRequested]);
    assert!(state.history.can_redo());

    mouse_stroke(&mut controller, &mut state, &[(5, 5)]);

    assert!(!state.history.can_redo());
    assert_eq!(state.document.active().cells.len(), 1);
    assert!(state.document.active().cells.contains_key(&(5, 5)));
}

#[test]
fn escape_cancels_in_stages() {
    let (mut controller, mut state) = editor();
    set_tool(&mut controller, &mut state, ToolId::Paint);
    feed(
        &mut controller,
        &mut state,
        vec![EditorIntent::PlaceObjectRequested { world: center((0, 0)) }],
    );
    assert!(!state.selection.is_empty());

    // Stufe 1: Selektion fällt, das Werkzeug bleibt
    feed(&mut controller, &mut state, vec![EditorIntent::EscapePressed]);
    assert!(state.selection.is_empty());
    assert_eq!(state.editor.active_tool, ToolId::Paint);

    // Stufe 2: zurück zum Select-Werkzeug
    feed(&mut controller, &mut state, vec![EditorIntent::EscapePressed]);
    assert_eq!(state.editor.active_tool, ToolId::Select);
}

#[test]
fn escape_during_stroke_cancels_only_the_gesture() {
    let (mut controller, mut state) = editor();
    set_tool(&mut controller, &mut state, ToolId::Paint);
    feed(
        &mut controller,
        &mut state,
        vec![EditorIntent::ToolStrokeBegan {
            world: center((0, 0)),
            source: mapwright::PointerSource::Mouse,
        }],
    );

    feed(&mut controller, &mut state, vec![EditorIntent::EscapePressed]);

    assert_eq!(state.editor.active_tool, ToolId::Paint);
    assert!(!state.editor.tools.any_active());
    // Letzter Stand gewinnt: die Zelle bleibt, aber ohne History-Eintrag
    assert!(state.document.active().cells.contains_key(&(0, 0)));
    assert_eq!(state.history.active_len(), 1);
}

#[test]
fn layer_switch_parks_undo_stacks() {
    let (mut controller, mut state) = editor();
    set_tool(&mut controller, &mut state, ToolId::Paint);
    mouse_stroke(&mut controller, &mut state, &[(0, 0)]);
    assert!(state.history.can_undo());

    feed(&mut controller, &mut state, vec![EditorIntent::AddLayerRequested]);
    let second = state.document.active_layer;
    assert_ne!(second, 0);
    assert!(!state.history.can_undo());

    mouse_stroke(&mut controller, &mut state, &[(9, 9)]);
    assert!(state.history.can_undo());

    feed(
        &mut controller,
        &mut state,
        vec![EditorIntent::SetActiveLayerRequested { id: 0 }],
    );
    assert!(state.history.can_undo());
    assert!(state.document.active().cells.contains_key(&(0, 0)));
    assert!(!state.document.active().cells.contains_key(&(9, 9)));

    feed(
        &mut controller,
        &mut state,
        vec![EditorIntent::SetActiveLayerRequested { id: second }],
    );
    assert!(state.document.active().cells.contains_key(&(9, 9)));
}

#[test]
fn delete_selected_is_undoable() {
    let (mut controller, mut state) = editor();
    feed(
        &mut controller,
        &mut state,
        vec![
            EditorIntent::PlaceObjectRequested { world: center((2, 2)) },
            EditorIntent::DeleteSelectedRequested,
        ],
    );
    assert!(state.document.active().objects.is_empty());
    assert!(state.selection.is_empty());

    feed(&mut controller, &mut state, vec![EditorIntent::UndoRequested]);
    assert_eq!(state.document.active().objects.len(), 1);
}

#[test]
fn duplicate_selected_selects_the_copies() {
    let (mut controller, mut state) = editor();
    feed(
        &mut controller,
        &mut state,
        vec![
            EditorIntent::PlaceObjectRequested { world: center((0, 0)) },
            EditorIntent::DuplicateSelectedRequested,
        ],
    );

    assert_eq!(state.document.active().objects.len(), 2);
    assert!(!state.selection.is_empty());
    // Das Original ist nicht mehr Teil der Selektion
    let positions: Vec<_> = state
        .document
        .active()
        .objects
        .values()
        .map(|o| o.position)
        .collect();
    assert!(positions.contains(&(0, 0)));
}
