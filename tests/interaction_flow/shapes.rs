//! Formwerkzeuge und Diagonal-Füllung über den Controller.

use crate::common::{click_cell, editor, editor_with, set_tool};
use mapwright::{EditorIntent, HexGrid, PointerSource, ToolId};

#[test]
fn rect_fill_via_two_clicks() {
    let (mut controller, mut state) = editor();
    set_tool(&mut controller, &mut state, ToolId::RectFill);
    let before = state.history.active_len();

    click_cell(&mut controller, &mut state, (0, 0));
    click_cell(&mut controller, &mut state, (3, 1));

    assert_eq!(state.document.active().cells.len(), 8);
    assert_eq!(state.history.active_len(), before + 1);
}

#[test]
fn diagonal_and_orthogonal_circle_drags_match() {
    // Chebyshev-Invariante: Diagonale und orthogonale Distanz d ergeben
    // denselben Zellblock
    let (mut controller, mut state) = editor();
    set_tool(&mut controller, &mut state, ToolId::CircleFill);
    click_cell(&mut controller, &mut state, (5, 5));
    click_cell(&mut controller, &mut state, (8, 8));
    let mut diagonal: Vec<_> = state.document.active().cells.keys().copied().collect();
    diagonal.sort_unstable();

    let (mut controller2, mut state2) = editor();
    set_tool(&mut controller2, &mut state2, ToolId::CircleFill);
    click_cell(&mut controller2, &mut state2, (5, 5));
    click_cell(&mut controller2, &mut state2, (8, 5));
    let mut orthogonal: Vec<_> = state2.document.active().cells.keys().copied().collect();
    orthogonal.sort_unstable();

    assert_eq!(diagonal, orthogonal);
    assert_eq!(diagonal.len(), 49);
}

#[test]
fn clear_area_only_touches_painted_cells() {
    let (mut controller, mut state) = editor();
    set_tool(&mut controller, &mut state, ToolId::RectFill);
    click_cell(&mut controller, &mut state, (0, 0));
    click_cell(&mut controller, &mut state, (2, 2));

    set_tool(&mut controller, &mut state, ToolId::ClearArea);
    click_cell(&mut controller, &mut state, (2, 2));
    click_cell(&mut controller, &mut state, (5, 5));

    assert_eq!(state.document.active().cells.len(), 8);
    assert!(!state.document.active().cells.contains_key(&(2, 2)));
}

#[test]
fn diagonal_fill_without_concave_corner_is_a_no_op() {
    let (mut controller, mut state) = editor();
    set_tool(&mut controller, &mut state, ToolId::DiagonalFill);
    let before = state.history.active_len();

    click_cell(&mut controller, &mut state, (4, 4));

    assert!(state.document.active().cells.is_empty());
    assert_eq!(state.history.active_len(), before);
}

#[test]
fn diagonal_fill_is_unhandled_on_hex_grids() {
    let (mut controller, mut state) = editor_with(Box::new(HexGrid::new(1.0)));
    set_tool(&mut controller, &mut state, ToolId::DiagonalFill);
    let before = state.history.active_len();

    controller
        .handle_intent(
            &mut state,
            EditorIntent::ToolStrokeBegan {
                world: glam::Vec2::new(0.0, 0.0),
                source: PointerSource::Mouse,
            },
        )
        .unwrap();
    controller
        .handle_intent(
            &mut state,
            EditorIntent::ToolStrokeEnded {
                world: glam::Vec2::new(0.0, 0.0),
                source: PointerSource::Mouse,
            },
        )
        .unwrap();

    assert!(state.document.active().cells.is_empty());
    assert_eq!(state.history.active_len(), before);
}

#[test]
fn diagonal_fill_smooths_a_staircase() {
    let (mut controller, mut state) = editor();
    set_tool(&mut controller, &mut state, ToolId::Paint);
    // Treppe: NE- und SW-Nachbarn der Ecke (1, 1) bemalt
    click_cell(&mut controller, &mut state, (1, 1));
    click_cell(&mut controller, &mut state, (0, 0));

    set_tool(&mut controller, &mut state, ToolId::DiagonalFill);
    let before = state.history.active_len();
    // Zwei Klicks auf derselben konkaven Ecke: Ein-Schritt-Pfad
    for _ in 0..2 {
        controller
            .handle_intent(
                &mut state,
                EditorIntent::ToolStrokeBegan {
                    world: glam::Vec2::new(1.2, 1.2),
                    source: PointerSource::Mouse,
                },
            )
            .unwrap();
        controller
            .handle_intent(
                &mut state,
                EditorIntent::ToolStrokeEnded {
                    world: glam::Vec2::new(1.2, 1.2),
                    source: PointerSource::Mouse,
                },
            )
            .unwrap();
    }

    // Kerbsegmente in den beiden unbemalten Gegenzellen
    let cells = &state.document.active().cells;
    assert!(cells.contains_key(&(0, 1)));
    assert!(cells.contains_key(&(1, 0)));
    assert_eq!(state.history.active_len(), before + 1);
}
