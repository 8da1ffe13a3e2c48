use super::map_intent_to_commands;
use crate::app::events::PointerSource;
use crate::app::state::SelectionRef;
use crate::app::tools::{ToolCtx, ToolId};
use crate::app::{AppState, EditorCommand, EditorIntent};
use glam::Vec2;

fn begin_paint_stroke(state: &mut AppState) {
    state.editor.active_tool = ToolId::Paint;
    let AppState {
        document,
        geometry,
        history,
        selection,
        view,
        options,
        editor,
        ..
    } = state;
    let mut ctx = ToolCtx {
        doc: document,
        geometry: geometry.as_ref(),
        history,
        selection,
        view,
        options,
        source: PointerSource::Mouse,
    };
    editor.tools.begin(editor.active_tool, &mut ctx, Vec2::new(0.5, 0.5));
}

#[test]
fn undo_requested_maps_to_undo() {
    let state = AppState::new();

    let commands = map_intent_to_commands(&state, EditorIntent::UndoRequested);

    assert_eq!(commands.len(), 1);
    assert!(matches!(commands[0], EditorCommand::Undo));
}

#[test]
fn stroke_on_drawing_tool_clears_selection_first() {
    let mut state = AppState::new();
    state.editor.active_tool = ToolId::Paint;
    state.selection.select_single(SelectionRef::Object(7));

    let commands = map_intent_to_commands(
        &state,
        EditorIntent::ToolStrokeBegan {
            world: Vec2::ZERO,
            source: PointerSource::Mouse,
        },
    );

    assert_eq!(commands.len(), 2);
    assert!(matches!(commands[0], EditorCommand::ClearSelection));
    assert!(matches!(commands[1], EditorCommand::ToolBegin { .. }));
}

#[test]
fn stroke_without_selection_maps_to_single_begin() {
    let mut state = AppState::new();
    state.editor.active_tool = ToolId::Paint;

    let commands = map_intent_to_commands(
        &state,
        EditorIntent::ToolStrokeBegan {
            world: Vec2::ZERO,
            source: PointerSource::Touch,
        },
    );

    assert_eq!(commands.len(), 1);
    assert!(matches!(
        commands[0],
        EditorCommand::ToolBegin {
            source: PointerSource::Touch,
            ..
        }
    ));
}

#[test]
fn escape_cancels_running_gesture_first() {
    let mut state = AppState::new();
    begin_paint_stroke(&mut state);

    let commands = map_intent_to_commands(&state, EditorIntent::EscapePressed);

    assert_eq!(commands.len(), 1);
    assert!(matches!(commands[0], EditorCommand::CancelAllTools));
}

#[test]
fn escape_clears_selection_when_no_gesture_runs() {
    let mut state = AppState::new();
    state.selection.select_single(SelectionRef::Object(1));

    let commands = map_intent_to_commands(&state, EditorIntent::EscapePressed);

    assert_eq!(commands.len(), 1);
    assert!(matches!(commands[0], EditorCommand::ClearSelection));
}

#[test]
fn escape_falls_back_to_select_tool() {
    let mut state = AppState::new();
    state.editor.active_tool = ToolId::Paint;

    let commands = map_intent_to_commands(&state, EditorIntent::EscapePressed);

    assert_eq!(commands.len(), 1);
    assert!(matches!(
        commands[0],
        EditorCommand::SetTool {
            tool: ToolId::Select
        }
    ));
}

#[test]
fn camera_zoom_keeps_focus_point() {
    let state = AppState::new();

    let commands = map_intent_to_commands(
        &state,
        EditorIntent::CameraZoom {
            factor: 1.5,
            focus_world: Some(Vec2::new(3.0, 4.0)),
        },
    );

    assert_eq!(commands.len(), 1);
    assert!(matches!(
        commands[0],
        EditorCommand::ZoomCamera {
            factor,
            focus_world: Some(focus),
        } if factor == 1.5 && focus == Vec2::new(3.0, 4.0)
    ));
}
