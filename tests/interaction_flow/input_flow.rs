//! Rohe Eingabe-Events durch Koordinator und Controller hindurch.

use crate::common::{editor, set_tool};
use glam::Vec2;
use mapwright::{
    AppController, AppState, EditorIntent, InputEvent, InputState, PointerButton, ToolId,
};

fn screen_for_world(state: &AppState, world: Vec2) -> Vec2 {
    state
        .view
        .camera
        .world_to_screen(world, state.view.viewport_vec())
}

fn feed(controller: &mut AppController, state: &mut AppState, intents: Vec<EditorIntent>) {
    for intent in intents {
        controller.handle_intent(state, intent).unwrap();
    }
}

#[test]
fn mouse_stroke_end_to_end_paints_cells() {
    let (mut controller, mut state) = editor();
    let mut input = InputState::new();
    set_tool(&mut controller, &mut state, ToolId::Paint);

    let down = screen_for_world(&state, Vec2::new(0.5, 0.5));
    let mid = screen_for_world(&state, Vec2::new(1.5, 0.5));
    let up = screen_for_world(&state, Vec2::new(2.5, 0.5));
    let before = state.history.active_len();

    let intents = input.handle_event(
        &state,
        InputEvent::PointerDown {
            pos: down,
            button: PointerButton::Primary,
            ctrl: false,
        },
        1.0,
    );
    feed(&mut controller, &mut state, intents);
    let intents = input.handle_event(&state, InputEvent::PointerMove { pos: mid }, 1.1);
    feed(&mut controller, &mut state, intents);
    let intents = input.handle_event(
        &state,
        InputEvent::PointerUp {
            pos: up,
            button: PointerButton::Primary,
        },
        1.2,
    );
    feed(&mut controller, &mut state, intents);

    assert_eq!(state.document.active().cells.len(), 3);
    assert_eq!(state.history.active_len(), before + 1);
}

#[test]
fn second_finger_cancels_touch_stroke_but_paint_stands() {
    let (mut controller, mut state) = editor();
    let mut input = InputState::new();
    set_tool(&mut controller, &mut state, ToolId::Paint);
    let before = state.history.active_len();

    let start = screen_for_world(&state, Vec2::new(0.5, 0.5));
    let intents = input.handle_event(&state, InputEvent::TouchStart { id: 1, pos: start }, 1.0);
    feed(&mut controller, &mut state, intents);

    // Aufschub-Fenster abgelaufen: der Tap wird als Strich-Start geflusht
    let intents = input.tick(&state, 1.1);
    assert!(matches!(intents[0], EditorIntent::ToolStrokeBegan { .. }));
    feed(&mut controller, &mut state, intents);

    let moved = screen_for_world(&state, Vec2::new(1.5, 0.5));
    let intents = input.handle_event(&state, InputEvent::TouchMove { id: 1, pos: moved }, 1.2);
    feed(&mut controller, &mut state, intents);
    assert_eq!(state.document.active().cells.len(), 2);

    // Zweiter Finger: die Geste kippt zu Pinch, der Strich bricht ab
    let intents = input.handle_event(
        &state,
        InputEvent::TouchStart {
            id: 2,
            pos: Vec2::new(600.0, 300.0),
        },
        1.3,
    );
    assert!(matches!(intents[0], EditorIntent::ToolStrokeCancelled));
    feed(&mut controller, &mut state, intents);

    // Letzter Stand gewinnt: die Zellen bleiben, ohne History-Eintrag
    assert_eq!(state.document.active().cells.len(), 2);
    assert_eq!(state.history.active_len(), before);

    // Die Zwei-Finger-Geste pant und zoomt die Kamera
    let position_before = state.view.camera.position;
    let zoom_before = state.view.camera.zoom;
    let intents = input.handle_event(
        &state,
        InputEvent::TouchMove {
            id: 2,
            pos: Vec2::new(700.0, 350.0),
        },
        1.4,
    );
    feed(&mut controller, &mut state, intents);
    assert_ne!(state.view.camera.position, position_before);
    assert_ne!(state.view.camera.zoom, zoom_before);

    let intents = input.handle_event(
        &state,
        InputEvent::TouchEnd {
            id: 1,
            pos: moved,
        },
        1.5,
    );
    feed(&mut controller, &mut state, intents);
    let intents = input.handle_event(
        &state,
        InputEvent::TouchEnd {
            id: 2,
            pos: Vec2::new(700.0, 350.0),
        },
        1.55,
    );
    feed(&mut controller, &mut state, intents);
    assert_eq!(state.document.active().cells.len(), 2);
}

#[test]
fn second_finger_aborts_touch_group_drag() {
    let (mut controller, mut state) = editor();
    let mut input = InputState::new();

    // Platziertes Objekt ist selektiert
    feed(
        &mut controller,
        &mut state,
        vec![EditorIntent::PlaceObjectRequested {
            world: Vec2::new(2.5, 2.5),
        }],
    );
    let before = state.history.active_len();

    let grab = screen_for_world(&state, Vec2::new(2.5, 2.5));
    let intents = input.handle_event(&state, InputEvent::TouchStart { id: 1, pos: grab }, 1.0);
    feed(&mut controller, &mut state, intents);
    let intents = input.tick(&state, 1.1);
    assert!(matches!(intents[0], EditorIntent::GroupDragStarted { .. }));
    feed(&mut controller, &mut state, intents);

    let target = screen_for_world(&state, Vec2::new(4.5, 4.5));
    let intents = input.handle_event(&state, InputEvent::TouchMove { id: 1, pos: target }, 1.2);
    feed(&mut controller, &mut state, intents);

    // Zweiter Finger bricht auch den Gruppen-Drag ab
    let intents = input.handle_event(
        &state,
        InputEvent::TouchStart {
            id: 2,
            pos: Vec2::new(600.0, 300.0),
        },
        1.3,
    );
    assert!(matches!(intents[0], EditorIntent::ToolStrokeCancelled));
    feed(&mut controller, &mut state, intents);

    // Baselines wiederhergestellt, Gesten-Klammer geschlossen
    let object = state.document.active().objects.values().next().unwrap();
    assert_eq!(object.position, (2, 2));
    assert!(!state.history.gesture_open());

    let intents = input.handle_event(&state, InputEvent::TouchEnd { id: 1, pos: target }, 1.4);
    feed(&mut controller, &mut state, intents);
    let intents = input.handle_event(
        &state,
        InputEvent::TouchEnd {
            id: 2,
            pos: Vec2::new(600.0, 300.0),
        },
        1.45,
    );
    feed(&mut controller, &mut state, intents);

    // Spätere Edits landen wieder in der History
    feed(
        &mut controller,
        &mut state,
        vec![EditorIntent::PlaceObjectRequested {
            world: Vec2::new(7.5, 7.5),
        }],
    );
    assert_eq!(state.history.active_len(), before + 1);
}

#[test]
fn context_menu_picks_and_sets_context_target() {
    let (mut controller, mut state) = editor();
    let mut input = InputState::new();

    feed(
        &mut controller,
        &mut state,
        vec![EditorIntent::PlaceObjectRequested {
            world: Vec2::new(2.5, 2.5),
        }],
    );
    let screen = screen_for_world(&state, Vec2::new(2.5, 2.5));

    let intents = input.handle_event(&state, InputEvent::ContextMenu { pos: screen }, 1.0);
    feed(&mut controller, &mut state, intents);

    assert!(state.ui.context_target.is_some());
    assert!(!state.selection.is_empty());
}
