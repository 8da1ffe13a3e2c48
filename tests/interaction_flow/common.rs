//! Gemeinsame Helfer für die Integrationstests.

use mapwright::{
    AppController, AppState, EditorIntent, MapGeometry, PointerSource, ToolId,
};

/// Initialisiert Test-Logging (einmalig, Fehlversuche sind ok).
pub fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Controller + State mit gesetztem Viewport.
pub fn editor() -> (AppController, AppState) {
    init_logs();
    let mut state = AppState::new();
    state.view.viewport_size = [1280.0, 720.0];
    (AppController::new(), state)
}

/// Wie `editor`, aber mit expliziter Gitter-Geometrie.
pub fn editor_with(geometry: Box<dyn MapGeometry>) -> (AppController, AppState) {
    init_logs();
    let mut state = AppState::with_geometry(geometry);
    state.view.viewport_size = [1280.0, 720.0];
    (AppController::new(), state)
}

/// Schaltet das Werkzeug per Intent um.
pub fn set_tool(controller: &mut AppController, state: &mut AppState, tool: ToolId) {
    controller
        .handle_intent(state, EditorIntent::SetToolRequested { tool })
        .expect("Werkzeugwechsel");
}

/// Fährt einen Maus-Strich über die Zellmittelpunkte.
pub fn mouse_stroke(controller: &mut AppController, state: &mut AppState, cells: &[(i32, i32)]) {
    let source = PointerSource::Mouse;
    let world = |cell: &(i32, i32)| glam::Vec2::new(cell.0 as f32 + 0.5, cell.1 as f32 + 0.5);
    let (first, rest) = cells.split_first().expect("Strich braucht Zellen");
    controller
        .handle_intent(
            state,
            EditorIntent::ToolStrokeBegan {
                world: world(first),
                source,
            },
        )
        .expect("Strich-Start");
    for cell in rest {
        controller
            .handle_intent(
                state,
                EditorIntent::ToolStrokeMoved {
                    world: world(cell),
                    source,
                },
            )
            .expect("Strich-Schritt");
    }
    let last = cells.last().expect("Strich braucht Zellen");
    controller
        .handle_intent(
            state,
            EditorIntent::ToolStrokeEnded {
                world: world(last),
                source,
            },
        )
        .expect("Strich-Ende");
}

/// Ein Klick (Began + Ended) an einem Zellmittelpunkt.
pub fn click_cell(controller: &mut AppController, state: &mut AppState, cell: (i32, i32)) {
    mouse_stroke(controller, state, &[cell]);
}
