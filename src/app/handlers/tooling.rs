//! Handler für Werkzeugwechsel und den Tool-Gesten-Lebenszyklus.
//!
//! Die Tool-State-Machines brauchen disjunkte Borrows auf Dokument,
//! History, Selektion und View; `with_tool_ctx` destrukturiert den
//! `AppState` dafür in einen expliziten `ToolCtx`.

use crate::app::events::PointerSource;
use crate::app::tools::{ToolCtx, ToolId, ToolSet};
use crate::app::AppState;
use crate::core::SegmentCorner;

/// Baut den Tool-Kontext aus disjunkten State-Borrows und reicht ihn
/// zusammen mit dem ToolSet an die Aktion.
pub(crate) fn with_tool_ctx<R>(
    state: &mut AppState,
    source: PointerSource,
    action: impl FnOnce(&mut ToolSet, ToolId, &mut ToolCtx) -> R,
) -> R {
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
        source,
    };
    action(&mut editor.tools, editor.active_tool, &mut ctx)
}

/// Wechselt das aktive Werkzeug.
///
/// Bricht alle laufenden Gesten ab; der Wechsel auf ein Zeichen-Werkzeug
/// hebt zusätzlich die Selektion auf.
pub fn set_tool(state: &mut AppState, tool: ToolId) {
    if state.editor.active_tool == tool {
        return;
    }
    with_tool_ctx(state, PointerSource::Mouse, |tools, _, ctx| {
        tools.cancel_all(ctx);
    });
    if tool.is_drawing() {
        state.selection.clear();
    }
    state.editor.active_tool = tool;
    log::info!("Werkzeug gewechselt: {:?}", tool);
}

/// Geste auf dem aktiven Werkzeug beginnen.
pub fn tool_begin(state: &mut AppState, world: glam::Vec2, source: PointerSource) {
    with_tool_ctx(state, source, |tools, active, ctx| {
        tools.begin(active, ctx, world);
    });
}

/// Geste auf dem aktiven Werkzeug fortsetzen.
pub fn tool_update(state: &mut AppState, world: glam::Vec2, source: PointerSource) {
    with_tool_ctx(state, source, |tools, active, ctx| {
        tools.update(active, ctx, world);
    });
}

/// Geste auf dem aktiven Werkzeug beenden.
pub fn tool_end(state: &mut AppState, world: glam::Vec2, source: PointerSource) {
    with_tool_ctx(state, source, |tools, active, ctx| {
        tools.end(active, ctx, world);
    });
}

/// Setzt alle Tool-State-Machines zurück.
pub fn cancel_all_tools(state: &mut AppState) {
    with_tool_ctx(state, PointerSource::Mouse, |tools, _, ctx| {
        tools.cancel_all(ctx);
    });
}

/// Segment im Touch-Picker an- oder abwählen.
pub fn toggle_segment_pick(state: &mut AppState, corner: SegmentCorner) {
    state.editor.tools.segment.toggle_pick(corner);
}

/// Touch-Picker bestätigen.
pub fn confirm_segment_pick(state: &mut AppState) {
    with_tool_ctx(state, PointerSource::Touch, |tools, _, ctx| {
        tools.segment.confirm_pick(ctx);
    });
}
