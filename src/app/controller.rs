//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppState, EditorCommand, EditorIntent};

/// Orchestriert Intents und Commands auf dem AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(
        &mut self,
        state: &mut AppState,
        intent: EditorIntent,
    ) -> anyhow::Result<()> {
        let commands = super::intent_mapping::map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: EditorCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(command.clone());
        use super::handlers;

        match command {
            // === Werkzeuge ===
            EditorCommand::SetTool { tool } => handlers::tooling::set_tool(state, tool),
            EditorCommand::ToolBegin { world, source } => {
                handlers::tooling::tool_begin(state, world, source)
            }
            EditorCommand::ToolUpdate { world, source } => {
                handlers::tooling::tool_update(state, world, source)
            }
            EditorCommand::ToolEnd { world, source } => {
                handlers::tooling::tool_end(state, world, source)
            }
            EditorCommand::CancelAllTools => handlers::tooling::cancel_all_tools(state),
            EditorCommand::ToggleSegmentPick { corner } => {
                handlers::tooling::toggle_segment_pick(state, corner)
            }
            EditorCommand::ConfirmSegmentPick => handlers::tooling::confirm_segment_pick(state),

            // === Selektion & Drag ===
            EditorCommand::PickItem { world, additive } => {
                handlers::selection::pick_item(state, world, additive)
            }
            EditorCommand::ClearSelection => handlers::selection::clear_selection(state),
            EditorCommand::DeleteSelected => handlers::selection::delete_selected(state),
            EditorCommand::GroupDragBegin { world } => {
                handlers::selection::group_drag_begin(state, world)
            }
            EditorCommand::GroupDragUpdate { world } => {
                handlers::selection::group_drag_update(state, world)
            }
            EditorCommand::GroupDragEnd => handlers::selection::group_drag_end(state),
            EditorCommand::ResizeBegin { world } => handlers::selection::resize_begin(state, world),
            EditorCommand::ResizeUpdate { world } => {
                handlers::selection::resize_update(state, world)
            }
            EditorCommand::ResizeEnd => handlers::selection::resize_end(state),

            // === History ===
            EditorCommand::Undo => handlers::history::undo(state),
            EditorCommand::Redo => handlers::history::redo(state),

            // === Kamera & Viewport ===
            EditorCommand::PanCamera { delta } => handlers::view::pan_camera(state, delta),
            EditorCommand::ZoomCamera {
                factor,
                focus_world,
            } => handlers::view::zoom_camera(state, factor, focus_world),
            EditorCommand::ZoomIn => handlers::view::zoom_in(state),
            EditorCommand::ZoomOut => handlers::view::zoom_out(state),
            EditorCommand::ResetCamera => handlers::view::reset_camera(state),
            EditorCommand::SetViewportSize { size } => {
                handlers::view::set_viewport_size(state, size)
            }

            // === Host-Dialoge ===
            EditorCommand::RequestLabelEdit { world } => {
                handlers::selection::request_label_edit(state, world)
            }
            EditorCommand::ApplyLabelEdit { label } => {
                handlers::items::apply_label_edit(state, label)
            }
            EditorCommand::SetContextTarget { world } => {
                handlers::selection::set_context_target(state, world)
            }

            // === Objekte & Labels ===
            EditorCommand::PlaceObject { world } => handlers::items::place_object(state, world),
            EditorCommand::DuplicateSelected => handlers::items::duplicate_selected(state),
            EditorCommand::SetObjectColor { id, color } => {
                handlers::items::set_object_color(state, id, color)
            }
            EditorCommand::SetObjectRotation { id, rotation } => {
                handlers::items::set_object_rotation(state, id, rotation)
            }
            EditorCommand::PlaceLabel { world, content } => {
                handlers::items::place_label(state, world, &content)
            }

            // === Layer ===
            EditorCommand::AddLayer => handlers::layers::add_layer(state),
            EditorCommand::RemoveLayer { id } => handlers::layers::remove_layer(state, id),
            EditorCommand::SetActiveLayer { id } => handlers::layers::set_active_layer(state, id),

            // === Optionen ===
            EditorCommand::ApplyOptions { options } => {
                handlers::settings::apply_options(state, options)
            }
        }

        Ok(())
    }
}
