//! Mapping von UI-Intents auf mutierende Editor-Commands.
//!
//! Die meisten Intents übersetzen sich 1:1; zustandsabhängig sind nur die
//! stufenweise Escape-Logik und der Gestenstart auf Zeichen-Werkzeugen,
//! der eine bestehende Selektion zuerst aufhebt.

use super::{AppState, EditorCommand, EditorIntent};

/// Übersetzt einen `EditorIntent` in eine Sequenz ausführbarer
/// `EditorCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: EditorIntent) -> Vec<EditorCommand> {
    match intent {
        EditorIntent::ToolStrokeBegan { world, source } => {
            let mut commands = Vec::new();
            // Zeichnen startet nie mit fortbestehender Selektion
            if state.editor.active_tool.is_drawing() && !state.selection.is_empty() {
                commands.push(EditorCommand::ClearSelection);
            }
            commands.push(EditorCommand::ToolBegin { world, source });
            commands
        }
        EditorIntent::ToolStrokeMoved { world, source } => {
            vec![EditorCommand::ToolUpdate { world, source }]
        }
        EditorIntent::ToolStrokeEnded { world, source } => {
            vec![EditorCommand::ToolEnd { world, source }]
        }
        EditorIntent::ToolStrokeCancelled => vec![EditorCommand::CancelAllTools],

        EditorIntent::ItemPickRequested { world, additive } => {
            vec![EditorCommand::PickItem { world, additive }]
        }
        EditorIntent::DeselectRequested => vec![EditorCommand::ClearSelection],
        EditorIntent::GroupDragStarted { world } => vec![EditorCommand::GroupDragBegin { world }],
        EditorIntent::GroupDragMoved { world } => vec![EditorCommand::GroupDragUpdate { world }],
        EditorIntent::GroupDragEnded => vec![EditorCommand::GroupDragEnd],
        EditorIntent::ResizeStarted { world } => vec![EditorCommand::ResizeBegin { world }],
        EditorIntent::ResizeMoved { world } => vec![EditorCommand::ResizeUpdate { world }],
        EditorIntent::ResizeEnded => vec![EditorCommand::ResizeEnd],

        // Escape bricht stufenweise ab: laufende Geste → Selektion →
        // zurück zum Select-Werkzeug
        EditorIntent::EscapePressed => {
            if state.editor.tools.any_active() {
                vec![EditorCommand::CancelAllTools]
            } else if !state.selection.is_empty() {
                vec![EditorCommand::ClearSelection]
            } else {
                vec![EditorCommand::SetTool {
                    tool: Default::default(),
                }]
            }
        }
        EditorIntent::DeleteSelectedRequested => vec![EditorCommand::DeleteSelected],
        EditorIntent::SetToolRequested { tool } => vec![EditorCommand::SetTool { tool }],
        EditorIntent::UndoRequested => vec![EditorCommand::Undo],
        EditorIntent::RedoRequested => vec![EditorCommand::Redo],

        EditorIntent::CameraPan { delta } => vec![EditorCommand::PanCamera { delta }],
        EditorIntent::CameraZoom {
            factor,
            focus_world,
        } => vec![EditorCommand::ZoomCamera {
            factor,
            focus_world,
        }],
        EditorIntent::ZoomInRequested => vec![EditorCommand::ZoomIn],
        EditorIntent::ZoomOutRequested => vec![EditorCommand::ZoomOut],
        EditorIntent::ResetCameraRequested => vec![EditorCommand::ResetCamera],
        EditorIntent::ViewportResized { size } => vec![EditorCommand::SetViewportSize { size }],

        EditorIntent::SegmentPickToggled { corner } => {
            vec![EditorCommand::ToggleSegmentPick { corner }]
        }
        EditorIntent::SegmentPickConfirmed => vec![EditorCommand::ConfirmSegmentPick],

        EditorIntent::LabelEditRequested { world } => {
            vec![EditorCommand::RequestLabelEdit { world }]
        }
        EditorIntent::LabelEditApplied { label } => vec![EditorCommand::ApplyLabelEdit { label }],
        EditorIntent::ContextTargetRequested { world } => {
            vec![EditorCommand::SetContextTarget { world }]
        }

        EditorIntent::PlaceObjectRequested { world } => vec![EditorCommand::PlaceObject { world }],
        EditorIntent::DuplicateSelectedRequested => vec![EditorCommand::DuplicateSelected],
        EditorIntent::SetObjectColorRequested { id, color } => {
            vec![EditorCommand::SetObjectColor { id, color }]
        }
        EditorIntent::SetObjectRotationRequested { id, rotation } => {
            vec![EditorCommand::SetObjectRotation { id, rotation }]
        }
        EditorIntent::PlaceLabelRequested { world, content } => {
            vec![EditorCommand::PlaceLabel { world, content }]
        }

        EditorIntent::AddLayerRequested => vec![EditorCommand::AddLayer],
        EditorIntent::RemoveLayerRequested { id } => vec![EditorCommand::RemoveLayer { id }],
        EditorIntent::SetActiveLayerRequested { id } => vec![EditorCommand::SetActiveLayer { id }],

        EditorIntent::OptionsChanged { options } => vec![EditorCommand::ApplyOptions { options }],
    }
}

#[cfg(test)]
mod tests;
