use crate::app::tools::{ToolId, ToolSet};

/// Zustand des aktuellen Editor-Werkzeugs
pub struct EditorToolState {
    /// Aktives Werkzeug
    pub active_tool: ToolId,
    /// Alle Tool-State-Machines (eine Instanz pro Werkzeug-Familie)
    pub tools: ToolSet,
}

impl Default for EditorToolState {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorToolState {
    /// Erstellt den Standard-Werkzeugzustand (Select-Tool aktiv).
    pub fn new() -> Self {
        Self {
            active_tool: ToolId::Select,
            tools: ToolSet::default(),
        }
    }
}
