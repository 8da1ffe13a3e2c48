use crate::app::history::HistoryState;
use crate::app::CommandLog;
use crate::core::{MapDocument, MapGeometry, SquareGrid};
use crate::shared::EditorOptions;

use super::{EditorToolState, SelectionRef, SelectionState, ViewState};

/// Anfragen an den Host, die dieser Kern nicht selbst erfüllt
/// (Dialoge, Kontextmenüs). Der Host liest und löscht die Felder.
#[derive(Default)]
pub struct UiState {
    /// Label, für das der Host einen Editier-Dialog öffnen soll
    pub pending_label_edit: Option<u64>,
    /// Ziel des zuletzt angeforderten Kontextmenüs
    pub context_target: Option<SelectionRef>,
}

impl UiState {
    /// Erstellt den Standard-UI-Zustand (keine offenen Anfragen).
    pub fn new() -> Self {
        Self::default()
    }
}

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Das geteilte Map-Dokument (alle Layer)
    pub document: MapDocument,
    /// Koordinaten-Mathematik des aktiven Gitters
    pub geometry: Box<dyn MapGeometry>,
    /// View-State
    pub view: ViewState,
    /// UI-State (Host-Anfragen)
    pub ui: UiState,
    /// Selection-State
    pub selection: SelectionState,
    /// Editor-Werkzeug-State
    pub editor: EditorToolState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Undo/Redo-History (Snapshot-basiert, pro Layer)
    pub history: HistoryState,
    /// Laufzeit-Optionen (Farben, Zeitfenster, Schwellwerte)
    pub options: EditorOptions,
}

impl AppState {
    /// Erstellt einen neuen App-State auf einem unbegrenzten Quadratgitter.
    pub fn new() -> Self {
        Self::with_geometry(Box::new(SquareGrid::new(1.0)))
    }

    /// Erstellt einen App-State mit expliziter Gitter-Geometrie.
    pub fn with_geometry(geometry: Box<dyn MapGeometry>) -> Self {
        let document = MapDocument::new();
        let options = EditorOptions::default();
        let history = HistoryState::new(options.history_max_depth, document.active_arc());
        Self {
            document,
            geometry,
            view: ViewState::new(),
            ui: UiState::new(),
            selection: SelectionState::new(),
            editor: EditorToolState::new(),
            command_log: CommandLog::new(),
            history,
            options,
        }
    }

    /// Undo/Redo helpers
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Gibt zurück, ob ein Redo-Schritt verfügbar ist.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
