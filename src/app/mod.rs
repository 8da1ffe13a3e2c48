//! Application-Layer: Controller, State, Events, Handler und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
pub mod history;
pub mod intent_mapping;
/// Application State
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Dokument, View, Tools).
pub mod state;
pub mod tools;
pub mod use_cases;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{EditorCommand, EditorIntent, PointerSource};
pub use history::HistoryState;
pub use intent_mapping::map_intent_to_commands;
pub use state::{AppState, SelectionRef, SelectionState, UiState, ViewState};
pub use tools::{ToolCtx, ToolId, ToolSet};
