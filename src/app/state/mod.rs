//! Application State — zentrale Datenhaltung.

mod app_state;
mod editor;
mod selection;
mod view;

pub use app_state::{AppState, UiState};
pub use editor::EditorToolState;
pub use selection::{SelectionRef, SelectionState};
pub use view::{BackgroundCalibration, ViewState};
