//! Handler für Laufzeit-Optionen.

use crate::app::AppState;
use crate::shared::EditorOptions;

/// Übernimmt neue Optionen (Farben, Schwellwerte, Zeitfenster).
pub fn apply_options(state: &mut AppState, options: EditorOptions) {
    state.options = options;
    log::info!("Optionen angewendet");
}
