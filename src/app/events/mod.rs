//! EditorIntent- und EditorCommand-Enums für den Intent/Command-Datenfluss.

mod command;
mod intent;

pub use command::EditorCommand;
pub use intent::EditorIntent;

/// Herkunft eines Zeiger-Events. Touch-Eingaben schalten bei einigen Tools
/// zusätzliche Bestätigungsschritte frei (Dritt-Tap, Segment-Picker).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerSource {
    #[default]
    Mouse,
    Touch,
}

impl PointerSource {
    /// Gibt `true` für Touch-Eingaben zurück.
    pub fn is_touch(self) -> bool {
        self == PointerSource::Touch
    }
}
