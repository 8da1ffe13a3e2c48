//! Eingabe-Koordinator: rohe Canvas-Events → EditorIntents.
//!
//! Einzige Instanz, die entscheidet, was ein Eingabe-Event gerade bedeutet:
//! Touch/Maus-Disambiguierung, Zwei-Finger-Erkennung, aufgeschobene Taps
//! und die Select-Tool-Trefferreihenfolge. Der Host füttert Events samt
//! monotoner Uhrzeit ein und reicht die Intents an den Controller weiter.

mod coordinator;

pub use coordinator::InputState;

use glam::Vec2;

/// Maustasten, die der Koordinator unterscheidet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

/// Tasten mit Editor-Bedeutung. Alles andere filtert der Host vorab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Delete,
    Z,
    Y,
    /// Zifferntasten 0–9 (Werkzeugwahl)
    Digit(u8),
}

/// Rohe Eingabe-Events der Zeichenfläche. Positionen in Screen-Pixeln
/// relativ zur linken oberen Ecke des Viewports.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerDown {
        pos: Vec2,
        button: PointerButton,
        /// Ctrl/Cmd gedrückt (additive Selektion)
        ctrl: bool,
    },
    PointerMove {
        pos: Vec2,
    },
    PointerUp {
        pos: Vec2,
        button: PointerButton,
    },
    /// Zeiger verlässt die Zeichenfläche
    PointerLeave,
    TouchStart {
        id: u64,
        pos: Vec2,
    },
    TouchMove {
        id: u64,
        pos: Vec2,
    },
    TouchEnd {
        id: u64,
        pos: Vec2,
    },
    /// Mausrad (`delta > 0` = hineinzoomen)
    Wheel {
        pos: Vec2,
        delta: f32,
    },
    KeyDown {
        key: Key,
        ctrl: bool,
        shift: bool,
    },
    DoubleClick {
        pos: Vec2,
    },
    ContextMenu {
        pos: Vec2,
    },
}
