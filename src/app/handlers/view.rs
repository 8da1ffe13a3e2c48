//! Handler für Kamera und Viewport.

use crate::app::use_cases::{camera, viewport};
use crate::app::AppState;

/// Setzt die Kamera auf den Standardzustand zurück.
pub fn reset_camera(state: &mut AppState) {
    camera::reset_camera(state);
}

/// Zoomt eine Stufe hinein.
pub fn zoom_in(state: &mut AppState) {
    camera::zoom_in(state);
}

/// Zoomt eine Stufe heraus.
pub fn zoom_out(state: &mut AppState) {
    camera::zoom_out(state);
}

/// Verschiebt die Kamera um ein Welt-Delta.
pub fn pan_camera(state: &mut AppState, delta: glam::Vec2) {
    camera::pan(state, delta);
}

/// Zoomt um einen Faktor, optional fokus-stabil auf einen Weltpunkt.
pub fn zoom_camera(state: &mut AppState, factor: f32, focus_world: Option<glam::Vec2>) {
    camera::zoom_towards(state, factor, focus_world);
}

/// Setzt die Viewport-Größe in Pixeln.
pub fn set_viewport_size(state: &mut AppState, size: [f32; 2]) {
    viewport::resize(state, size);
}
