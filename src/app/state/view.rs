use crate::core::Camera2D;
use glam::Vec2;

/// Kalibrierung des Hintergrundbilds (das Bild selbst rendert der Host).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackgroundCalibration {
    /// Verschiebung des Bildursprungs in Welteinheiten
    pub offset: Vec2,
    /// Skalierungsfaktor (1.0 = Original)
    pub scale: f32,
    /// Sichtbarkeit
    pub visible: bool,
    /// Deckkraft (0.0 = transparent, 1.0 = opak)
    pub opacity: f32,
}

impl Default for BackgroundCalibration {
    fn default() -> Self {
        Self {
            offset: Vec2::ZERO,
            scale: 1.0,
            visible: true,
            opacity: 1.0,
        }
    }
}

/// View-bezogener Anwendungszustand
#[derive(Default)]
pub struct ViewState {
    /// 2D-Kamera für die Ansicht
    pub camera: Camera2D,
    /// Aktuelle Viewport-Größe in Pixel
    pub viewport_size: [f32; 2],
    /// Ausrichtung des Hintergrundbilds (Image-Align-Tool)
    pub background: BackgroundCalibration,
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand.
    pub fn new() -> Self {
        Self {
            camera: Camera2D::new(),
            viewport_size: [0.0, 0.0],
            background: BackgroundCalibration::default(),
        }
    }

    /// Viewport-Größe als Vec2.
    pub fn viewport_vec(&self) -> Vec2 {
        Vec2::new(self.viewport_size[0], self.viewport_size[1])
    }
}
