//! 2D-Kamera für Pan und Zoom über der Zeichenfläche.

use glam::Vec2;

/// 2D-Kamera mit Pan und Zoom.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera2D {
    /// Position der Kamera in Welt-Koordinaten
    pub position: Vec2,
    /// Zoom-Faktor (1.0 = normal, 2.0 = doppelt so groß)
    pub zoom: f32,
}

impl Camera2D {
    /// Sichtbare Welt-Halbhöhe bei Zoom 1.0.
    pub const BASE_WORLD_EXTENT: f32 = 512.0;
    /// Minimaler Zoom-Faktor.
    pub const ZOOM_MIN: f32 = 0.1;
    /// Maximaler Zoom-Faktor.
    pub const ZOOM_MAX: f32 = 64.0;

    /// Erstellt eine Kamera im Ursprung.
    pub fn new() -> Self {
        Self {
            position: Vec2::ZERO,
            zoom: 1.0,
        }
    }

    /// Zentriert die Kamera auf einen Weltpunkt.
    pub fn look_at(&mut self, target: Vec2) {
        self.position = target;
    }

    /// Verschiebt die Kamera um ein Welt-Delta.
    pub fn pan(&mut self, delta: Vec2) {
        self.position += delta;
    }

    /// Multipliziert den Zoom und klemmt auf den erlaubten Bereich.
    pub fn zoom_by(&mut self, factor: f32) {
        self.zoom_by_clamped(factor, Self::ZOOM_MIN, Self::ZOOM_MAX);
    }

    /// Multipliziert den Zoom mit konfigurierbaren Grenzen.
    pub fn zoom_by_clamped(&mut self, factor: f32, min: f32, max: f32) {
        self.zoom = (self.zoom * factor).clamp(min, max);
    }

    /// Zoomt so, dass `focus` seine Bildschirmposition behält.
    pub fn zoom_towards(&mut self, factor: f32, focus: Vec2) {
        let old_zoom = self.zoom;
        self.zoom_by(factor);
        let scale = old_zoom / self.zoom;
        self.position = focus + (self.position - focus) * scale;
    }

    /// Bildschirm- → Welt-Koordinaten.
    ///
    /// Bildschirm-Ursprung links oben, Y nach unten; Welt-Y wächst nach
    /// Norden. `screen_size` ist die Viewport-Größe in Pixeln.
    pub fn screen_to_world(&self, screen_pos: Vec2, screen_size: Vec2) -> Vec2 {
        let ndc = (screen_pos / screen_size) * 2.0 - Vec2::ONE;
        let aspect = screen_size.x / screen_size.y;
        Vec2::new(
            ndc.x * Self::BASE_WORLD_EXTENT * aspect / self.zoom,
            -ndc.y * Self::BASE_WORLD_EXTENT / self.zoom,
        ) + self.position
    }

    /// Welt- → Bildschirm-Koordinaten (Umkehrung von `screen_to_world`).
    pub fn world_to_screen(&self, world: Vec2, screen_size: Vec2) -> Vec2 {
        let rel = world - self.position;
        let aspect = screen_size.x / screen_size.y;
        let ndc = Vec2::new(
            rel.x * self.zoom / (Self::BASE_WORLD_EXTENT * aspect),
            -rel.y * self.zoom / Self::BASE_WORLD_EXTENT,
        );
        (ndc + Vec2::ONE) / 2.0 * screen_size
    }

    /// Umrechnungsfaktor Bildschirm-Pixel → Welt-Einheiten.
    pub fn world_per_pixel(&self, viewport_height: f32) -> f32 {
        2.0 * Self::BASE_WORLD_EXTENT / (self.zoom * viewport_height.max(1.0))
    }

    /// Pixel-Radius in Welt-Einheiten (für Hit-Tests).
    pub fn pick_radius_world(&self, viewport_height: f32, pick_radius_px: f32) -> f32 {
        pick_radius_px * self.world_per_pixel(viewport_height)
    }
}

impl Default for Camera2D {
    fn default() -> Self {
        Self::new()
    }
}
