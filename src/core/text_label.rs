//! Freitext-Labels in Weltkoordinaten (nicht gitter-gerastert).

use super::cell::Rgba;
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Punktgröße, die einer Gittereinheit Zeilenhöhe entspricht.
pub const LABEL_POINTS_PER_WORLD_UNIT: f32 = 16.0;

/// Erlaubte Label-Rotationen in 90°-Schritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LabelRotation {
    #[default]
    R0,
    R90,
    R180,
    R270,
}

impl LabelRotation {
    /// Rotation in Grad.
    pub fn degrees(self) -> f32 {
        match self {
            LabelRotation::R0 => 0.0,
            LabelRotation::R90 => 90.0,
            LabelRotation::R180 => 180.0,
            LabelRotation::R270 => 270.0,
        }
    }
}

/// Ein Textlabel. Labels dürfen einander überlappen und werden nie
/// kollisionsgeprüft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextLabel {
    pub id: u64,
    /// Weltposition des Label-Zentrums
    pub position: Vec2,
    pub content: String,
    pub font_size: f32,
    pub font_face: String,
    pub color: Rgba,
    #[serde(default)]
    pub rotation: LabelRotation,
}

impl TextLabel {
    /// Erstellt ein Label mit Standard-Schrift.
    pub fn new(id: u64, position: Vec2, content: impl Into<String>) -> Self {
        Self {
            id,
            position,
            content: content.into(),
            font_size: 16.0,
            font_face: "sans-serif".to_string(),
            color: [0.0, 0.0, 0.0, 1.0],
            rotation: LabelRotation::R0,
        }
    }

    /// Zeilenhöhe in Welteinheiten. `font_size` ist in Punkten angegeben;
    /// [`LABEL_POINTS_PER_WORLD_UNIT`] Punkte entsprechen einer
    /// Gittereinheit, damit ein 16-Punkt-Label eine Zelle hoch ist.
    pub fn world_height(&self) -> f32 {
        self.font_size / LABEL_POINTS_PER_WORLD_UNIT
    }

    /// Näherungs-Radius für Hit-Tests in Welteinheiten, abgeleitet aus
    /// der Schriftgröße.
    pub fn hit_radius(&self) -> f32 {
        // Halbe Zeilenhöhe plus Breiten-Näherung über die Zeichenanzahl
        let height = self.world_height();
        let half_height = height * 0.75;
        let half_width = height * 0.3 * self.content.chars().count().max(1) as f32;
        half_height.max(half_width)
    }
}
