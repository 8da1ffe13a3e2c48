//! Platzierte Map-Objekte (Tokens) mit Größe, Rotation und Hex-Slot.

use super::cell::Rgba;
use super::geometry::CellCoord;
use serde::{Deserialize, Serialize};

/// Maximale Objekt-Ausdehnung pro Achse in Gitterzellen.
pub const OBJECT_MAX_SPAN: i32 = 10;

/// Objektgröße in Gitterzellen (Standard 1×1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectSize {
    pub width: i32,
    pub height: i32,
}

impl ObjectSize {
    /// 1×1-Größe.
    pub const UNIT: ObjectSize = ObjectSize {
        width: 1,
        height: 1,
    };

    /// Klemmt beide Achsen auf `1..=OBJECT_MAX_SPAN`.
    pub fn clamped(width: i32, height: i32) -> Self {
        Self {
            width: width.clamp(1, OBJECT_MAX_SPAN),
            height: height.clamp(1, OBJECT_MAX_SPAN),
        }
    }
}

impl Default for ObjectSize {
    fn default() -> Self {
        Self::UNIT
    }
}

/// Ein platziertes Map-Objekt.
///
/// Invariante: achsenparallele Bounding-Boxen zweier Objekte dürfen sich
/// nicht überlappen — außer auf Hex-Gittern, wo bis zu vier Objekte per
/// `slot` (0–3) auf derselben Zelle koexistieren. Die Prüfung geschieht
/// prospektiv bei Platzierung, Move, Resize und Duplizieren.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapObject {
    pub id: u64,
    /// Gitterposition der linken unteren Ecke
    pub position: CellCoord,
    #[serde(default)]
    pub size: ObjectSize,
    /// Rotation in Grad
    #[serde(default)]
    pub rotation: f32,
    /// Darstellungs-Skalierung (1.0 = zellfüllend)
    #[serde(default = "default_scale")]
    pub scale: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Rgba>,
    /// Hex-Subzellen-Slot 0–3 (nur auf Hex-Gittern belegt)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slot: Option<u8>,
    /// Verknüpfte Notiz (Inhalt lebt beim Host)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note_id: Option<u64>,
}

fn default_scale() -> f32 {
    1.0
}

impl MapObject {
    /// Erstellt ein 1×1-Objekt ohne Rotation an der gegebenen Position.
    pub fn new(id: u64, position: CellCoord) -> Self {
        Self {
            id,
            position,
            size: ObjectSize::UNIT,
            rotation: 0.0,
            scale: 1.0,
            color: None,
            slot: None,
            note_id: None,
        }
    }

    /// Achsenparallele Bounding-Box in Gitterzellen: `(min, max)` exklusiv
    /// in beiden Max-Komponenten.
    pub fn grid_aabb(&self) -> (CellCoord, CellCoord) {
        let (x, y) = self.position;
        ((x, y), (x + self.size.width, y + self.size.height))
    }

    /// Prüft AABB-Überlappung mit einem anderen Objekt.
    ///
    /// Objekte mit unterschiedlichen Slots auf derselben Zelle überlappen
    /// per Definition nicht (Hex-Slotting).
    pub fn overlaps(&self, other: &MapObject) -> bool {
        if let (Some(a), Some(b)) = (self.slot, other.slot) {
            if self.position == other.position && a != b {
                return false;
            }
        }
        let (amin, amax) = self.grid_aabb();
        let (bmin, bmax) = other.grid_aabb();
        amin.0 < bmax.0 && bmin.0 < amax.0 && amin.1 < bmax.1 && bmin.1 < amax.1
    }
}
