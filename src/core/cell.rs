//! Zellen: eine bemalbare Gitter-/Hex-Koordinate mit optionalen Segmenten.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// RGBA-Farbe (0.0–1.0 pro Kanal), Alpha = Deckkraft.
pub type Rgba = [f32; 4];

/// Benannte Ecke einer Zelle — Schlüssel für Halbzellen-Segmente.
///
/// Ein Segment ist die dreieckige Zellhälfte, deren Hypotenuse die Diagonale
/// durch die benannte Ecke ist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SegmentCorner {
    NorthWest,
    NorthEast,
    SouthEast,
    SouthWest,
}

impl SegmentCorner {
    /// Alle vier Ecken in stabiler Reihenfolge.
    pub const ALL: [SegmentCorner; 4] = [
        SegmentCorner::NorthWest,
        SegmentCorner::NorthEast,
        SegmentCorner::SouthEast,
        SegmentCorner::SouthWest,
    ];

    /// Die diagonal gegenüberliegende Ecke.
    pub fn opposite(self) -> SegmentCorner {
        match self {
            SegmentCorner::NorthWest => SegmentCorner::SouthEast,
            SegmentCorner::NorthEast => SegmentCorner::SouthWest,
            SegmentCorner::SouthEast => SegmentCorner::NorthWest,
            SegmentCorner::SouthWest => SegmentCorner::NorthEast,
        }
    }
}

/// Eine Zelle: optionale Vollfüllung plus bemalte Halbzellen-Segmente.
///
/// Invariante (vom Mutations-Boundary durchgesetzt): eine Zelle ohne Füllung
/// und ohne Segmente wird nicht persistiert, sondern aus der Collection
/// entfernt.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    /// Vollflächige Füllfarbe (None = nur Segmente bemalt)
    pub fill: Option<Rgba>,
    /// Bemalte Segmente, geordnet für deterministische Iteration
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub segments: BTreeMap<SegmentCorner, Rgba>,
}

impl Cell {
    /// Erstellt eine vollflächig gefüllte Zelle.
    pub fn filled(color: Rgba) -> Self {
        Self {
            fill: Some(color),
            segments: BTreeMap::new(),
        }
    }

    /// Gibt `true` zurück wenn weder Füllung noch Segmente vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.fill.is_none() && self.segments.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filled_cell_is_not_empty() {
        let cell = Cell::filled([1.0, 0.0, 0.0, 1.0]);
        assert!(!cell.is_empty());
    }

    #[test]
    fn default_cell_is_empty() {
        assert!(Cell::default().is_empty());
    }

    #[test]
    fn segment_only_cell_is_not_empty() {
        let mut cell = Cell::default();
        cell.segments
            .insert(SegmentCorner::NorthWest, [0.0, 1.0, 0.0, 1.0]);
        assert!(!cell.is_empty());
    }

    #[test]
    fn opposite_corners_roundtrip() {
        for corner in SegmentCorner::ALL {
            assert_eq!(corner.opposite().opposite(), corner);
        }
    }
}
