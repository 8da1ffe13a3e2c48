//! Hex-Geometrie: spitzes (pointy-top) Gitter in Axialkoordinaten `(q, r)`.
//!
//! Kanten- und Ecken-Projektion sind hier bewusst nicht definiert — die
//! Kanten-Tools und die Diagonal-Füllung melden auf Hex-Gittern "nicht
//! behandelt". Dafür erlaubt das Hex-Gitter bis zu vier Objekte pro Zelle
//! (Slots 0–3).

use super::{CellCoord, CornerPoint, GridBounds, MapGeometry};
use crate::core::edge::EdgeKey;
use glam::Vec2;

const SQRT_3: f32 = 1.732_050_8;

/// Spitzes Axial-Hexgitter mit Umkreisradius `hex_size` pro Zelle.
#[derive(Debug, Clone)]
pub struct HexGrid {
    /// Umkreisradius einer Hexzelle in Welteinheiten
    pub hex_size: f32,
    /// Optionale inklusive Axial-Grenzen
    pub bounds: Option<GridBounds>,
}

impl HexGrid {
    /// Erstellt ein unbegrenztes Hexgitter.
    pub fn new(hex_size: f32) -> Self {
        Self {
            hex_size,
            bounds: None,
        }
    }

    /// Rundet fraktionale Axialkoordinaten auf die nächste Hexzelle.
    ///
    /// Standard-Cube-Rounding: die Komponente mit dem größten Rundungsfehler
    /// wird aus den beiden anderen rekonstruiert.
    fn axial_round(q: f32, r: f32) -> CellCoord {
        let s = -q - r;
        let (mut rq, mut rr) = (q.round(), r.round());
        let rs = s.round();

        let dq = (rq - q).abs();
        let dr = (rr - r).abs();
        let ds = (rs - s).abs();

        if dq > dr && dq > ds {
            rq = -rr - rs;
        } else if dr > ds {
            rr = -rq - rs;
        }
        (rq as i32, rr as i32)
    }
}

impl MapGeometry for HexGrid {
    fn world_to_grid(&self, world: Vec2) -> Option<CellCoord> {
        if !world.is_finite() {
            return None;
        }
        let q = (SQRT_3 / 3.0 * world.x - 1.0 / 3.0 * world.y) / self.hex_size;
        let r = (2.0 / 3.0 * world.y) / self.hex_size;
        if q.abs() >= i32::MAX as f32 || r.abs() >= i32::MAX as f32 {
            return None;
        }
        Some(Self::axial_round(q, r))
    }

    fn grid_to_world(&self, cell: CellCoord) -> Vec2 {
        let (q, r) = (cell.0 as f32, cell.1 as f32);
        Vec2::new(
            self.hex_size * SQRT_3 * (q + r / 2.0),
            self.hex_size * 1.5 * r,
        )
    }

    fn cells_in_rectangle(&self, a: CellCoord, b: CellCoord) -> Vec<CellCoord> {
        // Axialer Bereich: Rechteck im (q, r)-Raum
        let (q0, q1) = (a.0.min(b.0), a.0.max(b.0));
        let (r0, r1) = (a.1.min(b.1), a.1.max(b.1));
        let mut cells = Vec::with_capacity(((q1 - q0 + 1) * (r1 - r0 + 1)) as usize);
        for r in r0..=r1 {
            for q in q0..=q1 {
                cells.push((q, r));
            }
        }
        cells
    }

    fn cells_in_circle(&self, center: CellCoord, radius: i32) -> Vec<CellCoord> {
        let r = radius.max(0);
        let mut cells = Vec::new();
        for dq in -r..=r {
            let lo = (-r).max(-dq - r);
            let hi = r.min(-dq + r);
            for dr in lo..=hi {
                cells.push((center.0 + dq, center.1 + dr));
            }
        }
        cells
    }

    fn cell_distance(&self, a: CellCoord, b: CellCoord) -> i32 {
        let dq = a.0 - b.0;
        let dr = a.1 - b.1;
        (dq.abs() + dr.abs() + (dq + dr).abs()) / 2
    }

    fn world_to_edge(&self, _world: Vec2, _threshold: f32) -> Option<EdgeKey> {
        None
    }

    fn corner_at(&self, _world: Vec2) -> Option<CornerPoint> {
        None
    }

    fn cell_local(&self, _world: Vec2) -> Option<(CellCoord, Vec2)> {
        None
    }

    fn is_within_bounds(&self, cell: CellCoord) -> bool {
        self.bounds.map_or(true, |b| b.contains(cell))
    }

    fn bounds(&self) -> Option<GridBounds> {
        self.bounds
    }

    fn slot_capacity(&self) -> u8 {
        4
    }
}
