//! Geometrie-Schnittstelle: Gitter↔Welt-Konvertierung und Zell-Enumeration.
//!
//! Die Interaktionsschicht konsumiert Geometrie ausschließlich über das
//! `MapGeometry`-Trait. Zwei Implementierungen liegen bei: quadratisches
//! Gitter (`SquareGrid`, volle Feature-Abdeckung) und spitzes Axial-Hex
//! (`HexGrid`, ohne Kanten-/Ecken-Projektion — die betroffenen Tools melden
//! dort "nicht behandelt").

mod hex;
mod square;

pub use hex::HexGrid;
pub use square::SquareGrid;

use super::edge::EdgeKey;
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Gitterkoordinate: `(x, y)` auf dem Quadratgitter, `(q, r)` axial auf Hex.
pub type CellCoord = (i32, i32);

/// Gitter-Eckpunkt. Der Punkt `(x, y)` berührt die Zellen
/// `(x-1, y-1)`, `(x, y-1)`, `(x-1, y)` und `(x, y)`.
pub type CornerPoint = (i32, i32);

/// Inklusive Gittergrenzen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridBounds {
    pub min: CellCoord,
    pub max: CellCoord,
}

impl GridBounds {
    /// Prüft ob eine Zelle innerhalb der Grenzen liegt.
    pub fn contains(&self, cell: CellCoord) -> bool {
        cell.0 >= self.min.0 && cell.0 <= self.max.0 && cell.1 >= self.min.1 && cell.1 <= self.max.1
    }
}

/// Capability-Schnittstelle der Koordinaten-Mathematik.
///
/// Alle Methoden sind zustandslos-deterministisch. `None`-Rückgaben bedeuten
/// "kein Treffer" und führen in der Interaktionsschicht zu stillen No-Ops,
/// nie zu Fehlern.
pub trait MapGeometry {
    /// Weltposition → Zellkoordinate (None außerhalb des darstellbaren Bereichs).
    fn world_to_grid(&self, world: Vec2) -> Option<CellCoord>;

    /// Zellkoordinate → Weltposition des Zellzentrums.
    fn grid_to_world(&self, cell: CellCoord) -> Vec2;

    /// Alle Zellen im Gitterrechteck zwischen zwei Ecken (inklusive).
    fn cells_in_rectangle(&self, a: CellCoord, b: CellCoord) -> Vec<CellCoord>;

    /// Alle Zellen mit `cell_distance(center, ·) <= radius`.
    fn cells_in_circle(&self, center: CellCoord, radius: i32) -> Vec<CellCoord>;

    /// Gitterdistanz zweier Zellen (Quadratgitter: Chebyshev, Hex: Hex-Distanz).
    fn cell_distance(&self, a: CellCoord, b: CellCoord) -> i32;

    /// Projektion einer Weltposition auf die nächstgelegene Kante.
    ///
    /// `threshold` ist der maximale Abstand zur Gitterlinie als Anteil einer
    /// Zellgröße. Gitter ohne Kantenbegriff geben `None` zurück.
    fn world_to_edge(&self, world: Vec2, threshold: f32) -> Option<EdgeKey>;

    /// Nächstgelegener Gitter-Eckpunkt (für Diagonal-Füllung); `None` auf
    /// Gittern ohne Eckenbegriff.
    fn corner_at(&self, world: Vec2) -> Option<CornerPoint>;

    /// Zelle + lokale Position `[0,1]²` innerhalb der Zelle (Segment-Tool);
    /// `None` auf Gittern ohne Subzellen-Koordinaten.
    fn cell_local(&self, world: Vec2) -> Option<(CellCoord, Vec2)>;

    /// Prüft ob eine Zelle innerhalb der (optionalen) Grenzen liegt.
    fn is_within_bounds(&self, cell: CellCoord) -> bool;

    /// Konfigurierte Grenzen (None = unbegrenzt).
    fn bounds(&self) -> Option<GridBounds>;

    /// Wieviele Objekte per Slot auf einer Zelle koexistieren dürfen
    /// (1 = kein Slotting, Hex: 4).
    fn slot_capacity(&self) -> u8;
}
