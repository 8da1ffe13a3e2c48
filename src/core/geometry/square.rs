//! Quadratgitter-Geometrie mit voller Feature-Abdeckung.

use super::{CellCoord, CornerPoint, GridBounds, MapGeometry};
use crate::core::edge::{EdgeKey, EdgeSide};
use glam::Vec2;

/// Quadratisches Gitter: Zelle `(x, y)` belegt die Weltfläche
/// `[x·s, (x+1)·s] × [y·s, (y+1)·s]` mit Zellgröße `s`. Y wächst nach Norden.
#[derive(Debug, Clone)]
pub struct SquareGrid {
    /// Kantenlänge einer Zelle in Welteinheiten
    pub cell_size: f32,
    /// Optionale inklusive Gittergrenzen
    pub bounds: Option<GridBounds>,
}

impl SquareGrid {
    /// Erstellt ein unbegrenztes Gitter.
    pub fn new(cell_size: f32) -> Self {
        Self {
            cell_size,
            bounds: None,
        }
    }

    /// Erstellt ein Gitter mit inklusiven Grenzen.
    pub fn with_bounds(cell_size: f32, min: CellCoord, max: CellCoord) -> Self {
        Self {
            cell_size,
            bounds: Some(GridBounds { min, max }),
        }
    }

    fn to_grid_space(&self, world: Vec2) -> Vec2 {
        world / self.cell_size
    }
}

impl MapGeometry for SquareGrid {
    fn world_to_grid(&self, world: Vec2) -> Option<CellCoord> {
        if !world.is_finite() {
            return None;
        }
        let g = self.to_grid_space(world);
        // Koordinaten jenseits des i32-Bereichs sind nicht adressierbar
        if g.x.abs() >= i32::MAX as f32 || g.y.abs() >= i32::MAX as f32 {
            return None;
        }
        Some((g.x.floor() as i32, g.y.floor() as i32))
    }

    fn grid_to_world(&self, cell: CellCoord) -> Vec2 {
        Vec2::new(
            (cell.0 as f32 + 0.5) * self.cell_size,
            (cell.1 as f32 + 0.5) * self.cell_size,
        )
    }

    fn cells_in_rectangle(&self, a: CellCoord, b: CellCoord) -> Vec<CellCoord> {
        let (x0, x1) = (a.0.min(b.0), a.0.max(b.0));
        let (y0, y1) = (a.1.min(b.1), a.1.max(b.1));
        let mut cells = Vec::with_capacity(((x1 - x0 + 1) * (y1 - y0 + 1)) as usize);
        for y in y0..=y1 {
            for x in x0..=x1 {
                cells.push((x, y));
            }
        }
        cells
    }

    fn cells_in_circle(&self, center: CellCoord, radius: i32) -> Vec<CellCoord> {
        // Chebyshev-Kreis: diagonale und orthogonale Radien sind gleichwertig
        let r = radius.max(0);
        self.cells_in_rectangle(
            (center.0 - r, center.1 - r),
            (center.0 + r, center.1 + r),
        )
    }

    fn cell_distance(&self, a: CellCoord, b: CellCoord) -> i32 {
        (a.0 - b.0).abs().max((a.1 - b.1).abs())
    }

    fn world_to_edge(&self, world: Vec2, threshold: f32) -> Option<EdgeKey> {
        let cell = self.world_to_grid(world)?;
        let g = self.to_grid_space(world);
        let fx = g.x - g.x.floor();
        let fy = g.y - g.y.floor();

        // Abstand zur nächsten vertikalen bzw. horizontalen Gitterlinie
        let dist_vertical = fx.min(1.0 - fx);
        let dist_horizontal = fy.min(1.0 - fy);

        if dist_vertical.min(dist_horizontal) > threshold {
            return None;
        }

        let key = if dist_vertical <= dist_horizontal {
            let side = if fx < 0.5 { EdgeSide::West } else { EdgeSide::East };
            EdgeKey::canonical(cell.0, cell.1, side)
        } else {
            let side = if fy < 0.5 { EdgeSide::South } else { EdgeSide::North };
            EdgeKey::canonical(cell.0, cell.1, side)
        };
        Some(key)
    }

    fn corner_at(&self, world: Vec2) -> Option<CornerPoint> {
        if !world.is_finite() {
            return None;
        }
        let g = self.to_grid_space(world);
        if g.x.abs() >= i32::MAX as f32 || g.y.abs() >= i32::MAX as f32 {
            return None;
        }
        Some((g.x.round() as i32, g.y.round() as i32))
    }

    fn cell_local(&self, world: Vec2) -> Option<(CellCoord, Vec2)> {
        let cell = self.world_to_grid(world)?;
        let g = self.to_grid_space(world);
        Some((cell, Vec2::new(g.x - g.x.floor(), g.y - g.y.floor())))
    }

    fn is_within_bounds(&self, cell: CellCoord) -> bool {
        self.bounds.map_or(true, |b| b.contains(cell))
    }

    fn bounds(&self) -> Option<GridBounds> {
        self.bounds
    }

    fn slot_capacity(&self) -> u8 {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn grid() -> SquareGrid {
        SquareGrid::new(10.0)
    }

    #[test]
    fn world_to_grid_floors() {
        let g = grid();
        assert_eq!(g.world_to_grid(Vec2::new(5.0, 5.0)), Some((0, 0)));
        assert_eq!(g.world_to_grid(Vec2::new(-0.1, 0.0)), Some((-1, 0)));
        assert_eq!(g.world_to_grid(Vec2::new(25.0, 35.0)), Some((2, 3)));
    }

    #[test]
    fn non_finite_world_has_no_cell() {
        assert_eq!(grid().world_to_grid(Vec2::new(f32::NAN, 0.0)), None);
        assert_eq!(grid().world_to_grid(Vec2::new(f32::INFINITY, 0.0)), None);
    }

    #[test]
    fn grid_to_world_is_cell_center() {
        let center = grid().grid_to_world((2, 3));
        assert_relative_eq!(center.x, 25.0);
        assert_relative_eq!(center.y, 35.0);
    }

    #[test]
    fn rectangle_is_corner_order_independent() {
        let g = grid();
        let a = g.cells_in_rectangle((0, 0), (2, 1));
        let b = g.cells_in_rectangle((2, 1), (0, 0));
        assert_eq!(a, b);
        assert_eq!(a.len(), 6);
    }

    #[test]
    fn circle_radius_is_chebyshev() {
        let g = grid();
        let cells = g.cells_in_circle((0, 0), 2);
        assert_eq!(cells.len(), 25);
        assert!(cells.contains(&(2, 2)));
        assert!(cells.contains(&(-2, 0)));
    }

    #[test]
    fn circle_with_negative_radius_is_single_cell() {
        assert_eq!(grid().cells_in_circle((3, 3), -1), vec![(3, 3)]);
    }

    #[test]
    fn diagonal_and_orthogonal_distance_match() {
        let g = grid();
        assert_eq!(g.cell_distance((0, 0), (3, 3)), 3);
        assert_eq!(g.cell_distance((0, 0), (3, 0)), 3);
    }

    #[test]
    fn edge_projection_requires_proximity() {
        let g = grid();
        // Zellmitte: keine Gitterlinie in Reichweite
        assert_eq!(g.world_to_edge(Vec2::new(5.0, 5.0), 0.15), None);
        // Nahe der Westkante von (1, 0)
        let key = g.world_to_edge(Vec2::new(10.5, 5.0), 0.15).unwrap();
        assert_eq!(key, EdgeKey::canonical(1, 0, EdgeSide::West));
        // Dieselbe Kante von der anderen Seite angefahren
        let key2 = g.world_to_edge(Vec2::new(9.5, 5.0), 0.15).unwrap();
        assert_eq!(key2, key);
    }

    #[test]
    fn edge_projection_prefers_nearer_axis() {
        let g = grid();
        // Nahe der Nordkante von (0, 0), weiter weg von vertikalen Linien
        let key = g.world_to_edge(Vec2::new(5.0, 9.7), 0.15).unwrap();
        assert_eq!(key, EdgeKey::canonical(0, 0, EdgeSide::North));
    }

    #[test]
    fn corner_snaps_to_nearest_lattice_point() {
        let g = grid();
        assert_eq!(g.corner_at(Vec2::new(9.6, 10.2)), Some((1, 1)));
        assert_eq!(g.corner_at(Vec2::new(-0.4, 0.4)), Some((0, 0)));
    }

    #[test]
    fn cell_local_is_unit_interval() {
        let g = grid();
        let (cell, local) = g.cell_local(Vec2::new(12.5, 37.5)).unwrap();
        assert_eq!(cell, (1, 3));
        assert_relative_eq!(local.x, 0.25);
        assert_relative_eq!(local.y, 0.75);
    }

    #[test]
    fn bounded_grid_rejects_outside_cells() {
        let g = SquareGrid::with_bounds(10.0, (0, 0), (4, 4));
        assert!(g.is_within_bounds((4, 4)));
        assert!(!g.is_within_bounds((5, 0)));
    }
}
