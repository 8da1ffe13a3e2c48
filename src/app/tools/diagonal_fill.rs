//! Diagonal-Füllung: Treppenstufen mit Halbzellen-Segmenten glätten.
//!
//! Eine Treppenstufe ist ein Gitterpunkt, an dem sich zwei gefüllte Zellen
//! nur diagonal berühren. Die beiden ungefüllten Notch-Zellen erhalten je
//! ein dreieckiges Segment in der geerbten Nachbarfarbe; ein gerader Lauf
//! aus gleichorientierten Stufen wird in einem Zug geglättet.
//!
//! Zwei-Klick-Geste wie bei den Formwerkzeugen: der erste Klick rastet
//! die Startstufe ein, der zweite legt das Lauf-Ende fest. Maus wendet
//! sofort an; Touch bekommt beim Lauf-Ende eine Umkreis-Suche für grobe
//! Finger-Treffer und verlangt einen dritten Tipp nahe dem Lauf-Ende.
//! Gitter ohne Eckenbegriff (Hex) melden "nicht behandelt".

use super::{ToolCtx, ToolMachine};
use crate::app::use_cases::apply::{apply_cells, RecordHistory};
use crate::core::{Cell, CellCoord, CornerPoint, MapLayer, Rgba, SegmentCorner};
use crate::shared::options::{DIAGONAL_CONFIRM_DISTANCE, DIAGONAL_TOUCH_SEARCH_RADIUS};
use glam::Vec2;
use indexmap::IndexMap;

/// Lauf-Richtung einer Treppenstufe.
///
/// `NeSw`: die gefüllten Zellen liegen nordöstlich und südwestlich des
/// Punkts, die Stufe gehört zu einer Treppe entlang `(±1, ±1)`.
/// `NwSe` ist das Spiegelbild entlang `(±1, ∓1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagOrientation {
    NeSw,
    NwSe,
}

#[derive(Debug, Clone, PartialEq, Default)]
enum Phase {
    #[default]
    Idle,
    /// Erster Klick läuft noch (Pointer gedrückt)
    Arming {
        start: CornerPoint,
        orientation: DiagOrientation,
        color: Rgba,
    },
    /// Startstufe steht, warte auf den zweiten Klick (Lauf-Ende)
    AnchorSet {
        start: CornerPoint,
        orientation: DiagOrientation,
        color: Rgba,
    },
    /// Nur Touch: Lauf steht, warte auf Bestätigungs-Tipp
    Confirming {
        path: Vec<CornerPoint>,
        orientation: DiagOrientation,
        color: Rgba,
    },
}

/// State-Machine der Diagonal-Füllung.
#[derive(Default)]
pub struct DiagonalFillTool {
    phase: Phase,
}

/// Die vier Nachbarzellen des Gitterpunkts `(x, y)` (Y wächst nach Norden).
fn neighbor_cells(corner: CornerPoint) -> [CellCoord; 4] {
    let (x, y) = corner;
    [
        (x, y),         // NE
        (x - 1, y),     // NW
        (x, y - 1),     // SE
        (x - 1, y - 1), // SW
    ]
}

fn is_filled(layer: &MapLayer, cell: CellCoord) -> bool {
    layer.cells.get(&cell).is_some_and(|c| c.fill.is_some())
}

/// Orientierung einer gültigen Treppenstufe am Gitterpunkt, sonst `None`.
fn corner_orientation(layer: &MapLayer, corner: CornerPoint) -> Option<DiagOrientation> {
    let [ne, nw, se, sw] = neighbor_cells(corner);
    let (ne, nw, se, sw) = (
        is_filled(layer, ne),
        is_filled(layer, nw),
        is_filled(layer, se),
        is_filled(layer, sw),
    );
    if ne && sw && !nw && !se {
        Some(DiagOrientation::NeSw)
    } else if nw && se && !ne && !sw {
        Some(DiagOrientation::NwSe)
    } else {
        None
    }
}

/// Geerbte Segmentfarbe: Füllfarbe einer der beiden diagonalen Nachbarn.
fn inherited_color(
    layer: &MapLayer,
    corner: CornerPoint,
    orientation: DiagOrientation,
) -> Option<Rgba> {
    let [ne, nw, se, sw] = neighbor_cells(corner);
    let (a, b) = match orientation {
        DiagOrientation::NeSw => (ne, sw),
        DiagOrientation::NwSe => (nw, se),
    };
    layer
        .cells
        .get(&a)
        .and_then(|c| c.fill)
        .or_else(|| layer.cells.get(&b).and_then(|c| c.fill))
}

/// Gerader Lauf vom Start zum Ziel, wenn das Ziel auf der zur Orientierung
/// passenden Diagonale liegt und JEDE Stufe dazwischen dieselbe
/// Orientierung trägt. Start == Ziel glättet die einzelne Stufe.
fn validated_path(
    layer: &MapLayer,
    start: CornerPoint,
    end: CornerPoint,
    orientation: DiagOrientation,
) -> Option<Vec<CornerPoint>> {
    let (dx, dy) = (end.0 - start.0, end.1 - start.1);
    if dx.abs() != dy.abs() {
        return None;
    }
    let on_diagonal = match orientation {
        DiagOrientation::NeSw => dx == dy,
        DiagOrientation::NwSe => dx == -dy,
    };
    if !on_diagonal {
        return None;
    }
    let steps = dx.abs();
    let step = (dx.signum(), dy.signum());
    let mut path = Vec::with_capacity(steps as usize + 1);
    for i in 0..=steps {
        let corner = (start.0 + step.0 * i, start.1 + step.1 * i);
        if corner_orientation(layer, corner) != Some(orientation) {
            return None;
        }
        path.push(corner);
    }
    Some(path)
}

/// Segment-Ecke der Notch-Zelle, die am Gitterpunkt anliegt: die Ecke der
/// Zelle, die mit dem Punkt zusammenfällt.
fn notch_segments(
    corner: CornerPoint,
    orientation: DiagOrientation,
) -> [(CellCoord, SegmentCorner); 2] {
    let [_, nw, se, _] = neighbor_cells(corner);
    let (x, y) = corner;
    match orientation {
        // Notches NW und SE des Punkts
        DiagOrientation::NeSw => [(nw, SegmentCorner::SouthEast), (se, SegmentCorner::NorthWest)],
        // Notches NE und SW des Punkts
        DiagOrientation::NwSe => [
            ((x, y), SegmentCorner::SouthWest),
            ((x - 1, y - 1), SegmentCorner::NorthEast),
        ],
    }
}

impl DiagonalFillTool {
    /// Startstufe bestimmen: die angeklickte Ecke, sonst die übrigen drei
    /// Ecken der getroffenen Zelle.
    fn snap_start(&self, ctx: &ToolCtx, world: Vec2) -> Option<(CornerPoint, DiagOrientation)> {
        let cell = ctx.geometry.world_to_grid(world)?;
        // Eckenbegriff erforderlich (Hex: nicht behandelt)
        ctx.geometry.corner_at(world)?;
        let layer = ctx.doc.active();

        let (cx, cy) = cell;
        let cell_corners = [(cx, cy), (cx + 1, cy), (cx, cy + 1), (cx + 1, cy + 1)];
        cell_corners
            .into_iter()
            .find_map(|corner| corner_orientation(layer, corner).map(|o| (corner, o)))
    }

    /// Lauf vom Start zum getippten Ende. Schlägt die direkte Validierung
    /// bei Touch fehl, rettet eine Umkreis-Suche nach dem nächsten Ecken-
    /// Punkt, von dem aus der Lauf gültig ist.
    fn resolve_path(
        &self,
        ctx: &ToolCtx,
        start: CornerPoint,
        orientation: DiagOrientation,
        tapped: CornerPoint,
    ) -> Option<Vec<CornerPoint>> {
        let layer = ctx.doc.active();
        if let Some(path) = validated_path(layer, start, tapped, orientation) {
            return Some(path);
        }
        if !ctx.source.is_touch() {
            return None;
        }
        let radius = DIAGONAL_TOUCH_SEARCH_RADIUS;
        let mut best: Option<(i32, Vec<CornerPoint>)> = None;
        for dx in -radius..=radius {
            for dy in -radius..=radius {
                let corner = (tapped.0 + dx, tapped.1 + dy);
                if let Some(path) = validated_path(layer, start, corner, orientation) {
                    let dist = dx.abs().max(dy.abs());
                    if best.as_ref().map_or(true, |(d, _)| dist < *d) {
                        best = Some((dist, path));
                    }
                }
            }
        }
        best.map(|(_, path)| path)
    }

    fn apply(&self, ctx: &mut ToolCtx, path: &[CornerPoint], orientation: DiagOrientation, color: Rgba) {
        let mut merged: IndexMap<CellCoord, Cell> = IndexMap::new();
        for corner in path {
            for (cell, segment_corner) in notch_segments(*corner, orientation) {
                if !ctx.geometry.is_within_bounds(cell) {
                    continue;
                }
                let entry = merged.entry(cell).or_insert_with(|| {
                    ctx.doc.active().cells.get(&cell).cloned().unwrap_or_default()
                });
                entry.segments.insert(segment_corner, color);
            }
        }
        if merged.is_empty() {
            return;
        }
        let edits: Vec<(CellCoord, Option<Cell>)> =
            merged.into_iter().map(|(cell, c)| (cell, Some(c))).collect();
        log::debug!(
            "Diagonal-Füllung über {} Stufen ({:?})",
            path.len(),
            orientation
        );
        apply_cells(
            ctx.doc,
            ctx.history,
            &edits,
            RecordHistory::Commit("Diagonale geglättet"),
        );
    }

    /// Bestätigungs-Tipp: nahe genug am eingerasteten Lauf-Ende?
    fn confirms(&self, ctx: &ToolCtx, path: &[CornerPoint], world: Vec2) -> bool {
        let (Some(tap), Some(end)) = (ctx.geometry.corner_at(world), path.last()) else {
            return false;
        };
        let dist = (end.0 - tap.0).abs().max((end.1 - tap.1).abs());
        dist as f32 <= DIAGONAL_CONFIRM_DISTANCE
    }
}

impl ToolMachine for DiagonalFillTool {
    fn begin(&mut self, ctx: &mut ToolCtx, world: Vec2) {
        if let Phase::Idle = self.phase {
            if let Some((start, orientation)) = self.snap_start(ctx, world) {
                let Some(color) = inherited_color(ctx.doc.active(), start, orientation) else {
                    return;
                };
                self.phase = Phase::Arming {
                    start,
                    orientation,
                    color,
                };
            }
        }
    }

    fn update(&mut self, _ctx: &mut ToolCtx, _world: Vec2) {
        // Vorschau rendert der Host; validiert wird erst am Lauf-Ende
    }

    fn end(&mut self, ctx: &mut ToolCtx, world: Vec2) {
        match std::mem::take(&mut self.phase) {
            Phase::Idle => {}
            Phase::Arming {
                start,
                orientation,
                color,
            } => {
                self.phase = Phase::AnchorSet {
                    start,
                    orientation,
                    color,
                };
            }
            Phase::AnchorSet {
                start,
                orientation,
                color,
            } => {
                let Some(tapped) = ctx.geometry.corner_at(world) else {
                    self.phase = Phase::AnchorSet {
                        start,
                        orientation,
                        color,
                    };
                    return;
                };
                let Some(path) = self.resolve_path(ctx, start, orientation, tapped) else {
                    log::debug!("Diagonal-Lauf {:?} → {:?} verworfen", start, tapped);
                    return;
                };
                if ctx.source.is_touch() {
                    self.phase = Phase::Confirming {
                        path,
                        orientation,
                        color,
                    };
                } else {
                    self.apply(ctx, &path, orientation, color);
                }
            }
            Phase::Confirming {
                path,
                orientation,
                color,
            } => {
                if self.confirms(ctx, &path, world) {
                    self.apply(ctx, &path, orientation, color);
                } else if let Some(&start) = path.first() {
                    // Tipp abseits: zurück zu "Lauf-Ende offen"
                    log::debug!("Bestätigung abseits, Lauf-Ende wieder offen");
                    self.phase = Phase::AnchorSet {
                        start,
                        orientation,
                        color,
                    };
                }
            }
        }
    }

    fn cancel(&mut self, _ctx: &mut ToolCtx) {
        self.phase = Phase::Idle;
    }

    fn is_active(&self) -> bool {
        !matches!(self.phase, Phase::Idle)
    }
}
