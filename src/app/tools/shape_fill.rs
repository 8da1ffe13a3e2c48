//! Zweiklick-Formen: Rechteck füllen, Kreis füllen, Fläche löschen.
//!
//! Der erste Klick setzt den Anker, der zweite legt die Gegenecke bzw. den
//! Radius fest und wendet die Form als einen History-Eintrag an. Bei
//! Touch-Eingabe schiebt sich eine Bestätigungsphase dazwischen: ein Tipp
//! innerhalb der Form wendet sie an, außerhalb verwirft sie.

use super::{ToolCtx, ToolMachine};
use crate::app::use_cases::apply::{apply_cells, RecordHistory};
use crate::core::{Cell, CellCoord};
use glam::Vec2;

/// Formart — das `ToolSet` setzt sie vor dem Dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShapeKind {
    #[default]
    Rect,
    /// Chebyshev-Kreis: Radius = Gitterdistanz Anker → Zeiger
    Circle,
    /// Entfernt alle bemalten Zellen im Rechteck
    Clear,
}

#[derive(Debug, Clone, PartialEq)]
enum Phase {
    Idle,
    /// Erster Klick läuft noch (Pointer gedrückt)
    Arming { anchor: CellCoord },
    /// Anker steht, warte auf den zweiten Klick
    AnchorSet { anchor: CellCoord },
    /// Nur Touch: Form steht, warte auf Bestätigungs-Tipp
    Confirming { cells: Vec<CellCoord> },
}

impl Default for Phase {
    fn default() -> Self {
        Phase::Idle
    }
}

/// State-Machine der Formwerkzeuge.
#[derive(Default)]
pub struct ShapeFillTool {
    kind: ShapeKind,
    phase: Phase,
}

impl ShapeFillTool {
    pub fn set_kind(&mut self, kind: ShapeKind) {
        if self.kind != kind {
            debug_assert!(matches!(self.phase, Phase::Idle));
            self.kind = kind;
        }
    }

    fn region(&self, ctx: &ToolCtx, anchor: CellCoord, target: CellCoord) -> Vec<CellCoord> {
        let cells = match self.kind {
            ShapeKind::Rect | ShapeKind::Clear => ctx.geometry.cells_in_rectangle(anchor, target),
            ShapeKind::Circle => {
                let radius = ctx.geometry.cell_distance(anchor, target);
                ctx.geometry.cells_in_circle(anchor, radius)
            }
        };
        cells
            .into_iter()
            .filter(|cell| ctx.geometry.is_within_bounds(*cell))
            .collect()
    }

    fn apply(&self, ctx: &mut ToolCtx, cells: &[CellCoord]) {
        let edits: Vec<(CellCoord, Option<Cell>)> = match self.kind {
            ShapeKind::Rect | ShapeKind::Circle => {
                let color = ctx.options.paint_color;
                cells
                    .iter()
                    .map(|cell| (*cell, Some(Cell::filled(color))))
                    .collect()
            }
            ShapeKind::Clear => cells
                .iter()
                .filter(|cell| ctx.doc.active().cells.contains_key(cell))
                .map(|cell| (*cell, None))
                .collect(),
        };
        if edits.is_empty() {
            return;
        }
        log::debug!("{:?}-Form auf {} Zellen angewendet", self.kind, edits.len());
        apply_cells(
            ctx.doc,
            ctx.history,
            &edits,
            RecordHistory::Commit(self.commit_name()),
        );
    }

    fn commit_name(&self) -> &'static str {
        match self.kind {
            ShapeKind::Rect => "Rechteck gefüllt",
            ShapeKind::Circle => "Kreis gefüllt",
            ShapeKind::Clear => "Fläche gelöscht",
        }
    }
}

impl ToolMachine for ShapeFillTool {
    fn begin(&mut self, ctx: &mut ToolCtx, world: Vec2) {
        if let Phase::Idle = self.phase {
            if let Some(anchor) = ctx.geometry.world_to_grid(world) {
                self.phase = Phase::Arming { anchor };
            }
        }
    }

    fn update(&mut self, _ctx: &mut ToolCtx, _world: Vec2) {
        // Vorschau rendert der Host; die Form entsteht erst beim zweiten Klick
    }

    fn end(&mut self, ctx: &mut ToolCtx, world: Vec2) {
        match std::mem::take(&mut self.phase) {
            Phase::Idle => {}
            Phase::Arming { anchor } => {
                self.phase = Phase::AnchorSet { anchor };
            }
            Phase::AnchorSet { anchor } => {
                let Some(target) = ctx.geometry.world_to_grid(world) else {
                    self.phase = Phase::AnchorSet { anchor };
                    return;
                };
                let cells = self.region(ctx, anchor, target);
                if cells.is_empty() {
                    return;
                }
                if ctx.source.is_touch() {
                    self.phase = Phase::Confirming { cells };
                } else {
                    self.apply(ctx, &cells);
                }
            }
            Phase::Confirming { cells } => {
                let inside = ctx
                    .geometry
                    .world_to_grid(world)
                    .is_some_and(|cell| cells.contains(&cell));
                if inside {
                    self.apply(ctx, &cells);
                } else {
                    log::debug!("Form per Tipp außerhalb verworfen");
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
