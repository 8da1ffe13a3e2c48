//! Segment-Tool: dreieckige Halbzellen-Segmente malen.
//!
//! Maus: Drag-Strich, jeder Abtastpunkt trifft über die lokale
//! `[0,1]²`-Position den Quadranten der Zelle und damit die Segment-Ecke.
//! Touch: ein Tipp öffnet den Picker auf der getroffenen Zelle; der Host
//! schaltet Ecken per Toggle um und bestätigt die Auswahl als Ganzes.

use super::{ToolCtx, ToolMachine};
use crate::app::use_cases::apply::{apply_cells, RecordHistory};
use crate::core::{CellCoord, SegmentCorner};
use glam::Vec2;
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Default)]
enum Phase {
    #[default]
    Idle,
    /// Maus-Strich läuft
    Stroking,
    /// Touch-Picker offen auf einer Zelle
    Picking {
        cell: CellCoord,
        chosen: Vec<SegmentCorner>,
    },
}

/// State-Machine des Segment-Tools.
#[derive(Default)]
pub struct SegmentTool {
    phase: Phase,
    /// Im laufenden Strich bereits gemalte (Zelle, Ecke)-Paare
    visited: HashSet<(CellCoord, SegmentCorner)>,
    changed: bool,
}

/// Quadrant der lokalen Zellposition → Segment-Ecke (Y wächst nach Norden).
fn corner_for_local(local: Vec2) -> SegmentCorner {
    match (local.x < 0.5, local.y < 0.5) {
        (true, true) => SegmentCorner::SouthWest,
        (true, false) => SegmentCorner::NorthWest,
        (false, true) => SegmentCorner::SouthEast,
        (false, false) => SegmentCorner::NorthEast,
    }
}

impl SegmentTool {
    fn paint_segment(&mut self, ctx: &mut ToolCtx, cell: CellCoord, corner: SegmentCorner) {
        if !ctx.geometry.is_within_bounds(cell) || !self.visited.insert((cell, corner)) {
            return;
        }
        let mut updated = ctx.doc.active().cells.get(&cell).cloned().unwrap_or_default();
        updated.segments.insert(corner, ctx.options.paint_color);
        apply_cells(
            ctx.doc,
            ctx.history,
            &[(cell, Some(updated))],
            RecordHistory::Suppress,
        );
        self.changed = true;
    }

    fn stroke_step(&mut self, ctx: &mut ToolCtx, world: Vec2) {
        let Some((cell, local)) = ctx.geometry.cell_local(world) else {
            return;
        };
        self.paint_segment(ctx, cell, corner_for_local(local));
    }

    /// Ecke im Touch-Picker an- oder abwählen. No-Op ohne offenen Picker.
    pub fn toggle_pick(&mut self, corner: SegmentCorner) {
        if let Phase::Picking { chosen, .. } = &mut self.phase {
            if let Some(index) = chosen.iter().position(|c| *c == corner) {
                chosen.remove(index);
            } else {
                chosen.push(corner);
            }
        }
    }

    /// Touch-Picker bestätigen: gewählte Segmente als ein History-Eintrag.
    pub fn confirm_pick(&mut self, ctx: &mut ToolCtx) {
        let Phase::Picking { cell, chosen } = std::mem::take(&mut self.phase) else {
            return;
        };
        if chosen.is_empty() {
            return;
        }
        let mut updated = ctx.doc.active().cells.get(&cell).cloned().unwrap_or_default();
        for corner in &chosen {
            updated.segments.insert(*corner, ctx.options.paint_color);
        }
        log::debug!("{} Segmente auf {:?} bestätigt", chosen.len(), cell);
        apply_cells(
            ctx.doc,
            ctx.history,
            &[(cell, Some(updated))],
            RecordHistory::Commit("Segmente malen"),
        );
    }
}

impl ToolMachine for SegmentTool {
    fn begin(&mut self, ctx: &mut ToolCtx, world: Vec2) {
        match self.phase {
            Phase::Idle => {}
            // Ein Tipp neben dem offenen Picker schließt ihn kommentarlos
            Phase::Picking { .. } => {
                self.phase = Phase::Idle;
                return;
            }
            Phase::Stroking => return,
        }
        if ctx.source.is_touch() {
            let Some(cell) = ctx.geometry.world_to_grid(world) else {
                return;
            };
            if !ctx.geometry.is_within_bounds(cell) {
                return;
            }
            self.phase = Phase::Picking {
                cell,
                chosen: Vec::new(),
            };
        } else {
            self.phase = Phase::Stroking;
            self.visited.clear();
            self.changed = false;
            ctx.history.begin_gesture();
            self.stroke_step(ctx, world);
        }
    }

    fn update(&mut self, ctx: &mut ToolCtx, world: Vec2) {
        if let Phase::Stroking = self.phase {
            self.stroke_step(ctx, world);
        }
    }

    fn end(&mut self, ctx: &mut ToolCtx, _world: Vec2) {
        if let Phase::Stroking = self.phase {
            self.phase = Phase::Idle;
            self.visited.clear();
            if self.changed {
                ctx.history
                    .commit_gesture(ctx.doc.active_arc(), "Segmente malen");
            } else {
                ctx.history.cancel_gesture();
            }
            self.changed = false;
        }
        // Picking überlebt das Pointer-Up: der Picker wartet auf Toggle/Confirm
    }

    fn cancel(&mut self, ctx: &mut ToolCtx) {
        if let Phase::Stroking = self.phase {
            ctx.history.cancel_gesture();
        }
        self.phase = Phase::Idle;
        self.visited.clear();
        self.changed = false;
    }

    fn is_active(&self) -> bool {
        !matches!(self.phase, Phase::Idle)
    }
}
