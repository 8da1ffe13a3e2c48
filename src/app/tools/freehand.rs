//! Freihand-Malen und -Radieren.
//!
//! Ein Strich ist eine Geste: Zwischenschritte mutieren mit unterdrückter
//! History, der Commit am Strichende schreibt genau einen Snapshot.
//! Radieren folgt der Trefferreihenfolge Label → Kante → Objekt → Zelle
//! und entfernt pro Abtastpunkt höchstens ein Element.

use super::{ToolCtx, ToolMachine};
use crate::app::use_cases::apply::{
    apply_cells, apply_edges, apply_labels, apply_objects, RecordHistory,
};
use crate::app::use_cases::pick;
use crate::core::{Cell, CellCoord};
use glam::Vec2;
use std::collections::HashSet;

/// Malen oder Radieren — das `ToolSet` setzt den Modus vor dem Dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FreehandMode {
    #[default]
    Paint,
    Erase,
}

/// State-Machine für Freihand-Striche.
#[derive(Default)]
pub struct FreehandTool {
    mode: FreehandMode,
    active: bool,
    /// Im laufenden Strich bereits behandelte Zellen
    visited: HashSet<CellCoord>,
    /// Hat der Strich tatsächlich etwas verändert?
    changed: bool,
}

impl FreehandTool {
    pub fn set_mode(&mut self, mode: FreehandMode) {
        if self.mode != mode {
            debug_assert!(!self.active);
            self.mode = mode;
        }
    }

    fn step(&mut self, ctx: &mut ToolCtx, world: Vec2) {
        match self.mode {
            FreehandMode::Paint => self.paint_step(ctx, world),
            FreehandMode::Erase => self.erase_step(ctx, world),
        }
    }

    fn paint_step(&mut self, ctx: &mut ToolCtx, world: Vec2) {
        let Some(cell) = ctx.geometry.world_to_grid(world) else {
            return;
        };
        if !ctx.geometry.is_within_bounds(cell) || !self.visited.insert(cell) {
            return;
        }
        let color = ctx.options.paint_color;
        // Segmente der Zelle überleben das Übermalen nicht
        apply_cells(
            ctx.doc,
            ctx.history,
            &[(cell, Some(Cell::filled(color)))],
            RecordHistory::Suppress,
        );
        self.changed = true;
    }

    fn erase_step(&mut self, ctx: &mut ToolCtx, world: Vec2) {
        // Label → Kante → Objekt → Zelle, höchstens ein Treffer pro Schritt
        if let Some(id) = pick::label_at(ctx.doc.active(), world) {
            let mut labels = ctx.doc.active().labels.clone();
            labels.shift_remove(&id);
            apply_labels(ctx.doc, ctx.history, labels, RecordHistory::Suppress);
            self.changed = true;
            return;
        }
        if let Some(key) = ctx
            .geometry
            .world_to_edge(world, ctx.options.edge_hit_threshold)
        {
            if ctx.doc.active().edges.contains_key(&key) {
                apply_edges(ctx.doc, ctx.history, &[(key, None)], RecordHistory::Suppress);
                self.changed = true;
                return;
            }
        }
        let Some(cell) = ctx.geometry.world_to_grid(world) else {
            return;
        };
        if let Some(id) = pick::object_at(ctx.doc.active(), cell) {
            let mut objects = ctx.doc.active().objects.clone();
            objects.shift_remove(&id);
            apply_objects(ctx.doc, ctx.history, objects, RecordHistory::Suppress);
            self.changed = true;
            return;
        }
        if !self.visited.insert(cell) {
            return;
        }
        if ctx.doc.active().cells.contains_key(&cell) {
            apply_cells(ctx.doc, ctx.history, &[(cell, None)], RecordHistory::Suppress);
            self.changed = true;
        }
    }

    fn commit_name(&self) -> &'static str {
        match self.mode {
            FreehandMode::Paint => "Freihand malen",
            FreehandMode::Erase => "Radieren",
        }
    }
}

impl ToolMachine for FreehandTool {
    fn begin(&mut self, ctx: &mut ToolCtx, world: Vec2) {
        if self.active {
            return;
        }
        self.active = true;
        self.visited.clear();
        self.changed = false;
        ctx.history.begin_gesture();
        self.step(ctx, world);
    }

    fn update(&mut self, ctx: &mut ToolCtx, world: Vec2) {
        if !self.active {
            return;
        }
        self.step(ctx, world);
    }

    fn end(&mut self, ctx: &mut ToolCtx, world: Vec2) {
        if !self.active {
            return;
        }
        // Die Zelle unter dem Zeiger beim Loslassen gehört noch zum Strich
        self.step(ctx, world);
        self.active = false;
        self.visited.clear();
        if self.changed {
            ctx.history
                .commit_gesture(ctx.doc.active_arc(), self.commit_name());
            log::debug!("Freihand-Strich committed ({:?})", self.mode);
        } else {
            ctx.history.cancel_gesture();
        }
        self.changed = false;
    }

    fn cancel(&mut self, ctx: &mut ToolCtx) {
        if !self.active {
            return;
        }
        // Abbruch lässt bereits gemalte Zellen stehen, schreibt aber
        // keinen History-Eintrag ("letzter Stand gewinnt")
        self.active = false;
        self.visited.clear();
        self.changed = false;
        ctx.history.cancel_gesture();
    }

    fn is_active(&self) -> bool {
        self.active
    }
}
