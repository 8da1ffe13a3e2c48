//! Gruppen-Drag: die gesamte Selektion starr verschieben.
//!
//! Läuft unter dem Select-Werkzeug. Objekte rasten in Gitterschritten,
//! Labels folgen kontinuierlich in Weltkoordinaten. Jeder Zwischenschritt
//! wird ganz oder gar nicht angewendet: verletzt EIN Objekt Grenzen oder
//! kollidiert mit einem nicht selektierten Objekt, bleibt der letzte
//! gültige Stand stehen. Das Drag-Ende schreibt pro veränderter Collection
//! genau einen History-Eintrag.

use super::{ToolCtx, ToolMachine};
use crate::app::use_cases::apply::{apply_labels, apply_objects, RecordHistory};
use crate::core::{CellCoord, MapObject, TextLabel};
use glam::Vec2;
use indexmap::IndexMap;

/// State-Machine des Gruppen-Drags.
#[derive(Default)]
pub struct GroupDragTool {
    active: bool,
    grab_cell: CellCoord,
    grab_world: Vec2,
    last_world: Vec2,
    /// Stand der Collections beim Drag-Start (Basis aller Schritte und
    /// Ziel der Cancel-Wiederherstellung)
    baseline_objects: IndexMap<u64, MapObject>,
    baseline_labels: IndexMap<u64, TextLabel>,
    dragged_objects: Vec<u64>,
    dragged_labels: Vec<u64>,
}

impl GroupDragTool {
    /// Verschobene Objekt-Collection für einen Gitterversatz, `None` wenn
    /// irgendein Objekt Grenzen verletzt oder fremde Objekte trifft.
    fn moved_objects(
        &self,
        ctx: &ToolCtx,
        delta: (i32, i32),
    ) -> Option<IndexMap<u64, MapObject>> {
        let mut moved = self.baseline_objects.clone();
        for id in &self.dragged_objects {
            let object = moved.get_mut(id)?;
            object.position = (object.position.0 + delta.0, object.position.1 + delta.1);
            let (min, max) = object.grid_aabb();
            for x in min.0..max.0 {
                for y in min.1..max.1 {
                    if !ctx.geometry.is_within_bounds((x, y)) {
                        return None;
                    }
                }
            }
        }
        for id in &self.dragged_objects {
            let candidate = &moved[id];
            let blocked = moved
                .values()
                .filter(|other| !self.dragged_objects.contains(&other.id))
                .any(|other| candidate.overlaps(other));
            if blocked {
                return None;
            }
        }
        Some(moved)
    }

    fn moved_labels(&self, delta: Vec2) -> IndexMap<u64, TextLabel> {
        let mut moved = self.baseline_labels.clone();
        for id in &self.dragged_labels {
            if let Some(label) = moved.get_mut(id) {
                label.position += delta;
            }
        }
        moved
    }

    fn step(&mut self, ctx: &mut ToolCtx, world: Vec2) {
        if !self.dragged_objects.is_empty() {
            if let Some(cell) = ctx.geometry.world_to_grid(world) {
                let delta = (cell.0 - self.grab_cell.0, cell.1 - self.grab_cell.1);
                if let Some(objects) = self.moved_objects(ctx, delta) {
                    apply_objects(ctx.doc, ctx.history, objects, RecordHistory::Suppress);
                }
            }
        }
        if !self.dragged_labels.is_empty() {
            let labels = self.moved_labels(world - self.grab_world);
            apply_labels(ctx.doc, ctx.history, labels, RecordHistory::Suppress);
        }
    }

    /// Beendet den Drag an der zuletzt gesehenen Position (das Drag-Ende
    /// vom Eingabe-Koordinator trägt keine eigene Position).
    pub fn finish(&mut self, ctx: &mut ToolCtx) {
        let world = self.last_world;
        self.end(ctx, world);
    }

    fn reset(&mut self) {
        self.active = false;
        self.baseline_objects = IndexMap::new();
        self.baseline_labels = IndexMap::new();
        self.dragged_objects.clear();
        self.dragged_labels.clear();
    }
}

impl ToolMachine for GroupDragTool {
    fn begin(&mut self, ctx: &mut ToolCtx, world: Vec2) {
        if self.active || ctx.selection.is_empty() {
            return;
        }
        let Some(grab_cell) = ctx.geometry.world_to_grid(world) else {
            return;
        };
        self.active = true;
        self.grab_cell = grab_cell;
        self.grab_world = world;
        self.last_world = world;
        self.baseline_objects = ctx.doc.active().objects.clone();
        self.baseline_labels = ctx.doc.active().labels.clone();
        self.dragged_objects = ctx
            .selection
            .object_ids()
            .into_iter()
            .filter(|id| self.baseline_objects.contains_key(id))
            .collect();
        self.dragged_labels = ctx
            .selection
            .label_ids()
            .into_iter()
            .filter(|id| self.baseline_labels.contains_key(id))
            .collect();
        ctx.history.begin_gesture();
    }

    fn update(&mut self, ctx: &mut ToolCtx, world: Vec2) {
        if !self.active {
            return;
        }
        self.last_world = world;
        self.step(ctx, world);
    }

    fn end(&mut self, ctx: &mut ToolCtx, world: Vec2) {
        if !self.active {
            return;
        }
        self.step(ctx, world);
        ctx.history.cancel_gesture();

        let objects_changed = ctx.doc.active().objects != self.baseline_objects;
        let labels_changed = ctx.doc.active().labels != self.baseline_labels;
        if objects_changed {
            ctx.history.push(ctx.doc.active_arc(), "Objekte verschoben");
        }
        if labels_changed {
            ctx.history.push(ctx.doc.active_arc(), "Labels verschoben");
        }
        if objects_changed || labels_changed {
            log::debug!(
                "Gruppen-Drag beendet ({} Objekte, {} Labels)",
                self.dragged_objects.len(),
                self.dragged_labels.len()
            );
        }
        self.reset();
    }

    fn cancel(&mut self, ctx: &mut ToolCtx) {
        if !self.active {
            return;
        }
        // Baselines zurückschreiben, kein History-Eintrag
        let objects = std::mem::take(&mut self.baseline_objects);
        let labels = std::mem::take(&mut self.baseline_labels);
        apply_objects(ctx.doc, ctx.history, objects, RecordHistory::Suppress);
        apply_labels(ctx.doc, ctx.history, labels, RecordHistory::Suppress);
        ctx.history.cancel_gesture();
        self.reset();
    }

    fn is_active(&self) -> bool {
        self.active
    }
}
