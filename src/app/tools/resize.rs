//! Eckgriff-Resize des einzigen selektierten Objekts.
//!
//! Gezogen wird die gegriffene AABB-Ecke, die diagonal gegenüberliegende
//! bleibt verankert. Jede Achse ist auf `1..=OBJECT_MAX_SPAN` geklemmt;
//! Zwischenschritte unterliegen denselben Gates wie das Verschieben
//! (Grenzen, Kollision) und werden bei Verletzung als Ganzes verworfen.

use super::{ToolCtx, ToolMachine};
use crate::app::use_cases::apply::{apply_objects, RecordHistory};
use crate::core::{CellCoord, MapObject, ObjectSize, OBJECT_MAX_SPAN};
use glam::Vec2;

/// State-Machine des Objekt-Resize.
#[derive(Default)]
pub struct ResizeTool {
    active: bool,
    target_id: u64,
    /// Verankerte (inklusive) Gegenecke der AABB
    anchor: CellCoord,
    baseline: Option<MapObject>,
    last_world: Vec2,
}

/// AABB von der Ankerzelle zur Zielzelle, pro Achse auf den maximalen
/// Objekt-Span geklemmt — geklemmt wird vom Anker aus in Zugrichtung.
fn resized_rect(anchor: CellCoord, target: CellCoord) -> (CellCoord, ObjectSize) {
    let width = (target.0 - anchor.0).abs().min(OBJECT_MAX_SPAN - 1) + 1;
    let height = (target.1 - anchor.1).abs().min(OBJECT_MAX_SPAN - 1) + 1;
    let x = if target.0 >= anchor.0 {
        anchor.0
    } else {
        anchor.0 - (width - 1)
    };
    let y = if target.1 >= anchor.1 {
        anchor.1
    } else {
        anchor.1 - (height - 1)
    };
    ((x, y), ObjectSize::clamped(width, height))
}

impl ResizeTool {
    fn step(&mut self, ctx: &mut ToolCtx, world: Vec2) {
        let Some(target) = ctx.geometry.world_to_grid(world) else {
            return;
        };
        let (position, size) = resized_rect(self.anchor, target);
        let mut objects = ctx.doc.active().objects.clone();
        let Some(object) = objects.get_mut(&self.target_id) else {
            return;
        };
        if object.position == position && object.size == size {
            return;
        }
        object.position = position;
        object.size = size;

        let (min, max) = object.grid_aabb();
        for x in min.0..max.0 {
            for y in min.1..max.1 {
                if !ctx.geometry.is_within_bounds((x, y)) {
                    return;
                }
            }
        }
        let candidate = objects[&self.target_id].clone();
        let blocked = objects
            .values()
            .filter(|other| other.id != self.target_id)
            .any(|other| candidate.overlaps(other));
        if blocked {
            return;
        }
        apply_objects(ctx.doc, ctx.history, objects, RecordHistory::Suppress);
    }

    /// Beendet das Resize an der zuletzt gesehenen Position.
    pub fn finish(&mut self, ctx: &mut ToolCtx) {
        let world = self.last_world;
        self.end(ctx, world);
    }
}

impl ToolMachine for ResizeTool {
    fn begin(&mut self, ctx: &mut ToolCtx, world: Vec2) {
        if self.active {
            return;
        }
        let ids = ctx.selection.object_ids();
        // Resize gibt es nur für genau ein selektiertes Objekt
        let [id] = ids.as_slice() else {
            return;
        };
        let Some(object) = ctx.doc.active().objects.get(id) else {
            return;
        };
        let Some(grab) = ctx.geometry.world_to_grid(world) else {
            return;
        };
        let (min, max) = object.grid_aabb();
        let (max_x, max_y) = (max.0 - 1, max.1 - 1); // inklusive Ecken
        // Anker: die von der Griffposition weiter entfernte Ecke pro Achse
        let anchor_x = if (grab.0 - min.0).abs() <= (grab.0 - max_x).abs() {
            max_x
        } else {
            min.0
        };
        let anchor_y = if (grab.1 - min.1).abs() <= (grab.1 - max_y).abs() {
            max_y
        } else {
            min.1
        };

        self.active = true;
        self.target_id = *id;
        self.anchor = (anchor_x, anchor_y);
        self.baseline = Some(object.clone());
        self.last_world = world;
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
        let changed = self
            .baseline
            .as_ref()
            .is_some_and(|baseline| ctx.doc.active().objects.get(&self.target_id) != Some(baseline));
        if changed {
            ctx.history.push(ctx.doc.active_arc(), "Objektgröße geändert");
            log::debug!("Objekt {} skaliert", self.target_id);
        }
        self.active = false;
        self.baseline = None;
    }

    fn cancel(&mut self, ctx: &mut ToolCtx) {
        if !self.active {
            return;
        }
        if let Some(baseline) = self.baseline.take() {
            let mut objects = ctx.doc.active().objects.clone();
            objects.insert(baseline.id, baseline);
            apply_objects(ctx.doc, ctx.history, objects, RecordHistory::Suppress);
        }
        ctx.history.cancel_gesture();
        self.active = false;
    }

    fn is_active(&self) -> bool {
        self.active
    }
}
