//! Hintergrundbild ausrichten: Drag verschiebt die Bild-Kalibrierung.
//!
//! Mutiert ausschließlich den View-Zustand — die Kalibrierung ist nicht
//! Teil des Layer-Snapshots und erzeugt deshalb keine History-Einträge.

use super::{ToolCtx, ToolMachine};
use glam::Vec2;

/// State-Machine der Bild-Ausrichtung.
#[derive(Default)]
pub struct ImageAlignTool {
    drag: Option<DragState>,
}

#[derive(Debug, Clone, Copy)]
struct DragState {
    grab_world: Vec2,
    baseline_offset: Vec2,
}

impl ToolMachine for ImageAlignTool {
    fn begin(&mut self, ctx: &mut ToolCtx, world: Vec2) {
        if self.drag.is_none() {
            self.drag = Some(DragState {
                grab_world: world,
                baseline_offset: ctx.view.background.offset,
            });
        }
    }

    fn update(&mut self, ctx: &mut ToolCtx, world: Vec2) {
        if let Some(drag) = self.drag {
            ctx.view.background.offset = drag.baseline_offset + (world - drag.grab_world);
        }
    }

    fn end(&mut self, ctx: &mut ToolCtx, world: Vec2) {
        if self.drag.is_some() {
            self.update(ctx, world);
            log::debug!(
                "Hintergrundbild-Offset: {:?}",
                ctx.view.background.offset
            );
            self.drag = None;
        }
    }

    fn cancel(&mut self, ctx: &mut ToolCtx) {
        if let Some(drag) = self.drag.take() {
            ctx.view.background.offset = drag.baseline_offset;
        }
    }

    fn is_active(&self) -> bool {
        self.drag.is_some()
    }
}
