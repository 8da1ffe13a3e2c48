//! Distanz-Messung in Gitterzellen. Rein lesend, keine History.

use super::{ToolCtx, ToolMachine};
use crate::core::CellCoord;
use glam::Vec2;

/// Abgeschlossene Messung zwischen zwei Zellen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Measurement {
    pub from: CellCoord,
    pub to: CellCoord,
    /// Gitterdistanz (Quadratgitter: Chebyshev, Hex: Hex-Distanz)
    pub distance: i32,
}

/// State-Machine des Messwerkzeugs.
#[derive(Default)]
pub struct MeasureTool {
    start: Option<CellCoord>,
    last: Option<Measurement>,
}

impl MeasureTool {
    /// Die zuletzt abgeschlossene Messung (für die Host-Anzeige).
    pub fn last_measurement(&self) -> Option<Measurement> {
        self.last
    }
}

impl ToolMachine for MeasureTool {
    fn begin(&mut self, ctx: &mut ToolCtx, world: Vec2) {
        if self.start.is_none() {
            self.start = ctx.geometry.world_to_grid(world);
        }
    }

    fn update(&mut self, ctx: &mut ToolCtx, world: Vec2) {
        let (Some(from), Some(to)) = (self.start, ctx.geometry.world_to_grid(world)) else {
            return;
        };
        // Live-Anzeige während des Ziehens
        self.last = Some(Measurement {
            from,
            to,
            distance: ctx.geometry.cell_distance(from, to),
        });
    }

    fn end(&mut self, ctx: &mut ToolCtx, world: Vec2) {
        self.update(ctx, world);
        if let Some(measurement) = self.last {
            log::info!(
                "Distanz {:?} → {:?}: {} Zellen",
                measurement.from,
                measurement.to,
                measurement.distance
            );
        }
        self.start = None;
    }

    fn cancel(&mut self, _ctx: &mut ToolCtx) {
        self.start = None;
        self.last = None;
    }

    fn is_active(&self) -> bool {
        self.start.is_some()
    }
}
