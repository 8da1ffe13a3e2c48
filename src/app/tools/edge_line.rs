//! Kantenlinie: Zweiklick-Verbindung zweier Gitterpunkte.
//!
//! Die Linie wird als Taxicab-Pfad interpoliert — erst entlang der längeren
//! Achse, dann entlang der kürzeren — und jedes Gitterliniensegment auf
//! seinen kanonischen Kanten-Schlüssel abgebildet. Doppelte Schlüssel
//! (L-Knick über denselben Punkt) werden vor dem Anwenden dedupliziert.

use super::{ToolCtx, ToolMachine};
use crate::app::use_cases::apply::{apply_edges, RecordHistory};
use crate::core::{CornerPoint, Edge, EdgeKey, EdgeSide};
use glam::Vec2;
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
enum Phase {
    #[default]
    Idle,
    /// Erster Klick läuft noch
    Arming(CornerPoint),
    /// Startpunkt steht, warte auf den Endpunkt
    AnchorSet(CornerPoint),
}

/// State-Machine der Kantenlinie.
#[derive(Default)]
pub struct EdgeLineTool {
    phase: Phase,
}

/// Kanten-Schlüssel des Taxicab-Pfads zwischen zwei Gitterpunkten,
/// längere Achse zuerst, dedupliziert in Pfadreihenfolge.
fn line_edges(from: CornerPoint, to: CornerPoint) -> Vec<EdgeKey> {
    let (dx, dy) = (to.0 - from.0, to.1 - from.1);
    let (x0, x1) = (from.0.min(to.0), from.0.max(to.0));
    let (y0, y1) = (from.1.min(to.1), from.1.max(to.1));

    // Segment (x, y)–(x+1, y) ist die Südkante der Zelle (x, y),
    // Segment (x, y)–(x, y+1) die Westkante der Zelle (x, y).
    let mut keys = Vec::new();
    if dx.abs() >= dy.abs() {
        // Horizontal auf Höhe des Starts, dann vertikal bei x des Ziels
        keys.extend((x0..x1).map(|x| EdgeKey::canonical(x, from.1, EdgeSide::South)));
        keys.extend((y0..y1).map(|y| EdgeKey::canonical(to.0, y, EdgeSide::West)));
    } else {
        keys.extend((y0..y1).map(|y| EdgeKey::canonical(from.0, y, EdgeSide::West)));
        keys.extend((x0..x1).map(|x| EdgeKey::canonical(x, to.1, EdgeSide::South)));
    }

    let mut seen = HashSet::new();
    keys.retain(|key| seen.insert(*key));
    keys
}

impl ToolMachine for EdgeLineTool {
    fn begin(&mut self, ctx: &mut ToolCtx, world: Vec2) {
        if let Phase::Idle = self.phase {
            if let Some(corner) = ctx.geometry.corner_at(world) {
                self.phase = Phase::Arming(corner);
            }
        }
    }

    fn update(&mut self, _ctx: &mut ToolCtx, _world: Vec2) {}

    fn end(&mut self, ctx: &mut ToolCtx, world: Vec2) {
        match self.phase {
            Phase::Idle => {}
            Phase::Arming(anchor) => {
                self.phase = Phase::AnchorSet(anchor);
            }
            Phase::AnchorSet(anchor) => {
                let Some(target) = ctx.geometry.corner_at(world) else {
                    return;
                };
                self.phase = Phase::Idle;
                if target == anchor {
                    return;
                }
                let color = ctx.options.edge_color;
                let edits: Vec<(EdgeKey, Option<Edge>)> = line_edges(anchor, target)
                    .into_iter()
                    .map(|key| (key, Some(Edge { color })))
                    .collect();
                log::debug!(
                    "Kantenlinie {:?} → {:?}: {} Kanten",
                    anchor,
                    target,
                    edits.len()
                );
                apply_edges(
                    ctx.doc,
                    ctx.history,
                    &edits,
                    RecordHistory::Commit("Kantenlinie"),
                );
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
