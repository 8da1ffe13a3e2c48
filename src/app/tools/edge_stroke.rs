//! Kanten malen und radieren entlang eines Strichs.
//!
//! Jeder Abtastpunkt wird über `world_to_edge` auf die nächstgelegene
//! Gitterlinie projiziert (Hysterese über `edge_hit_threshold`); Gitter
//! ohne Kantenbegriff liefern `None` und der Strich bleibt ein No-Op.

use super::{ToolCtx, ToolMachine};
use crate::app::use_cases::apply::{apply_edges, RecordHistory};
use crate::core::{Edge, EdgeKey};
use glam::Vec2;
use std::collections::HashSet;

/// Malen oder Radieren — das `ToolSet` setzt den Modus vor dem Dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EdgeStrokeMode {
    #[default]
    Paint,
    Erase,
}

/// State-Machine für Kanten-Striche.
#[derive(Default)]
pub struct EdgeStrokeTool {
    mode: EdgeStrokeMode,
    active: bool,
    /// Im laufenden Strich bereits behandelte Kanten
    visited: HashSet<EdgeKey>,
    changed: bool,
}

impl EdgeStrokeTool {
    pub fn set_mode(&mut self, mode: EdgeStrokeMode) {
        if self.mode != mode {
            debug_assert!(!self.active);
            self.mode = mode;
        }
    }

    fn step(&mut self, ctx: &mut ToolCtx, world: Vec2) {
        let Some(key) = ctx
            .geometry
            .world_to_edge(world, ctx.options.edge_hit_threshold)
        else {
            return;
        };
        if !self.visited.insert(key) {
            return;
        }
        let edit = match self.mode {
            EdgeStrokeMode::Paint => (
                key,
                Some(Edge {
                    color: ctx.options.edge_color,
                }),
            ),
            EdgeStrokeMode::Erase => {
                if !ctx.doc.active().edges.contains_key(&key) {
                    return;
                }
                (key, None)
            }
        };
        apply_edges(ctx.doc, ctx.history, &[edit], RecordHistory::Suppress);
        self.changed = true;
    }

    fn commit_name(&self) -> &'static str {
        match self.mode {
            EdgeStrokeMode::Paint => "Kanten malen",
            EdgeStrokeMode::Erase => "Kanten radieren",
        }
    }
}

impl ToolMachine for EdgeStrokeTool {
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

    fn end(&mut self, ctx: &mut ToolCtx, _world: Vec2) {
        if !self.active {
            return;
        }
        self.active = false;
        self.visited.clear();
        if self.changed {
            ctx.history
                .commit_gesture(ctx.doc.active_arc(), self.commit_name());
        } else {
            ctx.history.cancel_gesture();
        }
        self.changed = false;
    }

    fn cancel(&mut self, ctx: &mut ToolCtx) {
        if !self.active {
            return;
        }
        self.active = false;
        self.visited.clear();
        self.changed = false;
        ctx.history.cancel_gesture();
    }

    fn is_active(&self) -> bool {
        self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::events::PointerSource;
    use crate::app::history::HistoryState;
    use crate::app::state::{SelectionState, ViewState};
    use crate::core::{EdgeSide, HexGrid, MapDocument, MapGeometry, SquareGrid};
    use crate::shared::EditorOptions;

    struct Fixture {
        doc: MapDocument,
        geometry: Box<dyn MapGeometry>,
        history: HistoryState,
        selection: SelectionState,
        view: ViewState,
        options: EditorOptions,
    }

    impl Fixture {
        fn new() -> Self {
            let doc = MapDocument::new();
            let history = HistoryState::new(50, doc.active_arc());
            Self {
                doc,
                geometry: Box::new(SquareGrid::new(1.0)),
                history,
                selection: SelectionState::default(),
                view: ViewState::new(),
                options: EditorOptions::default(),
            }
        }

        fn ctx(&mut self) -> ToolCtx<'_> {
            ToolCtx {
                doc: &mut self.doc,
                geometry: self.geometry.as_ref(),
                history: &mut self.history,
                selection: &mut self.selection,
                view: &mut self.view,
                options: &self.options,
                source: PointerSource::Mouse,
            }
        }
    }

    #[test]
    fn stroke_along_grid_line_paints_edges() {
        let mut fx = Fixture::new();
        let mut tool = EdgeStrokeTool::default();
        let before = fx.history.active_len();

        let mut ctx = fx.ctx();
        // Entlang der Westkante x = 1, über zwei Zellen
        tool.begin(&mut ctx, Vec2::new(1.02, 0.5));
        tool.update(&mut ctx, Vec2::new(0.98, 1.5));
        tool.end(&mut ctx, Vec2::new(0.98, 1.5));

        let edges = &fx.doc.active().edges;
        assert_eq!(edges.len(), 2);
        assert!(edges.contains_key(&EdgeKey::canonical(1, 0, EdgeSide::West)));
        assert!(edges.contains_key(&EdgeKey::canonical(1, 1, EdgeSide::West)));
        assert_eq!(fx.history.active_len(), before + 1);
    }

    #[test]
    fn cell_center_hits_no_edge() {
        let mut fx = Fixture::new();
        let mut tool = EdgeStrokeTool::default();
        let before = fx.history.active_len();

        let mut ctx = fx.ctx();
        tool.begin(&mut ctx, Vec2::new(0.5, 0.5));
        tool.end(&mut ctx, Vec2::new(0.5, 0.5));

        assert!(fx.doc.active().edges.is_empty());
        assert_eq!(fx.history.active_len(), before);
    }

    #[test]
    fn erase_only_touches_painted_edges() {
        let mut fx = Fixture::new();
        {
            let mut paint = EdgeStrokeTool::default();
            let mut ctx = fx.ctx();
            paint.begin(&mut ctx, Vec2::new(1.02, 0.5));
            paint.end(&mut ctx, Vec2::new(1.02, 0.5));
        }
        let before = fx.history.active_len();

        let mut tool = EdgeStrokeTool::default();
        tool.set_mode(EdgeStrokeMode::Erase);
        let mut ctx = fx.ctx();
        tool.begin(&mut ctx, Vec2::new(1.02, 0.5));
        // Zweiter Punkt trifft eine unbemalte Kante: kein Effekt
        tool.update(&mut ctx, Vec2::new(2.02, 0.5));
        tool.end(&mut ctx, Vec2::new(2.02, 0.5));

        assert!(fx.doc.active().edges.is_empty());
        assert_eq!(fx.history.active_len(), before + 1);
    }

    #[test]
    fn hex_grid_stroke_is_unhandled() {
        let mut fx = Fixture::new();
        fx.geometry = Box::new(HexGrid::new(1.0));
        let mut tool = EdgeStrokeTool::default();
        let before = fx.history.active_len();

        let mut ctx = fx.ctx();
        tool.begin(&mut ctx, Vec2::new(1.0, 0.5));
        tool.end(&mut ctx, Vec2::new(1.0, 0.5));

        assert!(fx.doc.active().edges.is_empty());
        assert_eq!(fx.history.active_len(), before);
    }
}
