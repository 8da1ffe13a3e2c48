//! Tool-State-Machines für alle Zeichen- und Interaktions-Werkzeuge.
//!
//! Jede Werkzeug-Familie implementiert den `ToolMachine`-Trait; das `ToolSet`
//! hält genau eine Instanz pro Familie und dispatcht über die geschlossene
//! `ToolId`-Enum. Tools mutieren das Dokument nie direkt, sondern immer über
//! die Apply-Funktionen in `use_cases::apply` — nur so greifen History-
//! Bündelung und Restore-Latch einheitlich.

/// Diagonal-Füllung: konkave Treppen-Ecken mit Halbzellen-Segmenten glätten.
pub mod diagonal_fill;
/// Kantenlinie: Taxicab-Interpolation zwischen zwei Gitterpunkten.
pub mod edge_line;
/// Kanten malen/radieren entlang eines Strichs.
pub mod edge_stroke;
/// Freihand-Malen und -Radieren mit Besucht-Menge pro Strich.
pub mod freehand;
/// Gruppen-Drag-Engine für Mehrfach-Selektionen.
pub mod group_drag;
/// Hintergrundbild-Ausrichtung (reine View-Mutation).
pub mod image_align;
/// Distanz-Messung (keine Dokument-Mutation).
pub mod measure;
/// Segment-Tool: Halbzellen-Segmente per Quadranten-Treffer.
pub mod segment;
/// Zweiklick-Formen: Rechteck, Kreis (Chebyshev), Fläche löschen.
pub mod shape_fill;
/// Eckgriff-Resize eines einzelnen selektierten Objekts.
pub mod resize;

pub use diagonal_fill::DiagonalFillTool;
pub use edge_line::EdgeLineTool;
pub use edge_stroke::EdgeStrokeTool;
pub use freehand::FreehandTool;
pub use group_drag::GroupDragTool;
pub use image_align::ImageAlignTool;
pub use measure::MeasureTool;
pub use resize::ResizeTool;
pub use segment::SegmentTool;
pub use shape_fill::ShapeFillTool;

use crate::app::events::PointerSource;
use crate::app::history::HistoryState;
use crate::app::state::{SelectionState, ViewState};
use crate::core::{MapDocument, MapGeometry};
use crate::shared::EditorOptions;

// ── Typen ────────────────────────────────────────────────────────

/// Geschlossene Werkzeug-Kennung. Der Eingabe-Koordinator und die Handler
/// dispatchen ausschließlich über diese Enum, nie über Strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ToolId {
    /// Standard: Elemente selektieren, verschieben, Größe ändern
    #[default]
    Select,
    /// Freihand-Malen
    Paint,
    /// Freihand-Radieren (Label → Kante → Objekt → Zelle)
    Erase,
    /// Rechteck füllen (Zweiklick)
    RectFill,
    /// Kreis füllen (Chebyshev-Radius, Zweiklick)
    CircleFill,
    /// Fläche löschen (Zweiklick)
    ClearArea,
    /// Kanten malen
    EdgePaint,
    /// Kanten radieren
    EdgeErase,
    /// Kantenlinie zwischen zwei Gitterpunkten
    EdgeLine,
    /// Halbzellen-Segmente malen
    Segment,
    /// Diagonal-Füllung (Treppen glätten)
    DiagonalFill,
    /// Distanz messen
    Measure,
    /// Hintergrundbild ausrichten
    ImageAlign,
}

impl ToolId {
    /// Werkzeuge der Zeichen-Familie: Pointer-Down startet die State-Machine
    /// und hebt eine bestehende Mehrfach-Selektion auf.
    pub fn is_drawing(self) -> bool {
        !matches!(self, ToolId::Select | ToolId::Measure | ToolId::ImageAlign)
    }
}

/// Expliziter Borrow-Kontext, den die Handler in die Machines reichen —
/// kein ambienter globaler Zustand.
pub struct ToolCtx<'a> {
    pub doc: &'a mut MapDocument,
    pub geometry: &'a dyn MapGeometry,
    pub history: &'a mut HistoryState,
    pub selection: &'a mut SelectionState,
    pub view: &'a mut ViewState,
    pub options: &'a EditorOptions,
    /// Herkunft des auslösenden Events (Maus oder Touch)
    pub source: PointerSource,
}

/// Lebenszyklus einer Tool-Geste.
///
/// Alle Operationen sind idempotent außerhalb ihres gültigen Zustands:
/// `update`/`end` ohne laufende Geste und doppeltes `cancel` sind No-Ops.
pub trait ToolMachine {
    /// Geste beginnen (Pointer-Down bzw. Klick-Phase).
    fn begin(&mut self, ctx: &mut ToolCtx, world: glam::Vec2);

    /// Geste fortsetzen (Pointer-Move bei gedrücktem Zeiger).
    fn update(&mut self, ctx: &mut ToolCtx, world: glam::Vec2);

    /// Geste beenden (Pointer-Up).
    fn end(&mut self, ctx: &mut ToolCtx, world: glam::Vec2);

    /// Geste verwerfen (Tool-Wechsel, Pointer-Leave, Escape, zweiter Finger).
    fn cancel(&mut self, ctx: &mut ToolCtx);

    /// Läuft gerade eine Geste bzw. wartet das Tool auf weitere Eingabe?
    fn is_active(&self) -> bool;
}

// ── ToolSet ──────────────────────────────────────────────────────

/// Hält genau eine State-Machine pro Werkzeug-Familie und dispatcht per
/// Match-Tabelle über `ToolId`.
///
/// Gruppen-Drag und Resize laufen unter dem Select-Tool und werden von den
/// Handlern direkt angesprochen; `cancel_all` erfasst auch sie.
#[derive(Default)]
pub struct ToolSet {
    pub freehand: FreehandTool,
    pub shape: ShapeFillTool,
    pub edge_stroke: EdgeStrokeTool,
    pub edge_line: EdgeLineTool,
    pub segment: SegmentTool,
    pub diagonal: DiagonalFillTool,
    pub group_drag: GroupDragTool,
    pub resize: ResizeTool,
    pub measure: MeasureTool,
    pub image_align: ImageAlignTool,
}

impl ToolSet {
    fn machine_mut(&mut self, id: ToolId) -> Option<&mut dyn ToolMachine> {
        match id {
            ToolId::Select => None,
            ToolId::Paint => {
                self.freehand.set_mode(freehand::FreehandMode::Paint);
                Some(&mut self.freehand)
            }
            ToolId::Erase => {
                self.freehand.set_mode(freehand::FreehandMode::Erase);
                Some(&mut self.freehand)
            }
            ToolId::RectFill => {
                self.shape.set_kind(shape_fill::ShapeKind::Rect);
                Some(&mut self.shape)
            }
            ToolId::CircleFill => {
                self.shape.set_kind(shape_fill::ShapeKind::Circle);
                Some(&mut self.shape)
            }
            ToolId::ClearArea => {
                self.shape.set_kind(shape_fill::ShapeKind::Clear);
                Some(&mut self.shape)
            }
            ToolId::EdgePaint => {
                self.edge_stroke.set_mode(edge_stroke::EdgeStrokeMode::Paint);
                Some(&mut self.edge_stroke)
            }
            ToolId::EdgeErase => {
                self.edge_stroke.set_mode(edge_stroke::EdgeStrokeMode::Erase);
                Some(&mut self.edge_stroke)
            }
            ToolId::EdgeLine => Some(&mut self.edge_line),
            ToolId::Segment => Some(&mut self.segment),
            ToolId::DiagonalFill => Some(&mut self.diagonal),
            ToolId::Measure => Some(&mut self.measure),
            ToolId::ImageAlign => Some(&mut self.image_align),
        }
    }

    /// Geste auf dem Werkzeug `id` beginnen.
    pub fn begin(&mut self, id: ToolId, ctx: &mut ToolCtx, world: glam::Vec2) {
        if let Some(machine) = self.machine_mut(id) {
            machine.begin(ctx, world);
        }
    }

    /// Geste auf dem Werkzeug `id` fortsetzen.
    pub fn update(&mut self, id: ToolId, ctx: &mut ToolCtx, world: glam::Vec2) {
        if let Some(machine) = self.machine_mut(id) {
            machine.update(ctx, world);
        }
    }

    /// Geste auf dem Werkzeug `id` beenden.
    pub fn end(&mut self, id: ToolId, ctx: &mut ToolCtx, world: glam::Vec2) {
        if let Some(machine) = self.machine_mut(id) {
            machine.end(ctx, world);
        }
    }

    /// Setzt ALLE Machines zurück — nicht nur die aktive. Kein Strich-
    /// Baseline, Anker oder Offset darf einen Tool-Wechsel überleben.
    pub fn cancel_all(&mut self, ctx: &mut ToolCtx) {
        self.freehand.cancel(ctx);
        self.shape.cancel(ctx);
        self.edge_stroke.cancel(ctx);
        self.edge_line.cancel(ctx);
        self.segment.cancel(ctx);
        self.diagonal.cancel(ctx);
        self.group_drag.cancel(ctx);
        self.resize.cancel(ctx);
        self.measure.cancel(ctx);
        self.image_align.cancel(ctx);
    }

    /// Läuft irgendeine Geste (für die stufenweise Escape-Logik)?
    pub fn any_active(&self) -> bool {
        self.freehand.is_active()
            || self.shape.is_active()
            || self.edge_stroke.is_active()
            || self.edge_line.is_active()
            || self.segment.is_active()
            || self.diagonal.is_active()
            || self.group_drag.is_active()
            || self.resize.is_active()
            || self.measure.is_active()
            || self.image_align.is_active()
    }
}
