use super::PointerSource;
use crate::app::tools::ToolId;
use crate::core::{LayerId, Rgba, SegmentCorner, TextLabel};
use crate::shared::EditorOptions;

/// Commands sind mutierende Schritte, die zentral im Controller ausgeführt
/// werden.
#[derive(Debug, Clone)]
pub enum EditorCommand {
    /// Editor-Werkzeug wechseln (bricht alle laufenden Gesten ab)
    SetTool { tool: ToolId },

    // ── Tool-Lebenszyklus ───────────────────────────────────────
    /// Aktives Tool: Geste beginnen
    ToolBegin {
        world: glam::Vec2,
        source: PointerSource,
    },
    /// Aktives Tool: Geste fortsetzen
    ToolUpdate {
        world: glam::Vec2,
        source: PointerSource,
    },
    /// Aktives Tool: Geste beenden
    ToolEnd {
        world: glam::Vec2,
        source: PointerSource,
    },
    /// Alle Tool-State-Machines zurücksetzen
    CancelAllTools,

    // ── Selektion & Drag ────────────────────────────────────────
    /// Element unter dem Klickpunkt selektieren
    PickItem { world: glam::Vec2, additive: bool },
    /// Selektion aufheben
    ClearSelection,
    /// Selektierte Elemente löschen
    DeleteSelected,
    /// Gruppen-Drag starten
    GroupDragBegin { world: glam::Vec2 },
    /// Gruppen-Drag aktualisieren
    GroupDragUpdate { world: glam::Vec2 },
    /// Gruppen-Drag beenden
    GroupDragEnd,
    /// Resize starten
    ResizeBegin { world: glam::Vec2 },
    /// Resize aktualisieren
    ResizeUpdate { world: glam::Vec2 },
    /// Resize beenden
    ResizeEnd,

    // ── History ─────────────────────────────────────────────────
    /// Undo: Letzte Aktion rückgängig machen
    Undo,
    /// Redo: Rückgängig gemachte Aktion wiederherstellen
    Redo,

    // ── Kamera & Viewport ───────────────────────────────────────
    /// Kamera um Delta verschieben
    PanCamera { delta: glam::Vec2 },
    /// Kamera zoomen (optional auf Fokuspunkt)
    ZoomCamera {
        factor: f32,
        focus_world: Option<glam::Vec2>,
    },
    /// Stufenweise hineinzoomen
    ZoomIn,
    /// Stufenweise herauszoomen
    ZoomOut,
    /// Kamera auf Standard zurücksetzen
    ResetCamera,
    /// Viewport-Größe setzen
    SetViewportSize { size: [f32; 2] },

    // ── Segment-Picker ──────────────────────────────────────────
    /// Segment im Touch-Picker an-/abwählen
    ToggleSegmentPick { corner: SegmentCorner },
    /// Touch-Picker bestätigen
    ConfirmSegmentPick,

    // ── Host-Dialoge ────────────────────────────────────────────
    /// Label-Editier-Dialog für das Label unter dem Punkt anfordern
    RequestLabelEdit { world: glam::Vec2 },
    /// Label-Dialog-Ergebnis anwenden
    ApplyLabelEdit { label: TextLabel },
    /// Kontextmenü-Ziel bestimmen
    SetContextTarget { world: glam::Vec2 },

    // ── Objekte & Labels ────────────────────────────────────────
    /// Objekt an Weltposition platzieren
    PlaceObject { world: glam::Vec2 },
    /// Selektierte Objekte duplizieren
    DuplicateSelected,
    /// Objektfarbe setzen
    SetObjectColor { id: u64, color: Option<Rgba> },
    /// Objektrotation setzen
    SetObjectRotation { id: u64, rotation: f32 },
    /// Label an Weltposition anlegen
    PlaceLabel { world: glam::Vec2, content: String },

    // ── Layer ───────────────────────────────────────────────────
    /// Neuen Layer anlegen und aktivieren
    AddLayer,
    /// Layer entfernen
    RemoveLayer { id: LayerId },
    /// Aktiven Layer wechseln
    SetActiveLayer { id: LayerId },

    // ── Optionen ────────────────────────────────────────────────
    /// Optionen anwenden
    ApplyOptions { options: EditorOptions },
}
