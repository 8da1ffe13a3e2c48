use super::PointerSource;
use crate::app::tools::ToolId;
use crate::core::{LayerId, Rgba, SegmentCorner, TextLabel};
use crate::shared::EditorOptions;

/// Intents sind Eingaben aus Eingabe-Koordinator oder Host-UI ohne direkte
/// Mutationslogik. Die Übersetzung in Commands übernimmt `intent_mapping`.
#[derive(Debug, Clone)]
pub enum EditorIntent {
    // ── Tool-Gesten (vom Eingabe-Koordinator) ───────────────────
    /// Zeichen-Geste gestartet (Pointer-Down auf dem aktiven Tool)
    ToolStrokeBegan {
        world: glam::Vec2,
        source: PointerSource,
    },
    /// Zeichen-Geste fortgesetzt (Pointer-Move bei gedrücktem Zeiger)
    ToolStrokeMoved {
        world: glam::Vec2,
        source: PointerSource,
    },
    /// Zeichen-Geste beendet (Pointer-Up)
    ToolStrokeEnded {
        world: glam::Vec2,
        source: PointerSource,
    },
    /// Geste abgebrochen (zweiter Finger, Pointer verlässt die Fläche)
    ToolStrokeCancelled,

    // ── Selektion & Drag ────────────────────────────────────────
    /// Element per Klick selektieren
    ItemPickRequested { world: glam::Vec2, additive: bool },
    /// Selektion aufheben (Klick auf leere Fläche unter 5 px Bewegung)
    DeselectRequested,
    /// Gruppen-Drag auf selektiertem Element gestartet
    GroupDragStarted { world: glam::Vec2 },
    /// Gruppen-Drag-Position aktualisiert
    GroupDragMoved { world: glam::Vec2 },
    /// Gruppen-Drag beendet
    GroupDragEnded,
    /// Eckgriff eines selektierten Objekts gegriffen (Resize)
    ResizeStarted { world: glam::Vec2 },
    /// Resize-Position aktualisiert
    ResizeMoved { world: glam::Vec2 },
    /// Resize beendet
    ResizeEnded,

    // ── Tastatur ────────────────────────────────────────────────
    /// Escape: stufenweiser Abbruch (Geste → Selektion → Select-Tool)
    EscapePressed,
    /// Selektierte Elemente löschen
    DeleteSelectedRequested,
    /// Editor-Werkzeug wechseln
    SetToolRequested { tool: ToolId },
    /// Undo: Letzte Aktion rückgängig machen
    UndoRequested,
    /// Redo: Rückgängig gemachte Aktion wiederherstellen
    RedoRequested,

    // ── Kamera & Viewport ───────────────────────────────────────
    /// Kamera um Delta verschieben (Welt-Einheiten)
    CameraPan { delta: glam::Vec2 },
    /// Kamera zoomen (optional auf einen Fokuspunkt)
    CameraZoom {
        factor: f32,
        focus_world: Option<glam::Vec2>,
    },
    /// Stufenweise hineinzoomen
    ZoomInRequested,
    /// Stufenweise herauszoomen
    ZoomOutRequested,
    /// Kamera auf Standard zurücksetzen
    ResetCameraRequested,
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },

    // ── Segment-Picker (Touch) ──────────────────────────────────
    /// Segment im Touch-Picker an-/abwählen
    SegmentPickToggled { corner: SegmentCorner },
    /// Touch-Picker bestätigt (alle gewählten Segmente anwenden)
    SegmentPickConfirmed,

    // ── Host-Dialoge ────────────────────────────────────────────
    /// Doppelklick auf Label: Editier-Dialog anfordern
    LabelEditRequested { world: glam::Vec2 },
    /// Label-Dialog-Ergebnis anwenden
    LabelEditApplied { label: TextLabel },
    /// Kontextmenü-Ziel unter dem Zeiger bestimmen
    ContextTargetRequested { world: glam::Vec2 },

    // ── Objekte & Labels (Host-UI) ──────────────────────────────
    /// Objekt an Weltposition platzieren
    PlaceObjectRequested { world: glam::Vec2 },
    /// Selektierte Objekte duplizieren
    DuplicateSelectedRequested,
    /// Objektfarbe setzen (None = Farbe entfernen)
    SetObjectColorRequested { id: u64, color: Option<Rgba> },
    /// Objektrotation setzen (Grad)
    SetObjectRotationRequested { id: u64, rotation: f32 },
    /// Label an Weltposition anlegen
    PlaceLabelRequested { world: glam::Vec2, content: String },

    // ── Layer ───────────────────────────────────────────────────
    /// Neuen Layer anlegen
    AddLayerRequested,
    /// Layer entfernen (letzter Layer wird abgelehnt)
    RemoveLayerRequested { id: LayerId },
    /// Aktiven Layer wechseln
    SetActiveLayerRequested { id: LayerId },

    // ── Optionen ────────────────────────────────────────────────
    /// Optionen wurden geändert (sofortige Anwendung)
    OptionsChanged { options: EditorOptions },
}
