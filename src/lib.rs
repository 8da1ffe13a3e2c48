//! MapWright — Interaktionskern eines 2D-Karten-Editors.
//!
//! Die Crate enthält Event-Koordination, Tool-State-Machines, Gruppen-Drag
//! und Snapshot-basiertes Undo/Redo; Rendering, Persistenz und Dialoge
//! liegen beim Host.

pub mod app;
pub mod core;
pub mod input;
pub mod shared;

pub use app::{
    AppController, AppState, CommandLog, EditorCommand, EditorIntent, PointerSource, SelectionRef,
    SelectionState, ToolId, UiState, ViewState,
};
pub use core::{
    Camera2D, Cell, CellCoord, Edge, EdgeKey, EdgeSide, HexGrid, LayerId, MapDocument, MapGeometry,
    MapLayer, MapObject, ObjectSize, Rgba, SegmentCorner, SquareGrid, TextLabel,
};
pub use input::{InputEvent, InputState, Key, PointerButton};
pub use shared::EditorOptions;
