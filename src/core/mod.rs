//! Kern-Datenmodell: Zellen, Kanten, Objekte, Labels, Geometrie und Kamera.
//!
//! Alles hier ist reine Datenhaltung + deterministische Mathematik — keine
//! Event-Verarbeitung, kein Undo, keine UI. Mutationen laufen ausschließlich
//! über die Apply-Funktionen im Application-Layer.

pub mod camera;
pub mod cell;
pub mod edge;
pub mod geometry;
pub mod map_document;
pub mod map_object;
pub mod text_label;

pub use camera::Camera2D;
pub use cell::{Cell, Rgba, SegmentCorner};
pub use edge::{Edge, EdgeKey, EdgeSide};
pub use geometry::{CellCoord, CornerPoint, GridBounds, HexGrid, MapGeometry, SquareGrid};
pub use map_document::{LayerId, MapDocument, MapLayer};
pub use map_object::{MapObject, ObjectSize, OBJECT_MAX_SPAN};
pub use text_label::{LabelRotation, TextLabel, LABEL_POINTS_PER_WORLD_UNIT};
