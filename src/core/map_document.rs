//! Map-Dokument: Layer mit Zellen, Kanten, Objekten und Labels.
//!
//! Layer hängen als `Arc<MapLayer>` im Dokument (Copy-on-Write): ein
//! History-Snapshot ist ein O(1)-Arc-Klon, der teure Klon passiert erst beim
//! nächsten `Arc::make_mut` in einer mutierenden Operation.

use super::cell::Cell;
use super::edge::{Edge, EdgeKey};
use super::geometry::CellCoord;
use super::map_object::MapObject;
use super::text_label::TextLabel;
use indexmap::IndexMap;
use std::collections::HashMap;
use std::sync::Arc;

/// Layer-Kennung.
pub type LayerId = u64;

/// Der editierbare Zustand eines Layers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MapLayer {
    /// Bemalte Zellen, höchstens ein Eintrag pro Koordinate
    pub cells: HashMap<CellCoord, Cell>,
    /// Bemalte Kanten unter kanonischen Schlüsseln
    pub edges: HashMap<EdgeKey, Edge>,
    /// Platzierte Objekte in Einfüge-Reihenfolge
    pub objects: IndexMap<u64, MapObject>,
    /// Textlabels in Einfüge-Reihenfolge
    pub labels: IndexMap<u64, TextLabel>,
}

impl MapLayer {
    /// Gibt `true` zurück wenn der Layer keinerlei Inhalt hat.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
            && self.edges.is_empty()
            && self.objects.is_empty()
            && self.labels.is_empty()
    }
}

/// Das geteilte Map-Dokument: alle Layer plus aktiver Layer und Id-Zähler.
#[derive(Debug, Clone)]
pub struct MapDocument {
    /// Layer in Anzeige-Reihenfolge
    pub layers: IndexMap<LayerId, Arc<MapLayer>>,
    /// Kennung des aktiven Layers (Ziel aller Editier-Operationen)
    pub active_layer: LayerId,
    next_layer_id: LayerId,
    next_item_id: u64,
}

impl MapDocument {
    /// Erstellt ein Dokument mit einem leeren Layer.
    pub fn new() -> Self {
        let mut layers = IndexMap::new();
        layers.insert(0, Arc::new(MapLayer::default()));
        Self {
            layers,
            active_layer: 0,
            next_layer_id: 1,
            next_item_id: 1,
        }
    }

    /// Referenz auf den aktiven Layer.
    pub fn active(&self) -> &MapLayer {
        self.layers
            .get(&self.active_layer)
            .expect("aktiver Layer existiert immer")
    }

    /// Mutable Referenz auf den aktiven Layer (CoW: klont nur wenn geteilt).
    pub fn active_mut(&mut self) -> &mut MapLayer {
        let arc = self
            .layers
            .get_mut(&self.active_layer)
            .expect("aktiver Layer existiert immer");
        Arc::make_mut(arc)
    }

    /// Arc-Klon des aktiven Layers (O(1), Basis für History-Snapshots).
    pub fn active_arc(&self) -> Arc<MapLayer> {
        Arc::clone(
            self.layers
                .get(&self.active_layer)
                .expect("aktiver Layer existiert immer"),
        )
    }

    /// Ersetzt den aktiven Layer durch einen Snapshot (O(1)).
    pub fn restore_active(&mut self, layer: Arc<MapLayer>) {
        self.layers.insert(self.active_layer, layer);
    }

    /// Legt einen neuen leeren Layer an und gibt dessen Id zurück.
    pub fn add_layer(&mut self) -> LayerId {
        let id = self.next_layer_id;
        self.next_layer_id += 1;
        self.layers.insert(id, Arc::new(MapLayer::default()));
        id
    }

    /// Entfernt einen Layer. Der letzte verbleibende Layer und unbekannte
    /// Ids werden still abgelehnt. Gibt `true` bei Erfolg zurück.
    pub fn remove_layer(&mut self, id: LayerId) -> bool {
        if self.layers.len() <= 1 || !self.layers.contains_key(&id) {
            return false;
        }
        self.layers.shift_remove(&id);
        if self.active_layer == id {
            self.active_layer = *self.layers.keys().next().expect("mindestens ein Layer");
        }
        true
    }

    /// Wechselt den aktiven Layer. Unbekannte Ids werden abgelehnt.
    pub fn set_active_layer(&mut self, id: LayerId) -> bool {
        if !self.layers.contains_key(&id) {
            return false;
        }
        self.active_layer = id;
        true
    }

    /// Vergibt die nächste Objekt-/Label-Id (dokumentweit eindeutig).
    pub fn alloc_item_id(&mut self) -> u64 {
        let id = self.next_item_id;
        self.next_item_id += 1;
        id
    }
}

impl Default for MapDocument {
    fn default() -> Self {
        Self::new()
    }
}
