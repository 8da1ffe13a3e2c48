//! Hit-Tests für Objekte und Labels.
//!
//! Trefferreihenfolge: Objekte per Achsen-AABB vor Labels per
//! Fontgrößen-Radius. Innerhalb einer Collection gewinnt das zuletzt
//! eingefügte (oberste) Element.

use crate::app::state::{SelectionRef, SelectionState};
use crate::core::{CellCoord, MapGeometry, MapLayer};
use glam::Vec2;

/// Oberstes Objekt, dessen AABB die Zelle abdeckt.
pub fn object_at(layer: &MapLayer, cell: CellCoord) -> Option<u64> {
    layer
        .objects
        .values()
        .rev()
        .find(|obj| {
            let (min, max) = obj.grid_aabb();
            cell.0 >= min.0 && cell.0 < max.0 && cell.1 >= min.1 && cell.1 < max.1
        })
        .map(|obj| obj.id)
}

/// Oberstes Label im Fontgrößen-Radius um den Weltpunkt.
pub fn label_at(layer: &MapLayer, world: Vec2) -> Option<u64> {
    layer
        .labels
        .values()
        .rev()
        .find(|label| (label.position - world).length() <= label.hit_radius())
        .map(|label| label.id)
}

/// Element unter dem Weltpunkt: Objekt vor Label.
pub fn item_at(layer: &MapLayer, geometry: &dyn MapGeometry, world: Vec2) -> Option<SelectionRef> {
    if let Some(cell) = geometry.world_to_grid(world) {
        if let Some(id) = object_at(layer, cell) {
            return Some(SelectionRef::Object(id));
        }
    }
    label_at(layer, world).map(SelectionRef::Label)
}

/// Prüft ob der Klick ein bereits selektiertes Element trifft
/// (Einstieg in den Gruppen-Drag).
pub fn selected_item_at(
    layer: &MapLayer,
    selection: &SelectionState,
    geometry: &dyn MapGeometry,
    world: Vec2,
) -> Option<SelectionRef> {
    if let Some(cell) = geometry.world_to_grid(world) {
        for id in selection.object_ids() {
            if let Some(obj) = layer.objects.get(&id) {
                let (min, max) = obj.grid_aabb();
                if cell.0 >= min.0 && cell.0 < max.0 && cell.1 >= min.1 && cell.1 < max.1 {
                    return Some(SelectionRef::Object(id));
                }
            }
        }
    }
    for id in selection.label_ids() {
        if let Some(label) = layer.labels.get(&id) {
            if (label.position - world).length() <= label.hit_radius() {
                return Some(SelectionRef::Label(id));
            }
        }
    }
    None
}
