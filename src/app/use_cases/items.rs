//! Objekt- und Label-Operationen: Platzieren, Duplizieren, Löschen,
//! Farbe/Rotation. Alle Schreibzugriffe laufen über die Apply-Boundary,
//! Validierung (Bounds, Kollision, Hex-Slots) passiert vollständig vorab.

use crate::app::history::HistoryState;
use crate::app::state::{SelectionRef, SelectionState};
use crate::app::use_cases::apply::{apply_labels, apply_objects, RecordHistory};
use crate::core::{CellCoord, MapDocument, MapGeometry, MapObject, Rgba, TextLabel};
use glam::Vec2;

/// Prüft ob ein Kandidat-Objekt platziert werden darf.
///
/// Alle abgedeckten Zellen müssen innerhalb der Gittergrenzen liegen und
/// die AABB darf kein fremdes Objekt überlappen (Slot-Koexistenz auf Hex
/// eingerechnet). `ignore` nennt Ids, die bei der Kollisionsprüfung
/// übersprungen werden (das Objekt selbst bzw. die bewegte Gruppe).
pub fn placement_valid(
    doc: &MapDocument,
    geometry: &dyn MapGeometry,
    candidate: &MapObject,
    ignore: &[u64],
) -> bool {
    let (min, max) = candidate.grid_aabb();
    for x in min.0..max.0 {
        for y in min.1..max.1 {
            if !geometry.is_within_bounds((x, y)) {
                return false;
            }
        }
    }
    doc.active()
        .objects
        .values()
        .filter(|other| other.id != candidate.id && !ignore.contains(&other.id))
        .all(|other| !candidate.overlaps(other))
}

/// Sucht auf Slot-fähigen Gittern den ersten freien Slot der Zelle.
fn free_slot(doc: &MapDocument, geometry: &dyn MapGeometry, position: CellCoord) -> Option<u8> {
    let capacity = geometry.slot_capacity();
    if capacity <= 1 {
        return None;
    }
    let occupied: Vec<u8> = doc
        .active()
        .objects
        .values()
        .filter(|obj| obj.position == position)
        .filter_map(|obj| obj.slot)
        .collect();
    (0..capacity).find(|slot| !occupied.contains(slot))
}

/// Platziert ein neues 1×1-Objekt an der Weltposition.
///
/// Auf Hex-Gittern wird automatisch der erste freie Slot vergeben.
/// Gibt die neue Objekt-Id zurück, `None` wenn die Platzierung abgelehnt
/// wurde (außerhalb des Gitters, Kollision, Zelle voll).
pub fn place_object(
    doc: &mut MapDocument,
    history: &mut HistoryState,
    geometry: &dyn MapGeometry,
    world: Vec2,
) -> Option<u64> {
    let cell = geometry.world_to_grid(world)?;
    if !geometry.is_within_bounds(cell) {
        return None;
    }
    let id = doc.alloc_item_id();
    let mut object = MapObject::new(id, cell);
    if geometry.slot_capacity() > 1 {
        object.slot = free_slot(doc, geometry, cell);
        if object.slot.is_none() {
            return None;
        }
    }
    if !placement_valid(doc, geometry, &object, &[]) {
        return None;
    }
    log::debug!("Objekt {} auf Zelle {:?} platziert", id, cell);
    let mut objects = doc.active().objects.clone();
    objects.insert(id, object);
    apply_objects(doc, history, objects, RecordHistory::Commit("Objekt platziert"));
    Some(id)
}

/// Dupliziert die selektierten Objekte und Labels.
///
/// Für jedes Objekt wird ein freier Versatz in wachsendem Umkreis gesucht;
/// Objekte ohne gültigen Platz werden still übersprungen. Labels bekommen
/// einen festen kleinen Weltversatz. Eine Selektion ohne duplizierbare
/// Elemente erzeugt keinen History-Eintrag. Gibt die Refs der Kopien
/// zurück (die neue Selektion).
pub fn duplicate_selected(
    doc: &mut MapDocument,
    history: &mut HistoryState,
    geometry: &dyn MapGeometry,
    selection: &SelectionState,
) -> Vec<SelectionRef> {
    let mut created = Vec::new();
    let mut objects = doc.active().objects.clone();
    let mut objects_changed = false;

    for id in selection.object_ids() {
        let Some(source) = doc.active().objects.get(&id).cloned() else {
            continue;
        };
        let new_id = doc.alloc_item_id();
        let mut copy = source.clone();
        copy.id = new_id;
        let mut placed = false;
        'search: for ring in 1..=4 {
            for (dx, dy) in offset_ring(ring) {
                copy.position = (source.position.0 + dx, source.position.1 + dy);
                if fits(&objects, geometry, &copy) {
                    placed = true;
                    break 'search;
                }
            }
        }
        if !placed {
            log::debug!("Objekt {} nicht dupliziert, kein freier Platz", id);
            continue;
        }
        objects.insert(new_id, copy);
        objects_changed = true;
        created.push(SelectionRef::Object(new_id));
    }

    let mut labels = doc.active().labels.clone();
    let mut labels_changed = false;
    for id in selection.label_ids() {
        let Some(source) = doc.active().labels.get(&id).cloned() else {
            continue;
        };
        let new_id = doc.alloc_item_id();
        let mut copy = source;
        copy.id = new_id;
        copy.position += Vec2::new(0.5, 0.5);
        labels.insert(new_id, copy);
        labels_changed = true;
        created.push(SelectionRef::Label(new_id));
    }

    if objects_changed && labels_changed {
        apply_objects(doc, history, objects, RecordHistory::Suppress);
        apply_labels(doc, history, labels, RecordHistory::Commit("Dupliziert"));
    } else if objects_changed {
        apply_objects(doc, history, objects, RecordHistory::Commit("Dupliziert"));
    } else if labels_changed {
        apply_labels(doc, history, labels, RecordHistory::Commit("Dupliziert"));
    }
    created
}

/// Platzierungsprüfung gegen eine Arbeitskopie der Objekt-Collection
/// (die Duplikat-Suche validiert gegen schon eingefügte Kopien mit).
fn fits(
    objects: &indexmap::IndexMap<u64, MapObject>,
    geometry: &dyn MapGeometry,
    candidate: &MapObject,
) -> bool {
    let (min, max) = candidate.grid_aabb();
    for x in min.0..max.0 {
        for y in min.1..max.1 {
            if !geometry.is_within_bounds((x, y)) {
                return false;
            }
        }
    }
    objects
        .values()
        .filter(|other| other.id != candidate.id)
        .all(|other| !candidate.overlaps(other))
}

/// Zellversätze mit Chebyshev-Abstand genau `ring`, nahe zuerst.
fn offset_ring(ring: i32) -> Vec<(i32, i32)> {
    let mut out = Vec::new();
    for dx in -ring..=ring {
        for dy in -ring..=ring {
            if dx.abs().max(dy.abs()) == ring {
                out.push((dx, dy));
            }
        }
    }
    out
}

/// Setzt oder löscht die Farbüberschreibung eines Objekts.
pub fn set_object_color(
    doc: &mut MapDocument,
    history: &mut HistoryState,
    id: u64,
    color: Option<Rgba>,
) {
    let mut objects = doc.active().objects.clone();
    let Some(object) = objects.get_mut(&id) else {
        return;
    };
    if object.color == color {
        return;
    }
    object.color = color;
    apply_objects(doc, history, objects, RecordHistory::Commit("Objektfarbe"));
}

/// Setzt die Rotation eines Objekts (Grad, frei).
pub fn set_object_rotation(doc: &mut MapDocument, history: &mut HistoryState, id: u64, rotation: f32) {
    let mut objects = doc.active().objects.clone();
    let Some(object) = objects.get_mut(&id) else {
        return;
    };
    if object.rotation == rotation {
        return;
    }
    object.rotation = rotation;
    apply_objects(doc, history, objects, RecordHistory::Commit("Objekt rotiert"));
}

/// Löscht alle selektierten Objekte und Labels.
///
/// Pro geänderter Collection entsteht genau ein History-Eintrag; eine
/// leere Selektion ist ein No-Op.
pub fn delete_selected(
    doc: &mut MapDocument,
    history: &mut HistoryState,
    selection: &mut SelectionState,
) {
    let object_ids = selection.object_ids();
    let label_ids = selection.label_ids();
    if object_ids.is_empty() && label_ids.is_empty() {
        return;
    }

    let mut objects = doc.active().objects.clone();
    let mut objects_changed = false;
    for id in &object_ids {
        objects_changed |= objects.shift_remove(id).is_some();
    }
    let mut labels = doc.active().labels.clone();
    let mut labels_changed = false;
    for id in &label_ids {
        labels_changed |= labels.shift_remove(id).is_some();
    }

    if objects_changed && labels_changed {
        apply_objects(doc, history, objects, RecordHistory::Suppress);
        apply_labels(doc, history, labels, RecordHistory::Commit("Gelöscht"));
    } else if objects_changed {
        apply_objects(doc, history, objects, RecordHistory::Commit("Objekte gelöscht"));
    } else if labels_changed {
        apply_labels(doc, history, labels, RecordHistory::Commit("Labels gelöscht"));
    }
    log::info!(
        "Selektion gelöscht: {} Objekte, {} Labels",
        object_ids.len(),
        label_ids.len()
    );
    selection.clear();
}

/// Legt ein neues Label an der Weltposition an. Labels kennen weder
/// Kollision noch Gitterbindung.
pub fn place_label(
    doc: &mut MapDocument,
    history: &mut HistoryState,
    world: Vec2,
    content: &str,
) -> Option<u64> {
    if content.trim().is_empty() {
        return None;
    }
    let id = doc.alloc_item_id();
    let label = TextLabel::new(id, world, content);
    let mut labels = doc.active().labels.clone();
    labels.insert(id, label);
    apply_labels(doc, history, labels, RecordHistory::Commit("Label platziert"));
    Some(id)
}

/// Übernimmt ein im Host-Dialog bearbeitetes Label.
///
/// Ein leer gewordener Inhalt löscht das Label. Unbekannte Ids sind ein
/// No-Op.
pub fn update_label(doc: &mut MapDocument, history: &mut HistoryState, label: TextLabel) {
    let mut labels = doc.active().labels.clone();
    if !labels.contains_key(&label.id) {
        return;
    }
    if label.content.trim().is_empty() {
        labels.shift_remove(&label.id);
        apply_labels(doc, history, labels, RecordHistory::Commit("Label gelöscht"));
        return;
    }
    if labels.get(&label.id) == Some(&label) {
        return;
    }
    labels.insert(label.id, label);
    apply_labels(doc, history, labels, RecordHistory::Commit("Label geändert"));
}
