use indexmap::IndexSet;
use std::sync::Arc;

/// Referenz auf ein selektierbares Element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectionRef {
    /// Platziertes Objekt
    Object(u64),
    /// Textlabel
    Label(u64),
}

/// Auswahlbezogener Anwendungszustand.
///
/// Lebensdauer der Auswahl: aufgehoben bei Tool-Wechsel, Escape und
/// Klick auf leere Fläche.
#[derive(Clone, Default)]
pub struct SelectionState {
    /// Aktuell selektierte Elemente in Auswahl-Reihenfolge
    /// (Arc für O(1)-Clone in Snapshots und Host-Abfragen)
    pub items: Arc<IndexSet<SelectionRef>>,
    /// Zuletzt selektiertes Element als Anker für additive Auswahl
    pub anchor: Option<SelectionRef>,
}

impl SelectionState {
    /// Erstellt einen leeren Selektionszustand.
    pub fn new() -> Self {
        Self {
            items: Arc::new(IndexSet::new()),
            anchor: None,
        }
    }

    /// Gibt eine mutable Referenz auf das IndexSet zurück (CoW: klont nur
    /// wenn nötig). Alle Mutationen der Selektion gehen über diese Methode.
    #[inline]
    pub fn items_mut(&mut self) -> &mut IndexSet<SelectionRef> {
        Arc::make_mut(&mut self.items)
    }

    /// Prüft ob ein Element selektiert ist.
    pub fn contains(&self, item: SelectionRef) -> bool {
        self.items.contains(&item)
    }

    /// Gibt `true` zurück wenn nichts selektiert ist.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Ids aller selektierten Objekte in Auswahl-Reihenfolge.
    pub fn object_ids(&self) -> Vec<u64> {
        self.items
            .iter()
            .filter_map(|item| match item {
                SelectionRef::Object(id) => Some(*id),
                SelectionRef::Label(_) => None,
            })
            .collect()
    }

    /// Ids aller selektierten Labels in Auswahl-Reihenfolge.
    pub fn label_ids(&self) -> Vec<u64> {
        self.items
            .iter()
            .filter_map(|item| match item {
                SelectionRef::Label(id) => Some(*id),
                SelectionRef::Object(_) => None,
            })
            .collect()
    }

    /// Hebt die Auswahl auf.
    pub fn clear(&mut self) {
        if !self.items.is_empty() {
            self.items_mut().clear();
        }
        self.anchor = None;
    }

    /// Ersetzt die Auswahl durch ein einzelnes Element.
    pub fn select_single(&mut self, item: SelectionRef) {
        let items = self.items_mut();
        items.clear();
        items.insert(item);
        self.anchor = Some(item);
    }

    /// Nimmt ein Element additiv in die Auswahl auf bzw. entfernt es wieder.
    pub fn toggle(&mut self, item: SelectionRef) {
        let items = self.items_mut();
        if !items.shift_remove(&item) {
            items.insert(item);
            self.anchor = Some(item);
        } else if self.anchor == Some(item) {
            self.anchor = None;
        }
    }
}
