//! Selection state: which items are grabbed and which container owns them.

use crate::document::{ContainerId, ItemId, ListDocument};

/// Manages the set of selected items and the owning-container constraint.
///
/// The manager is the source of truth for selection; the `grabbed` flag on
/// items is derived state it keeps in sync through the document. Items can
/// only be selected together while they share a parent container, and the
/// owning container is set by the first selection and released by the last
/// deselection.
///
/// All operations are total: invalid combinations (cross-container selects,
/// redundant selects and deselects) are absorbed as no-ops.
#[derive(Debug, Clone, Default)]
pub struct SelectionManager {
    /// Selected items, unique, in selection order.
    items: Vec<ItemId>,
    /// Container that constrains further selection.
    /// `None` exactly while nothing is selected.
    owner: Option<ContainerId>,
}

impl SelectionManager {
    /// Create a new empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Select an item.
    ///
    /// The first selection captures the item's parent as the owning
    /// container; later selections from a different container are rejected.
    /// Returns true if the selection changed.
    pub fn select(&mut self, doc: &mut ListDocument, id: ItemId) -> bool {
        let Some(parent) = doc.parent_of(id) else {
            return false;
        };

        match self.owner {
            None => self.owner = Some(parent),
            Some(owner) if owner != parent => {
                log::debug!("rejected cross-container selection of {id}");
                return false;
            }
            Some(_) => {}
        }

        if self.items.contains(&id) {
            return false;
        }

        if let Some(item) = doc.item_mut(id) {
            item.grabbed = true;
        }
        self.items.push(id);
        true
    }

    /// Deselect an item, releasing the owning container when the
    /// selection empties. Returns true if the selection changed.
    pub fn deselect(&mut self, doc: &mut ListDocument, id: ItemId) -> bool {
        let Some(pos) = self.items.iter().position(|&selected| selected == id) else {
            return false;
        };

        if let Some(item) = doc.item_mut(id) {
            item.grabbed = false;
        }
        self.items.remove(pos);
        if self.items.is_empty() {
            self.owner = None;
        }
        true
    }

    /// Clear the whole selection. No-op when already empty.
    /// Returns true if the selection changed.
    pub fn clear(&mut self, doc: &mut ListDocument) -> bool {
        if self.items.is_empty() {
            return false;
        }

        for id in self.items.drain(..) {
            if let Some(item) = doc.item_mut(id) {
                item.grabbed = false;
            }
        }
        self.owner = None;
        true
    }

    /// Drop an item from the selection after it was removed from the
    /// document, releasing the owning container when the selection
    /// empties. Unlike `deselect` there is no grabbed flag left to
    /// reset. Returns true if the selection changed.
    pub fn remove(&mut self, id: ItemId) -> bool {
        let Some(pos) = self.items.iter().position(|&selected| selected == id) else {
            return false;
        };
        self.items.remove(pos);
        if self.items.is_empty() {
            self.owner = None;
        }
        true
    }

    /// Check if an item is currently selected.
    pub fn is_selected(&self, id: ItemId) -> bool {
        self.items.contains(&id)
    }

    /// Selected items in selection order.
    pub fn items(&self) -> &[ItemId] {
        &self.items
    }

    /// The container that currently constrains selection, if any.
    pub fn owner(&self) -> Option<ContainerId> {
        self.owner
    }

    /// Number of selected items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Point the owning container at a new container after the selected
    /// items were moved there together. Caller must ensure every selected
    /// item's parent is already `owner`.
    pub(crate) fn retarget_owner(&mut self, owner: ContainerId) {
        if !self.items.is_empty() {
            self.owner = Some(owner);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Container, Item};

    /// Two items in one container, one item in another.
    fn fixture() -> (ListDocument, ContainerId, ContainerId, ItemId, ItemId, ItemId) {
        let mut doc = ListDocument::new();
        let c1 = doc.add_container(Container::new("first", true));
        let c2 = doc.add_container(Container::new("second", true));
        let a = doc.add_item(c1, Item::new("a")).unwrap();
        let b = doc.add_item(c1, Item::new("b")).unwrap();
        let x = doc.add_item(c2, Item::new("x")).unwrap();
        (doc, c1, c2, a, b, x)
    }

    fn owner_iff_empty(sel: &SelectionManager) -> bool {
        sel.owner().is_none() == sel.is_empty()
    }

    #[test]
    fn test_select_captures_owner() {
        let (mut doc, c1, _, a, _, _) = fixture();
        let mut sel = SelectionManager::new();

        assert!(sel.select(&mut doc, a));
        assert_eq!(sel.owner(), Some(c1));
        assert_eq!(sel.items(), &[a]);
        assert!(doc.item(a).unwrap().grabbed);
    }

    #[test]
    fn test_select_is_idempotent() {
        let (mut doc, _, _, a, _, _) = fixture();
        let mut sel = SelectionManager::new();

        assert!(sel.select(&mut doc, a));
        assert!(!sel.select(&mut doc, a));
        assert_eq!(sel.items(), &[a]);
        assert_eq!(sel.len(), 1);
    }

    #[test]
    fn test_cross_container_select_is_noop() {
        let (mut doc, c1, _, a, _, x) = fixture();
        let mut sel = SelectionManager::new();

        sel.select(&mut doc, a);
        assert!(!sel.select(&mut doc, x));
        assert_eq!(sel.owner(), Some(c1));
        assert_eq!(sel.items(), &[a]);
        assert!(!doc.item(x).unwrap().grabbed);
    }

    #[test]
    fn test_select_unknown_item_is_noop() {
        let (mut doc, _, _, _, _, _) = fixture();
        let mut sel = SelectionManager::new();

        assert!(!sel.select(&mut doc, uuid::Uuid::new_v4()));
        assert!(sel.is_empty());
        assert!(sel.owner().is_none());
    }

    #[test]
    fn test_deselect_releases_owner_when_empty() {
        let (mut doc, c1, _, a, b, _) = fixture();
        let mut sel = SelectionManager::new();

        sel.select(&mut doc, a);
        sel.select(&mut doc, b);
        assert_eq!(sel.items(), &[a, b]);

        assert!(sel.deselect(&mut doc, a));
        assert_eq!(sel.items(), &[b]);
        assert_eq!(sel.owner(), Some(c1));
        assert!(!doc.item(a).unwrap().grabbed);

        assert!(sel.deselect(&mut doc, b));
        assert!(sel.items().is_empty());
        assert_eq!(sel.owner(), None);
    }

    #[test]
    fn test_deselect_unselected_is_noop() {
        let (mut doc, _, _, a, b, _) = fixture();
        let mut sel = SelectionManager::new();

        sel.select(&mut doc, a);
        assert!(!sel.deselect(&mut doc, b));
        assert_eq!(sel.items(), &[a]);
    }

    #[test]
    fn test_clear_unmarks_everything() {
        let (mut doc, _, _, a, b, _) = fixture();
        let mut sel = SelectionManager::new();

        sel.select(&mut doc, a);
        sel.select(&mut doc, b);

        assert!(sel.clear(&mut doc));
        assert!(sel.items().is_empty());
        assert_eq!(sel.owner(), None);
        assert!(!doc.item(a).unwrap().grabbed);
        assert!(!doc.item(b).unwrap().grabbed);
    }

    #[test]
    fn test_clear_is_idempotent() {
        let (mut doc, _, _, a, _, _) = fixture();
        let mut sel = SelectionManager::new();

        sel.select(&mut doc, a);
        assert!(sel.clear(&mut doc));
        assert!(!sel.clear(&mut doc));
        assert!(sel.is_empty());
    }

    #[test]
    fn test_owner_iff_empty_across_sequences() {
        let (mut doc, _, _, a, b, x) = fixture();
        let mut sel = SelectionManager::new();

        assert!(owner_iff_empty(&sel));
        sel.select(&mut doc, a);
        assert!(owner_iff_empty(&sel));
        sel.select(&mut doc, x); // rejected
        assert!(owner_iff_empty(&sel));
        sel.select(&mut doc, b);
        assert!(owner_iff_empty(&sel));
        sel.deselect(&mut doc, a);
        assert!(owner_iff_empty(&sel));
        sel.deselect(&mut doc, b);
        assert!(owner_iff_empty(&sel));
        sel.clear(&mut doc);
        assert!(owner_iff_empty(&sel));
        sel.select(&mut doc, x);
        assert!(owner_iff_empty(&sel));
    }

    #[test]
    fn test_removing_owning_container_releases_selection() {
        let (mut doc, c1, c2, a, b, x) = fixture();
        let mut sel = SelectionManager::new();

        sel.select(&mut doc, a);
        sel.select(&mut doc, b);
        assert_eq!(sel.owner(), Some(c1));

        let removed = doc.remove_container(c1).unwrap();
        for &id in removed.children() {
            sel.remove(id);
        }

        assert!(sel.is_empty());
        assert_eq!(sel.owner(), None);
        assert!(!sel.is_selected(a));
        // A fresh selection can now capture the surviving container.
        assert!(sel.select(&mut doc, x));
        assert_eq!(sel.owner(), Some(c2));
    }

    #[test]
    fn test_remove_keeps_owner_while_items_remain() {
        let (mut doc, c1, _, a, b, _) = fixture();
        let mut sel = SelectionManager::new();

        sel.select(&mut doc, a);
        sel.select(&mut doc, b);

        doc.remove_item(a);
        assert!(sel.remove(a));
        assert_eq!(sel.items(), &[b]);
        assert_eq!(sel.owner(), Some(c1));

        assert!(!sel.remove(a));
    }

    #[test]
    fn test_full_lifecycle_scenario() {
        let (mut doc, c1, _, a, b, x) = fixture();
        let mut sel = SelectionManager::new();

        assert!(sel.select(&mut doc, a));
        assert_eq!(sel.owner(), Some(c1));
        assert_eq!(sel.items(), &[a]);

        assert!(!sel.select(&mut doc, x));
        assert_eq!(sel.owner(), Some(c1));
        assert_eq!(sel.items(), &[a]);

        assert!(sel.select(&mut doc, b));
        assert_eq!(sel.items(), &[a, b]);

        assert!(sel.deselect(&mut doc, a));
        assert_eq!(sel.items(), &[b]);
        assert_eq!(sel.owner(), Some(c1));

        assert!(sel.deselect(&mut doc, b));
        assert!(sel.items().is_empty());
        assert_eq!(sel.owner(), None);
    }

    #[test]
    fn test_selection_order_is_insertion_order() {
        let (mut doc, _, _, a, b, _) = fixture();
        let mut sel = SelectionManager::new();

        sel.select(&mut doc, b);
        sel.select(&mut doc, a);
        assert_eq!(sel.items(), &[b, a]);
    }

    #[test]
    fn test_owner_follows_after_clear() {
        let (mut doc, _, c2, a, _, x) = fixture();
        let mut sel = SelectionManager::new();

        sel.select(&mut doc, a);
        sel.clear(&mut doc);
        // A fresh selection may capture a different container.
        assert!(sel.select(&mut doc, x));
        assert_eq!(sel.owner(), Some(c2));
    }
}
