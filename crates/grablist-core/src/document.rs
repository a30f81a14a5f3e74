//! List document: containers and the draggable items they hold.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// Unique identifier for an item.
pub type ItemId = Uuid;

/// Unique identifier for a container.
pub type ContainerId = Uuid;

/// A single draggable list entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    /// Unique item identifier.
    pub id: ItemId,
    /// Display label.
    pub label: String,
    /// Whether the item participates in drag interactions.
    pub draggable: bool,
    /// Grabbed state, exposed for accessibility tooling.
    /// Derived from the selection manager; do not mutate directly.
    pub grabbed: bool,
    /// Whether the item can take keyboard focus.
    pub focusable: bool,
}

impl Item {
    /// Create a new item with the default interaction attributes
    /// (draggable, focusable, not grabbed).
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            label: label.into(),
            draggable: true,
            grabbed: false,
            focusable: true,
        }
    }
}

/// A grouping of items. Items can only be multi-selected within
/// a single container, and only drop targets accept dropped items.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Container {
    /// Unique container identifier.
    pub id: ContainerId,
    /// Display name.
    pub name: String,
    /// Whether dragged items may be dropped here.
    pub drop_target: bool,
    /// Child items in list order.
    children: Vec<ItemId>,
}

impl Container {
    /// Create a new empty container.
    pub fn new(name: impl Into<String>, drop_target: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            drop_target,
            children: Vec::new(),
        }
    }

    /// Child items in list order.
    pub fn children(&self) -> &[ItemId] {
        &self.children
    }
}

/// A document of containers and items, the in-memory source of truth
/// the interaction layer operates on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListDocument {
    /// Unique document identifier.
    pub id: String,
    /// Document name.
    pub name: String,
    /// All containers, keyed by ID.
    containers: HashMap<ContainerId, Container>,
    /// Display order of containers.
    container_order: Vec<ContainerId>,
    /// All items, keyed by ID.
    items: HashMap<ItemId, Item>,
}

impl Default for ListDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl ListDocument {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: "Untitled".to_string(),
            containers: HashMap::new(),
            container_order: Vec::new(),
            items: HashMap::new(),
        }
    }

    /// Add a container to the document and return its ID.
    pub fn add_container(&mut self, container: Container) -> ContainerId {
        let id = container.id;
        self.container_order.push(id);
        self.containers.insert(id, container);
        id
    }

    /// Add an item to a container, returning its ID.
    /// Returns `None` if the container does not exist.
    pub fn add_item(&mut self, container: ContainerId, item: Item) -> Option<ItemId> {
        let id = item.id;
        let parent = self.containers.get_mut(&container)?;
        parent.children.push(id);
        self.items.insert(id, item);
        Some(id)
    }

    /// Remove a container and every item it still holds.
    ///
    /// Selection state referencing the removed items must be cleaned up
    /// by the caller (see `SelectionManager::remove`).
    pub fn remove_container(&mut self, id: ContainerId) -> Option<Container> {
        let container = self.containers.remove(&id)?;
        self.container_order.retain(|&existing| existing != id);
        for child in container.children() {
            self.items.remove(child);
        }
        Some(container)
    }

    /// Remove an item from the document (and from its container).
    pub fn remove_item(&mut self, id: ItemId) -> Option<Item> {
        for container in self.containers.values_mut() {
            container.children.retain(|&child| child != id);
        }
        self.items.remove(&id)
    }

    /// Get an item by ID.
    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.items.get(&id)
    }

    /// Get a mutable reference to an item by ID.
    pub fn item_mut(&mut self, id: ItemId) -> Option<&mut Item> {
        self.items.get_mut(&id)
    }

    /// Get a container by ID.
    pub fn container(&self, id: ContainerId) -> Option<&Container> {
        self.containers.get(&id)
    }

    /// Get a mutable reference to a container by ID.
    pub fn container_mut(&mut self, id: ContainerId) -> Option<&mut Container> {
        self.containers.get_mut(&id)
    }

    /// Containers in display order.
    pub fn containers_ordered(&self) -> impl Iterator<Item = &Container> {
        self.container_order
            .iter()
            .filter_map(|id| self.containers.get(id))
    }

    /// Find the container an item currently belongs to.
    pub fn parent_of(&self, id: ItemId) -> Option<ContainerId> {
        self.containers
            .values()
            .find(|c| c.children.contains(&id))
            .map(|c| c.id)
    }

    /// Child items of a container in list order.
    pub fn children(&self, container: ContainerId) -> &[ItemId] {
        self.containers
            .get(&container)
            .map(|c| c.children.as_slice())
            .unwrap_or(&[])
    }

    /// Move an item to the end of another container's child list.
    /// Returns false if the item or destination does not exist.
    pub fn move_item(&mut self, id: ItemId, destination: ContainerId) -> bool {
        if !self.items.contains_key(&id) || !self.containers.contains_key(&destination) {
            return false;
        }
        for container in self.containers.values_mut() {
            container.children.retain(|&child| child != id);
        }
        // Appending last preserves list order at the destination even
        // when the item is moved within its own container.
        if let Some(dest) = self.containers.get_mut(&destination) {
            dest.children.push(id);
        }
        true
    }

    /// Check whether a container accepts dropped items.
    pub fn is_drop_target(&self, id: ContainerId) -> bool {
        self.containers.get(&id).is_some_and(|c| c.drop_target)
    }

    /// Check whether an item participates in drag interactions.
    pub fn is_draggable(&self, id: ItemId) -> bool {
        self.items.get(&id).is_some_and(|i| i.draggable)
    }

    /// Check whether an item participates in keyboard selection.
    pub fn is_grabbable(&self, id: ItemId) -> bool {
        self.items.get(&id).is_some_and(|i| i.draggable && i.focusable)
    }

    /// Check if the document has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get the number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Serialize the document to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize a document from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
