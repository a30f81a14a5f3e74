//! Event policy: maps pointer, keyboard and drag events onto the
//! selection manager and the document.
//!
//! One event is handled to completion before the next is dispatched;
//! the controller never observes overlapping mutation.

use crate::capabilities::Capabilities;
use crate::document::{ItemId, ListDocument};
use crate::input::{Key, Modifiers, MouseButton, Target};
use crate::selection::SelectionManager;

/// What the host should do with the event's default action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventResponse {
    /// True when the default action must be suppressed
    /// (the `preventDefault` analogue).
    pub default_suppressed: bool,
}

impl EventResponse {
    /// Suppress the default action.
    pub fn suppressed() -> Self {
        Self {
            default_suppressed: true,
        }
    }

    /// Let the default action happen.
    pub fn passthrough() -> Self {
        Self {
            default_suppressed: false,
        }
    }
}

/// State of a drag session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DragState {
    /// No drag in progress.
    #[default]
    Idle,
    /// A drag is in progress with the given drag set.
    Dragging {
        /// Items being dragged, in selection order.
        items: Vec<ItemId>,
    },
}

/// Drives selection and drag state from host input events.
#[derive(Debug, Clone, Default)]
pub struct InteractionController {
    capabilities: Capabilities,
    selection: SelectionManager,
    drag: DragState,
}

impl InteractionController {
    /// Create a controller with all capabilities enabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a controller for a host with the given capabilities.
    pub fn with_capabilities(capabilities: Capabilities) -> Self {
        Self {
            capabilities,
            ..Self::default()
        }
    }

    /// Current selection.
    pub fn selection(&self) -> &SelectionManager {
        &self.selection
    }

    /// Check if a drag session is in progress.
    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging { .. })
    }

    /// Items in the active drag set, empty when idle.
    pub fn drag_items(&self) -> &[ItemId] {
        match &self.drag {
            DragState::Dragging { items } => items,
            DragState::Idle => &[],
        }
    }

    /// Primary-button press: single selection.
    ///
    /// An unmodified press on an unselected draggable item replaces the
    /// selection. An unmodified press anywhere else clears it. Modified
    /// presses and presses on already-selected items change nothing, so a
    /// multi-selection survives the press that starts its drag.
    pub fn pointer_down(
        &mut self,
        doc: &mut ListDocument,
        target: Target,
        button: MouseButton,
        modifiers: Modifiers,
    ) -> EventResponse {
        if button != MouseButton::Left {
            return EventResponse::passthrough();
        }

        match target {
            Target::Item(id) if doc.is_draggable(id) => {
                if !modifiers.is_multi_select() && !self.selection.is_selected(id) {
                    self.selection.clear(doc);
                    self.selection.select(doc, id);
                }
            }
            _ => {
                if !modifiers.is_multi_select() {
                    self.selection.clear(doc);
                }
            }
        }
        EventResponse::passthrough()
    }

    /// Primary-button release: multiple selection.
    ///
    /// A modified release on a draggable item toggles its membership.
    pub fn pointer_up(
        &mut self,
        doc: &mut ListDocument,
        target: Target,
        button: MouseButton,
        modifiers: Modifiers,
    ) -> EventResponse {
        if button != MouseButton::Left {
            return EventResponse::passthrough();
        }

        if let Target::Item(id) = target {
            if doc.is_draggable(id) && modifiers.is_multi_select() {
                if self.selection.is_selected(id) {
                    self.selection.deselect(doc, id);
                } else {
                    self.selection.select(doc, id);
                }
            }
        }
        EventResponse::passthrough()
    }

    /// Drag start on an item.
    ///
    /// Rejected (default suppressed, no state change) when the item's
    /// parent is not the owning container. A modified drag start on an
    /// unselected item adds it to the selection. On acceptance the drag
    /// set becomes the current selection.
    pub fn drag_start(
        &mut self,
        doc: &mut ListDocument,
        target: Target,
        modifiers: Modifiers,
    ) -> EventResponse {
        if !self.capabilities.drag_and_drop {
            return EventResponse::passthrough();
        }
        let Target::Item(id) = target else {
            return EventResponse::passthrough();
        };
        if !doc.is_draggable(id) {
            return EventResponse::passthrough();
        }

        if self.selection.owner() != doc.parent_of(id) {
            log::debug!("rejected drag of {id} outside the owning container");
            return EventResponse::suppressed();
        }

        if modifiers.is_multi_select() && !self.selection.is_selected(id) {
            self.selection.select(doc, id);
        }

        self.drag = DragState::Dragging {
            items: self.selection.items().to_vec(),
        };
        log::debug!("drag started with {} item(s)", self.selection.len());
        EventResponse::passthrough()
    }

    /// Drag over a potential drop position. While a drag is active the
    /// default action is suppressed so the drop is allowed.
    pub fn drag_over(&mut self, _target: Target) -> EventResponse {
        if !self.capabilities.drag_and_drop {
            return EventResponse::passthrough();
        }
        if self.is_dragging() {
            EventResponse::suppressed()
        } else {
            EventResponse::passthrough()
        }
    }

    /// Drop on a target. When the target container accepts drops, every
    /// item in the drag set is moved there (in selection order) and the
    /// default action is suppressed.
    pub fn drop_on(&mut self, doc: &mut ListDocument, target: Target) -> EventResponse {
        if !self.capabilities.drag_and_drop || !self.is_dragging() {
            return EventResponse::passthrough();
        }
        let Target::Container(container) = target else {
            return EventResponse::passthrough();
        };
        if !doc.is_drop_target(container) {
            return EventResponse::passthrough();
        }

        let items = self.drag_items().to_vec();
        for id in &items {
            doc.move_item(*id, container);
        }
        // The moved items keep their selection; the owning container
        // follows them to the destination.
        self.selection.retarget_owner(container);
        log::debug!("dropped {} item(s) into container {container}", items.len());
        EventResponse::suppressed()
    }

    /// Drag end, after a drop or an abort. Resets the drag session.
    pub fn drag_end(&mut self) -> EventResponse {
        self.drag = DragState::Idle;
        EventResponse::passthrough()
    }

    /// Key press.
    ///
    /// Space on a grabbable item follows the modifier/no-modifier click
    /// branching and suppresses the default action. Escape clears any
    /// selection but never suppresses the default action.
    pub fn key_down(
        &mut self,
        doc: &mut ListDocument,
        target: Target,
        key: Key,
        modifiers: Modifiers,
    ) -> EventResponse {
        if !self.capabilities.keyboard_selection {
            return EventResponse::passthrough();
        }

        match key {
            Key::Space => {
                let Target::Item(id) = target else {
                    return EventResponse::passthrough();
                };
                if !doc.is_grabbable(id) {
                    return EventResponse::passthrough();
                }

                if modifiers.is_multi_select() {
                    if self.selection.is_selected(id) {
                        self.selection.deselect(doc, id);
                    } else {
                        self.selection.select(doc, id);
                    }
                } else if !self.selection.is_selected(id) {
                    self.selection.clear(doc);
                    self.selection.select(doc, id);
                }
                EventResponse::suppressed()
            }
            Key::Escape => {
                if !self.selection.is_empty() {
                    self.selection.clear(doc);
                }
                EventResponse::passthrough()
            }
            _ => EventResponse::passthrough(),
        }
    }
}
