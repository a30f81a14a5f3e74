//! GrabList Core Library
//!
//! Platform-agnostic data structures and logic for drag-and-drop list
//! interactions: an in-memory document of containers and items, a
//! selection manager with a single-owning-container constraint, and the
//! event-policy layer that drives both from host input events.

pub mod capabilities;
pub mod document;
pub mod input;
pub mod interaction;
pub mod selection;

pub use capabilities::Capabilities;
pub use document::{Container, ContainerId, Item, ItemId, ListDocument};
pub use input::{InputState, Key, KeyEvent, Modifiers, MouseButton, PointerEvent, Target};
pub use interaction::{DragState, EventResponse, InteractionController};
pub use selection::SelectionManager;
