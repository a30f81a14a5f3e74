//! Capability configuration for the interaction layer.
//!
//! Replaces runtime feature detection: hosts declare up front which
//! interaction channels they support, and disabled channels turn the
//! corresponding handlers into no-ops.

use serde::{Deserialize, Serialize};

/// Interaction channels a host environment supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capabilities {
    /// Native drag-and-drop events are delivered.
    pub drag_and_drop: bool,
    /// Keyboard selection (toggle/abort keystrokes) is delivered.
    pub keyboard_selection: bool,
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::full()
    }
}

impl Capabilities {
    /// All interaction channels enabled.
    pub fn full() -> Self {
        Self {
            drag_and_drop: true,
            keyboard_selection: true,
        }
    }

    /// Pointer interactions only.
    pub fn pointer_only() -> Self {
        Self {
            drag_and_drop: false,
            keyboard_selection: false,
        }
    }
}
