//! Serde-described interaction scenarios.
//!
//! A scenario is a document setup (containers and their items, by label)
//! plus a list of input steps referencing those labels. Modifier state is
//! not written per step; it is reconstructed from the raw key transitions
//! the way a browser would report it on each event.

use grablist_core::Key;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Scenario errors.
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Unknown target: {0}")]
    UnknownTarget(String),
}

/// A container and its initial items.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContainerSetup {
    /// Container name, used as a step target.
    pub name: String,
    /// Whether dragged items may be dropped here.
    #[serde(default = "default_drop_target")]
    pub drop_target: bool,
    /// Item labels in list order, used as step targets.
    #[serde(default)]
    pub items: Vec<String>,
}

fn default_drop_target() -> bool {
    true
}

/// One input step. Targets name an item label or a container name;
/// a missing target means the background.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Step {
    PointerDown {
        #[serde(default)]
        target: Option<String>,
    },
    PointerUp {
        #[serde(default)]
        target: Option<String>,
    },
    KeyDown {
        key: Key,
        #[serde(default)]
        target: Option<String>,
    },
    KeyUp {
        key: Key,
    },
    DragStart {
        target: Option<String>,
    },
    DragOver {
        target: Option<String>,
    },
    Drop {
        target: Option<String>,
    },
    DragEnd,
}

/// A replayable interaction script.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    /// Scenario name, for logging.
    pub name: String,
    /// Document setup.
    pub containers: Vec<ContainerSetup>,
    /// Input steps in dispatch order.
    pub steps: Vec<Step>,
}

impl Scenario {
    /// Load a scenario from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ScenarioError> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| ScenarioError::Io(format!("Failed to read {}: {}", path.display(), e)))?;
        Self::from_json(&json)
    }

    /// Parse a scenario from JSON.
    pub fn from_json(json: &str) -> Result<Self, ScenarioError> {
        serde_json::from_str(json).map_err(|e| ScenarioError::Parse(e.to_string()))
    }

    /// Serialize the scenario to JSON.
    pub fn to_json(&self) -> Result<String, ScenarioError> {
        serde_json::to_string_pretty(self).map_err(|e| ScenarioError::Parse(e.to_string()))
    }

    /// Single-item dragging between drop targets, after the first demo:
    /// press an item, drag it over a target and drop it there.
    pub fn demo1() -> Self {
        Self {
            name: "demo1".to_string(),
            containers: vec![
                ContainerSetup {
                    name: "shelf".to_string(),
                    drop_target: true,
                    items: vec!["banana".into(), "apple".into(), "orange".into()],
                },
                ContainerSetup {
                    name: "basket".to_string(),
                    drop_target: true,
                    items: vec![],
                },
            ],
            steps: vec![
                Step::PointerDown {
                    target: Some("banana".into()),
                },
                Step::DragStart {
                    target: Some("banana".into()),
                },
                Step::DragOver {
                    target: Some("basket".into()),
                },
                Step::Drop {
                    target: Some("basket".into()),
                },
                Step::DragEnd,
                Step::PointerUp {
                    target: Some("banana".into()),
                },
            ],
        }
    }

    /// Multi-selection within one container, after the second demo:
    /// click, ctrl-click, keyboard toggling, a multi-item drag and an
    /// Escape abort.
    pub fn demo2() -> Self {
        Self {
            name: "demo2".to_string(),
            containers: vec![
                ContainerSetup {
                    name: "todo".to_string(),
                    drop_target: true,
                    items: vec!["one".into(), "two".into(), "three".into()],
                },
                ContainerSetup {
                    name: "done".to_string(),
                    drop_target: true,
                    items: vec![],
                },
            ],
            steps: vec![
                // Single selection by click.
                Step::PointerDown {
                    target: Some("one".into()),
                },
                Step::PointerUp {
                    target: Some("one".into()),
                },
                // Add to the selection with ctrl-click.
                Step::KeyDown {
                    key: Key::Control,
                    target: None,
                },
                Step::PointerDown {
                    target: Some("two".into()),
                },
                Step::PointerUp {
                    target: Some("two".into()),
                },
                // Toggle the third item in and out with the keyboard.
                Step::KeyDown {
                    key: Key::Space,
                    target: Some("three".into()),
                },
                Step::KeyUp { key: Key::Space },
                Step::KeyDown {
                    key: Key::Space,
                    target: Some("three".into()),
                },
                Step::KeyUp { key: Key::Space },
                Step::KeyUp { key: Key::Control },
                // Drag the pair into the other list. The press lands on an
                // already-selected item, so the selection survives it.
                Step::PointerDown {
                    target: Some("one".into()),
                },
                Step::DragStart {
                    target: Some("one".into()),
                },
                Step::DragOver {
                    target: Some("done".into()),
                },
                Step::Drop {
                    target: Some("done".into()),
                },
                Step::DragEnd,
                // Abort the remaining selection.
                Step::KeyDown {
                    key: Key::Escape,
                    target: None,
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenario_json_roundtrip() {
        let scenario = Scenario::demo2();
        let json = scenario.to_json().unwrap();
        let restored = Scenario::from_json(&json).unwrap();

        assert_eq!(restored.name, "demo2");
        assert_eq!(restored.containers.len(), 2);
        assert_eq!(restored.steps.len(), scenario.steps.len());
    }

    #[test]
    fn test_defaults_in_json() {
        let json = r#"{
            "name": "minimal",
            "containers": [{"name": "list", "items": ["a"]}],
            "steps": [{"kind": "pointer_down", "target": "a"}, {"kind": "pointer_down"}]
        }"#;
        let scenario = Scenario::from_json(json).unwrap();

        assert!(scenario.containers[0].drop_target);
        assert!(matches!(
            &scenario.steps[1],
            Step::PointerDown { target: None }
        ));
    }

    #[test]
    fn test_parse_error() {
        let result = Scenario::from_json("not json");
        assert!(matches!(result, Err(ScenarioError::Parse(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let result = Scenario::load(Path::new("/nonexistent/scenario.json"));
        assert!(matches!(result, Err(ScenarioError::Io(_))));
    }
}
