//! Scenario runner: builds the document, replays the steps and reports
//! the resulting state.

use crate::scenario::{ContainerSetup, Scenario, ScenarioError, Step};
use grablist_core::{
    Container, ContainerId, InputState, InteractionController, Item, ItemId, KeyEvent,
    ListDocument, MouseButton, PointerEvent, Target,
};
use std::collections::HashMap;
use std::path::Path;

/// Outcome of a scenario run.
#[derive(Debug)]
pub struct RunReport {
    /// Scenario name.
    pub scenario: String,
    /// Document after all steps.
    pub document: ListDocument,
    /// Labels of the items still selected, in selection order.
    pub selected: Vec<String>,
    /// Name of the owning container, if any.
    pub owner: Option<String>,
}

/// Label-to-id lookup built from the scenario setup.
struct Labels {
    items: HashMap<String, ItemId>,
    containers: HashMap<String, ContainerId>,
}

impl Labels {
    fn resolve(&self, target: Option<&String>) -> Result<Target, ScenarioError> {
        let Some(label) = target else {
            return Ok(Target::Background);
        };
        if let Some(&id) = self.items.get(label) {
            return Ok(Target::Item(id));
        }
        if let Some(&id) = self.containers.get(label) {
            return Ok(Target::Container(id));
        }
        Err(ScenarioError::UnknownTarget(label.clone()))
    }
}

fn build_document(setups: &[ContainerSetup]) -> (ListDocument, Labels) {
    let mut doc = ListDocument::new();
    let mut labels = Labels {
        items: HashMap::new(),
        containers: HashMap::new(),
    };

    for setup in setups {
        let container = doc.add_container(Container::new(&setup.name, setup.drop_target));
        labels.containers.insert(setup.name.clone(), container);
        for label in &setup.items {
            if let Some(id) = doc.add_item(container, Item::new(label)) {
                labels.items.insert(label.clone(), id);
            }
        }
    }
    (doc, labels)
}

/// Replay a scenario against a fresh document.
pub fn run_scenario(scenario: &Scenario) -> Result<RunReport, ScenarioError> {
    let (mut doc, labels) = build_document(&scenario.containers);
    let mut input = InputState::new();
    let mut controller = InteractionController::new();

    log::info!(
        "running scenario '{}' with {} step(s)",
        scenario.name,
        scenario.steps.len()
    );

    for step in &scenario.steps {
        let response = match step {
            Step::PointerDown { target } => {
                let target = labels.resolve(target.as_ref())?;
                input.handle_pointer_event(&PointerEvent::Down {
                    target,
                    button: MouseButton::Left,
                });
                controller.pointer_down(&mut doc, target, MouseButton::Left, input.modifiers())
            }
            Step::PointerUp { target } => {
                let target = labels.resolve(target.as_ref())?;
                input.handle_pointer_event(&PointerEvent::Up {
                    target,
                    button: MouseButton::Left,
                });
                controller.pointer_up(&mut doc, target, MouseButton::Left, input.modifiers())
            }
            Step::KeyDown { key, target } => {
                let target = labels.resolve(target.as_ref())?;
                if input.is_key_pressed(key) {
                    log::trace!("key repeat: {key:?}");
                }
                input.handle_key_event(&KeyEvent::Pressed(key.clone()));
                controller.key_down(&mut doc, target, key.clone(), input.modifiers())
            }
            Step::KeyUp { key } => {
                input.handle_key_event(&KeyEvent::Released(key.clone()));
                continue;
            }
            Step::DragStart { target } => {
                let target = labels.resolve(target.as_ref())?;
                // A real host only starts a drag while the primary
                // button is held; flag scripts that skip the press.
                if !input.is_button_pressed(MouseButton::Left) {
                    log::warn!("drag start without the primary button held");
                }
                controller.drag_start(&mut doc, target, input.modifiers())
            }
            Step::DragOver { target } => {
                let target = labels.resolve(target.as_ref())?;
                controller.drag_over(target)
            }
            Step::Drop { target } => {
                let target = labels.resolve(target.as_ref())?;
                controller.drop_on(&mut doc, target)
            }
            Step::DragEnd => controller.drag_end(),
        };
        log::info!(
            "{:?} -> suppressed={}, selected={}",
            step,
            response.default_suppressed,
            controller.selection().len()
        );
    }

    let selected = controller
        .selection()
        .items()
        .iter()
        .filter_map(|&id| doc.item(id).map(|item| item.label.clone()))
        .collect();
    let owner = controller
        .selection()
        .owner()
        .and_then(|id| doc.container(id).map(|c| c.name.clone()));

    Ok(RunReport {
        scenario: scenario.name.clone(),
        document: doc,
        selected,
        owner,
    })
}

/// Print a run report to stdout.
pub fn print_report(report: &RunReport) -> Result<(), ScenarioError> {
    println!("=== {} ===", report.scenario);
    for container in report.document.containers_ordered() {
        let labels: Vec<&str> = container
            .children()
            .iter()
            .filter_map(|&id| report.document.item(id).map(|i| i.label.as_str()))
            .collect();
        println!("  {}: [{}]", container.name, labels.join(", "));
    }
    match (&report.owner, report.selected.is_empty()) {
        (Some(owner), false) => {
            println!("  selected in {}: [{}]", owner, report.selected.join(", "))
        }
        _ => println!("  selection empty"),
    }
    let json = report
        .document
        .to_json()
        .map_err(|e| ScenarioError::Parse(e.to_string()))?;
    log::debug!("final document:\n{json}");
    Ok(())
}

/// Run the given scenario file, or the built-in demos when none is given.
pub fn run(path: Option<&Path>) -> Result<(), ScenarioError> {
    let scenarios = match path {
        Some(path) => vec![Scenario::load(path)?],
        None => vec![Scenario::demo1(), Scenario::demo2()],
    };

    for scenario in &scenarios {
        let report = run_scenario(scenario)?;
        print_report(&report)?;
    }
    Ok(())
}
