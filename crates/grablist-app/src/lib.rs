//! GrabList demo driver
//!
//! Replays scripted drag-and-drop and multi-selection interactions
//! against the in-memory list model and reports the resulting state.

mod app;
mod scenario;

pub use app::{print_report, run, run_scenario, RunReport};
pub use scenario::{ContainerSetup, Scenario, ScenarioError, Step};
