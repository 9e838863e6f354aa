//! Test-facing surface: a session owning one engine handle and the
//! resolved vocabulary/model, transition and scenario assertions, and a
//! runner for the scripted and baseline-table suites.

pub mod check;
pub mod runner;
pub mod session;

pub use check::{check_scenario, check_transition, AssertionError};
pub use runner::ScenarioRunner;
pub use session::{HarnessError, TestSession};
