use loopcheck_catalog::{CommandCatalog, StateRegistry};
use loopcheck_model::TransitionOracle;

use crate::session::HarnessError;

/// Assertion failures. Recoverable at the test-case level: one failing
/// case does not prevent the rest of a suite from running. Both sides of
/// the comparison are carried by name for diagnosis.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AssertionError {
    #[error("after {command}: expected {expected}, observed {observed}")]
    TransitionMismatch {
        command: String,
        expected: String,
        observed: String,
    },

    #[error("expected state {expected}, observed {observed}")]
    ScenarioAssertionFailed { expected: String, observed: String },
}

/// Check an observed state against the model's expectation for a command.
/// Commands the model does not constrain always pass.
pub fn check_transition(
    catalog: &CommandCatalog,
    registry: &StateRegistry,
    oracle: &TransitionOracle,
    command: usize,
    observed: i32,
) -> Result<(), HarnessError> {
    let expected = match oracle.expected_state(command) {
        Some(code) => code,
        None => return Ok(()),
    };
    if expected == observed {
        return Ok(());
    }
    Err(AssertionError::TransitionMismatch {
        command: catalog.name_of(command)?.to_string(),
        expected: registry.name_of(expected)?.to_string(),
        observed: registry.name_of(observed)?.to_string(),
    }
    .into())
}

/// Check an observed state against a literal expected state name.
pub fn check_scenario(
    registry: &StateRegistry,
    expected: &str,
    observed: i32,
) -> Result<(), HarnessError> {
    // Resolve the expectation first so a stale scenario fails loudly
    // rather than reading as a mismatch.
    registry.code_of(expected)?;
    let observed_name = registry.name_of(observed)?;
    if observed_name == expected {
        return Ok(());
    }
    Err(AssertionError::ScenarioAssertionFailed {
        expected: expected.to_string(),
        observed: observed_name.to_string(),
    }
    .into())
}
