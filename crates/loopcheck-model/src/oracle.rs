use std::collections::{HashMap, HashSet};

use loopcheck_catalog::{CatalogError, CommandCatalog, StateRegistry};

/// Typical outcome of each command: the state the engine normally settles
/// in after processing it, independent of where it started. Commands
/// absent from this table are exploratory only; their outcome is
/// unconstrained.
// TODO: confirm ONESHOT against a live engine; Off is also plausible there.
pub const TYPICAL_OUTCOMES: &[(&str, &str)] = &[
    ("REPLACE", "Replacing"),
    ("REVERSE", "Playing"),
    ("SCRATCH", "Scratching"),
    ("RECORD", "Recording"),
    ("OVERDUB", "Overdubbing"),
    ("MULTIPLY", "Multiplying"),
    ("INSERT", "Inserting"),
    ("MUTE", "Muted"),
    ("DELAY", "Delay"),
    ("ONESHOT", "Playing"),
    ("TRIGGER", "Playing"),
    ("SUBSTITUTE", "Substitute"),
    ("UNDO_ALL", "Off"),
    ("REDO_ALL", "Playing"),
    ("MUTE_ON", "Muted"),
    ("MUTE_OFF", "Playing"),
    ("PAUSE", "Paused"),
    ("PAUSE_ON", "Paused"),
    ("PAUSE_OFF", "Playing"),
];

/// States the engine leaves on its own, without operator input. Never
/// used as a pick-source when the exploration driver falls back to a
/// random command.
pub const TRANSIENT_STATES: &[&str] = &[
    "Unknown",
    "WaitStart",
    "WaitStop",
    "TriggerPlay",
    "OneShot",
    "Undo",
    "UndoAll",
    "Redo",
    "RedoAll",
];

#[derive(Debug, thiserror::Error)]
pub enum OracleError {
    /// A name in the model tables does not exist in the catalog or
    /// registry; the model is stale relative to the command/state sets.
    #[error("unresolved reference in transition model: {0}")]
    UnresolvedReference(#[from] CatalogError),
}

/// Expected-transition model: a partial mapping from command index to the
/// expected resulting state code, plus the set of transient states.
///
/// Resolved by name at construction so a stale table fails fast instead
/// of silently testing against the wrong model.
#[derive(Debug, Clone)]
pub struct TransitionOracle {
    expected: HashMap<usize, i32>,
    transient: HashSet<i32>,
}

impl TransitionOracle {
    /// Resolve an outcome table and a transient-state list through the
    /// catalog and registry.
    pub fn resolve(
        catalog: &CommandCatalog,
        registry: &StateRegistry,
        outcomes: &[(&str, &str)],
        transient: &[&str],
    ) -> Result<Self, OracleError> {
        let mut expected = HashMap::new();
        for &(command, state) in outcomes {
            let index = catalog.index_of(command)?;
            let code = registry.code_of(state)?;
            expected.insert(index, code);
        }

        let mut transient_codes = HashSet::new();
        for &state in transient {
            transient_codes.insert(registry.code_of(state)?);
        }

        Ok(Self {
            expected,
            transient: transient_codes,
        })
    }

    /// The default looper model: [`TYPICAL_OUTCOMES`] + [`TRANSIENT_STATES`].
    pub fn looper(
        catalog: &CommandCatalog,
        registry: &StateRegistry,
    ) -> Result<Self, OracleError> {
        Self::resolve(catalog, registry, TYPICAL_OUTCOMES, TRANSIENT_STATES)
    }

    /// Expected resulting state for a command, if the model constrains it.
    pub fn expected_state(&self, command: usize) -> Option<i32> {
        self.expected.get(&command).copied()
    }

    /// Whether a state is transient (unsuitable as a random-walk seed).
    pub fn is_transient(&self, code: i32) -> bool {
        self.transient.contains(&code)
    }

    /// Number of commands the model constrains.
    pub fn constrained_commands(&self) -> usize {
        self.expected.len()
    }
}
