use std::collections::HashMap;

use loopcheck_catalog::{CommandCatalog, StateRegistry};
use loopcheck_model::TransitionOracle;

/// Per-state queues of not-yet-tried command indices.
///
/// Exhaustiveness is per-state: every queue starts with the full command
/// catalog. An entry leaves state S's queue the moment a command is
/// issued while the engine reports S, regardless of where the engine
/// lands. Created fresh per run, never persisted.
#[derive(Debug, Clone)]
pub struct ExplorationLedger {
    queues: HashMap<i32, Vec<usize>>,
}

impl ExplorationLedger {
    /// One queue per registered state, each holding every command index.
    /// Queues are LIFO: the newest unexplored command is tried first.
    pub fn full(registry: &StateRegistry, catalog: &CommandCatalog) -> Self {
        let queues = registry
            .codes()
            .map(|code| (code, (0..catalog.len()).collect()))
            .collect();
        Self { queues }
    }

    /// Pop the next untried command for a state, newest first.
    pub fn pop(&mut self, state: i32) -> Option<usize> {
        self.queues.get_mut(&state)?.pop()
    }

    /// Untried commands remaining for one state.
    pub fn remaining(&self, state: i32) -> usize {
        self.queues.get(&state).map_or(0, Vec::len)
    }

    /// True once every queue is empty.
    pub fn is_drained(&self) -> bool {
        self.queues.values().all(Vec::is_empty)
    }

    /// True while some non-transient state still has untried commands.
    /// Transient leftovers don't count: the random walk cannot park the
    /// engine on a state it leaves by itself.
    pub fn has_untried_nontransient(&self, oracle: &TransitionOracle) -> bool {
        self.queues
            .iter()
            .any(|(&code, queue)| !queue.is_empty() && !oracle.is_transient(code))
    }

    /// (state code, untried count) for every non-empty queue, code order.
    pub fn remaining_by_state(&self) -> Vec<(i32, usize)> {
        let mut summary: Vec<(i32, usize)> = self
            .queues
            .iter()
            .filter(|(_, queue)| !queue.is_empty())
            .map(|(&code, queue)| (code, queue.len()))
            .collect();
        summary.sort_unstable_by_key(|&(code, _)| code);
        summary
    }
}
