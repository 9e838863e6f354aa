use loopcheck_adapter::{ProtocolAdapter, ProtocolError};
use loopcheck_catalog::{CatalogError, CommandCatalog};
use loopcheck_engine::LooperHandle;
use loopcheck_model::TransitionOracle;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::ledger::ExplorationLedger;
use crate::trace::{StepKind, TransitionTrace};

/// Configuration for an exploration run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriverConfig {
    /// RNG seed for the random-fallback walk. Same seed, same walk.
    pub seed: u64,
    /// Step budget. `None` reproduces the raw walk, whose termination is
    /// probabilistic only: if the remaining queues are unreachable the
    /// run never ends. A budget turns that into a coverage-incomplete
    /// report instead.
    pub max_steps: Option<u64>,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            max_steps: None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// How an exploration run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunOutcome {
    /// Every command tried from every reachable non-transient state.
    FullCoverage,
    /// The step budget ran out with untried work left.
    CoverageIncomplete,
}

/// A command whose observed outcome disagreed with the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mismatch {
    pub step: u64,
    pub command: String,
    pub pre_state: String,
    pub expected: String,
    pub observed: String,
}

/// Aggregate result of an exploration run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub outcome: RunOutcome,
    /// Commands issued in total (queued + fallback).
    pub steps: u64,
    /// Steps that were random perturbation rather than queue work.
    pub random_fallbacks: u64,
    /// Model disagreements observed on queued steps.
    pub mismatches: Vec<Mismatch>,
    /// (state name, untried count) for every queue left non-empty.
    pub remaining: Vec<(String, usize)>,
    pub trace: TransitionTrace,
}

/// Exploration driver: drains the per-state ledger one command at a time,
/// falling back to random perturbation when the current state is spent.
///
/// The driver is a state machine over the ledger, not over the engine's
/// own states. It never issues a command while a previous one is in
/// flight; sequencing goes through the protocol adapter.
pub struct CoverageDriver<'a, H: LooperHandle> {
    adapter: &'a mut ProtocolAdapter<H>,
    catalog: &'a CommandCatalog,
    oracle: &'a TransitionOracle,
    ledger: ExplorationLedger,
    rng: ChaCha8Rng,
    config: DriverConfig,
}

impl<'a, H: LooperHandle> CoverageDriver<'a, H> {
    pub fn new(
        adapter: &'a mut ProtocolAdapter<H>,
        catalog: &'a CommandCatalog,
        oracle: &'a TransitionOracle,
        config: DriverConfig,
    ) -> Self {
        let ledger = ExplorationLedger::full(adapter.registry(), catalog);
        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        Self {
            adapter,
            catalog,
            oracle,
            ledger,
            rng,
            config,
        }
    }

    /// Run until every reachable non-transient state has had every
    /// command tried from it, or the step budget runs out.
    pub fn run(mut self) -> Result<RunReport, DriverError> {
        let mut trace = TransitionTrace::new();
        let mut mismatches = Vec::new();
        let mut steps: u64 = 0;
        let mut random_fallbacks: u64 = 0;

        let outcome = loop {
            if !self.ledger.has_untried_nontransient(self.oracle) {
                break RunOutcome::FullCoverage;
            }
            if let Some(budget) = self.config.max_steps {
                if steps >= budget {
                    break RunOutcome::CoverageIncomplete;
                }
            }

            let pre_state = self.adapter.current_state()?;
            let (command, kind) = match self.ledger.pop(pre_state) {
                Some(command) => (command, StepKind::Queued),
                None => {
                    // Current state is spent; perturb with a random
                    // command so an untried queue becomes reachable.
                    random_fallbacks += 1;
                    let command = self.rng.gen_range(0..self.catalog.len());
                    (command, StepKind::RandomFallback)
                }
            };

            self.adapter.issue(command)?;
            let post_state = self.adapter.current_state()?;
            trace.record(pre_state, command, post_state, kind);
            steps += 1;

            // Fallback steps are perturbation only; the model is checked
            // on queue work.
            if kind == StepKind::Queued {
                if let Some(expected) = self.oracle.expected_state(command) {
                    if expected != post_state {
                        mismatches.push(self.mismatch(
                            trace.len() as u64 - 1,
                            command,
                            pre_state,
                            expected,
                            post_state,
                        )?);
                    }
                }
            }
        };

        let registry = self.adapter.registry();
        let mut remaining = Vec::new();
        for (code, untried) in self.ledger.remaining_by_state() {
            remaining.push((registry.name_of(code)?.to_string(), untried));
        }

        Ok(RunReport {
            outcome,
            steps,
            random_fallbacks,
            mismatches,
            remaining,
            trace,
        })
    }

    fn mismatch(
        &self,
        step: u64,
        command: usize,
        pre_state: i32,
        expected: i32,
        observed: i32,
    ) -> Result<Mismatch, DriverError> {
        let registry = self.adapter.registry();
        Ok(Mismatch {
            step,
            command: self.catalog.name_of(command)?.to_string(),
            pre_state: registry.name_of(pre_state)?.to_string(),
            expected: registry.name_of(expected)?.to_string(),
            observed: registry.name_of(observed)?.to_string(),
        })
    }
}
