//! Coverage-driven exploration of the engine's state space: a per-state
//! ledger of untried commands, a driver that drains it exhaustively and
//! falls back to seeded random perturbation when the current state is
//! spent, and the trace/report types a run produces.

pub mod driver;
pub mod ledger;
pub mod trace;

pub use driver::{CoverageDriver, DriverConfig, DriverError, Mismatch, RunOutcome, RunReport};
pub use ledger::ExplorationLedger;
pub use trace::{StepKind, TraceStep, TransitionTrace};
