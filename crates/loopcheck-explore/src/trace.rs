use serde::{Deserialize, Serialize};

/// How the driver chose the command for a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepKind {
    /// Popped from the current state's untried queue.
    Queued,
    /// Picked at random to perturb the engine out of a spent state.
    RandomFallback,
}

/// One issued command and what it did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceStep {
    pub step: u64,
    pub pre_state: i32,
    pub command: usize,
    pub post_state: i32,
    pub kind: StepKind,
}

/// Step-numbered record of a full exploration run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionTrace {
    steps: Vec<TraceStep>,
}

impl TransitionTrace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, pre_state: i32, command: usize, post_state: i32, kind: StepKind) {
        let step = self.steps.len() as u64;
        self.steps.push(TraceStep {
            step,
            pre_state,
            command,
            post_state,
            kind,
        });
    }

    pub fn steps(&self) -> &[TraceStep] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
