use std::time::Duration;

use loopcheck_catalog::{CatalogError, StateRegistry};
use loopcheck_engine::{LooperHandle, OutputControl};
use serde::{Deserialize, Serialize};

/// Protocol tuning. The defaults reproduce the raw protocol: wait forever
/// for an acknowledgement, sample state immediately after.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdapterConfig {
    /// Maximum `request_pending` polls before giving up on a command.
    /// `None` busy-waits forever; an unresponsive engine then hangs the
    /// caller, to be caught by the external test-runner deadline.
    pub poll_budget: Option<u64>,
    /// Optional settle delay slept after the acknowledgement, before the
    /// caller samples state. A tuning knob, not a correctness requirement.
    pub settle: Option<Duration>,
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            poll_budget: None,
            settle: None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    /// The engine never cleared `request_pending` within the configured
    /// poll budget.
    #[error("engine did not acknowledge command {command} within {polls} polls")]
    Timeout { command: usize, polls: u64 },

    /// The engine reported a state code the registry does not know.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Issues commands to the engine and waits, one at a time, for each to be
/// consumed. Stateless beyond the handle it wraps and its config; owning
/// the handle exclusively is what enforces the one-in-flight invariant.
#[derive(Debug)]
pub struct ProtocolAdapter<H: LooperHandle> {
    handle: H,
    registry: StateRegistry,
    config: AdapterConfig,
}

impl<H: LooperHandle> ProtocolAdapter<H> {
    pub fn new(handle: H, registry: StateRegistry, config: AdapterConfig) -> Self {
        Self {
            handle,
            registry,
            config,
        }
    }

    /// Send a command and busy-poll the pending flag until the engine has
    /// consumed it. No sleep or backoff between polls; command processing
    /// latency is expected to be sub-millisecond.
    pub fn issue(&mut self, command: usize) -> Result<(), ProtocolError> {
        self.handle.request_command(command);

        let mut polls: u64 = 0;
        while self.handle.request_pending() {
            polls += 1;
            if let Some(budget) = self.config.poll_budget {
                if polls >= budget {
                    return Err(ProtocolError::Timeout {
                        command,
                        polls: budget,
                    });
                }
            }
        }

        if let Some(settle) = self.config.settle {
            std::thread::sleep(settle);
        }

        Ok(())
    }

    /// Read the engine's state control and decode it through the registry.
    pub fn current_state(&mut self) -> Result<i32, ProtocolError> {
        let value = self.handle.read_control_value(OutputControl::State);
        let code = value as i32;
        self.registry.name_of(code)?;
        Ok(code)
    }

    /// Current state as its canonical name.
    pub fn current_state_name(&mut self) -> Result<&str, ProtocolError> {
        let value = self.handle.read_control_value(OutputControl::State);
        let code = value as i32;
        Ok(self.registry.name_of(code)?)
    }

    pub fn registry(&self) -> &StateRegistry {
        &self.registry
    }

    pub fn handle(&self) -> &H {
        &self.handle
    }

    pub fn handle_mut(&mut self) -> &mut H {
        &mut self.handle
    }

    /// Release the engine handle.
    pub fn into_handle(self) -> H {
        self.handle
    }
}
