use loopcheck_adapter::AdapterConfig;
use loopcheck_engine::LooperHandle;
use loopcheck_model::BaselineScenario;

use crate::check::AssertionError;
use crate::session::{HarnessError, TestSession};

/// Runs scripted sequences and baseline tables, one fresh engine per
/// case. The factory is the per-case fixture setup; no state carries
/// over between cases.
pub struct ScenarioRunner<F> {
    make_engine: F,
    config: AdapterConfig,
}

impl<H, F> ScenarioRunner<F>
where
    H: LooperHandle,
    F: FnMut() -> H,
{
    pub fn new(make_engine: F) -> Self {
        Self {
            make_engine,
            config: AdapterConfig::default(),
        }
    }

    pub fn with_config(make_engine: F, config: AdapterConfig) -> Self {
        Self {
            make_engine,
            config,
        }
    }

    fn fresh_session(&mut self) -> Result<TestSession<H>, HarnessError> {
        TestSession::new((self.make_engine)(), self.config.clone())
    }

    /// Issue `commands` on a fresh engine and assert the final state.
    pub fn run_script(
        &mut self,
        commands: &[&str],
        expected: &str,
    ) -> Result<(), HarnessError> {
        let mut session = self.fresh_session()?;
        for command in commands {
            session.request(command)?;
        }
        session.assert_state(expected)
    }

    /// Sweep a baseline table: for every catalog command not ignored,
    /// start a fresh engine, establish the baseline, issue the command,
    /// and require the engine back at the baseline state.
    ///
    /// Assertion failures are collected, not short-circuited; anything
    /// else (configuration or protocol trouble) aborts the sweep.
    pub fn run_baseline(
        &mut self,
        scenario: &BaselineScenario,
    ) -> Result<Vec<AssertionError>, HarnessError> {
        let mut failures = Vec::new();

        let catalog = loopcheck_catalog::CommandCatalog::looper();
        let commands: Vec<&str> = catalog
            .names()
            .filter(|name| !scenario.ignores(name))
            .collect();

        for command in commands {
            let mut session = self.fresh_session()?;
            for setup in &scenario.setup {
                session.request(setup)?;
            }
            session.request(command)?;
            match session.assert_state(&scenario.baseline) {
                Ok(()) => {}
                Err(HarnessError::Assertion(failure)) => failures.push(failure),
                Err(other) => return Err(other),
            }
        }

        Ok(failures)
    }
}
