use loopcheck_adapter::{AdapterConfig, ProtocolAdapter, ProtocolError};
use loopcheck_catalog::{CatalogError, CommandCatalog, StateRegistry};
use loopcheck_engine::LooperHandle;
use loopcheck_explore::{CoverageDriver, DriverConfig, DriverError, RunReport};
use loopcheck_model::{OracleError, TransitionOracle};

use crate::check::{self, AssertionError};

/// Any failure a test session can surface.
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Oracle(#[from] OracleError),

    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    #[error(transparent)]
    Driver(#[from] DriverError),

    #[error(transparent)]
    Assertion(#[from] AssertionError),
}

/// One test session: one engine handle, owned exclusively, plus the
/// resolved vocabulary and model it is tested against.
///
/// The vocabulary and model are explicit parts of the session rather than
/// process-wide tables, so two sessions never share mutable state. The
/// handle is released when the session is dropped.
pub struct TestSession<H: LooperHandle> {
    catalog: CommandCatalog,
    oracle: TransitionOracle,
    adapter: ProtocolAdapter<H>,
}

impl<H: LooperHandle> TestSession<H> {
    /// Open a session with the default looper vocabulary and model.
    pub fn new(handle: H, config: AdapterConfig) -> Result<Self, HarnessError> {
        let catalog = CommandCatalog::looper();
        let registry = StateRegistry::looper()?;
        let oracle = TransitionOracle::looper(&catalog, &registry)?;
        Ok(Self {
            catalog,
            oracle,
            adapter: ProtocolAdapter::new(handle, registry, config),
        })
    }

    /// Open a session from already-built parts.
    pub fn with_parts(
        catalog: CommandCatalog,
        registry: StateRegistry,
        oracle: TransitionOracle,
        handle: H,
        config: AdapterConfig,
    ) -> Self {
        Self {
            catalog,
            oracle,
            adapter: ProtocolAdapter::new(handle, registry, config),
        }
    }

    /// Issue a command by name and wait for the engine to consume it.
    pub fn request(&mut self, name: &str) -> Result<(), HarnessError> {
        let index = self.catalog.index_of(name)?;
        self.adapter.issue(index)?;
        Ok(())
    }

    /// Issue a command by name, then check the settled state against the
    /// model's expectation for it.
    pub fn request_checked(&mut self, name: &str) -> Result<(), HarnessError> {
        let index = self.catalog.index_of(name)?;
        self.adapter.issue(index)?;
        let observed = self.adapter.current_state()?;
        check::check_transition(
            &self.catalog,
            self.adapter.registry(),
            &self.oracle,
            index,
            observed,
        )
    }

    /// Current engine state as its canonical name.
    pub fn state_name(&mut self) -> Result<String, HarnessError> {
        Ok(self.adapter.current_state_name()?.to_string())
    }

    /// Assert the engine settled in the named state.
    pub fn assert_state(&mut self, expected: &str) -> Result<(), HarnessError> {
        let observed = self.adapter.current_state()?;
        check::check_scenario(self.adapter.registry(), expected, observed)
    }

    /// Exhaustively probe every (state, command) pair reachable from
    /// here, returning the coverage report.
    pub fn explore(&mut self, config: DriverConfig) -> Result<RunReport, HarnessError> {
        let driver = CoverageDriver::new(&mut self.adapter, &self.catalog, &self.oracle, config);
        Ok(driver.run()?)
    }

    pub fn catalog(&self) -> &CommandCatalog {
        &self.catalog
    }

    pub fn oracle(&self) -> &TransitionOracle {
        &self.oracle
    }

    pub fn adapter(&self) -> &ProtocolAdapter<H> {
        &self.adapter
    }

    pub fn adapter_mut(&mut self) -> &mut ProtocolAdapter<H> {
        &mut self.adapter
    }

    /// Tear down, releasing the engine handle.
    pub fn into_handle(self) -> H {
        self.adapter.into_handle()
    }
}
