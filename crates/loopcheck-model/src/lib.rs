//! Expected-behavior model of the looper engine: the transition oracle
//! used as a baseline during exploration, and the literal baseline
//! scenario tables used by the scripted test suites.

pub mod oracle;
pub mod scenario;

pub use oracle::{OracleError, TransitionOracle};
pub use scenario::BaselineScenario;
