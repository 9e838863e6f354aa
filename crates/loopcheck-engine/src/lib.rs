//! The engine side of the tester: the narrow handle interface the looper
//! engine is consumed through, and an instrumented in-process simulation
//! of it for exercising the driver and scenario suites without audio I/O.

pub mod handle;
pub mod sim;

pub use handle::{LooperHandle, OutputControl};
pub use sim::{SimConfig, SimLooper};
