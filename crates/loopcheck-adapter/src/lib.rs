//! Synchronous request/acknowledge protocol over a looper handle: the
//! single choke-point between the tester and the engine. Issues one
//! command at a time and waits for the engine to consume it before the
//! caller may sample state.

pub mod adapter;

pub use adapter::{AdapterConfig, ProtocolAdapter, ProtocolError};
