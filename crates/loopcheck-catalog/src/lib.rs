//! Static vocabulary of the looper engine: the command catalog and the
//! state registry, plus the configuration error taxonomy shared by both.

pub mod command;
pub mod error;
pub mod state;

pub use command::CommandCatalog;
pub use error::CatalogError;
pub use state::StateRegistry;
