/// Configuration errors raised while building or querying the vocabulary
/// tables. All of these are fatal at construction time: a malformed or
/// stale catalog must fail the run before any engine interaction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// A command name or index that is not in the catalog.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// A state name or code that is not in the registry.
    #[error("unknown state: {0}")]
    UnknownState(String),

    /// The source enumeration does not reduce to a 1:1 code<->name mapping.
    #[error("ambiguous state mapping: {0}")]
    AmbiguousStateMapping(String),
}
