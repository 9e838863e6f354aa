use std::collections::HashMap;

use crate::error::CatalogError;

/// The looper engine's command set, in wire order.
///
/// Position in this list is the index the engine consumes; reordering it
/// changes the wire protocol.
pub const LOOPER_COMMANDS: &[&str] = &[
    "UNDO",
    "REDO",
    "REPLACE",
    "REVERSE",
    "SCRATCH",
    "RECORD",
    "OVERDUB",
    "MULTIPLY",
    "INSERT",
    "MUTE",
    "DELAY",
    "REDO_TOG",
    "QUANT_TOG",
    "ROUND_TOG",
    "ONESHOT",
    "TRIGGER",
    "SUBSTITUTE",
    "UNDO_ALL",
    "REDO_ALL",
    "MUTE_ON",
    "MUTE_OFF",
    "PAUSE",
    "PAUSE_ON",
    "PAUSE_OFF",
];

/// Immutable ordered list of engine commands.
///
/// Command identity is its position in the list. Read-only after
/// construction; no side effects.
#[derive(Debug, Clone)]
pub struct CommandCatalog {
    names: Vec<String>,
    index: HashMap<String, usize>,
}

impl CommandCatalog {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        let index = names
            .iter()
            .enumerate()
            .map(|(i, n)| (n.clone(), i))
            .collect();
        Self { names, index }
    }

    /// The default looper command set.
    pub fn looper() -> Self {
        Self::new(LOOPER_COMMANDS.iter().copied())
    }

    /// Resolve a command name to its wire index.
    pub fn index_of(&self, name: &str) -> Result<usize, CatalogError> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| CatalogError::UnknownCommand(name.to_string()))
    }

    /// Resolve a wire index back to its canonical name.
    pub fn name_of(&self, index: usize) -> Result<&str, CatalogError> {
        self.names
            .get(index)
            .map(String::as_str)
            .ok_or_else(|| CatalogError::UnknownCommand(format!("index {index}")))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterate command names in wire order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}
