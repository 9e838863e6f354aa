use std::collections::HashMap;

use crate::error::CatalogError;

/// Symbolic prefix marking a state entry in the source enumeration.
/// Entries without it are not states and are skipped.
pub const STATE_SYMBOL_PREFIX: &str = "LooperState";

/// The engine's state enumeration as (code, symbol) pairs, in code order.
///
/// Declared statically and validated for bijectivity at construction
/// rather than scavenged from another component's symbol table at runtime.
pub const LOOPER_STATE_SYMBOLS: &[(i32, &str)] = &[
    (-1, "LooperStateUnknown"),
    (0, "LooperStateOff"),
    (1, "LooperStateWaitStart"),
    (2, "LooperStateRecording"),
    (3, "LooperStateWaitStop"),
    (4, "LooperStatePlaying"),
    (5, "LooperStateOverdubbing"),
    (6, "LooperStateMultiplying"),
    (7, "LooperStateInserting"),
    (8, "LooperStateReplacing"),
    (9, "LooperStateDelay"),
    (10, "LooperStateMuted"),
    (11, "LooperStateScratching"),
    (12, "LooperStateOneShot"),
    (13, "LooperStateSubstitute"),
    (14, "LooperStatePaused"),
    (15, "LooperStateUndoAll"),
    (16, "LooperStateTriggerPlay"),
    (17, "LooperStateUndo"),
    (18, "LooperStateRedo"),
    (19, "LooperStateRedoAll"),
    (20, "LooperStateOffMuted"),
];

/// Bidirectional mapping between engine state codes and canonical names.
///
/// A strict bijection: every code maps to exactly one name and vice versa.
/// Construction fails if the source enumeration collides either way.
#[derive(Debug, Clone)]
pub struct StateRegistry {
    by_code: HashMap<i32, String>,
    by_name: HashMap<String, i32>,
}

impl StateRegistry {
    /// Build a registry from (code, symbol) pairs.
    ///
    /// Keeps only symbols carrying [`STATE_SYMBOL_PREFIX`] and strips the
    /// prefix to obtain the canonical short name.
    pub fn from_symbols(symbols: &[(i32, &str)]) -> Result<Self, CatalogError> {
        let mut by_code = HashMap::new();
        let mut by_name = HashMap::new();

        for &(code, symbol) in symbols {
            let name = match symbol.strip_prefix(STATE_SYMBOL_PREFIX) {
                Some(short) if !short.is_empty() => short,
                _ => continue,
            };
            if by_code.insert(code, name.to_string()).is_some() {
                return Err(CatalogError::AmbiguousStateMapping(format!(
                    "code {code} appears twice"
                )));
            }
            if by_name.insert(name.to_string(), code).is_some() {
                return Err(CatalogError::AmbiguousStateMapping(format!(
                    "name '{name}' maps to more than one code"
                )));
            }
        }

        Ok(Self { by_code, by_name })
    }

    /// The default looper state enumeration.
    pub fn looper() -> Result<Self, CatalogError> {
        Self::from_symbols(LOOPER_STATE_SYMBOLS)
    }

    pub fn name_of(&self, code: i32) -> Result<&str, CatalogError> {
        self.by_code
            .get(&code)
            .map(String::as_str)
            .ok_or_else(|| CatalogError::UnknownState(format!("code {code}")))
    }

    pub fn code_of(&self, name: &str) -> Result<i32, CatalogError> {
        self.by_name
            .get(name)
            .copied()
            .ok_or_else(|| CatalogError::UnknownState(name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.by_code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_code.is_empty()
    }

    /// Iterate all registered state codes (unordered).
    pub fn codes(&self) -> impl Iterator<Item = i32> + '_ {
        self.by_code.keys().copied()
    }
}
