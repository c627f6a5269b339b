use std::collections::HashMap;

use itertools::Itertools;
use tracing::trace;

/// Flat map from a declared variable to the operand name that held its
/// value at declaration. There are no nested scopes.
///
/// Only `int x = ...` writes an entry. A later plain assignment to `x`
/// emits code but leaves the entry alone.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SymbolTable {
    entries: HashMap<String, String>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `name -> value`, overwriting an earlier declaration of the
    /// same name.
    pub fn declare(&mut self, name: &str, value: &str) {
        trace!(name, value, "declare");
        self.entries.insert(name.to_string(), value.to_string());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries ordered by variable name.
    pub fn sorted(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .sorted_unstable_by_key(|&(k, _)| k)
    }
}
