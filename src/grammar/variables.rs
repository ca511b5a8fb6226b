//! Define-before-use tracking for assignment targets

use rustc_hash::FxHashMap;

/// Lifecycle of an identifier that has appeared as an assignment target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariableState {
    /// Assigned to, but the right-hand side has not been fully analysed
    Pending,
    /// Assignment completed, safe to read
    Enabled,
}

/// Per-identifier lifecycle state. Entries are never removed.
#[derive(Debug, Clone, Default)]
pub struct VariableTable {
    entries: FxHashMap<String, VariableState>,
}

impl VariableTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `name` as pending unless it already has a state.
    pub fn declare_pending(&mut self, name: &str) {
        if !self.entries.contains_key(name) {
            self.entries.insert(name.to_string(), VariableState::Pending);
        }
    }

    /// Mark `name` as safe to read, whatever its previous state.
    pub fn enable(&mut self, name: &str) {
        self.entries.insert(name.to_string(), VariableState::Enabled);
    }

    pub fn is_readable(&self, name: &str) -> bool {
        self.state(name) == Some(VariableState::Enabled)
    }

    pub fn state(&self, name: &str) -> Option<VariableState> {
        self.entries.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, VariableState)> {
        self.entries
            .iter()
            .map(|(name, state)| (name.as_str(), *state))
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }
}
