//! Partial and complete word assignments.

use std::collections::BTreeMap;

use crate::puzzle::Variable;

/// Mapping from slots to the words placed in them.
///
/// A variable is either absent (unassigned) or mapped to a word; there is
/// no placeholder value. [`Assignment::get`] returns `None` for an
/// unassigned slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Assignment {
    words: BTreeMap<Variable, String>,
}

impl Assignment {
    /// Creates an empty assignment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Places `word` in `variable`, returning the word it replaces.
    pub fn assign(&mut self, variable: Variable, word: impl Into<String>) -> Option<String> {
        self.words.insert(variable, word.into())
    }

    /// Clears `variable`, returning the word it held.
    pub fn unassign(&mut self, variable: &Variable) -> Option<String> {
        self.words.remove(variable)
    }

    /// The word in `variable`, if assigned.
    pub fn get(&self, variable: &Variable) -> Option<&str> {
        self.words.get(variable).map(String::as_str)
    }

    /// Whether `variable` holds a word.
    pub fn is_assigned(&self, variable: &Variable) -> bool {
        self.words.contains_key(variable)
    }

    /// Whether `word` is placed in any slot.
    pub fn contains_word(&self, word: &str) -> bool {
        self.words.values().any(|w| w == word)
    }

    /// Number of assigned slots.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Assigned `(slot, word)` pairs in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (&Variable, &str)> {
        self.words.iter().map(|(v, w)| (v, w.as_str()))
    }
}

impl<S: Into<String>> FromIterator<(Variable, S)> for Assignment {
    fn from_iter<I: IntoIterator<Item = (Variable, S)>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().map(|(v, w)| (v, w.into())).collect(),
        }
    }
}
