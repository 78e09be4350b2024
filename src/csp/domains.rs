//! Per-variable candidate sets.

use std::collections::{BTreeMap, BTreeSet};

use crate::puzzle::Variable;

/// Remaining candidate words for every variable of one solve.
///
/// Created from the full vocabulary and only ever shrunk, by node and
/// arc consistency. Outside this crate the store is read-only.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeSet;
/// use u_crossword::csp::DomainStore;
/// use u_crossword::puzzle::{Direction, Variable};
///
/// let v = Variable::new(0, 0, Direction::Across, 3);
/// let store = DomainStore::new(&BTreeSet::from([v]), ["CAT", "DOGS"]);
/// assert_eq!(store.remaining(&v), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DomainStore {
    domains: BTreeMap<Variable, BTreeSet<String>>,
}

impl DomainStore {
    /// Gives every variable a copy of the whole vocabulary.
    pub fn new<'a, S: AsRef<str>>(
        variables: impl IntoIterator<Item = &'a Variable>,
        vocabulary: impl IntoIterator<Item = S>,
    ) -> Self {
        let words: BTreeSet<String> = vocabulary
            .into_iter()
            .map(|w| w.as_ref().to_string())
            .collect();
        Self {
            domains: variables
                .into_iter()
                .map(|v| (*v, words.clone()))
                .collect(),
        }
    }

    /// Builds a store from explicit domains.
    pub fn from_domains(domains: BTreeMap<Variable, BTreeSet<String>>) -> Self {
        Self { domains }
    }

    /// Candidates left for `variable`, or `None` if it is not in the store.
    pub fn domain(&self, variable: &Variable) -> Option<&BTreeSet<String>> {
        self.domains.get(variable)
    }

    /// Whether `variable` has a domain in the store.
    pub fn contains_variable(&self, variable: &Variable) -> bool {
        self.domains.contains_key(variable)
    }

    /// Variables in the store, in order.
    pub fn variables(&self) -> impl Iterator<Item = &Variable> {
        self.domains.keys()
    }

    /// Number of candidates left for `variable` (0 if absent).
    pub fn remaining(&self, variable: &Variable) -> usize {
        self.domains.get(variable).map_or(0, BTreeSet::len)
    }

    /// Total number of candidates across all variables.
    pub fn total_candidates(&self) -> usize {
        self.domains.values().map(BTreeSet::len).sum()
    }

    /// First variable whose domain is empty.
    pub fn first_empty(&self) -> Option<Variable> {
        self.domains
            .iter()
            .find(|(_, words)| words.is_empty())
            .map(|(v, _)| *v)
    }

    /// Number of variables.
    pub fn len(&self) -> usize {
        self.domains.len()
    }

    /// Whether the store has no variables.
    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }

    /// `(variable, domain)` pairs in variable order.
    pub fn iter(&self) -> impl Iterator<Item = (&Variable, &BTreeSet<String>)> {
        self.domains.iter()
    }

    /// Removes one candidate. Returns whether it was present.
    pub(crate) fn prune(&mut self, variable: &Variable, word: &str) -> bool {
        self.domains
            .get_mut(variable)
            .is_some_and(|words| words.remove(word))
    }

    /// Prunes every candidate of `variable` except `word`.
    ///
    /// Returns the number of candidates removed.
    pub(crate) fn restrict(&mut self, variable: &Variable, word: &str) -> usize {
        match self.domains.get_mut(variable) {
            Some(words) => {
                let before = words.len();
                words.retain(|w| w == word);
                before - words.len()
            }
            None => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::Direction;

    fn vars() -> BTreeSet<Variable> {
        BTreeSet::from([
            Variable::new(0, 0, Direction::Across, 3),
            Variable::new(0, 0, Direction::Down, 2),
        ])
    }

    #[test]
    fn test_new_copies_vocabulary() {
        let store = DomainStore::new(&vars(), ["AB", "CAT", "CAT"]);
        assert_eq!(store.len(), 2);
        for v in vars() {
            assert_eq!(store.remaining(&v), 2);
        }
        assert_eq!(store.total_candidates(), 4);
    }

    #[test]
    fn test_prune() {
        let v = Variable::new(0, 0, Direction::Across, 3);
        let mut store = DomainStore::new(&vars(), ["AB", "CAT"]);

        assert!(store.prune(&v, "AB"));
        assert!(!store.prune(&v, "AB"));
        assert_eq!(store.remaining(&v), 1);
        assert!(store.first_empty().is_none());

        assert!(store.prune(&v, "CAT"));
        assert_eq!(store.first_empty(), Some(v));
    }

    #[test]
    fn test_prune_unknown_variable() {
        let mut store = DomainStore::new(&vars(), ["AB"]);
        let other = Variable::new(5, 5, Direction::Down, 2);
        assert!(!store.prune(&other, "AB"));
        assert_eq!(store.remaining(&other), 0);
        assert!(!store.contains_variable(&other));
    }

    #[test]
    fn test_restrict() {
        let v = Variable::new(0, 0, Direction::Across, 3);
        let mut store = DomainStore::new(&vars(), ["AB", "CAT", "DOG"]);
        assert_eq!(store.restrict(&v, "DOG"), 2);
        assert_eq!(
            store.domain(&v),
            Some(&BTreeSet::from(["DOG".to_string()]))
        );
    }
}
