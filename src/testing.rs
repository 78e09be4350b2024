//! Shared test fixtures.

use std::collections::BTreeSet;

use crate::puzzle::{Crossword, Direction, Variable};

/// Five-by-five grid with four slots forming a ring.
pub(crate) const STRUCTURE0: &str = include_str!("../data/structure0.txt");

/// Number words that fill [`STRUCTURE0`] in exactly one way.
pub(crate) const WORDS0: &str = include_str!("../data/words0.txt");

/// Owned word set from string literals.
pub(crate) fn words(list: &[&str]) -> BTreeSet<String> {
    list.iter().map(|w| w.to_string()).collect()
}

/// `A` = (0, 0) across, `B` = (0, 1) down, crossing at A[1] / B[0].
pub(crate) fn cross() -> (Crossword, Variable, Variable) {
    (
        cross_with(""),
        Variable::new(0, 0, Direction::Across, 3),
        Variable::new(0, 1, Direction::Down, 3),
    )
}

/// The [`cross`] grid with a vocabulary.
pub(crate) fn cross_with(words: &str) -> Crossword {
    Crossword::parse("___\n#_#\n#_#", words).unwrap()
}

/// [`STRUCTURE0`] with no vocabulary, and its slots: top, left, right, bottom.
pub(crate) fn structure0() -> (Crossword, [Variable; 4]) {
    (
        Crossword::parse(STRUCTURE0, "").unwrap(),
        [
            Variable::new(0, 1, Direction::Across, 3),
            Variable::new(0, 1, Direction::Down, 5),
            Variable::new(1, 4, Direction::Down, 4),
            Variable::new(4, 1, Direction::Across, 4),
        ],
    )
}
