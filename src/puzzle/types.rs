//! The puzzle model consumed by the solver.

use std::collections::BTreeSet;

use super::variable::Variable;
use crate::error::SolveError;

/// Offsets of the shared cell between two crossing slots.
///
/// For the ordered pair `(x, y)`, `first` indexes into `x`'s word and
/// `second` into `y`'s word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Overlap {
    /// Offset into the first variable's word.
    pub first: usize,
    /// Offset into the second variable's word.
    pub second: usize,
}

impl Overlap {
    /// Creates a new overlap.
    pub fn new(first: usize, second: usize) -> Self {
        Self { first, second }
    }

    /// The same overlap seen from the other variable.
    pub fn reversed(self) -> Self {
        Self {
            first: self.second,
            second: self.first,
        }
    }
}

/// Read-only view of a crossword puzzle as a constraint problem.
///
/// Implementors supply the slots, the crossing structure between them,
/// and the candidate vocabulary. The solver never mutates the puzzle.
///
/// Contract:
/// - `neighbors` is symmetric and never contains the variable itself.
/// - `overlap(x, y)` is `Some` exactly when `y` is a neighbor of `x`, and
///   `overlap(x, y) == overlap(y, x).map(Overlap::reversed)`.
///
/// [`Puzzle::validate`] checks this contract.
pub trait Puzzle {
    /// All slots of the grid.
    fn variables(&self) -> &BTreeSet<Variable>;

    /// Required word length of a slot.
    ///
    /// Must equal `variable.length`; [`Puzzle::validate`] rejects a puzzle
    /// that reports anything else.
    fn length(&self, variable: &Variable) -> usize {
        variable.length
    }

    /// Slots crossing `variable`.
    fn neighbors(&self, variable: &Variable) -> &BTreeSet<Variable>;

    /// Shared cell of `x` and `y`, if they cross.
    fn overlap(&self, x: &Variable, y: &Variable) -> Option<Overlap>;

    /// Candidate words.
    fn vocabulary(&self) -> &BTreeSet<String>;

    /// Checks the structural contract of the model.
    ///
    /// # Errors
    ///
    /// Returns the first malformed constraint found.
    fn validate(&self) -> Result<(), SolveError> {
        let variables = self.variables();
        for x in variables {
            let length = self.length(x);
            if length != x.length {
                return Err(SolveError::LengthMismatch {
                    variable: *x,
                    length,
                });
            }
            for y in self.neighbors(x) {
                if !variables.contains(y) {
                    return Err(SolveError::UnknownVariable(*y));
                }
                if x == y || !self.neighbors(y).contains(x) {
                    return Err(SolveError::AsymmetricOverlap(*x, *y));
                }
                let overlap = self
                    .overlap(x, y)
                    .ok_or(SolveError::MissingOverlap(*x, *y))?;
                if self.overlap(y, x) != Some(overlap.reversed()) {
                    return Err(SolveError::AsymmetricOverlap(*x, *y));
                }
                if overlap.first >= self.length(x) || overlap.second >= self.length(y) {
                    return Err(SolveError::OverlapOutOfBounds {
                        x: *x,
                        y: *y,
                        overlap,
                    });
                }
            }
            for y in variables {
                if x != y && self.overlap(x, y).is_some() && !self.neighbors(x).contains(y) {
                    return Err(SolveError::AsymmetricOverlap(*x, *y));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::Direction;
    use std::collections::BTreeMap;

    /// Hand-built model whose relations can be corrupted on purpose.
    struct RawPuzzle {
        variables: BTreeSet<Variable>,
        neighbors: BTreeMap<Variable, BTreeSet<Variable>>,
        overlaps: BTreeMap<(Variable, Variable), Overlap>,
        words: BTreeSet<String>,
        none: BTreeSet<Variable>,
        lengths: BTreeMap<Variable, usize>,
    }

    impl RawPuzzle {
        fn crossing(a: Variable, b: Variable, overlap: Overlap) -> Self {
            let mut neighbors = BTreeMap::new();
            neighbors.insert(a, BTreeSet::from([b]));
            neighbors.insert(b, BTreeSet::from([a]));
            let mut overlaps = BTreeMap::new();
            overlaps.insert((a, b), overlap);
            overlaps.insert((b, a), overlap.reversed());
            Self {
                variables: BTreeSet::from([a, b]),
                neighbors,
                overlaps,
                words: BTreeSet::new(),
                none: BTreeSet::new(),
                lengths: BTreeMap::new(),
            }
        }
    }

    impl Puzzle for RawPuzzle {
        fn variables(&self) -> &BTreeSet<Variable> {
            &self.variables
        }

        fn length(&self, variable: &Variable) -> usize {
            self.lengths
                .get(variable)
                .copied()
                .unwrap_or(variable.length)
        }

        fn neighbors(&self, variable: &Variable) -> &BTreeSet<Variable> {
            self.neighbors.get(variable).unwrap_or(&self.none)
        }

        fn overlap(&self, x: &Variable, y: &Variable) -> Option<Overlap> {
            self.overlaps.get(&(*x, *y)).copied()
        }

        fn vocabulary(&self) -> &BTreeSet<String> {
            &self.words
        }
    }

    fn pair() -> (Variable, Variable) {
        (
            Variable::new(0, 0, Direction::Across, 3),
            Variable::new(0, 1, Direction::Down, 3),
        )
    }

    #[test]
    fn test_overlap_reversed() {
        assert_eq!(Overlap::new(1, 0).reversed(), Overlap::new(0, 1));
    }

    #[test]
    fn test_validate_ok() {
        let (a, b) = pair();
        let puzzle = RawPuzzle::crossing(a, b, Overlap::new(1, 0));
        assert!(puzzle.validate().is_ok());
        assert_eq!(puzzle.length(&a), 3);
    }

    #[test]
    fn test_validate_asymmetric_overlap() {
        let (a, b) = pair();
        let mut puzzle = RawPuzzle::crossing(a, b, Overlap::new(1, 0));
        puzzle.overlaps.insert((b, a), Overlap::new(2, 2));
        assert_eq!(puzzle.validate(), Err(SolveError::AsymmetricOverlap(a, b)));
    }

    #[test]
    fn test_validate_missing_overlap() {
        let (a, b) = pair();
        let mut puzzle = RawPuzzle::crossing(a, b, Overlap::new(1, 0));
        puzzle.overlaps.clear();
        assert_eq!(puzzle.validate(), Err(SolveError::MissingOverlap(a, b)));
    }

    #[test]
    fn test_validate_out_of_bounds() {
        let (a, b) = pair();
        let puzzle = RawPuzzle::crossing(a, b, Overlap::new(3, 0));
        assert!(matches!(
            puzzle.validate(),
            Err(SolveError::OverlapOutOfBounds { .. })
        ));
    }

    #[test]
    fn test_validate_unknown_neighbor() {
        let (a, b) = pair();
        let mut puzzle = RawPuzzle::crossing(a, b, Overlap::new(1, 0));
        puzzle.variables.remove(&b);
        assert_eq!(puzzle.validate(), Err(SolveError::UnknownVariable(b)));
    }

    #[test]
    fn test_validate_length_mismatch() {
        let (a, b) = pair();
        let mut puzzle = RawPuzzle::crossing(a, b, Overlap::new(1, 0));
        puzzle.lengths.insert(b, 2);
        assert_eq!(
            puzzle.validate(),
            Err(SolveError::LengthMismatch {
                variable: b,
                length: 2
            })
        );
    }
}
