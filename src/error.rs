//! Error types.

use std::fmt;

use crate::puzzle::{Overlap, Variable};

/// Faults that abort a solve.
///
/// All of these indicate malformed constraint data handed to the solver,
/// never an unsolvable puzzle. An unsolvable puzzle is reported through
/// [`SolverStatus`](crate::csp::SolverStatus) instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// An arc or neighbor references a variable absent from the domain store.
    UnknownVariable(Variable),

    /// Two variables are neighbors but have no overlap cell.
    MissingOverlap(Variable, Variable),

    /// `overlap(x, y)` is not the mirror of `overlap(y, x)`, or the
    /// neighbor relation is not symmetric.
    AsymmetricOverlap(Variable, Variable),

    /// An overlap offset falls outside one of the two slots.
    OverlapOutOfBounds {
        x: Variable,
        y: Variable,
        overlap: Overlap,
    },

    /// The puzzle reports a slot length other than the one the slot carries.
    LengthMismatch { variable: Variable, length: usize },
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveError::UnknownVariable(v) => {
                write!(f, "variable {v} is not in the domain store")
            }
            SolveError::MissingOverlap(x, y) => {
                write!(f, "neighbors {x} and {y} have no overlap")
            }
            SolveError::AsymmetricOverlap(x, y) => {
                write!(f, "overlap between {x} and {y} is not symmetric")
            }
            SolveError::OverlapOutOfBounds { x, y, overlap } => {
                write!(
                    f,
                    "overlap ({}, {}) between {x} and {y} is out of bounds",
                    overlap.first, overlap.second
                )
            }
            SolveError::LengthMismatch { variable, length } => {
                write!(f, "puzzle reports length {length} for {variable}")
            }
        }
    }
}

impl std::error::Error for SolveError {}

/// Errors raised while loading a [`Crossword`](crate::puzzle::Crossword).
#[derive(Debug)]
pub enum PuzzleError {
    /// Reading a structure or word file failed.
    Io(std::io::Error),

    /// The structure has no rows.
    EmptyStructure,
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PuzzleError::Io(e) => write!(f, "failed to read puzzle input: {e}"),
            PuzzleError::EmptyStructure => write!(f, "crossword structure is empty"),
        }
    }
}

impl std::error::Error for PuzzleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PuzzleError::Io(e) => Some(e),
            PuzzleError::EmptyStructure => None,
        }
    }
}

impl From<std::io::Error> for PuzzleError {
    fn from(e: std::io::Error) -> Self {
        PuzzleError::Io(e)
    }
}
