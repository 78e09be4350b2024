//! Puzzle model.
//!
//! The solver sees a crossword only through the [`Puzzle`] trait: a set of
//! [`Variable`] slots, the symmetric neighbor relation between crossing
//! slots, the [`Overlap`] cell of every crossing pair, and a vocabulary.
//!
//! [`Crossword`] is the text-based implementation: it parses a grid
//! structure and a word list and renders assignments back onto the grid.

mod crossword;
mod types;
mod variable;

pub use crossword::{Crossword, BLOCKED_GLYPH, OPEN_CELL};
pub use types::{Overlap, Puzzle};
pub use variable::{Direction, Variable};
