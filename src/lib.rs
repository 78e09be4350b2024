//! Crossword filling as a constraint satisfaction problem.
//!
//! Assigns words from a vocabulary to the slots of a grid so that every
//! word has its slot's length, crossing slots agree on their shared
//! letter, and no word is used twice.
//!
//! - **Puzzle model** ([`puzzle`]): slots, crossings and vocabulary behind
//!   the [`Puzzle`](puzzle::Puzzle) trait, with a text-based
//!   [`Crossword`](puzzle::Crossword) implementation and renderer.
//! - **CSP engine** ([`csp`]): node consistency, AC-3 arc consistency, and
//!   backtracking search guided by minimum-remaining-values, degree and
//!   least-constraining-value heuristics.
//!
//! # Examples
//!
//! ```
//! use u_crossword::puzzle::Crossword;
//!
//! let crossword = Crossword::parse("___\n#_#\n#_#", "cat\ndog\nace").unwrap();
//! let assignment = u_crossword::solve(&crossword).unwrap().expect("solvable");
//! print!("{}", crossword.render(&assignment));
//! ```
//!
//! # Logging
//!
//! Progress is reported through the `log` facade under the `solver`
//! target. Install any logger (e.g. `env_logger`) to see it.

pub mod csp;
pub mod error;
pub mod puzzle;

#[cfg(test)]
mod testing;

pub use csp::solve;
pub use error::{PuzzleError, SolveError};
