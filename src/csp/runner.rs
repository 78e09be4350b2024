//! Solve orchestration.
//!
//! # Algorithm
//!
//! 1. Validate the puzzle's crossing structure
//! 2. Copy the vocabulary into every variable's domain
//! 3. Enforce node consistency, then AC-3 over all arcs
//! 4. If a domain is empty, report the puzzle unsatisfiable
//! 5. Otherwise run backtracking search from an empty assignment

use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::Instant;

use log::debug;

use super::assignment::Assignment;
use super::config::SolverConfig;
use super::consistency::{enforce_node_consistency, propagate};
use super::domains::DomainStore;
use super::search::{Backtracker, Halt};
use crate::error::SolveError;
use crate::puzzle::Puzzle;

/// Outcome of a solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolverStatus {
    /// A complete, consistent assignment was found.
    Solved,
    /// Propagation emptied a domain before search started.
    Unsatisfiable,
    /// Search tried every candidate without completing an assignment.
    Exhausted,
    /// The node budget ran out.
    NodeLimit,
    /// The wall-clock budget ran out.
    Timeout,
    /// Cancelled externally.
    Cancelled,
}

impl SolverStatus {
    /// Whether the puzzle is proven to have no solution.
    pub fn is_unsolvable(&self) -> bool {
        matches!(self, SolverStatus::Unsatisfiable | SolverStatus::Exhausted)
    }
}

/// Work counters for one solve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolveStats {
    /// Arc revisions performed on crossing pairs.
    pub revisions: usize,
    /// Candidates removed by node and arc consistency.
    pub pruned: usize,
    /// Tentative assignments tried.
    pub nodes: usize,
    /// Tentative assignments undone.
    pub backtracks: usize,
}

/// Result of a [`SolverRunner`] run.
#[derive(Debug, Clone)]
pub struct SolveResult {
    /// How the solve ended.
    pub status: SolverStatus,
    /// The solution, present only when `status` is [`SolverStatus::Solved`].
    pub assignment: Option<Assignment>,
    /// Work counters.
    pub stats: SolveStats,
    /// Solve time in milliseconds.
    pub solve_time_ms: u64,
}

impl SolveResult {
    /// Whether a solution was found.
    pub fn is_solution_found(&self) -> bool {
        self.status == SolverStatus::Solved
    }
}

/// Runs node consistency, AC-3 and backtracking search on a puzzle.
pub struct SolverRunner;

impl SolverRunner {
    /// Solves `puzzle` using its own vocabulary.
    ///
    /// # Errors
    ///
    /// Returns a [`SolveError`] if the puzzle's constraints are malformed.
    /// An unsolvable puzzle is not an error; see [`SolveResult::status`].
    ///
    /// # Examples
    ///
    /// ```
    /// use u_crossword::csp::{SolverConfig, SolverRunner};
    /// use u_crossword::puzzle::Crossword;
    ///
    /// let crossword = Crossword::parse("___\n#_#\n#_#", "cat\ndog\nace").unwrap();
    /// let result = SolverRunner::run(&crossword, &SolverConfig::default()).unwrap();
    /// assert!(result.is_solution_found());
    /// ```
    pub fn run<P: Puzzle + ?Sized>(
        puzzle: &P,
        config: &SolverConfig,
    ) -> Result<SolveResult, SolveError> {
        Self::run_with_cancel(puzzle, config, None)
    }

    /// Solves `puzzle` with an optional cancellation flag.
    pub fn run_with_cancel<P: Puzzle + ?Sized>(
        puzzle: &P,
        config: &SolverConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<SolveResult, SolveError> {
        Self::execute(puzzle, puzzle.vocabulary(), config, cancel.as_deref())
    }

    /// Solves `puzzle` with an explicit vocabulary instead of its own.
    pub fn run_with_vocabulary<P, I, S>(
        puzzle: &P,
        vocabulary: I,
        config: &SolverConfig,
    ) -> Result<SolveResult, SolveError>
    where
        P: Puzzle + ?Sized,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::execute(puzzle, vocabulary, config, None)
    }

    fn execute<P, I, S>(
        puzzle: &P,
        vocabulary: I,
        config: &SolverConfig,
        cancel: Option<&AtomicBool>,
    ) -> Result<SolveResult, SolveError>
    where
        P: Puzzle + ?Sized,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let start = Instant::now();
        puzzle.validate()?;

        let mut domains = DomainStore::new(puzzle.variables(), vocabulary);
        let mut stats = SolveStats::default();

        stats.pruned += enforce_node_consistency(&mut domains);
        debug!(
            target: "solver",
            "node consistency: {} candidates over {} variables",
            domains.total_candidates(),
            domains.len()
        );

        if !propagate(puzzle, &mut domains, None, &mut stats)? {
            debug!(target: "solver", "arc consistency failed; puzzle is unsatisfiable");
            return Ok(finish(SolverStatus::Unsatisfiable, None, stats, start));
        }
        debug!(
            target: "solver",
            "arc consistency: {} candidates left after {} revisions",
            domains.total_candidates(),
            stats.revisions
        );

        let mut search = Backtracker::new(puzzle, config, cancel, stats).started_at(start);
        let mut assignment = Assignment::new();
        let outcome = search.backtrack(&domains, &mut assignment);
        let stats = search.stats;

        let result = match outcome {
            Ok(true) => finish(SolverStatus::Solved, Some(assignment), stats, start),
            Ok(false) => finish(SolverStatus::Exhausted, None, stats, start),
            Err(Halt::NodeLimit) => finish(SolverStatus::NodeLimit, None, stats, start),
            Err(Halt::Timeout) => finish(SolverStatus::Timeout, None, stats, start),
            Err(Halt::Cancelled) => finish(SolverStatus::Cancelled, None, stats, start),
            Err(Halt::Fault(e)) => return Err(e),
        };
        debug!(
            target: "solver",
            "search finished: {:?} after {} nodes, {} backtracks",
            result.status,
            result.stats.nodes,
            result.stats.backtracks
        );
        Ok(result)
    }
}

fn finish(
    status: SolverStatus,
    assignment: Option<Assignment>,
    stats: SolveStats,
    start: Instant,
) -> SolveResult {
    SolveResult {
        status,
        assignment,
        stats,
        solve_time_ms: start.elapsed().as_millis() as u64,
    }
}

/// Solves `puzzle` with the default configuration.
///
/// Returns `Ok(None)` when no complete, consistent assignment exists.
///
/// # Errors
///
/// Returns a [`SolveError`] if the puzzle's constraints are malformed.
pub fn solve<P: Puzzle + ?Sized>(puzzle: &P) -> Result<Option<Assignment>, SolveError> {
    SolverRunner::run(puzzle, &SolverConfig::default()).map(|result| result.assignment)
}
