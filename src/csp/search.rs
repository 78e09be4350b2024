//! Backtracking search and its heuristics.
//!
//! # Algorithm
//!
//! 1. If every variable is assigned, the assignment is a solution.
//! 2. Pick the unassigned variable with the fewest remaining candidates,
//!    preferring the one with the most neighbors on a tie.
//! 3. Try its candidates, least constraining first. Recurse on each one
//!    that keeps the assignment consistent; the first success wins.
//! 4. When every candidate fails, undo and report failure to the caller.
//!
//! # Reference
//!
//! Russell & Norvig (2021), *Artificial Intelligence: A Modern Approach*,
//! 4th ed., ch. 6.

use std::cmp::Reverse;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use log::trace;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::assignment::Assignment;
use super::config::SolverConfig;
use super::consistency::{letter_at, propagate, word_length};
use super::domains::DomainStore;
use super::runner::SolveStats;
use crate::error::SolveError;
use crate::puzzle::{Puzzle, Variable};

/// Whether every variable in `domains` has a word in `assignment`.
pub fn assignment_complete(domains: &DomainStore, assignment: &Assignment) -> bool {
    domains.variables().all(|v| assignment.is_assigned(v))
}

/// Whether a possibly partial assignment breaks no constraint.
///
/// Rejects a word used in two slots, a word of the wrong length, and two
/// assigned neighbors that disagree on their shared cell. Unassigned
/// neighbors impose nothing.
pub fn consistent<P: Puzzle + ?Sized>(puzzle: &P, assignment: &Assignment) -> bool {
    let mut seen = HashSet::with_capacity(assignment.len());
    for (variable, word) in assignment.iter() {
        if !seen.insert(word) {
            return false;
        }
        if word_length(word) != puzzle.length(variable) {
            return false;
        }
        for neighbor in puzzle.neighbors(variable) {
            let (Some(other), Some(overlap)) =
                (assignment.get(neighbor), puzzle.overlap(variable, neighbor))
            else {
                continue;
            };
            if letter_at(word, overlap.first) != letter_at(other, overlap.second) {
                return false;
            }
        }
    }
    true
}

/// Unassigned variables sharing the best (fewest candidates, most neighbors) rank.
fn tied_variables<P: Puzzle + ?Sized>(
    puzzle: &P,
    domains: &DomainStore,
    assignment: &Assignment,
) -> Vec<Variable> {
    let mut best = None;
    let mut tied = Vec::new();
    for variable in domains.variables().filter(|v| !assignment.is_assigned(v)) {
        let rank = (
            domains.remaining(variable),
            Reverse(puzzle.neighbors(variable).len()),
        );
        match best {
            Some(b) if rank > b => {}
            Some(b) if rank == b => tied.push(*variable),
            _ => {
                best = Some(rank);
                tied.clear();
                tied.push(*variable);
            }
        }
    }
    tied
}

/// Picks the next variable to assign.
///
/// Minimum remaining values first, then highest degree. Remaining ties go
/// to the smallest variable. Returns `None` when everything is assigned.
pub fn select_unassigned_variable<P: Puzzle + ?Sized>(
    puzzle: &P,
    domains: &DomainStore,
    assignment: &Assignment,
) -> Option<Variable> {
    tied_variables(puzzle, domains, assignment).into_iter().next()
}

/// Candidates of `variable` paired with how many neighbor candidates each
/// would rule out, in domain order. Words already placed elsewhere are skipped.
fn scored_values<P: Puzzle + ?Sized>(
    puzzle: &P,
    domains: &DomainStore,
    variable: &Variable,
    assignment: &Assignment,
) -> Vec<(String, usize)> {
    let Some(candidates) = domains.domain(variable) else {
        return Vec::new();
    };

    // Per neighbor: our offset, letter histogram at its offset, domain size.
    let profiles: Vec<(usize, HashMap<char, usize>, usize)> = puzzle
        .neighbors(variable)
        .iter()
        .filter_map(|neighbor| {
            let overlap = puzzle.overlap(variable, neighbor)?;
            let words = domains.domain(neighbor)?;
            let mut letters = HashMap::new();
            for word in words {
                if let Some(c) = letter_at(word, overlap.second) {
                    *letters.entry(c).or_insert(0) += 1;
                }
            }
            Some((overlap.first, letters, words.len()))
        })
        .collect();

    let used: HashSet<&str> = assignment
        .iter()
        .filter(|(v, _)| *v != variable)
        .map(|(_, w)| w)
        .collect();

    candidates
        .iter()
        .filter(|word| !used.contains(word.as_str()))
        .map(|word| {
            let ruled_out = profiles
                .iter()
                .map(|(offset, letters, total)| {
                    let agreeing = letter_at(word, *offset)
                        .and_then(|c| letters.get(&c))
                        .copied()
                        .unwrap_or(0);
                    total - agreeing
                })
                .sum::<usize>();
            (word.clone(), ruled_out)
        })
        .collect()
}

/// Orders the candidates of `variable`, least constraining first.
///
/// A candidate's cost is the number of words it would rule out across all
/// neighbor domains. Equal costs keep domain order. Words already placed
/// in another slot are not offered.
pub fn order_domain_values<P: Puzzle + ?Sized>(
    puzzle: &P,
    domains: &DomainStore,
    variable: &Variable,
    assignment: &Assignment,
) -> Vec<String> {
    let mut scored = scored_values(puzzle, domains, variable, assignment);
    scored.sort_by_key(|(_, ruled_out)| *ruled_out);
    scored.into_iter().map(|(word, _)| word).collect()
}

/// Why a search stopped before exhausting its tree.
#[derive(Debug)]
pub(crate) enum Halt {
    NodeLimit,
    Timeout,
    Cancelled,
    Fault(SolveError),
}

impl From<SolveError> for Halt {
    fn from(e: SolveError) -> Self {
        Halt::Fault(e)
    }
}

/// Depth-first search state for one solve.
pub(crate) struct Backtracker<'a, P: Puzzle + ?Sized> {
    puzzle: &'a P,
    config: &'a SolverConfig,
    rng: Option<StdRng>,
    cancel: Option<&'a AtomicBool>,
    deadline: Option<Instant>,
    pub(crate) stats: SolveStats,
}

impl<'a, P: Puzzle + ?Sized> Backtracker<'a, P> {
    pub(crate) fn new(
        puzzle: &'a P,
        config: &'a SolverConfig,
        cancel: Option<&'a AtomicBool>,
        stats: SolveStats,
    ) -> Self {
        Self {
            puzzle,
            config,
            rng: config.seed.map(StdRng::seed_from_u64),
            cancel,
            deadline: (config.time_limit_ms > 0)
                .then(|| Instant::now() + Duration::from_millis(config.time_limit_ms)),
            stats,
        }
    }

    /// Counts the time limit from `start` instead of from construction.
    pub(crate) fn started_at(mut self, start: Instant) -> Self {
        self.deadline = (self.config.time_limit_ms > 0)
            .then(|| start + Duration::from_millis(self.config.time_limit_ms));
        self
    }

    /// Extends `assignment` to a complete, consistent one.
    ///
    /// Returns `Ok(true)` with `assignment` complete, or `Ok(false)` with
    /// `assignment` exactly as it was passed in.
    pub(crate) fn backtrack(
        &mut self,
        domains: &DomainStore,
        assignment: &mut Assignment,
    ) -> Result<bool, Halt> {
        if assignment_complete(domains, assignment) {
            return Ok(true);
        }
        let Some(variable) = self.select(domains, assignment) else {
            return Ok(false);
        };

        for word in self.order(domains, &variable, assignment) {
            self.check_budget()?;
            self.stats.nodes += 1;

            assignment.assign(variable, word.as_str());
            trace!(target: "solver", "depth {}: try {} = {}", assignment.len(), variable, word);

            let outcome = self.extend(domains, &variable, &word, assignment);
            if !matches!(outcome, Ok(true)) {
                assignment.unassign(&variable);
            }
            if outcome? {
                return Ok(true);
            }
            self.stats.backtracks += 1;
        }

        trace!(target: "solver", "no candidate fits {}", variable);
        Ok(false)
    }

    fn extend(
        &mut self,
        domains: &DomainStore,
        variable: &Variable,
        word: &str,
        assignment: &mut Assignment,
    ) -> Result<bool, Halt> {
        if !consistent(self.puzzle, assignment) {
            return Ok(false);
        }
        if !self.config.maintain_arc_consistency {
            return self.backtrack(domains, assignment);
        }

        let mut narrowed = domains.clone();
        self.stats.pruned += narrowed.restrict(variable, word);
        let arcs = self
            .puzzle
            .neighbors(variable)
            .iter()
            .filter(|n| !assignment.is_assigned(n))
            .map(|n| (*n, *variable))
            .collect();
        if !propagate(self.puzzle, &mut narrowed, Some(arcs), &mut self.stats)? {
            return Ok(false);
        }
        self.backtrack(&narrowed, assignment)
    }

    fn select(&mut self, domains: &DomainStore, assignment: &Assignment) -> Option<Variable> {
        let tied = tied_variables(self.puzzle, domains, assignment);
        match self.rng.as_mut() {
            Some(rng) if tied.len() > 1 => Some(tied[rng.random_range(0..tied.len())]),
            _ => tied.first().copied(),
        }
    }

    fn order(
        &mut self,
        domains: &DomainStore,
        variable: &Variable,
        assignment: &Assignment,
    ) -> Vec<String> {
        let mut scored = scored_values(self.puzzle, domains, variable, assignment);
        if let Some(rng) = self.rng.as_mut() {
            scored.shuffle(rng);
        }
        scored.sort_by_key(|(_, ruled_out)| *ruled_out);
        scored.into_iter().map(|(word, _)| word).collect()
    }

    fn check_budget(&self) -> Result<(), Halt> {
        if self.config.max_nodes > 0 && self.stats.nodes >= self.config.max_nodes {
            return Err(Halt::NodeLimit);
        }
        if self.deadline.is_some_and(|deadline| Instant::now() >= deadline) {
            return Err(Halt::Timeout);
        }
        if self.cancel.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
            return Err(Halt::Cancelled);
        }
        Ok(())
    }
}
