//! Node and arc consistency.
//!
//! # Algorithm (AC-3)
//!
//! 1. Seed a worklist with directed arcs `(x, y)`: the supplied ones, or
//!    every ordered pair of distinct variables.
//! 2. Pop an arc and revise `x` against `y`: drop each word of `x` whose
//!    letter at the crossing matches no word of `y`.
//! 3. If `x` lost candidates, fail on an empty domain; otherwise queue
//!    `(z, x)` for every other neighbor `z` of `x`.
//! 4. Succeed when the worklist drains.
//!
//! The fixed point does not depend on worklist order.
//!
//! # Reference
//!
//! Mackworth, A. K. (1977). "Consistency in Networks of Relations",
//! *Artificial Intelligence* 8(1), 99-118.

use std::collections::{BTreeSet, HashSet, VecDeque};

use log::trace;

use super::domains::DomainStore;
use super::runner::SolveStats;
use crate::error::SolveError;
use crate::puzzle::{Puzzle, Variable};

/// A directed constraint `(x, y)`: make `x` consistent with `y`.
pub type CrossingArc = (Variable, Variable);

/// Letter of `word` at character offset `index`.
pub(crate) fn letter_at(word: &str, index: usize) -> Option<char> {
    word.chars().nth(index)
}

/// Word length in characters.
pub(crate) fn word_length(word: &str) -> usize {
    word.chars().count()
}

/// Removes every candidate whose length differs from its slot's length.
///
/// Returns the number of candidates removed. Applying it twice changes
/// nothing the second time.
pub fn enforce_node_consistency(domains: &mut DomainStore) -> usize {
    let doomed: Vec<(Variable, String)> = domains
        .iter()
        .flat_map(|(variable, words)| {
            words
                .iter()
                .filter(move |w| word_length(w) != variable.length)
                .map(move |w| (*variable, w.clone()))
        })
        .collect();

    for (variable, word) in &doomed {
        domains.prune(variable, word);
    }
    doomed.len()
}

/// Makes `x` arc consistent with `y`.
///
/// Removes every word of `x` that has no word in `y` agreeing on the
/// shared cell. A pair without an overlap is left alone.
///
/// Returns whether anything was removed.
///
/// # Errors
///
/// [`SolveError::UnknownVariable`] if `x` or `y` is missing from `domains`.
pub fn revise<P: Puzzle + ?Sized>(
    puzzle: &P,
    domains: &mut DomainStore,
    x: &Variable,
    y: &Variable,
) -> Result<bool, SolveError> {
    revise_counted(puzzle, domains, x, y, &mut SolveStats::default())
}

fn revise_counted<P: Puzzle + ?Sized>(
    puzzle: &P,
    domains: &mut DomainStore,
    x: &Variable,
    y: &Variable,
    stats: &mut SolveStats,
) -> Result<bool, SolveError> {
    let x_words = domains.domain(x).ok_or(SolveError::UnknownVariable(*x))?;
    let y_words = domains.domain(y).ok_or(SolveError::UnknownVariable(*y))?;

    let Some(overlap) = puzzle.overlap(x, y) else {
        return Ok(false);
    };
    stats.revisions += 1;

    let supported: HashSet<char> = y_words
        .iter()
        .filter_map(|w| letter_at(w, overlap.second))
        .collect();

    let doomed: Vec<String> = x_words
        .iter()
        .filter(|w| letter_at(w, overlap.first).is_none_or(|c| !supported.contains(&c)))
        .cloned()
        .collect();

    for word in &doomed {
        domains.prune(x, word);
    }
    stats.pruned += doomed.len();

    if !doomed.is_empty() {
        trace!(
            target: "solver",
            "revise {} against {}: removed {}, {} left",
            x,
            y,
            doomed.len(),
            domains.remaining(x)
        );
    }
    Ok(!doomed.is_empty())
}

/// Enforces arc consistency with AC-3.
///
/// `arcs` seeds the worklist; `None` means every ordered pair of distinct
/// variables in `domains`.
///
/// Returns `Ok(true)` when every domain is non-empty at the fixed point,
/// `Ok(false)` as soon as some domain is empty.
///
/// # Errors
///
/// [`SolveError::UnknownVariable`] if an arc or a neighbor refers to a
/// variable missing from `domains`.
pub fn ac3<P: Puzzle + ?Sized>(
    puzzle: &P,
    domains: &mut DomainStore,
    arcs: Option<Vec<CrossingArc>>,
) -> Result<bool, SolveError> {
    propagate(puzzle, domains, arcs, &mut SolveStats::default())
}

pub(crate) fn propagate<P: Puzzle + ?Sized>(
    puzzle: &P,
    domains: &mut DomainStore,
    arcs: Option<Vec<CrossingArc>>,
    stats: &mut SolveStats,
) -> Result<bool, SolveError> {
    if let Some(empty) = domains.first_empty() {
        trace!(target: "solver", "{} has an empty domain before propagation", empty);
        return Ok(false);
    }

    let initial = match arcs {
        Some(arcs) => arcs,
        None => {
            let variables: Vec<Variable> = domains.variables().copied().collect();
            variables
                .iter()
                .flat_map(|x| {
                    variables
                        .iter()
                        .filter(move |y| *y != x)
                        .map(move |y| (*x, *y))
                })
                .collect()
        }
    };

    // An arc already waiting in the queue need not be queued twice.
    let mut queued: BTreeSet<CrossingArc> = BTreeSet::new();
    let mut queue: VecDeque<CrossingArc> = VecDeque::with_capacity(initial.len());
    for arc in initial {
        if queued.insert(arc) {
            queue.push_back(arc);
        }
    }

    while let Some(arc) = queue.pop_front() {
        queued.remove(&arc);
        let (x, y) = arc;

        if !revise_counted(puzzle, domains, &x, &y, stats)? {
            continue;
        }
        if domains.remaining(&x) == 0 {
            trace!(target: "solver", "domain of {} wiped out by {}", x, y);
            return Ok(false);
        }
        for z in puzzle.neighbors(&x) {
            if *z == y {
                continue;
            }
            let next = (*z, x);
            if queued.insert(next) {
                queue.push_back(next);
            }
        }
    }

    Ok(domains.first_empty().is_none())
}
