//! Constraint satisfaction engine for filling crossword slots.
//!
//! Variables are grid slots, domains are candidate words, and the
//! constraints are unary (word length) and binary (crossing slots agree on
//! the shared letter). No word may fill two slots.
//!
//! # Key Components
//!
//! - **Domains**: [`DomainStore`], remaining candidates per slot
//! - **Consistency**: [`enforce_node_consistency`], [`revise`], [`ac3`]
//! - **Search**: [`select_unassigned_variable`] (MRV, then degree),
//!   [`order_domain_values`] (least constraining value), [`consistent`]
//! - **Runner**: [`SolverRunner`], propagation followed by backtracking
//!
//! The consistency and heuristic functions operate on an explicit
//! [`DomainStore`] so they can be exercised without running a full search.
//!
//! # References
//!
//! - Mackworth (1977), "Consistency in Networks of Relations"
//! - Russell & Norvig (2021), *Artificial Intelligence: A Modern Approach*, ch. 6

mod assignment;
mod config;
mod consistency;
mod domains;
mod runner;
mod search;

pub use assignment::Assignment;
pub use config::SolverConfig;
pub use consistency::{ac3, enforce_node_consistency, revise, CrossingArc};
pub use domains::DomainStore;
pub use runner::{solve, SolveResult, SolveStats, SolverRunner, SolverStatus};
pub use search::{
    assignment_complete, consistent, order_domain_values, select_unassigned_variable,
};
