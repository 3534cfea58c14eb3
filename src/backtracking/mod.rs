//! Exact backtracking search.
//!
//! Decides whether a graph can be colored with a given number of colors
//! by depth-first search over partial assignments, pruning any branch that
//! places a color already held by a neighbor. Unlike the heuristics, a
//! negative answer is a proof of infeasibility at that budget.
//!
//! # References
//!
//! Golomb & Baumert (1965), "Backtrack Programming", *Journal of the ACM*
//! 12(4), 516-524.

mod runner;

pub use runner::{BacktrackingColorer, BacktrackingResult};
