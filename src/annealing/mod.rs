//! Simulated annealing coloring.
//!
//! A single-solution local search over total color assignments. Worsening
//! moves are accepted with a probability that shrinks as the temperature
//! cools geometrically, which lets the search escape local optima early
//! and settle late.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Johnson, Aragon, McGeoch & Schevon (1991), "Optimization by Simulated
//!   Annealing: An Experimental Evaluation; Part II, Graph Coloring and
//!   Number Partitioning"

mod config;
mod runner;

pub use config::{AnnealingConfig, AnnealingObjective};
pub use runner::{AnnealingColorer, AnnealingResult};
