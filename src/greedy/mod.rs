//! Greedy (first-fit) coloring.
//!
//! - [`GreedyColorer`]: one pass in a given vertex order.
//! - [`ConstrainedGreedyColorer`]: the same pass around vertices whose
//!   colors are fixed in advance.
//!
//! # References
//!
//! Welsh & Powell (1967), "An upper bound for the chromatic number of a
//! graph and its application to timetabling problems"

mod constrained;
mod runner;

pub use constrained::{ConstrainedGreedyColorer, PreAssignment};
pub use runner::GreedyColorer;
