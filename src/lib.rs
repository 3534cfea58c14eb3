//! Graph vertex coloring engine.
//!
//! Provides a small family of coloring algorithms over any graph that
//! implements [`ColorableGraph`]:
//!
//! - **Greedy**: single-pass first-fit coloring in a given vertex order.
//! - **DSATUR**: greedy coloring ordered by saturation degree, deferring
//!   low-constraint vertices.
//! - **Backtracking**: exhaustive depth-first search deciding whether a
//!   coloring exists within a color budget.
//! - **Constrained Greedy**: first-fit coloring around vertices whose colors
//!   are fixed by the caller.
//! - **Simulated Annealing**: stochastic local search over total
//!   assignments with an explicit, seedable random source.
//! - **Analysis**: color usage distribution of a finished coloring.
//!
//! # Architecture
//!
//! The engine does no I/O and knows nothing about where a graph comes from.
//! Loaders build a graph, any colorer turns it into an owned [`Coloring`],
//! and reporting consumes the coloring. Colorers are independent of each
//! other, never mutate the graph, and share no state across calls.
//!
//! # Examples
//!
//! ```
//! use u_coloring::prelude::*;
//!
//! let graph = AdjacencyGraph::from_edges([(1, 2), (2, 3), (3, 1), (3, 4)]).unwrap();
//!
//! let greedy = GreedyColorer::color(&graph, None).unwrap();
//! let dsatur = DsaturColorer::color(&graph).unwrap();
//! assert!(greedy.is_valid(&graph).unwrap());
//! assert!(dsatur.is_valid(&graph).unwrap());
//!
//! // The triangle 1-2-3 needs three colors.
//! assert!(BacktrackingColorer::color(&graph, 2, None).unwrap().is_none());
//! assert!(BacktrackingColorer::color(&graph, 3, None).unwrap().is_some());
//!
//! let distribution = analyze(&dsatur);
//! assert_eq!(distribution.total(), 4);
//! ```

pub mod analysis;
pub mod annealing;
pub mod backtracking;
pub mod coloring;
pub mod dsatur;
mod error;
pub mod graph;
pub mod greedy;

pub use coloring::{Color, Coloring};
pub use error::{ColoringError, Result};
pub use graph::ColorableGraph;

/// Commonly used types.
pub mod prelude {
    pub use crate::analysis::{analyze, ColorDistribution};
    pub use crate::annealing::{AnnealingColorer, AnnealingConfig, AnnealingObjective};
    pub use crate::backtracking::BacktrackingColorer;
    pub use crate::dsatur::DsaturColorer;
    pub use crate::graph::{AdjacencyGraph, ColorableGraph};
    pub use crate::greedy::{ConstrainedGreedyColorer, GreedyColorer, PreAssignment};
    pub use crate::{Color, Coloring, ColoringError};
}
