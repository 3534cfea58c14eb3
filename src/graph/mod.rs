//! Graph model.
//!
//! Colorers are generic over [`ColorableGraph`], so any graph
//! representation can be colored by implementing three queries: the vertex
//! enumeration, the neighbor set of a vertex, and membership.
//! [`AdjacencyGraph`] is the bundled implementation.

mod adjacency;
mod indexed;
mod types;

pub use adjacency::AdjacencyGraph;
pub(crate) use indexed::IndexedGraph;
pub use types::ColorableGraph;
