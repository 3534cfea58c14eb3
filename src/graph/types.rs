//! Core trait for colorable graphs.

use crate::error::Result;
use std::fmt::Debug;
use std::hash::Hash;

/// A read-only undirected simple graph that the colorers can consume.
///
/// Implementors expose their vertices in a *natural enumeration order*;
/// colorers that need a default visitation order or a deterministic
/// tie-breaker use it. Edges are implied by [`neighbors`](Self::neighbors)
/// and must be symmetric, without self-loops or duplicates.
///
/// No colorer mutates the graph, so a `Sync` implementor may be colored
/// from several threads at once.
///
/// # Examples
///
/// ```ignore
/// struct Ring { n: usize }
///
/// impl ColorableGraph for Ring {
///     type Vertex = usize;
///
///     fn vertices(&self) -> Vec<usize> {
///         (0..self.n).collect()
///     }
///
///     fn neighbors(&self, v: &usize) -> Result<Vec<usize>> {
///         if *v >= self.n {
///             return Err(ColoringError::unknown_vertex(v));
///         }
///         Ok(vec![(v + self.n - 1) % self.n, (v + 1) % self.n])
///     }
///
///     fn contains(&self, v: &usize) -> bool {
///         *v < self.n
///     }
/// }
/// ```
pub trait ColorableGraph {
    /// Vertex identifier type.
    type Vertex: Clone + Eq + Hash + Debug;

    /// All vertices, in natural enumeration order.
    fn vertices(&self) -> Vec<Self::Vertex>;

    /// Neighbors of `vertex`.
    ///
    /// # Errors
    ///
    /// [`ColoringError::UnknownVertex`](crate::ColoringError::UnknownVertex)
    /// if `vertex` is not in the graph.
    fn neighbors(&self, vertex: &Self::Vertex) -> Result<Vec<Self::Vertex>>;

    /// Whether `vertex` belongs to the graph.
    fn contains(&self, vertex: &Self::Vertex) -> bool;

    /// Number of vertices.
    fn order(&self) -> usize {
        self.vertices().len()
    }
}
