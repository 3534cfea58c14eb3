//! Adjacency-list graph.

use super::types::ColorableGraph;
use crate::error::{ColoringError, Result};
use rand::Rng;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// An undirected simple graph stored as adjacency lists.
///
/// Vertices keep their first insertion order, which is the graph's natural
/// enumeration order. Self-loops are rejected and duplicate edges ignored,
/// so every graph built through this API satisfies the simple-graph
/// invariants the colorers rely on.
///
/// # Examples
///
/// ```
/// use u_coloring::graph::{AdjacencyGraph, ColorableGraph};
///
/// let graph = AdjacencyGraph::from_edges([("A", "B"), ("B", "C"), ("C", "A")]).unwrap();
/// assert_eq!(graph.order(), 3);
/// assert_eq!(graph.edge_count(), 3);
/// assert!(graph.has_edge(&"A", &"C"));
/// ```
#[derive(Debug, Clone)]
pub struct AdjacencyGraph<V> {
    vertices: Vec<V>,
    index: HashMap<V, usize>,
    adjacency: Vec<Vec<usize>>,
    edge_count: usize,
}

impl<V: Clone + Eq + Hash + Debug> AdjacencyGraph<V> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty graph with room for `vertices` vertices.
    pub fn with_capacity(vertices: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertices),
            index: HashMap::with_capacity(vertices),
            adjacency: Vec::with_capacity(vertices),
            edge_count: 0,
        }
    }

    /// Builds a graph from an edge list. Endpoints are added as vertices
    /// in order of first appearance.
    ///
    /// # Errors
    ///
    /// [`ColoringError::SelfLoop`] if any edge joins a vertex to itself.
    pub fn from_edges<I>(edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (V, V)>,
    {
        let mut graph = Self::new();
        for (u, v) in edges {
            graph.add_edge(u, v)?;
        }
        Ok(graph)
    }

    /// Adds a vertex if absent. Returns its position in enumeration order.
    pub fn add_vertex(&mut self, vertex: V) -> usize {
        if let Some(&idx) = self.index.get(&vertex) {
            return idx;
        }
        let idx = self.vertices.len();
        self.index.insert(vertex.clone(), idx);
        self.vertices.push(vertex);
        self.adjacency.push(Vec::new());
        idx
    }

    /// Adds the undirected edge `{u, v}`, inserting missing endpoints.
    ///
    /// Returns `false` if the edge was already present.
    ///
    /// # Errors
    ///
    /// [`ColoringError::SelfLoop`] if `u == v`.
    pub fn add_edge(&mut self, u: V, v: V) -> Result<bool> {
        if u == v {
            return Err(ColoringError::SelfLoop(format!("{u:?}")));
        }
        let a = self.add_vertex(u);
        let b = self.add_vertex(v);
        if self.adjacency[a].contains(&b) {
            return Ok(false);
        }
        self.link(a, b);
        Ok(true)
    }

    fn link(&mut self, a: usize, b: usize) {
        self.adjacency[a].push(b);
        self.adjacency[b].push(a);
        self.edge_count += 1;
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Number of neighbors of `vertex`.
    pub fn degree(&self, vertex: &V) -> Result<usize> {
        let idx = self.position(vertex)?;
        Ok(self.adjacency[idx].len())
    }

    /// Whether `u` and `v` are adjacent. Unknown vertices are never adjacent.
    pub fn has_edge(&self, u: &V, v: &V) -> bool {
        match (self.index.get(u), self.index.get(v)) {
            (Some(&a), Some(&b)) => self.adjacency[a].contains(&b),
            _ => false,
        }
    }

    /// All edges, each reported once with endpoints in enumeration order.
    pub fn edges(&self) -> Vec<(V, V)> {
        let mut edges = Vec::with_capacity(self.edge_count);
        for (a, neighbors) in self.adjacency.iter().enumerate() {
            for &b in neighbors {
                if a < b {
                    edges.push((self.vertices[a].clone(), self.vertices[b].clone()));
                }
            }
        }
        edges
    }

    fn position(&self, vertex: &V) -> Result<usize> {
        self.index
            .get(vertex)
            .copied()
            .ok_or_else(|| ColoringError::unknown_vertex(vertex))
    }
}

impl AdjacencyGraph<usize> {
    /// Generates an Erdős–Rényi `G(n, p)` graph on vertices `0..n`.
    ///
    /// Every pair `i < j` is joined independently with probability
    /// `edge_probability`.
    ///
    /// # Errors
    ///
    /// [`ColoringError::InvalidParameter`] if `edge_probability` is not in
    /// `[0, 1]`.
    pub fn random_graph<R: Rng>(n: usize, edge_probability: f64, rng: &mut R) -> Result<Self> {
        if !(0.0..=1.0).contains(&edge_probability) {
            return Err(ColoringError::invalid_parameter(format!(
                "edge probability must be in [0, 1], got {edge_probability}"
            )));
        }
        let mut graph = Self::with_capacity(n);
        for v in 0..n {
            graph.add_vertex(v);
        }
        for i in 0..n {
            for j in (i + 1)..n {
                if rng.random_bool(edge_probability) {
                    graph.link(i, j);
                }
            }
        }
        Ok(graph)
    }
}

impl<V: Clone + Eq + Hash + Debug> Default for AdjacencyGraph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone + Eq + Hash + Debug> ColorableGraph for AdjacencyGraph<V> {
    type Vertex = V;

    fn vertices(&self) -> Vec<V> {
        self.vertices.clone()
    }

    fn neighbors(&self, vertex: &V) -> Result<Vec<V>> {
        let idx = self.position(vertex)?;
        Ok(self.adjacency[idx]
            .iter()
            .map(|&n| self.vertices[n].clone())
            .collect())
    }

    fn contains(&self, vertex: &V) -> bool {
        self.index.contains_key(vertex)
    }

    fn order(&self) -> usize {
        self.vertices.len()
    }
}
