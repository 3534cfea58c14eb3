//! Dense integer view of a [`ColorableGraph`].

use super::types::ColorableGraph;
use crate::coloring::{Color, Coloring};
use crate::error::{ColoringError, Result};
use std::collections::HashMap;
use std::hash::Hash;

/// Vertices mapped to `0..n` in natural enumeration order, with adjacency
/// lists over those indices. Every colorer builds one of these once per run
/// so the inner loops never hash vertex identifiers.
#[derive(Debug, Clone)]
pub(crate) struct IndexedGraph<V> {
    pub vertices: Vec<V>,
    pub index: HashMap<V, usize>,
    pub adjacency: Vec<Vec<usize>>,
}

impl<V: Clone + Eq + Hash + std::fmt::Debug> IndexedGraph<V> {
    /// Snapshots `graph`. Self-references and repeated neighbors reported
    /// by a loose implementor are dropped.
    pub fn build<G: ColorableGraph<Vertex = V>>(graph: &G) -> Result<Self> {
        let vertices = graph.vertices();
        let index: HashMap<V, usize> = vertices
            .iter()
            .enumerate()
            .map(|(i, v)| (v.clone(), i))
            .collect();

        let mut adjacency = Vec::with_capacity(vertices.len());
        for (i, v) in vertices.iter().enumerate() {
            let mut row = Vec::new();
            for n in graph.neighbors(v)? {
                let j = *index
                    .get(&n)
                    .ok_or_else(|| ColoringError::unknown_vertex(&n))?;
                if j != i {
                    row.push(j);
                }
            }
            row.sort_unstable();
            row.dedup();
            adjacency.push(row);
        }

        Ok(Self {
            vertices,
            index,
            adjacency,
        })
    }

    pub fn order(&self) -> usize {
        self.vertices.len()
    }

    pub fn position(&self, vertex: &V) -> Result<usize> {
        self.index
            .get(vertex)
            .copied()
            .ok_or_else(|| ColoringError::unknown_vertex(vertex))
    }

    /// Resolves a caller-supplied visitation order into indices.
    ///
    /// Listed vertices come first; any vertex the caller left out follows
    /// in natural enumeration order. `None` yields the natural order.
    pub fn resolve_order(&self, order: Option<&[V]>) -> Result<Vec<usize>> {
        let Some(order) = order else {
            return Ok((0..self.order()).collect());
        };

        let mut seen = vec![false; self.order()];
        let mut resolved = Vec::with_capacity(self.order());
        for v in order {
            let idx = self.position(v)?;
            if seen[idx] {
                return Err(ColoringError::invalid_parameter(format!(
                    "vertex {v:?} appears more than once in the order"
                )));
            }
            seen[idx] = true;
            resolved.push(idx);
        }
        resolved.extend((0..self.order()).filter(|&i| !seen[i]));
        Ok(resolved)
    }

    /// Converts per-index colors into a [`Coloring`], skipping unassigned
    /// slots.
    pub fn to_coloring(&self, colors: &[Option<Color>]) -> Coloring<V> {
        colors
            .iter()
            .enumerate()
            .filter_map(|(i, c)| c.map(|c| (self.vertices[i].clone(), c)))
            .collect()
    }

    pub fn max_degree(&self) -> usize {
        self.adjacency.iter().map(Vec::len).max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::AdjacencyGraph;

    fn path() -> IndexedGraph<&'static str> {
        let graph = AdjacencyGraph::from_edges([("A", "B"), ("B", "C"), ("C", "D")]).unwrap();
        IndexedGraph::build(&graph).unwrap()
    }

    #[test]
    fn test_build_indices() {
        let g = path();
        assert_eq!(g.order(), 4);
        assert_eq!(g.adjacency[1], vec![0, 2]);
        assert_eq!(g.max_degree(), 2);
    }

    #[test]
    fn test_resolve_order_appends_missing() {
        let g = path();
        let order = g.resolve_order(Some(&["D", "B"][..])).unwrap();
        assert_eq!(order, vec![3, 1, 0, 2]);
    }

    #[test]
    fn test_resolve_order_rejects_duplicates() {
        let g = path();
        let err = g.resolve_order(Some(&["A", "A"][..])).unwrap_err();
        assert!(matches!(err, ColoringError::InvalidParameter(_)));
    }

    #[test]
    fn test_resolve_order_rejects_unknown() {
        let g = path();
        let err = g.resolve_order(Some(&["Q"][..])).unwrap_err();
        assert!(matches!(err, ColoringError::UnknownVertex(_)));
    }
}
