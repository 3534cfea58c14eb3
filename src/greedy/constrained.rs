//! Greedy coloring around a fixed partial pre-assignment.

use super::runner::first_fit_pass;
use crate::coloring::{Color, Coloring};
use crate::error::{ColoringError, Result};
use crate::graph::{ColorableGraph, IndexedGraph};
use log::debug;
use std::collections::HashMap;

/// Colors fixed by the caller before the greedy pass runs.
pub type PreAssignment<V> = HashMap<V, Color>;

/// First-fit greedy coloring that keeps caller-supplied colors.
///
/// Pre-assigned vertices are never recolored. The remaining vertices are
/// visited in natural enumeration order and receive the smallest color not
/// held by any colored neighbor, pre-assigned or not.
///
/// [`color`](Self::color) rejects a pre-assignment that already puts the
/// same color on both ends of an edge. [`color_unchecked`](Self::color_unchecked)
/// trusts the input, in which case the result is only as valid as the
/// pre-assignment.
pub struct ConstrainedGreedyColorer;

impl ConstrainedGreedyColorer {
    /// Colors `graph`, keeping every color in `pre_assigned`.
    ///
    /// # Errors
    ///
    /// - [`ColoringError::UnknownVertex`] if a pre-assigned vertex is not in
    ///   the graph.
    /// - [`ColoringError::InvalidPreAssignment`] if two adjacent vertices
    ///   are pre-assigned the same color.
    pub fn color<G: ColorableGraph>(
        graph: &G,
        pre_assigned: &PreAssignment<G::Vertex>,
    ) -> Result<Coloring<G::Vertex>> {
        Self::run(graph, pre_assigned, true)
    }

    /// Like [`color`](Self::color) but never checks the pre-assignment for
    /// conflicts.
    pub fn color_unchecked<G: ColorableGraph>(
        graph: &G,
        pre_assigned: &PreAssignment<G::Vertex>,
    ) -> Result<Coloring<G::Vertex>> {
        Self::run(graph, pre_assigned, false)
    }

    fn run<G: ColorableGraph>(
        graph: &G,
        pre_assigned: &PreAssignment<G::Vertex>,
        validate: bool,
    ) -> Result<Coloring<G::Vertex>> {
        let indexed = IndexedGraph::build(graph)?;

        let mut colors = vec![None; indexed.order()];
        for (vertex, &color) in pre_assigned {
            colors[indexed.position(vertex)?] = Some(color);
        }

        if validate {
            check_pre_assignment(&indexed, &colors)?;
        }

        let order: Vec<usize> = (0..indexed.order()).collect();
        first_fit_pass(&indexed, &order, &mut colors)?;

        let coloring = indexed.to_coloring(&colors);
        debug!(
            "constrained greedy: {} pre-assigned of {} vertices, {} colors",
            pre_assigned.len(),
            indexed.order(),
            coloring.color_count()
        );
        Ok(coloring)
    }
}

fn check_pre_assignment<V: std::fmt::Debug>(
    graph: &IndexedGraph<V>,
    colors: &[Option<Color>],
) -> Result<()> {
    for (v, neighbors) in graph.adjacency.iter().enumerate() {
        let Some(color) = colors[v] else {
            continue;
        };
        for &n in neighbors {
            if n > v && colors[n] == Some(color) {
                return Err(ColoringError::InvalidPreAssignment {
                    first: format!("{:?}", graph.vertices[v]),
                    second: format!("{:?}", graph.vertices[n]),
                    color,
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::AdjacencyGraph;

    fn path() -> AdjacencyGraph<&'static str> {
        AdjacencyGraph::from_edges([("A", "B"), ("B", "C"), ("C", "D")]).unwrap()
    }

    #[test]
    fn test_pre_assigned_colors_kept() {
        let graph = path();
        let pre: PreAssignment<_> = [("B", 5), ("D", 0)].into_iter().collect();
        let coloring = ConstrainedGreedyColorer::color(&graph, &pre).unwrap();

        assert_eq!(coloring.get(&"B"), Some(5));
        assert_eq!(coloring.get(&"D"), Some(0));
        // A sees only B(5); C sees B(5) and D(0).
        assert_eq!(coloring.get(&"A"), Some(0));
        assert_eq!(coloring.get(&"C"), Some(1));
        assert!(coloring.is_valid(&graph).unwrap());
    }

    #[test]
    fn test_empty_pre_assignment_matches_greedy() {
        let graph = path();
        let pre = PreAssignment::new();
        let constrained = ConstrainedGreedyColorer::color(&graph, &pre).unwrap();
        let plain = crate::greedy::GreedyColorer::color(&graph, None).unwrap();
        assert_eq!(constrained, plain);
    }

    #[test]
    fn test_conflicting_pre_assignment_rejected() {
        let graph = path();
        let pre: PreAssignment<_> = [("A", 2), ("B", 2)].into_iter().collect();
        let err = ConstrainedGreedyColorer::color(&graph, &pre).unwrap_err();
        assert!(matches!(
            err,
            ColoringError::InvalidPreAssignment { color: 2, .. }
        ));
    }

    #[test]
    fn test_unchecked_keeps_conflict() {
        let graph = path();
        let pre: PreAssignment<_> = [("A", 2), ("B", 2)].into_iter().collect();
        let coloring = ConstrainedGreedyColorer::color_unchecked(&graph, &pre).unwrap();
        assert_eq!(coloring.get(&"A"), Some(2));
        assert_eq!(coloring.get(&"B"), Some(2));
        assert_eq!(coloring.conflicts(&graph).unwrap(), 1);
        assert!(coloring.is_total(&graph));
    }

    #[test]
    fn test_unknown_pre_assigned_vertex() {
        let graph = path();
        let pre: PreAssignment<_> = [("X", 0)].into_iter().collect();
        assert!(matches!(
            ConstrainedGreedyColorer::color(&graph, &pre),
            Err(ColoringError::UnknownVertex(_))
        ));
        assert!(matches!(
            ConstrainedGreedyColorer::color_unchecked(&graph, &pre),
            Err(ColoringError::UnknownVertex(_))
        ));
    }

    #[test]
    fn test_same_color_non_adjacent_allowed() {
        let graph = path();
        let pre: PreAssignment<_> = [("A", 1), ("C", 1)].into_iter().collect();
        let coloring = ConstrainedGreedyColorer::color(&graph, &pre).unwrap();
        assert_eq!(coloring.get(&"B"), Some(0));
        assert_eq!(coloring.get(&"D"), Some(0));
        assert!(coloring.is_valid(&graph).unwrap());
    }
}
