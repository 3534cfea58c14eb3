//! First-fit greedy coloring.

use crate::coloring::{Color, ColorMarks, Coloring};
use crate::error::{ColoringError, Result};
use crate::graph::{ColorableGraph, IndexedGraph};
use log::debug;

/// Single-pass first-fit coloring.
///
/// Visits vertices in order and gives each the smallest color not held by
/// an already-colored neighbor. The result is always valid and uses at most
/// `1 + max degree` colors, but the count depends on the order and is not
/// minimized.
///
/// # Examples
///
/// ```
/// use u_coloring::graph::AdjacencyGraph;
/// use u_coloring::greedy::GreedyColorer;
///
/// let graph = AdjacencyGraph::from_edges([("A", "B"), ("B", "C"), ("C", "D")]).unwrap();
/// let coloring = GreedyColorer::color(&graph, None).unwrap();
/// assert_eq!(coloring.get(&"A"), Some(0));
/// assert_eq!(coloring.get(&"B"), Some(1));
/// assert_eq!(coloring.get(&"C"), Some(0));
/// assert_eq!(coloring.get(&"D"), Some(1));
/// ```
pub struct GreedyColorer;

impl GreedyColorer {
    /// Colors `graph`, visiting vertices in `order`.
    ///
    /// `None` visits in the graph's natural enumeration order. Vertices
    /// left out of an explicit order are visited after it, in natural
    /// order.
    ///
    /// # Errors
    ///
    /// - [`ColoringError::UnknownVertex`] if `order` names a vertex not in
    ///   the graph.
    /// - [`ColoringError::InvalidParameter`] if `order` repeats a vertex.
    pub fn color<G: ColorableGraph>(
        graph: &G,
        order: Option<&[G::Vertex]>,
    ) -> Result<Coloring<G::Vertex>> {
        let indexed = IndexedGraph::build(graph)?;
        let order = indexed.resolve_order(order)?;

        let mut colors = vec![None; indexed.order()];
        first_fit_pass(&indexed, &order, &mut colors)?;

        let coloring = indexed.to_coloring(&colors);
        debug!(
            "greedy: {} vertices, max degree {}, {} colors",
            indexed.order(),
            indexed.max_degree(),
            coloring.color_count()
        );
        Ok(coloring)
    }
}

/// Assigns first-fit colors to every still-uncolored vertex of `order`.
///
/// The color domain is `[0, n)`: a vertex has at most `n - 1` neighbors,
/// so some color in the domain is always free.
pub(crate) fn first_fit_pass<V>(
    graph: &IndexedGraph<V>,
    order: &[usize],
    colors: &mut [Option<Color>],
) -> Result<()> {
    let mut marks = ColorMarks::new(graph.vertices.len());
    for &v in order {
        if colors[v].is_some() {
            continue;
        }
        marks.clear();
        for &n in &graph.adjacency[v] {
            if let Some(c) = colors[n] {
                marks.mark(c);
            }
        }
        let color = marks
            .first_free()
            .ok_or_else(|| ColoringError::invalid_parameter("color domain exhausted"))?;
        colors[v] = Some(color);
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
    fn test_greedy_path_alternates() {
        let graph = path();
        let coloring = GreedyColorer::color(&graph, Some(&["A", "B", "C", "D"][..])).unwrap();
        assert_eq!(coloring.get(&"A"), Some(0));
        assert_eq!(coloring.get(&"B"), Some(1));
        assert_eq!(coloring.get(&"C"), Some(0));
        assert_eq!(coloring.get(&"D"), Some(1));
    }

    #[test]
    fn test_greedy_order_changes_result() {
        // Visiting both ends first forces a third color onto the middle pair.
        let graph = path();
        let coloring = GreedyColorer::color(&graph, Some(&["A", "D", "B", "C"][..])).unwrap();
        assert!(coloring.is_valid(&graph).unwrap());
        assert_eq!(coloring.get(&"A"), Some(0));
        assert_eq!(coloring.get(&"D"), Some(0));
        assert_eq!(coloring.get(&"B"), Some(1));
        assert_eq!(coloring.get(&"C"), Some(2));
    }

    #[test]
    fn test_greedy_complete_graph_uses_n_colors() {
        let mut graph = AdjacencyGraph::new();
        for i in 0..6 {
            for j in (i + 1)..6 {
                graph.add_edge(i, j).unwrap();
            }
        }
        let coloring = GreedyColorer::color(&graph, None).unwrap();
        assert!(coloring.is_valid(&graph).unwrap());
        assert_eq!(coloring.color_count(), 6);
    }

    #[test]
    fn test_greedy_empty_graph() {
        let graph: AdjacencyGraph<u32> = AdjacencyGraph::new();
        let coloring = GreedyColorer::color(&graph, None).unwrap();
        assert!(coloring.is_empty());
    }

    #[test]
    fn test_greedy_isolated_vertices_share_color() {
        let mut graph = AdjacencyGraph::new();
        graph.add_vertex(1);
        graph.add_vertex(2);
        let coloring = GreedyColorer::color(&graph, None).unwrap();
        assert_eq!(coloring.get(&1), Some(0));
        assert_eq!(coloring.get(&2), Some(0));
    }

    #[test]
    fn test_greedy_unknown_vertex_in_order() {
        let graph = path();
        let err = GreedyColorer::color(&graph, Some(&["A", "Z"][..])).unwrap_err();
        assert!(matches!(err, ColoringError::UnknownVertex(_)));
    }

    #[test]
    fn test_greedy_deterministic() {
        let graph = path();
        let a = GreedyColorer::color(&graph, None).unwrap();
        let b = GreedyColorer::color(&graph, None).unwrap();
        assert_eq!(a, b);
    }
}
