//! Explicit-stack depth-first search.

use crate::coloring::{Color, Coloring};
use crate::error::{ColoringError, Result};
use crate::graph::{ColorableGraph, IndexedGraph};
use log::{debug, trace};

/// Outcome of a backtracking search.
#[derive(Debug, Clone)]
pub struct BacktrackingResult<V> {
    /// The first total valid coloring found, or `None` if none exists
    /// within the color budget.
    pub coloring: Option<Coloring<V>>,

    /// Color budget the search ran with.
    pub max_colors: usize,

    /// Number of successful color placements, including ones later undone.
    pub assignments: usize,

    /// Number of times the search retreated to an earlier vertex.
    pub backtracks: usize,
}

impl<V> BacktrackingResult<V> {
    /// Whether a coloring was found.
    pub fn is_feasible(&self) -> bool {
        self.coloring.is_some()
    }
}

/// One level of the search: the vertex at `position` in the visitation
/// order and the next color to try for it.
#[derive(Debug, Clone, Copy)]
struct Frame {
    position: usize,
    next_color: Color,
}

/// Exhaustive search for a valid coloring within a color budget.
///
/// Vertices are assigned in a fixed order; each tries colors
/// `0..max_colors` in increasing order, skipping any color held by an
/// already-colored neighbor. A vertex with no remaining color sends the
/// search back to the previous vertex. Frames live on an explicit stack,
/// so graph size never grows the call stack.
///
/// `Ok(None)` proves that no coloring with colors in `[0, max_colors)`
/// exists. To find a minimal coloring, call repeatedly with decreasing
/// budgets.
///
/// # Examples
///
/// ```
/// use u_coloring::backtracking::BacktrackingColorer;
/// use u_coloring::graph::AdjacencyGraph;
///
/// let triangle = AdjacencyGraph::from_edges([("A", "B"), ("B", "C"), ("C", "A")]).unwrap();
/// assert!(BacktrackingColorer::color(&triangle, 2, None).unwrap().is_none());
///
/// let coloring = BacktrackingColorer::color(&triangle, 3, None).unwrap().unwrap();
/// assert!(coloring.is_valid(&triangle).unwrap());
/// ```
pub struct BacktrackingColorer;

impl BacktrackingColorer {
    /// Searches for a coloring of `graph` using colors in `[0, max_colors)`.
    ///
    /// `order` fixes the visitation order; see
    /// [`GreedyColorer::color`](crate::greedy::GreedyColorer::color) for how
    /// partial orders are completed.
    ///
    /// # Errors
    ///
    /// - [`ColoringError::InvalidParameter`] if `max_colors` is zero or
    ///   `order` repeats a vertex.
    /// - [`ColoringError::UnknownVertex`] if `order` names a vertex not in
    ///   the graph.
    pub fn color<G: ColorableGraph>(
        graph: &G,
        max_colors: usize,
        order: Option<&[G::Vertex]>,
    ) -> Result<Option<Coloring<G::Vertex>>> {
        Ok(Self::search(graph, max_colors, order)?.coloring)
    }

    /// Same as [`color`](Self::color), also reporting search statistics.
    pub fn search<G: ColorableGraph>(
        graph: &G,
        max_colors: usize,
        order: Option<&[G::Vertex]>,
    ) -> Result<BacktrackingResult<G::Vertex>> {
        if max_colors == 0 {
            return Err(ColoringError::invalid_parameter(
                "max_colors must be positive",
            ));
        }

        let indexed = IndexedGraph::build(graph)?;
        let order = indexed.resolve_order(order)?;

        let mut colors: Vec<Option<Color>> = vec![None; indexed.order()];
        let mut assignments = 0usize;
        let mut backtracks = 0usize;
        let mut found = order.is_empty();

        let mut stack: Vec<Frame> = Vec::with_capacity(order.len());
        if !found {
            stack.push(Frame {
                position: 0,
                next_color: 0,
            });
        }

        while let Some(frame) = stack.last_mut() {
            let v = order[frame.position];
            // Undo whatever this frame placed before trying the next color.
            colors[v] = None;

            let candidate = (frame.next_color..max_colors).find(|&c| {
                indexed.adjacency[v]
                    .iter()
                    .all(|&n| colors[n] != Some(c))
            });

            match candidate {
                Some(color) => {
                    colors[v] = Some(color);
                    frame.next_color = color + 1;
                    assignments += 1;

                    let next = frame.position + 1;
                    if next == order.len() {
                        found = true;
                        break;
                    }
                    stack.push(Frame {
                        position: next,
                        next_color: 0,
                    });
                }
                None => {
                    trace!(
                        "backtracking: no color for {:?} at depth {}",
                        indexed.vertices[v],
                        frame.position
                    );
                    stack.pop();
                    backtracks += 1;
                }
            }
        }

        let coloring = found.then(|| indexed.to_coloring(&colors));
        debug!(
            "backtracking: {} vertices, budget {max_colors}, feasible={found}, {assignments} assignments, {backtracks} backtracks",
            indexed.order()
        );

        Ok(BacktrackingResult {
            coloring,
            max_colors,
            assignments,
            backtracks,
        })
    }
}
