//! DSATUR (degree of saturation) coloring.
//!
//! Greedy coloring with a dynamic order: the next vertex is always the
//! uncolored one whose neighbors already use the most distinct colors,
//! so highly constrained vertices are colored before they run out of
//! options and low-constraint vertices are deferred.
//!
//! # References
//!
//! Brélaz, D. (1979). "New methods to color the vertices of a graph",
//! *Communications of the ACM* 22(4), 251-256.

use crate::coloring::{Color, ColorMarks, Coloring};
use crate::error::{ColoringError, Result};
use crate::graph::{ColorableGraph, IndexedGraph};
use log::{debug, trace};
use std::collections::HashSet;

/// Saturation-degree ordered greedy coloring.
///
/// Selection maximizes `(saturation, degree)`; remaining ties go to the
/// vertex that comes first in the graph's natural enumeration order, so
/// the result is fully deterministic. Each selected vertex receives the
/// smallest color not used by its colored neighbors.
///
/// # Examples
///
/// ```
/// use u_coloring::dsatur::DsaturColorer;
/// use u_coloring::graph::AdjacencyGraph;
///
/// let graph = AdjacencyGraph::from_edges([(0, 1), (1, 2), (2, 0), (2, 3)]).unwrap();
/// let coloring = DsaturColorer::color(&graph).unwrap();
/// assert!(coloring.is_valid(&graph).unwrap());
/// assert_eq!(coloring.color_count(), 3);
/// ```
pub struct DsaturColorer;

impl DsaturColorer {
    /// Colors every vertex of `graph`.
    pub fn color<G: ColorableGraph>(graph: &G) -> Result<Coloring<G::Vertex>> {
        let indexed = IndexedGraph::build(graph)?;
        let n = indexed.order();

        let degree: Vec<usize> = indexed.adjacency.iter().map(Vec::len).collect();
        let mut saturation: Vec<HashSet<Color>> = vec![HashSet::new(); n];
        let mut colors: Vec<Option<Color>> = vec![None; n];
        let mut marks = ColorMarks::new(n);

        for _ in 0..n {
            let Some(v) = select(&colors, &saturation, &degree) else {
                break;
            };

            marks.clear();
            for &u in &indexed.adjacency[v] {
                if let Some(c) = colors[u] {
                    marks.mark(c);
                }
            }
            let color = marks
                .first_free()
                .ok_or_else(|| ColoringError::invalid_parameter("color domain exhausted"))?;
            colors[v] = Some(color);
            trace!(
                "dsatur: vertex {:?} (saturation {}, degree {}) -> color {color}",
                indexed.vertices[v],
                saturation[v].len(),
                degree[v]
            );

            for &u in &indexed.adjacency[v] {
                if colors[u].is_none() {
                    saturation[u].insert(color);
                }
            }
        }

        let coloring = indexed.to_coloring(&colors);
        debug!("dsatur: {n} vertices, {} colors", coloring.color_count());
        Ok(coloring)
    }
}

/// Uncolored vertex with the largest `(saturation, degree)`, earliest
/// index on ties.
fn select(
    colors: &[Option<Color>],
    saturation: &[HashSet<Color>],
    degree: &[usize],
) -> Option<usize> {
    let mut best: Option<(usize, (usize, usize))> = None;
    for v in 0..colors.len() {
        if colors[v].is_some() {
            continue;
        }
        let key = (saturation[v].len(), degree[v]);
        if best.is_none_or(|(_, best_key)| key > best_key) {
            best = Some((v, key));
        }
    }
    best.map(|(v, _)| v)
}
