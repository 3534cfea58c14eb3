//! Vertex-to-color assignments.

mod marks;

pub(crate) use marks::ColorMarks;

use crate::analysis::{self, ColorDistribution};
use crate::error::Result;
use crate::graph::ColorableGraph;
use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// A color: a non-negative integer drawn from `[0, k)` for some bound `k`.
pub type Color = usize;

/// A mapping from vertex to color.
///
/// Every colorer returns a freshly owned, *total* `Coloring` (all vertices
/// assigned). Partial colorings only appear while building one by hand.
///
/// A coloring is *valid* for a graph when no edge joins two vertices of the
/// same color; see [`is_valid`](Self::is_valid).
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(
        serialize = "V: serde::Serialize + Eq + Hash",
        deserialize = "V: serde::Deserialize<'de> + Eq + Hash"
    ))
)]
pub struct Coloring<V> {
    colors: HashMap<V, Color>,
}

impl<V: Clone + Eq + Hash> Coloring<V> {
    /// Creates an empty coloring.
    pub fn new() -> Self {
        Self {
            colors: HashMap::new(),
        }
    }

    /// Color of `vertex`, if assigned.
    pub fn get(&self, vertex: &V) -> Option<Color> {
        self.colors.get(vertex).copied()
    }

    /// Assigns `color` to `vertex`, returning the previous color.
    pub fn assign(&mut self, vertex: V, color: Color) -> Option<Color> {
        self.colors.insert(vertex, color)
    }

    /// Removes the assignment of `vertex`, returning its color.
    pub fn unassign(&mut self, vertex: &V) -> Option<Color> {
        self.colors.remove(vertex)
    }

    /// Number of assigned vertices.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Iterates `(vertex, color)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&V, Color)> + '_ {
        self.colors.iter().map(|(v, &c)| (v, c))
    }

    /// Number of distinct colors in use.
    pub fn color_count(&self) -> usize {
        self.colors.values().collect::<HashSet<_>>().len()
    }

    /// Largest color in use, or `None` for an empty coloring.
    pub fn max_color(&self) -> Option<Color> {
        self.colors.values().copied().max()
    }

    /// Whether every vertex of `graph` is assigned.
    pub fn is_total<G: ColorableGraph<Vertex = V>>(&self, graph: &G) -> bool {
        graph.vertices().iter().all(|v| self.colors.contains_key(v))
    }

    /// Number of edges of `graph` whose endpoints are assigned the same
    /// color. Unassigned endpoints never conflict.
    pub fn conflicts<G: ColorableGraph<Vertex = V>>(&self, graph: &G) -> Result<usize> {
        let mut twice = 0;
        for v in graph.vertices() {
            let Some(color) = self.get(&v) else {
                continue;
            };
            for n in graph.neighbors(&v)? {
                if self.get(&n) == Some(color) {
                    twice += 1;
                }
            }
        }
        Ok(twice / 2)
    }

    /// Whether this is a total, conflict-free coloring of `graph`.
    pub fn is_valid<G: ColorableGraph<Vertex = V>>(&self, graph: &G) -> Result<bool> {
        Ok(self.is_total(graph) && self.conflicts(graph)? == 0)
    }

    /// Color usage counts. Same as [`analysis::analyze`].
    pub fn distribution(&self) -> ColorDistribution {
        analysis::analyze(self)
    }

    /// Consumes the coloring, returning the underlying map.
    pub fn into_map(self) -> HashMap<V, Color> {
        self.colors
    }
}

impl<V: Clone + Eq + Hash> Default for Coloring<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Eq + Hash> PartialEq for Coloring<V> {
    fn eq(&self, other: &Self) -> bool {
        self.colors == other.colors
    }
}

impl<V: Eq + Hash> Eq for Coloring<V> {}

impl<V: Clone + Eq + Hash> FromIterator<(V, Color)> for Coloring<V> {
    fn from_iter<I: IntoIterator<Item = (V, Color)>>(iter: I) -> Self {
        Self {
            colors: iter.into_iter().collect(),
        }
    }
}

impl<V: Clone + Eq + Hash> From<HashMap<V, Color>> for Coloring<V> {
    fn from(colors: HashMap<V, Color>) -> Self {
        Self { colors }
    }
}
