//! Post-hoc color usage summary.

use crate::coloring::{Color, Coloring};
use std::collections::BTreeMap;
use std::fmt;
use std::hash::Hash;

/// How many vertices use each color, ordered by color.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorDistribution {
    counts: BTreeMap<Color, usize>,
}

impl ColorDistribution {
    /// Vertices using `color` (0 if unused).
    pub fn count(&self, color: Color) -> usize {
        self.counts.get(&color).copied().unwrap_or(0)
    }

    /// Number of distinct colors.
    pub fn color_count(&self) -> usize {
        self.counts.len()
    }

    /// Total number of colored vertices.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// The most used color and its count. Ties go to the smaller color.
    pub fn most_used(&self) -> Option<(Color, usize)> {
        self.counts
            .iter()
            .map(|(&c, &n)| (c, n))
            .reduce(|best, cur| if cur.1 > best.1 { cur } else { best })
    }

    /// The least used color and its count. Ties go to the smaller color.
    pub fn least_used(&self) -> Option<(Color, usize)> {
        self.counts
            .iter()
            .map(|(&c, &n)| (c, n))
            .reduce(|best, cur| if cur.1 < best.1 { cur } else { best })
    }

    /// `(color, count)` pairs in increasing color order.
    pub fn iter(&self) -> impl Iterator<Item = (Color, usize)> + '_ {
        self.counts.iter().map(|(&c, &n)| (c, n))
    }
}

impl fmt::Display for ColorDistribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (color, count)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{color}: {count}")?;
        }
        write!(f, "}}")
    }
}

/// Counts how many vertices of `coloring` use each color.
pub fn analyze<V: Clone + Eq + Hash>(coloring: &Coloring<V>) -> ColorDistribution {
    let mut counts = BTreeMap::new();
    for (_, color) in coloring.iter() {
        *counts.entry(color).or_insert(0) += 1;
    }
    ColorDistribution { counts }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_counts() {
        let coloring: Coloring<_> = [("A", 0), ("B", 1), ("C", 0), ("D", 2), ("E", 0)]
            .into_iter()
            .collect();
        let dist = analyze(&coloring);
        assert_eq!(dist.count(0), 3);
        assert_eq!(dist.count(1), 1);
        assert_eq!(dist.count(7), 0);
        assert_eq!(dist.color_count(), 3);
        assert_eq!(dist.total(), 5);
        assert_eq!(dist.most_used(), Some((0, 3)));
        assert_eq!(dist.least_used(), Some((1, 1)));
        assert_eq!(dist.to_string(), "{0: 3, 1: 1, 2: 1}");
    }

    #[test]
    fn test_analyze_empty() {
        let coloring: Coloring<u8> = Coloring::new();
        let dist = analyze(&coloring);
        assert!(dist.is_empty());
        assert_eq!(dist.most_used(), None);
        assert_eq!(dist.to_string(), "{}");
    }

    #[test]
    fn test_distribution_matches_analyze() {
        let coloring: Coloring<_> = [(1, 4), (2, 4)].into_iter().collect();
        assert_eq!(coloring.distribution(), analyze(&coloring));
        assert_eq!(coloring.distribution().iter().collect::<Vec<_>>(), vec![(4, 2)]);
    }
}
