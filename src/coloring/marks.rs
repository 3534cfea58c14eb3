//! First-fit color selection over an explicit color domain.

use super::Color;

/// A reusable set of "taken" colors over the domain `[0, domain)`.
///
/// Clearing is O(1): each mark stores the generation it was set in, and
/// [`clear`](Self::clear) just advances the generation.
#[derive(Debug, Clone)]
pub(crate) struct ColorMarks {
    stamps: Vec<u32>,
    generation: u32,
}

impl ColorMarks {
    pub fn new(domain: usize) -> Self {
        Self {
            stamps: vec![0; domain],
            generation: 1,
        }
    }

    pub fn domain(&self) -> usize {
        self.stamps.len()
    }

    pub fn clear(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        if self.generation == 0 {
            self.stamps.iter_mut().for_each(|s| *s = 0);
            self.generation = 1;
        }
    }

    /// Marks `color` as taken. Colors outside the domain cannot block any
    /// candidate and are ignored.
    pub fn mark(&mut self, color: Color) {
        if let Some(stamp) = self.stamps.get_mut(color) {
            *stamp = self.generation;
        }
    }

    pub fn is_marked(&self, color: Color) -> bool {
        self.stamps
            .get(color)
            .is_some_and(|&s| s == self.generation)
    }

    /// Smallest unmarked color in the domain.
    pub fn first_free(&self) -> Option<Color> {
        (0..self.domain()).find(|&c| !self.is_marked(c))
    }
}
