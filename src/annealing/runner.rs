//! Annealing execution loop.

use super::config::AnnealingConfig;
use crate::coloring::{Color, Coloring};
use crate::error::Result;
use crate::graph::{ColorableGraph, IndexedGraph};
use log::debug;
use rand::Rng;
use u_numflow::random::create_rng;

/// Best-cost history is sampled every this many iterations.
const HISTORY_INTERVAL: usize = 100;

/// Result of an annealing run.
#[derive(Debug, Clone)]
pub struct AnnealingResult<V> {
    /// Lowest-cost assignment seen during the run.
    pub coloring: Coloring<V>,

    /// Objective value of `coloring`.
    pub cost: f64,

    /// Distinct colors used by `coloring`.
    pub colors_used: usize,

    /// Edges of `coloring` whose endpoints share a color.
    pub conflicts: usize,

    /// Total number of proposed moves.
    pub iterations: usize,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of strictly improving moves.
    pub improving_moves: usize,

    /// Temperature when the search stopped.
    pub final_temperature: f64,

    /// Best cost sampled at regular intervals.
    pub cost_history: Vec<f64>,
}

impl<V> AnnealingResult<V> {
    /// Whether the returned coloring has no conflicting edge.
    pub fn is_conflict_free(&self) -> bool {
        self.conflicts == 0
    }
}

/// Simulated-annealing local search over total color assignments.
///
/// Starts from a uniformly random assignment in `[0, max_colors)`. Each
/// move recolors one random vertex with a random color; the move is kept
/// if it does not worsen the objective, or otherwise with Metropolis
/// probability `exp(-Δ / T)`.
///
/// All randomness comes from the caller's random source, so a run is
/// replayable from its seed. The result is not guaranteed to be a valid
/// coloring; check [`AnnealingResult::conflicts`] or
/// [`Coloring::is_valid`].
pub struct AnnealingColorer;

impl AnnealingColorer {
    /// Runs the search and returns the best coloring found.
    ///
    /// # Errors
    ///
    /// [`ColoringError::InvalidParameter`](crate::ColoringError::InvalidParameter)
    /// if `config` fails [`AnnealingConfig::validate`].
    pub fn color<G: ColorableGraph, R: Rng>(
        graph: &G,
        config: &AnnealingConfig,
        rng: &mut R,
    ) -> Result<Coloring<G::Vertex>> {
        Ok(Self::run(graph, config, rng)?.coloring)
    }

    /// [`color`](Self::color) with a random source seeded from `seed`.
    pub fn color_seeded<G: ColorableGraph>(
        graph: &G,
        config: &AnnealingConfig,
        seed: u64,
    ) -> Result<Coloring<G::Vertex>> {
        let mut rng = create_rng(seed);
        Self::color(graph, config, &mut rng)
    }

    /// Runs the search, returning the best coloring with run statistics.
    pub fn run<G: ColorableGraph, R: Rng>(
        graph: &G,
        config: &AnnealingConfig,
        rng: &mut R,
    ) -> Result<AnnealingResult<G::Vertex>> {
        config.validate()?;
        let indexed = IndexedGraph::build(graph)?;
        let n = indexed.order();
        let k = config.max_colors;
        let weight = config.effective_conflict_weight();

        if n == 0 {
            return Ok(AnnealingResult {
                coloring: Coloring::new(),
                cost: 0.0,
                colors_used: 0,
                conflicts: 0,
                iterations: 0,
                accepted_moves: 0,
                improving_moves: 0,
                final_temperature: config.initial_temperature,
                cost_history: vec![0.0],
            });
        }

        let mut state = State::random(&indexed, k, rng);
        let mut current_cost = state.cost(weight);
        let mut best = state.colors.clone();
        let mut best_cost = current_cost;

        let mut temperature = config.initial_temperature;
        let mut iterations = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;

        let mut cost_history = vec![best_cost];

        while temperature > config.min_temperature {
            let v = rng.random_range(0..n);
            let color = rng.random_range(0..k);
            let (d_distinct, d_conflicts) = state.delta(&indexed, v, color);
            let delta = d_distinct as f64 + weight * d_conflicts as f64;

            // Metropolis acceptance criterion
            let accept = if delta <= 0.0 {
                if delta < 0.0 {
                    improving_moves += 1;
                }
                true
            } else {
                rng.random::<f64>() < (-delta / temperature).exp()
            };

            if accept {
                state.recolor(v, color, d_distinct, d_conflicts);
                current_cost += delta;
                accepted_moves += 1;

                if current_cost < best_cost {
                    best.clone_from(&state.colors);
                    best_cost = current_cost;
                }
            }

            iterations += 1;
            if iterations.is_multiple_of(HISTORY_INTERVAL) {
                cost_history.push(best_cost);
            }

            temperature *= config.cooling_rate;
        }

        if cost_history
            .last()
            .is_none_or(|&last| (last - best_cost).abs() > 1e-12)
        {
            cost_history.push(best_cost);
        }

        let best_state = State::from_colors(&indexed, k, best);
        let colors: Vec<Option<Color>> = best_state.colors.iter().map(|&c| Some(c)).collect();

        debug!(
            "annealing: {n} vertices, budget {k}, {:?}, {iterations} iterations, best cost {best_cost}, {} colors, {} conflicts",
            config.objective, best_state.distinct, best_state.conflicts
        );

        Ok(AnnealingResult {
            coloring: indexed.to_coloring(&colors),
            cost: best_state.cost(weight),
            colors_used: best_state.distinct,
            conflicts: best_state.conflicts,
            iterations,
            accepted_moves,
            improving_moves,
            final_temperature: temperature,
            cost_history,
        })
    }
}

/// A total assignment with incrementally maintained objective terms.
struct State {
    colors: Vec<Color>,
    /// Vertices per color.
    usage: Vec<usize>,
    distinct: usize,
    conflicts: usize,
}

impl State {
    fn random<V, R: Rng>(graph: &IndexedGraph<V>, k: usize, rng: &mut R) -> Self {
        let colors = (0..graph.vertices.len())
            .map(|_| rng.random_range(0..k))
            .collect();
        Self::from_colors(graph, k, colors)
    }

    fn from_colors<V>(graph: &IndexedGraph<V>, k: usize, colors: Vec<Color>) -> Self {
        let mut usage = vec![0; k];
        for &c in &colors {
            usage[c] += 1;
        }
        let distinct = usage.iter().filter(|&&u| u > 0).count();
        let conflicts = graph
            .adjacency
            .iter()
            .enumerate()
            .map(|(v, ns)| ns.iter().filter(|&&n| n > v && colors[n] == colors[v]).count())
            .sum();
        Self {
            colors,
            usage,
            distinct,
            conflicts,
        }
    }

    fn cost(&self, weight: f64) -> f64 {
        self.distinct as f64 + weight * self.conflicts as f64
    }

    /// Change in `(distinct, conflicts)` if `v` were recolored to `color`.
    fn delta<V>(&self, graph: &IndexedGraph<V>, v: usize, color: Color) -> (i64, i64) {
        let old = self.colors[v];
        if old == color {
            return (0, 0);
        }
        let d_distinct = i64::from(self.usage[color] == 0) - i64::from(self.usage[old] == 1);
        let mut d_conflicts = 0i64;
        for &n in &graph.adjacency[v] {
            let c = self.colors[n];
            if c == color {
                d_conflicts += 1;
            } else if c == old {
                d_conflicts -= 1;
            }
        }
        (d_distinct, d_conflicts)
    }

    fn recolor(&mut self, v: usize, color: Color, d_distinct: i64, d_conflicts: i64) {
        let old = self.colors[v];
        if old == color {
            return;
        }
        self.usage[old] -= 1;
        self.usage[color] += 1;
        self.colors[v] = color;
        self.distinct = (self.distinct as i64 + d_distinct) as usize;
        self.conflicts = (self.conflicts as i64 + d_conflicts) as usize;
    }
}
