//! Annealing configuration and objective selection.

use crate::error::{ColoringError, Result};

/// What the annealing search minimizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AnnealingObjective {
    /// `distinct_colors + λ × conflicting_edges`.
    ///
    /// With `λ` at least the color budget, removing a conflict always
    /// outweighs any saving in distinct colors, so the search is driven
    /// toward a valid coloring first and fewer colors second.
    #[default]
    ConflictAware,

    /// Number of distinct colors only.
    ///
    /// Edge conflicts are ignored, so the optimum collapses every vertex
    /// onto one color. Results are generally not valid colorings.
    DistinctColors,
}

/// Configuration for [`AnnealingColorer`](super::AnnealingColorer).
///
/// The temperature starts at `initial_temperature`, is multiplied by
/// `cooling_rate` after every move, and the search stops once it is at or
/// below `min_temperature`. The iteration count is therefore fixed by the
/// schedule alone; see [`iteration_budget`](Self::iteration_budget).
///
/// # Examples
///
/// ```
/// use u_coloring::annealing::{AnnealingConfig, AnnealingObjective};
///
/// let config = AnnealingConfig::default()
///     .with_max_colors(3)
///     .with_initial_temperature(1000.0)
///     .with_cooling_rate(0.995)
///     .with_objective(AnnealingObjective::ConflictAware);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.iteration_budget(), 1379);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnealingConfig {
    /// Color domain size: every color lies in `[0, max_colors)`.
    pub max_colors: usize,

    /// Starting temperature. Higher values accept more worsening moves.
    pub initial_temperature: f64,

    /// Geometric cooling factor in (0, 1). Higher = slower cooling.
    pub cooling_rate: f64,

    /// The search stops when the temperature drops to or below this.
    pub min_temperature: f64,

    /// Objective to minimize.
    pub objective: AnnealingObjective,

    /// Conflict weight `λ` for [`AnnealingObjective::ConflictAware`].
    /// `None` uses `max_colors`.
    pub conflict_weight: Option<f64>,
}

impl Default for AnnealingConfig {
    fn default() -> Self {
        Self {
            max_colors: 4,
            initial_temperature: 1000.0,
            cooling_rate: 0.995,
            min_temperature: 1.0,
            objective: AnnealingObjective::default(),
            conflict_weight: None,
        }
    }
}

impl AnnealingConfig {
    pub fn with_max_colors(mut self, k: usize) -> Self {
        self.max_colors = k;
        self
    }

    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_cooling_rate(mut self, rate: f64) -> Self {
        self.cooling_rate = rate;
        self
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    pub fn with_objective(mut self, objective: AnnealingObjective) -> Self {
        self.objective = objective;
        self
    }

    pub fn with_conflict_weight(mut self, weight: f64) -> Self {
        self.conflict_weight = Some(weight);
        self
    }

    /// Conflict weight actually applied by the search.
    pub fn effective_conflict_weight(&self) -> f64 {
        match self.objective {
            AnnealingObjective::ConflictAware => {
                self.conflict_weight.unwrap_or(self.max_colors as f64)
            }
            AnnealingObjective::DistinctColors => 0.0,
        }
    }

    /// Number of moves the schedule allows:
    /// `⌈ln(min_temperature / initial_temperature) / ln(cooling_rate)⌉`,
    /// or 0 when the search starts at or below `min_temperature`.
    pub fn iteration_budget(&self) -> usize {
        if self.initial_temperature <= self.min_temperature {
            return 0;
        }
        let steps = (self.min_temperature / self.initial_temperature).ln() / self.cooling_rate.ln();
        steps.ceil() as usize
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.max_colors == 0 {
            return Err(ColoringError::invalid_parameter(
                "max_colors must be positive",
            ));
        }
        if !(self.initial_temperature > 0.0) || !self.initial_temperature.is_finite() {
            return Err(ColoringError::invalid_parameter(format!(
                "initial_temperature must be positive, got {}",
                self.initial_temperature
            )));
        }
        if !(self.cooling_rate > 0.0 && self.cooling_rate < 1.0) {
            return Err(ColoringError::invalid_parameter(format!(
                "cooling_rate must be in (0, 1), got {}",
                self.cooling_rate
            )));
        }
        if !(self.min_temperature > 0.0) || !self.min_temperature.is_finite() {
            return Err(ColoringError::invalid_parameter(format!(
                "min_temperature must be positive, got {}",
                self.min_temperature
            )));
        }
        if let Some(weight) = self.conflict_weight {
            if !(weight > 0.0) || !weight.is_finite() {
                return Err(ColoringError::invalid_parameter(format!(
                    "conflict_weight must be positive, got {weight}"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AnnealingConfig::default();
        assert!((config.initial_temperature - 1000.0).abs() < 1e-10);
        assert!((config.cooling_rate - 0.995).abs() < 1e-12);
        assert!((config.min_temperature - 1.0).abs() < 1e-12);
        assert_eq!(config.objective, AnnealingObjective::ConflictAware);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_effective_conflict_weight() {
        let config = AnnealingConfig::default().with_max_colors(7);
        assert!((config.effective_conflict_weight() - 7.0).abs() < 1e-12);

        let config = config.with_conflict_weight(2.5);
        assert!((config.effective_conflict_weight() - 2.5).abs() < 1e-12);

        let config = config.with_objective(AnnealingObjective::DistinctColors);
        assert_eq!(config.effective_conflict_weight(), 0.0);
    }

    #[test]
    fn test_iteration_budget() {
        assert_eq!(AnnealingConfig::default().iteration_budget(), 1379);

        let cold = AnnealingConfig::default().with_initial_temperature(0.5);
        assert_eq!(cold.iteration_budget(), 0);
    }

    #[test]
    fn test_validate_bad_max_colors() {
        let config = AnnealingConfig::default().with_max_colors(0);
        assert!(matches!(
            config.validate(),
            Err(ColoringError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_validate_bad_temperature() {
        assert!(AnnealingConfig::default()
            .with_initial_temperature(0.0)
            .validate()
            .is_err());
        assert!(AnnealingConfig::default()
            .with_initial_temperature(f64::NAN)
            .validate()
            .is_err());
        assert!(AnnealingConfig::default()
            .with_min_temperature(-1.0)
            .validate()
            .is_err());
    }

    #[test]
    fn test_validate_bad_cooling_rate() {
        for rate in [0.0, 1.0, 1.5, -0.2] {
            let config = AnnealingConfig::default().with_cooling_rate(rate);
            assert!(config.validate().is_err(), "rate {rate} should be rejected");
        }
    }

    #[test]
    fn test_validate_bad_conflict_weight() {
        let config = AnnealingConfig::default().with_conflict_weight(0.0);
        assert!(config.validate().is_err());
    }
}
