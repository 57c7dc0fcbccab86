//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use super::selection::Selection;
use crate::error::{Error, Result};

/// Configuration for the genetic algorithm.
///
/// The defaults reproduce the reference parameterization: population 300,
/// 1000 generations, crossover 0.85, the two-stage mutation gate 0.2 ×
/// 0.825, tournament size 3, seed 42.
///
/// # Defaults
///
/// ```
/// use tsp_ga::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 300);
/// assert_eq!(config.max_generations, 1000);
/// assert_eq!(config.seed, 42);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use tsp_ga::ga::{GaConfig, Selection};
///
/// let config = GaConfig::default()
///     .with_population_size(100)
///     .with_selection(Selection::Tournament(5))
///     .with_crossover_rate(0.9)
///     .with_seed(7);
/// ```
#[derive(Debug, Clone)]
pub struct GaConfig {
    /// Number of individuals in the population; constant across all
    /// generations. Must be at least 2.
    pub population_size: usize,

    /// Number of generations to run. Always executed in full — there is no
    /// convergence-based early exit.
    pub max_generations: usize,

    /// Selection strategy for filling the offspring pool.
    pub selection: Selection,

    /// Probability of applying ordered crossover to an adjacent offspring
    /// pair (0.0–1.0). A declined pair keeps its selection-time copies.
    pub crossover_rate: f64,

    /// Outer per-individual probability that mutation is considered at all
    /// (0.0–1.0).
    pub mutation_rate: f64,

    /// Inner probability that a considered mutation actually inverts a
    /// segment (0.0–1.0). Both gates must pass for a mutation to fire, so
    /// the effective per-individual rate is `mutation_rate ×
    /// inversion_rate`.
    pub inversion_rate: f64,

    /// Random seed. Runs with equal seed, input, and configuration produce
    /// identical results.
    pub seed: u64,

    /// Whether to evaluate stale individuals on a rayon pool. Takes effect
    /// only with the `parallel` cargo feature; results are identical either
    /// way.
    pub parallel: bool,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 300,
            max_generations: 1000,
            selection: Selection::default(),
            crossover_rate: 0.85,
            mutation_rate: 0.2,
            inversion_rate: 0.825,
            seed: 42,
            parallel: true,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the selection strategy.
    pub fn with_selection(mut self, sel: Selection) -> Self {
        self.selection = sel;
        self
    }

    /// Convenience builder for setting tournament size.
    ///
    /// Equivalent to `.with_selection(Selection::Tournament(k))`.
    pub fn with_tournament_size(self, k: usize) -> Self {
        self.with_selection(Selection::Tournament(k))
    }

    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate;
        self
    }

    /// Sets the outer mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the inner inversion rate.
    pub fn with_inversion_rate(mut self, rate: f64) -> Self {
        self.inversion_rate = rate;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates the configuration.
    ///
    /// Out-of-range values are rejected here rather than clamped, so a bad
    /// parameter fails fast instead of silently running something else.
    pub fn validate(&self) -> Result<()> {
        if self.population_size < 2 {
            return Err(Error::Configuration(
                "population_size must be at least 2".into(),
            ));
        }
        let Selection::Tournament(k) = self.selection;
        if k < 1 {
            return Err(Error::Configuration(
                "tournament size must be at least 1".into(),
            ));
        }
        for (name, rate) in [
            ("crossover_rate", self.crossover_rate),
            ("mutation_rate", self.mutation_rate),
            ("inversion_rate", self.inversion_rate),
        ] {
            if !(0.0..=1.0).contains(&rate) {
                return Err(Error::Configuration(format!(
                    "{name} must be within [0, 1], got {rate}"
                )));
            }
        }
        Ok(())
    }
}
