//! Evolutionary loop execution.
//!
//! [`GaRunner`] drives the generational state machine: initialize →
//! (select → crossover → mutate → evaluate → elitism-inject → record) × N
//! → terminate. The loop always runs the configured number of generations;
//! the only early exit is an explicit cancellation token, checked at the
//! generation boundary where the population is fully evaluated and the
//! trace covers every completed generation.

use super::config::GaConfig;
use super::operators;
use super::types::Tour;
use crate::distance::DistanceMatrix;
use crate::error::Result;
use crate::random;
use rand::Rng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Result of a GA run.
#[derive(Debug, Clone)]
pub struct GaResult {
    /// The best tour found during the entire run — a permutation of
    /// `0..n` city indices.
    pub best_tour: Vec<usize>,

    /// Cyclic length of `best_tour` (miles with the default matrix).
    pub best_distance: f64,

    /// Number of generations actually completed.
    pub generations: usize,

    /// Best-ever tour length at the end of each completed generation.
    /// Non-increasing by construction: the best tour is re-injected into
    /// every new population.
    pub fitness_history: Vec<f64>,

    /// Whether the run was halted early by a cancellation token.
    pub cancelled: bool,
}

/// Executes the generational loop.
///
/// # Usage
///
/// ```ignore
/// let matrix = DistanceMatrix::from_coords(&coords)?;
/// let config = GaConfig::default().with_seed(42);
/// let result = GaRunner::run(&matrix, &config)?;
/// println!("best distance: {:.4}", result.best_distance);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA to completion.
    ///
    /// # Errors
    /// Fails fast with [`Error::Configuration`](crate::Error::Configuration)
    /// if the configuration is invalid; no generation is executed in that
    /// case.
    pub fn run(matrix: &DistanceMatrix, config: &GaConfig) -> Result<GaResult> {
        Self::run_with_cancel(matrix, config, None)
    }

    /// Runs the GA with an optional cancellation token.
    ///
    /// If `cancel` is `Some` and the flag becomes `true`, the loop stops
    /// before starting the next generation and returns the best tour found
    /// so far, with one history entry per completed generation.
    pub fn run_with_cancel(
        matrix: &DistanceMatrix,
        config: &GaConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<GaResult> {
        config.validate()?;

        let n = matrix.len();
        let mut rng = random::create_rng(config.seed);

        // 1. Initial population: independent uniform random permutations.
        let mut population: Vec<Tour> = (0..config.population_size)
            .map(|_| Tour::random(n, &mut rng))
            .collect();
        evaluate_stale(matrix, &mut population, config.parallel);

        // 2. Track the best tour ever seen.
        let mut best = best_of(&population).clone();
        let mut fitness_history = Vec::with_capacity(config.max_generations);
        let mut cancelled = false;

        // 3. Generational loop.
        for _ in 0..config.max_generations {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            // Selection: tournament winners, copied by value.
            let mut offspring =
                config
                    .selection
                    .select_pool(&population, config.population_size, &mut rng);

            // Crossover on adjacent pairs; a declined pair keeps its
            // selection-time copies and their still-valid fitness.
            for pair in offspring.chunks_mut(2) {
                if pair.len() < 2 {
                    continue; // odd population: trailing copy passes through
                }
                if rng.random_range(0.0..1.0) < config.crossover_rate {
                    let (c1, c2) =
                        operators::order_crossover(pair[0].order(), pair[1].order(), &mut rng);
                    pair[0] = Tour::from_order(c1);
                    pair[1] = Tour::from_order(c2);
                }
            }

            // Mutation: both gates must pass for the inversion to fire.
            for tour in offspring.iter_mut() {
                if rng.random_range(0.0..1.0) < config.mutation_rate
                    && rng.random_range(0.0..1.0) < config.inversion_rate
                {
                    operators::invert_mutation(tour.order_mut(), &mut rng);
                    tour.invalidate();
                }
            }

            // Evaluate whatever crossover/mutation left stale.
            evaluate_stale(matrix, &mut offspring, config.parallel);

            // Elitism: slot 0 always carries the best tour seen so far,
            // its fitness already valid.
            offspring[0] = best.clone();
            population = offspring;

            // Strict improvement only: ties keep the incumbent.
            let generation_best = best_of(&population);
            if generation_best.fitness() < best.fitness() {
                best = generation_best.clone();
            }

            fitness_history.push(best.fitness());
        }

        Ok(GaResult {
            best_tour: best.order().to_vec(),
            best_distance: best.fitness(),
            generations: fitness_history.len(),
            fitness_history,
            cancelled,
        })
    }
}

/// First individual with the lowest fitness (earlier index wins ties).
fn best_of(population: &[Tour]) -> &Tour {
    let mut best = &population[0];
    for tour in &population[1..] {
        if tour.fitness() < best.fitness() {
            best = tour;
        }
    }
    best
}

/// Recompute fitness for every stale individual. Results land by stable
/// index and the random stream is never touched here, so the parallel and
/// serial paths produce identical populations.
#[cfg(feature = "parallel")]
fn evaluate_stale(matrix: &DistanceMatrix, population: &mut [Tour], parallel: bool) {
    if parallel {
        population
            .par_iter_mut()
            .filter(|t| !t.has_valid_fitness())
            .for_each(|tour| {
                let length = matrix.tour_length(tour.order());
                tour.set_fitness(length);
            });
    } else {
        evaluate_stale_serial(matrix, population);
    }
}

#[cfg(not(feature = "parallel"))]
fn evaluate_stale(matrix: &DistanceMatrix, population: &mut [Tour], _parallel: bool) {
    evaluate_stale_serial(matrix, population);
}

fn evaluate_stale_serial(matrix: &DistanceMatrix, population: &mut [Tour]) {
    for tour in population.iter_mut().filter(|t| !t.has_valid_fitness()) {
        let length = matrix.tour_length(tour.order());
        tour.set_fitness(length);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::collections::HashSet;

    fn ring_coords(n: usize) -> Vec<(f64, f64)> {
        // n points spread over a small area; distances are all distinct
        // enough that the GA has something to optimize.
        (0..n)
            .map(|i| {
                let angle = i as f64 * std::f64::consts::TAU / n as f64;
                (10.0 + 3.0 * angle.sin(), 20.0 + 3.0 * angle.cos())
            })
            .collect()
    }

    fn small_config() -> GaConfig {
        GaConfig::default()
            .with_population_size(20)
            .with_max_generations(40)
            .with_parallel(false)
    }

    fn is_valid_permutation(perm: &[usize], n: usize) -> bool {
        let set: HashSet<usize> = perm.iter().copied().collect();
        perm.len() == n && set.len() == n && perm.iter().all(|&v| v < n)
    }

    // ---- Determinism ----

    #[test]
    fn test_same_seed_reproduces_run() {
        let matrix = DistanceMatrix::from_coords(&ring_coords(9)).unwrap();
        let config = small_config().with_seed(123);

        let a = GaRunner::run(&matrix, &config).unwrap();
        let b = GaRunner::run(&matrix, &config).unwrap();

        assert_eq!(a.best_tour, b.best_tour);
        assert_eq!(a.best_distance, b.best_distance);
        assert_eq!(a.fitness_history, b.fitness_history);
    }

    #[test]
    fn test_different_seeds_may_differ() {
        let matrix = DistanceMatrix::from_coords(&ring_coords(9)).unwrap();

        let a = GaRunner::run(&matrix, &small_config().with_seed(1)).unwrap();
        let b = GaRunner::run(&matrix, &small_config().with_seed(2)).unwrap();

        // Histories trace different search paths even when both converge.
        assert_ne!(a.fitness_history, b.fitness_history);
    }

    // ---- Elitism / trace ----

    #[test]
    fn test_history_is_monotonically_non_increasing() {
        let matrix = DistanceMatrix::from_coords(&ring_coords(12)).unwrap();
        let result = GaRunner::run(&matrix, &small_config()).unwrap();

        for window in result.fitness_history.windows(2) {
            assert!(
                window[1] <= window[0],
                "elitism must keep the trace non-increasing: {} > {}",
                window[1],
                window[0]
            );
        }
    }

    #[test]
    fn test_history_has_one_entry_per_generation() {
        let matrix = DistanceMatrix::from_coords(&ring_coords(6)).unwrap();
        let config = small_config().with_max_generations(17);
        let result = GaRunner::run(&matrix, &config).unwrap();

        assert_eq!(result.generations, 17);
        assert_eq!(result.fitness_history.len(), 17);
        assert_eq!(*result.fitness_history.last().unwrap(), result.best_distance);
    }

    #[test]
    fn test_best_tour_is_valid_permutation() {
        for seed in [1u64, 7, 42] {
            let matrix = DistanceMatrix::from_coords(&ring_coords(11)).unwrap();
            let result = GaRunner::run(&matrix, &small_config().with_seed(seed)).unwrap();
            assert!(is_valid_permutation(&result.best_tour, 11));
        }
    }

    #[test]
    fn test_inert_operators_keep_initial_best() {
        let matrix = DistanceMatrix::from_coords(&ring_coords(8)).unwrap();
        let config = small_config()
            .with_crossover_rate(0.0)
            .with_mutation_rate(0.0);
        let result = GaRunner::run(&matrix, &config).unwrap();

        // Without variation the best cannot improve past generation 0.
        let first = result.fitness_history[0];
        assert!(result.fitness_history.iter().all(|&f| f == first));
        assert_eq!(result.best_distance, first);
    }

    #[test]
    fn test_optimizes_ring_instance() {
        // The optimal tour over a ring visits neighbors in circular order;
        // a short GA run should get well below a random tour's length.
        let matrix = DistanceMatrix::from_coords(&ring_coords(10)).unwrap();
        let config = GaConfig::default()
            .with_population_size(60)
            .with_max_generations(150)
            .with_parallel(false);
        let result = GaRunner::run(&matrix, &config).unwrap();

        let random_baseline = result.fitness_history[0];
        assert!(
            result.best_distance <= random_baseline,
            "search must never end worse than it started"
        );
    }

    // ---- Degenerate instances ----

    #[test]
    fn test_single_city_run() {
        let matrix = DistanceMatrix::from_coords(&[(10.0, 20.0)]).unwrap();
        let config = small_config().with_max_generations(25);
        let result = GaRunner::run(&matrix, &config).unwrap();

        assert_eq!(result.best_tour, vec![0]);
        assert_eq!(result.best_distance, 0.0);
        assert_eq!(result.fitness_history, vec![0.0; 25]);
    }

    #[test]
    fn test_two_city_run() {
        let matrix = DistanceMatrix::from_coords(&[(0.0, 0.0), (0.0, 1.0)]).unwrap();
        let result = GaRunner::run(&matrix, &small_config()).unwrap();

        // Either orientation is the same closed tour.
        assert!(is_valid_permutation(&result.best_tour, 2));
        let expected = 2.0 * matrix.get(0, 1);
        assert!((result.best_distance - expected).abs() < 1e-9);
    }

    #[test]
    fn test_zero_generations() {
        let matrix = DistanceMatrix::from_coords(&ring_coords(5)).unwrap();
        let config = small_config().with_max_generations(0);
        let result = GaRunner::run(&matrix, &config).unwrap();

        assert_eq!(result.generations, 0);
        assert!(result.fitness_history.is_empty());
        assert!(is_valid_permutation(&result.best_tour, 5));
    }

    // ---- Configuration errors ----

    #[test]
    fn test_invalid_config_fails_fast() {
        let matrix = DistanceMatrix::from_coords(&ring_coords(5)).unwrap();
        let config = small_config().with_population_size(1);

        assert!(matches!(
            GaRunner::run(&matrix, &config),
            Err(Error::Configuration(_))
        ));
    }

    // ---- Cancellation ----

    #[test]
    fn test_cancellation_before_first_generation() {
        let matrix = DistanceMatrix::from_coords(&ring_coords(6)).unwrap();
        let cancel = Arc::new(AtomicBool::new(true));

        let result =
            GaRunner::run_with_cancel(&matrix, &small_config(), Some(cancel)).unwrap();

        assert!(result.cancelled);
        assert_eq!(result.generations, 0);
        assert!(result.fitness_history.is_empty());
        // The initial population was still evaluated.
        assert!(is_valid_permutation(&result.best_tour, 6));
        assert!(result.best_distance.is_finite());
    }
}
