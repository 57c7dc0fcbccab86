//! Parent selection.
//!
//! Selection fills the offspring pool with by-value copies of existing
//! tours; later crossover or mutation of a copy can never reach back into
//! the population it was drawn from.
//!
//! # References
//!
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use super::types::Tour;
use rand::Rng;

/// Selection strategy for filling the offspring pool.
///
/// Minimization: the shorter tour always wins a comparison.
///
/// # Examples
///
/// ```
/// use tsp_ga::ga::Selection;
///
/// // Tournament with size 3 (moderate selection pressure)
/// let sel = Selection::Tournament(3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Tournament selection: draw `k` individuals uniformly at random with
    /// replacement, keep the one with the lowest fitness.
    ///
    /// Higher `k` = stronger selection pressure.
    /// - k=2: light pressure (good for diversity)
    /// - k=3-5: moderate pressure (typical default)
    /// - k>5: strong pressure (risk of premature convergence)
    ///
    /// # Complexity
    /// O(k) per selection
    Tournament(usize),
}

impl Default for Selection {
    fn default() -> Self {
        Selection::Tournament(3)
    }
}

impl Selection {
    /// Selects one index from the population.
    ///
    /// # Panics
    /// Panics if `population` is empty.
    pub fn select<R: Rng>(&self, population: &[Tour], rng: &mut R) -> usize {
        assert!(
            !population.is_empty(),
            "cannot select from empty population"
        );

        match self {
            Selection::Tournament(k) => tournament(population, *k, rng),
        }
    }

    /// Fills an offspring pool with `count` winners, copied by value.
    ///
    /// Every fitness in `population` must be valid: selection compares
    /// cached values and never re-evaluates.
    pub fn select_pool<R: Rng>(
        &self,
        population: &[Tour],
        count: usize,
        rng: &mut R,
    ) -> Vec<Tour> {
        debug_assert!(
            population.iter().all(|t| t.has_valid_fitness()),
            "selection must not compare stale fitness"
        );
        (0..count)
            .map(|_| population[self.select(population, rng)].clone())
            .collect()
    }
}

/// Tournament selection: pick k random individuals, return the best index.
/// The first individual drawn wins ties.
fn tournament<R: Rng>(population: &[Tour], k: usize, rng: &mut R) -> usize {
    let k = k.max(1);
    let n = population.len();

    let mut best_idx = rng.random_range(0..n);
    for _ in 1..k {
        let idx = rng.random_range(0..n);
        if population[idx].fitness() < population[best_idx].fitness() {
            best_idx = idx;
        }
    }
    best_idx
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    fn make_population(fitnesses: &[f64]) -> Vec<Tour> {
        fitnesses
            .iter()
            .enumerate()
            .map(|(i, &f)| {
                let mut tour = Tour::from_order(vec![i]);
                tour.set_fitness(f);
                tour
            })
            .collect()
    }

    #[test]
    fn test_tournament_favors_best() {
        let pop = make_population(&[10.0, 5.0, 1.0, 8.0]);
        let mut rng = create_rng(42);

        // With tournament size = population size, the best should dominate
        // (though not win every draw, since sampling is with replacement).
        let mut counts = [0u32; 4];
        let n = 10000;
        for _ in 0..n {
            let idx = Selection::Tournament(4).select(&pop, &mut rng);
            counts[idx] += 1;
        }
        let best_count = counts[2];
        assert!(
            best_count > 6000,
            "expected best to be selected >60% of the time, got {best_count}/{n}"
        );
    }

    #[test]
    fn test_oversized_tournament_always_selects_best() {
        let pop = make_population(&[10.0, 5.0, 1.0, 8.0]);
        let mut rng = create_rng(42);

        // 64 draws over 4 individuals miss the minimum with probability
        // (3/4)^64; for this seed every tournament finds it.
        for _ in 0..1000 {
            assert_eq!(Selection::Tournament(64).select(&pop, &mut rng), 2);
        }
    }

    #[test]
    fn test_tournament_size_1_is_random() {
        let pop = make_population(&[10.0, 5.0, 1.0, 8.0]);
        let mut rng = create_rng(42);

        let mut counts = [0u32; 4];
        for _ in 0..10000 {
            let idx = Selection::Tournament(1).select(&pop, &mut rng);
            counts[idx] += 1;
        }
        for &c in &counts {
            assert!(c > 1500, "expected uniform, got counts: {counts:?}");
        }
    }

    #[test]
    fn test_equal_fitness_roughly_uniform() {
        let pop = make_population(&[5.0, 5.0, 5.0, 5.0]);
        let mut rng = create_rng(42);

        let mut counts = [0u32; 4];
        for _ in 0..10000 {
            let idx = Selection::Tournament(2).select(&pop, &mut rng);
            counts[idx] += 1;
        }
        for &c in &counts {
            assert!(
                c > 1500,
                "expected roughly uniform with equal fitness, got {counts:?}"
            );
        }
    }

    #[test]
    fn test_single_individual() {
        let pop = make_population(&[5.0]);
        let mut rng = create_rng(42);
        assert_eq!(Selection::Tournament(3).select(&pop, &mut rng), 0);
    }

    #[test]
    fn test_select_pool_copies_by_value() {
        let pop = make_population(&[3.0, 1.0]);
        let mut rng = create_rng(42);

        let mut pool = Selection::Tournament(2).select_pool(&pop, 4, &mut rng);
        assert_eq!(pool.len(), 4);

        // Mutating a copy must not touch the source population.
        pool[0].order_mut().reverse();
        pool[0].invalidate();
        assert!(pop.iter().all(|t| t.has_valid_fitness()));
        assert_eq!(pop[0].order(), &[0]);
        assert_eq!(pop[1].order(), &[1]);
    }

    #[test]
    #[should_panic(expected = "cannot select from empty population")]
    fn test_empty_population_panics() {
        let pop: Vec<Tour> = vec![];
        let mut rng = create_rng(42);
        Selection::Tournament(3).select(&pop, &mut rng);
    }
}
