//! The tour individual: a permutation with cached fitness.

use rand::seq::SliceRandom;
use rand::Rng;

/// A candidate tour — an ordered visiting sequence over all cities,
/// implicitly closed (the last city connects back to the first).
///
/// The permutation invariant is the core contract: `order` always holds
/// every value in `0..n` exactly once. Each tour carries its cached cyclic
/// length and a validity flag; operators that reorder the permutation leave
/// the cache stale, and the engine recomputes fitness only for stale
/// individuals before it is ever compared.
#[derive(Debug, Clone)]
pub struct Tour {
    order: Vec<usize>,
    fitness: f64,
    valid: bool,
}

impl Tour {
    /// A uniform random permutation of `0..n`, fitness stale.
    pub fn random<R: Rng>(n: usize, rng: &mut R) -> Self {
        let mut order: Vec<usize> = (0..n).collect();
        order.shuffle(rng);
        Self::from_order(order)
    }

    /// Wraps an existing visiting order, fitness stale.
    pub fn from_order(order: Vec<usize>) -> Self {
        Self {
            order,
            fitness: f64::INFINITY,
            valid: false,
        }
    }

    /// The visiting order.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Cached cyclic tour length. Meaningful only while
    /// [`has_valid_fitness`](Self::has_valid_fitness) is true; stale tours
    /// report `f64::INFINITY` until re-evaluated.
    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    /// Stores a freshly computed fitness and marks the cache valid.
    pub fn set_fitness(&mut self, fitness: f64) {
        self.fitness = fitness;
        self.valid = true;
    }

    /// Whether the cached fitness still matches the current order.
    pub fn has_valid_fitness(&self) -> bool {
        self.valid
    }

    /// Marks the cached fitness stale after the order changed.
    pub fn invalidate(&mut self) {
        self.fitness = f64::INFINITY;
        self.valid = false;
    }

    /// Mutable access to the order for in-place operators. The caller must
    /// [`invalidate`](Self::invalidate) afterwards if it reorders anything.
    pub(crate) fn order_mut(&mut self) -> &mut [usize] {
        &mut self.order
    }
}
