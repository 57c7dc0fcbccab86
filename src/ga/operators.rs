//! Permutation operators: ordered crossover and inversion mutation.
//!
//! Both operate on raw index slices so they stay independent of fitness
//! bookkeeping; the engine wraps results in [`Tour`](super::Tour)s and
//! handles cache invalidation. Each operator preserves the permutation
//! invariant by construction and degrades to a no-op below two elements,
//! where no cut points exist.
//!
//! # References
//!
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"
//! - Eiben & Smith (2015), *Introduction to Evolutionary Computing*,
//!   inversion mutation

use rand::Rng;

// ============================================================================
// Crossover
// ============================================================================

/// Ordered crossover (OX) producing two children.
///
/// Cut points `a < b` are drawn uniformly over distinct pairs in `0..=n`.
/// Each child copies `template[a..b]` verbatim into the same positions,
/// then fills the remaining slots by scanning the other parent from
/// position `b`, wrapping around, and inserting every city not already
/// present — preserving the donor's relative order. Each city therefore
/// appears exactly once: via the copied segment or via the filtered scan.
///
/// # Complexity
/// O(n) time, O(n) space
///
/// # Panics
/// Panics if the parents differ in length.
pub fn order_crossover<R: Rng>(
    parent1: &[usize],
    parent2: &[usize],
    rng: &mut R,
) -> (Vec<usize>, Vec<usize>) {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");

    if n < 2 {
        return (parent1.to_vec(), parent2.to_vec());
    }

    let (a, b) = distinct_pair(n + 1, rng);

    let child1 = ox_build_child(parent1, parent2, a, b);
    let child2 = ox_build_child(parent2, parent1, a, b);

    (child1, child2)
}

/// Build one OX child: copy `template[a..b]`, fill the rest from `donor`.
fn ox_build_child(template: &[usize], donor: &[usize], a: usize, b: usize) -> Vec<usize> {
    let n = template.len();
    let mut child = vec![usize::MAX; n];
    let mut in_segment = vec![false; n];

    for i in a..b {
        child[i] = template[i];
        in_segment[template[i]] = true;
    }

    // The n - (b - a) missing cities land on the contiguous wrapped run
    // from b to a, in donor order starting at position b.
    let mut pos = b % n;
    for offset in 0..n {
        let val = donor[(b + offset) % n];
        if !in_segment[val] {
            child[pos] = val;
            pos = (pos + 1) % n;
        }
    }

    child
}

// ============================================================================
// Mutation
// ============================================================================

/// Inversion mutation: reverse the segment `perm[a..b]` for distinct
/// positions `a < b` drawn uniformly from `0..n` (a 2-opt move).
///
/// Reversal keeps the multiset of values, so the permutation invariant is
/// trivially preserved.
///
/// # Complexity
/// O(n) worst case for the reversal
pub fn invert_mutation<R: Rng>(perm: &mut [usize], rng: &mut R) {
    let n = perm.len();
    if n < 2 {
        return;
    }
    let (a, b) = distinct_pair(n, rng);
    perm[a..b].reverse();
}

// ============================================================================
// Helpers
// ============================================================================

/// Two distinct values `a < b` drawn uniformly from `0..bound`.
/// Requires `bound >= 2`.
fn distinct_pair<R: Rng>(bound: usize, rng: &mut R) -> (usize, usize) {
    let a = rng.random_range(0..bound);
    let mut b = rng.random_range(0..bound);
    while b == a {
        b = rng.random_range(0..bound);
    }
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

// ============================================================================
// Tests
// ============================================================================
