//! Genetic-algorithm search for short closed tours over geographic points.
//!
//! The crate solves the classic traveling-salesman setup: given a list of
//! cities with latitude/longitude coordinates, find a short cyclic visiting
//! order. The pieces, leaf first:
//!
//! - [`distance`]: great-circle (haversine) distance matrix, built once and
//!   shared read-only by every fitness evaluation, plus the cyclic
//!   tour-length evaluation itself.
//! - [`random`]: one seeded random stream threaded through every stochastic
//!   operator, making whole runs reproducible from a single seed.
//! - [`ga`]: the generational engine — tournament selection, ordered
//!   crossover, inversion mutation, and elitist replacement over
//!   permutation-encoded tours, for a fixed number of generations.
//! - [`io`]: city-file loading and CSV result/trace output.
//! - [`logging`]: compact stderr logger for the command-line binary.
//!
//! # Architecture
//!
//! The engine is single-threaded and strictly sequential: each generation
//! depends on the previous one, and the order in which operators consume
//! the random stream is part of the reproducibility contract. The one
//! exception is fitness evaluation, which is a pure function of a tour and
//! the read-only matrix and may run on a rayon pool (enable the `parallel`
//! feature) without affecting results.

pub mod distance;
pub mod error;
pub mod ga;
pub mod io;
pub mod logging;
pub mod random;

pub use error::{Error, Result};
