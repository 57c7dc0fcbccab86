//! Great-circle distance matrix over geographic points.
//!
//! [`DistanceMatrix`] is built once from `(latitude, longitude)` pairs in
//! degrees and is immutable afterwards. Distances use the haversine formula
//! on a spherical Earth; with the default radius ([`EARTH_RADIUS_MILES`])
//! they come out in miles. The matrix also owns fitness evaluation — the
//! cyclic length of a tour is a pure function of a visiting order and the
//! read-only matrix.

use crate::error::{Error, Result};

/// Mean Earth radius in miles.
pub const EARTH_RADIUS_MILES: f64 = 3958.8;

/// Haversine great-circle distance between two `(lat, lon)` points given in
/// degrees, on a sphere of radius `radius`.
///
/// `a = sin²(Δlat/2) + cos(lat1)·cos(lat2)·sin²(Δlon/2)`,
/// `d = 2·R·asin(√a)`.
pub fn haversine(a: (f64, f64), b: (f64, f64), radius: f64) -> f64 {
    let (lat1, lon1) = (a.0.to_radians(), a.1.to_radians());
    let (lat2, lon2) = (b.0.to_radians(), b.1.to_radians());

    let dlat = lat2 - lat1;
    let dlon = lon2 - lon1;

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);

    2.0 * radius * h.sqrt().asin()
}

/// Haversine distance in miles.
pub fn haversine_miles(a: (f64, f64), b: (f64, f64)) -> f64 {
    haversine(a, b, EARTH_RADIUS_MILES)
}

/// Symmetric n×n table of pairwise great-circle distances.
///
/// Row-major `n·n` storage; the diagonal is zero and
/// `get(i, j) == get(j, i)` for every pair. Only the upper triangle is
/// actually computed (O(n²/2) haversine evaluations), then mirrored.
///
/// # Examples
///
/// ```
/// use tsp_ga::distance::DistanceMatrix;
///
/// let matrix = DistanceMatrix::from_coords(&[(0.0, 0.0), (0.0, 1.0)]).unwrap();
/// assert_eq!(matrix.len(), 2);
/// assert_eq!(matrix.get(0, 0), 0.0);
/// assert_eq!(matrix.get(0, 1), matrix.get(1, 0));
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    n: usize,
    cells: Vec<f64>,
}

impl DistanceMatrix {
    /// Builds the matrix with the default Earth radius in miles.
    ///
    /// # Errors
    /// [`Error::EmptyInstance`] if `coords` is empty. A single coordinate
    /// is valid and yields the 1×1 zero matrix.
    pub fn from_coords(coords: &[(f64, f64)]) -> Result<Self> {
        Self::with_radius(coords, EARTH_RADIUS_MILES)
    }

    /// Builds the matrix on a sphere of the given radius.
    pub fn with_radius(coords: &[(f64, f64)], radius: f64) -> Result<Self> {
        let n = coords.len();
        if n == 0 {
            return Err(Error::EmptyInstance);
        }

        let mut cells = vec![0.0; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let d = haversine(coords[i], coords[j], radius);
                cells[i * n + j] = d;
                cells[j * n + i] = d;
            }
        }

        Ok(Self { n, cells })
    }

    /// Number of cities.
    pub fn len(&self) -> usize {
        self.n
    }

    /// Always false: construction rejects empty instances.
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Distance between cities `i` and `j`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.cells[i * self.n + j]
    }

    /// Cyclic tour length: every consecutive edge plus the closing edge
    /// from the last city back to the first. O(n).
    pub fn tour_length(&self, order: &[usize]) -> f64 {
        let n = order.len();
        let mut total = 0.0;
        for i in 0..n {
            total += self.get(order[i], order[(i + 1) % n]);
        }
        total
    }
}
