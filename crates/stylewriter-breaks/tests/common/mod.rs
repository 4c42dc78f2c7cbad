//! Shared utilities for integration tests

use rand::prelude::*;

pub use approx::assert_relative_eq;

pub const EPSILON: f64 = 1e-10;

/// Generate uniformly distributed data from a fixed seed
pub fn uniform_data(size: usize, low: f64, high: f64, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..size).map(|_| rng.gen_range(low..high)).collect()
}

/// Dataset lengths that exercise whole and fractional quantile strides
pub fn edge_case_lengths() -> Vec<usize> {
    vec![
        1,   // Single value
        2,   // Two values
        3,   // Odd
        4,   // Even
        7,   // Prime
        10,  // Round number
        12,  // Many divisors
        100, // Large round number
        101, // Large prime
    ]
}

/// Assert a sequence never decreases
pub fn assert_non_decreasing(values: &[f64], context: &str) {
    for (i, w) in values.windows(2).enumerate() {
        assert!(
            w[0] <= w[1],
            "{context}: value at {} ({}) exceeds value at {} ({})",
            i,
            w[0],
            i + 1,
            w[1]
        );
    }
}
