//! Bitmask brute force, independent of the solver's enumerator.

use assortopt_core::expected_revenue;

/// Every non-empty assortment of `0..n` with at most `cap` items, as sorted
/// index vectors in bitmask order. Only for `n < 20`.
pub fn all_assortments(n: usize, cap: usize) -> Vec<Vec<usize>> {
    assert!(n < 20, "brute force is limited to small catalogs");
    (1u32..(1 << n))
        .filter(|mask| mask.count_ones() as usize <= cap)
        .map(|mask| (0..n).filter(|i| mask & (1 << i) != 0).collect())
        .collect()
}

/// Highest expected revenue over [`all_assortments`], or `0.0` if no
/// assortment beats the no-purchase baseline.
pub fn best_revenue(weights: &[f64], revenues: &[f64], cap: usize) -> f64 {
    all_assortments(weights.len(), cap)
        .iter()
        .map(|a| expected_revenue(weights, revenues, a))
        .fold(0.0, f64::max)
}
