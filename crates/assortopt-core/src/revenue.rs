//! Expected MNL revenue evaluation.
//!
//! For an offered assortment `S` the expected revenue is
//! `Σ_{i∈S} r_i v_i / (1 + Σ_{i∈S} v_i)`, where the `1` is the weight of the
//! no-purchase option. The denominator never drops below one.

/// Weight of the implicit no-purchase option.
pub const NO_PURCHASE_WEIGHT: f64 = 1.0;

/// Computes the expected revenue of `assortment`.
///
/// Performs no validation: indices must be in range for both slices. The
/// empty assortment yields `0.0`.
///
/// # Examples
///
/// ```
/// use assortopt_core::expected_revenue;
///
/// let weights = [1.0, 1.0, 1.0, 1.0];
/// let revenues = [0.0, 1.0, 1.0, 1.0];
///
/// assert_eq!(expected_revenue(&weights, &revenues, &[1, 2, 3]), 0.75);
/// assert_eq!(expected_revenue(&weights, &revenues, &[]), 0.0);
/// ```
#[inline]
pub fn expected_revenue(weights: &[f64], revenues: &[f64], assortment: &[usize]) -> f64 {
    if assortment.is_empty() {
        return 0.0;
    }
    let mut acc = RevenueAccumulator::new();
    for &item in assortment {
        acc.add(weights[item], revenues[item]);
    }
    acc.revenue()
}

/// Running numerator and denominator of the MNL revenue formula.
///
/// Lets local search price add, remove and swap moves in O(1) instead of
/// re-summing the whole assortment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevenueAccumulator {
    numerator: f64,
    denominator: f64,
}

impl RevenueAccumulator {
    /// Creates an accumulator for the empty assortment.
    pub const fn new() -> Self {
        Self {
            numerator: 0.0,
            denominator: NO_PURCHASE_WEIGHT,
        }
    }

    /// Builds an accumulator over `assortment`.
    pub fn from_assortment(weights: &[f64], revenues: &[f64], assortment: &[usize]) -> Self {
        let mut acc = Self::new();
        for &item in assortment {
            acc.add(weights[item], revenues[item]);
        }
        acc
    }

    /// Adds one item with the given weight and revenue.
    #[inline]
    pub fn add(&mut self, weight: f64, revenue: f64) {
        self.numerator += revenue * weight;
        self.denominator += weight;
    }

    /// Removes one item previously added with the same weight and revenue.
    #[inline]
    pub fn remove(&mut self, weight: f64, revenue: f64) {
        self.numerator -= revenue * weight;
        self.denominator -= weight;
    }

    /// Returns the expected revenue of the accumulated assortment.
    #[inline]
    pub fn revenue(&self) -> f64 {
        self.numerator / self.denominator
    }

    /// Returns the accumulator that would result from adding an item.
    #[inline]
    pub fn with_added(mut self, weight: f64, revenue: f64) -> Self {
        self.add(weight, revenue);
        self
    }

    /// Returns the accumulator that would result from removing an item.
    #[inline]
    pub fn with_removed(mut self, weight: f64, revenue: f64) -> Self {
        self.remove(weight, revenue);
        self
    }

    /// Weighted revenue sum `Σ r_i v_i`.
    pub fn numerator(&self) -> f64 {
        self.numerator
    }

    /// Normalizer `1 + Σ v_i`.
    pub fn denominator(&self) -> f64 {
        self.denominator
    }
}

impl Default for RevenueAccumulator {
    fn default() -> Self {
        Self::new()
    }
}
