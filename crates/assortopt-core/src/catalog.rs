//! Validated item catalog.
//!
//! An [`MnlCatalog`] borrows the caller's attraction weights and revenues for
//! the duration of one optimization call. It never copies or mutates them,
//! so a learner can keep its live estimate and hand out snapshots freely.

use crate::error::{AssortOptError, Result};
use crate::revenue::{expected_revenue, RevenueAccumulator};

/// Read-only view over an MNL item catalog.
///
/// Items are addressed by index `0..n`. Construction checks that both vectors
/// have the same non-zero length, every value is finite, and every weight is
/// non-negative. Evaluation afterwards performs no further checks.
///
/// # Examples
///
/// ```
/// use assortopt_core::MnlCatalog;
///
/// let weights = vec![1.0, 1.0, 1.0, 1.0];
/// let revenues = vec![0.0, 1.0, 1.0, 1.0];
/// let catalog = MnlCatalog::new(&weights, &revenues).unwrap();
///
/// assert_eq!(catalog.len(), 4);
/// assert_eq!(catalog.expected_revenue(&[1, 2, 3]), 0.75);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct MnlCatalog<'a> {
    weights: &'a [f64],
    revenues: &'a [f64],
}

impl<'a> MnlCatalog<'a> {
    /// Validates and wraps the given weight and revenue vectors.
    ///
    /// # Errors
    ///
    /// - [`AssortOptError::LengthMismatch`] if the lengths differ
    /// - [`AssortOptError::EmptyCatalog`] if there are no items
    /// - [`AssortOptError::NonFiniteValue`] for NaN or infinite entries
    /// - [`AssortOptError::NegativeWeight`] for a weight below zero
    pub fn new(weights: &'a [f64], revenues: &'a [f64]) -> Result<Self> {
        if weights.len() != revenues.len() {
            return Err(AssortOptError::LengthMismatch {
                weights: weights.len(),
                revenues: revenues.len(),
            });
        }
        if weights.is_empty() {
            return Err(AssortOptError::EmptyCatalog);
        }

        for (index, (&weight, &revenue)) in weights.iter().zip(revenues).enumerate() {
            if !weight.is_finite() {
                return Err(AssortOptError::NonFiniteValue {
                    index,
                    value: weight,
                });
            }
            if !revenue.is_finite() {
                return Err(AssortOptError::NonFiniteValue {
                    index,
                    value: revenue,
                });
            }
            if weight < 0.0 {
                return Err(AssortOptError::NegativeWeight { index, weight });
            }
        }

        Ok(Self { weights, revenues })
    }

    /// Number of items.
    #[inline]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Always false for a constructed catalog.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    #[inline]
    pub fn weights(&self) -> &'a [f64] {
        self.weights
    }

    #[inline]
    pub fn revenues(&self) -> &'a [f64] {
        self.revenues
    }

    #[inline]
    pub fn weight(&self, item: usize) -> f64 {
        self.weights[item]
    }

    #[inline]
    pub fn revenue(&self, item: usize) -> f64 {
        self.revenues[item]
    }

    /// Resolves an optional cardinality cap against this catalog.
    ///
    /// `None` means unbounded and resolves to the catalog size. Caps above
    /// the catalog size are clamped to it.
    ///
    /// # Errors
    ///
    /// Returns [`AssortOptError::InvalidCardinality`] for a cap of zero.
    pub fn resolve_cap(&self, cap: Option<usize>) -> Result<usize> {
        match cap {
            Some(0) => Err(AssortOptError::InvalidCardinality(0)),
            Some(k) => Ok(k.min(self.len())),
            None => Ok(self.len()),
        }
    }

    /// Expected revenue of `assortment`. Indices must be in range.
    #[inline]
    pub fn expected_revenue(&self, assortment: &[usize]) -> f64 {
        expected_revenue(self.weights, self.revenues, assortment)
    }

    /// Expected revenue of offering `item` alone.
    #[inline]
    pub fn singleton_revenue(&self, item: usize) -> f64 {
        RevenueAccumulator::new()
            .with_added(self.weights[item], self.revenues[item])
            .revenue()
    }

    /// Accumulator primed with `assortment`.
    pub fn accumulator(&self, assortment: &[usize]) -> RevenueAccumulator {
        RevenueAccumulator::from_assortment(self.weights, self.revenues, assortment)
    }

    /// Checks that `assortment` holds distinct in-range items and at most
    /// `cap` of them. The empty assortment passes.
    pub fn validate_assortment(&self, assortment: &[usize], cap: usize) -> Result<()> {
        if assortment.len() > cap {
            return Err(AssortOptError::InvalidAssortment(format!(
                "{} items offered but the cardinality cap is {}",
                assortment.len(),
                cap
            )));
        }
        let mut seen = vec![false; self.len()];
        for &item in assortment {
            if item >= self.len() {
                return Err(AssortOptError::InvalidAssortment(format!(
                    "item {} is outside the catalog of {} items",
                    item,
                    self.len()
                )));
            }
            if seen[item] {
                return Err(AssortOptError::InvalidAssortment(format!(
                    "item {} offered twice",
                    item
                )));
            }
            seen[item] = true;
        }
        Ok(())
    }

    /// MNL choice probabilities for `assortment`.
    ///
    /// Returns one probability per offered item, in assortment order, and the
    /// probability of no purchase. The two parts sum to one.
    pub fn choice_probabilities(&self, assortment: &[usize]) -> (Vec<f64>, f64) {
        let denominator = self.accumulator(assortment).denominator();
        let probabilities = assortment
            .iter()
            .map(|&item| self.weights[item] / denominator)
            .collect();
        (probabilities, 1.0 / denominator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_mismatch_fails_fast() {
        let err = MnlCatalog::new(&[1.0, 1.0], &[1.0]).unwrap_err();
        assert_eq!(
            err,
            AssortOptError::LengthMismatch {
                weights: 2,
                revenues: 1
            }
        );
    }

    #[test]
    fn test_empty_catalog_rejected() {
        assert_eq!(
            MnlCatalog::new(&[], &[]).unwrap_err(),
            AssortOptError::EmptyCatalog
        );
    }

    #[test]
    fn test_negative_weight_rejected() {
        let err = MnlCatalog::new(&[1.0, -0.5], &[1.0, 1.0]).unwrap_err();
        assert_eq!(
            err,
            AssortOptError::NegativeWeight {
                index: 1,
                weight: -0.5
            }
        );
    }

    #[test]
    fn test_non_finite_rejected() {
        let err = MnlCatalog::new(&[1.0, 1.0], &[f64::INFINITY, 1.0]).unwrap_err();
        assert!(matches!(err, AssortOptError::NonFiniteValue { index: 0, .. }));
        assert!(MnlCatalog::new(&[f64::NAN], &[1.0]).is_err());
    }

    #[test]
    fn test_zero_weight_is_legal() {
        let catalog = MnlCatalog::new(&[0.0, 1.0], &[5.0, 1.0]).unwrap();
        assert_eq!(catalog.singleton_revenue(0), 0.0);
    }

    #[test]
    fn test_resolve_cap() {
        let catalog = MnlCatalog::new(&[1.0; 3], &[1.0; 3]).unwrap();
        assert_eq!(catalog.resolve_cap(None).unwrap(), 3);
        assert_eq!(catalog.resolve_cap(Some(2)).unwrap(), 2);
        assert_eq!(catalog.resolve_cap(Some(10)).unwrap(), 3);
        assert_eq!(
            catalog.resolve_cap(Some(0)).unwrap_err(),
            AssortOptError::InvalidCardinality(0)
        );
    }

    #[test]
    fn test_validate_assortment() {
        let catalog = MnlCatalog::new(&[1.0; 4], &[1.0; 4]).unwrap();
        assert!(catalog.validate_assortment(&[], 2).is_ok());
        assert!(catalog.validate_assortment(&[3, 0], 2).is_ok());
        assert!(catalog.validate_assortment(&[0, 1, 2], 2).is_err());
        assert!(catalog.validate_assortment(&[4], 2).is_err());
        assert!(catalog.validate_assortment(&[1, 1], 2).is_err());
    }

    #[test]
    fn test_choice_probabilities_sum_to_one() {
        let catalog = MnlCatalog::new(&[0.5, 1.5, 2.0], &[1.0; 3]).unwrap();
        let (items, none) = catalog.choice_probabilities(&[0, 2]);
        assert_eq!(items.len(), 2);
        let total: f64 = items.iter().sum::<f64>() + none;
        assert!((total - 1.0).abs() < 1e-12);
        assert!((none - 1.0 / 3.5).abs() < 1e-12);
    }
}
