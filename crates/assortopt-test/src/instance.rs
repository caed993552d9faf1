//! Catalog instances.

use assortopt_core::{MnlCatalog, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Owned weights and revenues with an optional cardinality cap.
#[derive(Debug, Clone, PartialEq)]
pub struct Instance {
    pub weights: Vec<f64>,
    pub revenues: Vec<f64>,
    pub cap: Option<usize>,
}

impl Instance {
    /// Creates an instance.
    pub fn new(weights: Vec<f64>, revenues: Vec<f64>, cap: Option<usize>) -> Self {
        Self {
            weights,
            revenues,
            cap,
        }
    }

    /// Borrows the instance as a validated catalog.
    pub fn catalog(&self) -> Result<MnlCatalog<'_>> {
        MnlCatalog::new(&self.weights, &self.revenues)
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Same instance with a different cap.
    pub fn with_cap(mut self, cap: Option<usize>) -> Self {
        self.cap = cap;
        self
    }
}

/// Four unit-weight items, the first worth nothing.
///
/// The optimum is `[1, 2, 3]` at revenue `0.75`.
pub fn uniform_instance() -> Instance {
    Instance::new(vec![1.0; 4], vec![0.0, 1.0, 1.0, 1.0], None)
}

/// Ten unit-revenue items with mixed weights and a cap of four.
///
/// Offering the four weight-0.5 items earns `2/3`, the optimum.
pub fn reference_instance() -> Instance {
    Instance::new(
        vec![0.5, 0.5, 0.25, 0.25, 0.25, 0.25, 0.25, 0.25, 0.5, 0.5],
        vec![1.0; 10],
        Some(4),
    )
}

/// Seeded random instance with weights in `[0, 2)` and revenues in `[0.1, 10)`.
pub fn random_instance(seed: u64, item_count: usize, cap: Option<usize>) -> Instance {
    let mut rng = StdRng::seed_from_u64(seed);
    let weights = (0..item_count).map(|_| rng.random_range(0.0..2.0)).collect();
    let revenues = (0..item_count).map(|_| rng.random_range(0.1..10.0)).collect();
    Instance::new(weights, revenues, cap)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_instance_is_reproducible() {
        assert_eq!(random_instance(9, 6, None), random_instance(9, 6, None));
        assert_ne!(random_instance(9, 6, None), random_instance(10, 6, None));
    }

    #[test]
    fn test_fixtures_are_valid_catalogs() {
        assert!(uniform_instance().catalog().is_ok());
        assert!(reference_instance().catalog().is_ok());
        assert!(random_instance(1, 12, Some(3)).catalog().is_ok());
    }
}
