//! Optimization result.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Best expected revenue together with the assortment achieving it.
///
/// Built fresh by every optimizer call and handed to the caller; optimizers
/// keep no copy.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AssortmentSolution {
    /// Expected revenue of `assortment`.
    pub revenue: f64,
    /// Offered item indices.
    pub assortment: Vec<usize>,
}

impl AssortmentSolution {
    /// Creates a solution.
    pub fn new(revenue: f64, assortment: Vec<usize>) -> Self {
        Self {
            revenue,
            assortment,
        }
    }

    /// The no-purchase baseline: offer nothing, earn nothing.
    pub fn baseline() -> Self {
        Self::default()
    }

    /// Returns true if nothing is offered.
    pub fn is_empty(&self) -> bool {
        self.assortment.is_empty()
    }

    /// Number of offered items.
    pub fn len(&self) -> usize {
        self.assortment.len()
    }

    /// Splits into `(revenue, assortment)`.
    pub fn into_parts(self) -> (f64, Vec<usize>) {
        (self.revenue, self.assortment)
    }
}

impl fmt::Display for AssortmentSolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6} @ {:?}", self.revenue, self.assortment)
    }
}
