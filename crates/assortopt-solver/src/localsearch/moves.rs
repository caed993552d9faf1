//! Assortment moves and the working assortment they act on.

use std::fmt;

use assortopt_core::{MnlCatalog, RevenueAccumulator};

/// A single-item change to the offered assortment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssortmentMove {
    /// Offer an item not yet offered.
    Add { item: usize },
    /// Stop offering an item.
    Remove { item: usize },
    /// Replace an offered item with one not yet offered.
    Swap { out: usize, into: usize },
}

impl fmt::Display for AssortmentMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssortmentMove::Add { item } => write!(f, "+{}", item),
            AssortmentMove::Remove { item } => write!(f, "-{}", item),
            AssortmentMove::Swap { out, into } => write!(f, "{}->{}", out, into),
        }
    }
}

/// The assortment local search is currently standing on.
///
/// Keeps a membership mask and the running revenue accumulator so every
/// move is priced in O(1). The accumulator is carried forward from the
/// evaluated candidate rather than re-summed, so the revenue sequence seen
/// by the acceptor is exactly the one that was compared.
#[derive(Debug, Clone)]
pub struct WorkingAssortment {
    items: Vec<usize>,
    offered: Vec<bool>,
    accumulator: RevenueAccumulator,
}

impl WorkingAssortment {
    /// Starts from `seed`, which must be valid for `catalog`.
    pub fn new(catalog: &MnlCatalog<'_>, seed: Vec<usize>) -> Self {
        let mut offered = vec![false; catalog.len()];
        for &item in &seed {
            offered[item] = true;
        }
        let accumulator = catalog.accumulator(&seed);
        Self {
            items: seed,
            offered,
            accumulator,
        }
    }

    /// Offered items in insertion order.
    pub fn items(&self) -> &[usize] {
        &self.items
    }

    #[inline]
    pub fn contains(&self, item: usize) -> bool {
        self.offered[item]
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Catalog size.
    pub fn item_count(&self) -> usize {
        self.offered.len()
    }

    /// Revenue as tracked by the accumulator.
    #[inline]
    pub fn revenue(&self) -> f64 {
        self.accumulator.revenue()
    }

    /// Prices `mv` without applying it.
    #[inline]
    pub fn evaluate(&self, mv: AssortmentMove, catalog: &MnlCatalog<'_>) -> RevenueAccumulator {
        match mv {
            AssortmentMove::Add { item } => self
                .accumulator
                .with_added(catalog.weight(item), catalog.revenue(item)),
            AssortmentMove::Remove { item } => self
                .accumulator
                .with_removed(catalog.weight(item), catalog.revenue(item)),
            AssortmentMove::Swap { out, into } => self
                .accumulator
                .with_removed(catalog.weight(out), catalog.revenue(out))
                .with_added(catalog.weight(into), catalog.revenue(into)),
        }
    }

    /// Applies `mv`, adopting `accumulator` as produced by [`evaluate`](Self::evaluate).
    pub fn apply(&mut self, mv: AssortmentMove, accumulator: RevenueAccumulator) {
        match mv {
            AssortmentMove::Add { item } => {
                debug_assert!(!self.offered[item]);
                self.items.push(item);
                self.offered[item] = true;
            }
            AssortmentMove::Remove { item } => {
                debug_assert!(self.offered[item]);
                self.items.retain(|&i| i != item);
                self.offered[item] = false;
            }
            AssortmentMove::Swap { out, into } => {
                debug_assert!(self.offered[out] && !self.offered[into]);
                if let Some(slot) = self.items.iter_mut().find(|i| **i == out) {
                    *slot = into;
                }
                self.offered[out] = false;
                self.offered[into] = true;
            }
        }
        self.accumulator = accumulator;
    }

    /// Consumes the working assortment, returning its items in ascending order.
    pub fn into_sorted_items(mut self) -> Vec<usize> {
        self.items.sort_unstable();
        self.items
    }
}
