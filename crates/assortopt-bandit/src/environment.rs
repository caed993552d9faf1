//! Environment side of a decision round.

use assortopt_core::Result;

/// Outcome of offering one assortment to one customer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Purchase {
    /// The bought item, or `None` when the customer chose not to buy.
    pub item: Option<usize>,
    /// Revenue earned: the item's revenue, or zero.
    pub revenue: f64,
}

impl Purchase {
    /// The no-purchase outcome.
    pub fn none() -> Self {
        Self {
            item: None,
            revenue: 0.0,
        }
    }

    pub fn is_no_purchase(&self) -> bool {
        self.item.is_none()
    }
}

/// A bandit environment offering assortments of a fixed catalog.
pub trait BanditEnvironment {
    /// Catalog size.
    fn item_count(&self) -> usize;

    /// Maximum items per offered assortment.
    fn cardinality_cap(&self) -> usize;

    /// Per-item revenue constants, known to learners.
    fn revenues(&self) -> &[f64];

    /// Offers `assortment` and returns the customer's choice.
    fn feed(&mut self, assortment: &[usize]) -> Result<Purchase>;

    /// Accumulated optimal expected revenue minus `rewards`.
    fn regret(&self, rewards: f64) -> f64;

    /// Starts a fresh run.
    fn reset(&mut self);
}
