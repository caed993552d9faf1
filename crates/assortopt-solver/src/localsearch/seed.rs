//! Starting assortments for local search.

use assortopt_config::SeedPolicyConfig;
use assortopt_core::{MnlCatalog, Result};

/// How local search picks its first assortment.
///
/// The local optimum reached depends on the seed; every policy here is
/// deterministic for identical inputs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SeedPolicy {
    /// The item with the highest stand-alone revenue `r_i v_i / (1 + v_i)`,
    /// lowest index on ties. Starts empty when no item earns a positive
    /// stand-alone revenue.
    #[default]
    BestSingleton,

    /// The no-purchase baseline.
    Empty,

    /// A caller-chosen assortment, validated against catalog and cap.
    Fixed(Vec<usize>),
}

impl SeedPolicy {
    /// Builds the starting assortment.
    ///
    /// # Errors
    ///
    /// A [`Fixed`](SeedPolicy::Fixed) seed with duplicate or out-of-range
    /// items, or more than `cap` items, is rejected.
    pub fn initial_assortment(&self, catalog: &MnlCatalog<'_>, cap: usize) -> Result<Vec<usize>> {
        match self {
            SeedPolicy::BestSingleton => Ok(best_singleton(catalog).into_iter().collect()),
            SeedPolicy::Empty => Ok(Vec::new()),
            SeedPolicy::Fixed(items) => {
                catalog.validate_assortment(items, cap)?;
                Ok(items.clone())
            }
        }
    }
}

impl From<SeedPolicyConfig> for SeedPolicy {
    fn from(config: SeedPolicyConfig) -> Self {
        match config {
            SeedPolicyConfig::BestSingleton => SeedPolicy::BestSingleton,
            SeedPolicyConfig::Empty => SeedPolicy::Empty,
        }
    }
}

fn best_singleton(catalog: &MnlCatalog<'_>) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for item in 0..catalog.len() {
        let revenue = catalog.singleton_revenue(item);
        if revenue > best.map_or(0.0, |(_, r)| r) {
            best = Some((item, revenue));
        }
    }
    best.map(|(item, _)| item)
}
