//! Strategy switch between exact and local search.

use tracing::debug;

use assortopt_config::DEFAULT_EXACT_ITEM_LIMIT;
use assortopt_core::{AssortmentSolution, MnlCatalog, Result};

use crate::exact::ExactOptimizer;
use crate::localsearch::LocalSearchOptimizer;
use crate::optimizer::AssortmentOptimizer;

/// Runs exact search on catalogs of at most `item_limit` items and local
/// search on larger ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdaptiveOptimizer {
    exact: ExactOptimizer,
    local_search: LocalSearchOptimizer,
    item_limit: usize,
}

impl AdaptiveOptimizer {
    pub fn new(exact: ExactOptimizer, local_search: LocalSearchOptimizer, item_limit: usize) -> Self {
        Self {
            exact,
            local_search,
            item_limit,
        }
    }

    pub fn item_limit(&self) -> usize {
        self.item_limit
    }

    /// Whether a catalog of `item_count` items gets exact search.
    pub fn uses_exact(&self, item_count: usize) -> bool {
        item_count <= self.item_limit
    }
}

impl Default for AdaptiveOptimizer {
    fn default() -> Self {
        Self::new(
            ExactOptimizer::new(),
            LocalSearchOptimizer::new(),
            DEFAULT_EXACT_ITEM_LIMIT,
        )
    }
}

impl AssortmentOptimizer for AdaptiveOptimizer {
    fn optimize(
        &self,
        catalog: &MnlCatalog<'_>,
        cap: Option<usize>,
    ) -> Result<AssortmentSolution> {
        let exact = self.uses_exact(catalog.len());
        debug!(
            event = "strategy_selected",
            item_count = catalog.len(),
            item_limit = self.item_limit,
            exact,
        );
        if exact {
            self.exact.solve(catalog, cap)
        } else {
            self.local_search.solve(catalog, cap)
        }
    }

    fn name(&self) -> &'static str {
        "adaptive"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assortopt_test::{random_instance, uniform_instance};

    #[test]
    fn test_switches_on_item_limit() {
        let optimizer = AdaptiveOptimizer::new(ExactOptimizer::new(), LocalSearchOptimizer::new(), 8);
        assert!(optimizer.uses_exact(8));
        assert!(!optimizer.uses_exact(9));
    }

    #[test]
    fn test_small_catalog_is_exact() {
        let instance = uniform_instance();
        let solution = AdaptiveOptimizer::default()
            .optimize_vectors(&instance.weights, &instance.revenues, None)
            .unwrap();
        assert_eq!(solution.into_parts(), (0.75, vec![1, 2, 3]));
    }

    #[test]
    fn test_large_catalog_uses_local_search() {
        let instance = random_instance(11, 40, Some(5));
        let catalog = instance.catalog().unwrap();
        let adaptive = AdaptiveOptimizer::default().optimize(&catalog, instance.cap).unwrap();
        let local = LocalSearchOptimizer::new().solve(&catalog, instance.cap).unwrap();
        assert_eq!(adaptive, local);
    }
}
