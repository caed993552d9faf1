//! The optimizer seam used by learners.

use std::fmt::Debug;

use assortopt_core::{AssortmentSolution, MnlCatalog, Result};

/// Turns attraction weights and revenues into the assortment to offer next.
///
/// Implementations are pure: every call depends only on its arguments and
/// leaves no state behind, so one optimizer may serve many threads.
pub trait AssortmentOptimizer: Send + Sync + Debug {
    /// Optimizes over `catalog` with at most `cap` items per assortment
    /// (`None` = catalog size).
    ///
    /// # Errors
    ///
    /// Returns a configuration error for a zero cap, or an invalid-assortment
    /// error when a fixed local-search seed does not fit the catalog.
    fn optimize(&self, catalog: &MnlCatalog<'_>, cap: Option<usize>)
        -> Result<AssortmentSolution>;

    /// Short name for logs.
    fn name(&self) -> &'static str;

    /// Validates raw vectors into a catalog, then optimizes.
    fn optimize_vectors(
        &self,
        weights: &[f64],
        revenues: &[f64],
        cap: Option<usize>,
    ) -> Result<AssortmentSolution> {
        let catalog = MnlCatalog::new(weights, revenues)?;
        self.optimize(&catalog, cap)
    }
}
