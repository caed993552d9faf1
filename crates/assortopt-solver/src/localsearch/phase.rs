//! Local search optimizer implementation.

use tracing::{debug, info, trace};

use assortopt_core::{AssortmentSolution, MnlCatalog, Result};

use crate::localsearch::{
    AssortmentMove, HillClimbingAcceptor, NeighborhoodSelector, SeedPolicy, SteepestAscentForager,
    WorkingAssortment,
};
use crate::optimizer::AssortmentOptimizer;
use crate::stats::SearchStats;

/// Steepest-ascent local search over assortments.
///
/// Each step:
/// 1. Generates the add/remove/swap neighborhood of the working assortment
/// 2. Prices every move incrementally
/// 3. Accepts moves that strictly raise revenue
/// 4. Applies the best accepted move (first in neighborhood order on ties)
///
/// The search stops when no move is accepted, or after `step_limit` steps
/// if one is set. The returned assortment is sorted ascending and its
/// revenue is re-evaluated from scratch.
///
/// # Example
///
/// ```
/// use assortopt_core::MnlCatalog;
/// use assortopt_solver::{LocalSearchOptimizer, SeedPolicy};
///
/// let weights = [1.0, 1.0, 1.0, 1.0];
/// let revenues = [0.0, 1.0, 1.0, 1.0];
/// let catalog = MnlCatalog::new(&weights, &revenues).unwrap();
///
/// let optimizer = LocalSearchOptimizer::new().with_seed(SeedPolicy::Empty);
/// let solution = optimizer.solve(&catalog, None).unwrap();
/// assert_eq!(solution.assortment, vec![1, 2, 3]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocalSearchOptimizer {
    seed: SeedPolicy,
    step_limit: Option<u64>,
}

impl LocalSearchOptimizer {
    /// Creates an optimizer seeded with the best singleton, without step limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the seed policy.
    pub fn with_seed(mut self, seed: SeedPolicy) -> Self {
        self.seed = seed;
        self
    }

    /// Starts from a fixed assortment.
    pub fn with_seed_assortment(self, assortment: Vec<usize>) -> Self {
        self.with_seed(SeedPolicy::Fixed(assortment))
    }

    /// Stops after `limit` applied moves even if not yet locally optimal.
    pub fn with_step_limit(mut self, limit: Option<u64>) -> Self {
        self.step_limit = limit;
        self
    }

    pub fn seed(&self) -> &SeedPolicy {
        &self.seed
    }

    pub fn step_limit(&self) -> Option<u64> {
        self.step_limit
    }

    /// Climbs to a local optimum with at most `cap` items.
    pub fn solve(&self, catalog: &MnlCatalog<'_>, cap: Option<usize>) -> Result<AssortmentSolution> {
        self.solve_with_stats(catalog, cap).map(|(solution, _)| solution)
    }

    /// Like [`solve`](Self::solve), also returning search statistics.
    pub fn solve_with_stats(
        &self,
        catalog: &MnlCatalog<'_>,
        cap: Option<usize>,
    ) -> Result<(AssortmentSolution, SearchStats)> {
        let cap = catalog.resolve_cap(cap)?;
        let seed = self.seed.initial_assortment(catalog, cap)?;

        let mut stats = SearchStats::default();
        stats.start();

        info!(
            event = "solve_start",
            optimizer = "local_search",
            item_count = catalog.len(),
            cardinality_cap = cap,
            seed = ?seed,
        );

        let mut working = WorkingAssortment::new(catalog, seed);
        let selector = NeighborhoodSelector::new(cap);
        let acceptor = HillClimbingAcceptor::new();
        let mut forager = SteepestAscentForager::new();
        let mut moves: Vec<AssortmentMove> = Vec::new();

        loop {
            if let Some(limit) = self.step_limit {
                if stats.step_count >= limit {
                    debug!(event = "step_limit_reached", steps = stats.step_count);
                    break;
                }
            }

            forager.step_started();
            selector.fill_moves(&working, &mut moves);

            let last_step_revenue = working.revenue();
            for (index, &mv) in moves.iter().enumerate() {
                let candidate = working.evaluate(mv, catalog);
                let accepted = acceptor.is_accepted(last_step_revenue, candidate.revenue());
                stats.record_move(accepted);
                trace!(event = "move", mv = %mv, revenue = candidate.revenue(), accepted);
                if accepted {
                    forager.add_move_index(index, candidate);
                }
            }

            // No improving move: local optimum.
            let Some((index, accumulator)) = forager.pick_move_index() else {
                break;
            };

            let mv = moves[index];
            working.apply(mv, accumulator);
            stats.record_step();

            debug!(
                event = "step",
                step = stats.step_count,
                mv = %mv,
                revenue = working.revenue(),
                size = working.len(),
            );
        }

        let assortment = working.into_sorted_items();
        let revenue = catalog.expected_revenue(&assortment);
        let solution = AssortmentSolution::new(revenue, assortment);

        stats.stop();
        info!(
            event = "solve_end",
            optimizer = "local_search",
            revenue = solution.revenue,
            assortment = ?solution.assortment,
            steps = stats.step_count,
            moves_evaluated = stats.moves_evaluated,
            duration_ms = stats.elapsed().as_millis() as u64,
        );

        Ok((solution, stats))
    }
}

impl AssortmentOptimizer for LocalSearchOptimizer {
    fn optimize(
        &self,
        catalog: &MnlCatalog<'_>,
        cap: Option<usize>,
    ) -> Result<AssortmentSolution> {
        self.solve(catalog, cap)
    }

    fn name(&self) -> &'static str {
        "local_search"
    }
}

/// Locally optimal assortment for raw weight and revenue vectors, seeded
/// with the best singleton.
///
/// # Example
///
/// ```
/// use assortopt_solver::local_search_best_assortment;
///
/// let best = local_search_best_assortment(&[1.0, 1.0, 1.0, 1.0], &[0.0, 1.0, 1.0, 1.0], None).unwrap();
/// assert_eq!(best.assortment, vec![1, 2, 3]);
/// assert!((best.revenue - 0.75).abs() < 1e-12);
/// ```
pub fn local_search_best_assortment(
    weights: &[f64],
    revenues: &[f64],
    cap: Option<usize>,
) -> Result<AssortmentSolution> {
    let catalog = MnlCatalog::new(weights, revenues)?;
    LocalSearchOptimizer::new().solve(&catalog, cap)
}
