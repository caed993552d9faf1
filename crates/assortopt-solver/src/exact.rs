//! Exact assortment optimization by exhaustive enumeration.
//!
//! Evaluates every feasible assortment produced by [`SubsetEnumerator`] and
//! keeps the best. Cost is `O(C(n, cap))` evaluations, so this is meant for
//! small and moderate catalogs; use local search beyond that.
//!
//! Logging levels:
//! - **INFO**: Search start/end with candidate count and result
//! - **DEBUG**: Each new incumbent
//! - **TRACE**: Every evaluated candidate

use std::sync::atomic::{AtomicU64, Ordering};

use rayon::iter::{ParallelBridge, ParallelIterator};
use tracing::{debug, info, trace};

use assortopt_core::{AssortmentSolution, MnlCatalog, Result};

use crate::enumerate::SubsetEnumerator;
use crate::optimizer::AssortmentOptimizer;
use crate::stats::SearchStats;

/// Exhaustive optimizer.
///
/// The incumbent starts at the no-purchase baseline `(0.0, [])` and is only
/// replaced by a strictly better candidate. Among equal-revenue candidates
/// the first in enumeration order wins, and the returned assortment keeps
/// enumeration order.
///
/// In parallel mode candidates are evaluated on the rayon pool and ties are
/// broken by lowest enumeration rank, which returns exactly what the
/// sequential mode returns.
///
/// # Example
///
/// ```
/// use assortopt_core::MnlCatalog;
/// use assortopt_solver::ExactOptimizer;
///
/// let weights = [1.0, 1.0, 1.0, 1.0];
/// let revenues = [0.0, 1.0, 1.0, 1.0];
/// let catalog = MnlCatalog::new(&weights, &revenues).unwrap();
///
/// let best = ExactOptimizer::new().solve(&catalog, None).unwrap();
/// assert_eq!(best.revenue, 0.75);
/// assert_eq!(best.assortment, vec![1, 2, 3]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExactOptimizer {
    parallel: bool,
}

/// A candidate tagged with its enumeration rank.
struct Ranked {
    rank: usize,
    revenue: f64,
    assortment: Vec<usize>,
}

impl Ranked {
    fn better_of(self, other: Ranked) -> Ranked {
        if other.revenue > self.revenue
            || (other.revenue == self.revenue && other.rank < self.rank)
        {
            other
        } else {
            self
        }
    }
}

impl ExactOptimizer {
    /// Creates a sequential exact optimizer.
    pub fn new() -> Self {
        Self { parallel: false }
    }

    /// Creates an exact optimizer evaluating candidates in parallel.
    pub fn parallel() -> Self {
        Self { parallel: true }
    }

    /// Switches parallel evaluation on or off.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn is_parallel(&self) -> bool {
        self.parallel
    }

    /// Finds the revenue-maximizing assortment with at most `cap` items.
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
        let enumerator = SubsetEnumerator::new(catalog.len(), 0, Some(cap));

        let mut stats = SearchStats::default();
        stats.start();

        info!(
            event = "solve_start",
            optimizer = "exact",
            item_count = catalog.len(),
            cardinality_cap = cap,
            candidate_count = %enumerator.total(),
            parallel = self.parallel,
        );

        let best = if self.parallel {
            search_parallel(catalog, enumerator, &mut stats)
        } else {
            search_sequential(catalog, enumerator, &mut stats)
        };

        stats.stop();
        info!(
            event = "solve_end",
            optimizer = "exact",
            revenue = best.revenue,
            assortment = ?best.assortment,
            candidates_evaluated = stats.moves_evaluated,
            duration_ms = stats.elapsed().as_millis() as u64,
        );

        Ok((best, stats))
    }
}

fn search_sequential(
    catalog: &MnlCatalog<'_>,
    enumerator: SubsetEnumerator,
    stats: &mut SearchStats,
) -> AssortmentSolution {
    let mut best = AssortmentSolution::baseline();

    for candidate in enumerator {
        let revenue = catalog.expected_revenue(&candidate);
        let improving = revenue > best.revenue;
        stats.record_move(improving);

        trace!(event = "candidate", assortment = ?candidate, revenue);

        if improving {
            debug!(
                event = "incumbent",
                revenue,
                assortment = ?candidate,
                evaluated = stats.moves_evaluated,
            );
            best = AssortmentSolution::new(revenue, candidate);
        }
    }

    best
}

fn search_parallel(
    catalog: &MnlCatalog<'_>,
    enumerator: SubsetEnumerator,
    stats: &mut SearchStats,
) -> AssortmentSolution {
    let evaluated = AtomicU64::new(0);

    let best = enumerator
        .enumerate()
        .par_bridge()
        .map(|(rank, assortment)| {
            evaluated.fetch_add(1, Ordering::Relaxed);
            Ranked {
                rank,
                revenue: catalog.expected_revenue(&assortment),
                assortment,
            }
        })
        .reduce_with(Ranked::better_of);

    stats.moves_evaluated = evaluated.into_inner();

    match best {
        Some(ranked) if ranked.revenue > 0.0 => {
            stats.moves_improving = 1;
            AssortmentSolution::new(ranked.revenue, ranked.assortment)
        }
        _ => AssortmentSolution::baseline(),
    }
}

impl AssortmentOptimizer for ExactOptimizer {
    fn optimize(
        &self,
        catalog: &MnlCatalog<'_>,
        cap: Option<usize>,
    ) -> Result<AssortmentSolution> {
        self.solve(catalog, cap)
    }

    fn name(&self) -> &'static str {
        "exact"
    }
}

/// Exact revenue-maximizing assortment for raw weight and revenue vectors.
///
/// # Errors
///
/// Fails on mismatched lengths, an empty catalog, negative or non-finite
/// values, or a zero cap.
///
/// # Example
///
/// ```
/// use assortopt_solver::search_best_assortment;
///
/// let best = search_best_assortment(&[1.0, 1.0, 1.0, 1.0], &[0.0, 1.0, 1.0, 1.0], None).unwrap();
/// assert_eq!(best.into_parts(), (0.75, vec![1, 2, 3]));
/// ```
pub fn search_best_assortment(
    weights: &[f64],
    revenues: &[f64],
    cap: Option<usize>,
) -> Result<AssortmentSolution> {
    let catalog = MnlCatalog::new(weights, revenues)?;
    ExactOptimizer::new().solve(&catalog, cap)
}
