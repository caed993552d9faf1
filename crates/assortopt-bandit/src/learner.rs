//! Learner side of a decision round and the round driver.

use tracing::{debug, info};

use assortopt_core::{AssortOptError, MnlCatalog, Result};
use assortopt_solver::{AssortmentOptimizer, ExactOptimizer};

use crate::environment::{BanditEnvironment, Purchase};

/// A policy choosing which assortment to offer each round.
///
/// Learners see the revenues and cap but not the attraction weights; those
/// must be inferred from the purchases fed back through
/// [`update`](MnlLearner::update).
pub trait MnlLearner {
    fn name(&self) -> &str;

    /// Prepares for a new run against a catalog of `item_count` items.
    fn reset(&mut self, item_count: usize, revenues: &[f64], cap: usize) -> Result<()>;

    /// The assortment to offer next.
    fn assortment(&mut self) -> Result<Vec<usize>>;

    /// Observes the outcome of offering `assortment`.
    fn update(&mut self, assortment: &[usize], purchase: &Purchase);
}

/// Learner that is told the true weights.
///
/// Offers the optimizer's answer every round, so its expected regret is zero
/// when the optimizer is exact. Useful as a baseline and for checking an
/// environment.
#[derive(Debug, Clone)]
pub struct OracleLearner<O = ExactOptimizer> {
    weights: Vec<f64>,
    optimizer: O,
    offer: Vec<usize>,
}

impl OracleLearner<ExactOptimizer> {
    /// Oracle driven by exact search.
    pub fn new(weights: Vec<f64>) -> Self {
        Self::with_optimizer(weights, ExactOptimizer::new())
    }
}

impl<O: AssortmentOptimizer> OracleLearner<O> {
    pub fn with_optimizer(weights: Vec<f64>, optimizer: O) -> Self {
        Self {
            weights,
            optimizer,
            offer: Vec::new(),
        }
    }

    /// The assortment chosen at the last reset.
    pub fn offer(&self) -> &[usize] {
        &self.offer
    }
}

impl<O: AssortmentOptimizer> MnlLearner for OracleLearner<O> {
    fn name(&self) -> &str {
        "oracle"
    }

    fn reset(&mut self, item_count: usize, revenues: &[f64], cap: usize) -> Result<()> {
        if item_count != self.weights.len() {
            return Err(AssortOptError::LengthMismatch {
                weights: self.weights.len(),
                revenues: item_count,
            });
        }
        let catalog = MnlCatalog::new(&self.weights, revenues)?;
        self.offer = self.optimizer.optimize(&catalog, Some(cap))?.assortment;

        debug!(
            event = "learner_reset",
            learner = "oracle",
            optimizer = self.optimizer.name(),
            offer = ?self.offer,
        );
        Ok(())
    }

    fn assortment(&mut self) -> Result<Vec<usize>> {
        Ok(self.offer.clone())
    }

    fn update(&mut self, _assortment: &[usize], _purchase: &Purchase) {}
}

/// Totals of one [`run_rounds`] call.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RoundsSummary {
    pub rounds: u64,
    /// Sum of realized purchase revenues.
    pub total_revenue: f64,
    /// Rounds ending in a purchase.
    pub purchases: u64,
    /// Environment regret against `total_revenue`.
    pub regret: f64,
}

impl RoundsSummary {
    /// Realized revenue per round.
    pub fn average_revenue(&self) -> f64 {
        if self.rounds == 0 {
            0.0
        } else {
            self.total_revenue / self.rounds as f64
        }
    }
}

/// Plays `rounds` rounds of `learner` against `env`.
///
/// Both sides are reset first. Stops at the first error from either side.
///
/// # Example
///
/// ```
/// use assortopt_bandit::{run_rounds, MnlBandit, OracleLearner};
///
/// let weights = vec![0.5, 0.5, 0.25, 0.25, 0.25, 0.25, 0.25, 0.25, 0.5, 0.5];
/// let mut env = MnlBandit::new(weights.clone(), vec![1.0; 10], 4).unwrap().with_seed(3);
/// let mut oracle = OracleLearner::new(weights);
///
/// let summary = run_rounds(&mut env, &mut oracle, 100).unwrap();
/// assert_eq!(summary.rounds, 100);
/// assert_eq!(oracle.offer(), &[0, 1, 8, 9]);
/// ```
pub fn run_rounds<E, L>(env: &mut E, learner: &mut L, rounds: u64) -> Result<RoundsSummary>
where
    E: BanditEnvironment + ?Sized,
    L: MnlLearner + ?Sized,
{
    env.reset();
    learner.reset(env.item_count(), env.revenues(), env.cardinality_cap())?;

    let mut summary = RoundsSummary::default();
    for _ in 0..rounds {
        let assortment = learner.assortment()?;
        let purchase = env.feed(&assortment)?;
        learner.update(&assortment, &purchase);

        summary.rounds += 1;
        summary.total_revenue += purchase.revenue;
        if !purchase.is_no_purchase() {
            summary.purchases += 1;
        }
    }
    summary.regret = env.regret(summary.total_revenue);

    info!(
        event = "rounds_end",
        learner = learner.name(),
        rounds = summary.rounds,
        purchases = summary.purchases,
        total_revenue = summary.total_revenue,
        regret = summary.regret,
    );

    Ok(summary)
}
