//! MNL bandit environment.
//!
//! Logging levels:
//! - **DEBUG**: Environment construction with the optimal assortment
//! - **TRACE**: Every feed with its sampled outcome

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace};

use assortopt_config::OptimizerConfig;
use assortopt_core::{AssortmentSolution, MnlCatalog, Result};
use assortopt_solver::{AssortmentOptimizer, ExactOptimizer, OptimizerBuilder};

use crate::environment::{BanditEnvironment, Purchase};

/// Environment with hidden attraction weights and public revenues.
///
/// Each [`feed`](MnlBandit::feed) samples one customer choice from the MNL
/// probabilities of the offered assortment and adds the optimal expected
/// revenue to the regret baseline.
///
/// # Example
///
/// ```
/// use assortopt_bandit::{BanditEnvironment, MnlBandit};
///
/// let weights = vec![0.5, 0.5, 0.25, 0.25, 0.25, 0.25, 0.25, 0.25, 0.5, 0.5];
/// let revenues = vec![1.0; 10];
/// let mut bandit = MnlBandit::new(weights, revenues, 4).unwrap().with_seed(42);
///
/// for _ in 0..3 {
///     bandit.feed(&[1]).unwrap();
/// }
/// assert!((bandit.regret(0.0) - 2.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct MnlBandit {
    weights: Vec<f64>,
    revenues: Vec<f64>,
    cap: usize,
    best: AssortmentSolution,
    rng: StdRng,
    optimal_rewards: f64,
    rounds: u64,
}

impl MnlBandit {
    /// Creates an environment whose optimum is found by exact search.
    ///
    /// # Errors
    ///
    /// Fails on any catalog validation error or a zero cap.
    pub fn new(weights: Vec<f64>, revenues: Vec<f64>, cap: usize) -> Result<Self> {
        Self::with_optimizer(weights, revenues, cap, &ExactOptimizer::new())
    }

    /// Creates an environment whose optimum is found by `optimizer`.
    ///
    /// With an approximate optimizer the regret baseline is a local optimum
    /// and regret may turn negative.
    pub fn with_optimizer<O>(
        weights: Vec<f64>,
        revenues: Vec<f64>,
        cap: usize,
        optimizer: &O,
    ) -> Result<Self>
    where
        O: AssortmentOptimizer + ?Sized,
    {
        let catalog = MnlCatalog::new(&weights, &revenues)?;
        let cap = catalog.resolve_cap(Some(cap))?;
        let best = optimizer.optimize(&catalog, Some(cap))?;

        debug!(
            event = "bandit_created",
            item_count = catalog.len(),
            cardinality_cap = cap,
            optimizer = optimizer.name(),
            best_revenue = best.revenue,
            best_assortment = ?best.assortment,
        );

        Ok(Self {
            weights,
            revenues,
            cap,
            best,
            rng: StdRng::from_os_rng(),
            optimal_rewards: 0.0,
            rounds: 0,
        })
    }

    /// Creates an environment from configuration.
    ///
    /// Uses the configured strategy to find the optimum, the configured cap
    /// (catalog size if unset), and `random_seed` for the sampler.
    pub fn from_config(
        weights: Vec<f64>,
        revenues: Vec<f64>,
        config: &OptimizerConfig,
    ) -> Result<Self> {
        let cap = config.cardinality_cap.unwrap_or(weights.len());
        let optimizer = OptimizerBuilder::build(config);
        let bandit = Self::with_optimizer(weights, revenues, cap, &optimizer)?;
        Ok(match config.random_seed {
            Some(seed) => bandit.with_seed(seed),
            None => bandit,
        })
    }

    /// Reseeds the purchase sampler.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Optimal expected revenue per round.
    pub fn best_revenue(&self) -> f64 {
        self.best.revenue
    }

    /// Assortment achieving [`best_revenue`](Self::best_revenue).
    pub fn best_assortment(&self) -> &[usize] {
        &self.best.assortment
    }

    /// Rounds fed since construction or the last reset.
    pub fn rounds(&self) -> u64 {
        self.rounds
    }

    /// Expected revenue of offering `assortment`.
    pub fn expected_revenue(&self, assortment: &[usize]) -> Result<f64> {
        let catalog = self.catalog()?;
        catalog.validate_assortment(assortment, self.cap)?;
        Ok(catalog.expected_revenue(assortment))
    }

    /// Choice probabilities of the offered items and of no purchase.
    pub fn purchase_probabilities(&self, assortment: &[usize]) -> Result<(Vec<f64>, f64)> {
        let catalog = self.catalog()?;
        catalog.validate_assortment(assortment, self.cap)?;
        Ok(catalog.choice_probabilities(assortment))
    }

    fn catalog(&self) -> Result<MnlCatalog<'_>> {
        MnlCatalog::new(&self.weights, &self.revenues)
    }
}

impl BanditEnvironment for MnlBandit {
    fn item_count(&self) -> usize {
        self.weights.len()
    }

    fn cardinality_cap(&self) -> usize {
        self.cap
    }

    fn revenues(&self) -> &[f64] {
        &self.revenues
    }

    /// Offers `assortment`; the empty assortment always yields no purchase.
    ///
    /// # Errors
    ///
    /// Returns [`assortopt_core::AssortOptError::InvalidAssortment`] for duplicate or
    /// out-of-range items, or more items than the cap. Rejected feeds do not
    /// count as rounds.
    fn feed(&mut self, assortment: &[usize]) -> Result<Purchase> {
        let (probabilities, _) = self.purchase_probabilities(assortment)?;

        let draw: f64 = self.rng.random();
        let mut cumulative = 0.0;
        let mut chosen = None;
        for (&item, &p) in assortment.iter().zip(&probabilities) {
            cumulative += p;
            if draw < cumulative {
                chosen = Some(item);
                break;
            }
        }

        let purchase = match chosen {
            Some(item) => Purchase {
                item: Some(item),
                revenue: self.revenues[item],
            },
            None => Purchase::none(),
        };

        self.optimal_rewards += self.best.revenue;
        self.rounds += 1;

        trace!(
            event = "feed",
            round = self.rounds,
            assortment = ?assortment,
            item = ?purchase.item,
            revenue = purchase.revenue,
        );

        Ok(purchase)
    }

    fn regret(&self, rewards: f64) -> f64 {
        self.optimal_rewards - rewards
    }

    /// Clears the regret baseline and round counter. The sampler keeps its
    /// state.
    fn reset(&mut self) {
        self.optimal_rewards = 0.0;
        self.rounds = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assortopt_config::StrategyType;
    use assortopt_core::AssortOptError;
    use assortopt_test::{random_instance, reference_instance};

    fn reference_bandit() -> MnlBandit {
        let instance = reference_instance();
        MnlBandit::new(instance.weights, instance.revenues, 4)
            .unwrap()
            .with_seed(7)
    }

    #[test]
    fn test_reference_regret() {
        let mut bandit = reference_bandit();
        bandit.feed(&[1]).unwrap();
        bandit.feed(&[1]).unwrap();
        bandit.feed(&[1]).unwrap();
        assert!((bandit.regret(0.0) - 2.0).abs() < 1e-12);
        assert_eq!(bandit.rounds(), 3);
    }

    #[test]
    fn test_best_assortment_known() {
        let bandit = reference_bandit();
        assert_eq!(bandit.best_assortment(), &[0, 1, 8, 9]);
        assert!((bandit.best_revenue() - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_reset_clears_regret() {
        let mut bandit = reference_bandit();
        bandit.feed(&[0, 1]).unwrap();
        bandit.reset();
        assert_eq!(bandit.regret(0.0), 0.0);
        assert_eq!(bandit.rounds(), 0);
    }

    #[test]
    fn test_invalid_feeds_rejected() {
        let mut bandit = reference_bandit();
        for bad in [&[0, 0][..], &[10][..], &[0, 1, 2, 3, 4][..]] {
            let err = bandit.feed(bad).unwrap_err();
            assert!(matches!(err, AssortOptError::InvalidAssortment(_)));
        }
        assert_eq!(bandit.rounds(), 0);
    }

    #[test]
    fn test_empty_feed_never_purchases() {
        let mut bandit = reference_bandit();
        for _ in 0..20 {
            assert!(bandit.feed(&[]).unwrap().is_no_purchase());
        }
    }

    #[test]
    fn test_purchases_come_from_offer() {
        let mut bandit = reference_bandit();
        for _ in 0..200 {
            let purchase = bandit.feed(&[2, 8]).unwrap();
            match purchase.item {
                Some(item) => {
                    assert!(item == 2 || item == 8);
                    assert_eq!(purchase.revenue, 1.0);
                }
                None => assert_eq!(purchase.revenue, 0.0),
            }
        }
    }

    #[test]
    fn test_empirical_frequencies_follow_mnl() {
        // Offer {0, 8}: each bought with probability 0.5 / 2 = 0.25.
        let mut bandit = reference_bandit();
        let rounds = 20_000;
        let mut bought = 0;
        for _ in 0..rounds {
            if !bandit.feed(&[0, 8]).unwrap().is_no_purchase() {
                bought += 1;
            }
        }
        let rate = bought as f64 / rounds as f64;
        assert!((rate - 0.5).abs() < 0.03, "purchase rate {rate}");
    }

    #[test]
    fn test_seeded_runs_repeat() {
        let mut a = reference_bandit();
        let mut b = reference_bandit();
        for _ in 0..50 {
            assert_eq!(a.feed(&[0, 2, 9]).unwrap(), b.feed(&[0, 2, 9]).unwrap());
        }
    }

    #[test]
    fn test_expected_revenue_and_probabilities() {
        let bandit = reference_bandit();
        assert!((bandit.expected_revenue(&[0, 1]).unwrap() - 0.5).abs() < 1e-12);
        let (items, none) = bandit.purchase_probabilities(&[0, 1]).unwrap();
        assert_eq!(items, vec![0.25, 0.25]);
        assert_eq!(none, 0.5);
    }

    #[test]
    fn test_construction_errors() {
        assert!(matches!(
            MnlBandit::new(vec![1.0, 1.0], vec![1.0], 1).unwrap_err(),
            AssortOptError::LengthMismatch { .. }
        ));
        assert_eq!(
            MnlBandit::new(vec![1.0], vec![1.0], 0).unwrap_err(),
            AssortOptError::InvalidCardinality(0)
        );
    }

    #[test]
    fn test_from_config() {
        let instance = random_instance(5, 30, None);
        let config = OptimizerConfig::new()
            .with_strategy(StrategyType::LocalSearch)
            .with_cardinality_cap(3)
            .with_random_seed(1);
        let bandit = MnlBandit::from_config(instance.weights, instance.revenues, &config).unwrap();
        assert_eq!(bandit.cardinality_cap(), 3);
        assert!(bandit.best_assortment().len() <= 3);
        assert!(bandit.best_revenue() > 0.0);
    }
}
