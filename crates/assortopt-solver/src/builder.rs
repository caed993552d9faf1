//! Builds optimizers from configuration.

use assortopt_config::{OptimizerConfig, StrategyType};
use assortopt_core::{AssortmentSolution, MnlCatalog, Result};

use crate::adaptive::AdaptiveOptimizer;
use crate::exact::ExactOptimizer;
use crate::localsearch::{LocalSearchOptimizer, SeedPolicy};
use crate::optimizer::AssortmentOptimizer;

/// The optimizer selected by an [`OptimizerConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptimizerKind {
    Exact(ExactOptimizer),
    LocalSearch(LocalSearchOptimizer),
    Adaptive(AdaptiveOptimizer),
}

/// An optimizer together with the configured cardinality cap.
///
/// # Example
///
/// ```
/// use assortopt_config::{OptimizerConfig, StrategyType};
/// use assortopt_core::MnlCatalog;
/// use assortopt_solver::OptimizerBuilder;
///
/// let config = OptimizerConfig::new()
///     .with_strategy(StrategyType::Exact)
///     .with_cardinality_cap(2);
/// let optimizer = OptimizerBuilder::build(&config);
///
/// let weights = [1.0, 1.0, 1.0, 1.0];
/// let revenues = [0.0, 1.0, 1.0, 1.0];
/// let catalog = MnlCatalog::new(&weights, &revenues).unwrap();
/// let solution = optimizer.solve(&catalog).unwrap();
/// assert_eq!(solution.assortment, vec![1, 2]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfiguredOptimizer {
    kind: OptimizerKind,
    cardinality_cap: Option<usize>,
}

impl ConfiguredOptimizer {
    pub fn kind(&self) -> &OptimizerKind {
        &self.kind
    }

    pub fn cardinality_cap(&self) -> Option<usize> {
        self.cardinality_cap
    }

    /// Optimizes with the configured cap.
    pub fn solve(&self, catalog: &MnlCatalog<'_>) -> Result<AssortmentSolution> {
        self.optimize(catalog, self.cardinality_cap)
    }
}

impl AssortmentOptimizer for ConfiguredOptimizer {
    /// An explicit `cap` overrides the configured one.
    fn optimize(
        &self,
        catalog: &MnlCatalog<'_>,
        cap: Option<usize>,
    ) -> Result<AssortmentSolution> {
        let cap = cap.or(self.cardinality_cap);
        match &self.kind {
            OptimizerKind::Exact(optimizer) => optimizer.optimize(catalog, cap),
            OptimizerKind::LocalSearch(optimizer) => optimizer.optimize(catalog, cap),
            OptimizerKind::Adaptive(optimizer) => optimizer.optimize(catalog, cap),
        }
    }

    fn name(&self) -> &'static str {
        match &self.kind {
            OptimizerKind::Exact(optimizer) => optimizer.name(),
            OptimizerKind::LocalSearch(optimizer) => optimizer.name(),
            OptimizerKind::Adaptive(optimizer) => optimizer.name(),
        }
    }
}

/// Wires [`OptimizerConfig`] into concrete optimizers.
pub struct OptimizerBuilder;

impl OptimizerBuilder {
    /// Builds the exact optimizer described by `config.exact`.
    pub fn exact(config: &OptimizerConfig) -> ExactOptimizer {
        ExactOptimizer::new().with_parallel(config.exact.parallel)
    }

    /// Builds the local search optimizer described by `config.local_search`.
    pub fn local_search(config: &OptimizerConfig) -> LocalSearchOptimizer {
        LocalSearchOptimizer::new()
            .with_seed(SeedPolicy::from(config.local_search.seed))
            .with_step_limit(config.local_search.step_limit)
    }

    /// Builds the optimizer for `config.strategy`.
    pub fn build(config: &OptimizerConfig) -> ConfiguredOptimizer {
        let kind = match config.strategy {
            StrategyType::Exact => OptimizerKind::Exact(Self::exact(config)),
            StrategyType::LocalSearch => OptimizerKind::LocalSearch(Self::local_search(config)),
            StrategyType::Adaptive => OptimizerKind::Adaptive(AdaptiveOptimizer::new(
                Self::exact(config),
                Self::local_search(config),
                config.exact.item_limit,
            )),
        };
        ConfiguredOptimizer {
            kind,
            cardinality_cap: config.cardinality_cap,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assortopt_config::SeedPolicyConfig;
    use assortopt_test::uniform_instance;

    #[test]
    fn test_default_config_is_adaptive() {
        let optimizer = OptimizerBuilder::build(&OptimizerConfig::default());
        assert_eq!(optimizer.name(), "adaptive");
        assert_eq!(optimizer.cardinality_cap(), None);
    }

    #[test]
    fn test_local_search_settings_carried_over() {
        let config = OptimizerConfig::from_toml_str(
            r#"
            strategy = "local_search"
            [local_search]
            seed = "empty"
            step_limit = 2
            "#,
        )
        .unwrap();
        let optimizer = OptimizerBuilder::build(&config);
        match optimizer.kind() {
            OptimizerKind::LocalSearch(local) => {
                assert_eq!(local.seed(), &SeedPolicy::Empty);
                assert_eq!(local.step_limit(), Some(2));
            }
            other => panic!("expected local search, got {other:?}"),
        }
    }

    #[test]
    fn test_parallel_exact_flag() {
        let config = OptimizerConfig::new()
            .with_strategy(StrategyType::Exact)
            .with_parallel_exact(true);
        assert_eq!(
            OptimizerBuilder::build(&config).kind(),
            &OptimizerKind::Exact(ExactOptimizer::parallel())
        );
    }

    #[test]
    fn test_explicit_cap_overrides_config() {
        let instance = uniform_instance();
        let catalog = instance.catalog().unwrap();
        let config = OptimizerConfig::new()
            .with_strategy(StrategyType::LocalSearch)
            .with_seed_policy(SeedPolicyConfig::BestSingleton)
            .with_cardinality_cap(1);
        let optimizer = OptimizerBuilder::build(&config);

        assert_eq!(optimizer.solve(&catalog).unwrap().assortment, vec![1]);
        assert_eq!(
            optimizer.optimize(&catalog, Some(3)).unwrap().assortment,
            vec![1, 2, 3]
        );
    }
}
