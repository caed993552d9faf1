//! Optimizer entry points that hide the builder wiring.

use std::path::Path;

use tracing::debug;

use assortopt_config::OptimizerConfig;
use assortopt_core::{AssortOptError, AssortmentSolution, MnlCatalog, Result};
use assortopt_solver::OptimizerBuilder;

/// Configuration file read by [`optimize_assortment`].
pub const CONFIG_FILE: &str = "assortopt.toml";

/// Optimizes with [`CONFIG_FILE`] from the working directory, or the default
/// configuration if it is missing or unreadable.
pub fn optimize_assortment(weights: &[f64], revenues: &[f64]) -> Result<AssortmentSolution> {
    let config = match OptimizerConfig::load(CONFIG_FILE) {
        Ok(config) => config,
        Err(err) => {
            debug!(
                event = "config_fallback",
                path = CONFIG_FILE,
                error = %err,
            );
            OptimizerConfig::default()
        }
    };
    optimize_with_config(weights, revenues, &config)
}

/// Optimizes with an explicit configuration.
///
/// # Example
///
/// ```
/// use assortopt::{optimize_with_config, OptimizerConfig, StrategyType};
///
/// let config = OptimizerConfig::new()
///     .with_strategy(StrategyType::LocalSearch)
///     .with_cardinality_cap(2);
/// let best = optimize_with_config(&[1.0; 4], &[0.0, 1.0, 1.0, 1.0], &config).unwrap();
/// assert_eq!(best.assortment, vec![1, 2]);
/// ```
pub fn optimize_with_config(
    weights: &[f64],
    revenues: &[f64],
    config: &OptimizerConfig,
) -> Result<AssortmentSolution> {
    config
        .validate()
        .map_err(|err| AssortOptError::Config(err.to_string()))?;
    let catalog = MnlCatalog::new(weights, revenues)?;
    OptimizerBuilder::build(config).solve(&catalog)
}

/// Loads a configuration file and optimizes with it.
pub fn optimize_with_file(
    weights: &[f64],
    revenues: &[f64],
    path: impl AsRef<Path>,
) -> Result<AssortmentSolution> {
    let config =
        OptimizerConfig::load(path).map_err(|err| AssortOptError::Config(err.to_string()))?;
    optimize_with_config(weights, revenues, &config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assortopt_config::StrategyType;
    use assortopt_test::{random_instance, reference_instance};

    #[test]
    fn test_default_config_fallback() {
        let instance = reference_instance();
        let best = optimize_assortment(&instance.weights, &instance.revenues).unwrap();
        // Unbounded: every positive-weight item is worth offering.
        assert_eq!(best.assortment, (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn test_strategies_agree_on_small_instance() {
        let instance = random_instance(21, 8, Some(3));
        let mut revenues = Vec::new();
        for strategy in [StrategyType::Exact, StrategyType::Adaptive] {
            let config = OptimizerConfig::new()
                .with_strategy(strategy)
                .with_cardinality_cap(3);
            revenues.push(
                optimize_with_config(&instance.weights, &instance.revenues, &config)
                    .unwrap()
                    .revenue,
            );
        }
        assert_eq!(revenues[0], revenues[1]);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = OptimizerConfig::new();
        config.cardinality_cap = Some(0);
        let err = optimize_with_config(&[1.0], &[1.0], &config).unwrap_err();
        assert!(matches!(err, AssortOptError::Config(_)));
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let err = optimize_with_file(&[1.0], &[1.0], "does/not/exist.toml").unwrap_err();
        assert!(matches!(err, AssortOptError::Config(_)));
    }
}
