//! Tests for optimizer configuration.

use super::*;

#[test]
fn test_toml_parsing() {
    let toml = r#"
        strategy = "exact"
        cardinality_cap = 3
        random_seed = 42

        [exact]
        parallel = true
        item_limit = 12

        [local_search]
        seed = "best_singleton"
    "#;

    let config = OptimizerConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.strategy, StrategyType::Exact);
    assert_eq!(config.cardinality_cap, Some(3));
    assert_eq!(config.random_seed, Some(42));
    assert!(config.exact.parallel);
    assert_eq!(config.exact.item_limit, 12);
    assert_eq!(config.local_search.seed, SeedPolicyConfig::BestSingleton);
    assert_eq!(config.local_search.step_limit, None);
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        strategy: adaptive
        random_seed: 7
        exact:
          parallel: false
        local_search:
          seed: empty
          step_limit: 100
    "#;

    let config = OptimizerConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.strategy, StrategyType::Adaptive);
    assert_eq!(config.random_seed, Some(7));
    assert_eq!(config.exact.item_limit, DEFAULT_EXACT_ITEM_LIMIT);
    assert_eq!(config.local_search.seed, SeedPolicyConfig::Empty);
    assert_eq!(config.local_search.step_limit, Some(100));
}

#[test]
fn test_empty_document_gives_defaults() {
    let config = OptimizerConfig::from_toml_str("").unwrap();
    assert_eq!(config, OptimizerConfig::default());
    assert_eq!(config.strategy, StrategyType::Adaptive);
    assert_eq!(config.cardinality_cap, None);
}

#[test]
fn test_zero_cap_rejected() {
    let err = OptimizerConfig::from_toml_str("cardinality_cap = 0").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn test_unknown_strategy_rejected() {
    let err = OptimizerConfig::from_toml_str(r#"strategy = "genetic""#).unwrap_err();
    assert!(matches!(err, ConfigError::Toml(_)));
}

#[test]
fn test_missing_file_is_io_error() {
    let err = OptimizerConfig::load("/nonexistent/assortopt.toml").unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn test_builder() {
    let config = OptimizerConfig::new()
        .with_strategy(StrategyType::LocalSearch)
        .with_cardinality_cap(5)
        .with_random_seed(123)
        .with_parallel_exact(true)
        .with_seed_policy(SeedPolicyConfig::Empty);

    assert_eq!(config.strategy, StrategyType::LocalSearch);
    assert_eq!(config.cardinality_cap, Some(5));
    assert_eq!(config.random_seed, Some(123));
    assert!(config.exact.parallel);
    assert_eq!(config.local_search.seed, SeedPolicyConfig::Empty);
    assert!(config.validate().is_ok());
}
