//! assortopt - Assortment Optimization under the MNL Choice Model
//!
//! Pick the subset of items to offer that maximizes expected revenue when
//! customers choose according to a multinomial logit model.
//!
//! # Example
//!
//! ```rust
//! use assortopt::prelude::*;
//!
//! let weights = [1.0, 1.0, 1.0, 1.0];
//! let revenues = [0.0, 1.0, 1.0, 1.0];
//!
//! let exact = search_best_assortment(&weights, &revenues, None).unwrap();
//! let local = local_search_best_assortment(&weights, &revenues, None).unwrap();
//! assert_eq!(exact.assortment, vec![1, 2, 3]);
//! assert_eq!(local.revenue, exact.revenue);
//! ```

// Model types
pub use assortopt_core::{
    expected_revenue, AssortOptError, AssortmentSolution, MnlCatalog, Result, RevenueAccumulator,
};

// Configuration
pub use assortopt_config::{
    ConfigError, ExactSearchConfig, LocalSearchConfig, OptimizerConfig, SeedPolicyConfig,
    StrategyType,
};

// Optimizers
pub use assortopt_solver::{
    enumerate_subsets, local_search_best_assortment, search_best_assortment, subset_count,
    AdaptiveOptimizer, AssortmentOptimizer, ConfiguredOptimizer, ExactOptimizer,
    LocalSearchOptimizer, OptimizerBuilder, SearchStats, SeedPolicy, SubsetEnumerator,
};

// Bandit environment
pub use assortopt_bandit::{
    run_rounds, BanditEnvironment, MnlBandit, MnlLearner, OracleLearner, Purchase, RoundsSummary,
};

mod solver;
pub use solver::{optimize_assortment, optimize_with_config, optimize_with_file, CONFIG_FILE};

pub mod prelude {
    pub use super::{local_search_best_assortment, search_best_assortment};
    pub use super::{optimize_assortment, optimize_with_config};
    pub use super::{AssortOptError, AssortmentSolution, MnlCatalog};
    pub use super::{AssortmentOptimizer, ExactOptimizer, LocalSearchOptimizer, OptimizerBuilder};
    pub use super::{OptimizerConfig, StrategyType};
    pub use super::{BanditEnvironment, MnlBandit};
}
