//! assortopt Solver Engine
//!
//! This crate provides the assortment optimizers built on `assortopt-core`:
//! - Subset enumeration in include-first depth-first order
//! - Exact search over every feasible assortment (sequential or parallel)
//! - Steepest-ascent local search with add, remove and swap moves
//! - An adaptive strategy switching between the two by catalog size
//! - Configuration wiring (builder module)
//!
//! Every optimizer is a pure function of its inputs. They borrow weights
//! and revenues read-only and share no mutable state, so concurrent calls
//! from several threads need no locking.

pub mod adaptive;
pub mod builder;
pub mod enumerate;
pub mod exact;
pub mod localsearch;
pub mod optimizer;
pub mod stats;


pub use adaptive::AdaptiveOptimizer;
pub use builder::{ConfiguredOptimizer, OptimizerBuilder, OptimizerKind};
pub use enumerate::{enumerate_subsets, subset_count, SubsetEnumerator};
pub use exact::{search_best_assortment, ExactOptimizer};
pub use localsearch::{
    local_search_best_assortment, AssortmentMove, HillClimbingAcceptor, LocalSearchOptimizer,
    NeighborhoodSelector, SeedPolicy, SteepestAscentForager, WorkingAssortment,
};
pub use optimizer::AssortmentOptimizer;
pub use stats::SearchStats;
