//! assortopt Core - Core types for MNL assortment optimization
//!
//! This crate provides the fundamental abstractions shared by the optimizers
//! and the bandit environment:
//! - [`MnlCatalog`], a validated read-only view over attraction weights and revenues
//! - [`RevenueAccumulator`] for incremental expected-revenue evaluation
//! - [`AssortmentSolution`], the result of every optimizer call
//! - The error type and `Result` alias

pub mod catalog;
pub mod error;
pub mod revenue;
pub mod solution;

pub use catalog::MnlCatalog;
pub use error::{AssortOptError, Result};
pub use revenue::{expected_revenue, RevenueAccumulator};
pub use solution::AssortmentSolution;
