//! Shared test fixtures for assortopt crates.
//!
//! This crate provides catalog instances and an independent brute-force
//! reference. It does NOT depend on `assortopt-solver`, so the solver can
//! use it as a dev-dependency.
//!
//! - [`instance`] - Owned weight/revenue instances (fixed and seeded random)
//! - [`brute_force`] - Bitmask enumeration for cross-checking optimizers
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! assortopt-test = { workspace = true }
//! ```
//!
//! Then import the fixtures you need:
//!
//! ```ignore
//! use assortopt_test::instance::{random_instance, uniform_instance};
//! use assortopt_test::brute_force::best_revenue;
//! ```

pub mod brute_force;
pub mod instance;

pub use instance::{random_instance, reference_instance, uniform_instance, Instance};
