//! Local search assortment optimization
//!
//! Improves a seed assortment by steepest-ascent hill climbing over add,
//! remove and swap moves until no move strictly raises expected revenue.
//! The result is a local optimum; exact search gives an upper bound.

mod acceptor;
mod forager;
mod moves;
mod phase;
mod seed;
mod selector;

pub use acceptor::HillClimbingAcceptor;
pub use forager::SteepestAscentForager;
pub use moves::{AssortmentMove, WorkingAssortment};
pub use phase::{local_search_best_assortment, LocalSearchOptimizer};
pub use seed::SeedPolicy;
pub use selector::NeighborhoodSelector;
