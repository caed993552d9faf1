//! MNL bandit environment and learner contract.
//!
//! The optimizers answer "what should be offered given these weights". This
//! crate supplies the loop around them:
//! - [`MnlBandit`], an environment with hidden attraction weights that
//!   samples one purchase per offered assortment and tracks regret
//! - [`BanditEnvironment`] and [`MnlLearner`], the two sides of a round
//! - [`OracleLearner`], which knows the weights and always offers the
//!   optimizer's answer
//! - [`run_rounds`], driving a learner against an environment

pub mod environment;
pub mod learner;
pub mod mnl;

pub use environment::{BanditEnvironment, Purchase};
pub use learner::{run_rounds, MnlLearner, OracleLearner, RoundsSummary};
pub use mnl::MnlBandit;
