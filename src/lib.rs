//! A multi-armed bandit simulation library.
//!
//! Simulates and compares bandit arm-selection policies against a fixed
//! [`RewardModel`], recording per-trial reward and regret and exporting the
//! results through a [`reporting::ReportExporter`]. Diagnostics go through a
//! [`logging::Logger`] capability; both collaborators are passed in
//! explicitly rather than accessed globally.
#![warn(clippy::cast_lossless)]
#![warn(clippy::doc_markdown)]
#![warn(clippy::explicit_iter_loop)]
#![warn(clippy::needless_borrow)]
#![warn(clippy::needless_pass_by_value)]
#![warn(clippy::redundant_closure_for_method_calls)]
#![warn(clippy::use_self)]
pub mod agents;
pub mod envs;
mod error;
pub mod logging;
pub mod reporting;
pub mod simulation;
pub mod utils;

pub use agents::{
    BanditPolicy, BetaThompsonSamplingBandit, BetaThompsonSamplingConfig, BuildPolicy,
    EpsilonGreedyBandit, EpsilonGreedyConfig,
};
pub use envs::RewardModel;
pub use error::BanditError;
pub use simulation::{compare, run_experiment, Comparison, ExperimentHistory, RunSummary};
