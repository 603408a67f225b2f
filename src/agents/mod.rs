//! Bandit arm-selection policies.
//!
//! Policies hold only their own decision state. Reward and regret
//! bookkeeping is owned by the experiment runner in
//! [`simulation`](crate::simulation).
mod epsilon_greedy;
mod thompson_sampling;

pub use epsilon_greedy::{EpsilonGreedyBandit, EpsilonGreedyConfig};
pub use thompson_sampling::{BetaThompsonSamplingBandit, BetaThompsonSamplingConfig};

use crate::envs::RewardModel;
use crate::logging::Logger;
use thiserror::Error;

/// An arm-selection policy for a multi-armed bandit.
///
/// `pull` and `update` must be invoked strictly alternately from one logical
/// thread of control per policy instance: exactly one `update` per `pull`,
/// with the arm that was pulled and the reward actually realized.
pub trait BanditPolicy {
    /// Choose an arm.
    ///
    /// Returns an index valid for the reward model the policy was built
    /// against. Consumes internal RNG state but has no other side effects.
    fn pull(&mut self) -> usize;

    /// Incorporate the observed outcome of the most recent pull.
    fn update(&mut self, arm: usize, reward: f64, logger: &mut dyn Logger);

    /// Stable name of this policy, used as a label for reporting.
    fn label(&self) -> &'static str;
}

/// Build a policy instance for a given reward model.
pub trait BuildPolicy {
    type Policy: BanditPolicy;

    /// Build a policy for `model`, seeding its RNG with `seed`.
    ///
    /// # Errors
    /// [`BuildPolicyError`] if the configuration is invalid.
    fn build_policy(
        &self,
        model: &RewardModel,
        seed: u64,
    ) -> Result<Self::Policy, BuildPolicyError>;
}

/// Error constructing a policy.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum BuildPolicyError {
    #[error("initial epsilon {0} is outside (0, 1]")]
    InvalidEpsilon(f64),
    #[error("precision {0} is not finite")]
    InvalidPrecision(f64),
}
