//! Bandit reward environments.
use crate::error::BanditError;
use crate::utils::iter::{PartialMax, PartialMaxError};
use std::fmt;

/// A deterministic multi-armed bandit: one fixed ground-truth reward per arm.
///
/// Arm indices are 0-based positions into the reward sequence.
/// Immutable after construction, so it can be shared freely across
/// concurrently running policy instances.
#[derive(Debug, Clone, PartialEq)]
pub struct RewardModel {
    rewards: Vec<f64>,
    max_reward: f64,
}

impl RewardModel {
    /// Create a reward model from per-arm ground-truth rewards.
    ///
    /// # Errors
    /// [`BanditError::NoArms`] if `rewards` is empty and
    /// [`BanditError::IncomparableRewards`] if any reward is NaN.
    pub fn new(rewards: Vec<f64>) -> Result<Self, BanditError> {
        let max_reward = rewards
            .iter()
            .copied()
            .partial_max()
            .map_err(|err| match err {
                PartialMaxError::Empty => BanditError::NoArms,
                PartialMaxError::Incomparable => BanditError::IncomparableRewards,
            })?;
        Ok(Self {
            rewards,
            max_reward,
        })
    }

    /// Number of arms.
    pub fn num_arms(&self) -> usize {
        self.rewards.len()
    }

    /// Ground-truth reward of the given arm.
    ///
    /// # Errors
    /// [`BanditError::ArmOutOfBounds`] if `arm` is not a valid index.
    pub fn reward(&self, arm: usize) -> Result<f64, BanditError> {
        self.rewards
            .get(arm)
            .copied()
            .ok_or(BanditError::ArmOutOfBounds {
                arm,
                num_arms: self.rewards.len(),
            })
    }

    /// The largest ground-truth reward over all arms.
    pub fn max_reward(&self) -> f64 {
        self.max_reward
    }

    /// All per-arm rewards in arm-index order.
    pub fn rewards(&self) -> &[f64] {
        &self.rewards
    }
}

impl fmt::Display for RewardModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "RewardModel({:?})", self.rewards)
    }
}

#[cfg(test)]
mod reward_model {
    use super::*;

    #[test]
    fn lookup_and_max() {
        let model = RewardModel::new(vec![1.0, 5.0, 3.0]).unwrap();
        assert_eq!(model.num_arms(), 3);
        assert_eq!(model.reward(1).unwrap(), 5.0);
        assert_eq!(model.max_reward(), 5.0);
    }

    #[test]
    fn empty_is_an_error() {
        assert!(matches!(
            RewardModel::new(vec![]),
            Err(BanditError::NoArms)
        ));
    }

    #[test]
    fn nan_reward_is_an_error() {
        assert!(matches!(
            RewardModel::new(vec![0.5, f64::NAN]),
            Err(BanditError::IncomparableRewards)
        ));
    }

    #[test]
    fn out_of_bounds_arm_is_an_error() {
        let model = RewardModel::new(vec![0.2, 0.8]).unwrap();
        assert!(matches!(
            model.reward(2),
            Err(BanditError::ArmOutOfBounds {
                arm: 2,
                num_arms: 2
            })
        ));
    }

    #[test]
    fn max_with_equal_rewards() {
        let model = RewardModel::new(vec![2.0, 2.0]).unwrap();
        assert_eq!(model.max_reward(), 2.0);
    }
}
