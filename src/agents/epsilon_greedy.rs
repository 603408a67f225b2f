//! Epsilon-greedy bandit policy
use super::{BanditPolicy, BuildPolicy, BuildPolicyError};
use crate::envs::RewardModel;
use crate::logging::Logger;
use crate::utils::iter::ArgMax;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Configuration for [`EpsilonGreedyBandit`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EpsilonGreedyConfig {
    /// Exploration probability at the start of a run. Must lie in (0, 1].
    pub initial_epsilon: f64,
}

impl EpsilonGreedyConfig {
    pub const fn new(initial_epsilon: f64) -> Self {
        Self { initial_epsilon }
    }
}

impl Default for EpsilonGreedyConfig {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl BuildPolicy for EpsilonGreedyConfig {
    type Policy = EpsilonGreedyBandit;

    fn build_policy(
        &self,
        model: &RewardModel,
        seed: u64,
    ) -> Result<EpsilonGreedyBandit, BuildPolicyError> {
        if !(self.initial_epsilon > 0.0 && self.initial_epsilon <= 1.0) {
            return Err(BuildPolicyError::InvalidEpsilon(self.initial_epsilon));
        }
        Ok(EpsilonGreedyBandit::new(
            model.num_arms(),
            self.initial_epsilon,
            seed,
        ))
    }
}

/// An epsilon-greedy bandit policy with a decaying exploration schedule.
///
/// Pulls a uniformly random arm with probability `epsilon`, otherwise the
/// arm with the highest running mean-reward estimate (first index on ties).
/// After every update `epsilon` becomes `1 / (k + 1)` where `k` is the total
/// number of updates so far, across all arms.
#[derive(Debug, Clone)]
pub struct EpsilonGreedyBandit {
    epsilon: f64,
    q_values: Vec<f64>,
    action_counts: Vec<u64>,
    rng: StdRng,
}

impl EpsilonGreedyBandit {
    pub fn new(num_arms: usize, initial_epsilon: f64, seed: u64) -> Self {
        Self {
            epsilon: initial_epsilon,
            q_values: vec![0.0; num_arms],
            action_counts: vec![0; num_arms],
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Current exploration probability.
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Running mean-reward estimate per arm.
    pub fn q_values(&self) -> &[f64] {
        &self.q_values
    }

    /// Number of times each arm has been updated.
    pub fn action_counts(&self) -> &[u64] {
        &self.action_counts
    }
}

impl fmt::Display for EpsilonGreedyBandit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "EpsilonGreedyBandit({} arms, epsilon {})",
            self.q_values.len(),
            self.epsilon
        )
    }
}

impl BanditPolicy for EpsilonGreedyBandit {
    fn pull(&mut self) -> usize {
        if self.rng.gen::<f64>() < self.epsilon {
            self.rng.gen_range(0..self.q_values.len())
        } else {
            // Estimates are finite so partial_cmp cannot fail.
            self.q_values
                .iter()
                .argmax_by(|a, b| a.partial_cmp(b).unwrap())
                .expect("empty arm set")
        }
    }

    fn update(&mut self, arm: usize, reward: f64, _logger: &mut dyn Logger) {
        self.action_counts[arm] += 1;
        self.q_values[arm] += (reward - self.q_values[arm]) / self.action_counts[arm] as f64;
        let total_updates: u64 = self.action_counts.iter().sum();
        self.epsilon = 1.0 / (total_updates + 1) as f64;
    }

    fn label(&self) -> &'static str {
        "EpsilonGreedy"
    }
}

#[cfg(test)]
mod epsilon_greedy {
    use super::*;
    use rstest::rstest;

    fn model(rewards: Vec<f64>) -> RewardModel {
        RewardModel::new(rewards).unwrap()
    }

    #[test]
    fn build_initializes_empty_estimates() {
        let policy = EpsilonGreedyConfig::new(0.5)
            .build_policy(&model(vec![1.0, 2.0, 3.0]), 0)
            .unwrap();
        assert_eq!(policy.epsilon(), 0.5);
        assert_eq!(policy.q_values(), &[0.0, 0.0, 0.0]);
        assert_eq!(policy.action_counts(), &[0, 0, 0]);
    }

    #[rstest]
    #[case(0.0)]
    #[case(-0.1)]
    #[case(1.5)]
    #[case(f64::NAN)]
    fn build_rejects_invalid_epsilon(#[case] epsilon: f64) {
        let result = EpsilonGreedyConfig::new(epsilon).build_policy(&model(vec![1.0]), 0);
        assert!(matches!(result, Err(BuildPolicyError::InvalidEpsilon(_))));
    }

    #[test]
    fn single_update_bookkeeping() {
        // One forced-exploration pull of arm 0 against rewards [1.0, 5.0, 3.0].
        let mut policy = EpsilonGreedyBandit::new(3, 1.0, 0);
        policy.update(0, 1.0, &mut ());
        assert_eq!(policy.action_counts(), &[1, 0, 0]);
        assert_eq!(policy.q_values(), &[1.0, 0.0, 0.0]);
        assert_eq!(policy.epsilon(), 0.5);
    }

    #[rstest]
    #[case(1)]
    #[case(7)]
    #[case(100)]
    fn epsilon_decays_with_total_updates(#[case] k: u64) {
        let mut policy = EpsilonGreedyBandit::new(2, 1.0, 0);
        for i in 0..k {
            policy.update((i % 2) as usize, 1.0, &mut ());
        }
        assert_eq!(policy.epsilon(), 1.0 / (k + 1) as f64);
    }

    #[test]
    fn greedy_pull_is_argmax_of_estimates() {
        // Epsilon 0 disables exploration entirely.
        let mut policy = EpsilonGreedyBandit::new(3, 0.0, 0);
        policy.update(2, 10.0, &mut ());
        policy.epsilon = 0.0;
        for _ in 0..20 {
            assert_eq!(policy.pull(), 2);
        }
    }

    #[test]
    fn greedy_pull_breaks_ties_by_first_index() {
        let mut policy = EpsilonGreedyBandit::new(4, 0.0, 0);
        assert_eq!(policy.pull(), 0);
        policy.update(1, 3.0, &mut ());
        policy.update(3, 3.0, &mut ());
        policy.epsilon = 0.0;
        assert_eq!(policy.pull(), 1);
    }

    #[test]
    fn incremental_mean_matches_batch_mean() {
        let mut policy = EpsilonGreedyBandit::new(1, 1.0, 0);
        for reward in [2.0, 4.0, 9.0] {
            policy.update(0, reward, &mut ());
        }
        assert!((policy.q_values()[0] - 5.0).abs() < 1e-12);
    }

    #[test]
    fn exploring_pull_stays_in_bounds() {
        let mut policy = EpsilonGreedyBandit::new(5, 1.0, 17);
        for _ in 0..100 {
            assert!(policy.pull() < 5);
        }
    }

    #[test]
    fn config_serde_round_trip() {
        let config = EpsilonGreedyConfig::new(0.25);
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(
            serde_json::from_str::<EpsilonGreedyConfig>(&json).unwrap(),
            config
        );
    }
}
