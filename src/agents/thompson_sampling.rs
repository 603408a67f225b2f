//! Thompson sampling bandit policy
use super::{BanditPolicy, BuildPolicy, BuildPolicyError};
use crate::envs::RewardModel;
use crate::logging::Logger;
use crate::utils::iter::ArgMax;
use rand::distributions::Distribution;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::Beta;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Configuration for [`BetaThompsonSamplingBandit`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BetaThompsonSamplingConfig {
    /// Sampling precision. Reserved: accepted and stored for interface
    /// stability but not consumed by the posterior sampling.
    pub precision: f64,
}

impl BetaThompsonSamplingConfig {
    pub const fn new(precision: f64) -> Self {
        Self { precision }
    }
}

impl Default for BetaThompsonSamplingConfig {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl BuildPolicy for BetaThompsonSamplingConfig {
    type Policy = BetaThompsonSamplingBandit;

    fn build_policy(
        &self,
        model: &RewardModel,
        seed: u64,
    ) -> Result<BetaThompsonSamplingBandit, BuildPolicyError> {
        if !self.precision.is_finite() {
            return Err(BuildPolicyError::InvalidPrecision(self.precision));
        }
        Ok(BetaThompsonSamplingBandit::new(
            model.num_arms(),
            self.precision,
            seed,
        ))
    }
}

/// A Thompson sampling bandit policy with a Beta posterior per arm.
///
/// Every arm starts from the uniform `Beta(1, 1)` prior. Rewards are
/// expected to lie in [0, 1]; an update that would drive either shape
/// parameter non-positive resets both to 1.0 for that arm, keeping the
/// posterior well formed.
#[derive(Debug, Clone)]
pub struct BetaThompsonSamplingBandit {
    precision: f64,
    alpha: Vec<f64>,
    beta: Vec<f64>,
    rng: StdRng,
}

impl BetaThompsonSamplingBandit {
    pub fn new(num_arms: usize, precision: f64, seed: u64) -> Self {
        Self {
            precision,
            alpha: vec![1.0; num_arms],
            beta: vec![1.0; num_arms],
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Reserved precision parameter supplied at construction.
    pub fn precision(&self) -> f64 {
        self.precision
    }

    /// Beta shape parameters of the given arm; always strictly positive.
    pub fn posterior_params(&self, arm: usize) -> Option<(f64, f64)> {
        Some((*self.alpha.get(arm)?, *self.beta.get(arm)?))
    }
}

impl fmt::Display for BetaThompsonSamplingBandit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "BetaThompsonSamplingBandit({} arms, precision {})",
            self.alpha.len(),
            self.precision
        )
    }
}

impl BanditPolicy for BetaThompsonSamplingBandit {
    fn pull(&mut self) -> usize {
        let rng = &mut self.rng;
        self.alpha
            .iter()
            .zip(&self.beta)
            .map(|(&alpha, &beta)| {
                // Shape parameters are kept strictly positive so Beta::new cannot fail.
                Beta::new(alpha, beta).unwrap().sample(&mut *rng)
            })
            .argmax_by(|a, b| a.partial_cmp(b).unwrap())
            .expect("empty arm set")
    }

    fn update(&mut self, arm: usize, reward: f64, logger: &mut dyn Logger) {
        self.alpha[arm] += reward;
        self.beta[arm] += 1.0 - reward;
        if self.alpha[arm] <= 0.0 || self.beta[arm] <= 0.0 {
            // Out-of-range reward made the posterior invalid; fall back to the prior.
            self.alpha[arm] = 1.0;
            self.beta[arm] = 1.0;
        }
        logger.debug(&format!(
            "ThompsonSampling - arm {} selected, reward: {}",
            arm, reward
        ));
    }

    fn label(&self) -> &'static str {
        "ThompsonSampling"
    }
}
