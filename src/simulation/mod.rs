//! Running bandit experiments and reporting their results.
use crate::agents::{
    BanditPolicy, BetaThompsonSamplingConfig, BuildPolicy, EpsilonGreedyConfig,
};
use crate::envs::RewardModel;
use crate::error::BanditError;
use crate::logging::Logger;
use crate::reporting::ReportExporter;
use crate::utils::stats::OnlineMeanVariance;
use serde::{Deserialize, Serialize};

/// Reward and regret history accumulated over one experiment run.
///
/// Both sequences are append-only and parallel: entry `i` is the realized
/// reward of trial `i` and its regret against the best possible reward.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ExperimentHistory {
    rewards: Vec<f64>,
    regrets: Vec<f64>,
}

impl ExperimentHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Realized reward per trial, in trial order.
    pub fn rewards(&self) -> &[f64] {
        &self.rewards
    }

    /// Per-trial regret: the best possible reward minus the realized reward.
    pub fn regrets(&self) -> &[f64] {
        &self.regrets
    }

    /// Number of trials recorded.
    pub fn num_trials(&self) -> usize {
        self.rewards.len()
    }

    fn record(&mut self, reward: f64, regret: f64) {
        self.rewards.push(reward);
        self.regrets.push(regret);
    }

    /// Summarize the run and persist its reward series.
    ///
    /// Exports the per-trial rewards under `label` and logs the average
    /// reward and average regret at info level.
    ///
    /// # Errors
    /// [`BanditError::EmptyHistory`] if no trials were recorded and
    /// [`BanditError::Export`] if the exporter fails.
    pub fn report(
        &self,
        label: &str,
        exporter: &mut dyn ReportExporter,
        logger: &mut dyn Logger,
    ) -> Result<RunSummary, BanditError> {
        let reward_stats: OnlineMeanVariance<f64> = self.rewards.iter().copied().collect();
        let regret_stats: OnlineMeanVariance<f64> = self.regrets.iter().copied().collect();
        let mean_reward = reward_stats.mean().ok_or(BanditError::EmptyHistory)?;
        let mean_regret = regret_stats.mean().ok_or(BanditError::EmptyHistory)?;

        exporter.export(label, &self.rewards)?;
        logger.info(&format!("Average reward for {}: {}", label, mean_reward));
        logger.info(&format!("Average regret for {}: {}", label, mean_regret));

        Ok(RunSummary {
            label: label.to_owned(),
            num_trials: self.rewards.len() as u64,
            mean_reward,
            mean_regret,
        })
    }
}

/// Summary statistics of one experiment run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub label: String,
    pub num_trials: u64,
    pub mean_reward: f64,
    pub mean_regret: f64,
}

/// Run `num_trials` sequential trials of `policy` against `model`.
///
/// Each trial pulls an arm, looks up its ground-truth reward, records the
/// reward and its regret, and feeds the outcome back into the policy. Runs
/// exactly `num_trials` trials with no early termination.
///
/// # Errors
/// [`BanditError::NoTrials`] if `num_trials` is zero and
/// [`BanditError::ArmOutOfBounds`] if the policy selects an arm outside the
/// model, which indicates a policy bug.
pub fn run_experiment(
    policy: &mut dyn BanditPolicy,
    model: &RewardModel,
    num_trials: u64,
    logger: &mut dyn Logger,
) -> Result<ExperimentHistory, BanditError> {
    if num_trials == 0 {
        return Err(BanditError::NoTrials);
    }
    let mut history = ExperimentHistory::new();
    for _ in 0..num_trials {
        let arm = policy.pull();
        let reward = model.reward(arm)?;
        history.record(reward, model.max_reward() - reward);
        policy.update(arm, reward, logger);
    }
    Ok(history)
}

/// Summaries of both policies run against the same reward model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    pub epsilon_greedy: RunSummary,
    pub thompson_sampling: RunSummary,
}

/// Run epsilon-greedy and Thompson sampling against a shared reward model.
///
/// Both policies run for the same number of trials, with distinct RNG
/// streams derived from `seed`, and each run is reported through `exporter`
/// and `logger` under the policy's own label.
///
/// # Errors
/// Any error from building a policy, running its experiment, or reporting.
pub fn compare(
    model: &RewardModel,
    epsilon_greedy: EpsilonGreedyConfig,
    thompson_sampling: BetaThompsonSamplingConfig,
    num_trials: u64,
    seed: u64,
    exporter: &mut dyn ReportExporter,
    logger: &mut dyn Logger,
) -> Result<Comparison, BanditError> {
    let mut greedy = epsilon_greedy.build_policy(model, seed)?;
    let greedy_summary =
        run_experiment(&mut greedy, model, num_trials, logger)?.report(greedy.label(), exporter, logger)?;

    let mut sampling = thompson_sampling.build_policy(model, seed.wrapping_add(1))?;
    let sampling_summary = run_experiment(&mut sampling, model, num_trials, logger)?.report(
        sampling.label(),
        exporter,
        logger,
    )?;

    Ok(Comparison {
        epsilon_greedy: greedy_summary,
        thompson_sampling: sampling_summary,
    })
}
