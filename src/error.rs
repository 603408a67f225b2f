//! Error type
use crate::agents::BuildPolicyError;
use crate::reporting::ExportError;
use thiserror::Error;

/// Error from the bandit simulation crate.
#[derive(Debug, Error)]
pub enum BanditError {
    #[error("error building policy")]
    BuildPolicy(#[from] BuildPolicyError),
    #[error("error exporting results")]
    Export(#[from] ExportError),
    #[error("reward model has no arms")]
    NoArms,
    #[error("reward values are not totally ordered")]
    IncomparableRewards,
    #[error("arm index {arm} out of bounds for a model with {num_arms} arms")]
    ArmOutOfBounds { arm: usize, num_arms: usize },
    #[error("cannot report on an empty history")]
    EmptyHistory,
    #[error("an experiment requires at least one trial")]
    NoTrials,
}
