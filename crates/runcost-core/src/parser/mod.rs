pub mod github;
pub mod model;

pub use github::GitHubActionsParser;
pub use model::{
    EmptyReason, JobSpec, MatrixAxis, MatrixStrategy, ParseOutcome, RunnerLabels, RunnerPlatform,
    StepSpec, TimeoutSetting, WorkflowDocument,
};
