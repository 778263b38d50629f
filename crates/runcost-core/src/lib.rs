pub mod analyzer;
pub mod config;
pub mod cost;
pub mod discovery;
pub mod error;
pub mod parser;
pub mod rules;

pub use analyzer::report::{Finding, JobCost, Report, Severity};
pub use analyzer::{analyze, Analyzer};
pub use config::AnalyzerConfig;
pub use cost::{estimate_job_cost, CostModel, RunnerPricing};
pub use parser::github::GitHubActionsParser;
pub use parser::model::{JobSpec, ParseOutcome, RunnerPlatform, StepSpec, WorkflowDocument};
pub use rules::{Rule, RuleSet, RULES};
