pub mod report;
pub mod sarif;
pub mod summary;

use crate::config::AnalyzerConfig;
use crate::cost::CostModel;
use crate::parser::github::GitHubActionsParser;
use crate::parser::model::{EmptyReason, ParseOutcome, WorkflowDocument};
use crate::rules::RuleSet;
use log::{debug, info};
use report::{JobCost, Report};

/// Runs the cost model and rule set over workflow documents.
///
/// Holds no per-document state, so one analyzer can be shared across files
/// (and threads).
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    cost_model: CostModel,
    rules: RuleSet,
}

impl Analyzer {
    pub fn new(cost_model: CostModel, rules: RuleSet) -> Self {
        Self { cost_model, rules }
    }

    pub fn from_config(config: &AnalyzerConfig) -> Self {
        let rules = RuleSet::new(config.rules.disabled.clone());
        for summary in rules.disabled_summaries() {
            debug!("Rule disabled: {}", summary);
        }
        Self::new(config.cost.clone(), rules)
    }

    /// Analyze raw workflow text. `identifier` is only copied into the report.
    pub fn analyze(&self, content: &str, identifier: &str) -> Report {
        match GitHubActionsParser::parse(content) {
            ParseOutcome::Document(doc) => self.analyze_document(&doc, identifier),
            ParseOutcome::Empty(reason) => {
                match reason {
                    EmptyReason::Syntax(e) => debug!("{}: not valid YAML ({})", identifier, e),
                    EmptyReason::NotAMapping(kind) => {
                        debug!("{}: top-level value is a {}, not a mapping", identifier, kind)
                    }
                }
                Report::empty(identifier)
            }
        }
    }

    /// Analyze an already parsed workflow.
    pub fn analyze_document(&self, doc: &WorkflowDocument, identifier: &str) -> Report {
        let mut report = Report::empty(identifier);

        report.findings.extend(self.rules.evaluate_workflow(doc));

        for job in &doc.jobs {
            let platform = job.platform();
            let fanout = job.matrix.fanout();
            let timeout = job
                .timeout
                .minutes_or(self.cost_model.default_timeout_minutes);
            let monthly_cost = self.cost_model.estimate_job_cost(platform, timeout, fanout);

            debug!(
                "{}: job '{}' on {} x{} -> ${:.2}/mo",
                identifier,
                job.name,
                platform.label(),
                fanout,
                monthly_cost
            );

            report.cost += monthly_cost;
            report.job_costs.push(JobCost {
                job: job.name.clone(),
                platform,
                fanout,
                monthly_cost,
            });
            report.findings.extend(self.rules.evaluate_job(job));
        }

        report.savings = report.findings.iter().map(|f| f.savings).sum();

        info!(
            "{}: {} jobs, {} findings, ${:.2}/mo estimated",
            identifier,
            doc.jobs.len(),
            report.findings.len(),
            report.cost
        );

        report
    }
}

/// Analyze workflow text with the default cost model and every rule enabled.
pub fn analyze(content: &str, identifier: &str) -> Report {
    Analyzer::default().analyze(content, identifier)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cost::RunnerPricing;
    use crate::parser::model::RunnerPlatform;

    const WF_BAD: &str = r#"
name: CI
on: [push, pull_request]
jobs:
  build:
    runs-on: ubuntu-latest
    steps:
      - uses: actions/checkout@v4
      - run: pip install -r requirements.txt
      - run: pytest
"#;

    const WF_GOOD: &str = r#"
name: CI
on: [push]
concurrency:
  group: ci-test
  cancel-in-progress: true
jobs:
  test:
    runs-on: ubuntu-latest
    timeout-minutes: 15
    steps:
      - uses: actions/checkout@v4
      - uses: actions/cache@v3
      - run: pip install -r requirements.txt
      - run: pytest
"#;

    const WF_MACOS: &str = r#"
name: macOS Build
on: [push]
jobs:
  build:
    runs-on: macos-latest
    timeout-minutes: 20
    steps:
      - uses: actions/checkout@v4
        with:
          fetch-depth: 0
      - run: echo hello
"#;

    #[test]
    fn test_bad_workflow_findings_in_order() {
        let report = analyze(WF_BAD, "ci.yml");
        assert_eq!(report.path, "ci.yml");
        assert_eq!(report.rule_ids(), vec!["RC003", "RC001", "RC002"]);
        assert_eq!(report.findings[0].job, report::WORKFLOW_SCOPE);
        assert_eq!(report.findings[1].job, "build");
    }

    #[test]
    fn test_good_workflow_zero_findings() {
        let report = analyze(WF_GOOD, "ci.yml");
        assert!(report.findings.is_empty());
        assert!(report.cost > 0.0);
        assert_eq!(report.savings, 0.0);
    }

    #[test]
    fn test_macos_workflow() {
        let report = analyze(WF_MACOS, "mac.yml");
        assert_eq!(report.rule_ids(), vec!["RC004", "RC005"]);
        // 0.08 * 15 * 100
        assert!((report.cost - 120.0).abs() < 1e-9);
    }

    #[test]
    fn test_savings_equals_sum_of_findings() {
        let report = analyze(WF_BAD, "ci.yml");
        let sum: f64 = report.findings.iter().map(|f| f.savings).sum();
        assert_eq!(report.savings, sum);
        assert_eq!(report.savings, 30.0 + 15.0 + 50.0);
    }

    #[test]
    fn test_empty_inputs_yield_empty_report() {
        for content in ["", "null", "42", "[]", ":::invalid yaml:::", "{{{"] {
            let report = analyze(content, "x.yml");
            assert!(report.findings.is_empty(), "findings for {:?}", content);
            assert_eq!(report.cost, 0.0);
            assert_eq!(report.savings, 0.0);
            assert_eq!(report.path, "x.yml");
        }
    }

    #[test]
    fn test_idempotent() {
        assert_eq!(analyze(WF_BAD, "ci.yml"), analyze(WF_BAD, "ci.yml"));
    }

    #[test]
    fn test_job_costs_sum_to_total() {
        let yaml = r#"
on: push
jobs:
  linux:
    runs-on: ubuntu-latest
    timeout-minutes: 10
  windows:
    runs-on: windows-latest
    timeout-minutes: 5
    strategy:
      matrix:
        python: ["3.11", "3.12"]
"#;
        let report = analyze(yaml, "ci.yml");
        assert_eq!(report.job_costs.len(), 2);
        assert_eq!(report.job_costs[1].fanout, 2);
        let sum: f64 = report.job_costs.iter().map(|j| j.monthly_cost).sum();
        assert_eq!(report.cost, sum);
        // 0.008 * 10 * 100 + 0.016 * 5 * 100 * 2
        assert!((report.cost - 24.0).abs() < 1e-9);
    }

    #[test]
    fn test_runner_group_billed_by_its_labels() {
        let mac_group = r#"
on: push
jobs:
  build:
    runs-on:
      group: mac-pool
      labels: [macos-14]
    timeout-minutes: 15
"#;
        let report = analyze(mac_group, "mac.yml");
        assert_eq!(report.job_costs[0].platform, RunnerPlatform::MacOs);
        assert!((report.cost - 120.0).abs() < 1e-9);
        assert_eq!(report.rule_ids(), vec!["RC004"]);

        let windows_group = r#"
on: push
jobs:
  build:
    runs-on:
      group: large-runners
      labels: [windows-2022]
    timeout-minutes: 15
"#;
        let report = analyze(windows_group, "win.yml");
        assert_eq!(report.job_costs[0].platform, RunnerPlatform::Windows);
        assert!((report.cost - 24.0).abs() < 1e-9);
        assert!(report.findings.is_empty());
    }

    #[test]
    fn test_custom_cost_model() {
        let analyzer = Analyzer::new(
            CostModel {
                pricing: RunnerPricing {
                    macos_per_min: 0.062,
                    ..RunnerPricing::default()
                },
                ..CostModel::default()
            },
            RuleSet::default(),
        );
        let report = analyzer.analyze(WF_MACOS, "mac.yml");
        assert!((report.cost - 0.062 * 15.0 * 100.0).abs() < 1e-9);
    }
}
