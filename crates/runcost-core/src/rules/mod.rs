pub mod cache;
pub mod checkout;
pub mod concurrency;
pub mod runner;
pub mod timeout;

use crate::analyzer::report::{Finding, Severity, WORKFLOW_SCOPE};
use crate::parser::model::{JobSpec, WorkflowDocument};

/// What a rule matched: the text of one finding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleHit {
    pub message: String,
    pub suggestion: String,
}

impl RuleHit {
    pub fn new(message: impl Into<String>, suggestion: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            suggestion: suggestion.into(),
        }
    }
}

/// The part of the workflow a rule inspects.
#[derive(Clone, Copy)]
pub enum RuleScope {
    Workflow(fn(&WorkflowDocument) -> Vec<RuleHit>),
    Job(fn(&JobSpec) -> Vec<RuleHit>),
}

/// A registered cost rule. Each hit becomes one finding worth `savings`.
pub struct Rule {
    pub id: &'static str,
    pub severity: Severity,
    pub savings: f64,
    pub summary: &'static str,
    pub scope: RuleScope,
}

impl Rule {
    fn finding(&self, job: &str, hit: RuleHit) -> Finding {
        Finding {
            rule_id: self.id.to_string(),
            severity: self.severity,
            job: job.to_string(),
            message: hit.message,
            suggestion: hit.suggestion,
            savings: self.savings,
        }
    }

    pub fn is_workflow_scoped(&self) -> bool {
        matches!(self.scope, RuleScope::Workflow(_))
    }
}

/// All rules, in evaluation order.
pub const RULES: &[Rule] = &[
    Rule {
        id: concurrency::ID,
        severity: Severity::Medium,
        savings: 30.0,
        summary: "Push and pull_request triggers without a concurrency group",
        scope: RuleScope::Workflow(concurrency::check),
    },
    Rule {
        id: cache::ID,
        severity: Severity::High,
        savings: 15.0,
        summary: "Package manager installs without a dependency cache",
        scope: RuleScope::Job(cache::check),
    },
    Rule {
        id: timeout::ID,
        severity: Severity::Critical,
        savings: 50.0,
        summary: "Job without timeout-minutes",
        scope: RuleScope::Job(timeout::check),
    },
    Rule {
        id: runner::ID,
        severity: Severity::Medium,
        savings: 40.0,
        summary: "Job on a macOS runner",
        scope: RuleScope::Job(runner::check),
    },
    Rule {
        id: checkout::ID,
        severity: Severity::Low,
        savings: 5.0,
        summary: "Checkout with full git history",
        scope: RuleScope::Job(checkout::check),
    },
];

/// Look up a rule by its ID.
pub fn find_rule(id: &str) -> Option<&'static Rule> {
    RULES.iter().find(|r| r.id == id)
}

/// The enabled subset of [`RULES`].
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    disabled: Vec<String>,
}

impl RuleSet {
    pub fn new(disabled: Vec<String>) -> Self {
        Self { disabled }
    }

    /// One-line descriptions of the disabled rules, in registry order.
    pub fn disabled_summaries(&self) -> Vec<String> {
        RULES
            .iter()
            .filter(|r| !self.is_enabled(r))
            .map(|r| format!("{} ({})", r.id, r.summary))
            .collect()
    }

    pub fn is_enabled(&self, rule: &Rule) -> bool {
        !self.disabled.iter().any(|d| d == rule.id)
    }

    pub fn enabled(&self) -> impl Iterator<Item = &'static Rule> + '_ {
        RULES.iter().filter(move |r| self.is_enabled(r))
    }

    /// Run the workflow-scoped rules.
    pub fn evaluate_workflow(&self, doc: &WorkflowDocument) -> Vec<Finding> {
        let mut findings = Vec::new();
        for rule in self.enabled() {
            if let RuleScope::Workflow(check) = rule.scope {
                findings.extend(check(doc).into_iter().map(|hit| rule.finding(WORKFLOW_SCOPE, hit)));
            }
        }
        findings
    }

    /// Run the job-scoped rules against one job.
    pub fn evaluate_job(&self, job: &JobSpec) -> Vec<Finding> {
        let mut findings = Vec::new();
        for rule in self.enabled() {
            if let RuleScope::Job(check) = rule.scope {
                findings.extend(check(job).into_iter().map(|hit| rule.finding(&job.name, hit)));
            }
        }
        findings
    }
}
