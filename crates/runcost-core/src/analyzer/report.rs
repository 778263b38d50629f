use crate::parser::model::RunnerPlatform;
use serde::{Deserialize, Serialize};

/// Job name used for findings that concern the whole workflow.
pub const WORKFLOW_SCOPE: &str = "(workflow)";

/// Severity level for analysis findings, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
            Severity::Critical => "critical",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Severity::Critical => "🔴",
            Severity::High => "🟠",
            Severity::Medium => "🟡",
            Severity::Low => "🔵",
        }
    }

    /// SARIF result level.
    pub fn sarif_level(&self) -> &'static str {
        match self {
            Severity::Critical => "error",
            Severity::High | Severity::Medium | Severity::Low => "warning",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single cost-inefficiency finding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    pub rule_id: String,
    pub severity: Severity,
    /// Owning job, or [`WORKFLOW_SCOPE`].
    pub job: String,
    pub message: String,
    pub suggestion: String,
    /// Estimated monthly savings if the finding is fixed.
    pub savings: f64,
}

/// Cost contribution of one job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobCost {
    pub job: String,
    pub platform: RunnerPlatform,
    pub fanout: u64,
    pub monthly_cost: f64,
}

/// Analysis result for one workflow document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub path: String,
    pub findings: Vec<Finding>,
    /// Estimated monthly cost, summed over jobs.
    pub cost: f64,
    /// Sum of `findings[*].savings`.
    pub savings: f64,
    pub job_costs: Vec<JobCost>,
}

impl Report {
    /// A report with no jobs and no findings.
    pub fn empty(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            findings: Vec::new(),
            cost: 0.0,
            savings: 0.0,
            job_costs: Vec::new(),
        }
    }

    pub fn count_by_severity(&self, severity: Severity) -> usize {
        self.findings.iter().filter(|f| f.severity == severity).count()
    }

    pub fn has_rule(&self, rule_id: &str) -> bool {
        self.findings.iter().any(|f| f.rule_id == rule_id)
    }

    pub fn rule_ids(&self) -> Vec<&str> {
        self.findings.iter().map(|f| f.rule_id.as_str()).collect()
    }
}

/// Round to two decimals, halves away from zero.
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
