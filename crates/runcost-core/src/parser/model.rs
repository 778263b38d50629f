use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use std::collections::HashMap;

/// Runner label used when a job does not declare `runs-on`.
pub const DEFAULT_RUNNER_LABEL: &str = "ubuntu-latest";

/// Operating-system category a job executes on. Drives the per-minute rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunnerPlatform {
    Linux,
    Windows,
    MacOs,
}

/// Label tokens checked in order; the first token found in the label wins.
const PLATFORM_TOKENS: &[(&str, RunnerPlatform)] = &[
    ("ubuntu", RunnerPlatform::Linux),
    ("linux", RunnerPlatform::Linux),
    ("windows", RunnerPlatform::Windows),
    ("macos", RunnerPlatform::MacOs),
];

impl RunnerPlatform {
    /// Resolve a single runner label. Unknown labels fall back to Linux.
    pub fn from_label(label: &str) -> Self {
        let label = label.to_lowercase();
        PLATFORM_TOKENS
            .iter()
            .find(|(token, _)| label.contains(token))
            .map(|(_, platform)| *platform)
            .unwrap_or(RunnerPlatform::Linux)
    }

    pub fn label(&self) -> &str {
        match self {
            RunnerPlatform::Linux => "linux",
            RunnerPlatform::Windows => "windows",
            RunnerPlatform::MacOs => "macos",
        }
    }
}

/// The `runs-on` labels of a job, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunnerLabels {
    pub labels: Vec<String>,
    /// Written as a runner group (`{ group, labels }`) rather than a label list.
    pub grouped: bool,
}

impl RunnerLabels {
    pub fn new(labels: Vec<String>) -> Self {
        Self {
            labels,
            grouped: false,
        }
    }

    pub fn group(labels: Vec<String>) -> Self {
        Self {
            labels,
            grouped: true,
        }
    }

    /// Platform of the first label, or of all values for a runner group.
    pub fn platform(&self) -> RunnerPlatform {
        if self.grouped {
            return RunnerPlatform::from_label(&self.labels.join(" "));
        }
        self.labels
            .first()
            .map(|label| RunnerPlatform::from_label(label))
            .unwrap_or(RunnerPlatform::Linux)
    }

    /// Case-insensitive containment check across every label.
    pub fn any_contains(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.labels.iter().any(|l| l.to_lowercase().contains(&needle))
    }
}

impl Default for RunnerLabels {
    fn default() -> Self {
        Self::new(vec![DEFAULT_RUNNER_LABEL.to_string()])
    }
}

/// How a job's `timeout-minutes` key was written.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub enum TimeoutSetting {
    /// No `timeout-minutes` key at all.
    #[default]
    Unset,
    Minutes(f64),
    /// Present but not a number, e.g. an expression.
    Dynamic,
}

impl TimeoutSetting {
    pub fn is_configured(&self) -> bool {
        !matches!(self, TimeoutSetting::Unset)
    }

    /// Configured minutes, or `default` when the value is unset or not numeric.
    pub fn minutes_or(&self, default: f64) -> f64 {
        match self {
            TimeoutSetting::Minutes(m) => *m,
            TimeoutSetting::Unset | TimeoutSetting::Dynamic => default,
        }
    }
}

/// One key of `strategy.matrix`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatrixAxis {
    pub name: String,
    /// Number of values when the axis is a sequence; `None` for any other shape.
    pub values: Option<usize>,
}

impl MatrixAxis {
    pub fn size(&self) -> u64 {
        self.values.map_or(1, |n| n as u64)
    }
}

/// Matrix strategy for a job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct MatrixStrategy {
    pub axes: Vec<MatrixAxis>,
}

impl MatrixStrategy {
    /// Number of job instances the matrix expands to. No axes means one.
    pub fn fanout(&self) -> u64 {
        self.axes
            .iter()
            .fold(1u64, |acc, axis| acc.saturating_mul(axis.size()))
    }
}

/// A single step within a job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct StepSpec {
    pub name: Option<String>,
    pub uses: Option<String>,
    pub run: Option<String>,
    pub with: HashMap<String, Value>,
}

impl StepSpec {
    pub fn uses_contains(&self, needle: &str) -> bool {
        self.uses.as_deref().is_some_and(|u| u.contains(needle))
    }

    /// True when `with.fetch-depth` is the number zero.
    pub fn requests_full_history(&self) -> bool {
        match self.with.get("fetch-depth") {
            Some(Value::Number(n)) => n.as_f64() == Some(0.0),
            _ => false,
        }
    }
}

/// A named job of the workflow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobSpec {
    pub name: String,
    pub runs_on: RunnerLabels,
    pub timeout: TimeoutSetting,
    pub matrix: MatrixStrategy,
    pub steps: Vec<StepSpec>,
}

impl JobSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            runs_on: RunnerLabels::default(),
            timeout: TimeoutSetting::Unset,
            matrix: MatrixStrategy::default(),
            steps: Vec::new(),
        }
    }

    pub fn platform(&self) -> RunnerPlatform {
        self.runs_on.platform()
    }

    /// All `run` scripts joined with a space, in step order.
    pub fn run_text(&self) -> String {
        self.steps
            .iter()
            .filter_map(|s| s.run.as_deref())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn any_step_uses(&self, needle: &str) -> bool {
        self.steps.iter().any(|s| s.uses_contains(needle))
    }
}

/// Typed view of a workflow file. Built once per analysis, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct WorkflowDocument {
    pub name: Option<String>,
    pub triggers: Vec<String>,
    pub has_concurrency: bool,
    pub jobs: Vec<JobSpec>,
}

impl WorkflowDocument {
    pub fn has_trigger(&self, event: &str) -> bool {
        self.triggers.iter().any(|t| t == event)
    }

    pub fn get_job(&self, name: &str) -> Option<&JobSpec> {
        self.jobs.iter().find(|j| j.name == name)
    }
}

/// Why a document produced no workflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmptyReason {
    Syntax(String),
    /// The top-level value was valid YAML of the named kind, not a mapping.
    NotAMapping(&'static str),
}

/// Result of parsing: a workflow, or the empty-document marker.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseOutcome {
    Document(WorkflowDocument),
    Empty(EmptyReason),
}

impl ParseOutcome {
    pub fn document(&self) -> Option<&WorkflowDocument> {
        match self {
            ParseOutcome::Document(doc) => Some(doc),
            ParseOutcome::Empty(_) => None,
        }
    }
}
