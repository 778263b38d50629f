use crate::parser::model::*;
use log::debug;
use serde_yaml::{Mapping, Value};
use std::collections::HashMap;

/// Parser for GitHub Actions workflow YAML files.
///
/// Parsing never fails: malformed or oddly shaped input yields
/// [`ParseOutcome::Empty`], and unexpected field shapes fall back to defaults.
pub struct GitHubActionsParser;

impl GitHubActionsParser {
    /// Parse GitHub Actions YAML content into a typed workflow.
    pub fn parse(content: &str) -> ParseOutcome {
        let yaml: Value = match serde_yaml::from_str(content) {
            Ok(v) => v,
            Err(e) => return ParseOutcome::Empty(EmptyReason::Syntax(e.to_string())),
        };

        match &yaml {
            Value::Mapping(root) => ParseOutcome::Document(Self::parse_workflow(root)),
            other => ParseOutcome::Empty(EmptyReason::NotAMapping(value_kind(other))),
        }
    }

    fn parse_workflow(root: &Mapping) -> WorkflowDocument {
        let name = root.get("name").and_then(|v| v.as_str()).map(String::from);

        // YAML 1.1 readers turn a bare `on` key into boolean true
        let on = root.get("on").or_else(|| root.get(Value::Bool(true)));
        let triggers = on.map(Self::parse_triggers).unwrap_or_default();

        let has_concurrency = root.contains_key("concurrency");

        let mut jobs = Vec::new();
        if let Some(mapping) = root.get("jobs").and_then(|v| v.as_mapping()) {
            for (job_key, job_config) in mapping {
                let job_name = scalar_text(job_key).unwrap_or_else(|| "unknown".to_string());
                match job_config.as_mapping() {
                    Some(config) => jobs.push(Self::parse_job(job_name, config)),
                    None => debug!(
                        "Skipping job '{}': expected a mapping, found {}",
                        job_name,
                        value_kind(job_config)
                    ),
                }
            }
        }

        WorkflowDocument {
            name,
            triggers,
            has_concurrency,
            jobs,
        }
    }

    fn parse_triggers(on: &Value) -> Vec<String> {
        match on {
            Value::Sequence(events) => events.iter().filter_map(scalar_text).collect(),
            Value::Mapping(map) => map.keys().filter_map(scalar_text).collect(),
            other => scalar_text(other).into_iter().collect(),
        }
    }

    fn parse_job(name: String, config: &Mapping) -> JobSpec {
        let mut job = JobSpec::new(name);

        if let Some(runs_on) = config.get("runs-on") {
            job.runs_on = Self::parse_runs_on(runs_on);
        }

        if let Some(timeout) = config.get("timeout-minutes") {
            job.timeout = match timeout.as_f64() {
                Some(minutes) => TimeoutSetting::Minutes(minutes),
                None => TimeoutSetting::Dynamic,
            };
        }

        if let Some(strategy) = config.get("strategy") {
            job.matrix = Self::parse_matrix(strategy);
        }

        if let Some(steps) = config.get("steps").and_then(|v| v.as_sequence()) {
            job.steps = steps
                .iter()
                .filter_map(|s| s.as_mapping())
                .map(Self::parse_step)
                .collect();
        }

        job
    }

    fn parse_runs_on(runs_on: &Value) -> RunnerLabels {
        match runs_on {
            Value::Null => RunnerLabels::default(),
            Value::Sequence(seq) => RunnerLabels::new(seq.iter().filter_map(scalar_text).collect()),
            // runner groups: `runs-on: { group: ..., labels: [...] }`
            Value::Mapping(map) => {
                let mut labels = Vec::new();
                for key in ["group", "labels"] {
                    match map.get(key) {
                        Some(Value::Sequence(seq)) => {
                            labels.extend(seq.iter().filter_map(scalar_text))
                        }
                        Some(v) => labels.extend(scalar_text(v)),
                        None => {}
                    }
                }
                RunnerLabels::group(labels)
            }
            other => RunnerLabels::new(scalar_text(other).into_iter().collect()),
        }
    }

    fn parse_matrix(strategy: &Value) -> MatrixStrategy {
        let Some(mapping) = strategy.get("matrix").and_then(|m| m.as_mapping()) else {
            return MatrixStrategy::default();
        };

        // every key counts toward the fan-out, `include`/`exclude` too
        let axes = mapping
            .iter()
            .map(|(key, value)| MatrixAxis {
                name: scalar_text(key).unwrap_or_default(),
                values: value.as_sequence().map(|seq| seq.len()),
            })
            .collect();

        MatrixStrategy { axes }
    }

    fn parse_step(step: &Mapping) -> StepSpec {
        let text = |key: &str| step.get(key).and_then(|v| v.as_str()).map(String::from);

        let mut with = HashMap::new();
        if let Some(params) = step.get("with").and_then(|v| v.as_mapping()) {
            for (k, v) in params {
                if let Some(key) = scalar_text(k) {
                    with.insert(key, v.clone());
                }
            }
        }

        StepSpec {
            name: text("name"),
            uses: text("uses"),
            run: text("run"),
            with,
        }
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}
