use crate::analyzer::report::{Finding, Report};
use serde_json::{json, Value};

const SARIF_SCHEMA: &str = "https://json.schemastore.org/sarif-2.1.0.json";

/// Generate a SARIF 2.1.0 log for the first report of a batch.
///
/// Only one report is rendered per log; an empty batch yields `{}`.
pub fn to_sarif(reports: &[Report]) -> Value {
    match reports.first() {
        Some(report) => report_to_sarif(report),
        None => json!({}),
    }
}

/// Generate a SARIF 2.1.0 log from a single report.
pub fn report_to_sarif(report: &Report) -> Value {
    let mut seen: Vec<&str> = Vec::new();
    let mut rules = Vec::new();
    for finding in &report.findings {
        if !seen.contains(&finding.rule_id.as_str()) {
            seen.push(&finding.rule_id);
            rules.push(sarif_rule(finding));
        }
    }

    let results: Vec<Value> = report
        .findings
        .iter()
        .map(|f| sarif_result(f, &report.path))
        .collect();

    json!({
        "$schema": SARIF_SCHEMA,
        "version": "2.1.0",
        "runs": [{
            "tool": {
                "driver": {
                    "name": "RunCost",
                    "version": env!("CARGO_PKG_VERSION"),
                    "rules": rules,
                }
            },
            "results": results,
        }]
    })
}

fn sarif_rule(finding: &Finding) -> Value {
    json!({
        "id": finding.rule_id,
        "shortDescription": {
            "text": finding.message,
        },
    })
}

fn sarif_result(finding: &Finding, path: &str) -> Value {
    json!({
        "ruleId": finding.rule_id,
        "level": finding.severity.sarif_level(),
        "message": {
            "text": format!("{}. Fix: {}", finding.message, finding.suggestion),
        },
        "locations": [{
            "physicalLocation": {
                "artifactLocation": {
                    "uri": path,
                }
            }
        }],
    })
}
