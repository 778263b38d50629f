use crate::analyzer::report::{round_cents, Finding, Report};
use serde::Serialize;

/// JSON view of a report: costs rounded to cents, findings verbatim.
#[derive(Debug, Clone, Serialize)]
pub struct ReportSummary<'a> {
    pub file: &'a str,
    pub monthly_cost: f64,
    pub potential_savings: f64,
    pub findings_count: usize,
    pub findings: &'a [Finding],
}

impl<'a> From<&'a Report> for ReportSummary<'a> {
    fn from(report: &'a Report) -> Self {
        Self {
            file: &report.path,
            monthly_cost: round_cents(report.cost),
            potential_savings: round_cents(report.savings),
            findings_count: report.findings.len(),
            findings: &report.findings,
        }
    }
}

/// Render a batch of reports as a pretty-printed JSON array.
pub fn to_json(reports: &[Report]) -> serde_json::Result<String> {
    let summaries: Vec<ReportSummary<'_>> = reports.iter().map(ReportSummary::from).collect();
    serde_json::to_string_pretty(&summaries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::analyze;

    #[test]
    fn test_json_output_structure() {
        let yaml = r#"
on: [push, pull_request]
jobs:
  build:
    runs-on: windows-latest
    steps:
      - run: npm ci
"#;
        let report = analyze(yaml, "ci.yml");
        let json: serde_json::Value = serde_json::from_str(&to_json(&[report]).unwrap()).unwrap();

        let first = &json[0];
        assert_eq!(first["file"], "ci.yml");
        assert_eq!(first["monthly_cost"], 24.0);
        assert_eq!(first["potential_savings"], 95.0);
        assert_eq!(first["findings_count"], 3);

        let finding = &first["findings"][1];
        assert_eq!(finding["rule_id"], "RC001");
        assert_eq!(finding["severity"], "high");
        assert_eq!(finding["job"], "build");
        assert_eq!(finding["message"], "No cache configured for npm");
        assert_eq!(finding["suggestion"], "Add actions/cache for npm dependencies");
        assert_eq!(finding["savings"], 15.0);
        assert_eq!(first["findings"][0]["job"], "(workflow)");
    }

    #[test]
    fn test_empty_batch() {
        assert_eq!(to_json(&[]).unwrap(), "[]");
    }
}
