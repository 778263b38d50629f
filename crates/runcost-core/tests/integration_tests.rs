use runcost_core::analyzer::report::WORKFLOW_SCOPE;
use runcost_core::analyzer::{sarif, summary, Analyzer};
use runcost_core::config::{AnalyzerConfig, RuleConfig};
use runcost_core::discovery::discover_workflow_files;
use runcost_core::{analyze, Report, Severity};
use std::path::{Path, PathBuf};

/// Get the workspace root (two levels up from CARGO_MANIFEST_DIR of runcost-core).
fn fixtures_dir() -> PathBuf {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    Path::new(manifest_dir)
        .parent()
        .unwrap() // crates/
        .parent()
        .unwrap() // workspace root
        .join("tests/fixtures")
}

fn github_fixture(name: &str) -> PathBuf {
    fixtures_dir().join("github-actions").join(name)
}

fn analyze_fixture(name: &str) -> Report {
    let path = github_fixture(name);
    let content = std::fs::read_to_string(&path).unwrap();
    analyze(&content, &path.to_string_lossy())
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {}, got {}",
        expected,
        actual
    );
}

#[test]
fn test_unoptimized_python_pipeline() {
    let report = analyze_fixture("unoptimized-python.yml");

    assert_eq!(report.rule_ids(), vec!["RC003", "RC001", "RC002"]);
    assert_eq!(report.findings[0].job, WORKFLOW_SCOPE);
    assert_eq!(report.findings[1].message, "No cache configured for pip");
    assert_eq!(report.count_by_severity(Severity::Critical), 1);
    assert_close(report.cost, 12.0);
    assert_eq!(report.savings, 95.0);
}

#[test]
fn test_optimized_pipeline_is_clean() {
    let report = analyze_fixture("optimized.yml");
    assert!(report.findings.is_empty(), "unexpected: {:?}", report.rule_ids());
    assert!(report.cost > 0.0);
    assert_eq!(report.savings, 0.0);
}

#[test]
fn test_macos_release_pipeline() {
    let report = analyze_fixture("macos-release.yml");
    assert_eq!(report.rule_ids(), vec!["RC004", "RC005"]);
    assert_close(report.cost, 120.0);
    assert_eq!(report.savings, 45.0);
}

#[test]
fn test_fullstack_matrix_pipeline() {
    let report = analyze_fixture("fullstack-matrix.yml");

    assert_eq!(
        report.rule_ids(),
        vec!["RC003", "RC001", "RC001", "RC001", "RC002"]
    );
    let jobs: Vec<&str> = report.findings.iter().map(|f| f.job.as_str()).collect();
    assert_eq!(
        jobs,
        vec![WORKFLOW_SCOPE, "frontend", "backend", "backend", "backend"]
    );

    // frontend 0.008*10*100*2 + backend 0.008*15*100 + windows 0.016*5*100
    assert_close(report.cost, 36.0);
    assert_eq!(report.savings, 125.0);
    assert_eq!(report.job_costs[0].fanout, 2);
}

#[test]
fn test_malformed_and_non_mapping_fixtures() {
    for name in ["malformed.yml", "not-a-mapping.yml"] {
        let report = analyze_fixture(name);
        assert!(report.findings.is_empty(), "{} produced findings", name);
        assert_eq!(report.cost, 0.0);
        assert!(report.path.ends_with(name));
    }
}

#[test]
fn test_concurrency_block_removes_rc003() {
    let without = "on: [push, pull_request]\njobs: {}\n";
    let with = "on: [push, pull_request]\nconcurrency: ci\njobs: {}\n";
    assert!(analyze(without, "a.yml").has_rule("RC003"));
    assert!(!analyze(with, "b.yml").has_rule("RC003"));
}

#[test]
fn test_doubling_matrix_axis_doubles_job_cost() {
    let two = r#"
on: push
jobs:
  test:
    timeout-minutes: 12
    strategy:
      matrix:
        os: [a, b]
"#;
    let four = r#"
on: push
jobs:
  test:
    timeout-minutes: 12
    strategy:
      matrix:
        os: [a, b, c, d]
"#;
    assert_eq!(analyze(four, "x").cost, analyze(two, "x").cost * 2.0);
}

#[test]
fn test_savings_always_match_findings() {
    for name in [
        "unoptimized-python.yml",
        "optimized.yml",
        "macos-release.yml",
        "fullstack-matrix.yml",
        "malformed.yml",
    ] {
        let report = analyze_fixture(name);
        let sum: f64 = report.findings.iter().map(|f| f.savings).sum();
        assert_eq!(report.savings, sum, "savings mismatch for {}", name);
    }
}

#[test]
fn test_config_disables_rules_and_changes_rates() {
    let mut config = AnalyzerConfig {
        rules: RuleConfig {
            disabled: vec!["RC004".to_string()],
        },
        ..AnalyzerConfig::default()
    };
    config.cost.runs_per_month = 50;

    let analyzer = Analyzer::from_config(&config);
    let content = std::fs::read_to_string(github_fixture("macos-release.yml")).unwrap();
    let report = analyzer.analyze(&content, "macos-release.yml");

    assert_eq!(report.rule_ids(), vec!["RC005"]);
    assert_close(report.cost, 60.0);
}

#[test]
fn test_discover_fixture_directory() {
    let files = discover_workflow_files(&fixtures_dir().join("github-actions")).unwrap();
    assert_eq!(files.len(), 6);
    assert!(files.iter().all(|f| f.extension().unwrap() == "yml"));
}

#[test]
fn test_renderers_over_batch() {
    let reports = vec![
        analyze_fixture("unoptimized-python.yml"),
        analyze_fixture("optimized.yml"),
    ];

    let json: serde_json::Value =
        serde_json::from_str(&summary::to_json(&reports).unwrap()).unwrap();
    assert_eq!(json.as_array().unwrap().len(), 2);
    assert_eq!(json[0]["findings_count"], 3);
    assert_eq!(json[0]["monthly_cost"], 12.0);
    assert_eq!(json[1]["findings_count"], 0);

    let log = sarif::to_sarif(&reports);
    assert_eq!(log["runs"][0]["results"].as_array().unwrap().len(), 3);
}
