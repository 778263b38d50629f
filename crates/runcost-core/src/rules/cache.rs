use super::RuleHit;
use crate::parser::model::JobSpec;

pub const ID: &str = "RC001";

/// Any `uses` containing this counts as a dependency cache.
const CACHE_ACTION: &str = "actions/cache";

/// Package managers and the commands that download or build their dependencies.
const PACKAGE_MANAGERS: &[(&str, &[&str])] = &[
    ("npm", &["npm install", "npm ci"]),
    ("pip", &["pip install"]),
    ("go", &["go build", "go test"]),
];

/// One hit per package manager whose install/build commands run without a cache.
/// Keyword matching is case-sensitive.
pub fn check(job: &JobSpec) -> Vec<RuleHit> {
    if job.any_step_uses(CACHE_ACTION) {
        return Vec::new();
    }

    let runs = job.run_text();
    PACKAGE_MANAGERS
        .iter()
        .filter(|(_, keywords)| keywords.iter().any(|kw| runs.contains(kw)))
        .map(|(manager, _)| {
            RuleHit::new(
                format!("No cache configured for {}", manager),
                format!("Add actions/cache for {} dependencies", manager),
            )
        })
        .collect()
}
