use super::RuleHit;
use crate::parser::model::JobSpec;

pub const ID: &str = "RC004";

pub fn check(job: &JobSpec) -> Vec<RuleHit> {
    if !job.runs_on.any_contains("macos") {
        return Vec::new();
    }
    vec![RuleHit::new(
        "macOS runner costs 10x more than Linux",
        "Use ubuntu-latest if possible",
    )]
}
