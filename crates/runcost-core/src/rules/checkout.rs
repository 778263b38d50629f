use super::RuleHit;
use crate::parser::model::JobSpec;

pub const ID: &str = "RC005";

const CHECKOUT_ACTION: &str = "actions/checkout";

/// One hit per checkout step that asks for `fetch-depth: 0`.
pub fn check(job: &JobSpec) -> Vec<RuleHit> {
    job.steps
        .iter()
        .filter(|s| s.uses_contains(CHECKOUT_ACTION) && s.requests_full_history())
        .map(|_| {
            RuleHit::new(
                "Full git clone (fetch-depth: 0) wastes time",
                "Use default shallow clone",
            )
        })
        .collect()
}
