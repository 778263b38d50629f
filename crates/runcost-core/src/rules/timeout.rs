use super::RuleHit;
use crate::parser::model::JobSpec;

pub const ID: &str = "RC002";

pub fn check(job: &JobSpec) -> Vec<RuleHit> {
    if job.timeout.is_configured() {
        return Vec::new();
    }
    vec![RuleHit::new(
        "No timeout-minutes — runaway jobs burn unlimited credits",
        "Add 'timeout-minutes: 30'",
    )]
}
