use super::RuleHit;
use crate::parser::model::WorkflowDocument;

pub const ID: &str = "RC003";

/// Push and pull_request both fire for the same commit on a PR branch;
/// without a concurrency group both runs complete.
pub fn check(doc: &WorkflowDocument) -> Vec<RuleHit> {
    if doc.has_concurrency || !(doc.has_trigger("push") && doc.has_trigger("pull_request")) {
        return Vec::new();
    }
    vec![RuleHit::new(
        "No concurrency group — duplicate runs on push+PR",
        "Add concurrency group to cancel outdated runs",
    )]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(triggers: &[&str], has_concurrency: bool) -> WorkflowDocument {
        WorkflowDocument {
            triggers: triggers.iter().map(|t| t.to_string()).collect(),
            has_concurrency,
            ..WorkflowDocument::default()
        }
    }

    #[test]
    fn test_push_and_pr_without_concurrency() {
        assert_eq!(check(&doc(&["push", "pull_request"], false)).len(), 1);
    }

    #[test]
    fn test_concurrency_group_silences() {
        assert!(check(&doc(&["push", "pull_request"], true)).is_empty());
    }

    #[test]
    fn test_single_trigger_passes() {
        assert!(check(&doc(&["push"], false)).is_empty());
        assert!(check(&doc(&["pull_request", "pull_request_target"], false)).is_empty());
    }
}
