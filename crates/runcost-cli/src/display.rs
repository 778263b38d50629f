use colored::*;
use runcost_core::analyzer::report::{Finding, Report, Severity};

/// Render reports as human-readable text, with a trailing total over all files.
pub fn format_text_report(reports: &[Report], breakdown: bool) -> String {
    let mut lines = Vec::new();
    let mut total_cost = 0.0;
    let mut total_savings = 0.0;

    for report in reports {
        lines.push(format!("\n📄 {}", report.path.bold()));
        lines.push(format!("   💰 Est. monthly cost: ${:.2}", report.cost));
        total_cost += report.cost;
        total_savings += report.savings;

        if breakdown {
            for job in &report.job_costs {
                lines.push(format!(
                    "      {} {} on {} x{}: ${:.2}/mo",
                    "|-".dimmed(),
                    job.job,
                    job.platform.label(),
                    job.fanout,
                    job.monthly_cost
                ));
            }
        }

        for finding in &report.findings {
            lines.extend(format_finding(finding));
        }
    }

    lines.push(format!("\n{}", "=".repeat(50)));
    lines.push(format!(
        "💰 Total: ${:.2}/mo | 💡 Potential savings: {}/mo",
        total_cost,
        format!("${:.2}", total_savings).green()
    ));

    lines.join("\n")
}

fn format_finding(finding: &Finding) -> [String; 2] {
    let tag = format!("[{}]", finding.rule_id);
    let tag = match finding.severity {
        Severity::Critical => tag.red().bold(),
        Severity::High => tag.yellow().bold(),
        Severity::Medium => tag.yellow(),
        Severity::Low => tag.blue(),
    };

    [
        format!("   {} {} {}", finding.severity.icon(), tag, finding.message),
        format!(
            "      → {} (~${:.0}/mo)",
            finding.suggestion.dimmed(),
            finding.savings
        ),
    ]
}
