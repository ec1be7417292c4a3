use crate::error::AppError;
use crate::workflows::sourcing::DashboardSnapshot;
use std::fmt::Write as _;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub(crate) fn from_flag(json: bool) -> Self {
        if json {
            Self::Json
        } else {
            Self::Text
        }
    }
}

pub(crate) fn print_snapshot(
    snapshot: Option<&DashboardSnapshot>,
    format: OutputFormat,
) -> Result<(), AppError> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&snapshot)?),
        OutputFormat::Text => print!("{}", render_text(snapshot)),
    }
    Ok(())
}

pub(crate) fn render_text(snapshot: Option<&DashboardSnapshot>) -> String {
    let mut out = String::new();
    let Some(snapshot) = snapshot else {
        out.push_str("Waiting for data...\n");
        return out;
    };

    let signals = &snapshot.signals;
    let _ = writeln!(
        out,
        "Sourcing signals ({})",
        snapshot.analyzed_at.format("%Y-%m-%d %H:%M UTC")
    );
    if let Some(notice) = &snapshot.notice {
        let _ = writeln!(out, "Notice: {notice}");
    }

    let _ = writeln!(out, "\nSearch criteria");
    let _ = writeln!(out, "- Seniority bias: {}", signals.search.seniority_bias.label());
    let _ = writeln!(out, "- Company stage: {}", signals.search.company_stage.label());
    let _ = writeln!(out, "- Search intent: {}", signals.search.search_intent.label());
    if !signals.search.keywords.is_empty() {
        let _ = writeln!(out, "- Role keywords: {}", signals.search.keywords.join(", "));
    }

    let approval = &snapshot.approval;
    let _ = writeln!(
        out,
        "\nApproval: {:.1}% [{}] {}",
        approval.rate,
        approval.status.label(),
        approval.headline
    );
    let _ = writeln!(out, "- Main blocker: {}", approval.main_blocker);

    let drift = &snapshot.drift;
    if drift.detected {
        let _ = writeln!(
            out,
            "\nDrift detected [{}]: {}",
            drift.severity.label(),
            drift.direction
        );
        let _ = writeln!(out, "- Evidence: {}", drift.evidence);
    } else {
        let _ = writeln!(out, "\nDrift: none");
    }

    let coverage = &snapshot.coverage;
    let _ = writeln!(
        out,
        "\nCoverage score: {}/100 ({} method{}, primary {})",
        coverage.score,
        signals.updates.method_count,
        if signals.updates.method_count == 1 { "" } else { "s" },
        coverage.overused_method
    );
    if !coverage.missing_methods.is_empty() {
        let _ = writeln!(out, "- Missing: {}", coverage.missing_methods.join(", "));
    }
    let mentions = &signals.updates.tool_mentions;
    let _ = writeln!(
        out,
        "- Mentions: Juicebox {}, Sales Nav {}, repo {}",
        mentions.juicebox, mentions.sales_nav, mentions.repo
    );

    let _ = writeln!(out, "\nRecommendations");
    for recommendation in &snapshot.recommendations {
        let _ = writeln!(out, "- {recommendation}");
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::sourcing::demo_snapshot;

    #[test]
    fn cleared_dashboard_renders_placeholder() {
        assert_eq!(render_text(None), "Waiting for data...\n");
    }

    #[test]
    fn demo_snapshot_renders_every_section() {
        let snapshot = demo_snapshot();
        let text = render_text(Some(&snapshot));

        assert!(text.contains("Seniority bias: Senior"));
        assert!(text.contains("Approval: 13.3% [critical]"));
        assert!(text.contains("Drift detected [high]"));
        assert!(text.contains("Coverage score: 40/100"));
        assert!(text.contains("- Mentions: Juicebox 1, Sales Nav 2, repo 0"));
        assert!(text.contains("- 🛑 PAUSE"));
    }
}
