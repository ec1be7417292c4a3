use super::super::domain::SeniorityBias;
use super::super::signals::{juicebox_mentions, SearchSignals, SignalBundle};
use super::config::InsightConfig;
use super::{InsightRule, Recommendation};

/// Search criteria target Senior while the hiring manager talks about Junior.
pub(crate) fn seniority_drift(search: &SearchSignals, transcript: &str) -> bool {
    search.seniority_bias == SeniorityBias::Senior && transcript.to_lowercase().contains("junior")
}

pub(crate) fn evaluate_rules(
    signals: &SignalBundle,
    transcript: &str,
    config: &InsightConfig,
) -> Vec<Recommendation> {
    let mut fired = Vec::new();

    let rate = signals.summary.approval_rate;
    if rate > 0 && rate < config.rejection_floor_pct {
        fired.push(InsightRule::HighRejectionRate);
    }

    // Counted from the raw text so the fallback bundle still sees real mentions.
    if juicebox_mentions(&signals.updates.raw_text) < config.min_ai_tool_mentions {
        fired.push(InsightRule::LowMethodDiversity);
    }

    if signals
        .summary
        .top_rejection_reason
        .to_lowercase()
        .contains("senior")
    {
        fired.push(InsightRule::OverSeniorRejections);
    }

    if seniority_drift(&signals.search, transcript) {
        fired.push(InsightRule::SeniorityDrift);
    }

    if fired.is_empty() {
        fired.push(InsightRule::Healthy);
    }

    fired
        .into_iter()
        .map(|rule| Recommendation::from_rule(rule, config))
        .collect()
}
