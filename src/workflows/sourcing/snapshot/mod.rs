pub mod views;

use super::domain::{ApprovalStatus, DriftSeverity, RawInputBundle};
use super::insights::{seniority_drift, InsightEngine};
use super::signals::SignalBundle;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use tracing::{debug, warn};
use views::{ApprovalPanel, CoveragePanel, DriftPanel};

const POINTS_PER_METHOD: usize = 25;

/// Everything the dashboard renders for one analysis run. Always rebuilt from
/// scratch, never patched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub analyzed_at: DateTime<Utc>,
    pub inputs: RawInputBundle,
    pub signals: SignalBundle,
    pub approval: ApprovalPanel,
    pub drift: DriftPanel,
    pub coverage: CoveragePanel,
    pub recommendations: Vec<String>,
    /// Set only when extraction failed and the fallback signals were used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}

impl DashboardSnapshot {
    pub fn approval_status(&self) -> ApprovalStatus {
        self.approval.status
    }

    pub fn drift_detected(&self) -> bool {
        self.drift.detected
    }
}

/// Runs every extractor and the rule evaluator over one set of inputs.
pub fn analyze_inputs(
    inputs: RawInputBundle,
    engine: &InsightEngine,
    analyzed_at: DateTime<Utc>,
) -> DashboardSnapshot {
    let (signals, notice) = match extract_guarded(&inputs) {
        Ok(signals) => (signals, None),
        Err(message) => {
            warn!(%message, "signal extraction failed; using fallback signals");
            let mut signals = SignalBundle::fallback();
            signals.updates.raw_text = inputs.daily_updates.clone();
            (signals, Some(format!("Parsing failed: {message}")))
        }
    };

    debug!(
        seniority = signals.search.seniority_bias.label(),
        company_stage = signals.search.company_stage.label(),
        method_count = signals.updates.method_count,
        juicebox_mentions = signals.updates.tool_mentions.juicebox,
        sales_nav_mentions = signals.updates.tool_mentions.sales_nav,
        repo_mentions = signals.updates.tool_mentions.repo,
        approval_rate = signals.summary.approval_rate,
        "extracted sourcing signals"
    );

    let recommendations = engine.recommendations(&signals, &inputs.transcript);
    let approval = approval_panel(&signals, engine);
    let drift = drift_panel(seniority_drift(&signals.search, &inputs.transcript));
    let coverage = coverage_panel(&signals);

    DashboardSnapshot {
        analyzed_at,
        inputs,
        signals,
        approval,
        drift,
        coverage,
        recommendations,
        notice,
    }
}

/// Single top-level guard around the combined extraction step. The
/// extractors are total, so the error arm is not expected to run.
fn extract_guarded(inputs: &RawInputBundle) -> Result<SignalBundle, String> {
    panic::catch_unwind(AssertUnwindSafe(|| SignalBundle::extract(inputs)))
        .map_err(|payload| panic_message(payload.as_ref()))
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "invalid input".to_string()
    }
}

fn approval_panel(signals: &SignalBundle, engine: &InsightEngine) -> ApprovalPanel {
    let rate = signals.summary.approval_rate;
    let status = if rate < engine.config().critical_below_pct {
        ApprovalStatus::Critical
    } else {
        ApprovalStatus::Healthy
    };
    let headline = match status {
        ApprovalStatus::Critical => "Approval Rate Alert",
        ApprovalStatus::Healthy => "Healthy Pipeline",
    };

    ApprovalPanel {
        rate: f32::from(rate),
        status,
        headline: headline.to_string(),
        main_blocker: signals.summary.top_rejection_reason.clone(),
    }
}

fn drift_panel(detected: bool) -> DriftPanel {
    if detected {
        DriftPanel {
            detected,
            severity: DriftSeverity::Medium,
            direction: "Seniority Mismatch".to_string(),
            evidence: "Sales Nav targets Senior, but constraints mention Junior.".to_string(),
        }
    } else {
        DriftPanel {
            detected,
            severity: DriftSeverity::Low,
            direction: "Aligned".to_string(),
            evidence: "No seniority conflict between search criteria and transcript.".to_string(),
        }
    }
}

fn coverage_panel(signals: &SignalBundle) -> CoveragePanel {
    let score = (signals.updates.method_count * POINTS_PER_METHOD).min(100) as u8;
    CoveragePanel {
        score,
        missing_methods: signals.updates.missing_methods(),
        overused_method: signals.updates.primary_method.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 10, 16, 17, 0, 0)
            .single()
            .expect("valid timestamp")
    }

    #[test]
    fn approval_status_uses_critical_band_not_rejection_floor() {
        let inputs = RawInputBundle {
            sheet_summary: "Approval Rate: 35%".to_string(),
            daily_updates: "juicebox, juicebox".to_string(),
            ..RawInputBundle::default()
        };

        let snapshot = analyze_inputs(inputs, &InsightEngine::default(), at());

        assert_eq!(snapshot.approval_status(), ApprovalStatus::Critical);
        assert_eq!(snapshot.approval.headline, "Approval Rate Alert");
        assert_eq!(snapshot.recommendations.len(), 1);
        assert!(snapshot.recommendations[0].contains("Pipeline looks healthy"));
    }

    #[test]
    fn coverage_score_saturates() {
        let inputs = RawInputBundle {
            daily_updates: "juicebox hubspot linkedin github google".to_string(),
            ..RawInputBundle::default()
        };

        let snapshot = analyze_inputs(inputs, &InsightEngine::default(), at());

        assert_eq!(snapshot.coverage.score, 100);
        assert_eq!(snapshot.coverage.overused_method, "Juicebox");
        assert!(!snapshot
            .coverage
            .missing_methods
            .iter()
            .any(|method| method == "Github"));
    }

    #[test]
    fn drift_flag_mirrors_alignment_rule() {
        let inputs = RawInputBundle {
            search_links: "keywords%3APrincipal%20Engineer".to_string(),
            transcript: "HM: these folks read as junior".to_string(),
            ..RawInputBundle::default()
        };

        let snapshot = analyze_inputs(inputs, &InsightEngine::default(), at());

        assert!(snapshot.drift_detected());
        assert_eq!(snapshot.drift.severity, DriftSeverity::Medium);
        assert!(snapshot
            .recommendations
            .iter()
            .any(|message| message.starts_with("⚡ Alignment Alert")));
    }

    #[test]
    fn guarded_extraction_never_falls_back_for_pathological_input() {
        let nasty = [
            "",
            "%",
            "%%%%",
            "%E2%82",
            "%FF%FE%00",
            "\u{0}\u{feff}\u{200b}",
            "Approval Rate: 99999999999999999999%",
            "approved: 99999999999999999999999",
        ];

        for text in nasty {
            let inputs = RawInputBundle {
                search_links: text.to_string(),
                daily_updates: text.to_string(),
                transcript: text.to_string(),
                retro_notes: text.to_string(),
                sheet_summary: text.to_string(),
            };
            assert!(extract_guarded(&inputs).is_ok(), "extraction failed for {text:?}");

            let snapshot = analyze_inputs(inputs, &InsightEngine::default(), at());
            assert!(snapshot.notice.is_none());
            assert!(!snapshot.recommendations.is_empty());
        }
    }

    #[test]
    fn panic_payloads_become_notice_text() {
        let payload = panic::catch_unwind(|| panic!("bad escape")).unwrap_err();
        assert_eq!(panic_message(payload.as_ref()), "bad escape");
    }
}
