use super::domain::{ApprovalStatus, DriftSeverity, RawInputBundle};
use super::signals::SignalBundle;
use super::snapshot::views::{ApprovalPanel, CoveragePanel, DriftPanel};
use super::snapshot::DashboardSnapshot;
use chrono::{DateTime, TimeZone, Utc};

const DEMO_SEARCH_LINKS: &str = "https://www.linkedin.com/sales/search/people?query=(spellCorrectionEnabled%3Atrue%2Ckeywords%3Asenior%20software%20engineer%20AND%20react)&sessionId=5938485
https://www.linkedin.com/sales/search/people?query=(keywords%3Astaff%20engineer%20AND%20typescript)";

const DEMO_DAILY_UPDATES: &str = "Oct 14: Focused heavily on Sales Nav today. Sent 40 inmails. Response rate is low.
Oct 15: Tried some Juicebox searches for \"Product-minded engineers\", better quality but low volume.
Oct 16: Went back to Sales Nav, targeting Series B companies only.";

const DEMO_TRANSCRIPT: &str = "HM (Sarah): \"Honestly, the candidates from the last batch were too junior. Even the 'seniors' felt like mid-level.\"
HM (Sarah): \"We really need someone who has seen scale. Maybe look at ex-Uber or Airbnb folks? We can pay top of band.\"";

const DEMO_RETRO_NOTES: &str = "- What worked: Juicebox signals for \"open source contributor\".
- What failed: General keyword search on LinkedIn. Too much noise.
- Blocker: Candidates failing the System Design round consistently.";

const DEMO_SHEET_SUMMARY: &str = "Submitted: 45
Approved: 6
Rejected: 39
Rejection Reasons:
- Failed System Design (20)
- Not enough scale experience (10)
- Cultural mismatch (5)";

pub fn demo_inputs() -> RawInputBundle {
    RawInputBundle {
        search_links: DEMO_SEARCH_LINKS.to_string(),
        daily_updates: DEMO_DAILY_UPDATES.to_string(),
        transcript: DEMO_TRANSCRIPT.to_string(),
        retro_notes: DEMO_RETRO_NOTES.to_string(),
        sheet_summary: DEMO_SHEET_SUMMARY.to_string(),
    }
}

fn demo_analyzed_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 10, 16, 17, 0, 0)
        .single()
        .unwrap_or_default()
}

/// Curated walkthrough record shown by "load demo". The panels and
/// recommendations are hand-written, not computed by the rule engine.
pub fn demo_snapshot() -> DashboardSnapshot {
    let inputs = demo_inputs();
    let signals = SignalBundle::extract(&inputs);

    DashboardSnapshot {
        analyzed_at: demo_analyzed_at(),
        inputs,
        signals,
        approval: ApprovalPanel {
            rate: 13.3,
            status: ApprovalStatus::Critical,
            headline: "Critical Bottleneck in Technical Screening".to_string(),
            main_blocker: "System Design / Scale Experience".to_string(),
        },
        drift: DriftPanel {
            detected: true,
            severity: DriftSeverity::High,
            direction: "Seniority & Pedigree Up-leveling".to_string(),
            evidence: "Hiring Manager explicitly requested \"ex-Uber/Airbnb\" and noted current candidates are \"too junior\".".to_string(),
        },
        coverage: CoveragePanel {
            score: 40,
            missing_methods: vec![
                "Donor Company Sourcing".to_string(),
                "GitHub Scraping".to_string(),
                "Ex-Colleague Mapping".to_string(),
            ],
            overused_method: "Generic Sales Navigator Search".to_string(),
        },
        recommendations: vec![
            "🛑 PAUSE: Stop general keyword sourcing on LinkedIn immediately.".to_string(),
            "🎯 PIVOT: Target \"Donor Companies\" (Uber, Airbnb, Stripe) as requested in transcript.".to_string(),
            "📉 FILTER: Increase YOE floor to 7+ years to filter out \"fake seniors\".".to_string(),
            "🔍 TRY: Run a GitHub scrape for \"High Scale Distributed Systems\" contributors.".to_string(),
        ],
        notice: None,
    }
}
