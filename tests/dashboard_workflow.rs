use chrono::{DateTime, TimeZone, Utc};
use sprints_intel::workflows::sourcing::{
    analyze_inputs, demo_inputs, demo_snapshot, ApprovalStatus, CompanyStage, DashboardEvent,
    DashboardState, InputField, InsightEngine, InsightRule, RawInputBundle, SearchIntent,
    SeniorityBias,
};

fn analysis_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 10, 17, 9, 30, 0)
        .single()
        .expect("valid analysis timestamp")
}

#[test]
fn demo_inputs_analyze_into_expected_signals() {
    let snapshot = analyze_inputs(demo_inputs(), &InsightEngine::default(), analysis_time());
    let signals = &snapshot.signals;

    assert_eq!(signals.search.seniority_bias, SeniorityBias::Senior);
    assert_eq!(signals.search.company_stage, CompanyStage::General);
    assert_eq!(signals.search.search_intent, SearchIntent::KeywordSearch);
    assert_eq!(signals.search.keywords, vec!["engineer"]);

    assert_eq!(signals.updates.method_count, 1);
    assert_eq!(signals.updates.primary_method, "Juicebox");
    assert_eq!(signals.updates.tool_mentions.sales_nav, 2);
    assert_eq!(signals.updates.tool_mentions.juicebox, 1);

    assert_eq!(signals.summary.approval_rate, 0);
    assert_eq!(signals.summary.approved, Some(6));
    assert_eq!(signals.summary.rejected, Some(39));
    assert_eq!(signals.summary.top_rejection_reason, "Issues with \"experience\"");

    assert_eq!(snapshot.approval_status(), ApprovalStatus::Critical);
    assert!(snapshot.drift_detected());
    assert_eq!(snapshot.coverage.score, 25);
    assert_eq!(
        snapshot.recommendations,
        vec![
            InsightRule::LowMethodDiversity.message().to_string(),
            InsightRule::SeniorityDrift.message().to_string(),
        ]
    );
}

#[test]
fn load_demo_restores_the_curated_record() {
    let engine = InsightEngine::default();
    let state = DashboardState::empty().apply(DashboardEvent::LoadDemo, &engine);

    assert_eq!(state.inputs, demo_inputs());
    assert_eq!(state.snapshot, Some(demo_snapshot()));
    assert!(InputField::ordered()
        .into_iter()
        .all(|field| state.sections.is_expanded(field)));

    let snapshot = state.snapshot.expect("demo snapshot present");
    assert_eq!(snapshot.approval.rate, 13.3);
    assert_eq!(snapshot.coverage.score, 40);
    assert_eq!(snapshot.recommendations.len(), 4);
}

#[test]
fn clear_all_empties_inputs_and_snapshot() {
    let engine = InsightEngine::default();
    let cleared = DashboardState::default()
        .apply(DashboardEvent::LoadDemo, &engine)
        .apply(DashboardEvent::ClearAll, &engine);

    assert_eq!(cleared.inputs, RawInputBundle::default());
    assert!(cleared.snapshot.is_none());
}

#[test]
fn analyze_recomputes_from_edited_inputs() {
    let engine = InsightEngine::default();
    let events = vec![
        DashboardEvent::LoadDemo,
        DashboardEvent::ClearAll,
        DashboardEvent::EditInput {
            field: InputField::SheetSummary,
            value: "Approval Rate: 35%\nRejections: too senior".to_string(),
        },
        DashboardEvent::EditInput {
            field: InputField::DailyUpdates,
            value: "Juicebox morning, Juicebox afternoon, GitHub evening".to_string(),
        },
        DashboardEvent::Analyze {
            at: analysis_time(),
        },
    ];

    let state = DashboardState::empty().replay(events, &engine);
    let snapshot = state.snapshot.expect("analysis ran");

    assert_eq!(snapshot.analyzed_at, analysis_time());
    assert_eq!(snapshot.signals.summary.approval_rate, 35);
    assert_eq!(snapshot.approval_status(), ApprovalStatus::Critical);
    assert_eq!(snapshot.coverage.score, 50);
    assert_eq!(
        snapshot.recommendations,
        vec![InsightRule::OverSeniorRejections.message().to_string()]
    );
    assert!(snapshot.notice.is_none());
}

#[test]
fn analyze_is_a_pure_function_of_inputs() {
    let engine = InsightEngine::default();
    let first = analyze_inputs(demo_inputs(), &engine, analysis_time());
    let second = analyze_inputs(demo_inputs(), &engine, analysis_time());
    assert_eq!(first, second);
}
