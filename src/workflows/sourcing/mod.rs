mod dashboard;
mod demo;
pub mod domain;
mod intake;
pub mod insights;
pub mod signals;
pub mod snapshot;

pub use dashboard::{DashboardEvent, DashboardState, SectionVisibility};
pub use demo::{demo_inputs, demo_snapshot};
pub use domain::{
    ApprovalStatus, CompanyStage, DriftSeverity, InputField, RawInputBundle, SearchIntent,
    SeniorityBias,
};
pub use insights::{InsightConfig, InsightEngine, InsightRule, Recommendation};
pub use intake::{InputLoadError, InputSources};
pub use signals::{
    extract_search_signals, extract_summary_signals, extract_update_signals, SearchSignals,
    SignalBundle, SummarySignals, ToolMentions, UpdateSignals,
};
pub use snapshot::{analyze_inputs, DashboardSnapshot};
