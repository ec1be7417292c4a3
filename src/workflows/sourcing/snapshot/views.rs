use super::super::domain::{ApprovalStatus, DriftSeverity};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApprovalPanel {
    pub rate: f32,
    pub status: ApprovalStatus,
    pub headline: String,
    pub main_blocker: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriftPanel {
    pub detected: bool,
    pub severity: DriftSeverity,
    pub direction: String,
    pub evidence: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoveragePanel {
    /// 0-100, 25 points per distinct sourcing method.
    pub score: u8,
    pub missing_methods: Vec<String>,
    pub overused_method: String,
}
