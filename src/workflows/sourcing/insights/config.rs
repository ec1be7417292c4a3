use serde::{Deserialize, Serialize};

/// Thresholds for the recommendation rules and the approval card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightConfig {
    /// Rates strictly between zero and this value trigger recalibration.
    pub rejection_floor_pct: u8,
    /// Rates below this value render the approval card as critical.
    pub critical_below_pct: u8,
    /// Fewer whole-word AI sourcing tool mentions than this flag low diversity.
    pub min_ai_tool_mentions: usize,
}

impl Default for InsightConfig {
    fn default() -> Self {
        Self {
            rejection_floor_pct: 30,
            critical_below_pct: 40,
            min_ai_tool_mentions: 2,
        }
    }
}
