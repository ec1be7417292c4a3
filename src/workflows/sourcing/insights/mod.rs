mod config;
mod rules;

pub use config::InsightConfig;

pub(crate) use rules::seniority_drift;

use super::signals::SignalBundle;
use serde::{Deserialize, Serialize};

/// Recommendation rules in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightRule {
    HighRejectionRate,
    LowMethodDiversity,
    OverSeniorRejections,
    SeniorityDrift,
    /// Emitted only when no other rule fires.
    Healthy,
}

impl InsightRule {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::HighRejectionRate,
            Self::LowMethodDiversity,
            Self::OverSeniorRejections,
            Self::SeniorityDrift,
            Self::Healthy,
        ]
    }

    pub const fn message(self) -> &'static str {
        match self {
            Self::HighRejectionRate => {
                "⚠️ High Rejection Rate (<30%): Re-calibrate Seniority filters immediately."
            }
            Self::LowMethodDiversity => {
                "📉 Low Method Diversity: Juicebox usage is low. Try AI sourcing to expand pool."
            }
            Self::OverSeniorRejections => {
                "🎯 Strategy Shift: Candidates are \"Too Senior\". Target distinct \"Staff\" vs \"Senior\" keywords."
            }
            Self::SeniorityDrift => {
                "⚡ Alignment Alert: Sourcing \"Senior\" profiles, but hiring manager mentioned \"Junior\"."
            }
            Self::Healthy => "✅ Pipeline looks healthy. Continue with current sourcing mix.",
        }
    }

    /// Message text with configured thresholds substituted. Equals `message()`
    /// under the default config.
    pub fn describe(self, config: &InsightConfig) -> String {
        match self {
            Self::HighRejectionRate => format!(
                "⚠️ High Rejection Rate (<{}%): Re-calibrate Seniority filters immediately.",
                config.rejection_floor_pct
            ),
            _ => self.message().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub rule: InsightRule,
    pub message: String,
}

impl Recommendation {
    fn from_rule(rule: InsightRule, config: &InsightConfig) -> Self {
        Self {
            rule,
            message: rule.describe(config),
        }
    }
}

/// Stateless evaluator turning a signal bundle into ordered recommendations.
#[derive(Debug, Clone, Default)]
pub struct InsightEngine {
    config: InsightConfig,
}

impl InsightEngine {
    pub fn new(config: InsightConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &InsightConfig {
        &self.config
    }

    /// Every rule runs; output order is rule order. Never empty.
    pub fn evaluate(&self, signals: &SignalBundle, transcript: &str) -> Vec<Recommendation> {
        rules::evaluate_rules(signals, transcript, &self.config)
    }

    pub fn recommendations(&self, signals: &SignalBundle, transcript: &str) -> Vec<String> {
        self.evaluate(signals, transcript)
            .into_iter()
            .map(|recommendation| recommendation.message)
            .collect()
    }
}
