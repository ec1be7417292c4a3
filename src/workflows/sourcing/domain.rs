use serde::{Deserialize, Serialize};
use std::fmt;

/// Seniority level implied by the search criteria.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeniorityBias {
    Senior,
    Junior,
    #[serde(rename = "Mid-level")]
    MidLevel,
    /// Only produced by the analysis fallback path.
    Unknown,
}

impl SeniorityBias {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Senior => "Senior",
            Self::Junior => "Junior",
            Self::MidLevel => "Mid-level",
            Self::Unknown => "Unknown",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompanyStage {
    Startup,
    Enterprise,
    General,
}

impl CompanyStage {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Startup => "Startup",
            Self::Enterprise => "Enterprise",
            Self::General => "General",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SearchIntent {
    #[serde(rename = "Current Role")]
    CurrentRole,
    #[serde(rename = "Keyword Search")]
    KeywordSearch,
}

impl SearchIntent {
    pub const fn label(self) -> &'static str {
        match self {
            Self::CurrentRole => "Current Role",
            Self::KeywordSearch => "Keyword Search",
        }
    }
}

/// Display band for the approval card. Uses a wider band than the
/// recalibration rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalStatus {
    Critical,
    Healthy,
}

impl ApprovalStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::Healthy => "healthy",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DriftSeverity {
    Low,
    Medium,
    High,
}

impl DriftSeverity {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// The five free-text fields the dashboard accepts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawInputBundle {
    pub search_links: String,
    pub daily_updates: String,
    pub transcript: String,
    pub retro_notes: String,
    pub sheet_summary: String,
}

impl RawInputBundle {
    pub fn is_empty(&self) -> bool {
        InputField::ordered()
            .into_iter()
            .all(|field| self.get(field).trim().is_empty())
    }

    pub fn get(&self, field: InputField) -> &str {
        match field {
            InputField::SearchLinks => &self.search_links,
            InputField::DailyUpdates => &self.daily_updates,
            InputField::Transcript => &self.transcript,
            InputField::RetroNotes => &self.retro_notes,
            InputField::SheetSummary => &self.sheet_summary,
        }
    }

    /// Returns a copy with one field replaced.
    pub fn with(&self, field: InputField, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        let value = value.into();
        match field {
            InputField::SearchLinks => next.search_links = value,
            InputField::DailyUpdates => next.daily_updates = value,
            InputField::Transcript => next.transcript = value,
            InputField::RetroNotes => next.retro_notes = value,
            InputField::SheetSummary => next.sheet_summary = value,
        }
        next
    }
}

/// Identifies one input field (and its collapsible dashboard section).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputField {
    SearchLinks,
    DailyUpdates,
    Transcript,
    RetroNotes,
    SheetSummary,
}

impl InputField {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::SearchLinks,
            Self::DailyUpdates,
            Self::Transcript,
            Self::RetroNotes,
            Self::SheetSummary,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::SearchLinks => "Sales Navigator Links",
            Self::DailyUpdates => "EOD Updates",
            Self::Transcript => "Transcript Snippets",
            Self::RetroNotes => "Retro Notes",
            Self::SheetSummary => "Sheet Summary",
        }
    }
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn serialized<T: Serialize>(value: T) -> String {
        serde_json::to_string(&value).expect("enum serializes")
    }

    #[test]
    fn search_classifications_serialize_as_their_labels() {
        for bias in [
            SeniorityBias::Senior,
            SeniorityBias::Junior,
            SeniorityBias::MidLevel,
            SeniorityBias::Unknown,
        ] {
            assert_eq!(serialized(bias), format!("\"{}\"", bias.label()));
        }
        for stage in [
            CompanyStage::Startup,
            CompanyStage::Enterprise,
            CompanyStage::General,
        ] {
            assert_eq!(serialized(stage), format!("\"{}\"", stage.label()));
        }
        for intent in [SearchIntent::CurrentRole, SearchIntent::KeywordSearch] {
            assert_eq!(serialized(intent), format!("\"{}\"", intent.label()));
        }
    }

    #[test]
    fn labels_deserialize_back_into_variants() {
        let bias: SeniorityBias = serde_json::from_str("\"Mid-level\"").expect("label parses");
        assert_eq!(bias, SeniorityBias::MidLevel);
        let intent: SearchIntent =
            serde_json::from_str("\"Current Role\"").expect("label parses");
        assert_eq!(intent, SearchIntent::CurrentRole);
    }
}
