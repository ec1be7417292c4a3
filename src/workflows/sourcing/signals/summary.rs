use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

const REJECTION_KEYWORDS: &[&str] = &[
    "senior",
    "experience",
    "culture",
    "mismatch",
    "technical",
    "scale",
    "quality",
    "grind",
];

pub(crate) const DEFAULT_REJECTION_REASON: &str = "General Fit";

static APPROVAL_RATE_RE: OnceLock<Regex> = OnceLock::new();
static APPROVED_COUNT_RE: OnceLock<Regex> = OnceLock::new();
static REJECTED_COUNT_RE: OnceLock<Regex> = OnceLock::new();

fn approval_rate_pattern() -> &'static Regex {
    APPROVAL_RATE_RE.get_or_init(|| {
        // "Approval Rate: 22%", "approval-rate ~ 8%", "Approval (weekly) rate was 13%".
        // A digit directly before the number blocks the match.
        Regex::new(r"(?i)approval[\s\w():_-]*?rate(?:.*?\D)?(100|\d{1,2})%").unwrap()
    })
}

fn approved_count_pattern() -> &'static Regex {
    APPROVED_COUNT_RE.get_or_init(|| Regex::new(r"(?i)approved:\s*(\d+)").unwrap())
}

fn rejected_count_pattern() -> &'static Regex {
    REJECTED_COUNT_RE.get_or_init(|| Regex::new(r"(?i)rejected:\s*(\d+)").unwrap())
}

/// Signals derived from a pasted sheet or summary block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummarySignals {
    pub approval_rate: u8,
    pub top_rejection_reason: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approved: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejected: Option<u32>,
}

impl Default for SummarySignals {
    fn default() -> Self {
        Self {
            approval_rate: 0,
            top_rejection_reason: DEFAULT_REJECTION_REASON.to_string(),
            approved: None,
            rejected: None,
        }
    }
}

pub fn extract_summary_signals(text: &str) -> SummarySignals {
    let approval_rate = approval_rate_pattern()
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|digits| digits.as_str().parse::<u8>().ok())
        .unwrap_or(0);

    let lowered = text.to_lowercase();
    let top_rejection_reason = REJECTION_KEYWORDS
        .iter()
        .find(|keyword| lowered.contains(*keyword))
        .map(|keyword| format!("Issues with \"{keyword}\""))
        .unwrap_or_else(|| DEFAULT_REJECTION_REASON.to_string());

    SummarySignals {
        approval_rate,
        top_rejection_reason,
        approved: first_count(approved_count_pattern(), text),
        rejected: first_count(rejected_count_pattern(), text),
    }
}

fn first_count(pattern: &Regex, text: &str) -> Option<u32> {
    pattern
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|digits| digits.as_str().parse::<u32>().ok())
}
