mod normalizer;
mod search;
mod summary;
mod updates;

pub use search::{extract_search_signals, SearchSignals};
pub use summary::{extract_summary_signals, SummarySignals};
pub use updates::{extract_update_signals, ToolMentions, UpdateSignals};

pub(crate) use updates::juicebox_mentions;

use super::domain::{RawInputBundle, SeniorityBias};
use serde::{Deserialize, Serialize};

/// The three signal records extracted from one set of inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalBundle {
    pub search: SearchSignals,
    pub updates: UpdateSignals,
    pub summary: SummarySignals,
}

impl SignalBundle {
    pub fn extract(inputs: &RawInputBundle) -> Self {
        Self {
            search: extract_search_signals(&inputs.search_links),
            updates: extract_update_signals(&inputs.daily_updates),
            summary: extract_summary_signals(&inputs.sheet_summary),
        }
    }

    /// Safe replacement used when the combined extraction step fails.
    pub fn fallback() -> Self {
        Self {
            search: SearchSignals {
                seniority_bias: SeniorityBias::Unknown,
                ..SearchSignals::default()
            },
            updates: UpdateSignals::default(),
            summary: SummarySignals {
                top_rejection_reason: "None".to_string(),
                ..SummarySignals::default()
            },
        }
    }
}
