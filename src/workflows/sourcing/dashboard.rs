use super::demo::{demo_inputs, demo_snapshot};
use super::domain::{InputField, RawInputBundle};
use super::insights::InsightEngine;
use super::snapshot::{analyze_inputs, DashboardSnapshot};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Which input sections are expanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionVisibility {
    pub search_links: bool,
    pub daily_updates: bool,
    pub transcript: bool,
    pub retro_notes: bool,
    pub sheet_summary: bool,
}

impl Default for SectionVisibility {
    fn default() -> Self {
        Self {
            search_links: true,
            daily_updates: false,
            transcript: false,
            retro_notes: false,
            sheet_summary: false,
        }
    }
}

impl SectionVisibility {
    pub const fn all_expanded() -> Self {
        Self {
            search_links: true,
            daily_updates: true,
            transcript: true,
            retro_notes: true,
            sheet_summary: true,
        }
    }

    pub fn is_expanded(&self, field: InputField) -> bool {
        match field {
            InputField::SearchLinks => self.search_links,
            InputField::DailyUpdates => self.daily_updates,
            InputField::Transcript => self.transcript,
            InputField::RetroNotes => self.retro_notes,
            InputField::SheetSummary => self.sheet_summary,
        }
    }

    fn toggled(mut self, field: InputField) -> Self {
        let flag = match field {
            InputField::SearchLinks => &mut self.search_links,
            InputField::DailyUpdates => &mut self.daily_updates,
            InputField::Transcript => &mut self.transcript,
            InputField::RetroNotes => &mut self.retro_notes,
            InputField::SheetSummary => &mut self.sheet_summary,
        };
        *flag = !*flag;
        self
    }
}

/// User actions on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DashboardEvent {
    EditInput { field: InputField, value: String },
    ToggleSection { field: InputField },
    Analyze { at: DateTime<Utc> },
    LoadDemo,
    ClearAll,
}

/// Complete dashboard state. Events produce a new value; nothing is mutated
/// in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardState {
    pub inputs: RawInputBundle,
    /// `None` renders as the "waiting for data" placeholder.
    pub snapshot: Option<DashboardSnapshot>,
    pub sections: SectionVisibility,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            inputs: RawInputBundle::default(),
            snapshot: Some(demo_snapshot()),
            sections: SectionVisibility::default(),
        }
    }
}

impl DashboardState {
    pub fn empty() -> Self {
        Self {
            inputs: RawInputBundle::default(),
            snapshot: None,
            sections: SectionVisibility::default(),
        }
    }

    pub fn apply(&self, event: DashboardEvent, engine: &InsightEngine) -> Self {
        match event {
            DashboardEvent::EditInput { field, value } => Self {
                inputs: self.inputs.with(field, value),
                ..self.clone()
            },
            DashboardEvent::ToggleSection { field } => Self {
                sections: self.sections.toggled(field),
                ..self.clone()
            },
            DashboardEvent::Analyze { at } => Self {
                inputs: self.inputs.clone(),
                snapshot: Some(analyze_inputs(self.inputs.clone(), engine, at)),
                sections: SectionVisibility::all_expanded(),
            },
            DashboardEvent::LoadDemo => Self {
                inputs: demo_inputs(),
                snapshot: Some(demo_snapshot()),
                sections: SectionVisibility::all_expanded(),
            },
            DashboardEvent::ClearAll => Self {
                inputs: RawInputBundle::default(),
                snapshot: None,
                sections: self.sections,
            },
        }
    }

    /// Folds a sequence of events over this state.
    pub fn replay<I>(&self, events: I, engine: &InsightEngine) -> Self
    where
        I: IntoIterator<Item = DashboardEvent>,
    {
        events
            .into_iter()
            .fold(self.clone(), |state, event| state.apply(event, engine))
    }
}
