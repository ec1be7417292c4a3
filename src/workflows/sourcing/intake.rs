use super::domain::{InputField, RawInputBundle};
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum InputLoadError {
    #[error("failed to read {field} from {}: {source}", .path.display())]
    Read {
        field: InputField,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Optional file per input field; missing entries stay empty.
#[derive(Debug, Clone, Default)]
pub struct InputSources {
    pub search_links: Option<PathBuf>,
    pub daily_updates: Option<PathBuf>,
    pub transcript: Option<PathBuf>,
    pub retro_notes: Option<PathBuf>,
    pub sheet_summary: Option<PathBuf>,
}

impl InputSources {
    fn path(&self, field: InputField) -> Option<&Path> {
        match field {
            InputField::SearchLinks => self.search_links.as_deref(),
            InputField::DailyUpdates => self.daily_updates.as_deref(),
            InputField::Transcript => self.transcript.as_deref(),
            InputField::RetroNotes => self.retro_notes.as_deref(),
            InputField::SheetSummary => self.sheet_summary.as_deref(),
        }
    }

    pub fn load(&self) -> Result<RawInputBundle, InputLoadError> {
        let mut bundle = RawInputBundle::default();
        for field in InputField::ordered() {
            if let Some(path) = self.path(field) {
                let text = std::fs::read_to_string(path).map_err(|source| InputLoadError::Read {
                    field,
                    path: path.to_path_buf(),
                    source,
                })?;
                bundle = bundle.with(field, text);
            }
        }
        Ok(bundle)
    }
}
