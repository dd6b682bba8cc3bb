use std::path::Path;

use crate::data::loader;
use crate::data::model::SalaryDataset;
use crate::predict::SalaryPredictor;
use crate::predict::artifact::ModelStore;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Which top-level surface is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Dashboard,
    Predictor,
}

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded dataset (None until a file is loaded). Loaded once per
    /// process and reused across frames.
    pub dataset: Option<SalaryDataset>,

    /// Active top-level tab.
    pub tab: Tab,

    /// Prediction form state and session-cached model.
    pub predictor: SalaryPredictor,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            tab: Tab::Dashboard,
            predictor: SalaryPredictor::new(ModelStore::from_env()),
            status_message: None,
        }
    }
}

impl AppState {
    /// Load a dataset file into state, recording failures in the status
    /// line.
    pub fn load_dataset(&mut self, path: &Path) {
        match loader::load_file(path) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} postings across {} job titles and {} locations, years {:?}",
                    dataset.len(),
                    dataset.job_titles.len(),
                    dataset.locations.len(),
                    dataset.years
                );
                self.dataset = Some(dataset);
                self.status_message = None;
            }
            Err(e) => {
                log::error!("Failed to load dataset: {e:#}");
                self.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }

    /// Run the prediction form submission, surfacing failures in the
    /// status line.
    pub fn submit_prediction(&mut self) {
        if let Err(e) = self.predictor.submit() {
            log::error!("Prediction failed: {e}");
            self.status_message = Some(format!("Error: {e}"));
        }
    }
}
