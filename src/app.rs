use std::path::Path;

use eframe::egui;

use crate::state::{AppState, Tab};
use crate::ui::panels;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct DashboardApp {
    pub state: AppState,
}

impl DashboardApp {
    /// Build the app, loading the startup dataset when the file exists.
    pub fn new(dataset_path: &Path) -> Self {
        let mut state = AppState::default();
        if dataset_path.exists() {
            state.load_dataset(dataset_path);
        } else {
            log::warn!("Dataset {} not found, waiting for File → Open…", dataset_path.display());
        }
        Self { state }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar and tab switch ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Central panel: active tab ----
        egui::CentralPanel::default().show(ctx, |ui| match self.state.tab {
            Tab::Dashboard => panels::dashboard_panel(ui, &mut self.state),
            Tab::Predictor => panels::predictor_panel(ui, &mut self.state),
        });
    }
}
