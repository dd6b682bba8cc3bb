mod app;
mod color;
mod data;
mod predict;
mod state;
mod ui;

use std::path::PathBuf;

use app::DashboardApp;
use eframe::egui;

/// Dataset loaded at startup when no path is given on the command line.
const DEFAULT_DATASET: &str = "data/ds_salaries.json";

fn main() -> eframe::Result {
    env_logger::init();

    let dataset_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATASET));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 840.0])
            .with_min_inner_size([700.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "DataPay Insights",
        options,
        Box::new(move |_cc| Ok(Box::new(DashboardApp::new(&dataset_path)))),
    )
}
