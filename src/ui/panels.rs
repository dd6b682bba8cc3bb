use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};
use egui_extras::{Size, StripBuilder};

use crate::color::CategoryColors;
use crate::data::stats;
use crate::predict::encoder::{Country, JobRole, PredictorYear};
use crate::predict::{PredictionOutcome, format_usd};
use crate::data::model::{CompanySize, EmploymentType, ExperienceLevel};
use crate::state::{AppState, Tab};

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        ui.selectable_value(&mut state.tab, Tab::Dashboard, "Dashboard");
        ui.selectable_value(&mut state.tab, Tab::Predictor, "Salary predictor");

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!("{} postings loaded", ds.len()));
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Dashboard tab
// ---------------------------------------------------------------------------

/// Render the chart grid: two rows of panels, proportions echoing the
/// layout the dashboard has always used.
pub fn dashboard_panel(ui: &mut Ui, state: &mut AppState) {
    let Some(dataset) = &state.dataset else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a salary dataset to view the dashboard  (File → Open…)");
        });
        return;
    };
    if dataset.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("The loaded dataset has no postings.");
        });
        return;
    }
    let records = &dataset.records;

    // All aggregates are recomputed from the record set on every frame.
    let yearly_means = stats::mean_salary_by_year(records);
    let top_paying = stats::top_titles_by_median_salary(records, stats::TOP_TITLES);
    let distribution = stats::salary_distribution_by_experience(records);
    let shares = stats::job_title_shares(records, stats::MIN_TITLE_COUNT);
    let popular = stats::top_titles_by_count(records, stats::TOP_TITLES);

    let level_colors =
        CategoryColors::new(ExperienceLevel::ALL.iter().map(|l| l.label()));
    let share_colors = CategoryColors::new(shares.iter().map(|s| s.title.clone()));

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            StripBuilder::new(ui)
                .size(Size::exact(330.0))
                .size(Size::exact(330.0))
                .vertical(|mut strip| {
                    strip.strip(|builder| {
                        builder
                            .size(Size::relative(0.33))
                            .size(Size::relative(0.40))
                            .size(Size::relative(0.27))
                            .horizontal(|mut strip| {
                                strip.cell(|ui: &mut Ui| {
                                    ui.strong("Salary trend over time");
                                    crate::ui::charts::salary_trend_chart(ui, &yearly_means);
                                });
                                strip.cell(|ui: &mut Ui| {
                                    ui.strong("Top 10 high-paying jobs");
                                    crate::ui::charts::top_paying_bar_chart(ui, &top_paying);
                                });
                                strip.cell(|ui: &mut Ui| {
                                    ui.strong("Salary distribution by experience level");
                                    crate::ui::charts::experience_box_plot(
                                        ui,
                                        &distribution,
                                        &level_colors,
                                    );
                                });
                            });
                    });
                    strip.strip(|builder| {
                        builder
                            .size(Size::relative(0.64))
                            .size(Size::relative(0.36))
                            .horizontal(|mut strip| {
                                strip.cell(|ui: &mut Ui| {
                                    ui.strong("Job title distribution");
                                    crate::ui::charts::job_share_donut(
                                        ui,
                                        &shares,
                                        &share_colors,
                                    );
                                });
                                strip.cell(|ui: &mut Ui| {
                                    ui.strong("Top 10 popular jobs");
                                    crate::ui::charts::popular_jobs_table(ui, &popular);
                                });
                            });
                    });
                });
        });
}

// ---------------------------------------------------------------------------
// Predictor tab
// ---------------------------------------------------------------------------

/// Render the prediction form: six dropdowns, one submit action, and the
/// current outcome (prompt or estimate).
pub fn predictor_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Estimate a salary");
    ui.add_space(8.0);

    let input = &mut state.predictor.input;

    egui::Grid::new("predictor_form")
        .num_columns(2)
        .spacing([16.0, 8.0])
        .show(ui, |ui: &mut Ui| {
            ui.label("Work year");
            egui::ComboBox::from_id_salt("work_year")
                .selected_text(input.work_year.label())
                .show_ui(ui, |ui: &mut Ui| {
                    for year in PredictorYear::ALL {
                        ui.selectable_value(&mut input.work_year, year, year.label());
                    }
                });
            ui.end_row();

            ui.label("Experience level");
            egui::ComboBox::from_id_salt("experience_level")
                .selected_text(input.experience.label())
                .show_ui(ui, |ui: &mut Ui| {
                    for level in ExperienceLevel::ALL {
                        ui.selectable_value(&mut input.experience, level, level.label());
                    }
                });
            ui.end_row();

            ui.label("Employment type");
            egui::ComboBox::from_id_salt("employment_type")
                .selected_text(input.employment.label())
                .show_ui(ui, |ui: &mut Ui| {
                    for ty in EmploymentType::ALL {
                        ui.selectable_value(&mut input.employment, ty, ty.label());
                    }
                });
            ui.end_row();

            ui.label("Job title");
            egui::ComboBox::from_id_salt("job_title")
                .selected_text(input.job_title.label())
                .show_ui(ui, |ui: &mut Ui| {
                    for role in JobRole::ALL {
                        ui.selectable_value(&mut input.job_title, role, role.label());
                    }
                });
            ui.end_row();

            ui.label("Company size");
            egui::ComboBox::from_id_salt("company_size")
                .selected_text(input.company_size.label())
                .show_ui(ui, |ui: &mut Ui| {
                    for size in CompanySize::ALL {
                        ui.selectable_value(&mut input.company_size, size, size.label());
                    }
                });
            ui.end_row();

            ui.label("Company location");
            egui::ComboBox::from_id_salt("company_location")
                .selected_text(input.company_location.label())
                .show_ui(ui, |ui: &mut Ui| {
                    for country in Country::ALL {
                        ui.selectable_value(&mut input.company_location, country, country.label());
                    }
                });
            ui.end_row();
        });

    ui.add_space(12.0);

    if ui.button("Estimate salary").clicked() {
        state.submit_prediction();
    }

    ui.add_space(12.0);

    match state.predictor.outcome {
        PredictionOutcome::Idle => {
            ui.label("Select the role details above and press Estimate salary.");
        }
        PredictionOutcome::Predicted(salary) => {
            ui.heading(format!("Estimated salary: {}", format_usd(salary)));
        }
    }
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open salary dataset")
        .add_filter("Supported files", &["json", "csv", "parquet", "pq"])
        .add_filter("JSON", &["json"])
        .add_filter("CSV", &["csv"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file();

    if let Some(path) = file {
        state.load_dataset(&path);
    }
}
