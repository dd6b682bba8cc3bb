use eframe::egui::{self, Align2, Color32, Pos2, Stroke, Ui};
use egui_plot::{
    Bar, BarChart, BoxElem, BoxPlot, BoxSpread, GridMark, Line, Plot, PlotPoint, PlotPoints,
    Points, Text,
};

use crate::color::{CategoryColors, blue_ramp};
use crate::data::model::ExperienceLevel;
use crate::data::stats::{BoxSummary, TitleCount, TitleValue, YearlyMean};

// ---------------------------------------------------------------------------
// Value formatting
// ---------------------------------------------------------------------------

/// Compact value label for bar tops: `184000` → `"184k"`.
pub fn format_compact(value: f64) -> String {
    let magnitude = value.abs();
    if magnitude >= 1_000_000.0 {
        format!("{:.1}M", value / 1_000_000.0)
    } else if magnitude >= 1_000.0 {
        format!("{:.0}k", value / 1_000.0)
    } else {
        format!("{value:.0}")
    }
}

// ---------------------------------------------------------------------------
// Salary trend (line)
// ---------------------------------------------------------------------------

/// Mean salary per work year as a line series.
pub fn salary_trend_chart(ui: &mut Ui, data: &[YearlyMean]) {
    let points: PlotPoints = data
        .iter()
        .map(|m| [m.year as f64, m.mean_salary])
        .collect();
    let line = Line::new(points).color(Color32::LIGHT_BLUE).width(2.0);

    Plot::new("salary_trend")
        .x_axis_label("Work year")
        .y_axis_label("Mean salary (USD)")
        .x_axis_formatter(whole_number_ticks)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .allow_boxed_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.line(line);
        });
}

/// Suppress the fractional tick labels egui inserts between years.
fn whole_number_ticks(mark: GridMark, _range: &std::ops::RangeInclusive<f64>) -> String {
    if (mark.value - mark.value.round()).abs() < 1e-6 {
        format!("{:.0}", mark.value)
    } else {
        String::new()
    }
}

// ---------------------------------------------------------------------------
// Top-paying jobs (bars with value labels)
// ---------------------------------------------------------------------------

/// Median salary per job title, one bar per title with a compact value
/// label above it, value-scaled blue fill.
pub fn top_paying_bar_chart(ui: &mut Ui, data: &[TitleValue]) {
    let max_value = data.iter().map(|t| t.value).fold(f64::MIN, f64::max);
    let bars: Vec<Bar> = data
        .iter()
        .enumerate()
        .map(|(i, t)| {
            let intensity = if max_value > 0.0 {
                (t.value / max_value) as f32
            } else {
                0.0
            };
            Bar::new(i as f64, t.value)
                .width(0.65)
                .fill(blue_ramp(intensity))
                .name(&t.title)
        })
        .collect();

    let titles: Vec<String> = data.iter().map(|t| t.title.clone()).collect();
    let labels: Vec<(f64, f64, String)> = data
        .iter()
        .enumerate()
        .map(|(i, t)| (i as f64, t.value, format_compact(t.value)))
        .collect();

    Plot::new("top_paying_jobs")
        .y_axis_label("Median salary (USD)")
        .x_axis_formatter(move |mark: GridMark, _range: &std::ops::RangeInclusive<f64>| {
            let rounded = mark.value.round();
            if (mark.value - rounded).abs() > 0.05 || rounded < 0.0 {
                return String::new();
            }
            titles
                .get(rounded as usize)
                // Stack the words so long titles fit under their bar.
                .map(|t| t.replace(' ', "\n"))
                .unwrap_or_default()
        })
        .show_grid(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .allow_boxed_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars));
            for (x, y, label) in labels {
                plot_ui.text(
                    Text::new(PlotPoint::new(x, y), label)
                        .anchor(Align2::CENTER_BOTTOM)
                        .color(Color32::LIGHT_GRAY),
                );
            }
        });
}

// ---------------------------------------------------------------------------
// Salary distribution by experience (box plot)
// ---------------------------------------------------------------------------

/// One colored box per experience level, outliers drawn as points.
pub fn experience_box_plot(
    ui: &mut Ui,
    data: &[(ExperienceLevel, BoxSummary)],
    colors: &CategoryColors,
) {
    let mut boxes = Vec::with_capacity(data.len());
    let mut outlier_points: Vec<[f64; 2]> = Vec::new();

    for (i, (level, summary)) in data.iter().enumerate() {
        let color = colors.get(level.label());
        boxes.push(
            BoxElem::new(
                i as f64,
                BoxSpread::new(
                    summary.lower_whisker,
                    summary.q1,
                    summary.median,
                    summary.q3,
                    summary.upper_whisker,
                ),
            )
            .name(level.label())
            .fill(color.gamma_multiply(0.35))
            .stroke(Stroke::new(1.5, color)),
        );
        outlier_points.extend(summary.outliers.iter().map(|v| [i as f64, *v]));
    }

    let labels: Vec<String> = data.iter().map(|(level, _)| level.label().to_string()).collect();

    Plot::new("experience_distribution")
        .y_axis_label("Salary (USD)")
        .x_axis_formatter(move |mark: GridMark, _range: &std::ops::RangeInclusive<f64>| {
            let rounded = mark.value.round();
            if (mark.value - rounded).abs() > 0.05 || rounded < 0.0 {
                return String::new();
            }
            labels.get(rounded as usize).cloned().unwrap_or_default()
        })
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .allow_boxed_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.box_plot(BoxPlot::new(boxes));
            if !outlier_points.is_empty() {
                plot_ui.points(
                    Points::new(outlier_points)
                        .radius(1.5)
                        .color(Color32::GRAY),
                );
            }
        });
}

// ---------------------------------------------------------------------------
// Job title shares (donut)
// ---------------------------------------------------------------------------

/// Share of postings per job title as a donut, with a legend of
/// percentages beside it.
pub fn job_share_donut(ui: &mut Ui, shares: &[TitleCount], colors: &CategoryColors) {
    let total: usize = shares.iter().map(|s| s.count).sum();
    if total == 0 {
        ui.label("No data.");
        return;
    }

    ui.horizontal(|ui: &mut Ui| {
        let size = ui.available_height().min(250.0);
        let (rect, _response) =
            ui.allocate_exact_size(egui::vec2(size, size), egui::Sense::hover());
        let painter = ui.painter_at(rect);
        let center = rect.center();
        let outer = size * 0.48;
        let inner = outer * 0.55;

        let mut angle = -std::f32::consts::FRAC_PI_2;
        for share in shares {
            let sweep = (share.count as f32 / total as f32) * std::f32::consts::TAU;
            paint_annular_sector(
                &painter,
                center,
                inner,
                outer,
                angle,
                angle + sweep,
                colors.get(&share.title),
            );
            angle += sweep;
        }

        ui.add_space(8.0);
        ui.vertical(|ui: &mut Ui| {
            for share in shares {
                let pct = 100.0 * share.count as f64 / total as f64;
                ui.horizontal(|ui: &mut Ui| {
                    let (swatch, _) =
                        ui.allocate_exact_size(egui::vec2(10.0, 10.0), egui::Sense::hover());
                    ui.painter().rect_filled(swatch, 2, colors.get(&share.title));
                    ui.label(format!("{}  {:.1}%", share.title, pct));
                });
            }
        });
    });
}

/// Fill an annular sector by tessellating it into small convex quads.
fn paint_annular_sector(
    painter: &egui::Painter,
    center: Pos2,
    inner: f32,
    outer: f32,
    start: f32,
    end: f32,
    color: Color32,
) {
    let steps = (((end - start).abs() / 0.05).ceil() as usize).max(1);
    for k in 0..steps {
        let a = start + (end - start) * k as f32 / steps as f32;
        let b = start + (end - start) * (k + 1) as f32 / steps as f32;
        let quad = vec![
            center + inner * egui::vec2(a.cos(), a.sin()),
            center + outer * egui::vec2(a.cos(), a.sin()),
            center + outer * egui::vec2(b.cos(), b.sin()),
            center + inner * egui::vec2(b.cos(), b.sin()),
        ];
        painter.add(egui::Shape::convex_polygon(quad, color, Stroke::NONE));
    }
}

// ---------------------------------------------------------------------------
// Popular jobs (ranked table with proportional bars)
// ---------------------------------------------------------------------------

/// Ranked table of posting counts; the count column doubles as a bar
/// indicator proportional to the largest count.
pub fn popular_jobs_table(ui: &mut Ui, rows: &[TitleCount]) {
    use egui_extras::{Column, TableBuilder};

    let max_count = rows.iter().map(|r| r.count).max().unwrap_or(1).max(1);

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::remainder().at_least(120.0))
        .column(Column::exact(150.0))
        .header(20.0, |mut header| {
            header.col(|ui| {
                ui.strong("Job designation");
            });
            header.col(|ui| {
                ui.strong("No. of posts");
            });
        })
        .body(|mut body| {
            for row in rows {
                body.row(20.0, |mut table_row| {
                    table_row.col(|ui| {
                        ui.label(&row.title);
                    });
                    table_row.col(|ui| {
                        ui.add(
                            egui::ProgressBar::new(row.count as f32 / max_count as f32)
                                .text(row.count.to_string()),
                        );
                    });
                });
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_labels() {
        assert_eq!(format_compact(184_000.0), "184k");
        assert_eq!(format_compact(1_500_000.0), "1.5M");
        assert_eq!(format_compact(950.0), "950");
        assert_eq!(format_compact(0.0), "0");
    }
}
