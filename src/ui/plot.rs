use eframe::egui::Ui;
use egui_plot::{Bar, BarChart, Legend, Line, LineStyle, Plot, PlotPoints, Points, VLine};

use crate::color::{category_color, category_fill, marker_color};
use crate::data::hist::{histogram, shared_range, BIN_COUNT};
use crate::data::model::Category;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Scatter strip – filtered scores by category
// ---------------------------------------------------------------------------

/// One dot per filtered score; the y axis carries the two category lanes.
pub fn scatter_strip(ui: &mut Ui, state: &AppState) {
    let success: PlotPoints = state
        .view
        .success
        .iter()
        .map(|&s| [s, Category::Success.lane()])
        .collect();
    let failure: PlotPoints = state
        .view
        .failure
        .iter()
        .map(|&s| [s, Category::Failure.lane()])
        .collect();

    Plot::new("scatter_strip")
        .legend(Legend::default())
        .x_axis_label("Score")
        .y_axis_label("Category")
        .include_y(-0.5)
        .include_y(1.5)
        .height(200.0)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.points(
                Points::new(success)
                    .name(Category::Success.to_string())
                    .color(category_color(Category::Success))
                    .radius(4.0),
            );
            plot_ui.points(
                Points::new(failure)
                    .name(Category::Failure.to_string())
                    .color(category_color(Category::Failure))
                    .radius(4.0),
            );
        });
}

// ---------------------------------------------------------------------------
// Ratio curve – success/failure ratio across the threshold sweep
// ---------------------------------------------------------------------------

/// The precomputed sweep as a line, with gaps where the ratio is undefined,
/// plus a dashed marker at the current threshold.
pub fn ratio_plot(ui: &mut Ui, state: &AppState) {
    let segments = state.ratio_curve.segments();

    Plot::new("ratio_curve")
        .legend(Legend::default())
        .x_axis_label("Threshold")
        .y_axis_label("Success / failure ratio")
        .height(220.0)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            // Undefined grid points must show as gaps, so the curve is drawn
            // one defined segment at a time. Only the first segment carries
            // the legend name to avoid duplicate entries.
            for (i, segment) in segments.into_iter().enumerate() {
                let mut line = Line::new(PlotPoints::from(segment))
                    .color(eframe::egui::Color32::from_rgb(0x8a, 0x3f, 0xc8))
                    .width(1.5);
                if i == 0 {
                    line = line.name("Success/failure ratio");
                }
                plot_ui.line(line);
            }

            plot_ui.vline(
                VLine::new(state.threshold)
                    .color(marker_color())
                    .style(LineStyle::dashed_loose())
                    .name("Selected threshold"),
            );
        });
}

// ---------------------------------------------------------------------------
// Histogram – filtered score distributions, overlaid
// ---------------------------------------------------------------------------

/// 20 shared-edge bins per category, semi-transparent so the overlap reads.
pub fn histogram_plot(ui: &mut Ui, state: &AppState) {
    let range = shared_range(&state.view.success, &state.view.failure);

    Plot::new("score_histogram")
        .legend(Legend::default())
        .x_axis_label("Score")
        .y_axis_label("Count")
        .height(220.0)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            if let Some(range) = range {
                for (scores, category) in [
                    (&state.view.success, Category::Success),
                    (&state.view.failure, Category::Failure),
                ] {
                    let bars: Vec<Bar> = histogram(scores, BIN_COUNT, range)
                        .into_iter()
                        .filter(|b| b.count > 0)
                        .map(|b| {
                            Bar::new(b.center, b.count as f64)
                                .width(b.width)
                                .fill(category_fill(category))
                        })
                        .collect();
                    plot_ui.bar_chart(
                        BarChart::new(bars)
                            .name(category.to_string())
                            .color(category_color(category)),
                    );
                }
            }

            plot_ui.vline(
                VLine::new(state.threshold)
                    .color(marker_color())
                    .style(LineStyle::dashed_loose()),
            );
        });
}
