use eframe::egui::{self, RichText, Ui};

use crate::color::category_color;
use crate::data::model::Category;
use crate::state::{AppState, THRESHOLD_MAX, THRESHOLD_MIN, THRESHOLD_STEP};

// ---------------------------------------------------------------------------
// Left side panel – threshold control and counters
// ---------------------------------------------------------------------------

/// Render the threshold slider and the `X / Y` readouts.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Threshold");
    ui.separator();

    let slider = egui::Slider::new(&mut state.threshold, THRESHOLD_MIN..=THRESHOLD_MAX)
        .step_by(THRESHOLD_STEP)
        .text("Minimum score");
    if ui.add(slider).changed() {
        // The reactive core: one recomputation per input event.
        state.refilter();
    }

    ui.add_space(8.0);
    ui.separator();

    let (succ_kept, succ_total) = state.view.success_counts();
    let (fail_kept, fail_total) = state.view.failure_counts();

    ui.label(
        RichText::new(format!("Successes: {succ_kept} / {succ_total}"))
            .color(category_color(Category::Success))
            .strong(),
    );
    ui.label(
        RichText::new(format!("Failures: {fail_kept} / {fail_total}"))
            .color(category_color(Category::Failure))
            .strong(),
    );
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top bar with the overall row counts.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.label(RichText::new("Score Scope").strong());
        ui.separator();
        ui.label(format!(
            "{} scores loaded, {} above threshold",
            state.store.len(),
            state.view.rows.len()
        ));
    });
}
