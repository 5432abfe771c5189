use eframe::egui::Ui;
use egui_extras::{Column, TableBuilder};

use crate::color::category_color;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Filtered rows table
// ---------------------------------------------------------------------------

/// One row per record passing the filter, in store order.
pub fn filtered_table(ui: &mut Ui, state: &AppState) {
    let rows = &state.view.rows;
    if rows.is_empty() {
        ui.label("No scores at or above the current threshold.");
        return;
    }

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::auto().at_least(40.0))
        .column(Column::initial(120.0))
        .column(Column::remainder())
        .header(20.0, |mut header| {
            header.col(|ui: &mut Ui| {
                ui.strong("#");
            });
            header.col(|ui: &mut Ui| {
                ui.strong("Score");
            });
            header.col(|ui: &mut Ui| {
                ui.strong("Category");
            });
        })
        .body(|body| {
            body.rows(18.0, rows.len(), |mut row| {
                let record = rows[row.index()];
                let idx = row.index();
                row.col(|ui: &mut Ui| {
                    ui.label(idx.to_string());
                });
                row.col(|ui: &mut Ui| {
                    ui.label(format!("{:.8}", record.score));
                });
                row.col(|ui: &mut Ui| {
                    ui.colored_label(
                        category_color(record.category),
                        record.category.to_string(),
                    );
                });
            });
        });
}
