use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, plot, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct ScoreScopeApp {
    pub state: AppState,
}

impl ScoreScopeApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for ScoreScopeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: title and row counts ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state);
        });

        // ---- Left side panel: threshold slider and counters ----
        egui::SidePanel::left("threshold_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: charts and the filtered-rows table ----
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui: &mut egui::Ui| {
                    ui.heading(format!("Scores ≥ {:.2}", self.state.view.threshold));
                    plot::scatter_strip(ui, &self.state);

                    ui.add_space(12.0);
                    ui.heading("Success-to-failure ratio vs. threshold");
                    plot::ratio_plot(ui, &self.state);

                    ui.add_space(12.0);
                    ui.heading("Histogram of scores above threshold");
                    plot::histogram_plot(ui, &self.state);

                    ui.add_space(12.0);
                    ui.heading("Filtered scores");
                    table::filtered_table(ui, &self.state);
                });
        });
    }
}
