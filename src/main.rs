mod app;
mod color;
mod data;
mod state;
mod ui;

use app::ScoreScopeApp;
use eframe::egui;
use state::AppState;

fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 850.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Score Scope – Threshold Dashboard",
        options,
        Box::new(|_cc| {
            let store = data::store::builtin_store()?;
            log::info!(
                "Loaded {} success and {} failure scores",
                store.success.len(),
                store.failure.len()
            );
            Ok(Box::new(ScoreScopeApp::new(AppState::new(store))))
        }),
    )
}
