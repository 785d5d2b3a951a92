mod app;
mod ui;

use eframe::egui;

use tectonics_explorer::config::ExplorerConfig;

use app::ExplorerApp;

fn main() {
    env_logger::init();

    let config = ExplorerConfig::default();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_title("Explore Plate Tectonics"),
        ..Default::default()
    };

    eframe::run_native(
        "Tectonics Explorer",
        options,
        Box::new(|cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::light());
            Ok(Box::new(ExplorerApp::new(&cc.egui_ctx, config)))
        }),
    )
    .expect("Failed to start Tectonics Explorer");
}
