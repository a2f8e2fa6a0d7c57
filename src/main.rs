mod app;
mod color;
mod data;
mod images;
mod presenter;
mod router;
mod state;
mod ui;

use app::PuppyApp;
use eframe::egui;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let app = PuppyApp::new()?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([420.0, 780.0])
            .with_min_inner_size([320.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Puppy Adopt",
        options,
        Box::new(|cc| {
            // Install image loaders so egui can fetch and decode the photos.
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(app))
        }),
    )
    .map_err(|e| anyhow::anyhow!("eframe exited with an error: {e}"))
}
