mod app;
mod ui;

use app::CarShopApp;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([850.0, 500.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Car Buying Recommendation",
        options,
        Box::new(|_cc| Ok(Box::new(CarShopApp::default()))),
    )
}
