use clap::Parser;
use eframe::egui;
use mobiles_dashboard::app::DashboardApp;
use mobiles_dashboard::config::Config;

fn main() -> eframe::Result {
    env_logger::init();
    let config = Config::parse();
    log::info!("dataset: {}", config.data.display());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([720.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Mobiles Dashboard",
        options,
        Box::new(|_cc| Ok(Box::new(DashboardApp::new(config)))),
    )
}
