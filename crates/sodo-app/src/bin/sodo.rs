//! Sodo desktop client using egui/eframe.

use clap::Parser as _;
use sodo_app::{SodoApp, config::Config, version};
use sodo_client::HttpService;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    const APP_ID: &str = "io.github.gifnksm.sodo";

    better_panic::install();
    env_logger::init();

    let config = Config::parse();
    log::info!(
        "Starting Sodo {}, server={}",
        version::build_version(),
        config.server
    );
    let service = HttpService::new(&config.server, config.timeout())?;

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_app_id(APP_ID)
            .with_resizable(true)
            .with_inner_size((900.0, 640.0))
            .with_min_inner_size((480.0, 360.0)),
        ..Default::default()
    };
    eframe::run_native(
        "Sodo",
        options,
        Box::new(move |cc| Ok(Box::new(SodoApp::new(cc, &config, service)))),
    )?;
    Ok(())
}
