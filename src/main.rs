mod app;
mod color;
mod config;
mod data;
mod nav;
mod state;
mod ui;

use anyhow::{anyhow, Context, Result};
use app::AirAwareApp;
use config::AppConfig;
use eframe::egui;
use state::AppState;

fn main() -> Result<()> {
    env_logger::init();

    let config = AppConfig::default();
    config.log_config();

    let state = AppState::with_sample().context("building the sample dataset")?;
    log::info!("Annotated {} readings", state.dataset.len());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.inner_size)
            .with_min_inner_size(config.min_inner_size),
        ..Default::default()
    };

    let title = config.window_title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Ok(Box::new(AirAwareApp::new(state, config)))),
    )
    .map_err(|e| anyhow!("window error: {e}"))
}
