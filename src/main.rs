// src/main.rs
use eframe::egui;
use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod analysis;
mod app;
mod config;
mod state;
mod ui;

use app::SentimentApp;
use crate::config::AppSettings;

fn init_logging(default_filter: &str) {
    // RUST_LOG wins over the configured filter
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let path = AppSettings::default_path();
    let settings = AppSettings::load_from(path.as_deref())?;
    init_logging(&settings.log_filter);

    match AppSettings::file_in_use(path.as_deref()) {
        Some(file) => info!(file = %file.display(), "settings loaded"),
        None => info!(searched = ?path, "no settings file, using defaults and environment"),
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([settings.window.width, settings.window.height])
            .with_title("Sentiment AI 🧠"),
        ..Default::default()
    };

    eframe::run_native(
        "Sentiment AI",
        options,
        Box::new(move |cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::light());
            Box::new(SentimentApp::new(cc, &settings))
        }),
    ).map_err(|e| anyhow::anyhow!("Failed to run application: {}", e))
}
