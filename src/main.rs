// src/main.rs
use eframe::egui;
use anyhow::Result;

mod analysis;
mod app;
mod config;
mod file;
mod state;
mod ui;
mod utils;

use app::LumenApp;

fn main() -> Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 800.0])
            .with_title("Lumen ROI"),
        ..Default::default()
    };

    eframe::run_native(
        "Lumen ROI",
        options,
        Box::new(|_cc| {
            Box::new(LumenApp::new())
        }),
    ).map_err(|e| anyhow::anyhow!("Failed to run application: {}", e))
}
