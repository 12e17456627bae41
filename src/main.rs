// Prevents additional console window on Windows in release, DO NOT REMOVE!!
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! DocShelf Desktop Application
//!
//! A native egui client for the document library backend.

use std::sync::Arc;

use anyhow::Context;
use docshelf::config::AppConfig;
use docshelf::gui::DocShelfApp;
use docshelf::{DocumentStore, HttpDocumentStore};
use eframe::egui;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::load()?;
    log::info!("Using document store at {}", config.api_base_url);

    let store: Arc<dyn DocumentStore> = Arc::new(
        HttpDocumentStore::new(&config.api_base_url)
            .with_context(|| format!("Invalid api_base_url '{}'", config.api_base_url))?,
    );

    // Background work (HTTP calls, debounce timers) runs here; the GUI owns the main thread
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to create tokio runtime")?;
    let runtime_handle = runtime.handle().clone();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("DocShelf")
            .with_inner_size([1024.0, 768.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };

    log::info!("Launching egui window");

    eframe::run_native(
        "DocShelf",
        options,
        Box::new(move |cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::dark());
            Ok(Box::new(DocShelfApp::new(
                cc,
                store,
                &config,
                runtime_handle,
            )))
        }),
    )
    .map_err(|e| anyhow::anyhow!("GUI exited with error: {}", e))?;

    Ok(())
}
