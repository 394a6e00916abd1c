//! Tenki desktop UI: services, explicit state, pure view and the egui front-end.

pub mod app_services;
pub mod error_mapping;
pub mod fonts;
pub mod frontend;
pub mod models;
pub mod services;
pub mod view;

use anyhow::Result;
use eframe::egui;

pub use app_services::AppServices;
pub use frontend::TenkiApp;
pub use models::AppState;
pub use view::{render, Screen};

/// Open the main window and block until it is closed.
pub fn run(app: &tenki_core::App) -> Result<()> {
    let config = app.shared_config();
    let services = AppServices::new()?;
    if !services.init_jma_client(&config.jma) {
        tracing::warn!("Starting without a JMA client; requests will fail");
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.ui.window_width as f32, config.ui.window_height as f32])
            .with_title(view::WINDOW_TITLE),
        ..Default::default()
    };

    let app_services = services.clone();
    let result = eframe::run_native(
        view::WINDOW_TITLE,
        options,
        Box::new(move |cc| Ok(Box::new(TenkiApp::new(cc, app_services, &config.ui)))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run application: {}", e));

    services.shutdown();
    result
}
