//! ECG Lead Trainer - Main Entry Point

use ecg_lead_trainer::{config::AppState, frontend::TrainerApp};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> eframe::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,ecg_lead_trainer=debug")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting ECG Lead Trainer");

    let app_state = AppState::load_or_default();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 820.0])
            .with_min_inner_size([720.0, 600.0])
            .with_title("ECG Lead Trainer"),
        ..Default::default()
    };

    let result = eframe::run_native(
        "ECG Lead Trainer",
        native_options,
        Box::new(|cc| Ok(Box::new(TrainerApp::new(cc, app_state)))),
    );

    tracing::info!("Shutting down...");
    result
}
