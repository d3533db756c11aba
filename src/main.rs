//! Smart Agriculture desktop entry point

use anyhow::Result;
use eframe::egui;
use smart_agri::backend::SimulatedBackend;
use smart_agri::session::{FileStore, SessionStore};
use smart_agri::ui::AgriApp;
use smart_agri::{voice, AppConfig, Navigator};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "smart_agri=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Smart Agriculture");

    let config = AppConfig::load_or_default()?;
    config.validate()?;

    let store = FileStore::open(&config.data_dir());
    let navigator = Navigator::restore(SessionStore::new(store));
    let voice = voice::build_adapter(&config, navigator.language());
    let backend = SimulatedBackend::new(config.delays.clone())?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 760.0])
            .with_min_inner_size([480.0, 560.0])
            .with_title("Smart Agriculture"),
        ..Default::default()
    };

    eframe::run_native(
        "Smart Agriculture",
        options,
        Box::new(move |cc| Ok(Box::new(AgriApp::new(cc, navigator, voice, backend)))),
    )
    .map_err(|e| anyhow::anyhow!("eframe error: {}", e))
}
