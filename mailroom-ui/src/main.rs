use tracing::info;
use tracing_subscriber::EnvFilter;

use mailroom_core::{StorePaths, bootstrap};
use mailroom_ui::MailroomApp;

// ─── tracing ─────────────────────────────────────────────────────────────────

/// Initialise the tracing subscriber.
///
/// * Honours `RUST_LOG` when set.
/// * Falls back to `info` so normal runs are quiet.
/// * Strips timestamps and target names to keep output clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_target(false)
        .init();
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    init_tracing();

    // Store files live in the working directory, as they always have.
    let paths = StorePaths::new(std::env::current_dir()?);
    bootstrap::ensure_stores(&paths)?;
    info!(data_dir = %paths.data_dir().display(), "store files ready");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Mail & File Management System")
            .with_inner_size([500.0, 400.0])
            .with_min_inner_size([420.0, 360.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Mail & File Management System",
        options,
        Box::new(move |cc| Ok(Box::new(MailroomApp::new(cc, paths)))),
    )
    .map_err(|e| anyhow::anyhow!("GUI error: {e}"))
}
