use std::path::PathBuf;

use clap::Parser;
use crossbeam_channel::bounded;

mod backend_bridge;
mod config;
mod controller;
mod ui;

use backend_bridge::commands::BackendCommand;
use controller::events::UiEvent;
use ui::app::MapGuiApp;

#[derive(Parser, Debug)]
struct Args {
    /// Alternate settings file (default: ./pinpoint.toml when present).
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();
    let args = Args::parse();

    let settings = config::load_settings(args.config.as_deref());
    tracing::info!(?settings, "map gui starting");
    let (permissions, locations) = config::build_providers(&settings);

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(8);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(64);
    backend_bridge::runtime::launch(cmd_rx, ui_tx, permissions, locations);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Pinpoint")
            .with_inner_size([900.0, 640.0])
            .with_min_inner_size([480.0, 360.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Pinpoint",
        options,
        Box::new(|cc| {
            let persisted = cc.storage.and_then(|storage| {
                storage
                    .get_string(ui::app::SETTINGS_STORAGE_KEY)
                    .and_then(|text| serde_json::from_str(&text).ok())
            });
            Ok(Box::new(MapGuiApp::new(cmd_tx, ui_rx, persisted)))
        }),
    )
}
