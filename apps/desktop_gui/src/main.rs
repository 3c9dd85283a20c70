use std::path::PathBuf;

mod backend_bridge;
mod controller;
mod ui;

use clap::Parser;
use crossbeam_channel::bounded;
use eframe::egui;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::ui::app::{DictEditorApp, PersistedEditorSettings};
use crate::ui::SETTINGS_STORAGE_KEY;

/// Launch arguments: both paths are optional and pre-fill the file panel.
#[derive(Parser, Debug)]
#[command(about = "Interactive editor for input-method dictionaries")]
struct LaunchArgs {
    /// Dictionary file to open.
    #[arg()]
    dict_path: Option<PathBuf>,
    /// Char-map file used for code composition.
    #[arg()]
    char_map_path: Option<PathBuf>,
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();
    let args = LaunchArgs::parse();

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(256);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(2048);
    backend_bridge::runtime::launch(cmd_rx, ui_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Dictionary Editor")
            .with_inner_size([960.0, 640.0])
            .with_min_inner_size([720.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Dictionary Editor",
        options,
        Box::new(move |cc| {
            let persisted = cc.storage.and_then(|storage| {
                storage
                    .get_string(SETTINGS_STORAGE_KEY)
                    .and_then(|text| serde_json::from_str::<PersistedEditorSettings>(&text).ok())
            });
            Ok(Box::new(DictEditorApp::new(
                cmd_tx,
                ui_rx,
                args.dict_path,
                args.char_map_path,
                persisted,
            )))
        }),
    )
}
