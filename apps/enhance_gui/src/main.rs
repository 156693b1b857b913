use std::sync::Arc;

mod backend_bridge;
mod controller;
mod ui;

use clap::Parser;
use client_core::{load_settings, HeadlessPage, SystemClipboard};
use crossbeam_channel::bounded;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::ui::EnhancerApp;

#[derive(Parser, Debug)]
struct Args {
    /// Backend base url; overrides enhancer.toml and the environment.
    #[arg(long)]
    api_url: Option<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    let args = Args::parse();
    let settings = load_settings(args.api_url.as_deref())?;

    let page = Arc::new(HeadlessPage::with_clipboard(Arc::new(SystemClipboard)));
    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(64);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(256);
    backend_bridge::runtime::launch(cmd_rx, ui_tx, page.clone(), settings);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Prompt Enhancer")
            .with_inner_size([720.0, 640.0])
            .with_min_inner_size([480.0, 420.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Prompt Enhancer",
        options,
        Box::new(move |_cc| Ok(Box::new(EnhancerApp::new(cmd_tx, ui_rx, page)))),
    )
    .map_err(|err| anyhow::anyhow!("failed to run window: {err}"))
}
