//! Chess PGN Viewer
//!
//! A graphical interface for:
//! - Opening a PGN file with one or more games
//! - Stepping through each game move by move (buttons or arrow keys)
//! - Moving on to the next game once the current one is finished

mod app;
mod assets;
mod bindings;
mod board;
mod config;
mod dialog;
mod error;
mod styles;

use anyhow::Context;
use app::ViewerApp;
use assets::PieceImages;
use config::ViewerConfig;
use iced::application;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let config = ViewerConfig::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .init();

    let palette = config.palette()?;
    let pieces_dir = assets::locate_pieces_dir(config.pieces_dir.as_deref())?;
    let pieces = PieceImages::load(&pieces_dir).context("loading piece images")?;

    tracing::info!(pieces = pieces.len(), "Starting Chess PGN Viewer");

    application(ViewerApp::title, ViewerApp::update, ViewerApp::view)
        .subscription(ViewerApp::subscription)
        .theme(ViewerApp::theme)
        .window_size(styles::WINDOW_SIZE)
        .resizable(false)
        .run_with(move || ViewerApp::new(pieces, palette))?;

    Ok(())
}
