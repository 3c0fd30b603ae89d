// main.rs - Conway's Game of Life desktop viewer

use std::time::Instant;

use conway::{errors, GameOfLife, Settings};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), errors::App> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = Settings::default();
    let game = GameOfLife::new(settings, Instant::now())?;

    // Room for the two control rows, the rules text and the statistics line.
    let board = game.settings().board_size();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([board.x.max(760.0) + 20.0, board.y + 260.0]),
        ..Default::default()
    };

    info!("opening window");
    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(move |_cc| Box::new(game)),
    )?;

    Ok(())
}
