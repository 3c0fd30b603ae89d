//! Conway's Game of Life on a fixed-size board with an egui front-end.

pub mod board;
pub mod errors;
pub mod game;
pub mod history;
pub mod patterns;
pub mod settings;
mod ui;

pub use board::Board;
pub use game::GameOfLife;
pub use settings::Settings;
