// settings.rs - Compile-time defaults and the runtime settings built from them

use std::time::Duration;

use egui::Color32;

use crate::errors;

pub const GRID_ROWS: usize = 50;
pub const GRID_COLS: usize = 50;
pub const CELL_SIZE: f32 = 10.0; // pixels per cell side
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);
pub const START_DELAY: Duration = Duration::from_secs(10);

pub const MIN_SPEED: f32 = 0.5; // gen/sec
pub const MAX_SPEED: f32 = 90.0;

#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub rows: usize,
    pub cols: usize,
    pub cell_size: f32,
    pub tick_interval: Duration,
    /// `None` disables the automatic start.
    pub start_delay: Option<Duration>,
    pub pause_on_cycle: bool,
    pub live_color: Color32,
    pub dead_color: Color32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            rows: GRID_ROWS,
            cols: GRID_COLS,
            cell_size: CELL_SIZE,
            tick_interval: TICK_INTERVAL,
            start_delay: Some(START_DELAY),
            pause_on_cycle: false,
            live_color: Color32::BLACK,
            dead_color: Color32::WHITE,
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), errors::Config> {
        if self.rows == 0 || self.cols == 0 {
            return Err(errors::Board::EmptyDimensions(self.rows, self.cols).into());
        }
        if !(self.cell_size > 0.0 && self.cell_size.is_finite()) {
            return Err(errors::Config::InvalidCellSize(self.cell_size));
        }
        if self.tick_interval.is_zero() {
            return Err(errors::Config::ZeroInterval);
        }
        Ok(())
    }

    /// Pixel size of the painted board.
    pub fn board_size(&self) -> egui::Vec2 {
        egui::vec2(
            self.cols as f32 * self.cell_size,
            self.rows as f32 * self.cell_size,
        )
    }
}
