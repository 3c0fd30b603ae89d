// game.rs - Simulation controller: owns the board and drives it from the UI clock

use std::time::{Duration, Instant};

use egui::Color32;
use tracing::{debug, info, trace, warn};

use crate::board::Board;
use crate::errors;
use crate::history::CycleDetector;
use crate::patterns;
use crate::settings::Settings;

pub struct GameOfLife {
    board: Board,
    settings: Settings,
    cycle: CycleDetector,

    pub is_running: bool,
    /// Set once the simulation has been started, manually or by the start delay.
    started: bool,
    launched_at: Instant,
    last_update: Instant,
    pub update_interval: Duration,
    pub generation: u64,
    /// Generation at which the board repeated a recent state.
    pub settled_at: Option<u64>,
    pub show_rules: bool,
    pub pause_on_cycle: bool,
    pub live_color: Color32,
    pub dead_color: Color32,
    pub selected_pattern: usize,
}

impl GameOfLife {
    pub fn new(settings: Settings, now: Instant) -> Result<Self, errors::Config> {
        settings.validate()?;
        let board = Board::new(settings.rows, settings.cols)?;
        info!(
            "created {}x{} board, tick {:?}, start delay {:?}",
            settings.rows, settings.cols, settings.tick_interval, settings.start_delay
        );

        Ok(Self {
            board,
            cycle: CycleDetector::default(),
            is_running: false,
            started: false,
            launched_at: now,
            last_update: now,
            update_interval: settings.tick_interval,
            generation: 0,
            settled_at: None,
            show_rules: true,
            pause_on_cycle: settings.pause_on_cycle,
            live_color: settings.live_color,
            dead_color: settings.dead_color,
            selected_pattern: 0,
            settings,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Time left before the automatic start fires, if it is still pending.
    pub fn start_countdown(&self, now: Instant) -> Option<Duration> {
        if self.started {
            return None;
        }
        self.settings
            .start_delay
            .map(|delay| delay.saturating_sub(now.saturating_duration_since(self.launched_at)))
    }

    /// Advances the clock. Fires the pending automatic start and performs at
    /// most one step per call. Returns `true` when the board changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = false;

        if self.start_countdown(now) == Some(Duration::ZERO) {
            info!("start delay elapsed, starting");
            self.randomize();
            self.start(now);
            changed = true;
        }

        if self.is_running && now.saturating_duration_since(self.last_update) >= self.update_interval {
            self.update_generation();
            self.last_update = now;
            changed = true;
        }

        changed
    }

    /// How long the host may sleep before `tick` has work to do.
    pub fn next_wakeup(&self, now: Instant) -> Option<Duration> {
        let step = self.is_running.then(|| {
            self.update_interval
                .saturating_sub(now.saturating_duration_since(self.last_update))
        });

        match (step, self.start_countdown(now)) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    pub fn start(&mut self, now: Instant) {
        if self.is_running {
            return;
        }
        info!("simulation started at generation {}", self.generation);
        self.is_running = true;
        self.started = true;
        self.last_update = now;
    }

    pub fn stop(&mut self) {
        if !self.is_running {
            return;
        }
        info!("simulation paused at generation {}", self.generation);
        self.is_running = false;
    }

    pub fn toggle_running(&mut self, now: Instant) {
        if self.is_running {
            self.stop();
        } else {
            self.start(now);
        }
    }

    pub fn update_generation(&mut self) {
        self.board.step();
        self.generation += 1;
        trace!("generation {} live {}", self.generation, self.board.live_count());

        if self.cycle.observe(&self.board) && self.settled_at.is_none() {
            info!("board settled at generation {}", self.generation);
            self.settled_at = Some(self.generation);
            if self.pause_on_cycle {
                self.stop();
            }
        }
    }

    /// Forgets recent generations and seeds the ring with the current board,
    /// so a still-life is recognised after its first step.
    fn restart_cycle(&mut self) {
        self.settled_at = None;
        self.cycle.reset();
        self.cycle.observe(&self.board);
    }

    fn reset_history(&mut self) {
        self.generation = 0;
        self.restart_cycle();
    }

    /// Drops the pending automatic start; the board now belongs to the user.
    pub fn cancel_auto_start(&mut self) {
        if !self.started {
            debug!("automatic start cancelled");
            self.started = true;
        }
    }

    pub fn randomize(&mut self) {
        self.cancel_auto_start();
        self.board.randomize();
        self.show_rules = false;
        self.reset_history();
        info!("randomized board, {} live cells", self.board.live_count());
    }

    pub fn clear_grid(&mut self) {
        self.cancel_auto_start();
        self.board.clear();
        self.reset_history();
        debug!("cleared board");
    }

    pub fn apply_selected_pattern(&mut self) {
        let Some(pattern) = patterns::PATTERNS.get(self.selected_pattern) else {
            warn!("no pattern at index {}", self.selected_pattern);
            return;
        };

        match patterns::apply_pattern(&mut self.board, pattern) {
            Ok(()) => {
                self.cancel_auto_start();
                self.reset_history();
                info!("applied pattern {}", pattern.name);
            }
            Err(err) => warn!("failed to apply pattern {}: {err}", pattern.name),
        }
    }

    pub fn toggle_cell(&mut self, row: usize, col: usize) -> bool {
        let toggled = self.board.toggle(row, col);
        if toggled {
            // a manual edit invalidates the recent history
            self.restart_cycle();
            debug!("toggled cell ({row}, {col})");
        } else {
            debug!("ignored toggle outside board at ({row}, {col})");
        }
        toggled
    }

    /// Maps a point in board-local pixels to a cell.
    pub fn cell_at(&self, x: f32, y: f32) -> Option<(usize, usize)> {
        let size = self.settings.cell_size;
        let row = (y / size).floor();
        let col = (x / size).floor();
        if !(row >= 0.0 && col >= 0.0) {
            return None;
        }

        let (row, col) = (row as usize, col as usize);
        (row < self.board.rows() && col < self.board.cols()).then_some((row, col))
    }

    /// Toggles the cell under a point in board-local pixels. Points outside
    /// the board are ignored.
    pub fn toggle_at(&mut self, x: f32, y: f32) -> bool {
        match self.cell_at(x, y) {
            Some((row, col)) => self.toggle_cell(row, col),
            None => {
                debug!("ignored click outside board at ({x}, {y})");
                false
            }
        }
    }
}
