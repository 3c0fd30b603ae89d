// ui.rs - eframe front-end: controls, rules text, board painting and pointer input

use std::time::{Duration, Instant};

use egui::{Color32, Key, Rect, Stroke, Vec2};

use crate::game::GameOfLife;
use crate::patterns;
use crate::settings::{MAX_SPEED, MIN_SPEED};

const RULES: &str = "Game of Life rules:\n\
    1. Any live cell with fewer than two live neighbors dies.\n\
    2. Any live cell with two or three live neighbors lives on to the next generation.\n\
    3. Any live cell with more than three live neighbors dies.\n\
    4. Any dead cell with exactly three live neighbors becomes a live cell.";

impl eframe::App for GameOfLife {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();

        if ctx.input(|i| i.key_pressed(Key::Space)) {
            self.toggle_running(now);
        }

        self.tick(now);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Conway's Game of Life");

            self.controls(ui, now);
            ui.separator();

            if self.show_rules {
                ui.label(RULES);
                if let Some(left) = self.start_countdown(now) {
                    ui.label(format!("The game will start in {} seconds", left.as_secs_f32().ceil() as u64));
                }
                ui.separator();
            }

            self.draw_board(ui);
            ui.separator();

            self.statistics(ui);
        });

        // Wake the event loop for the next step or the pending automatic start.
        if let Some(wait) = self.next_wakeup(Instant::now()) {
            ctx.request_repaint_after(wait.max(Duration::from_millis(1)));
        }
    }
}

impl GameOfLife {
    fn controls(&mut self, ui: &mut egui::Ui, now: Instant) {
        ui.horizontal(|ui| {
            let button_text = if self.is_running { "⏸ Pause" } else { "▶ Start" };
            if ui.button(button_text).clicked() {
                self.toggle_running(now);
            }

            if ui.button("🎲 Randomize").clicked() {
                self.randomize();
            }

            if ui.button("⏹ Clear").clicked() {
                self.stop();
                self.clear_grid();
            }

            ui.separator();

            ui.label("Pattern:");
            let selected = patterns::PATTERNS
                .get(self.selected_pattern)
                .map_or("", |p| p.name);
            egui::ComboBox::from_id_source("pattern_selector")
                .selected_text(selected)
                .show_ui(ui, |ui| {
                    for (i, pattern) in patterns::PATTERNS.iter().enumerate() {
                        ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                    }
                });

            if ui.button("Apply Pattern").clicked() {
                self.stop();
                self.apply_selected_pattern();
            }

            ui.separator();
            ui.label(format!("Generation: {}", self.generation));
        });

        ui.horizontal(|ui| {
            ui.label("Speed:");
            let mut speed = 1.0 / self.update_interval.as_secs_f32();
            if ui
                .add(egui::Slider::new(&mut speed, MIN_SPEED..=MAX_SPEED).suffix(" gen/sec"))
                .changed()
            {
                self.update_interval = Duration::from_secs_f32(1.0 / speed.clamp(MIN_SPEED, MAX_SPEED));
            }

            ui.separator();
            ui.label("Live:");
            ui.color_edit_button_srgba(&mut self.live_color);
            ui.label("Dead:");
            ui.color_edit_button_srgba(&mut self.dead_color);

            ui.separator();
            ui.checkbox(&mut self.pause_on_cycle, "Pause when settled");
        });
    }

    fn draw_board(&mut self, ui: &mut egui::Ui) {
        let cell_size = self.settings().cell_size;
        let (response, painter) = ui.allocate_painter(self.settings().board_size(), egui::Sense::click());
        let origin = response.rect.min;

        painter.rect_filled(response.rect, 0.0, self.dead_color);

        for (row, col, alive) in self.board().iter() {
            if !alive {
                continue;
            }
            let min = origin + Vec2::new(col as f32 * cell_size, row as f32 * cell_size);
            painter.rect_filled(Rect::from_min_size(min, Vec2::splat(cell_size)), 0.0, self.live_color);
        }

        painter.rect_stroke(response.rect, 0.0, Stroke::new(1.0, Color32::GRAY));

        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                let local = pos - origin;
                self.toggle_at(local.x, local.y);
            }
        }
    }

    fn statistics(&self, ui: &mut egui::Ui) {
        let board = self.board();
        let total = board.rows() * board.cols();
        let live_cells = board.live_count();

        ui.horizontal(|ui| {
            ui.label(format!("Live cells: {}", live_cells));
            ui.label(format!("Dead cells: {}", total - live_cells));
            ui.label(format!("Population: {:.1}%", (live_cells as f32 / total as f32) * 100.0));
            if let Some(generation) = self.settled_at {
                ui.separator();
                ui.label(format!("Settled at generation {}", generation));
            }
        });
    }
}
