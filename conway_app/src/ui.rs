// ui.rs - eframe front end: controls, input and painting the display table

use std::time::{Duration, Instant};

use conway::{DisplayState, PATTERNS};
use eframe::egui;
use egui::{Rect, Sense, Vec2};

use crate::GameOfLife;
use crate::session::cell_at;

impl eframe::App for GameOfLife {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input(|i| i.key_pressed(egui::Key::Space)) {
            self.session.toggle();
            self.last_update = Instant::now();
        }

        // Auto-update if running
        if self.session.is_running() && self.last_update.elapsed() >= self.update_interval {
            self.update_generation();
            self.last_update = Instant::now();
        }

        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            self.controls(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::both().show(ui, |ui| {
                self.draw_grid(ui);
            });
        });

        if self.session.is_running() {
            ctx.request_repaint_after(self.update_interval);
        }
    }
}

impl GameOfLife {
    fn controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let button_text = if self.session.is_running() { "⏸ Pause" } else { "▶ Start" };
            if ui.button(button_text).clicked() {
                self.session.toggle();
                self.last_update = Instant::now();
            }

            if ui
                .add_enabled(!self.session.is_running(), egui::Button::new("⏭ Step"))
                .clicked()
            {
                self.session.step_once();
            }

            if ui.button("⏹ Clear").clicked() {
                self.session.clear();
            }

            if ui.button("🎲 Random").clicked() {
                self.randomize();
            }

            ui.separator();

            // Pattern dropdown
            ui.label("Pattern:");
            egui::ComboBox::from_id_source("pattern_selector")
                .selected_text(PATTERNS[self.selected_pattern].name)
                .show_ui(ui, |ui| {
                    for (i, pattern) in PATTERNS.iter().enumerate() {
                        ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                    }
                });

            if ui.button("Apply Pattern").clicked() {
                if let Some(pattern) = PATTERNS.get(self.selected_pattern) {
                    self.session.apply_pattern(pattern);
                }
            }
        });

        ui.horizontal(|ui| {
            ui.label("Delay:");
            let mut delay_ms = self.update_interval.as_millis() as u64;
            if ui
                .add(egui::Slider::new(&mut delay_ms, 1..=1000).logarithmic(true).suffix(" ms"))
                .changed()
            {
                self.update_interval = Duration::from_millis(delay_ms);
            }

            ui.separator();

            for state in DisplayState::ALL {
                ui.label(format!("{}:", state.name()));
                ui.color_edit_button_srgba(self.config.palette.color_mut(state));
            }
        });

        ui.horizontal(|ui| {
            let grid = self.session.grid();
            ui.label(format!("Generation: {}", self.session.generation()));
            ui.separator();
            ui.label(format!("Live cells: {}", grid.population()));
            ui.separator();
            ui.label(self.session.mode().label());
            ui.separator();
            ui.label("Space toggles, click or drag to draw cells.");
        });
    }

    fn draw_grid(&mut self, ui: &mut egui::Ui) {
        let cell_size = self.config.cell_size;
        let [width, height] = self.config.canvas_size();
        let palette = self.config.palette;

        let (response, painter) = ui.allocate_painter(Vec2::new(width, height), Sense::click_and_drag());
        let origin = response.rect.min;

        // Gaps between cells show the grid color
        painter.rect_filled(response.rect, 0.0, palette.grid);

        for (coord, state) in self.session.display().iter() {
            let min = origin + Vec2::new(coord.col as f32 * cell_size, coord.row as f32 * cell_size);
            let rect = Rect::from_min_size(min, Vec2::splat(cell_size - 1.0));
            painter.rect_filled(rect, 0.0, palette.color(state));
        }

        if response.is_pointer_button_down_on() || response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                let offset = pos - origin;
                if let Some(coord) = cell_at(
                    offset.x,
                    offset.y,
                    cell_size,
                    self.config.rows,
                    self.config.cols,
                ) {
                    self.session.paint_cell(coord);
                }
            }
        }
    }
}
