//! Lower page sections: drift animation, earth layers, information tabs.

use eframe::egui;
use egui::{Color32, Rounding, Vec2};

use tectonics_explorer::content::InfoTab;
use tectonics_explorer::drift::DriftStepper;
use tectonics_explorer::layers::{CANVAS_SIZE, HOVER_HINT};

use super::ExplorerApp;
use crate::ui::{self, hex};

fn panel<R>(ui: &mut egui::Ui, fill: Color32, add: impl FnOnce(&mut egui::Ui) -> R) -> R {
    egui::Frame::none()
        .fill(fill)
        .rounding(Rounding::same(8.0))
        .inner_margin(16.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            add(ui)
        })
        .inner
}

fn blue_button(ui: &mut egui::Ui, label: &str) -> bool {
    let text = egui::RichText::new(label).color(Color32::WHITE);
    ui.add(
        egui::Button::new(text)
            .fill(hex("#3B82F6"))
            .min_size(Vec2::new(90.0, 30.0)),
    )
    .clicked()
}

impl ExplorerApp {
    pub fn draw_drift_section(&mut self, ui: &mut egui::Ui) {
        panel(ui, hex("#FFEDD5"), |ui| {
            ui::section_heading(
                ui,
                "Wegener's Earth History",
                Some(
                    "Learn about the movement of tectonic plates over time, starting from the \
                     supercontinent Pangaea to present-day configurations.",
                ),
            );
            ui.vertical_centered(|ui| {
                let label = if self.drift.is_some() {
                    "Hide Wegener Animation"
                } else {
                    "Show Wegener Animation"
                };
                let toggle = egui::Button::new(egui::RichText::new(label).color(Color32::WHITE))
                    .fill(hex("#22C55E"))
                    .min_size(Vec2::new(0.0, 32.0));
                if ui.add(toggle).clicked() {
                    // Hiding drops the stepper; showing starts over at the first frame.
                    self.drift = match self.drift.take() {
                        Some(_) => None,
                        None => Some(DriftStepper::new()),
                    };
                }
                ui.add_space(12.0);

                let Some(stepper) = self.drift.as_mut() else {
                    return;
                };
                ui::paint_scene(ui, &stepper.scene());
                ui.add_space(12.0);
                ui.horizontal(|ui| {
                    // Center the two buttons under the canvas.
                    ui.add_space(((ui.available_width() - 200.0) / 2.0).max(0.0));
                    if blue_button(ui, "Previous") {
                        stepper.previous();
                    }
                    ui.add_space(12.0);
                    if blue_button(ui, "Next") {
                        stepper.next();
                    }
                });
            });
        });
    }

    pub fn draw_layers_section(&mut self, ui: &mut egui::Ui) {
        panel(ui, hex("#F3F4F6"), |ui| {
            ui::section_heading(
                ui,
                "Earth's Layers",
                Some(
                    "Explore the Earth's internal structure, from the rigid crust to the molten \
                     core, and learn how each layer contributes to plate tectonics.",
                ),
            );
            ui.vertical_centered(|ui| {
                let response = ui::paint_scene(ui, &self.layers.scene());
                match response.hover_pos() {
                    Some(pos) => {
                        let center = response.rect.center();
                        self.layers.pointer_moved(pos.x - center.x, pos.y - center.y);
                    }
                    // The info box goes back to the hint once the pointer leaves.
                    None => self.layers.pointer_left(),
                }
                ui.add_space(12.0);

                egui::Frame::none()
                    .fill(hex("#F3F4F6"))
                    .rounding(Rounding::same(6.0))
                    .inner_margin(12.0)
                    .show(ui, |ui| {
                        ui.set_width(CANVAS_SIZE);
                        match self.layers.hovered() {
                            Some(layer) => {
                                ui.label(egui::RichText::new(layer.name).size(17.0).strong());
                                ui.label(layer.description);
                            }
                            None => {
                                ui.label(HOVER_HINT);
                            }
                        }
                    });
            });
        });
    }

    pub fn draw_info_section(&mut self, ui: &mut egui::Ui) {
        panel(ui, hex("#FFEDD5"), |ui| {
            ui::section_heading(ui, "More Information", None);
            ui::tab_strip(ui, &mut self.info_tab, &InfoTab::ALL, InfoTab::label);
            ui.add_space(12.0);
            egui::Frame::none()
                .fill(hex("#F3F4F6"))
                .rounding(Rounding::same(6.0))
                .inner_margin(16.0)
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui::topic(ui, &self.info_tab.content());
                });
        });
    }
}
