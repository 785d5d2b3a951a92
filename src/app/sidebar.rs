//! Feature-details sidebar and the explore section that hosts it beside the map.

use eframe::egui;

use tectonics_explorer::content::EducationTopic;
use tectonics_explorer::cross_section::scene::{CANVAS_HEIGHT, CANVAS_WIDTH};
use tectonics_explorer::render::Scene;
use tectonics_explorer::render::color::Rgba;
use tectonics_explorer::selection::{DetailTab, DetailView, NO_INFORMATION_TEXT, PLACEHOLDER_TEXT};

use super::ExplorerApp;
use crate::ui;

impl ExplorerApp {
    /// Section 1: heading, sidebar on the left third, map on the rest.
    pub fn draw_explore_section(&mut self, ui: &mut egui::Ui, height: f32) {
        ui::section_heading(
            ui,
            "Explore Plate Tectonics",
            Some(
                "Use the map below to explore plate boundaries, volcanoes, and earthquakes. \
                 Click on features for detailed information.",
            ),
        );

        ui.horizontal_top(|ui| {
            let sidebar_width = (ui.available_width() / 3.0).max(300.0);
            ui.allocate_ui(egui::vec2(sidebar_width, height), |ui| {
                egui::ScrollArea::vertical()
                    .id_salt("sidebar")
                    .max_height(height)
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        ui.set_width(sidebar_width - 16.0);
                        self.draw_sidebar(ui);
                    });
            });
            ui.add_space(12.0);
            let map_size = egui::vec2(ui.available_width(), height);
            self.draw_map(ui, map_size);
        });
    }

    fn draw_sidebar(&mut self, ui: &mut egui::Ui) {
        let mut tab = self.selection.tab();
        if ui::tab_strip(ui, &mut tab, &DetailTab::ALL, DetailTab::label) {
            self.selection.set_tab(tab);
        }
        ui.add_space(12.0);

        match self.selection.view() {
            DetailView::Placeholder => ui::message_box(ui, PLACEHOLDER_TEXT),
            DetailView::Plate { card, .. } => {
                ui::detail_card(ui, &card);
                ui.add_space(12.0);
                self.draw_cross_section(ui);
            }
            DetailView::Volcano(card) | DetailView::Earthquake(card) => ui::detail_card(ui, &card),
            DetailView::NoInformation => {
                ui.label(NO_INFORMATION_TEXT);
            }
            DetailView::Education => self.draw_education(ui),
        }
    }

    fn draw_cross_section(&mut self, ui: &mut egui::Ui) {
        ui.label(
            egui::RichText::new("Plate Boundary Cross-Section")
                .size(18.0)
                .strong()
                .color(ui::hex("#374151")),
        );
        ui.add_space(6.0);

        // Only frames from the running timer are shown.
        let scene = self
            .cross_section_frame
            .filter(|f| f.generation == self.cross_section.generation())
            .map(|f| f.scene())
            .unwrap_or_else(|| Scene::new(CANVAS_WIDTH, CANVAS_HEIGHT, Rgba::WHITE));
        ui::paint_scene(ui, &scene);
    }

    fn draw_education(&mut self, ui: &mut egui::Ui) {
        ui.horizontal_wrapped(|ui| {
            for topic in EducationTopic::ALL {
                let text = egui::RichText::new(topic.label()).color(egui::Color32::WHITE);
                let button = egui::Button::new(text)
                    .fill(ui::hex(topic.accent()))
                    .min_size(egui::vec2(0.0, 28.0));
                if ui.add(button).clicked() {
                    self.education_topic = topic;
                }
            }
        });
        ui.add_space(8.0);
        ui::topic(ui, &self.education_topic.content());
    }
}
