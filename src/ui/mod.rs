//! Stateless egui helpers shared by the app panels.
//!
//! Translates library `Scene`s into painter calls and renders the static
//! text blocks (detail cards, topics, tab strips).

use eframe::egui;
use egui::{Align2, Color32, FontId, Pos2, Rect, Rounding, Shape, Stroke, Vec2};

use tectonics_explorer::content::TopicContent;
use tectonics_explorer::render::color::parse_css_color;
use tectonics_explorer::render::{Primitive, Scene, TextAlign};
use tectonics_explorer::selection::{CardTone, DetailCard};

// ─── Canvas painting ──────────────────────────────────────────────────────────

/// Allocate a canvas the size of `scene` and paint it. The response senses
/// hover so callers can hit-test the pointer.
pub fn paint_scene(ui: &mut egui::Ui, scene: &Scene) -> egui::Response {
    let (rect, response) =
        ui.allocate_exact_size(Vec2::new(scene.width, scene.height), egui::Sense::hover());
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, Rounding::ZERO, scene.background.to_color32());

    let at = |p: [f32; 2]| Pos2::new(rect.min.x + p[0], rect.min.y + p[1]);

    for prim in &scene.primitives {
        match prim {
            Primitive::Rect { rect: r, fill } => {
                let min = at([r[0], r[1]]);
                painter.rect_filled(
                    Rect::from_min_size(min, Vec2::new(r[2], r[3])),
                    Rounding::ZERO,
                    fill.to_color32(),
                );
            }
            Primitive::Polygon { points, fill } => {
                let pts: Vec<Pos2> = points.iter().map(|p| at(*p)).collect();
                painter.add(Shape::convex_polygon(pts, fill.to_color32(), Stroke::NONE));
            }
            Primitive::Line { points, width, color } => {
                let pts: Vec<Pos2> = points.iter().map(|p| at(*p)).collect();
                painter.add(Shape::line(pts, Stroke::new(*width, color.to_color32())));
            }
            Primitive::Circle {
                center,
                radius,
                fill,
                stroke,
            } => {
                let stroke = stroke
                    .map(|(w, c)| Stroke::new(w, c.to_color32()))
                    .unwrap_or(Stroke::NONE);
                painter.circle(at(*center), *radius, fill.to_color32(), stroke);
            }
            Primitive::Text {
                pos,
                text,
                size,
                color,
                align,
            } => {
                let anchor = match align {
                    TextAlign::Left => Align2::LEFT_BOTTOM,
                    TextAlign::Center => Align2::CENTER_CENTER,
                };
                painter.text(
                    at(*pos),
                    anchor,
                    text,
                    FontId::proportional(*size),
                    color.to_color32(),
                );
            }
        }
    }

    painter.rect_stroke(rect, Rounding::same(2.0), Stroke::new(1.0, Color32::from_gray(200)));
    response
}

// ─── Widgets ──────────────────────────────────────────────────────────────────

pub fn hex(color: &str) -> Color32 {
    parse_css_color(color).to_color32()
}

/// Row of toggle buttons; returns true when the selection changed.
pub fn tab_strip<T: Copy + PartialEq>(
    ui: &mut egui::Ui,
    current: &mut T,
    tabs: &[T],
    label: impl Fn(T) -> &'static str,
) -> bool {
    let before = *current;
    ui.horizontal_wrapped(|ui| {
        for &tab in tabs {
            let active = *current == tab;
            let text = egui::RichText::new(label(tab)).color(if active {
                Color32::WHITE
            } else {
                Color32::from_gray(60)
            });
            let fill = if active {
                hex("#3B82F6")
            } else {
                hex("#E5E7EB")
            };
            if ui
                .add(egui::Button::new(text).fill(fill).min_size(Vec2::new(0.0, 28.0)))
                .clicked()
            {
                *current = tab;
            }
        }
    });
    *current != before
}

/// Section title in the big rounded heading style.
pub fn section_heading(ui: &mut egui::Ui, title: &str, blurb: Option<&str>) {
    ui.vertical_centered(|ui| {
        ui.add_space(12.0);
        ui.label(egui::RichText::new(title).size(26.0).strong().color(hex("#1F2937")));
        if let Some(blurb) = blurb {
            ui.add_space(4.0);
            ui.label(egui::RichText::new(blurb).color(hex("#4B5563")));
        }
        ui.add_space(8.0);
    });
}

/// (background, border, title, text)
fn tone_colors(tone: CardTone) -> (Color32, Color32, Color32, Color32) {
    match tone {
        CardTone::Plate => (hex("#DBEAFE"), hex("#60A5FA"), hex("#1D4ED8"), hex("#1E3A8A")),
        CardTone::Volcano => (hex("#FEE2E2"), hex("#F87171"), hex("#B91C1C"), hex("#7F1D1D")),
        CardTone::Earthquake => (hex("#FFEDD5"), hex("#FB923C"), hex("#C2410C"), hex("#7C2D12")),
    }
}

pub fn detail_card(ui: &mut egui::Ui, card: &DetailCard) {
    let (bg, border, title, text) = tone_colors(card.tone);
    egui::Frame::none()
        .fill(bg)
        .stroke(Stroke::new(1.0, border))
        .rounding(Rounding::same(6.0))
        .inner_margin(12.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(egui::RichText::new(card.title).size(18.0).strong().color(title));
            ui.add_space(4.0);
            for (label, value) in &card.rows {
                ui.horizontal_wrapped(|ui| {
                    ui.label(egui::RichText::new(format!("{}:", label)).strong().color(text));
                    ui.label(egui::RichText::new(value).color(text));
                });
            }
        });
}

/// White rounded box with a single gray message.
pub fn message_box(ui: &mut egui::Ui, message: &str) {
    egui::Frame::none()
        .fill(Color32::WHITE)
        .rounding(Rounding::same(6.0))
        .inner_margin(12.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(egui::RichText::new(message).color(hex("#4B5563")));
        });
}

/// Heading, optional illustration placeholder, body and bullets.
pub fn topic(ui: &mut egui::Ui, content: &TopicContent) {
    ui.label(
        egui::RichText::new(content.title)
            .size(18.0)
            .strong()
            .color(hex(content.accent)),
    );
    ui.add_space(6.0);

    if let Some(image) = content.image {
        let (rect, _) = ui.allocate_exact_size(
            Vec2::new(ui.available_width().min(320.0), 120.0),
            egui::Sense::hover(),
        );
        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, Rounding::same(4.0), Color32::from_gray(230));
        painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            format!("[{}]", image),
            FontId::proportional(13.0),
            Color32::GRAY,
        );
        ui.add_space(6.0);
    }

    ui.label(egui::RichText::new(content.body).color(hex("#374151")));
    if !content.bullets.is_empty() {
        ui.add_space(4.0);
        for bullet in content.bullets {
            ui.horizontal_wrapped(|ui| {
                ui.label("  \u{2022}");
                if let Some(label) = bullet.label {
                    ui.label(egui::RichText::new(format!("{}:", label)).strong());
                }
                ui.label(bullet.text);
            });
        }
    }
}
