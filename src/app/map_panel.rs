//! Map rendering and pointer handling for `ExplorerApp`.

use std::sync::Arc;

use eframe::egui;
use egui::{Align2, Color32, FontId, Pos2, Rect, Rounding, Shape, Stroke, Vec2};

use tectonics_explorer::map::picking::{quake_radius_px, VOLCANO_ICON_SIZE};
use tectonics_explorer::map::tiles::visible_tiles;
use tectonics_explorer::map::Popup;
use tectonics_explorer::style::legend_entries;

use super::ExplorerApp;
use crate::ui::hex;

/// Wheel distance for one zoom level.
const WHEEL_STEP: f64 = 120.0;
const LEGEND_SIZE: Vec2 = Vec2::new(190.0, 128.0);

impl ExplorerApp {
    pub fn draw_map(&mut self, ui: &mut egui::Ui, size: Vec2) {
        let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click_and_drag());
        let map_size = [rect.width(), rect.height()];
        self.map.ensure_fitted(&self.dataset, map_size);

        let legend_rect = Rect::from_min_size(
            Pos2::new(rect.max.x - LEGEND_SIZE.x - 16.0, rect.min.y + 16.0),
            LEGEND_SIZE,
        );
        let local = |p: Pos2| [p.x - rect.min.x, p.y - rect.min.y];
        let pointer = response
            .hover_pos()
            .filter(|p| !legend_rect.contains(*p));

        // ── Input ───────────────────────────────────────────────────────────
        if response.dragged() {
            let d = response.drag_delta();
            self.map.pan_by([d.x, d.y]);
        }
        if let Some(p) = pointer {
            let scroll = ui.input(|i| i.smooth_scroll_delta.y);
            if scroll != 0.0 {
                let factor = (scroll as f64 / WHEEL_STEP).exp2();
                self.map.zoom_at(local(p), map_size, factor);
                // Keep the page from scrolling while zooming the map.
                ui.ctx().input_mut(|i| i.smooth_scroll_delta = Vec2::ZERO);
            }
        }

        let hover = if response.dragged() { None } else { pointer.map(local) };
        self.map.handle_hover(&self.dataset, hover, map_size);

        if response.clicked() {
            if let Some(p) = response.interact_pointer_pos().filter(|p| !legend_rect.contains(*p)) {
                if let Some(feature) = self.map.handle_click(&self.dataset, local(p), map_size) {
                    self.selection.select(feature);
                }
            }
        }
        if self.map.hovered_boundary().is_some() {
            ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
        }

        // ── Paint ───────────────────────────────────────────────────────────
        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, Rounding::same(6.0), hex("#AAD3DF"));
        self.paint_tiles(&painter, rect, map_size);

        let viewport = *self.map.viewport();
        let screen = |lon: f64, lat: f64| {
            let p = viewport.to_screen(lon, lat, map_size);
            Pos2::new(rect.min.x + p[0], rect.min.y + p[1])
        };

        for (i, boundary) in self.dataset.boundaries.iter().enumerate() {
            let style = self.map.boundary_style(i, boundary.boundary_type);
            let points: Vec<Pos2> = boundary
                .geometry
                .iter()
                .map(|&(lon, lat)| screen(lon, lat))
                .collect();
            painter.add(Shape::line(
                points,
                Stroke::new(style.weight, style.stroke_color().to_color32()),
            ));
        }

        let orange = hex("orange");
        for quake in &self.dataset.earthquakes {
            painter.circle(
                screen(quake.lng, quake.lat),
                quake_radius_px(quake, viewport.zoom),
                orange.gamma_multiply(0.2),
                Stroke::new(1.0, orange.gamma_multiply(0.8)),
            );
        }

        for volcano in &self.dataset.volcanoes {
            paint_volcano_icon(&painter, screen(volcano.lng, volcano.lat), VOLCANO_ICON_SIZE);
        }

        if let Some(popup) = self.map.popup() {
            paint_popup(&painter, screen(popup.lon, popup.lat), popup);
        }

        paint_legend(&painter, legend_rect);
        painter.text(
            Pos2::new(rect.max.x - 4.0, rect.max.y - 4.0),
            Align2::RIGHT_BOTTOM,
            &self.config.tile_attribution,
            FontId::proportional(11.0),
            Color32::from_gray(60),
        );
    }

    fn paint_tiles(&mut self, painter: &egui::Painter, rect: Rect, map_size: [f32; 2]) {
        let uv = Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0));
        for slot in visible_tiles(self.map.viewport(), map_size) {
            if let Some(tex) = self.tile_textures.get(&slot.coord) {
                let min = Pos2::new(rect.min.x + slot.min[0], rect.min.y + slot.min[1]);
                let tile_rect = Rect::from_min_size(min, Vec2::splat(slot.size));
                painter.image(tex.id(), tile_rect, uv, Color32::WHITE);
            } else if let Some(loader) = self.tile_loader.as_mut() {
                loader.request(slot.coord);
            }
        }
    }
}

fn paint_volcano_icon(painter: &egui::Painter, center: Pos2, size: f32) {
    let h = size / 2.0;
    let mountain = vec![
        Pos2::new(center.x - h, center.y + h),
        Pos2::new(center.x - h * 0.25, center.y - h * 0.6),
        Pos2::new(center.x + h * 0.25, center.y - h * 0.6),
        Pos2::new(center.x + h, center.y + h),
    ];
    painter.add(Shape::convex_polygon(
        mountain,
        hex("#8B4513"),
        Stroke::new(1.0, hex("#4A2511")),
    ));
    painter.circle_filled(Pos2::new(center.x, center.y - h * 0.75), h * 0.3, hex("#FF4500"));
}

fn paint_popup(painter: &egui::Painter, anchor: Pos2, popup: &Popup) {
    let dark = Color32::from_gray(30);
    let mut galleys: Vec<Arc<egui::Galley>> = Vec::with_capacity(popup.lines.len() + 1);
    galleys.push(painter.layout_no_wrap(
        popup.title.clone(),
        FontId::proportional(14.0),
        Color32::BLACK,
    ));
    for line in &popup.lines {
        galleys.push(painter.layout_no_wrap(line.clone(), FontId::proportional(13.0), dark));
    }

    let pad = 8.0;
    let width = galleys.iter().map(|g| g.size().x).fold(0.0, f32::max) + 2.0 * pad;
    let height = galleys.iter().map(|g| g.size().y).sum::<f32>() + 2.0 * pad;
    let bubble = Rect::from_min_size(
        Pos2::new(anchor.x - width / 2.0, anchor.y - height - 14.0),
        Vec2::new(width, height),
    );

    painter.add(Shape::convex_polygon(
        vec![
            Pos2::new(anchor.x - 7.0, bubble.max.y),
            Pos2::new(anchor.x + 7.0, bubble.max.y),
            anchor + Vec2::new(0.0, -4.0),
        ],
        Color32::WHITE,
        Stroke::NONE,
    ));
    painter.rect(
        bubble,
        Rounding::same(6.0),
        Color32::WHITE,
        Stroke::new(1.0, Color32::from_gray(190)),
    );

    let mut y = bubble.min.y + pad;
    for galley in galleys {
        let h = galley.size().y;
        painter.galley(Pos2::new(bubble.min.x + pad, y), galley, dark);
        y += h;
    }
}

fn paint_legend(painter: &egui::Painter, rect: Rect) {
    painter.rect(
        rect,
        Rounding::same(4.0),
        Color32::WHITE,
        Stroke::new(1.0, Color32::from_gray(210)),
    );
    let x = rect.min.x + 12.0;
    let mut y = rect.min.y + 12.0;
    painter.text(
        Pos2::new(x, y),
        Align2::LEFT_TOP,
        "Map Legend",
        FontId::proportional(13.0),
        Color32::BLACK,
    );
    y += 22.0;

    let row = |y: f32, label: &str| {
        painter.text(
            Pos2::new(x + 20.0, y + 6.0),
            Align2::LEFT_CENTER,
            label,
            FontId::proportional(11.0),
            Color32::from_gray(40),
        );
    };
    for (label, color) in legend_entries() {
        painter.rect_filled(
            Rect::from_min_size(Pos2::new(x, y), Vec2::splat(12.0)),
            Rounding::ZERO,
            color.to_color32(),
        );
        row(y, label);
        y += 18.0;
    }
    paint_volcano_icon(painter, Pos2::new(x + 6.0, y + 6.0), 12.0);
    row(y, "Volcano");
}
