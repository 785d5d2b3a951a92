//! Map camera: center, zoom, and screen <-> geographic conversion.
//!
//! Screen positions are relative to the top-left corner of the map area.

use crate::data::GeoBounds;

use super::projection::{lon_lat_to_world, world_size, world_to_lon_lat};

pub const MIN_ZOOM: f64 = 0.0;
pub const MAX_ZOOM: f64 = 18.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub center_lon: f64,
    pub center_lat: f64,
    pub zoom: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            center_lon: 0.0,
            center_lat: 20.0,
            zoom: 2.0,
        }
    }
}

impl Viewport {
    fn center_world(&self) -> (f64, f64) {
        lon_lat_to_world(self.center_lon, self.center_lat, self.zoom)
    }

    pub fn to_screen(&self, lon: f64, lat: f64, size: [f32; 2]) -> [f32; 2] {
        let (cx, cy) = self.center_world();
        let (x, y) = lon_lat_to_world(lon, lat, self.zoom);
        [
            (x - cx + size[0] as f64 / 2.0) as f32,
            (y - cy + size[1] as f64 / 2.0) as f32,
        ]
    }

    pub fn from_screen(&self, pos: [f32; 2], size: [f32; 2]) -> (f64, f64) {
        let (cx, cy) = self.center_world();
        let x = cx + pos[0] as f64 - size[0] as f64 / 2.0;
        let y = cy + pos[1] as f64 - size[1] as f64 / 2.0;
        world_to_lon_lat(x, y, self.zoom)
    }

    /// Top-left of the screen in world pixels at the current zoom.
    pub fn world_origin(&self, size: [f32; 2]) -> (f64, f64) {
        let (cx, cy) = self.center_world();
        (cx - size[0] as f64 / 2.0, cy - size[1] as f64 / 2.0)
    }

    fn set_center_world(&mut self, x: f64, y: f64) {
        let size = world_size(self.zoom);
        let (lon, lat) = world_to_lon_lat(x.clamp(0.0, size), y.clamp(0.0, size), self.zoom);
        self.center_lon = lon;
        self.center_lat = lat;
    }

    /// Drag the map by a screen delta.
    pub fn pan_by(&mut self, delta: [f32; 2]) {
        let (cx, cy) = self.center_world();
        self.set_center_world(cx - delta[0] as f64, cy - delta[1] as f64);
    }

    /// Zoom by `factor` keeping the point under `pointer` fixed.
    pub fn zoom_at(&mut self, pointer: [f32; 2], size: [f32; 2], factor: f64) {
        if factor <= 0.0 || !factor.is_finite() {
            return;
        }
        let (lon, lat) = self.from_screen(pointer, size);
        self.zoom = (self.zoom + factor.log2()).clamp(MIN_ZOOM, MAX_ZOOM);
        let (px, py) = lon_lat_to_world(lon, lat, self.zoom);
        let x = px - (pointer[0] as f64 - size[0] as f64 / 2.0);
        let y = py - (pointer[1] as f64 - size[1] as f64 / 2.0);
        self.set_center_world(x, y);
    }

    /// Largest whole zoom at which `bounds` fits inside `size` minus
    /// `padding` on every side, centered on the bounds.
    pub fn fit_bounds(bounds: &GeoBounds, size: [f32; 2], padding: f32) -> Self {
        let (x0, y0) = lon_lat_to_world(bounds.min_lon, bounds.max_lat, 0.0);
        let (x1, y1) = lon_lat_to_world(bounds.max_lon, bounds.min_lat, 0.0);
        let span_x = (x1 - x0).max(f64::EPSILON);
        let span_y = (y1 - y0).max(f64::EPSILON);
        let avail_x = (size[0] as f64 - 2.0 * padding as f64).max(1.0);
        let avail_y = (size[1] as f64 - 2.0 * padding as f64).max(1.0);

        let zoom = (avail_x / span_x)
            .min(avail_y / span_y)
            .log2()
            .floor()
            .clamp(MIN_ZOOM, MAX_ZOOM);
        let (lon, lat) = world_to_lon_lat((x0 + x1) / 2.0, (y0 + y1) / 2.0, 0.0);
        Self {
            center_lon: lon,
            center_lat: lat,
            zoom,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIZE: [f32; 2] = [800.0, 600.0];

    #[test]
    fn center_projects_to_screen_middle() {
        let vp = Viewport::default();
        let p = vp.to_screen(vp.center_lon, vp.center_lat, SIZE);
        assert!((p[0] - 400.0).abs() < 1e-3);
        assert!((p[1] - 300.0).abs() < 1e-3);
    }

    #[test]
    fn screen_round_trip() {
        let vp = Viewport {
            center_lon: -120.0,
            center_lat: 35.0,
            zoom: 4.3,
        };
        let p = vp.to_screen(-118.0, 34.0, SIZE);
        let (lon, lat) = vp.from_screen(p, SIZE);
        assert!((lon + 118.0).abs() < 1e-3);
        assert!((lat - 34.0).abs() < 1e-3);
    }

    #[test]
    fn pan_moves_content_with_pointer() {
        let mut vp = Viewport::default();
        let before = vp.to_screen(10.0, 10.0, SIZE);
        vp.pan_by([30.0, -20.0]);
        let after = vp.to_screen(10.0, 10.0, SIZE);
        assert!((after[0] - before[0] - 30.0).abs() < 1e-2);
        assert!((after[1] - before[1] + 20.0).abs() < 1e-2);
    }

    #[test]
    fn zoom_keeps_pointer_anchor() {
        let mut vp = Viewport::default();
        let pointer = [600.0, 150.0];
        let anchor = vp.from_screen(pointer, SIZE);
        vp.zoom_at(pointer, SIZE, 2.0);
        assert!((vp.zoom - 3.0).abs() < 1e-9);
        let p = vp.to_screen(anchor.0, anchor.1, SIZE);
        assert!((p[0] - pointer[0]).abs() < 1e-2);
        assert!((p[1] - pointer[1]).abs() < 1e-2);
    }

    #[test]
    fn zoom_is_clamped() {
        let mut vp = Viewport::default();
        vp.zoom_at([400.0, 300.0], SIZE, 1e-9);
        assert_eq!(vp.zoom, MIN_ZOOM);
        vp.zoom_at([400.0, 300.0], SIZE, 1e12);
        assert_eq!(vp.zoom, MAX_ZOOM);
    }

    #[test]
    fn fitted_bounds_are_on_screen_with_padding() {
        let bounds = GeoBounds {
            min_lon: -125.0,
            max_lon: -65.0,
            min_lat: 25.0,
            max_lat: 50.0,
        };
        let vp = Viewport::fit_bounds(&bounds, SIZE, 50.0);
        for (lon, lat) in [(-125.0, 50.0), (-65.0, 25.0), (-125.0, 25.0), (-65.0, 50.0)] {
            let p = vp.to_screen(lon, lat, SIZE);
            assert!(p[0] >= 50.0 - 1e-3 && p[0] <= 750.0 + 1e-3, "{:?}", p);
            assert!(p[1] >= 50.0 - 1e-3 && p[1] <= 550.0 + 1e-3, "{:?}", p);
        }
        assert_eq!(vp.zoom.fract(), 0.0);
    }
}
