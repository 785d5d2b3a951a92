//! Interactive map state: camera, hover highlight and the open popup.

use log::debug;

use crate::data::{BoundaryType, Dataset};
use crate::selection::SelectedFeature;
use crate::style::{BoundaryStyle, HighlightState};

use super::picking::{pick, pick_boundary, MapHit};
use super::viewport::Viewport;

/// Summary bubble anchored at a geographic point.
#[derive(Debug, Clone, PartialEq)]
pub struct Popup {
    pub hit: MapHit,
    pub lon: f64,
    pub lat: f64,
    /// Bold first line
    pub title: String,
    pub lines: Vec<String>,
}

impl Popup {
    fn for_hit(dataset: &Dataset, hit: MapHit, click: (f64, f64)) -> Option<Self> {
        let popup = match hit {
            MapHit::Boundary(i) => {
                let b = dataset.boundaries.get(i)?;
                Popup {
                    hit,
                    lon: click.0,
                    lat: click.1,
                    title: b.name.clone(),
                    lines: vec![
                        format!("Type: {}", b.display_type()),
                        format!("Plates: {} - {}", b.plate_a, b.plate_b),
                    ],
                }
            }
            MapHit::Volcano(i) => {
                let v = dataset.volcanoes.get(i)?;
                Popup {
                    hit,
                    lon: v.lng,
                    lat: v.lat,
                    title: v.name.clone(),
                    lines: vec![format!("Type: {}", v.kind)],
                }
            }
            MapHit::Earthquake(i) => {
                let q = dataset.earthquakes.get(i)?;
                Popup {
                    hit,
                    lon: q.lng,
                    lat: q.lat,
                    title: "Earthquake".to_string(),
                    lines: vec![
                        format!("Magnitude: {}", q.magnitude),
                        format!("Depth: {} km", q.depth_km),
                    ],
                }
            }
        };
        Some(popup)
    }
}

pub struct MapView {
    viewport: Viewport,
    highlights: Vec<HighlightState>,
    hovered: Option<usize>,
    popup: Option<Popup>,
    fitted: bool,
    padding: f32,
}

impl MapView {
    pub fn new(dataset: &Dataset, padding: f32) -> Self {
        Self {
            viewport: Viewport::default(),
            highlights: vec![HighlightState::Default; dataset.boundaries.len()],
            hovered: None,
            popup: None,
            fitted: false,
            padding,
        }
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn popup(&self) -> Option<&Popup> {
        self.popup.as_ref()
    }

    pub fn is_fitted(&self) -> bool {
        self.fitted
    }

    /// Fit the camera to the dataset the first time a real size is known.
    /// Later calls do nothing, so user panning is never undone.
    pub fn ensure_fitted(&mut self, dataset: &Dataset, size: [f32; 2]) {
        if self.fitted || size[0] <= 0.0 || size[1] <= 0.0 {
            return;
        }
        self.fitted = true;
        if let Some(bounds) = dataset.bounds() {
            self.viewport = Viewport::fit_bounds(&bounds, size, self.padding);
            debug!(
                "map fitted to dataset: center ({:.2}, {:.2}) zoom {}",
                self.viewport.center_lon, self.viewport.center_lat, self.viewport.zoom
            );
        }
    }

    pub fn pan_by(&mut self, delta: [f32; 2]) {
        self.viewport.pan_by(delta);
    }

    pub fn zoom_at(&mut self, pointer: [f32; 2], size: [f32; 2], factor: f64) {
        self.viewport.zoom_at(pointer, size, factor);
    }

    /// Current stroke style of boundary `index`.
    pub fn boundary_style(&self, index: usize, kind: BoundaryType) -> BoundaryStyle {
        self.highlights
            .get(index)
            .copied()
            .unwrap_or_default()
            .style(kind)
    }

    pub fn hovered_boundary(&self) -> Option<usize> {
        self.hovered
    }

    /// Move the hover highlight to the boundary under `pos` (or clear it).
    /// Selection is untouched. Returns whether the highlight changed.
    pub fn handle_hover(&mut self, dataset: &Dataset, pos: Option<[f32; 2]>, size: [f32; 2]) -> bool {
        let target = pos.and_then(|p| pick_boundary(dataset, &self.viewport, size, p));
        if target == self.hovered {
            return false;
        }
        if let Some(state) = self.hovered.and_then(|i| self.highlights.get_mut(i)) {
            state.pointer_leave();
        }
        if let Some(state) = target.and_then(|i| self.highlights.get_mut(i)) {
            state.pointer_enter();
        }
        self.hovered = target;
        true
    }

    /// Resolve a click. A hit opens its popup and yields the new selection;
    /// a miss closes any popup and leaves the selection alone.
    pub fn handle_click(&mut self, dataset: &Dataset, pos: [f32; 2], size: [f32; 2]) -> Option<SelectedFeature> {
        let Some(hit) = pick(dataset, &self.viewport, size, pos) else {
            self.popup = None;
            return None;
        };

        let click = self.viewport.from_screen(pos, size);
        self.popup = Popup::for_hit(dataset, hit, click);

        let feature = match hit {
            MapHit::Boundary(i) => dataset.boundaries.get(i).map(SelectedFeature::from_boundary),
            MapHit::Volcano(i) => dataset.volcanoes.get(i).map(SelectedFeature::from_volcano),
            MapHit::Earthquake(i) => dataset.earthquakes.get(i).map(SelectedFeature::from_earthquake),
        };
        debug!("map click hit {:?}", hit);
        feature
    }
}
