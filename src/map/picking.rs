//! Screen-space hit-testing of map features.

use crate::data::{Dataset, EarthquakeEvent};

use super::projection::meters_per_pixel;
use super::viewport::Viewport;

/// Edge of the square volcano icon, in pixels.
pub const VOLCANO_ICON_SIZE: f32 = 25.0;
/// Earthquake circle radius per unit of magnitude.
pub const METERS_PER_MAGNITUDE: f64 = 10_000.0;
pub const MIN_QUAKE_RADIUS: f32 = 3.0;
/// Pointer tolerance around boundary lines.
pub const BOUNDARY_TOLERANCE: f32 = 6.0;

/// Index into the matching `Dataset` list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MapHit {
    Volcano(usize),
    Earthquake(usize),
    Boundary(usize),
}

/// On-screen radius of an earthquake circle at the current zoom.
pub fn quake_radius_px(quake: &EarthquakeEvent, zoom: f64) -> f32 {
    let meters = quake.magnitude.max(0.0) * METERS_PER_MAGNITUDE;
    let px = (meters / meters_per_pixel(quake.lat, zoom)) as f32;
    if px.is_finite() {
        px.max(MIN_QUAKE_RADIUS)
    } else {
        MIN_QUAKE_RADIUS
    }
}

/// Distance from `p` to the segment `a`-`b`.
pub fn distance_to_segment(p: [f32; 2], a: [f32; 2], b: [f32; 2]) -> f32 {
    let (abx, aby) = (b[0] - a[0], b[1] - a[1]);
    let (apx, apy) = (p[0] - a[0], p[1] - a[1]);
    let len_sq = abx * abx + aby * aby;
    let t = if len_sq > 0.0 {
        ((apx * abx + apy * aby) / len_sq).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let (dx, dy) = (apx - t * abx, apy - t * aby);
    (dx * dx + dy * dy).sqrt()
}

/// Topmost feature under `pos`: volcanoes, then earthquakes, then the
/// nearest boundary within tolerance. Later markers are drawn on top, so
/// they win among their own kind.
pub fn pick(dataset: &Dataset, viewport: &Viewport, size: [f32; 2], pos: [f32; 2]) -> Option<MapHit> {
    let half = VOLCANO_ICON_SIZE / 2.0;
    let volcano = dataset.volcanoes.iter().rposition(|v| {
        let p = viewport.to_screen(v.lng, v.lat, size);
        (pos[0] - p[0]).abs() <= half && (pos[1] - p[1]).abs() <= half
    });
    if let Some(i) = volcano {
        return Some(MapHit::Volcano(i));
    }

    let quake = dataset.earthquakes.iter().rposition(|q| {
        let p = viewport.to_screen(q.lng, q.lat, size);
        let (dx, dy) = (pos[0] - p[0], pos[1] - p[1]);
        (dx * dx + dy * dy).sqrt() <= quake_radius_px(q, viewport.zoom)
    });
    if let Some(i) = quake {
        return Some(MapHit::Earthquake(i));
    }

    pick_boundary(dataset, viewport, size, pos).map(MapHit::Boundary)
}

/// Nearest named boundary within `BOUNDARY_TOLERANCE` of `pos`. Unnamed
/// lines are drawn but not interactive.
pub fn pick_boundary(
    dataset: &Dataset,
    viewport: &Viewport,
    size: [f32; 2],
    pos: [f32; 2],
) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;
    for (i, boundary) in dataset.boundaries.iter().enumerate() {
        if boundary.name.is_empty() {
            continue;
        }
        let points: Vec<[f32; 2]> = boundary
            .geometry
            .iter()
            .map(|&(lon, lat)| viewport.to_screen(lon, lat, size))
            .collect();
        let d = points
            .windows(2)
            .map(|w| distance_to_segment(pos, w[0], w[1]))
            .fold(f32::INFINITY, f32::min);
        if d <= BOUNDARY_TOLERANCE && best.map_or(true, |(_, bd)| d < bd) {
            best = Some((i, d));
        }
    }
    best.map(|(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{BoundaryFeature, BoundaryType, VolcanoSite};

    const SIZE: [f32; 2] = [800.0, 600.0];

    fn viewport() -> Viewport {
        Viewport {
            center_lon: 0.0,
            center_lat: 0.0,
            zoom: 4.0,
        }
    }

    fn boundary(name: &str, geometry: Vec<(f64, f64)>) -> BoundaryFeature {
        BoundaryFeature {
            name: name.to_string(),
            plate_a: "A".to_string(),
            plate_b: "B".to_string(),
            raw_type: Some("Transform".to_string()),
            boundary_type: BoundaryType::Transform,
            geometry,
        }
    }

    fn stacked() -> Dataset {
        Dataset {
            boundaries: vec![boundary("line", vec![(-10.0, 0.0), (10.0, 0.0)])],
            earthquakes: vec![EarthquakeEvent {
                lat: 0.0,
                lng: 0.0,
                magnitude: 6.0,
                depth_km: 10.0,
            }],
            volcanoes: vec![VolcanoSite {
                name: "Peak".to_string(),
                kind: "Stratovolcano".to_string(),
                lat: 0.0,
                lng: 0.0,
            }],
        }
    }

    #[test]
    fn segment_distance() {
        assert_eq!(distance_to_segment([5.0, 3.0], [0.0, 0.0], [10.0, 0.0]), 3.0);
        assert_eq!(distance_to_segment([13.0, 4.0], [0.0, 0.0], [10.0, 0.0]), 5.0);
        assert_eq!(distance_to_segment([3.0, 4.0], [0.0, 0.0], [0.0, 0.0]), 5.0);
    }

    #[test]
    fn volcano_beats_earthquake_beats_boundary() {
        let mut data = stacked();
        let vp = viewport();
        let center = [400.0, 300.0];
        assert_eq!(pick(&data, &vp, SIZE, center), Some(MapHit::Volcano(0)));
        data.volcanoes.clear();
        assert_eq!(pick(&data, &vp, SIZE, center), Some(MapHit::Earthquake(0)));
        data.earthquakes.clear();
        assert_eq!(pick(&data, &vp, SIZE, center), Some(MapHit::Boundary(0)));
    }

    #[test]
    fn boundary_tolerance() {
        let data = Dataset {
            boundaries: vec![boundary("line", vec![(-10.0, 0.0), (10.0, 0.0)])],
            ..Dataset::default()
        };
        let vp = viewport();
        assert_eq!(pick(&data, &vp, SIZE, [420.0, 305.0]), Some(MapHit::Boundary(0)));
        assert_eq!(pick(&data, &vp, SIZE, [420.0, 310.0]), None);
    }

    #[test]
    fn nearest_boundary_wins() {
        let data = Dataset {
            boundaries: vec![
                boundary("far", vec![(-10.0, 0.0), (10.0, 0.0)]),
                boundary("near", vec![(-10.0, -0.2), (10.0, -0.2)]),
            ],
            ..Dataset::default()
        };
        let vp = viewport();
        let on_near = vp.to_screen(0.0, -0.2, SIZE);
        assert_eq!(pick_boundary(&data, &vp, SIZE, on_near), Some(1));
    }

    #[test]
    fn unnamed_boundaries_are_not_pickable() {
        let data = Dataset {
            boundaries: vec![boundary("", vec![(-10.0, 0.0), (10.0, 0.0)])],
            ..Dataset::default()
        };
        assert_eq!(pick(&data, &viewport(), SIZE, [400.0, 300.0]), None);
    }

    #[test]
    fn whitespace_name_still_counts_as_named() {
        let data = Dataset {
            boundaries: vec![boundary("  ", vec![(-10.0, 0.0), (10.0, 0.0)])],
            ..Dataset::default()
        };
        assert_eq!(pick(&data, &viewport(), SIZE, [400.0, 300.0]), Some(MapHit::Boundary(0)));
    }

    #[test]
    fn quake_radius_has_floor_and_grows_with_zoom() {
        let q = EarthquakeEvent {
            lat: 35.0,
            lng: 139.0,
            magnitude: 5.0,
            depth_km: 30.0,
        };
        assert_eq!(quake_radius_px(&q, 0.0), MIN_QUAKE_RADIUS);
        let z6 = quake_radius_px(&q, 6.0);
        let z7 = quake_radius_px(&q, 7.0);
        assert!((z7 / z6 - 2.0).abs() < 1e-3);
    }
}
