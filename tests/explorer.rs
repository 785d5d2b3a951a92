use std::time::{Duration, Instant};

use tectonics_explorer::config::ExplorerConfig;
use tectonics_explorer::cross_section::{CrossSection, CrossSectionKind, Frame, FrameSink};
use tectonics_explorer::data::{BoundaryType, Dataset};
use tectonics_explorer::drift::DriftStepper;
use tectonics_explorer::layers::{hit_test, LayerExplorer};
use tectonics_explorer::map::picking::pick;
use tectonics_explorer::map::projection::{lon_lat_to_world, world_to_lon_lat};
use tectonics_explorer::map::{MapHit, MapView, Viewport};
use tectonics_explorer::selection::{detail_view, DetailTab, DetailView, SelectedFeature, SelectionState};
use tectonics_explorer::style::{BoundaryStyle, HighlightState};

/// Records every frame it is asked to draw.
#[derive(Default)]
struct Recorder {
    frames: Vec<Frame>,
}

impl FrameSink for Recorder {
    fn draw(&mut self, frame: Frame) {
        self.frames.push(frame);
    }
}

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn dataset() -> Dataset {
    Dataset::embedded().unwrap()
}

#[test]
fn each_selection_replaces_the_previous_one() {
    let data = dataset();
    let mut state = SelectionState::new();
    assert_eq!(state.view(), DetailView::Placeholder);

    let fault = data
        .boundaries
        .iter()
        .find(|b| b.name == "San Andreas Fault")
        .unwrap();
    state.select(SelectedFeature::from_boundary(fault));
    match state.view() {
        DetailView::Plate {
            card,
            cross_section_type,
        } => {
            assert_eq!(cross_section_type, "Transform");
            assert!(card.rows.contains(&("Plate A", "PA".to_string())));
        }
        other => panic!("expected plate view, got {:?}", other),
    }

    state.select(SelectedFeature::from_volcano(&data.volcanoes[0]));
    assert!(matches!(state.view(), DetailView::Volcano(_)));

    state.select(SelectedFeature::from_earthquake(&data.earthquakes[0]));
    match state.view() {
        DetailView::Earthquake(card) => {
            assert_eq!(card.rows, vec![("Magnitude", "9.1".to_string()), ("Depth", "29 km".to_string())]);
        }
        other => panic!("expected earthquake view, got {:?}", other),
    }

    state.set_tab(DetailTab::Education);
    assert_eq!(state.view(), DetailView::Education);
    state.set_tab(DetailTab::Details);
    assert!(matches!(state.view(), DetailView::Earthquake(_)));
}

#[test]
fn unrecognized_types_fall_back_everywhere() {
    let data = dataset();
    let himalaya = data
        .boundaries
        .iter()
        .find(|b| b.name == "Himalayan Front")
        .unwrap();
    assert_eq!(himalaya.boundary_type, BoundaryType::Unknown);
    assert_eq!(
        HighlightState::Default.style(himalaya.boundary_type),
        BoundaryStyle::for_type(BoundaryType::Unknown)
    );

    let view = detail_view(&SelectedFeature::from_boundary(himalaya), DetailTab::Details);
    let DetailView::Plate {
        cross_section_type, ..
    } = view
    else {
        panic!("expected plate view");
    };
    assert_eq!(CrossSectionKind::parse(&cross_section_type), CrossSectionKind::Unavailable);

    let untyped = data
        .boundaries
        .iter()
        .find(|b| b.name == "Caribbean Boundary")
        .unwrap();
    let view = detail_view(&SelectedFeature::from_boundary(untyped), DetailTab::Details);
    assert!(matches!(view, DetailView::Plate { cross_section_type, .. } if cross_section_type == "Unknown"));
}

#[test]
fn padded_type_strings_are_not_recognized() {
    assert_eq!(
        BoundaryStyle::for_raw_type(Some(" divergent ")),
        BoundaryStyle::for_type(BoundaryType::Unknown)
    );
    assert_eq!(CrossSectionKind::parse(" divergent "), CrossSectionKind::Unavailable);

    let t0 = Instant::now();
    let mut section = CrossSection::new(ms(50), 20);
    let mut sink = Recorder::default();
    section.set_type(Some(" divergent "), t0);
    section.poll(t0 + ms(50), &mut sink);
    assert_eq!(sink.frames.len(), 1);
    assert_eq!(sink.frames[0].kind, CrossSectionKind::Unavailable);
}

#[test]
fn switching_type_cancels_old_timer_first() {
    let t0 = Instant::now();
    let mut section = CrossSection::from_config(&ExplorerConfig::default());
    let mut sink = Recorder::default();

    assert!(section.set_type(Some("Divergent"), t0));
    assert_eq!(section.poll(t0 + ms(120), &mut sink), 2);
    let first_generation = section.generation();

    assert!(section.set_type(Some("Transform"), t0 + ms(130)));
    let switched_at = sink.frames.len();

    // The old timer would have fired at 150 ms.
    assert_eq!(section.poll(t0 + ms(150), &mut sink), 0);
    assert_eq!(section.poll(t0 + ms(180), &mut sink), 1);

    let after = &sink.frames[switched_at..];
    assert_eq!(after.len(), 1);
    assert!(after.iter().all(|f| f.kind == CrossSectionKind::Transform));
    assert!(after.iter().all(|f| f.generation > first_generation));
    assert_eq!(after[0].tick, 0);
}

#[test]
fn clearing_type_stops_frames() {
    let t0 = Instant::now();
    let mut section = CrossSection::new(ms(50), 20);
    let mut sink = Recorder::default();

    section.set_type(Some("Divergent"), t0);
    section.poll(t0 + ms(60), &mut sink);
    assert!(section.is_running());

    section.set_type(None, t0 + ms(70));
    assert!(!section.is_running());
    assert_eq!(section.poll(t0 + ms(500), &mut sink), 0);
    assert_eq!(sink.frames.len(), 1);
    assert!(section.time_until_next(t0 + ms(500)).is_none());
}

#[test]
fn oscillator_sweeps_between_bounds() {
    let t0 = Instant::now();
    let mut section = CrossSection::new(ms(10), 20);
    let mut ticks = Vec::new();
    section.set_type(Some("Transform"), t0);
    for i in 1..=45 {
        section.poll(t0 + ms(10 * i), &mut |f: Frame| ticks.push(f.tick));
    }
    assert_eq!(ticks.len(), 45);
    assert!(ticks.iter().all(|&t| t <= 20));
    assert_eq!(ticks[..4], [0, 1, 2, 3]);
    assert_eq!(ticks[20], 20);
    assert_eq!(ticks[21], 19);
    assert_eq!(ticks[40], 0);
}

#[test]
fn drift_and_layers() {
    let mut stepper = DriftStepper::new();
    for _ in 0..4 {
        stepper.next();
    }
    assert_eq!(stepper.frame(), 0);
    assert_eq!(stepper.previous(), 3);

    assert_eq!(hit_test(0.0, 0.0).map(|l| l.name), Some("Inner Core"));
    assert_eq!(hit_test(120.0, 0.0).map(|l| l.name), Some("Mantle"));
    assert!(hit_test(250.0, 0.0).is_none());

    let mut explorer = LayerExplorer::new();
    explorer.pointer_moved(0.0, 180.0);
    assert_eq!(explorer.hovered().map(|l| l.name), Some("Crust"));
    explorer.pointer_left();
    assert!(explorer.hovered().is_none());
}

#[test]
fn projection_round_trips() {
    for zoom in [0.0, 3.0, 7.5] {
        let (x, y) = lon_lat_to_world(138.73, 35.36, zoom);
        let (lon, lat) = world_to_lon_lat(x, y, zoom);
        assert!((lon - 138.73).abs() < 1e-9);
        assert!((lat - 35.36).abs() < 1e-9);
    }
}

#[test]
fn fitted_map_shows_every_feature() {
    let data = dataset();
    let size = [900.0, 700.0];
    let mut view = MapView::new(&data, 50.0);
    view.ensure_fitted(&data, size);
    let vp = *view.viewport();

    let on_screen = |lon: f64, lat: f64| {
        let p = vp.to_screen(lon, lat, size);
        p[0] >= -1e-2 && p[0] <= size[0] + 1e-2 && p[1] >= -1e-2 && p[1] <= size[1] + 1e-2
    };
    assert!(data.volcanoes.iter().all(|v| on_screen(v.lng, v.lat)));
    assert!(data.earthquakes.iter().all(|q| on_screen(q.lng, q.lat)));
    assert!(data
        .boundaries
        .iter()
        .all(|b| b.geometry.iter().all(|&(lon, lat)| on_screen(lon, lat))));
}

#[test]
fn volcano_marker_wins_over_nearby_quake() {
    let data = dataset();
    let fuji = data
        .volcanoes
        .iter()
        .position(|v| v.name == "Mount Fuji")
        .unwrap();
    let size = [800.0, 600.0];
    let vp = Viewport {
        center_lon: data.volcanoes[fuji].lng,
        center_lat: data.volcanoes[fuji].lat,
        zoom: 10.0,
    };
    assert_eq!(pick(&data, &vp, size, [400.0, 300.0]), Some(MapHit::Volcano(fuji)));
    assert_eq!(pick(&data, &vp, size, [405.0, 295.0]), Some(MapHit::Volcano(fuji)));
}

#[test]
fn map_click_feeds_selection() {
    let data = dataset();
    let size = [800.0, 600.0];
    let mut view = MapView::new(&data, 50.0);
    view.ensure_fitted(&data, size);
    let mut state = SelectionState::new();

    let fuji = data.volcanoes.iter().find(|v| v.name == "Mount Fuji").unwrap();
    let pos = view.viewport().to_screen(fuji.lng, fuji.lat, size);
    if let Some(feature) = view.handle_click(&data, pos, size) {
        state.select(feature);
    }
    assert!(matches!(state.selected(), SelectedFeature::Volcano { .. }));
    assert!(view.popup().is_some());

    // Hover alone never changes the selection.
    let before = state.selected().clone();
    view.handle_hover(&data, Some([10.0, 10.0]), size);
    assert_eq!(state.selected(), &before);
}
