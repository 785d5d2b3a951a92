//! Continental drift keyframes and the Previous/Next stepper.

use crate::render::color::{parse_css_color, Rgba};
use crate::render::{Primitive, Scene};

pub const CANVAS_WIDTH: f32 = 500.0;
pub const CANVAS_HEIGHT: f32 = 400.0;
pub const GLOBE_RADIUS: f32 = 150.0;

/// A fixed illustration: caption plus continent outlines as offsets from
/// the globe center.
#[derive(Debug, Clone, Copy)]
pub struct Keyframe {
    pub year: &'static str,
    pub description: &'static str,
    pub background: &'static str,
    pub continents: &'static [&'static [[f32; 2]]],
}

pub const KEYFRAMES: [Keyframe; 4] = [
    Keyframe {
        year: "200 million years ago",
        description: "Pangea, the supercontinent, starts to break apart.",
        background: "#d1e0ff",
        continents: &[&[[-50.0, -30.0], [50.0, -30.0], [20.0, 40.0], [-60.0, 30.0]]],
    },
    Keyframe {
        year: "180 million years ago",
        description: "Laurasia and Gondwana begin to separate.",
        background: "#ffebcc",
        continents: &[
            // Laurasia
            &[[-70.0, -50.0], [-20.0, -60.0], [-40.0, -20.0], [-80.0, -10.0]],
            // Gondwana
            &[[10.0, 30.0], [60.0, 50.0], [30.0, 90.0], [-20.0, 70.0]],
        ],
    },
    Keyframe {
        year: "65 million years ago",
        description: "Continents drift further into recognizable forms.",
        background: "#ccffcc",
        continents: &[
            &[[-90.0, -70.0], [-50.0, -50.0], [-70.0, -30.0]],
            &[[-50.0, 30.0], [-30.0, 60.0], [-60.0, 90.0], [-80.0, 50.0]],
            &[[10.0, 10.0], [50.0, 20.0], [30.0, 50.0], [-10.0, 40.0]],
            &[[90.0, 70.0], [110.0, 90.0], [80.0, 100.0]],
            &[[50.0, -40.0], [90.0, -20.0], [70.0, 10.0], [30.0, -10.0]],
        ],
    },
    Keyframe {
        year: "Present Day",
        description: "Modern continents fully take shape.",
        background: "#ffffff",
        continents: &[
            &[[-110.0, -60.0], [-80.0, -40.0], [-100.0, -20.0]],
            &[[-70.0, 40.0], [-50.0, 70.0], [-90.0, 100.0]],
            &[[20.0, 0.0], [60.0, 20.0], [40.0, 50.0]],
            &[[70.0, -50.0], [120.0, -20.0], [100.0, 10.0]],
            &[[110.0, 60.0], [140.0, 80.0], [100.0, 90.0]],
        ],
    },
];

/// User-driven frame index over `KEYFRAMES`. No timer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DriftStepper {
    frame: usize,
}

impl DriftStepper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frame(&self) -> usize {
        self.frame
    }

    pub fn keyframe(&self) -> &'static Keyframe {
        &KEYFRAMES[self.frame]
    }

    /// Advance, wrapping from the last frame to the first.
    pub fn next(&mut self) -> usize {
        self.frame = (self.frame + 1) % KEYFRAMES.len();
        self.frame
    }

    /// Step back, wrapping from the first frame to the last.
    pub fn previous(&mut self) -> usize {
        self.frame = (self.frame + KEYFRAMES.len() - 1) % KEYFRAMES.len();
        self.frame
    }

    pub fn scene(&self) -> Scene {
        keyframe_scene(self.keyframe())
    }
}

pub fn keyframe_scene(frame: &Keyframe) -> Scene {
    let mut scene = Scene::new(CANVAS_WIDTH, CANVAS_HEIGHT, parse_css_color(frame.background));
    let (cx, cy) = (CANVAS_WIDTH / 2.0, CANVAS_HEIGHT / 2.0);

    scene.push(Primitive::Circle {
        center: [cx, cy],
        radius: GLOBE_RADIUS,
        fill: parse_css_color("#87CEEB"),
        stroke: None,
    });

    let land = parse_css_color("#228B22");
    for outline in frame.continents {
        let points = outline.iter().map(|[dx, dy]| [cx + dx, cy + dy]).collect();
        scene.polygon(points, land);
    }

    scene.text([20.0, 30.0], frame.year, 18.0, Rgba::BLACK);
    scene.text([20.0, 50.0], frame.description, 14.0, Rgba::BLACK);
    scene
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_nexts_wrap_to_start() {
        let mut s = DriftStepper::new();
        let seen: Vec<usize> = (0..4).map(|_| s.next()).collect();
        assert_eq!(seen, vec![1, 2, 3, 0]);
    }

    #[test]
    fn previous_from_first_is_last() {
        let mut s = DriftStepper::new();
        assert_eq!(s.previous(), 3);
        assert_eq!(s.keyframe().year, "Present Day");
        assert_eq!(s.previous(), 2);
    }

    #[test]
    fn previous_undoes_next() {
        let mut s = DriftStepper::new();
        s.next();
        s.next();
        s.previous();
        assert_eq!(s.frame(), 1);
    }

    #[test]
    fn scene_uses_keyframe_background_and_caption() {
        let scene = keyframe_scene(&KEYFRAMES[1]);
        assert_eq!(scene.background, parse_css_color("#ffebcc"));
        assert_eq!(
            scene.texts(),
            vec!["180 million years ago", "Laurasia and Gondwana begin to separate."]
        );
        let polygons = scene
            .primitives
            .iter()
            .filter(|p| matches!(p, Primitive::Polygon { .. }))
            .count();
        assert_eq!(polygons, 2);
    }

    #[test]
    fn every_keyframe_has_land() {
        for frame in &KEYFRAMES {
            assert!(!frame.continents.is_empty());
            assert!(frame.continents.iter().all(|outline| outline.len() >= 3));
        }
    }
}
