//! Cross-section illustrations as a function of (kind, tick).

use crate::render::color::{parse_css_color, Rgba};
use crate::render::Scene;

pub const CANVAS_WIDTH: f32 = 400.0;
pub const CANVAS_HEIGHT: f32 = 300.0;
pub const UNAVAILABLE_TEXT: &str = "No cross-section available.";

/// Which illustration a boundary type gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrossSectionKind {
    Divergent,
    Transform,
    Unavailable,
}

impl CrossSectionKind {
    /// Case-insensitive. Subduction has no illustration of its own.
    pub fn parse(raw: &str) -> Self {
        match raw.to_ascii_lowercase().as_str() {
            "divergent" => Self::Divergent,
            "transform" => Self::Transform,
            _ => Self::Unavailable,
        }
    }
}

/// Build the frame for `kind` at `tick`.
pub fn build(kind: CrossSectionKind, tick: u32) -> Scene {
    let t = tick as f32;
    let mut scene = Scene::new(CANVAS_WIDTH, CANVAS_HEIGHT, Rgba::WHITE);
    match kind {
        CrossSectionKind::Divergent => divergent(&mut scene, t),
        CrossSectionKind::Transform => transform(&mut scene, t),
        CrossSectionKind::Unavailable => unavailable(&mut scene),
    }
    scene
}

fn divergent(scene: &mut Scene, t: f32) {
    let (w, h) = (scene.width, scene.height);
    let rock = parse_css_color("#8B4513");
    let plate = parse_css_color("#228B22");

    // ocean
    scene.rect(0.0, 50.0, w, h - 50.0, parse_css_color("#87CEEB"));

    // ridge widens as the plates pull apart
    scene.polygon(vec![[150.0 - t, 150.0], [175.0, 50.0], [200.0 + t, 150.0]], rock);

    scene.rect(0.0, 150.0, 150.0 - t, 50.0, plate);
    scene.rect(200.0 + t, 150.0, w - 200.0 - t, 50.0, plate);

    scene.text([50.0, 140.0], "Oceanic Plate", 14.0, Rgba::BLACK);
    scene.text([250.0, 140.0], "Oceanic Plate", 14.0, Rgba::BLACK);
    scene.text([150.0, 40.0], "Mid-Ocean Ridge", 14.0, Rgba::BLACK);
}

fn transform(scene: &mut Scene, t: f32) {
    let w = scene.width;
    scene.rect(0.0, 100.0, w, 200.0, parse_css_color("#8B4513"));

    scene.line([100.0, 100.0], [300.0, 300.0], 3.0, parse_css_color("red"));

    // left block slides up-right, right block down-left
    scene.line([50.0 + t, 200.0], [150.0 + t, 100.0], 2.0, Rgba::BLACK);
    scene.line([250.0 - t, 300.0], [350.0 - t, 200.0], 2.0, Rgba::BLACK);

    scene.text([150.0, 50.0], "Transform Fault", 14.0, Rgba::BLACK);
}

fn unavailable(scene: &mut Scene) {
    let center = [scene.width / 2.0, scene.height / 2.0];
    scene.centered_text(center, UNAVAILABLE_TEXT, 18.0, parse_css_color("gray"));
}
