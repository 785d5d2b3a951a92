//! Earth layer explorer: concentric rings and pointer hit-testing.

use crate::render::color::{parse_css_color, Rgba};
use crate::render::{Primitive, Scene};

pub const CANVAS_SIZE: f32 = 400.0;
pub const HOVER_HINT: &str = "Hover over a layer to see details.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayerId {
    InnerCore,
    OuterCore,
    Mantle,
    Crust,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layer {
    pub id: LayerId,
    pub name: &'static str,
    pub color: &'static str,
    /// Outer radius in canvas pixels
    pub radius: f32,
    pub description: &'static str,
}

impl Layer {
    pub fn fill(&self) -> Rgba {
        parse_css_color(self.color)
    }
}

/// Innermost first; radii strictly increasing.
pub const LAYERS: [Layer; 4] = [
    Layer {
        id: LayerId::InnerCore,
        name: "Inner Core",
        color: "#FF6347",
        radius: 50.0,
        description: "Rigid solid composed of iron and nickel, located at Earth's center.",
    },
    Layer {
        id: LayerId::OuterCore,
        name: "Outer Core",
        color: "#FFA07A",
        radius: 100.0,
        description: "Liquid iron and nickel generating Earth's magnetic field.",
    },
    Layer {
        id: LayerId::Mantle,
        name: "Mantle",
        color: "#FFD700",
        radius: 150.0,
        description: "Silicate minerals making up ~84% of Earth's volume. Includes the asthenosphere, a plastic layer aiding plate motion.",
    },
    Layer {
        id: LayerId::Crust,
        name: "Crust",
        color: "#87CEFA",
        radius: 200.0,
        description: "Basalt (oceanic) and granite (continental) rocks. Thickness varies from 5 to 70 km.",
    },
];

/// Ring containing the offset `(dx, dy)` from the shared center.
///
/// Rings are checked innermost first; ring `i` matches when the distance is
/// within its radius and beyond ring `i - 1`'s. Outside the crust: `None`.
pub fn hit_test(dx: f32, dy: f32) -> Option<&'static Layer> {
    let distance = (dx * dx + dy * dy).sqrt();
    LAYERS.iter().enumerate().find_map(|(i, layer)| {
        let inside = distance <= layer.radius;
        let beyond_inner = i == 0 || distance > LAYERS[i - 1].radius;
        (inside && beyond_inner).then_some(layer)
    })
}

/// Hover state for one explorer canvas.
#[derive(Debug, Clone, Default)]
pub struct LayerExplorer {
    hovered: Option<LayerId>,
}

impl LayerExplorer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hovered(&self) -> Option<&'static Layer> {
        self.hovered
            .and_then(|id| LAYERS.iter().find(|l| l.id == id))
    }

    /// Pointer moved; `(dx, dy)` is relative to the canvas center.
    pub fn pointer_moved(&mut self, dx: f32, dy: f32) {
        self.hovered = hit_test(dx, dy).map(|l| l.id);
    }

    pub fn pointer_left(&mut self) {
        self.hovered = None;
    }

    /// Rings drawn outermost first so inner rings sit on top.
    pub fn scene(&self) -> Scene {
        let mut scene = Scene::new(CANVAS_SIZE, CANVAS_SIZE, Rgba::WHITE);
        let center = [CANVAS_SIZE / 2.0, CANVAS_SIZE / 2.0];
        for layer in LAYERS.iter().rev() {
            scene.push(Primitive::Circle {
                center,
                radius: layer.radius,
                fill: layer.fill(),
                stroke: Some((2.0, Rgba::BLACK)),
            });
        }
        scene
    }
}
