//! Canvas display lists.
//!
//! The cross-section, drift and layer illustrations are described as flat
//! lists of `Primitive`s in canvas pixel coordinates (origin top-left). The
//! binary paints them with egui; tests inspect them directly.

pub mod color;

use color::Rgba;

/// Horizontal text anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
}

/// One drawing instruction on a fixed-size canvas.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// Filled axis-aligned rectangle: `[x, y, w, h]`
    Rect { rect: [f32; 4], fill: Rgba },
    /// Filled closed polygon
    Polygon { points: Vec<[f32; 2]>, fill: Rgba },
    /// Stroked polyline
    Line { points: Vec<[f32; 2]>, width: f32, color: Rgba },
    /// Filled circle with optional outline
    Circle {
        center: [f32; 2],
        radius: f32,
        fill: Rgba,
        stroke: Option<(f32, Rgba)>,
    },
    /// Text whose baseline starts at `pos`
    Text {
        pos: [f32; 2],
        text: String,
        size: f32,
        color: Rgba,
        align: TextAlign,
    },
}

/// A complete canvas frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub width: f32,
    pub height: f32,
    pub background: Rgba,
    pub primitives: Vec<Primitive>,
}

impl Scene {
    pub fn new(width: f32, height: f32, background: Rgba) -> Self {
        Self {
            width,
            height,
            background,
            primitives: Vec::new(),
        }
    }

    pub fn push(&mut self, p: Primitive) {
        self.primitives.push(p);
    }

    pub fn rect(&mut self, x: f32, y: f32, w: f32, h: f32, fill: Rgba) {
        self.push(Primitive::Rect { rect: [x, y, w, h], fill });
    }

    pub fn polygon(&mut self, points: Vec<[f32; 2]>, fill: Rgba) {
        self.push(Primitive::Polygon { points, fill });
    }

    pub fn line(&mut self, from: [f32; 2], to: [f32; 2], width: f32, color: Rgba) {
        self.push(Primitive::Line {
            points: vec![from, to],
            width,
            color,
        });
    }

    pub fn text(&mut self, pos: [f32; 2], text: &str, size: f32, color: Rgba) {
        self.push(Primitive::Text {
            pos,
            text: text.to_string(),
            size,
            color,
            align: TextAlign::Left,
        });
    }

    pub fn centered_text(&mut self, pos: [f32; 2], text: &str, size: f32, color: Rgba) {
        self.push(Primitive::Text {
            pos,
            text: text.to_string(),
            size,
            color,
            align: TextAlign::Center,
        });
    }

    /// All text strings in draw order.
    pub fn texts(&self) -> Vec<&str> {
        self.primitives
            .iter()
            .filter_map(|p| match p {
                Primitive::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}
