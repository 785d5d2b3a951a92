//! Boundary line styling and the per-line hover state machine.
//!
//! Each rendered boundary is either in its default style (keyed by boundary
//! type) or highlighted while the pointer is over it. Transitions are purely
//! presentational; selection is never touched here.

use crate::data::BoundaryType;
use crate::render::color::{parse_css_color, Rgba};

/// Stroke parameters for a boundary polyline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundaryStyle {
    pub color: Rgba,
    pub weight: f32,
    pub opacity: f32,
}

impl BoundaryStyle {
    fn new(color: &str, weight: f32, opacity: f32) -> Self {
        Self {
            color: parse_css_color(color),
            weight,
            opacity,
        }
    }

    /// Default style for a boundary type.
    pub fn for_type(kind: BoundaryType) -> Self {
        match kind {
            BoundaryType::Subduction => Self::new("blue", 2.0, 0.8),
            BoundaryType::Divergent => Self::new("red", 2.0, 0.8),
            BoundaryType::Transform => Self::new("green", 2.0, 0.8),
            BoundaryType::Unknown => Self::new("gray", 1.0, 0.5),
        }
    }

    /// Style while the pointer is over a line.
    pub fn hovered() -> Self {
        Self::new("yellow", 3.0, 1.0)
    }

    /// Resolve the default style straight from a raw type string.
    pub fn for_raw_type(raw: Option<&str>) -> Self {
        Self::for_type(BoundaryType::parse(raw))
    }

    /// Stroke color with opacity applied.
    pub fn stroke_color(&self) -> Rgba {
        self.color.with_opacity(self.opacity)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HighlightState {
    #[default]
    Default,
    Hovered,
}

impl HighlightState {
    pub fn pointer_enter(&mut self) {
        *self = Self::Hovered;
    }

    pub fn pointer_leave(&mut self) {
        *self = Self::Default;
    }

    pub fn style(self, kind: BoundaryType) -> BoundaryStyle {
        match self {
            Self::Default => BoundaryStyle::for_type(kind),
            Self::Hovered => BoundaryStyle::hovered(),
        }
    }
}

/// Map legend rows: label and swatch color.
pub fn legend_entries() -> [(&'static str, Rgba); 4] {
    [
        ("Subduction (Convergent)", parse_css_color("blue")),
        ("Divergent", parse_css_color("red")),
        ("Transform", parse_css_color("green")),
        ("Earthquake", parse_css_color("orange")),
    ]
}
