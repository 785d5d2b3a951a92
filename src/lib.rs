pub mod config;
pub mod content;
pub mod cross_section;
pub mod data;
pub mod drift;
pub mod layers;
pub mod map;
pub mod render;
pub mod selection;
pub mod style;
