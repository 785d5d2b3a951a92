//! Application configuration.
//!
//! Everything tunable lives in `ExplorerConfig`. The defaults reproduce the
//! stock layout; builder methods override single fields.

use std::time::Duration;

pub const DEFAULT_TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const DEFAULT_ATTRIBUTION: &str = "\u{a9} OpenStreetMap contributors";

#[derive(Debug, Clone)]
pub struct ExplorerConfig {
    /// Initial window size in logical pixels
    pub window_size: [f32; 2],
    /// Raster tile URL with `{s}`, `{z}`, `{x}`, `{y}` placeholders
    pub tile_url: String,
    pub tile_attribution: String,
    pub user_agent: String,
    pub tile_timeout: Duration,
    /// Maximum number of decoded tiles kept in memory
    pub tile_cache_capacity: usize,
    /// Cross-section timer period
    pub cross_section_period: Duration,
    pub cross_section_max_tick: u32,
    /// Screen padding used when fitting the dataset into the map
    pub fit_padding: f32,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            window_size: [1400.0, 900.0],
            tile_url: DEFAULT_TILE_URL.to_string(),
            tile_attribution: DEFAULT_ATTRIBUTION.to_string(),
            user_agent: concat!(
                "tectonics-explorer/",
                env!("CARGO_PKG_VERSION"),
                " (educational plate tectonics viewer)"
            )
            .to_string(),
            tile_timeout: Duration::from_secs(10),
            tile_cache_capacity: 256,
            cross_section_period: Duration::from_millis(50),
            cross_section_max_tick: 20,
            fit_padding: 50.0,
        }
    }
}

impl ExplorerConfig {
    pub fn with_tile_cache_capacity(mut self, capacity: usize) -> Self {
        self.tile_cache_capacity = capacity.max(1);
        self
    }

    pub fn with_cross_section_max_tick(mut self, max_tick: u32) -> Self {
        self.cross_section_max_tick = max_tick.max(1);
        self
    }
}
