//! Slippy-map raster tiles: which ones are on screen, where they come from,
//! and a background loader that fetches and decodes them.

use std::collections::{HashMap, HashSet};
use std::sync::mpsc;
use std::sync::Arc;
use std::time::Duration;

use log::{debug, warn};
use url::Url;

use super::projection::TILE_SIZE;
use super::viewport::{Viewport, MAX_ZOOM, MIN_ZOOM};

/// Tile addressing as used by OSM-style servers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileCoord {
    pub x: u32,
    pub y: u32,
    pub z: u8,
}

/// A tile placed on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileSlot {
    pub coord: TileCoord,
    /// Top-left corner relative to the map area
    pub min: [f32; 2],
    /// Edge length in screen pixels
    pub size: f32,
}

/// Tiles covering a `size` screen at `viewport`. Columns and rows outside
/// the world are dropped, so the map does not repeat horizontally.
pub fn visible_tiles(viewport: &Viewport, size: [f32; 2]) -> Vec<TileSlot> {
    let z = viewport.zoom.round().clamp(MIN_ZOOM, MAX_ZOOM) as u8;
    let scale = (viewport.zoom - z as f64).exp2();
    let tile_px = TILE_SIZE * scale;
    let count = 1_i64 << z;

    let (ox, oy) = viewport.world_origin(size);
    let first_x = (ox / tile_px).floor() as i64;
    let first_y = (oy / tile_px).floor() as i64;
    let last_x = ((ox + size[0] as f64) / tile_px).floor() as i64;
    let last_y = ((oy + size[1] as f64) / tile_px).floor() as i64;

    let mut out = Vec::new();
    for ty in first_y.max(0)..=last_y.min(count - 1) {
        for tx in first_x.max(0)..=last_x.min(count - 1) {
            out.push(TileSlot {
                coord: TileCoord {
                    x: tx as u32,
                    y: ty as u32,
                    z,
                },
                min: [
                    (tx as f64 * tile_px - ox) as f32,
                    (ty as f64 * tile_px - oy) as f32,
                ],
                size: tile_px as f32,
            });
        }
    }
    out
}

/// Error while fetching or decoding a tile
#[derive(Debug, Clone)]
pub struct TileError {
    pub message: String,
}

impl std::fmt::Display for TileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for TileError {}

const SUBDOMAINS: [&str; 3] = ["a", "b", "c"];

/// Expand a `{s}/{z}/{x}/{y}` template for one tile.
pub fn tile_url(template: &str, coord: TileCoord) -> Result<Url, TileError> {
    let sub = SUBDOMAINS[((coord.x as u64 + coord.y as u64) % 3) as usize];
    let expanded = template
        .replace("{s}", sub)
        .replace("{z}", &coord.z.to_string())
        .replace("{x}", &coord.x.to_string())
        .replace("{y}", &coord.y.to_string());
    Url::parse(&expanded).map_err(|e| TileError {
        message: format!("Invalid tile URL {}: {}", expanded, e),
    })
}

/// Decoded tile pixels (RGBA).
pub struct TileImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

/// Least-recently-used store keyed by tile.
pub struct TileCache<T> {
    capacity: usize,
    clock: u64,
    entries: HashMap<TileCoord, (T, u64)>,
}

impl<T> TileCache<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            clock: 0,
            entries: HashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, coord: &TileCoord) -> bool {
        self.entries.contains_key(coord)
    }

    /// Look up and mark as used.
    pub fn get(&mut self, coord: &TileCoord) -> Option<&T> {
        self.clock += 1;
        let now = self.clock;
        self.entries.get_mut(coord).map(|(value, used)| {
            *used = now;
            &*value
        })
    }

    /// Insert and return the coordinates evicted to stay within capacity.
    pub fn insert(&mut self, coord: TileCoord, value: T) -> Vec<TileCoord> {
        self.clock += 1;
        self.entries.insert(coord, (value, self.clock));
        let mut evicted = Vec::new();
        while self.entries.len() > self.capacity {
            let oldest = self
                .entries
                .iter()
                .min_by_key(|(_, (_, used))| *used)
                .map(|(c, _)| *c);
            match oldest {
                Some(c) => {
                    self.entries.remove(&c);
                    evicted.push(c);
                }
                None => break,
            }
        }
        evicted
    }
}

/// Concurrent downloads allowed at once; further requests wait for a later frame.
pub const MAX_IN_FLIGHT: usize = 8;

/// Fetches tiles on background threads and hands back decoded images.
pub struct TileLoader {
    template: String,
    client: reqwest::blocking::Client,
    pending: HashMap<TileCoord, mpsc::Receiver<Result<TileImage, TileError>>>,
    failed: HashSet<TileCoord>,
    on_complete: Option<Arc<dyn Fn() + Send + Sync>>,
}

impl TileLoader {
    pub fn new(template: &str, user_agent: &str, timeout: Duration) -> Result<Self, TileError> {
        // Reject a broken template up front rather than once per tile.
        tile_url(template, TileCoord { x: 0, y: 0, z: 0 })?;

        let client = reqwest::blocking::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .map_err(|e| TileError {
                message: format!("Client error: {}", e),
            })?;

        Ok(Self {
            template: template.to_string(),
            client,
            pending: HashMap::new(),
            failed: HashSet::new(),
            on_complete: None,
        })
    }

    /// Called from the worker thread after each tile finishes.
    pub fn with_notifier(mut self, notify: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_complete = Some(Arc::new(notify));
        self
    }

    /// Start fetching `coord` unless it is already in flight or known bad.
    /// Returns whether a request is (now) outstanding.
    pub fn request(&mut self, coord: TileCoord) -> bool {
        if self.pending.contains_key(&coord) {
            return true;
        }
        if self.failed.contains(&coord) || self.pending.len() >= MAX_IN_FLIGHT {
            return false;
        }

        let url = match tile_url(&self.template, coord) {
            Ok(url) => url,
            Err(e) => {
                warn!("tile {:?}: {}", coord, e);
                self.failed.insert(coord);
                return false;
            }
        };

        let (tx, rx) = mpsc::channel();
        let client = self.client.clone();
        let notify = self.on_complete.clone();
        std::thread::spawn(move || {
            let result = fetch_and_decode(&client, url);
            let _ = tx.send(result);
            if let Some(notify) = notify {
                notify();
            }
        });

        debug!("tile {:?} requested", coord);
        self.pending.insert(coord, rx);
        true
    }

    /// Collect finished downloads. Call every frame.
    pub fn poll(&mut self) -> Vec<(TileCoord, TileImage)> {
        let mut done = Vec::new();
        let mut finished = Vec::new();
        for (coord, rx) in &self.pending {
            match rx.try_recv() {
                Ok(Ok(image)) => {
                    done.push((*coord, image));
                    finished.push(*coord);
                }
                Ok(Err(e)) => {
                    warn!("tile {}/{}/{} failed: {}", coord.z, coord.x, coord.y, e);
                    self.failed.insert(*coord);
                    finished.push(*coord);
                }
                Err(mpsc::TryRecvError::Empty) => {}
                Err(mpsc::TryRecvError::Disconnected) => {
                    self.failed.insert(*coord);
                    finished.push(*coord);
                }
            }
        }
        for coord in finished {
            self.pending.remove(&coord);
        }
        done
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}

fn fetch_and_decode(client: &reqwest::blocking::Client, url: Url) -> Result<TileImage, TileError> {
    let resp = client.get(url).send().map_err(|e| TileError {
        message: format!("Request failed: {}", e),
    })?;

    if !resp.status().is_success() {
        return Err(TileError {
            message: format!("HTTP {}", resp.status()),
        });
    }

    let bytes = resp.bytes().map_err(|e| TileError {
        message: format!("Failed to read body: {}", e),
    })?;
    let img = image::load_from_memory(&bytes).map_err(|e| TileError {
        message: format!("Decode failed: {}", e),
    })?;
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();

    Ok(TileImage {
        width,
        height,
        rgba: rgba.into_raw(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_TILE_URL;

    #[test]
    fn url_substitution() {
        let url = tile_url(DEFAULT_TILE_URL, TileCoord { x: 3, y: 5, z: 4 }).unwrap();
        // (3 + 5) % 3 == 2 -> "c"
        assert_eq!(url.as_str(), "https://c.tile.openstreetmap.org/4/3/5.png");
        let url = tile_url(DEFAULT_TILE_URL, TileCoord { x: 0, y: 0, z: 0 }).unwrap();
        assert_eq!(url.host_str(), Some("a.tile.openstreetmap.org"));
    }

    #[test]
    fn broken_template_is_an_error() {
        assert!(tile_url("not a url/{z}", TileCoord { x: 0, y: 0, z: 0 }).is_err());
        assert!(TileLoader::new("::", "test", Duration::from_secs(1)).is_err());
    }

    #[test]
    fn whole_world_at_zoom_zero() {
        let vp = Viewport {
            center_lon: 0.0,
            center_lat: 0.0,
            zoom: 0.0,
        };
        let tiles = visible_tiles(&vp, [1024.0, 768.0]);
        assert_eq!(tiles.len(), 1);
        assert_eq!(tiles[0].coord, TileCoord { x: 0, y: 0, z: 0 });
        assert_eq!(tiles[0].min, [384.0, 256.0]);
        assert_eq!(tiles[0].size, 256.0);
    }

    #[test]
    fn visible_tiles_stay_in_range() {
        let vp = Viewport {
            center_lon: 179.0,
            center_lat: 84.0,
            zoom: 3.0,
        };
        let tiles = visible_tiles(&vp, [1200.0, 900.0]);
        assert!(!tiles.is_empty());
        for t in &tiles {
            assert_eq!(t.coord.z, 3);
            assert!(t.coord.x < 8 && t.coord.y < 8, "{:?}", t.coord);
        }
    }

    #[test]
    fn fractional_zoom_scales_tiles() {
        let vp = Viewport {
            center_lon: 0.0,
            center_lat: 0.0,
            zoom: 2.4,
        };
        let tiles = visible_tiles(&vp, [800.0, 600.0]);
        let expected = 256.0 * 0.4f64.exp2();
        assert!(tiles.iter().all(|t| (t.size as f64 - expected).abs() < 1e-3));
    }

    #[test]
    fn cache_evicts_least_recently_used() {
        let c = |x| TileCoord { x, y: 0, z: 1 };
        let mut cache = TileCache::new(2);
        assert!(cache.insert(c(0), "a").is_empty());
        assert!(cache.insert(c(1), "b").is_empty());
        assert_eq!(cache.get(&c(0)), Some(&"a"));
        assert_eq!(cache.insert(c(2), "c"), vec![c(1)]);
        assert!(cache.contains(&c(0)));
        assert!(!cache.contains(&c(1)));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn loader_deduplicates() {
        // Unroutable port; the request fails in the background but stays
        // pending until polled.
        let mut loader =
            TileLoader::new("http://127.0.0.1:9/{z}/{x}/{y}.png", "test", Duration::from_millis(50))
                .unwrap();
        let coord = TileCoord { x: 0, y: 0, z: 0 };
        assert!(loader.request(coord));
        assert!(loader.request(coord));
        assert_eq!(loader.pending_count(), 1);
    }

    #[test]
    fn loader_caps_in_flight_requests() {
        let mut loader =
            TileLoader::new("http://127.0.0.1:9/{z}/{x}/{y}.png", "test", Duration::from_millis(50))
                .unwrap();
        let accepted = (0..MAX_IN_FLIGHT as u32 + 4)
            .filter(|&x| loader.request(TileCoord { x, y: 0, z: 5 }))
            .count();
        assert_eq!(accepted, MAX_IN_FLIGHT);
    }
}
