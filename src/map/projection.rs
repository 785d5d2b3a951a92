//! Web Mercator projection in tile-pixel space.
//!
//! World coordinates are pixels of a `256 * 2^zoom` square map with the
//! origin at (lon -180, lat +85.05).

use std::f64::consts::PI;

pub const TILE_SIZE: f64 = 256.0;
pub const MAX_LATITUDE: f64 = 85.051_128_779_806_6;
/// Ground resolution at the equator, zoom 0 (metres per pixel)
const EQUATOR_METERS_PER_PIXEL: f64 = 156_543.033_92;

pub fn world_size(zoom: f64) -> f64 {
    TILE_SIZE * zoom.exp2()
}

pub fn lon_lat_to_world(lon: f64, lat: f64, zoom: f64) -> (f64, f64) {
    let size = world_size(zoom);
    let lat = lat.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();
    let x = (lon + 180.0) / 360.0 * size;
    let y = (1.0 - lat.tan().asinh() / PI) / 2.0 * size;
    (x, y)
}

pub fn world_to_lon_lat(x: f64, y: f64, zoom: f64) -> (f64, f64) {
    let size = world_size(zoom);
    let lon = x / size * 360.0 - 180.0;
    let lat = (PI * (1.0 - 2.0 * y / size)).sinh().atan().to_degrees();
    (lon, lat)
}

/// Ground distance covered by one screen pixel at `lat`.
pub fn meters_per_pixel(lat: f64, zoom: f64) -> f64 {
    EQUATOR_METERS_PER_PIXEL * lat.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians().cos()
        / zoom.exp2()
}
