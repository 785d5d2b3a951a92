//! The static feature dataset: plate boundaries, earthquakes and volcanoes.
//!
//! Loaded once at startup from the JSON files embedded in the binary and
//! never mutated afterwards.

pub mod geojson;

use serde::Deserialize;

const PLATE_BOUNDARIES_JSON: &str = include_str!("../../assets/plate_boundaries.json");
const EARTHQUAKES_JSON: &str = include_str!("../../assets/earthquakes.json");
const VOLCANOES_JSON: &str = include_str!("../../assets/volcanoes.json");

/// Error while decoding one of the dataset files
#[derive(Debug)]
pub struct DataError {
    pub message: String,
    pub source_name: &'static str,
}

impl std::fmt::Display for DataError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.source_name, self.message)
    }
}

impl std::error::Error for DataError {}

/// Boundary classification used for styling and cross-sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BoundaryType {
    Subduction,
    Divergent,
    Transform,
    #[default]
    Unknown,
}

impl BoundaryType {
    /// Case-insensitive exact match; absent, padded or unrecognized strings
    /// are `Unknown`.
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::Unknown;
        };
        match raw.to_ascii_lowercase().as_str() {
            "subduction" => Self::Subduction,
            "divergent" => Self::Divergent,
            "transform" => Self::Transform,
            _ => Self::Unknown,
        }
    }

}

#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryFeature {
    pub name: String,
    pub plate_a: String,
    pub plate_b: String,
    /// Type string as it appears in the source record
    pub raw_type: Option<String>,
    pub boundary_type: BoundaryType,
    /// `(lon, lat)` vertices in order
    pub geometry: Vec<(f64, f64)>,
}

impl BoundaryFeature {
    /// Type shown to the user: the source string, or "Unknown" when absent.
    pub fn display_type(&self) -> &str {
        match self.raw_type.as_deref() {
            Some(t) if !t.is_empty() => t,
            _ => "Unknown",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct EarthquakeEvent {
    pub lat: f64,
    pub lng: f64,
    pub magnitude: f64,
    /// Hypocenter depth in kilometres
    #[serde(rename = "depth")]
    pub depth_km: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VolcanoSite {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub lat: f64,
    pub lng: f64,
}

/// Geographic bounding box in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoBounds {
    pub min_lon: f64,
    pub max_lon: f64,
    pub min_lat: f64,
    pub max_lat: f64,
}

impl GeoBounds {
    pub fn from_point(lon: f64, lat: f64) -> Self {
        Self {
            min_lon: lon,
            max_lon: lon,
            min_lat: lat,
            max_lat: lat,
        }
    }

    pub fn extend(&mut self, lon: f64, lat: f64) {
        self.min_lon = self.min_lon.min(lon);
        self.max_lon = self.max_lon.max(lon);
        self.min_lat = self.min_lat.min(lat);
        self.max_lat = self.max_lat.max(lat);
    }

    pub fn contains(&self, lon: f64, lat: f64) -> bool {
        (self.min_lon..=self.max_lon).contains(&lon) && (self.min_lat..=self.max_lat).contains(&lat)
    }
}

/// The three immutable feature collections.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub boundaries: Vec<BoundaryFeature>,
    pub earthquakes: Vec<EarthquakeEvent>,
    pub volcanoes: Vec<VolcanoSite>,
}

impl Dataset {
    /// Decode the dataset shipped with the binary.
    pub fn embedded() -> Result<Self, DataError> {
        Self::from_json(PLATE_BOUNDARIES_JSON, EARTHQUAKES_JSON, VOLCANOES_JSON)
    }

    pub fn from_json(
        boundaries_json: &str,
        earthquakes_json: &str,
        volcanoes_json: &str,
    ) -> Result<Self, DataError> {
        let boundaries = geojson::parse_boundaries(boundaries_json)?;
        let earthquakes: Vec<EarthquakeEvent> =
            serde_json::from_str(earthquakes_json).map_err(|e| DataError {
                message: e.to_string(),
                source_name: "earthquakes",
            })?;
        let volcanoes: Vec<VolcanoSite> =
            serde_json::from_str(volcanoes_json).map_err(|e| DataError {
                message: e.to_string(),
                source_name: "volcanoes",
            })?;

        log::info!(
            "dataset loaded: {} boundaries, {} earthquakes, {} volcanoes",
            boundaries.len(),
            earthquakes.len(),
            volcanoes.len()
        );

        Ok(Self {
            boundaries,
            earthquakes,
            volcanoes,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.boundaries.is_empty() && self.earthquakes.is_empty() && self.volcanoes.is_empty()
    }

    /// Bounding box over every boundary vertex, earthquake and volcano.
    pub fn bounds(&self) -> Option<GeoBounds> {
        let points = self
            .boundaries
            .iter()
            .flat_map(|b| b.geometry.iter().copied())
            .chain(self.earthquakes.iter().map(|q| (q.lng, q.lat)))
            .chain(self.volcanoes.iter().map(|v| (v.lng, v.lat)));

        let mut bounds: Option<GeoBounds> = None;
        for (lon, lat) in points {
            match bounds.as_mut() {
                Some(b) => b.extend(lon, lat),
                None => bounds = Some(GeoBounds::from_point(lon, lat)),
            }
        }
        bounds
    }
}
