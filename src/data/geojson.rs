//! Plate-boundary GeoJSON decoding.
//!
//! Only `LineString` and `MultiLineString` geometries carry boundary lines;
//! a `MultiLineString` is split into one feature per part. Other geometry
//! kinds are skipped.

use serde::Deserialize;

use super::{BoundaryFeature, BoundaryType, DataError};

#[derive(Deserialize)]
struct FeatureCollection {
    features: Vec<RawFeature>,
}

#[derive(Deserialize)]
struct RawFeature {
    #[serde(default)]
    properties: Option<RawProperties>,
    geometry: Option<RawGeometry>,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
struct RawProperties {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    plate_a: Option<String>,
    #[serde(default)]
    plate_b: Option<String>,
    #[serde(default, rename = "Type")]
    kind: Option<String>,
}

#[derive(Deserialize)]
struct RawGeometry {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    coordinates: serde_json::Value,
}

fn decode_error(e: serde_json::Error) -> DataError {
    DataError {
        message: e.to_string(),
        source_name: "plate_boundaries",
    }
}

fn to_line(coords: Vec<Vec<f64>>) -> Vec<(f64, f64)> {
    coords
        .into_iter()
        .filter_map(|c| match c.as_slice() {
            [lon, lat, ..] => Some((*lon, *lat)),
            _ => None,
        })
        .collect()
}

/// Decode a FeatureCollection of boundary lines.
pub fn parse_boundaries(json: &str) -> Result<Vec<BoundaryFeature>, DataError> {
    let collection: FeatureCollection = serde_json::from_str(json).map_err(decode_error)?;
    let mut out = Vec::with_capacity(collection.features.len());

    for (idx, feature) in collection.features.into_iter().enumerate() {
        let Some(geometry) = feature.geometry else {
            log::warn!("boundary feature {} has no geometry, skipped", idx);
            continue;
        };
        let lines = match geometry.kind.as_str() {
            "LineString" => {
                let coords: Vec<Vec<f64>> =
                    serde_json::from_value(geometry.coordinates).map_err(decode_error)?;
                vec![to_line(coords)]
            }
            "MultiLineString" => {
                let parts: Vec<Vec<Vec<f64>>> =
                    serde_json::from_value(geometry.coordinates).map_err(decode_error)?;
                parts.into_iter().map(to_line).collect()
            }
            other => {
                log::warn!("boundary feature {} has {} geometry, skipped", idx, other);
                continue;
            }
        };

        let props = feature.properties.unwrap_or_default();
        let boundary_type = BoundaryType::parse(props.kind.as_deref());
        for line in lines.into_iter().filter(|l| l.len() >= 2) {
            out.push(BoundaryFeature {
                name: props.name.clone().unwrap_or_default(),
                plate_a: props.plate_a.clone().unwrap_or_default(),
                plate_b: props.plate_b.clone().unwrap_or_default(),
                raw_type: props.kind.clone(),
                boundary_type,
                geometry: line,
            });
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {"type": "Feature",
             "properties": {"Name": "EU-NA", "PlateA": "EU", "PlateB": "NA", "Type": "Divergent"},
             "geometry": {"type": "LineString", "coordinates": [[-30.0, 60.0], [-25.0, 50.0]]}},
            {"type": "Feature",
             "properties": {"Name": "Split", "PlateA": "PA", "PlateB": "NA", "Type": "transform"},
             "geometry": {"type": "MultiLineString",
                          "coordinates": [[[-120.0, 35.0], [-118.0, 34.0]], [[-117.0, 33.0], [-116.0, 32.0, 10.0]]]}},
            {"type": "Feature",
             "properties": {"Name": "Point"},
             "geometry": {"type": "Point", "coordinates": [1.0, 2.0]}},
            {"type": "Feature",
             "properties": {"Name": "NoType", "PlateA": "AF", "PlateB": "AN"},
             "geometry": {"type": "LineString", "coordinates": [[10.0, -50.0], [20.0, -52.0]]}}
        ]
    }"#;

    #[test]
    fn decodes_lines_and_splits_multilines() {
        let features = parse_boundaries(SAMPLE).unwrap();
        assert_eq!(features.len(), 4);
        assert_eq!(features[0].name, "EU-NA");
        assert_eq!(features[0].boundary_type, BoundaryType::Divergent);
        assert_eq!(features[0].geometry, vec![(-30.0, 60.0), (-25.0, 50.0)]);
        assert_eq!(features[1].name, "Split");
        assert_eq!(features[2].name, "Split");
        assert_eq!(features[2].geometry[1], (-116.0, 32.0));
        assert_eq!(features[1].boundary_type, BoundaryType::Transform);
    }

    #[test]
    fn missing_type_is_unknown() {
        let features = parse_boundaries(SAMPLE).unwrap();
        let no_type = features.iter().find(|f| f.name == "NoType").unwrap();
        assert_eq!(no_type.raw_type, None);
        assert_eq!(no_type.boundary_type, BoundaryType::Unknown);
    }

    #[test]
    fn invalid_json_is_an_error() {
        let err = parse_boundaries("{\"features\": 3}").unwrap_err();
        assert_eq!(err.source_name, "plate_boundaries");
    }
}
