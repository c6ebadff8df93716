//! Frontend Models
//!
//! Data structures matching backend entities plus the GeoJSON subset the
//! dashboard works with (Point features only).

use serde::{Deserialize, Serialize};

/// User data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginCredentials {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterCredentials {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Catalog layer kind, serialized as the backend's uppercase strings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LayerType {
    #[serde(rename = "XYZ")]
    Xyz,
    #[serde(rename = "WMS")]
    Wms,
    #[serde(rename = "WMTS")]
    Wmts,
}

impl LayerType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LayerType::Xyz => "XYZ",
            LayerType::Wms => "WMS",
            LayerType::Wmts => "WMTS",
        }
    }
}

/// Type-specific key/value bag carried by a catalog layer.
///
/// The backend stores this as free-form JSON; the known keys are typed and
/// everything else is kept in `extra` so round-trips don't drop data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayerParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribution: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layers: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transparent: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(rename = "tileMatrixSet", default, skip_serializing_if = "Option::is_none")]
    pub tile_matrix_set: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Catalog layer definition (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoLayer {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub layer_type: LayerType,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<LayerParams>,
}

/// A user's personal instance of a catalog layer (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserLayer {
    pub id: i64,
    pub name: String,
    pub is_favorite: bool,
    pub geo_layer: GeoLayer,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature_collection: Option<FeatureCollection>,
}

// ========================
// GeoJSON subset
// ========================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureCollection {
    #[serde(rename = "type")]
    pub kind: String,
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    pub fn new() -> Self {
        Self {
            kind: "FeatureCollection".to_string(),
            features: Vec::new(),
        }
    }
}

impl Default for FeatureCollection {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub properties: serde_json::Value,
    pub geometry: Geometry,
}

impl Feature {
    /// The `name` property, when present and a string
    pub fn name(&self) -> Option<&str> {
        self.properties.get("name").and_then(|v| v.as_str())
    }
}

/// Geometry with the type kept as a plain string so unsupported kinds
/// deserialize fine and are simply skipped at render time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    #[serde(rename = "type")]
    pub kind: String,
    pub coordinates: serde_json::Value,
}

impl Geometry {
    /// `(lng, lat)` for a well-formed Point geometry, `None` for anything else
    pub fn point_coordinates(&self) -> Option<(f64, f64)> {
        if self.kind != "Point" {
            return None;
        }
        let coords = self.coordinates.as_array()?;
        let lng = coords.first()?.as_f64()?;
        let lat = coords.get(1)?.as_f64()?;
        Some((lng, lat))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_layer_deserializes_without_feature_collection() {
        let json = r#"{
            "id": 7,
            "name": "OpenStreetMap",
            "is_favorite": false,
            "geo_layer": {
                "id": 1,
                "name": "OpenStreetMap",
                "layer_type": "XYZ",
                "url": "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png",
                "params": {"attribution": "&copy; OSM contributors"}
            }
        }"#;
        let layer: UserLayer = serde_json::from_str(json).unwrap();
        assert_eq!(layer.id, 7);
        assert_eq!(layer.geo_layer.layer_type, LayerType::Xyz);
        assert!(layer.feature_collection.is_none());
        assert_eq!(
            layer.geo_layer.params.unwrap().attribution.as_deref(),
            Some("&copy; OSM contributors")
        );
    }

    #[test]
    fn layer_params_keep_unknown_keys() {
        let json = r#"{"tileMatrixSet": "GoogleMapsCompatible_Level9", "styles": "default"}"#;
        let params: LayerParams = serde_json::from_str(json).unwrap();
        assert_eq!(
            params.tile_matrix_set.as_deref(),
            Some("GoogleMapsCompatible_Level9")
        );
        assert_eq!(params.extra.get("styles").unwrap(), "default");

        let back = serde_json::to_value(&params).unwrap();
        assert_eq!(back.get("styles").unwrap(), "default");
        assert_eq!(back.get("tileMatrixSet").unwrap(), "GoogleMapsCompatible_Level9");
    }

    #[test]
    fn point_coordinates_only_for_points() {
        let point = Geometry {
            kind: "Point".to_string(),
            coordinates: serde_json::json!([-98.5795, 39.8283]),
        };
        assert_eq!(point.point_coordinates(), Some((-98.5795, 39.8283)));

        let line = Geometry {
            kind: "LineString".to_string(),
            coordinates: serde_json::json!([[0.0, 0.0], [1.0, 1.0]]),
        };
        assert_eq!(line.point_coordinates(), None);

        let malformed = Geometry {
            kind: "Point".to_string(),
            coordinates: serde_json::json!("not coordinates"),
        };
        assert_eq!(malformed.point_coordinates(), None);
    }

    #[test]
    fn layer_type_round_trips_uppercase() {
        assert_eq!(serde_json::to_string(&LayerType::Wmts).unwrap(), "\"WMTS\"");
        let parsed: LayerType = serde_json::from_str("\"WMS\"").unwrap();
        assert_eq!(parsed, LayerType::Wms);
    }
}
