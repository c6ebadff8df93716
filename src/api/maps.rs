//! Map/Layer API
//!
//! CRUD calls for catalog layers and user layers. Each call carries its own
//! fallback policy: the catalog falls back to a fixed default set, the
//! user-layer list surfaces its error so the caller decides, and updates are
//! fire-and-forget.

use serde::{Deserialize, Serialize};

use super::{delete, get_json, post_json, put_json};
use crate::models::{FeatureCollection, GeoLayer, LayerParams, LayerType, UserLayer};

/// The fixed fallback catalog shown whenever the server can't provide one
pub fn default_catalog() -> Vec<GeoLayer> {
    vec![
        GeoLayer {
            id: 1,
            name: "OpenStreetMap".to_string(),
            description: Some("Standard OpenStreetMap tile layer".to_string()),
            layer_type: LayerType::Xyz,
            url: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            params: Some(LayerParams {
                attribution: Some(
                    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors"
                        .to_string(),
                ),
                ..Default::default()
            }),
        },
        GeoLayer {
            id: 2,
            name: "USGS Topo".to_string(),
            description: Some("USGS Topographic Map".to_string()),
            layer_type: LayerType::Wms,
            url: "https://basemap.nationalmap.gov/arcgis/services/USGSTopo/MapServer/WMSServer"
                .to_string(),
            params: Some(LayerParams {
                layers: Some("0".to_string()),
                format: Some("image/png".to_string()),
                transparent: Some(true),
                ..Default::default()
            }),
        },
        GeoLayer {
            id: 3,
            name: "NASA GIBS ModisTerraTrueColor".to_string(),
            description: Some("NASA MODIS Terra True Color imagery".to_string()),
            layer_type: LayerType::Wmts,
            url: "https://gibs.earthdata.nasa.gov/wmts/epsg3857/best/MODIS_Terra_CorrectedReflectance_TrueColor/default/{Time}/{TileMatrixSet}/{TileMatrix}/{TileRow}/{TileCol}.jpg"
                .to_string(),
            params: Some(LayerParams {
                format: Some("image/jpeg".to_string()),
                time: Some("2023-01-01".to_string()),
                tile_matrix_set: Some("GoogleMapsCompatible_Level9".to_string()),
                ..Default::default()
            }),
        },
        GeoLayer {
            id: 4,
            name: "Weather Radar".to_string(),
            description: Some("OpenWeatherMap precipitation and clouds".to_string()),
            layer_type: LayerType::Xyz,
            url: "https://tile.openweathermap.org/map/precipitation_new/{z}/{x}/{y}.png?appid=9de243494c0b295cca9337e1e96b00e2"
                .to_string(),
            params: Some(LayerParams {
                attribution: Some(
                    "&copy; <a href=\"https://openweathermap.org\">OpenWeatherMap</a>".to_string(),
                ),
                ..Default::default()
            }),
        },
    ]
}

/// GET /maps/layers; the default catalog stands in for a failed or empty
/// response, so callers always get something to render.
pub async fn get_layers() -> Vec<GeoLayer> {
    match get_json::<Vec<GeoLayer>>("/maps/layers").await {
        Ok(layers) if !layers.is_empty() => layers,
        Ok(_) => {
            web_sys::console::log_1(&"[API] Empty catalog, using default layers".into());
            default_catalog()
        }
        Err(err) => {
            web_sys::console::error_1(&format!("[API] Failed to get layers: {}", err).into());
            default_catalog()
        }
    }
}

/// GET /maps/user/layers; the error propagates so each caller can apply its
/// own fallback (empty list on initial load, mock synthesis after an add).
pub async fn get_user_layers() -> Result<Vec<UserLayer>, String> {
    get_json("/maps/user/layers").await
}

#[derive(Serialize)]
struct AddLayerRequest<'a> {
    geo_layer_id: i64,
    name: &'a str,
    is_favorite: bool,
}

#[derive(Debug, Deserialize)]
pub struct AddLayerResponse {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub message: Option<String>,
}

/// POST /maps/user/layers
pub async fn add_user_layer(geo_layer_id: i64, name: &str) -> Result<AddLayerResponse, String> {
    let request = AddLayerRequest {
        geo_layer_id,
        name,
        is_favorite: false,
    };
    post_json("/maps/user/layers", &request).await
}

/// Partial update for PUT /maps/user/layers/:id
#[derive(Debug, Clone, Default, Serialize)]
pub struct UserLayerPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_favorite: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feature_collection: Option<FeatureCollection>,
}

/// PUT /maps/user/layers/:id; persistence is best-effort, failures are logged
/// and swallowed because the local state has already moved on.
pub async fn update_user_layer(id: i64, patch: &UserLayerPatch) {
    let path = format!("/maps/user/layers/{}", id);
    if let Err(err) = put_json::<_, serde_json::Value>(&path, patch).await {
        web_sys::console::error_1(&format!("[API] Failed to update layer {}: {}", id, err).into());
    }
}

/// DELETE /maps/user/layers/:id; the error propagates but the caller removes
/// the layer locally either way.
pub async fn delete_user_layer(id: i64) -> Result<(), String> {
    delete(&format!("/maps/user/layers/{}", id)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tiles;

    #[test]
    fn default_catalog_shape() {
        let catalog = default_catalog();
        assert_eq!(catalog.len(), 4);
        assert_eq!(tiles::default_base_layer(&catalog), Some(1));
        assert_eq!(catalog[1].layer_type, LayerType::Wms);
        assert_eq!(catalog[2].layer_type, LayerType::Wmts);
        assert!(catalog[2].url.contains("{TileMatrix}/{TileRow}/{TileCol}"));
    }

    #[test]
    fn patch_serializes_only_set_fields() {
        let patch = UserLayerPatch {
            is_favorite: Some(true),
            ..Default::default()
        };
        let value = serde_json::to_value(&patch).unwrap();
        assert_eq!(value, serde_json::json!({"is_favorite": true}));
    }
}
