//! Tile Source Resolution
//!
//! Turns a catalog layer definition into the concrete tile source the map
//! renders: XYZ templates pass through, WMS carries its request parameters,
//! and WMTS templates are rewritten into plain XYZ templates by substituting
//! their placeholders.

use crate::models::{GeoLayer, LayerParams, LayerType};

/// Default WMS image format when the layer params don't specify one
pub const DEFAULT_WMS_FORMAT: &str = "image/png";

/// Resolved tile source for one catalog layer
#[derive(Debug, Clone, PartialEq)]
pub enum TileSource {
    Xyz {
        url: String,
        attribution: String,
    },
    Wms {
        url: String,
        layers: String,
        format: String,
        transparent: bool,
        attribution: String,
    },
}

fn attribution(params: Option<&LayerParams>) -> String {
    params
        .and_then(|p| p.attribution.clone())
        .unwrap_or_default()
}

/// Resolve a catalog layer into its tile source.
///
/// WMTS placeholder substitution is exact-string and case-sensitive:
/// `{Time}`, `{TileMatrixSet}`, and the `{TileMatrix}/{TileRow}/{TileCol}`
/// triple (rewritten to Leaflet's `{z}/{y}/{x}` ordering).
pub fn resolve(layer: &GeoLayer) -> TileSource {
    let params = layer.params.as_ref();
    match layer.layer_type {
        LayerType::Xyz => TileSource::Xyz {
            url: layer.url.clone(),
            attribution: attribution(params),
        },
        LayerType::Wms => TileSource::Wms {
            url: layer.url.clone(),
            layers: params
                .and_then(|p| p.layers.clone())
                .unwrap_or_default(),
            format: params
                .and_then(|p| p.format.clone())
                .unwrap_or_else(|| DEFAULT_WMS_FORMAT.to_string()),
            transparent: params.and_then(|p| p.transparent).unwrap_or(true),
            attribution: attribution(params),
        },
        LayerType::Wmts => {
            let time = params.and_then(|p| p.time.as_deref()).unwrap_or("");
            let matrix_set = params
                .and_then(|p| p.tile_matrix_set.as_deref())
                .unwrap_or("");
            let url = layer
                .url
                .replace("{Time}", time)
                .replace("{TileMatrixSet}", matrix_set)
                .replace("{TileMatrix}/{TileRow}/{TileCol}", "{z}/{y}/{x}");
            TileSource::Xyz {
                url,
                attribution: attribution(params),
            }
        }
    }
}

/// Id of the first XYZ catalog entry, used as the default base layer
pub fn default_base_layer(layers: &[GeoLayer]) -> Option<i64> {
    layers
        .iter()
        .find(|l| l.layer_type == LayerType::Xyz)
        .map(|l| l.id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layer(layer_type: LayerType, url: &str, params: Option<LayerParams>) -> GeoLayer {
        GeoLayer {
            id: 1,
            name: "Test".to_string(),
            description: None,
            layer_type,
            url: url.to_string(),
            params,
        }
    }

    #[test]
    fn xyz_passes_template_through() {
        let source = resolve(&layer(
            LayerType::Xyz,
            "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png",
            Some(LayerParams {
                attribution: Some("&copy; OSM".to_string()),
                ..Default::default()
            }),
        ));
        assert_eq!(
            source,
            TileSource::Xyz {
                url: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
                attribution: "&copy; OSM".to_string(),
            }
        );
    }

    #[test]
    fn wms_defaults_format_and_transparency() {
        let source = resolve(&layer(
            LayerType::Wms,
            "https://basemap.nationalmap.gov/arcgis/services/USGSTopo/MapServer/WMSServer",
            Some(LayerParams {
                layers: Some("0".to_string()),
                ..Default::default()
            }),
        ));
        match source {
            TileSource::Wms {
                layers,
                format,
                transparent,
                ..
            } => {
                assert_eq!(layers, "0");
                assert_eq!(format, DEFAULT_WMS_FORMAT);
                assert!(transparent);
            }
            other => panic!("expected WMS source, got {:?}", other),
        }
    }

    #[test]
    fn wms_explicit_params_win() {
        let source = resolve(&layer(
            LayerType::Wms,
            "https://example.com/wms",
            Some(LayerParams {
                layers: Some("roads".to_string()),
                format: Some("image/jpeg".to_string()),
                transparent: Some(false),
                ..Default::default()
            }),
        ));
        match source {
            TileSource::Wms {
                format, transparent, ..
            } => {
                assert_eq!(format, "image/jpeg");
                assert!(!transparent);
            }
            other => panic!("expected WMS source, got {:?}", other),
        }
    }

    #[test]
    fn wmts_substitutes_placeholders() {
        let source = resolve(&layer(
            LayerType::Wmts,
            "https://gibs.earthdata.nasa.gov/wmts/epsg3857/best/MODIS/default/{Time}/{TileMatrixSet}/{TileMatrix}/{TileRow}/{TileCol}.jpg",
            Some(LayerParams {
                time: Some("2023-01-01".to_string()),
                tile_matrix_set: Some("GoogleMapsCompatible_Level9".to_string()),
                ..Default::default()
            }),
        ));
        assert_eq!(
            source,
            TileSource::Xyz {
                url: "https://gibs.earthdata.nasa.gov/wmts/epsg3857/best/MODIS/default/2023-01-01/GoogleMapsCompatible_Level9/{z}/{y}/{x}.jpg".to_string(),
                attribution: String::new(),
            }
        );
    }

    #[test]
    fn wmts_substitution_is_case_sensitive() {
        // Lowercase placeholders are not the documented tokens and stay as-is
        let source = resolve(&layer(
            LayerType::Wmts,
            "https://example.com/{time}/{tileMatrixSet}/{TileMatrix}/{TileRow}/{TileCol}.png",
            Some(LayerParams {
                time: Some("2023-01-01".to_string()),
                tile_matrix_set: Some("set9".to_string()),
                ..Default::default()
            }),
        ));
        assert_eq!(
            source,
            TileSource::Xyz {
                url: "https://example.com/{time}/{tileMatrixSet}/{z}/{y}/{x}.png".to_string(),
                attribution: String::new(),
            }
        );
    }

    #[test]
    fn wmts_missing_params_substitute_empty() {
        let source = resolve(&layer(
            LayerType::Wmts,
            "https://example.com/{Time}/{TileMatrixSet}/{TileMatrix}/{TileRow}/{TileCol}.png",
            None,
        ));
        assert_eq!(
            source,
            TileSource::Xyz {
                url: "https://example.com///{z}/{y}/{x}.png".to_string(),
                attribution: String::new(),
            }
        );
    }

    #[test]
    fn default_base_layer_picks_first_xyz() {
        let layers = vec![
            GeoLayer {
                id: 2,
                ..layer(LayerType::Wms, "https://example.com/wms", None)
            },
            GeoLayer {
                id: 5,
                ..layer(LayerType::Xyz, "https://a/{z}/{x}/{y}.png", None)
            },
            GeoLayer {
                id: 9,
                ..layer(LayerType::Xyz, "https://b/{z}/{x}/{y}.png", None)
            },
        ];
        assert_eq!(default_base_layer(&layers), Some(5));
        assert_eq!(default_base_layer(&layers[..1]), None);
        assert_eq!(default_base_layer(&[]), None);
    }
}
