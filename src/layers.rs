//! Layer Reconciliation Logic
//!
//! Pure state transitions behind the dashboard handlers: catalog lookups,
//! local mock synthesis when the API fails, optimistic removal/favorite
//! flips, and feature-collection merging. Kept free of signals and network
//! calls so they stay unit-testable.

use crate::models::{Feature, FeatureCollection, GeoLayer, Geometry, UserLayer};

/// Catalog lookup by id
pub fn find_catalog_layer(layers: &[GeoLayer], layer_id: i64) -> Option<&GeoLayer> {
    layers.iter().find(|l| l.id == layer_id)
}

/// "Already added" is keyed by the embedded catalog id, not the user layer id
pub fn is_layer_added(user_layers: &[UserLayer], geo_layer_id: i64) -> bool {
    user_layers.iter().any(|ul| ul.geo_layer.id == geo_layer_id)
}

/// The user layer attached to a catalog layer, if any
pub fn user_layer_for(user_layers: &[UserLayer], geo_layer_id: i64) -> Option<&UserLayer> {
    user_layers.iter().find(|ul| ul.geo_layer.id == geo_layer_id)
}

/// Locally synthesized user layer used when the add-layer API fails or the
/// post-add refresh comes back empty. `id` is a timestamp from the caller.
pub fn mock_user_layer(geo_layer: &GeoLayer, id: i64) -> UserLayer {
    UserLayer {
        id,
        name: geo_layer.name.clone(),
        is_favorite: false,
        geo_layer: geo_layer.clone(),
        feature_collection: None,
    }
}

/// Remove by user layer id; returns whether anything was removed
pub fn remove_user_layer(user_layers: &mut Vec<UserLayer>, user_layer_id: i64) -> bool {
    let before = user_layers.len();
    user_layers.retain(|ul| ul.id != user_layer_id);
    user_layers.len() != before
}

/// Unconditional local favorite flip
pub fn set_favorite(user_layers: &mut [UserLayer], user_layer_id: i64, is_favorite: bool) {
    if let Some(layer) = user_layers.iter_mut().find(|ul| ul.id == user_layer_id) {
        layer.is_favorite = is_favorite;
    }
}

/// Append a feature, creating the collection when none exists yet.
/// Features are never removed or edited, so this is append-only.
pub fn append_feature(collection: Option<FeatureCollection>, feature: Feature) -> FeatureCollection {
    let mut collection = collection.unwrap_or_default();
    collection.features.push(feature);
    collection
}

/// Mirror a persisted feature merge into local state
pub fn merge_feature(user_layers: &mut [UserLayer], user_layer_id: i64, feature: Feature) {
    if let Some(layer) = user_layers.iter_mut().find(|ul| ul.id == user_layer_id) {
        layer.feature_collection =
            Some(append_feature(layer.feature_collection.take(), feature));
    }
}

/// Build the GeoJSON point feature for a map click at `(lat, lng)`.
/// `timestamp` is an ISO-8601 string supplied by the caller.
pub fn point_feature(lat: f64, lng: f64, timestamp: &str) -> Feature {
    Feature {
        kind: "Feature".to_string(),
        properties: serde_json::json!({
            "name": format!("Marker at {:.4}, {:.4}", lat, lng),
            "timestamp": timestamp,
        }),
        geometry: Geometry {
            kind: "Point".to_string(),
            coordinates: serde_json::json!([lng, lat]),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LayerParams, LayerType};

    fn catalog_layer(id: i64, layer_type: LayerType) -> GeoLayer {
        GeoLayer {
            id,
            name: format!("Layer {}", id),
            description: None,
            layer_type,
            url: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            params: Some(LayerParams::default()),
        }
    }

    fn user_layer(id: i64, geo_layer_id: i64) -> UserLayer {
        UserLayer {
            id,
            name: format!("User layer {}", id),
            is_favorite: false,
            geo_layer: catalog_layer(geo_layer_id, LayerType::Xyz),
            feature_collection: None,
        }
    }

    #[test]
    fn add_unknown_catalog_layer_is_noop() {
        let catalog = vec![catalog_layer(1, LayerType::Xyz)];
        let user_layers = vec![user_layer(10, 1)];

        // The handler bails before any API call when the lookup misses
        assert!(find_catalog_layer(&catalog, 42).is_none());
        assert_eq!(user_layers.len(), 1);
    }

    #[test]
    fn added_check_keys_on_embedded_catalog_id() {
        let user_layers = vec![user_layer(1700000000000, 3)];
        assert!(is_layer_added(&user_layers, 3));
        // The user layer's own id must not satisfy the check
        assert!(!is_layer_added(&user_layers, 1700000000000));
        assert_eq!(user_layer_for(&user_layers, 3).unwrap().id, 1700000000000);
    }

    #[test]
    fn failed_add_yields_single_mock_layer_with_generated_id() {
        // End-to-end shape of the add-layer failure path: catalog layer 1
        // exists, create API fails, so the handler synthesizes a local record.
        let catalog = vec![catalog_layer(1, LayerType::Xyz)];
        let mut user_layers: Vec<UserLayer> = Vec::new();

        let geo_layer = find_catalog_layer(&catalog, 1).unwrap();
        let generated_id = 1700000000123; // epoch millis at click time
        user_layers.push(mock_user_layer(geo_layer, generated_id));

        assert_eq!(user_layers.len(), 1);
        assert_eq!(user_layers[0].geo_layer.id, 1);
        assert_eq!(user_layers[0].id, generated_id);
        assert!(!user_layers[0].is_favorite);
        assert!(user_layers[0].feature_collection.is_none());
    }

    #[test]
    fn remove_shrinks_state_even_when_delete_failed() {
        // The delete API outcome never reaches this function; removal is
        // unconditional in the handler.
        let mut user_layers = vec![user_layer(10, 1), user_layer(11, 2)];
        assert!(remove_user_layer(&mut user_layers, 10));
        assert_eq!(user_layers.len(), 1);
        assert_eq!(user_layers[0].id, 11);

        assert!(!remove_user_layer(&mut user_layers, 999));
        assert_eq!(user_layers.len(), 1);
    }

    #[test]
    fn favorite_always_flips_locally() {
        let mut user_layers = vec![user_layer(10, 1)];
        set_favorite(&mut user_layers, 10, true);
        assert!(user_layers[0].is_favorite);
        set_favorite(&mut user_layers, 10, false);
        assert!(!user_layers[0].is_favorite);
        // Unknown id is a no-op
        set_favorite(&mut user_layers, 999, true);
        assert!(!user_layers[0].is_favorite);
    }

    #[test]
    fn feature_without_active_layer_changes_nothing() {
        let mut user_layers = vec![user_layer(10, 1)];
        // No active layer means the handler never calls merge_feature; an
        // unknown id likewise leaves every collection untouched.
        merge_feature(&mut user_layers, 999, point_feature(1.0, 2.0, "t"));
        assert!(user_layers[0].feature_collection.is_none());
    }

    #[test]
    fn sequential_features_keep_insertion_order() {
        let mut user_layers = vec![user_layer(10, 1)];
        let first = point_feature(39.8283, -98.5795, "2023-06-01T00:00:00.000Z");
        let second = point_feature(37.7749, -122.4194, "2023-06-01T00:00:01.000Z");

        merge_feature(&mut user_layers, 10, first.clone());
        merge_feature(&mut user_layers, 10, second.clone());

        let collection = user_layers[0].feature_collection.as_ref().unwrap();
        assert_eq!(collection.kind, "FeatureCollection");
        assert_eq!(collection.features.len(), 2);
        assert_eq!(collection.features[0], first);
        assert_eq!(collection.features[1], second);
    }

    #[test]
    fn point_feature_names_embed_rounded_coordinates() {
        let feature = point_feature(39.82834999, -98.57951234, "2023-06-01T00:00:00.000Z");
        assert_eq!(feature.kind, "Feature");
        assert_eq!(feature.name(), Some("Marker at 39.8283, -98.5795"));
        assert_eq!(
            feature.properties.get("timestamp").unwrap(),
            "2023-06-01T00:00:00.000Z"
        );
        // GeoJSON coordinate order is [lng, lat]
        assert_eq!(
            feature.geometry.point_coordinates(),
            Some((-98.57951234, 39.82834999))
        );
    }

    #[test]
    fn append_feature_creates_collection_when_absent() {
        let feature = point_feature(0.0, 0.0, "t");
        let collection = append_feature(None, feature.clone());
        assert_eq!(collection.kind, "FeatureCollection");
        assert_eq!(collection.features, vec![feature]);
    }
}
