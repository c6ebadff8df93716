//! Map View Components
//!
//! `MapView` renders the dashboard map: one base layer, the catalog as
//! toggleable overlay layers, and a marker overlay per user layer that
//! carries a feature collection. Map clicks become GeoJSON point features
//! forwarded to the dashboard. `BasicMap` is the standalone map shown on the
//! landing page.

use leptos::prelude::*;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::layers;
use crate::leaflet;
use crate::models::{Feature, GeoLayer, LayerType, UserLayer};
use crate::store::{use_app_store, AppStateStoreFields};
use crate::tiles::{self, TileSource};

const MAP_CONTAINER_ID: &str = "dashboard-map";

/// Center of the contiguous United States
const MAP_CENTER: (f64, f64) = (39.8283, -98.5795);
const MAP_ZOOM: f64 = 4.0;

const OSM_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
const OSM_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

const WEATHER_URL: &str =
    "https://tile.openweathermap.org/map/precipitation_new/{z}/{x}/{y}.png?appid=9de243494c0b295cca9337e1e96b00e2";
const WEATHER_ATTRIBUTION: &str = "&copy; <a href=\"https://openweathermap.org\">OpenWeatherMap</a>";

/// Live Leaflet objects owned by one `MapView` instance
struct MapHandles {
    map: leaflet::LeafletMap,
    tiles: Vec<leaflet::TileLayer>,
    marker_groups: Vec<leaflet::LayerGroup>,
    control: Option<leaflet::LayersControl>,
}

// ========================
// Leaflet Option Bags
// ========================

#[derive(Serialize)]
struct TileLayerOptions<'a> {
    attribution: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    opacity: Option<f64>,
}

#[derive(Serialize)]
struct WmsLayerOptions<'a> {
    layers: &'a str,
    format: &'a str,
    transparent: bool,
    attribution: &'a str,
}

fn to_js(options: &impl Serialize) -> JsValue {
    serde_wasm_bindgen::to_value(options).unwrap_or(JsValue::UNDEFINED)
}

fn make_tile_layer(source: &TileSource) -> leaflet::TileLayer {
    match source {
        TileSource::Xyz { url, attribution } => leaflet::tile_layer(
            url,
            &to_js(&TileLayerOptions {
                attribution,
                opacity: None,
            }),
        ),
        TileSource::Wms {
            url,
            layers,
            format,
            transparent,
            attribution,
        } => leaflet::tile_layer_wms(
            url,
            &to_js(&WmsLayerOptions {
                layers,
                format,
                transparent: *transparent,
                attribution,
            }),
        ),
    }
}

fn init_map(on_feature_create: Callback<Feature>) -> MapHandles {
    web_sys::console::log_1(&"[MAP] Creating map instance".into());
    let map = leaflet::new_map(MAP_CONTAINER_ID);
    map.set_view(&leaflet::lat_lng(MAP_CENTER.0, MAP_CENTER.1), MAP_ZOOM);

    // Always-present fallback base so the map is never blank
    leaflet::tile_layer(
        OSM_URL,
        &to_js(&TileLayerOptions {
            attribution: OSM_ATTRIBUTION,
            opacity: None,
        }),
    )
    .add_to(&map);

    let click = Closure::<dyn FnMut(JsValue)>::new(move |event: JsValue| {
        if let Some((lat, lng)) = leaflet::click_lat_lng(&event) {
            let timestamp = String::from(js_sys::Date::new_0().to_iso_string());
            on_feature_create.run(layers::point_feature(lat, lng, &timestamp));
        }
    });
    map.on("click", click.as_ref());
    // The handler lives as long as the page; leak it instead of tracking it
    click.forget();

    MapHandles {
        map,
        tiles: Vec::new(),
        marker_groups: Vec::new(),
        control: None,
    }
}

/// Tear down the previous catalog rendering and rebuild it from state
fn sync_layers(
    handles: &mut MapHandles,
    geo_layers: &[GeoLayer],
    user_layers: &[UserLayer],
    selected_base: Option<i64>,
) {
    if let Some(control) = handles.control.take() {
        control.remove_control();
    }
    for tile in handles.tiles.drain(..) {
        tile.remove_layer();
    }
    for group in handles.marker_groups.drain(..) {
        group.remove_group();
    }

    let mut base_entries: Vec<(String, JsValue)> = Vec::new();
    let mut overlay_entries: Vec<(String, JsValue)> = Vec::new();

    for layer in geo_layers {
        let tile = make_tile_layer(&tiles::resolve(layer));
        let handle: JsValue = AsRef::<JsValue>::as_ref(&tile).clone();
        if layer.layer_type == LayerType::Xyz {
            if selected_base == Some(layer.id) {
                tile.add_to(&handles.map);
            }
            base_entries.push((layer.name.clone(), handle));
        } else {
            overlay_entries.push((layer.name.clone(), handle));
        }
        handles.tiles.push(tile);
    }

    for user_layer in user_layers {
        let Some(collection) = &user_layer.feature_collection else {
            continue;
        };
        let group = leaflet::layer_group();
        for feature in &collection.features {
            // Only Point geometries render; everything else is skipped
            let Some((lng, lat)) = feature.geometry.point_coordinates() else {
                continue;
            };
            let name = feature.name().unwrap_or("Unnamed Point");
            leaflet::marker(&leaflet::lat_lng(lat, lng))
                .bind_popup(&format!("<b>{}</b>", name))
                .add_to_group(&group);
        }
        // Drawn features show immediately; the control can toggle them off
        group.add_to(&handles.map);
        overlay_entries.push((user_layer.name.clone(), AsRef::<JsValue>::as_ref(&group).clone()));
        handles.marker_groups.push(group);
    }

    let control = leaflet::control_layers(
        &leaflet::named_layers(base_entries),
        &leaflet::named_layers(overlay_entries),
    );
    control.add_to(&handles.map);
    handles.control = Some(control);
}

#[component]
pub fn MapView(on_feature_create: Callback<Feature>) -> impl IntoView {
    let store = use_app_store();
    // Leaflet objects are JS values, so they live in thread-local storage
    let handles: StoredValue<Option<MapHandles>, LocalStorage> = StoredValue::new_local(None);
    let (selected_base, set_selected_base) = signal::<Option<i64>>(None);

    Effect::new(move |_| {
        let geo_layers = store.geo_layers().get();
        let user_layers = store.user_layers().get();

        // Default base: first XYZ catalog entry, chosen once
        let base_id = selected_base
            .get_untracked()
            .or_else(|| tiles::default_base_layer(&geo_layers));
        if selected_base.get_untracked().is_none() {
            if let Some(id) = base_id {
                web_sys::console::log_1(
                    &format!("[MAP] Selecting default base layer {}", id).into(),
                );
                set_selected_base.set(Some(id));
            }
        }

        handles.update_value(|slot| {
            let map_handles = slot.get_or_insert_with(|| init_map(on_feature_create));
            sync_layers(map_handles, &geo_layers, &user_layers, base_id);
        });
    });

    on_cleanup(move || {
        handles.update_value(|slot| {
            if let Some(map_handles) = slot.take() {
                web_sys::console::log_1(&"[MAP] Cleaning up map instance".into());
                map_handles.map.remove();
            }
        });
    });

    view! { <div id=MAP_CONTAINER_ID class="map-view"></div> }
}

/// Standalone map for the landing page: OSM base plus a weather overlay,
/// no catalog or user state involved.
#[component]
pub fn BasicMap(id: &'static str) -> impl IntoView {
    let map: StoredValue<Option<leaflet::LeafletMap>, LocalStorage> = StoredValue::new_local(None);

    Effect::new(move |_| {
        map.update_value(|slot| {
            if slot.is_some() {
                return;
            }
            let instance = leaflet::new_map(id);
            instance.set_view(&leaflet::lat_lng(MAP_CENTER.0, MAP_CENTER.1), MAP_ZOOM);
            leaflet::tile_layer(
                OSM_URL,
                &to_js(&TileLayerOptions {
                    attribution: OSM_ATTRIBUTION,
                    opacity: None,
                }),
            )
            .add_to(&instance);

            let weather = leaflet::tile_layer(
                WEATHER_URL,
                &to_js(&TileLayerOptions {
                    attribution: WEATHER_ATTRIBUTION,
                    opacity: Some(0.6),
                }),
            );
            let overlays = leaflet::named_layers(vec![(
                "Weather Radar".to_string(),
                AsRef::<JsValue>::as_ref(&weather).clone(),
            )]);
            leaflet::control_layers(&leaflet::named_layers(Vec::new()), &overlays)
                .add_to(&instance);

            *slot = Some(instance);
        });
    });

    on_cleanup(move || {
        map.update_value(|slot| {
            if let Some(instance) = slot.take() {
                instance.remove();
            }
        });
    });

    view! { <div id=id class="map-view basic-map"></div> }
}
