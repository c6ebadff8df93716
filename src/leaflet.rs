//! Leaflet Bindings
//!
//! Minimal `wasm_bindgen` bindings to the global `L` namespace, covering the
//! pieces the map view needs: the map itself, XYZ/WMS tile layers, marker
//! groups, and the layers control. Leaflet JS/CSS are loaded from the CDN in
//! `index.html`.

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    pub type LeafletMap;

    #[wasm_bindgen(js_namespace = L, js_name = map)]
    pub fn new_map(container_id: &str) -> LeafletMap;

    #[wasm_bindgen(method, js_name = setView)]
    pub fn set_view(this: &LeafletMap, center: &JsValue, zoom: f64) -> LeafletMap;

    #[wasm_bindgen(method)]
    pub fn on(this: &LeafletMap, event: &str, handler: &JsValue);

    #[wasm_bindgen(method)]
    pub fn remove(this: &LeafletMap);

    pub type TileLayer;

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    pub fn tile_layer(url_template: &str, options: &JsValue) -> TileLayer;

    #[wasm_bindgen(js_namespace = ["L", "tileLayer"], js_name = wms)]
    pub fn tile_layer_wms(base_url: &str, options: &JsValue) -> TileLayer;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to(this: &TileLayer, map: &LeafletMap) -> TileLayer;

    #[wasm_bindgen(method, js_name = remove)]
    pub fn remove_layer(this: &TileLayer);

    pub type LayerGroup;

    #[wasm_bindgen(js_namespace = L, js_name = layerGroup)]
    pub fn layer_group() -> LayerGroup;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to(this: &LayerGroup, map: &LeafletMap) -> LayerGroup;

    #[wasm_bindgen(method, js_name = remove)]
    pub fn remove_group(this: &LayerGroup);

    pub type Marker;

    #[wasm_bindgen(js_namespace = L, js_name = marker)]
    pub fn marker(lat_lng: &JsValue) -> Marker;

    #[wasm_bindgen(method, js_name = bindPopup)]
    pub fn bind_popup(this: &Marker, html: &str) -> Marker;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to_group(this: &Marker, group: &LayerGroup) -> Marker;

    pub type LayersControl;

    #[wasm_bindgen(js_namespace = ["L", "control"], js_name = layers)]
    pub fn control_layers(base_layers: &JsValue, overlays: &JsValue) -> LayersControl;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to(this: &LayersControl, map: &LeafletMap) -> LayersControl;

    #[wasm_bindgen(method, js_name = remove)]
    pub fn remove_control(this: &LayersControl);
}

/// `[lat, lng]` as a JS array, the form Leaflet accepts everywhere
pub fn lat_lng(lat: f64, lng: f64) -> JsValue {
    js_sys::Array::of2(&lat.into(), &lng.into()).into()
}

/// Name → layer object for `L.control.layers`
pub fn named_layers(entries: Vec<(String, JsValue)>) -> JsValue {
    let object = js_sys::Object::new();
    for (name, layer) in entries {
        let _ = js_sys::Reflect::set(&object, &JsValue::from_str(&name), &layer);
    }
    object.into()
}

/// Extract `e.latlng` from a Leaflet mouse event as `(lat, lng)`
pub fn click_lat_lng(event: &JsValue) -> Option<(f64, f64)> {
    let lat_lng = js_sys::Reflect::get(event, &JsValue::from_str("latlng")).ok()?;
    let lat = js_sys::Reflect::get(&lat_lng, &JsValue::from_str("lat"))
        .ok()?
        .as_f64()?;
    let lng = js_sys::Reflect::get(&lat_lng, &JsValue::from_str("lng"))
        .ok()?
        .as_f64()?;
    Some((lat, lng))
}
