//! Dashboard State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The store is the
//! single source of truth for the dashboard page; the actual mutations live
//! in the `layers` module so they stay testable.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::layers;
use crate::models::{Feature, GeoLayer, User, UserLayer};

/// Dashboard session state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Authenticated (or demo fallback) user
    pub user: Option<User>,
    /// Catalog layers, server-provided or the default set
    pub geo_layers: Vec<GeoLayer>,
    /// The user's personal layers
    pub user_layers: Vec<UserLayer>,
    /// Target layer for map-click feature drawing
    pub active_user_layer_id: Option<i64>,
    /// Initial load in progress
    pub loading: bool,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the whole user-layer list (post-add server refresh)
pub fn store_replace_user_layers(store: &AppStore, user_layers: Vec<UserLayer>) {
    store.user_layers().set(user_layers);
}

/// Append one user layer (server-confirmed or locally synthesized)
pub fn store_add_user_layer(store: &AppStore, user_layer: UserLayer) {
    store.user_layers().write().push(user_layer);
}

/// Remove a user layer by id, clearing the active pointer if it was removed
pub fn store_remove_user_layer(store: &AppStore, user_layer_id: i64) {
    layers::remove_user_layer(&mut store.user_layers().write(), user_layer_id);
    if store.active_user_layer_id().get_untracked() == Some(user_layer_id) {
        store.active_user_layer_id().set(None);
        web_sys::console::log_1(&"[STORE] Cleared active draw layer".into());
    }
}

/// Optimistic favorite flip
pub fn store_set_favorite(store: &AppStore, user_layer_id: i64, is_favorite: bool) {
    layers::set_favorite(&mut store.user_layers().write(), user_layer_id, is_favorite);
}

/// Mirror a persisted feature merge into the store
pub fn store_merge_feature(store: &AppStore, user_layer_id: i64, feature: Feature) {
    layers::merge_feature(&mut store.user_layers().write(), user_layer_id, feature);
}
