//! Dashboard Page
//!
//! Single source of truth for the session: loads profile, catalog, and user
//! layers independently on mount, then mediates every layer/feature mutation
//! between the map, the layer control, and the API. Mutations are optimistic:
//! the UI always reflects the user's action, server persistence is
//! best-effort.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::app::redirect;
use crate::components::{Header, LayerControl, MapView};
use crate::layers;
use crate::models::Feature;
use crate::store::{
    store_add_user_layer, store_merge_feature, store_remove_user_layer, store_replace_user_layers,
    store_set_favorite, AppState, AppStateStoreFields,
};
use crate::token;

fn generated_layer_id() -> i64 {
    js_sys::Date::now() as i64
}

#[component]
pub fn Dashboard() -> impl IntoView {
    let store = Store::new(AppState {
        loading: true,
        ..Default::default()
    });
    provide_context(store);

    // Auth guard + initial load. The three fetches are independent; no
    // failure blocks the others.
    Effect::new(move |_| {
        if !token::is_authenticated() {
            web_sys::console::log_1(&"[DASHBOARD] Not authenticated, redirecting to login".into());
            redirect("/login");
            return;
        }
        spawn_local(async move {
            web_sys::console::log_1(&"[DASHBOARD] Fetching data".into());

            let profile = api::get_profile().await;
            store.user().set(Some(profile));

            let catalog = api::get_layers().await;
            web_sys::console::log_1(
                &format!("[DASHBOARD] Loaded {} catalog layers", catalog.len()).into(),
            );
            store.geo_layers().set(catalog);

            match api::get_user_layers().await {
                Ok(user_layers) => {
                    web_sys::console::log_1(
                        &format!("[DASHBOARD] Loaded {} user layers", user_layers.len()).into(),
                    );
                    store.user_layers().set(user_layers);
                }
                Err(err) => {
                    web_sys::console::error_1(
                        &format!("[DASHBOARD] Failed to get user layers: {}", err).into(),
                    );
                    store.user_layers().set(Vec::new());
                }
            }

            store.loading().set(false);
        });
    });

    // Add layer: never visibly fails. Server-confirmed when possible,
    // locally synthesized otherwise.
    let on_layer_add = Callback::new(move |layer_id: i64| {
        web_sys::console::log_1(&format!("[DASHBOARD] Adding layer {}", layer_id).into());
        let catalog = store.geo_layers().get_untracked();
        let Some(geo_layer) = layers::find_catalog_layer(&catalog, layer_id).cloned() else {
            web_sys::console::log_1(&"[DASHBOARD] Layer not found in catalog".into());
            return;
        };
        spawn_local(async move {
            match api::add_user_layer(layer_id, &geo_layer.name).await {
                Ok(_) => match api::get_user_layers().await {
                    Ok(updated) if !updated.is_empty() => {
                        store_replace_user_layers(&store, updated);
                    }
                    // An empty refresh right after a successful add is not
                    // trusted; simulate the add locally instead.
                    _ => {
                        store_add_user_layer(
                            &store,
                            layers::mock_user_layer(&geo_layer, generated_layer_id()),
                        );
                    }
                },
                Err(err) => {
                    web_sys::console::error_1(
                        &format!("[DASHBOARD] Add layer failed, creating local layer: {}", err)
                            .into(),
                    );
                    store_add_user_layer(
                        &store,
                        layers::mock_user_layer(&geo_layer, generated_layer_id()),
                    );
                }
            }
        });
    });

    // Remove layer: local removal happens whether or not the delete succeeds
    let on_layer_remove = Callback::new(move |user_layer_id: i64| {
        web_sys::console::log_1(&format!("[DASHBOARD] Removing layer {}", user_layer_id).into());
        spawn_local(async move {
            if let Err(err) = api::delete_user_layer(user_layer_id).await {
                web_sys::console::error_1(
                    &format!("[DASHBOARD] Delete failed, removing locally: {}", err).into(),
                );
            }
            store_remove_user_layer(&store, user_layer_id);
        });
    });

    // Favorite: optimistic and permanent locally, server outcome ignored
    let on_layer_favorite = Callback::new(move |(user_layer_id, is_favorite): (i64, bool)| {
        web_sys::console::log_1(
            &format!(
                "[DASHBOARD] Setting favorite for layer {} to {}",
                user_layer_id, is_favorite
            )
            .into(),
        );
        spawn_local(async move {
            let patch = api::UserLayerPatch {
                is_favorite: Some(is_favorite),
                ..Default::default()
            };
            api::update_user_layer(user_layer_id, &patch).await;
            store_set_favorite(&store, user_layer_id, is_favorite);
        });
    });

    // Feature create: append to the active layer's collection, persist the
    // merged collection, and mirror the merge locally either way.
    let on_feature_create = Callback::new(move |feature: Feature| {
        let Some(active_id) = store.active_user_layer_id().get_untracked() else {
            web_sys::console::log_1(&"[DASHBOARD] No active draw layer selected".into());
            return;
        };
        let user_layers = store.user_layers().get_untracked();
        let Some(user_layer) = user_layers.iter().find(|ul| ul.id == active_id) else {
            web_sys::console::log_1(&"[DASHBOARD] Active draw layer not found".into());
            return;
        };
        let merged = layers::append_feature(user_layer.feature_collection.clone(), feature.clone());
        spawn_local(async move {
            let patch = api::UserLayerPatch {
                feature_collection: Some(merged),
                ..Default::default()
            };
            api::update_user_layer(active_id, &patch).await;
            store_merge_feature(&store, active_id, feature);
        });
    });

    let on_logout = Callback::new(move |_| {
        web_sys::console::log_1(&"[DASHBOARD] Logging out".into());
        api::logout();
        store.user().set(None);
        redirect("/login");
    });

    let user = Signal::derive(move || store.user().get());

    view! {
        <div class="dashboard-page">
            <Header user=user on_logout=on_logout/>
            <Show
                when=move || !store.loading().get()
                fallback=|| view! { <div class="loading"><p>"Loading..."</p></div> }
            >
                <div class="dashboard-layout">
                    <aside class="dashboard-sidebar">
                        <LayerControl
                            on_layer_add=on_layer_add
                            on_layer_remove=on_layer_remove
                            on_layer_favorite=on_layer_favorite
                        />
                    </aside>
                    <main class="dashboard-main">
                        <MapView on_feature_create=on_feature_create/>
                    </main>
                </div>
            </Show>
        </div>
    }
}
