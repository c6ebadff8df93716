//! Layer Control Component
//!
//! Catalog list with a type filter, add/remove/favorite actions, and the
//! "My Layers" section where the active draw target is picked.

use leptos::prelude::*;

use crate::layers;
use crate::models::GeoLayer;
use crate::store::{use_app_store, AppStateStoreFields};

/// Layer type filter options
const LAYER_TYPE_FILTERS: &[(&str, &str)] = &[
    ("all", "All"),
    ("XYZ", "XYZ Tiles"),
    ("WMS", "WMS"),
    ("WMTS", "WMTS"),
];

#[component]
pub fn LayerControl(
    on_layer_add: Callback<i64>,
    on_layer_remove: Callback<i64>,
    on_layer_favorite: Callback<(i64, bool)>,
) -> impl IntoView {
    let store = use_app_store();
    let (selected_type, set_selected_type) = signal("all");

    let filtered_layers = move || -> Vec<GeoLayer> {
        let layers = store.geo_layers().get();
        let filter = selected_type.get();
        if filter == "all" {
            layers
        } else {
            layers
                .into_iter()
                .filter(|l| l.layer_type.as_str() == filter)
                .collect()
        }
    };

    view! {
        <div class="layer-control">
            <h2>"Available Map Layers"</h2>

            <div class="type-filter-row">
                {LAYER_TYPE_FILTERS.iter().map(|(value, label)| {
                    let is_selected = move || selected_type.get() == *value;
                    view! {
                        <button
                            type="button"
                            class=move || if is_selected() { "filter-btn active" } else { "filter-btn" }
                            on:click=move |_| set_selected_type.set(*value)
                        >
                            {*label}
                        </button>
                    }
                }).collect_view()}
            </div>

            <div class="catalog-list">
                {move || {
                    let user_layers = store.user_layers().get();
                    let layers = filtered_layers();
                    if layers.is_empty() {
                        return view! {
                            <p class="empty-hint">"No layers available for the selected type."</p>
                        }
                        .into_any();
                    }
                    layers.into_iter().map(|layer| {
                        let added = layers::is_layer_added(&user_layers, layer.id);
                        let user_layer_id = layers::user_layer_for(&user_layers, layer.id)
                            .map(|ul| ul.id);
                        let layer_id = layer.id;
                        view! {
                            <div class="catalog-entry">
                                <div class="catalog-entry-info">
                                    <h3>{layer.name.clone()}</h3>
                                    <p class="layer-type">{layer.layer_type.as_str()}</p>
                                    {layer.description.clone().map(|d| view! {
                                        <p class="layer-description">{d}</p>
                                    })}
                                </div>
                                {if added {
                                    view! {
                                        <button
                                            class="remove-btn"
                                            on:click=move |_| {
                                                if let Some(id) = user_layer_id {
                                                    on_layer_remove.run(id);
                                                }
                                            }
                                        >
                                            "Remove"
                                        </button>
                                    }
                                    .into_any()
                                } else {
                                    view! {
                                        <button
                                            class="add-btn"
                                            on:click=move |_| on_layer_add.run(layer_id)
                                        >
                                            "Add"
                                        </button>
                                    }
                                    .into_any()
                                }}
                            </div>
                        }
                    }).collect_view().into_any()
                }}
            </div>

            <div class="user-layer-section">
                <h2>{move || format!("My Layers ({})", store.user_layers().get().len())}</h2>
                {move || {
                    let user_layers = store.user_layers().get();
                    if user_layers.is_empty() {
                        return view! {
                            <p class="empty-hint">"No layers added yet. Add layers from the list above."</p>
                        }
                        .into_any();
                    }
                    let active_id = store.active_user_layer_id().get();
                    user_layers.into_iter().map(|user_layer| {
                        let id = user_layer.id;
                        let is_favorite = user_layer.is_favorite;
                        let is_active = active_id == Some(id);
                        view! {
                            <div class=if is_favorite { "user-layer favorite" } else { "user-layer" }>
                                <div class="user-layer-info">
                                    <h3>{user_layer.name.clone()}</h3>
                                    <p class="layer-type">{user_layer.geo_layer.layer_type.as_str()}</p>
                                </div>
                                <div class="user-layer-actions">
                                    <label class="favorite-toggle">
                                        <input
                                            type="checkbox"
                                            prop:checked=is_favorite
                                            on:change=move |_| on_layer_favorite.run((id, !is_favorite))
                                        />
                                        <span>"Favorite"</span>
                                    </label>
                                    <button
                                        class=if is_active { "draw-btn active" } else { "draw-btn" }
                                        on:click=move |_| {
                                            store.active_user_layer_id().set(Some(id));
                                        }
                                    >
                                        {if is_active { "Drawing here" } else { "Draw here" }}
                                    </button>
                                    <button class="remove-btn" on:click=move |_| on_layer_remove.run(id)>
                                        "Remove"
                                    </button>
                                </div>
                            </div>
                        }
                    }).collect_view().into_any()
                }}
            </div>
        </div>
    }
}
