//! Home Page
//!
//! Public landing page with a featured-layer grid and a demo map.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::api;
use crate::app::redirect;
use crate::components::{BasicMap, Header};
use crate::models::GeoLayer;
use crate::token;

#[component]
pub fn Home() -> impl IntoView {
    let (featured_layers, set_featured_layers) = signal(Vec::<GeoLayer>::new());

    Effect::new(move |_| {
        spawn_local(async move {
            // Catalog fetch falls back to the default set on failure
            set_featured_layers.set(api::get_layers().await);
        });
    });

    // The landing page only knows whether a token exists, not who it belongs
    // to, so an authenticated visitor is shown the demo identity.
    let user = Signal::derive(|| token::is_authenticated().then(api::demo_user));

    let on_logout = Callback::new(move |_| {
        api::logout();
        redirect("/login");
    });

    view! {
        <div class="home-page">
            <Header user=user on_logout=on_logout/>

            <section class="hero">
                <h1>"Welcome to GeoExplorer"</h1>
                <p>"Discover and visualize geospatial data with powerful mapping tools"</p>
                {move || if token::is_authenticated() {
                    view! { <A href="/dashboard"><span class="cta">"Go to Dashboard"</span></A> }
                        .into_any()
                } else {
                    view! { <A href="/login"><span class="cta">"Get Started"</span></A> }
                        .into_any()
                }}
            </section>

            <section class="demo-map">
                <h2>"Explore Our Interactive Map"</h2>
                <BasicMap id="home-map"/>
            </section>

            <section class="featured-layers">
                <h2>"Available Map Layers"</h2>
                <div class="layer-grid">
                    {move || featured_layers.get().into_iter().map(|layer| {
                        let description = layer
                            .description
                            .unwrap_or_else(|| "No description available".to_string());
                        view! {
                            <div class="layer-card">
                                <h3>{layer.name}</h3>
                                <span class="layer-type-badge">{layer.layer_type.as_str()}</span>
                                <p>{description}</p>
                            </div>
                        }
                    }).collect_view()}
                </div>
            </section>
        </div>
    }
}
