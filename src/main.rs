//! GeoExplorer Frontend Entry Point

mod api;
mod app;
mod components;
mod layers;
mod leaflet;
mod models;
mod pages;
mod store;
mod tiles;
mod token;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
