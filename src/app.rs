//! GeoExplorer Frontend App
//!
//! Route table. `/dashboard` guards itself: it redirects to `/login` when no
//! token is stored.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::pages::{Dashboard, Home, Login, Register};

/// Hard browser navigation, used for auth redirects
pub fn redirect(path: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(path);
    }
}

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <p class="not-found">"Page not found."</p> }>
                <Route path=path!("/") view=Home/>
                <Route path=path!("/login") view=Login/>
                <Route path=path!("/register") view=Register/>
                <Route path=path!("/dashboard") view=Dashboard/>
            </Routes>
        </Router>
    }
}
