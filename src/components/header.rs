//! Header Component
//!
//! Brand, session info, and logout.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::models::User;

#[component]
pub fn Header(
    #[prop(into)] user: Signal<Option<User>>,
    on_logout: Callback<()>,
) -> impl IntoView {
    view! {
        <header class="app-header">
            <A href="/">
                <span class="brand">"GeoExplorer"</span>
            </A>
            <nav class="header-nav">
                {move || match user.get() {
                    Some(user) => view! {
                        <div class="user-menu">
                            <span class="username">{format!("Hello, {}", user.username)}</span>
                            <A href="/dashboard">"Dashboard"</A>
                            <button class="logout-btn" on:click=move |_| on_logout.run(())>
                                "Logout"
                            </button>
                        </div>
                    }
                    .into_any(),
                    None => view! {
                        <div class="user-menu">
                            <A href="/login">"Login"</A>
                            <A href="/register">"Register"</A>
                        </div>
                    }
                    .into_any(),
                }}
            </nav>
        </header>
    }
}
