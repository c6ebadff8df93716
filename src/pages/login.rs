//! Login Page

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::api;
use crate::app::redirect;
use crate::components::{AuthForm, AuthSubmit};
use crate::models::LoginCredentials;

#[component]
pub fn Login() -> impl IntoView {
    let (error, set_error) = signal(String::new());

    let on_submit = Callback::new(move |submit: AuthSubmit| {
        spawn_local(async move {
            let credentials = LoginCredentials {
                username: submit.username,
                password: submit.password,
            };
            match api::login(&credentials).await {
                Ok(_) => redirect("/dashboard"),
                Err(err) => {
                    web_sys::console::error_1(&format!("[LOGIN] Login failed: {}", err).into());
                    set_error.set("Invalid username or password. Please try again.".to_string());
                }
            }
        });
    });

    view! {
        <div class="auth-page">
            <AuthForm is_login=true error=error on_submit=on_submit/>
            <p class="auth-switch">
                "Don't have an account? "
                <A href="/register">"Register here"</A>
            </p>
        </div>
    }
}
