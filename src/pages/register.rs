//! Register Page

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::api;
use crate::app::redirect;
use crate::components::{AuthForm, AuthSubmit};
use crate::models::RegisterCredentials;

#[component]
pub fn Register() -> impl IntoView {
    let (error, set_error) = signal(String::new());

    let on_submit = Callback::new(move |submit: AuthSubmit| {
        if submit.email.is_empty() {
            set_error.set("Email is required".to_string());
            return;
        }
        spawn_local(async move {
            let credentials = RegisterCredentials {
                username: submit.username,
                email: submit.email,
                password: submit.password,
            };
            match api::register(&credentials).await {
                Ok(()) => {
                    web_sys::console::log_1(
                        &"[REGISTER] Registration successful, redirecting to login".into(),
                    );
                    TimeoutFuture::new(500).await;
                    redirect("/login");
                }
                Err(err) => {
                    web_sys::console::error_1(
                        &format!("[REGISTER] Registration failed: {}", err).into(),
                    );
                    set_error.set(
                        "Registration failed. Username or email may already be in use."
                            .to_string(),
                    );
                }
            }
        });
    });

    view! {
        <div class="auth-page">
            <AuthForm is_login=false error=error on_submit=on_submit/>
            <p class="auth-switch">
                "Already have an account? "
                <A href="/login">"Login here"</A>
            </p>
        </div>
    }
}
