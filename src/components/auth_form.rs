//! Auth Form Component
//!
//! Shared login/register form with an inline error line.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Submitted form values; `email` stays empty in login mode
#[derive(Debug, Clone, PartialEq)]
pub struct AuthSubmit {
    pub username: String,
    pub email: String,
    pub password: String,
}

fn input_value(ev: &web_sys::Event) -> String {
    let target = ev.target().unwrap();
    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
    input.value()
}

#[component]
pub fn AuthForm(
    is_login: bool,
    #[prop(into)] error: Signal<String>,
    on_submit: Callback<AuthSubmit>,
) -> impl IntoView {
    let (username, set_username) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let username = username.get();
        let password = password.get();
        if username.is_empty() || password.is_empty() {
            return;
        }
        on_submit.run(AuthSubmit {
            username,
            email: email.get(),
            password,
        });
    };

    view! {
        <form class="auth-form" on:submit=submit>
            <h2>{if is_login { "Login" } else { "Register" }}</h2>

            {move || {
                let message = error.get();
                (!message.is_empty()).then(|| view! { <p class="form-error">{message}</p> })
            }}

            <label>
                "Username"
                <input
                    type="text"
                    prop:value=move || username.get()
                    on:input=move |ev| set_username.set(input_value(&ev))
                />
            </label>

            {(!is_login).then(|| view! {
                <label>
                    "Email"
                    <input
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(input_value(&ev))
                    />
                </label>
            })}

            <label>
                "Password"
                <input
                    type="password"
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(input_value(&ev))
                />
            </label>

            <button type="submit">{if is_login { "Login" } else { "Create account" }}</button>
        </form>
    }
}
