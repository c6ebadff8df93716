//! Auth API
//!
//! Login, registration, logout, and profile fetch. Login persists the
//! returned token; profile failures fall back to a demo user so the
//! dashboard always has someone to show.

use serde::Deserialize;

use super::{get_json, post_json};
use crate::models::{LoginCredentials, RegisterCredentials, User};
use crate::token;

#[derive(Deserialize)]
struct LoginResponse {
    access_token: String,
}

/// POST /auth/login; on success the token is persisted and returned.
/// Failure is surfaced to the caller (login shows an inline error).
pub async fn login(credentials: &LoginCredentials) -> Result<String, String> {
    let response: LoginResponse = post_json("/auth/login", credentials).await?;
    token::set_token(&response.access_token);
    Ok(response.access_token)
}

/// POST /auth/register; failure is surfaced to the caller.
pub async fn register(credentials: &RegisterCredentials) -> Result<(), String> {
    let _: serde_json::Value = post_json("/auth/register", credentials).await?;
    Ok(())
}

pub fn logout() {
    token::remove_token();
}

/// Fixed fallback identity used whenever the profile fetch fails
pub fn demo_user() -> User {
    User {
        id: 1,
        username: "DemoUser".to_string(),
        email: "demo@example.com".to_string(),
    }
}

/// GET /auth/profile, substituting the demo user on any failure
pub async fn get_profile() -> User {
    match get_json::<User>("/auth/profile").await {
        Ok(user) => user,
        Err(err) => {
            web_sys::console::error_1(&format!("[API] Profile request failed: {}", err).into());
            demo_user()
        }
    }
}
