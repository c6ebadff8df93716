//! API Client
//!
//! JSON calls to the backend, organized by domain. Every request goes through
//! the helpers here so the bearer token header is attached uniformly.

mod auth;
mod maps;

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::token;

pub use auth::*;
pub use maps::*;

/// Base URL of the backend API, overridable at build time
fn api_url() -> &'static str {
    option_env!("GEOEXPLORER_API_URL").unwrap_or("http://localhost:5001/api")
}

fn endpoint(path: &str) -> String {
    format!("{}{}", api_url(), path)
}

/// Attach `Authorization: Bearer <token>` when a token is stored
fn authorize(builder: RequestBuilder) -> RequestBuilder {
    match token::get_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => {
            web_sys::console::log_1(&"[API] No token available for request".into());
            builder
        }
    }
}

async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    if !response.ok() {
        return Err(format!("HTTP {} {}", response.status(), response.status_text()));
    }
    response.json::<T>().await.map_err(|e| e.to_string())
}

pub(crate) async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let response = authorize(Request::get(&endpoint(path)))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    parse_json(response).await
}

pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, String> {
    let response = authorize(Request::post(&endpoint(path)))
        .json(body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    parse_json(response).await
}

pub(crate) async fn put_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, String> {
    let response = authorize(Request::put(&endpoint(path)))
        .json(body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    parse_json(response).await
}

pub(crate) async fn delete(path: &str) -> Result<(), String> {
    let response = authorize(Request::delete(&endpoint(path)))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !response.ok() {
        return Err(format!("HTTP {} {}", response.status(), response.status_text()));
    }
    Ok(())
}
