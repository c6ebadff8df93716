//! Auth Token Store
//!
//! Bearer token persisted in browser localStorage under a fixed key.

const TOKEN_KEY: &str = "geoexplorer_token";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

pub fn set_token(token: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(TOKEN_KEY, token);
        let preview: String = token.chars().take(10).collect();
        web_sys::console::log_1(&format!("[TOKEN] Token saved: {}...", preview).into());
    }
}

pub fn get_token() -> Option<String> {
    local_storage()?.get_item(TOKEN_KEY).ok().flatten()
}

pub fn remove_token() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
    }
}

/// Presence check only; the token is not validated client-side
pub fn is_authenticated() -> bool {
    get_token().is_some()
}
