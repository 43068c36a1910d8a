//! Admin console configuration
//!
//! The server renders the console page with a couple of globals:
//! - `window.CSRF_TOKEN`: anti-forgery token expected in every form POST
//! - `window.API_BASE` (optional): prefix for API paths, same origin if absent
//!
//! They are read once at startup and handed to request builders explicitly.

use leptos::prelude::*;
use wasm_bindgen::JsValue;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AdminConfig {
    pub csrf_token: String,
    pub api_base: String,
}

impl AdminConfig {
    pub fn new(csrf_token: impl Into<String>, api_base: &str) -> Self {
        Self {
            csrf_token: csrf_token.into(),
            api_base: normalize_api_base(api_base),
        }
    }

    /// Build the configuration from the page globals
    pub fn from_window() -> Self {
        let csrf_token = read_window_string("CSRF_TOKEN").unwrap_or_else(|| {
            log::warn!("window.CSRF_TOKEN is not set, form submissions will be rejected");
            String::new()
        });
        let api_base = read_window_string("API_BASE").unwrap_or_default();

        Self::new(csrf_token, &api_base)
    }

    /// Full URL of an API path
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }
}

/// Trim whitespace and trailing slashes so paths can be appended as is
pub fn normalize_api_base(base: &str) -> String {
    base.trim().trim_end_matches('/').to_string()
}

fn read_window_string(key: &str) -> Option<String> {
    let window = web_sys::window()?;
    let value = js_sys::Reflect::get(&JsValue::from(window), &JsValue::from_str(key)).ok()?;
    match serde_wasm_bindgen::from_value::<Option<String>>(value) {
        Ok(value) => value.filter(|v| !v.is_empty()),
        Err(e) => {
            log::warn!("window.{} is not a string: {}", key, e);
            None
        }
    }
}

/// Access the admin configuration
pub fn use_admin_config() -> AdminConfig {
    use_context::<AdminConfig>().expect("AdminConfig not found in component tree")
}
