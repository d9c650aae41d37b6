//! Application configuration, resolved once at startup.

use wasm_bindgen::JsValue;

/// Configuration injected into the application at mount time.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base address of the REST server, without trailing slash.
    pub server_base: String,
}

impl AppConfig {
    /// Resolve the configuration from the hosting page: a
    /// `window.APP_SERVER_BASE` global takes precedence, otherwise the
    /// server is assumed to live on the page's own origin.
    pub fn from_browser() -> Self {
        Self {
            server_base: global_override().unwrap_or_else(same_origin),
        }
    }
}

fn global_override() -> Option<String> {
    let window = web_sys::window()?;
    let value = js_sys::Reflect::get(&window, &JsValue::from_str("APP_SERVER_BASE")).ok()?;
    let base = value.as_string()?;
    if base.is_empty() {
        None
    } else {
        Some(base.trim_end_matches('/').to_string())
    }
}

fn same_origin() -> String {
    let Some(window) = web_sys::window() else {
        return String::new();
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let host = location.host().unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}", protocol, host)
}
