pub mod api_client;
pub mod config;
pub mod transport;

pub use api_client::ApiClient;
pub use config::ApiConfig;
pub use transport::{ApiRequest, ApiResponse, FetchTransport, HttpMethod, Transport};

use lazy_static::lazy_static;
use std::sync::RwLock;
use wasm_bindgen::prelude::*;

lazy_static! {
    static ref API_CONFIG: RwLock<Option<ApiConfig>> = RwLock::new(None);
}

fn store_config(config: ApiConfig) {
    match API_CONFIG.write() {
        Ok(mut guard) => *guard = Some(config),
        Err(_) => crate::logging::error("API config lock poisoned"),
    }
}

/// Initialize the API configuration from the build-time `API_BASE_URL`.
/// Call sites treat an error as "use the default".
pub fn init_api_config() -> Result<(), &'static str> {
    let config = ApiConfig::new()?;
    store_config(config);
    Ok(())
}

/// Runtime override, callable from the hosting page before the app mounts.
#[wasm_bindgen]
pub fn init_api_config_js(api_base_url: &str) -> Result<(), JsValue> {
    crate::debug_log!("Initializing API config from JS: {}", api_base_url);
    if api_base_url.trim().is_empty() {
        return Err(JsValue::from_str("API base URL must not be empty"));
    }
    store_config(ApiConfig::from_url(api_base_url));
    Ok(())
}

/// Active configuration, falling back to the local development backend.
pub fn current_config() -> ApiConfig {
    API_CONFIG
        .read()
        .ok()
        .and_then(|guard| guard.clone())
        .unwrap_or_default()
}

pub fn get_api_base_url() -> String {
    current_config().base_url().to_string()
}
