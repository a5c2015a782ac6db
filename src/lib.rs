#[macro_use]
mod macros;

pub mod canvas;
#[cfg(target_arch = "wasm32")]
mod dom_utils;
pub mod command_executors;
pub mod components;
pub mod constants;
pub mod error;
pub mod events;
pub mod i18n;
pub mod logging;
pub mod messages;
pub mod models;
pub mod network;
pub mod pages;
pub mod reducers;
pub mod router;
pub mod services;
pub mod state;
pub mod storage;
pub mod stores;
pub mod update;
pub mod utils;
pub mod validation;
pub mod views;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

// Main entry point for the WASM application
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    use std::rc::Rc;

    use crate::messages::{ApiCall, Command, Message};
    use crate::network::ApiClient;
    use crate::router::Route;
    use crate::state::AppState;
    use crate::storage::{BrowserStorage, SharedStorage};

    // Initialize better panic messages
    console_error_panic_hook::set_once();

    if let Err(e) = network::init_api_config() {
        logging::warn(&format!("{}; using the default API base URL", e));
    }

    let storage: SharedStorage = Rc::new(BrowserStorage);
    let api = ApiClient::browser(storage.clone());
    let mut app = AppState::new(storage, api);
    app.auth.hydrate();
    let has_token = app.auth.token.is_some();
    if has_token {
        app.auth.set_loading(true);
    }
    state::install(app);

    events::install_listeners()?;

    // The profile is not persisted; fetch it for a stored session.
    if has_token {
        command_executors::execute(Command::Api(ApiCall::FetchProfile));
    }

    let hash = web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default();
    state::dispatch_global_message(Message::RouteChanged(Route::from_hash(&hash)));
    Ok(())
}
