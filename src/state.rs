// src/state.rs
//
// Application state: the shared stores, the per-page state and the
// thread-local slot the browser entry point installs it into.
//
use crate::canvas::EditorState;
use crate::i18n::Language;
use crate::messages::{Command, Message};
use crate::network::ApiClient;
use crate::pages::dashboard::DashboardPage;
use crate::pages::forgot_password::ForgotPasswordPage;
use crate::pages::login::LoginPage;
use crate::pages::resources::ResourcesPage;
use crate::pages::signup::SignupPage;
use crate::pages::teams::TeamsPage;
use crate::router::Route;
use crate::storage::SharedStorage;
use crate::stores::{AuthStore, SettingsStore, UiStore, WorkflowStore};
use crate::update::update;
use std::cell::RefCell;

pub struct AppState {
    pub storage: SharedStorage,
    pub api: ApiClient,
    pub route: Route,

    // Shared stores
    pub auth: AuthStore,
    pub settings: SettingsStore,
    pub ui: UiStore,
    pub workflow: WorkflowStore,

    // Per-page state
    pub editor: EditorState,
    pub login: LoginPage,
    pub signup: SignupPage,
    pub forgot: ForgotPasswordPage,
    pub dashboard: DashboardPage,
    pub teams: TeamsPage,
    pub resources: ResourcesPage,
}

impl AppState {
    /// Stores rehydrate from `storage`; the route starts on the dashboard
    /// until the first `RouteChanged`.
    pub fn new(storage: SharedStorage, api: ApiClient) -> Self {
        Self {
            auth: AuthStore::new(storage.clone()),
            settings: SettingsStore::new(storage.clone()),
            ui: UiStore::new(storage.clone()),
            workflow: WorkflowStore::new(),
            storage,
            api,
            route: Route::Dashboard,
            editor: EditorState::default(),
            login: LoginPage::default(),
            signup: SignupPage::default(),
            forgot: ForgotPasswordPage::default(),
            dashboard: DashboardPage::default(),
            teams: TeamsPage::default(),
            resources: ResourcesPage::default(),
        }
    }

    pub fn language(&self) -> Language {
        self.settings.language
    }

    pub fn dispatch(&mut self, msg: Message) -> Vec<Command> {
        update(self, msg)
    }
}

// The browser entry point installs the state once; event handlers and
// async completions reach it through `dispatch_global_message`.
thread_local! {
    pub static APP_STATE: RefCell<Option<AppState>> = const { RefCell::new(None) };
}

pub fn install(state: AppState) {
    APP_STATE.with(|slot| *slot.borrow_mut() = Some(state));
}

/// Run `f` against the installed state.  `None` before `install`.
pub fn with_state<R>(f: impl FnOnce(&AppState) -> R) -> Option<R> {
    APP_STATE.with(|slot| slot.borrow().as_ref().map(f))
}

/// Update, re-render, then run the commands.  The state borrow is released
/// before any command executes so executors may dispatch again.
#[cfg(target_arch = "wasm32")]
pub fn dispatch_global_message(msg: Message) {
    crate::debug_log!("dispatch {:?}", msg);
    let commands = APP_STATE.with(|slot| {
        let mut slot = crate::mut_borrow!(slot);
        match slot.as_mut() {
            Some(state) => state.dispatch(msg),
            None => {
                crate::logging::warn("message dispatched before the app state was installed");
                Vec::new()
            }
        }
    });

    if let Err(e) = crate::views::render_current() {
        crate::logging::error(&format!("Failed to render page: {:?}", e));
    }

    for cmd in commands {
        crate::command_executors::execute(cmd);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::{ApiConfig, FetchTransport};
    use crate::storage::{KeyValueStore, MemoryStorage};
    use std::rc::Rc;

    #[test]
    fn new_state_reads_persisted_preferences() {
        let storage = Rc::new(MemoryStorage::new());
        storage.set_item(crate::constants::STORAGE_KEY_LANGUAGE, "\"en\"");
        storage.set_item(crate::constants::STORAGE_KEY_SIDEBAR_COLLAPSED, "true");
        let api = ApiClient::new(
            ApiConfig::from_url("http://api.test"),
            storage.clone(),
            Rc::new(FetchTransport::default()),
        );
        let state = AppState::new(storage, api);
        assert_eq!(state.language(), Language::En);
        assert!(state.ui.sidebar_collapsed);
        assert_eq!(state.route, Route::Dashboard);
    }

    #[test]
    fn with_state_before_install_is_none() {
        assert_eq!(with_state(|s| s.route.clone()), None);
    }
}
