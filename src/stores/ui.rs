use crate::constants::STORAGE_KEY_SIDEBAR_COLLAPSED;
use crate::storage::{get_json, set_json, SharedStorage};

/// Shell visibility: sidebar, and at most one modal and one drawer,
/// identified by string id.
pub struct UiStore {
    storage: SharedStorage,
    pub sidebar_collapsed: bool,
    pub active_modal: Option<String>,
    pub active_drawer: Option<String>,
}

impl UiStore {
    pub fn new(storage: SharedStorage) -> Self {
        let sidebar_collapsed = get_json(storage.as_ref(), STORAGE_KEY_SIDEBAR_COLLAPSED, false);
        Self {
            storage,
            sidebar_collapsed,
            active_modal: None,
            active_drawer: None,
        }
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_collapsed = !self.sidebar_collapsed;
        set_json(
            self.storage.as_ref(),
            STORAGE_KEY_SIDEBAR_COLLAPSED,
            &self.sidebar_collapsed,
        );
    }

    pub fn open_modal(&mut self, id: impl Into<String>) {
        self.active_modal = Some(id.into());
    }

    pub fn close_modal(&mut self) {
        self.active_modal = None;
    }

    pub fn open_drawer(&mut self, id: impl Into<String>) {
        self.active_drawer = Some(id.into());
    }

    pub fn close_drawer(&mut self) {
        self.active_drawer = None;
    }

    pub fn is_modal_open(&self, id: &str) -> bool {
        self.active_modal.as_deref() == Some(id)
    }

    pub fn is_drawer_open(&self, id: &str) -> bool {
        self.active_drawer.as_deref() == Some(id)
    }
}
