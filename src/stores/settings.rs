use crate::constants::{STORAGE_KEY_LANGUAGE, STORAGE_KEY_THEME};
use crate::i18n::Language;
use crate::storage::{get_json, set_json, SharedStorage};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SettingsTab {
    #[default]
    General,
    Account,
    Api,
    About,
}

impl SettingsTab {
    pub const ALL: [SettingsTab; 4] = [
        SettingsTab::General,
        SettingsTab::Account,
        SettingsTab::Api,
        SettingsTab::About,
    ];

    pub fn id(self) -> &'static str {
        match self {
            SettingsTab::General => "general",
            SettingsTab::Account => "account",
            SettingsTab::Api => "api",
            SettingsTab::About => "about",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.id() == id)
    }

    pub fn title(self) -> &'static str {
        match self {
            SettingsTab::General => "通用",
            SettingsTab::Account => "账户",
            SettingsTab::Api => "API",
            SettingsTab::About => "关于",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
    Auto,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::Light, Theme::Dark, Theme::Auto];

    pub fn id(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::Auto => "auto",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.id() == id)
    }
}

pub struct SettingsStore {
    storage: SharedStorage,
    pub is_open: bool,
    pub active_tab: SettingsTab,
    pub theme: Theme,
    pub language: Language,
}

impl SettingsStore {
    /// Theme and language come back from storage; the modal always starts
    /// closed on the general tab.
    pub fn new(storage: SharedStorage) -> Self {
        let theme = get_json(storage.as_ref(), STORAGE_KEY_THEME, Theme::default());
        let language = get_json(storage.as_ref(), STORAGE_KEY_LANGUAGE, Language::default());
        Self {
            storage,
            is_open: false,
            active_tab: SettingsTab::General,
            theme,
            language,
        }
    }

    /// `None` opens on the general tab.
    pub fn open_settings(&mut self, tab: Option<SettingsTab>) {
        self.is_open = true;
        self.active_tab = tab.unwrap_or_default();
    }

    pub fn close_settings(&mut self) {
        self.is_open = false;
    }

    pub fn set_active_tab(&mut self, tab: SettingsTab) {
        self.active_tab = tab;
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        set_json(self.storage.as_ref(), STORAGE_KEY_THEME, &theme);
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
        set_json(self.storage.as_ref(), STORAGE_KEY_LANGUAGE, &language);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{KeyValueStore, MemoryStorage};
    use std::rc::Rc;

    #[test]
    fn defaults() {
        let settings = SettingsStore::new(Rc::new(MemoryStorage::new()));
        assert!(!settings.is_open);
        assert_eq!(settings.active_tab, SettingsTab::General);
        assert_eq!(settings.theme, Theme::Light);
        assert_eq!(settings.language, Language::Zh);
    }

    #[test]
    fn open_defaults_to_general_tab() {
        let mut settings = SettingsStore::new(Rc::new(MemoryStorage::new()));
        settings.open_settings(Some(SettingsTab::About));
        assert_eq!(settings.active_tab, SettingsTab::About);
        settings.close_settings();
        settings.open_settings(None);
        assert!(settings.is_open);
        assert_eq!(settings.active_tab, SettingsTab::General);
    }

    #[test]
    fn theme_and_language_survive_reload() {
        let storage = Rc::new(MemoryStorage::new());
        {
            let mut settings = SettingsStore::new(storage.clone());
            settings.set_theme(Theme::Dark);
            settings.set_language(Language::En);
        }
        assert_eq!(storage.get_item("theme").as_deref(), Some("\"dark\""));
        let reloaded = SettingsStore::new(storage);
        assert_eq!(reloaded.theme, Theme::Dark);
        assert_eq!(reloaded.language, Language::En);
    }

    #[test]
    fn tab_ids_round_trip() {
        for tab in SettingsTab::ALL {
            assert_eq!(SettingsTab::from_id(tab.id()), Some(tab));
        }
        assert_eq!(Theme::from_id("auto"), Some(Theme::Auto));
        assert_eq!(Theme::from_id("sepia"), None);
    }
}
