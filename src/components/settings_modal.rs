//! Settings dialog driven by `SettingsStore`.

use super::modal::modal;
use crate::constants::ID_SETTINGS_MODAL;
use crate::i18n::Language;
use crate::models::User;
use crate::stores::{SettingsStore, SettingsTab, Theme};
use crate::utils::escape_html;

fn theme_label(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "浅色",
        Theme::Dark => "深色",
        Theme::Auto => "跟随系统",
    }
}

fn language_label(language: Language) -> &'static str {
    match language {
        Language::Zh => "简体中文",
        Language::En => "English",
    }
}

fn general_tab(settings: &SettingsStore) -> String {
    let themes: String = Theme::ALL
        .iter()
        .map(|t| {
            format!(
                r#"<button type="button" class="theme-option{active}" data-action="set-theme" data-arg="{id}">{label}</button>"#,
                active = if *t == settings.theme { " active" } else { "" },
                id = t.id(),
                label = theme_label(*t),
            )
        })
        .collect();
    let languages: String = [Language::Zh, Language::En]
        .iter()
        .map(|l| {
            format!(
                r#"<button type="button" class="chip{active}" data-action="set-language" data-arg="{code}">{label}</button>"#,
                active = if *l == settings.language { " active" } else { "" },
                code = l.code(),
                label = language_label(*l),
            )
        })
        .collect();
    format!(
        r#"<section class="settings-section"><label class="settings-label">主题</label><div class="theme-grid">{}</div></section><section class="settings-section"><label class="settings-label">语言</label><div class="filter-chips">{}</div></section>"#,
        themes, languages
    )
}

fn account_tab(user: Option<&User>) -> String {
    match user {
        Some(u) => format!(
            r#"<section class="settings-section"><div class="param-row"><span class="param-key">用户名</span><span class="param-value">{}</span></div><div class="param-row"><span class="param-key">邮箱</span><span class="param-value">{}</span></div><button type="button" class="btn btn-danger" data-action="logout">退出登录</button></section>"#,
            escape_html(&u.username),
            escape_html(&u.email)
        ),
        None => r#"<section class="settings-section"><p class="muted">未登录</p></section>"#.to_string(),
    }
}

fn api_tab(base_url: &str) -> String {
    format!(
        r#"<section class="settings-section"><label class="settings-label">API 地址</label><code class="api-url">{}</code></section>"#,
        escape_html(base_url)
    )
}

fn about_tab() -> String {
    format!(
        r#"<section class="settings-section about"><div class="logo-mark">W</div><h3>WeiMeng</h3><p class="muted">让设计更简单</p><div class="param-row"><span class="param-key">版本</span><span class="param-value">v{}</span></div><p class="muted small">© 2025 WeiMeng. All rights reserved.</p></section>"#,
        env!("CARGO_PKG_VERSION")
    )
}

/// Empty string while the dialog is closed.
pub fn settings_modal(settings: &SettingsStore, user: Option<&User>, api_base_url: &str) -> String {
    if !settings.is_open {
        return String::new();
    }
    let tabs: String = SettingsTab::ALL
        .iter()
        .map(|t| {
            format!(
                r#"<button type="button" class="settings-tab{active}" data-action="settings-tab" data-arg="{id}">{title}</button>"#,
                active = if *t == settings.active_tab { " active" } else { "" },
                id = t.id(),
                title = t.title(),
            )
        })
        .collect();
    let body = match settings.active_tab {
        SettingsTab::General => general_tab(settings),
        SettingsTab::Account => account_tab(user),
        SettingsTab::Api => api_tab(api_base_url),
        SettingsTab::About => about_tab(),
    };
    modal(
        ID_SETTINGS_MODAL,
        Some("设置"),
        "720px",
        "close-settings",
        &format!(r#"<div class="settings-layout"><nav class="settings-tabs">{}</nav><div class="settings-body">{}</div></div>"#, tabs, body),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use std::rc::Rc;

    #[test]
    fn closed_renders_nothing() {
        let settings = SettingsStore::new(Rc::new(MemoryStorage::new()));
        assert_eq!(settings_modal(&settings, None, ""), "");
    }

    #[test]
    fn open_tab_drives_body() {
        let mut settings = SettingsStore::new(Rc::new(MemoryStorage::new()));
        settings.open_settings(Some(SettingsTab::Api));
        let html = settings_modal(&settings, None, "http://api.test/v1");
        assert!(html.contains("http://api.test/v1"));
        assert!(html.contains(r#"class="settings-tab active" data-action="settings-tab" data-arg="api""#));

        settings.set_active_tab(SettingsTab::General);
        let html = settings_modal(&settings, None, "");
        assert!(html.contains(r#"class="theme-option active" data-action="set-theme" data-arg="light""#));
        assert!(html.contains("跟随系统"));
    }
}
