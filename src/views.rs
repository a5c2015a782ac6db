// src/views.rs
//
// Turns the current application state into markup and writes it into the
// app root.
//
use chrono::{DateTime, Utc};

use crate::components::settings_modal::settings_modal;
use crate::components::sidebar::sidebar;
use crate::constants::ID_PAGE_CONTAINER;
use crate::messages::Resource;
use crate::pages::{
    dashboard, forgot_password, login, resources, signup, teams, workflow_editor,
};
use crate::router::Route;
use crate::state::AppState;

fn page_body(state: &AppState, now: DateTime<Utc>) -> String {
    let list = |resource| resources::view(resource, &state.resources, &state.ui, now);
    match &state.route {
        Route::Login => login::view(&state.login),
        Route::Signup => signup::view(&state.signup),
        Route::ForgotPassword => forgot_password::view(&state.forgot),
        Route::Dashboard => dashboard::view(&state.dashboard),
        Route::Teams { .. } => teams::view(&state.teams),
        Route::WorkflowEditor => workflow_editor::view(&state.workflow, &state.editor),
        Route::Projects => list(Resource::Projects),
        Route::Workflows => list(Resource::Workflows),
        Route::Assets => list(Resource::Assets),
        Route::Scripts => list(Resource::Scripts),
        Route::Plugins => list(Resource::Plugins),
    }
}

/// Full markup for the app root: the page, wrapped in the sidebar shell
/// where the route has one, plus the settings dialog.
pub fn page_html(state: &AppState, now: DateTime<Utc>) -> String {
    let body = page_body(state, now);
    let user = state.auth.user.as_ref();

    let page = if state.route.uses_shell() {
        format!(
            r#"<div class="app-layout{collapsed}">{sidebar}<main id="{id}" class="app-main">{body}</main></div>"#,
            collapsed = if state.ui.sidebar_collapsed { " sidebar-collapsed" } else { "" },
            sidebar = sidebar(&state.route, state.ui.sidebar_collapsed, user),
            id = ID_PAGE_CONTAINER,
            body = body,
        )
    } else {
        format!(
            r#"<div id="{id}" class="page-full">{body}</div>"#,
            id = ID_PAGE_CONTAINER,
            body = body
        )
    };

    format!(
        "{}{}",
        page,
        settings_modal(&state.settings, user, &state.api.base_url())
    )
}

#[cfg(target_arch = "wasm32")]
pub use dom::render_current;

#[cfg(target_arch = "wasm32")]
mod dom {
    use std::cell::RefCell;

    use wasm_bindgen::JsValue;

    use crate::components::split_panel::apply_body_style;
    use crate::constants::ID_APP_ROOT;
    use crate::dom_utils;
    use crate::state::with_state;

    thread_local! {
        // Last markup written; identical renders skip the DOM entirely.
        static LAST_RENDER: RefCell<String> = const { RefCell::new(String::new()) };
    }

    pub fn render_current() -> Result<(), JsValue> {
        let Some((html, dragging, theme, language)) = with_state(|s| {
            (
                super::page_html(s, chrono::Utc::now()),
                s.teams.resizer.dragging,
                s.settings.theme,
                s.settings.language,
            )
        }) else {
            return Ok(());
        };

        dom_utils::apply_document_prefs(theme.id(), language.code())?;
        apply_body_style(dragging);

        let changed = LAST_RENDER.with(|last| {
            let mut last = last.borrow_mut();
            if *last == html {
                false
            } else {
                *last = html.clone();
                true
            }
        });
        if !changed {
            return Ok(());
        }

        let root = dom_utils::by_id(ID_APP_ROOT)
            .ok_or_else(|| JsValue::from_str("app root not found"))?;
        let focus = dom_utils::capture_focus();
        root.set_inner_html(&html);
        if let Some(focus) = focus {
            dom_utils::restore_focus(&focus);
        }
        dom_utils::autogrow_all(&root);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::ID_CANVAS;
    use crate::reducers::test_support::{logged_in, state};
    use crate::stores::SettingsTab;

    fn now() -> DateTime<Utc> {
        Utc::now()
    }

    #[test]
    fn auth_pages_render_without_sidebar() {
        let mut s = state();
        s.route = Route::Login;
        let html = page_html(&s, now());
        assert!(html.contains(r#"data-form="login""#));
        assert!(!html.contains("app-layout"));
        assert!(html.contains(ID_PAGE_CONTAINER));
    }

    #[test]
    fn shell_pages_get_sidebar_and_collapse_class() {
        let mut s = logged_in();
        s.route = Route::Assets;
        s.ui.sidebar_collapsed = true;
        let html = page_html(&s, now());
        assert!(html.contains("app-layout sidebar-collapsed"));
        assert!(html.contains(r#"data-action="asset-type""#));
    }

    #[test]
    fn editor_is_full_screen() {
        let mut s = logged_in();
        s.route = Route::WorkflowEditor;
        let html = page_html(&s, now());
        assert!(html.contains(ID_CANVAS));
        assert!(!html.contains("app-layout"));
    }

    #[test]
    fn settings_dialog_is_appended_when_open() {
        let mut s = logged_in();
        assert!(!page_html(&s, now()).contains("settings-tab"));
        s.settings.open_settings(Some(SettingsTab::Api));
        let html = page_html(&s, now());
        assert!(html.contains("settings-tab active"));
        assert!(html.contains(&s.api.base_url()));
    }
}
