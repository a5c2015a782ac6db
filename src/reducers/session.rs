//! Routing, session and shell chrome: hash navigation with the auth guard,
//! profile loading, logout, sidebar, settings, modals and drawers.

use crate::canvas::placement::{initial_connections, initial_nodes};
use crate::messages::{Command, Message, Resource};
use crate::pages::forgot_password::ForgotPasswordPage;
use crate::pages::login::LoginPage;
use crate::pages::signup::SignupPage;
use crate::pages::teams::TeamsPage;
use crate::router::{guard, Route};
use crate::state::AppState;

/// Per-page setup when a route becomes current.
fn enter(state: &mut AppState, route: Route, commands: &mut Vec<Command>) {
    debug_log!("entering {}", route.path());
    state.ui.close_modal();
    state.ui.close_drawer();

    match &route {
        Route::Login => state.login = LoginPage::default(),
        Route::Signup => {
            // Keep the countdown generation moving so ticks from the last
            // visit are ignored.
            let mut countdown = state.signup.countdown;
            countdown.reset();
            state.signup = SignupPage {
                countdown,
                ..Default::default()
            };
        }
        Route::ForgotPassword => {
            let mut countdown = state.forgot.countdown;
            countdown.reset();
            state.forgot = ForgotPasswordPage {
                countdown,
                message_generation: state.forgot.message_generation.wrapping_add(1),
                ..Default::default()
            };
        }
        Route::Teams {
            project_id,
            new_project,
        } => {
            let width = state.teams.resizer.width;
            state.teams = TeamsPage::open(project_id.as_deref(), *new_project);
            state.teams.resizer.width = width;
            state.teams.resizer.target = width;
        }
        Route::WorkflowEditor => {
            if !state.editor.seeded {
                state.workflow.set_nodes(initial_nodes());
                state.workflow.set_connections(initial_connections());
                state.editor.seeded = true;
            }
        }
        _ => {}
    }

    if let Some(resource) = Resource::for_route(&route) {
        crate::reducers::resources::load(state, resource, commands);
    }
    state.route = route;
}

pub fn update(state: &mut AppState, msg: &Message, commands: &mut Vec<Command>) -> bool {
    match msg {
        Message::Navigate(route) => {
            if *route != state.route {
                commands.push(Command::SetHash(route.clone()));
            }
            true
        }
        Message::RouteChanged(route) => {
            let target = guard(route.clone(), state.auth.has_stored_token());
            if target != *route {
                // The hashchange for the redirect enters the page.
                crate::logging::info(&format!(
                    "{} requires a session, redirecting to {}",
                    route.path(),
                    target.path()
                ));
                commands.push(Command::SetHash(target));
            } else {
                enter(state, target, commands);
            }
            true
        }
        Message::ProfileLoaded(result) => {
            match result {
                Ok(user) => {
                    state.auth.set_user(Some(user.clone()));
                    state.auth.set_loading(false);
                }
                Err(crate::error::ApiError::Status { status: 401, .. }) => {
                    crate::logging::warn("stored token rejected, signing out");
                    state.auth.logout();
                    state.auth.set_loading(false);
                    commands.push(Command::SendMessage(Message::Navigate(Route::Login)));
                }
                Err(e) => {
                    state.auth.set_loading(false);
                    crate::logging::warn(&format!("failed to load profile: {}", e));
                }
            }
            true
        }
        Message::Logout => {
            state.settings.close_settings();
            commands.push(Command::Api(crate::messages::ApiCall::Logout));
            true
        }
        Message::LogoutFinished => {
            state.auth.logout();
            commands.push(Command::SendMessage(Message::Navigate(Route::Login)));
            true
        }

        Message::ToggleSidebar => {
            state.ui.toggle_sidebar();
            true
        }
        Message::OpenSettings(tab) => {
            state.settings.open_settings(*tab);
            true
        }
        Message::CloseSettings => {
            state.settings.close_settings();
            true
        }
        Message::SetSettingsTab(tab) => {
            state.settings.set_active_tab(*tab);
            true
        }
        Message::SetTheme(theme) => {
            state.settings.set_theme(*theme);
            true
        }
        Message::SetLanguage(language) => {
            state.settings.set_language(*language);
            true
        }
        Message::OpenModal(id) => {
            state.ui.open_modal(id.clone());
            true
        }
        Message::CloseModal => {
            state.ui.close_modal();
            true
        }
        Message::OpenDrawer(id) => {
            state.ui.open_drawer(id.clone());
            true
        }
        Message::CloseDrawer => {
            state.ui.close_drawer();
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::messages::{ApiCall, ListQuery};
    use crate::reducers::test_support::{logged_in, state};
    use crate::stores::{SettingsTab, Theme};

    fn run(state: &mut AppState, msg: Message) -> Vec<Command> {
        let mut commands = Vec::new();
        assert!(update(state, &msg, &mut commands), "{:?} not handled", msg);
        commands
    }

    #[test]
    fn protected_route_without_token_redirects() {
        let mut s = state();
        let cmds = run(&mut s, Message::RouteChanged(Route::Assets));
        assert_eq!(cmds, vec![Command::SetHash(Route::Login)]);
        assert_eq!(s.route, Route::Dashboard);

        let cmds = run(&mut s, Message::RouteChanged(Route::Login));
        assert!(cmds.is_empty());
        assert_eq!(s.route, Route::Login);
    }

    #[test]
    fn resource_routes_start_loading() {
        let mut s = logged_in();
        let cmds = run(&mut s, Message::RouteChanged(Route::Scripts));
        assert!(matches!(
            cmds.as_slice(),
            [Command::Api(ApiCall::List(ListQuery::Scripts(..)))]
        ));
        assert!(s.resources.scripts.loading);
    }

    #[test]
    fn editor_is_seeded_once() {
        let mut s = logged_in();
        run(&mut s, Message::RouteChanged(Route::WorkflowEditor));
        assert_eq!(s.workflow.nodes.len(), 3);
        s.workflow.remove_node("text");
        run(&mut s, Message::RouteChanged(Route::Dashboard));
        run(&mut s, Message::RouteChanged(Route::WorkflowEditor));
        assert_eq!(s.workflow.nodes.len(), 2);
    }

    #[test]
    fn teams_route_opens_project() {
        let mut s = logged_in();
        s.teams.resizer.width = 450.0;
        run(
            &mut s,
            Message::RouteChanged(Route::Teams {
                project_id: Some("2".into()),
                new_project: false,
            }),
        );
        assert_eq!(s.teams.title, "3D 产品展示");
        assert_eq!(s.teams.resizer.width, 450.0);
    }

    #[test]
    fn navigate_to_current_route_is_noop() {
        let mut s = logged_in();
        assert!(run(&mut s, Message::Navigate(Route::Dashboard)).is_empty());
        assert_eq!(
            run(&mut s, Message::Navigate(Route::Plugins)),
            vec![Command::SetHash(Route::Plugins)]
        );
    }

    #[test]
    fn unauthorized_profile_logs_out() {
        let mut s = logged_in();
        let cmds = run(
            &mut s,
            Message::ProfileLoaded(Err(ApiError::Status {
                status: 401,
                detail: None,
            })),
        );
        assert!(!s.auth.has_stored_token());
        assert_eq!(cmds, vec![Command::SendMessage(Message::Navigate(Route::Login))]);

        let mut s = logged_in();
        run(&mut s, Message::ProfileLoaded(Err(ApiError::Network("down".into()))));
        assert!(s.auth.has_stored_token());
        assert!(!s.auth.is_loading);
    }

    #[test]
    fn logout_calls_api_then_clears_session() {
        let mut s = logged_in();
        assert_eq!(run(&mut s, Message::Logout), vec![Command::Api(ApiCall::Logout)]);
        run(&mut s, Message::LogoutFinished);
        assert!(!s.auth.is_authenticated);
        assert!(!s.auth.has_stored_token());
    }

    #[test]
    fn settings_and_overlays() {
        let mut s = state();
        run(&mut s, Message::OpenSettings(Some(SettingsTab::Account)));
        assert!(s.settings.is_open);
        assert_eq!(s.settings.active_tab, SettingsTab::Account);
        run(&mut s, Message::SetTheme(Theme::Dark));
        assert_eq!(s.settings.theme, Theme::Dark);
        run(&mut s, Message::OpenModal("new-project".into()));
        assert!(s.ui.is_modal_open("new-project"));
        run(&mut s, Message::RouteChanged(Route::Login));
        assert_eq!(s.ui.active_modal, None);
    }
}
