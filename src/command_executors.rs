//! Runs the side effects reducers ask for.  API calls become service
//! futures whose outcome is dispatched back as a message.

use crate::error::ApiError;
use crate::messages::{ApiCall, ListQuery, Message, Mutation, ResourcePage};
use crate::network::ApiClient;
use crate::services::{asset, auth, plugin, project, script, workflow};

async fn fetch_list(api: &ApiClient, query: &ListQuery) -> Result<ResourcePage, ApiError> {
    Ok(match query {
        ListQuery::Assets(filter, page) => ResourcePage::Assets(asset::list(api, filter, *page).await?),
        ListQuery::Projects(page) => ResourcePage::Projects(project::list(api, *page).await?),
        ListQuery::Workflows(page) => ResourcePage::Workflows(workflow::list(api, *page).await?),
        ListQuery::Scripts(filter, page) => {
            ResourcePage::Scripts(script::list(api, filter, *page).await?)
        }
        ListQuery::Plugins(filter, page) => {
            ResourcePage::Plugins(plugin::list(api, filter, *page).await?)
        }
    })
}

async fn apply_mutation(api: &ApiClient, mutation: &Mutation) -> Result<(), ApiError> {
    match mutation {
        Mutation::ToggleAssetFavorite(id) => asset::toggle_favorite(api, id).await,
        Mutation::DeleteAsset(id) => asset::delete(api, id).await,
        Mutation::CreateProject(draft) => project::create(api, draft).await.map(drop),
        Mutation::DeleteProject(id) => project::delete(api, id).await,
        Mutation::CreateWorkflow(draft) => workflow::create(api, draft).await.map(drop),
        Mutation::DuplicateWorkflow(id) => workflow::duplicate(api, id).await.map(drop),
        Mutation::DeleteWorkflow(id) => workflow::delete(api, id).await,
        Mutation::ImportScript(import) => script::import(api, import).await.map(drop),
        Mutation::DeleteScript(id) => script::delete(api, id).await,
        Mutation::InstallPlugin(id) => plugin::install(api, id).await,
        Mutation::UninstallPlugin(id) => plugin::uninstall(api, id).await,
        Mutation::TogglePlugin { id, active } => plugin::toggle_active(api, id, *active).await,
    }
}

/// Perform one API call and describe its outcome.
pub async fn perform(api: &ApiClient, call: ApiCall) -> Message {
    match call {
        ApiCall::Login { email, password } => {
            Message::LoginResponse(auth::login(api, &email, &password).await)
        }
        ApiCall::Register(request) => Message::SignupResponse(auth::register(api, &request).await),
        ApiCall::SendCaptcha { email, purpose } => {
            Message::SignupCaptchaSent(auth::send_captcha(api, &email, purpose).await)
        }
        ApiCall::SendResetCaptcha { email, resend } => {
            let result = auth::send_forgot_password_captcha(api, &email).await;
            if resend {
                Message::ForgotResent(result)
            } else {
                Message::ForgotCodeSent(result)
            }
        }
        ApiCall::ResetPassword(request) => {
            Message::ForgotResetResponse(auth::reset_password(api, &request).await)
        }
        ApiCall::Logout => {
            // The local session is cleared either way.
            if let Err(e) = auth::logout(api).await {
                crate::logging::warn(&format!("logout request failed: {}", e));
            }
            Message::LogoutFinished
        }
        ApiCall::FetchProfile => Message::ProfileLoaded(auth::get_profile(api).await),
        ApiCall::List(query) => Message::ResourceLoaded {
            resource: query.resource(),
            result: fetch_list(api, &query).await,
        },
        ApiCall::Mutate(mutation) => {
            let result = apply_mutation(api, &mutation).await;
            Message::MutationFinished { mutation, result }
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use dom::execute;

#[cfg(target_arch = "wasm32")]
mod dom {
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;

    use crate::components::toast;
    use crate::messages::{Command, Message};
    use crate::state::{dispatch_global_message, with_state};

    pub fn execute(cmd: Command) {
        match cmd {
            Command::SendMessage(msg) => dispatch_global_message(msg),
            Command::Api(call) => {
                let Some(api) = with_state(|s| s.api.clone()) else {
                    crate::logging::error("API call issued before the app state was installed");
                    return;
                };
                wasm_bindgen_futures::spawn_local(async move {
                    let msg = super::perform(&api, call).await;
                    dispatch_global_message(msg);
                });
            }
            Command::Delayed { delay_ms, message } => {
                gloo_timers::callback::Timeout::new(delay_ms, move || {
                    dispatch_global_message(*message);
                })
                .forget();
            }
            Command::SetHash(route) => {
                if let Some(window) = web_sys::window() {
                    if let Err(e) = window.location().set_hash(&route.hash()) {
                        crate::logging::error(&format!("Failed to set hash: {:?}", e));
                    }
                }
            }
            Command::RequestFrame => {
                let Some(window) = web_sys::window() else { return };
                let callback =
                    Closure::once_into_js(move || dispatch_global_message(Message::PanelFrame));
                match window.request_animation_frame(callback.unchecked_ref()) {
                    Ok(handle) => dispatch_global_message(Message::PanelFrameScheduled(handle)),
                    Err(e) => crate::logging::error(&format!(
                        "requestAnimationFrame failed: {:?}",
                        e
                    )),
                }
            }
            Command::CancelFrame(handle) => {
                if let Some(window) = web_sys::window() {
                    let _ = window.cancel_animation_frame(handle);
                }
            }
            Command::Toast { kind, text } => toast::show(&text, kind),
            Command::NoOp => {}
        }
    }
}
