// src/events.rs
//
// Delegated DOM events.  Every listener hangs off the app root (or the
// window) once; the markup says what a click or keystroke means through
// `data-*` attributes and the functions below turn those into messages.
//
use crate::canvas::{DockTab, PaletteSection};
use crate::i18n::Language;
use crate::messages::{Field, Message, Mutation, Resource};
use crate::models::{WorkflowDraft, WorkflowStatus};
use crate::pages::resources::{
    asset_drawer_id, asset_sort_from_id, asset_type_from_id, script_status_from_id,
    workflow_status_from_id, PluginChip, UNTITLED_WORKFLOW,
};
use crate::pages::teams::TeamsTool;
use crate::router::Route;
use crate::stores::{SettingsTab, Theme};

/// `data-action` plus its optional `data-arg`.
pub fn action_message(action: &str, arg: &str) -> Option<Message> {
    let id = || arg.to_string();
    let msg = match action {
        "reveal" => Message::ToggleReveal(Field::from_id(arg)?),
        "signup-send-captcha" => Message::SignupSendCaptcha,
        "forgot-resend" => Message::ForgotResend,

        "toggle-web-search" => Message::ToggleWebSearch,
        "toggle-agent" => Message::ToggleAgent,
        "toggle-model" => Message::ToggleModel,
        "prompt-submit" => Message::PromptSubmit,

        "select-tool" => Message::SelectTool(TeamsTool::from_id(arg)?),
        "chat-send" => Message::ChatSend,

        "dock-tab" => Message::SetDockTab(DockTab::from_id(arg)?),
        "palette-toggle" => Message::TogglePaletteSection(PaletteSection::from_id(arg)?),
        "clear-selection" => Message::ClearSelection,
        "run-workflow" => Message::RunWorkflow,
        "reset-canvas" => Message::ResetCanvas,
        "remove-node" => Message::RemoveSelectedNode,

        "toggle-sidebar" => Message::ToggleSidebar,
        "open-settings" => Message::OpenSettings(SettingsTab::from_id(arg)),
        "close-settings" => Message::CloseSettings,
        "settings-tab" => Message::SetSettingsTab(SettingsTab::from_id(arg)?),
        "set-theme" => Message::SetTheme(Theme::from_id(arg)?),
        "set-language" => Message::SetLanguage(Language::from_code(arg)?),
        "logout" => Message::Logout,
        "open-modal" if !arg.is_empty() => Message::OpenModal(id()),
        "close-modal" => Message::CloseModal,
        "close-drawer" => Message::CloseDrawer,

        "open-asset" => Message::OpenDrawer(asset_drawer_id(arg)),
        "asset-favorite" => Message::Mutate(Mutation::ToggleAssetFavorite(id())),
        "asset-delete" => Message::Mutate(Mutation::DeleteAsset(id())),
        "open-project" => Message::Navigate(Route::Teams {
            project_id: Some(id()),
            new_project: false,
        }),
        "project-delete" => Message::Mutate(Mutation::DeleteProject(id())),
        "open-workflow" => Message::Navigate(Route::WorkflowEditor),
        "new-workflow" => Message::Mutate(Mutation::CreateWorkflow(WorkflowDraft {
            name: Some(UNTITLED_WORKFLOW.to_string()),
            description: None,
            status: Some(WorkflowStatus::Draft),
        })),
        "workflow-duplicate" => Message::Mutate(Mutation::DuplicateWorkflow(id())),
        "workflow-delete" => Message::Mutate(Mutation::DeleteWorkflow(id())),
        "script-delete" => Message::Mutate(Mutation::DeleteScript(id())),
        "plugin-install" => Message::Mutate(Mutation::InstallPlugin(id())),
        "plugin-uninstall" => Message::Mutate(Mutation::UninstallPlugin(id())),
        "plugin-activate" => Message::Mutate(Mutation::TogglePlugin { id: id(), active: true }),
        "plugin-deactivate" => Message::Mutate(Mutation::TogglePlugin { id: id(), active: false }),

        "asset-type" => Message::SetAssetType(asset_type_from_id(arg)?),
        "asset-sort" => Message::SetAssetSort(asset_sort_from_id(arg)?),
        "script-status" => Message::SetScriptStatus(script_status_from_id(arg)?),
        "workflow-status" => Message::SetWorkflowStatus(workflow_status_from_id(arg)?),
        "plugin-chip" => Message::SetPluginChip(PluginChip::from_id(arg)?),
        "page" => {
            let (resource, page) = arg.split_once(':')?;
            Message::SetPage {
                resource: Resource::from_id(resource)?,
                page: page.parse().ok()?,
            }
        }
        "reload" => Message::LoadResource(Resource::from_id(arg)?),
        _ => return None,
    };
    Some(msg)
}

/// Submit of a `<form data-form="…">`.
pub fn form_message(form: &str) -> Option<Message> {
    Some(match form {
        "login" => Message::LoginSubmit,
        "signup" => Message::SignupSubmit,
        "forgot-request" => Message::ForgotSendCode,
        "forgot-reset" => Message::ForgotSubmit,
        "new-project" => Message::SubmitNewProject,
        "script-import" => Message::SubmitScriptImport,
        _ => return None,
    })
}

/// Change of an `<input type="checkbox" data-check="…">`.
pub fn check_message(id: &str, checked: bool) -> Option<Message> {
    match id {
        "login-remember" => Some(Message::LoginRememberChanged(checked)),
        "signup-terms" => Some(Message::SignupTermsChanged(checked)),
        _ => None,
    }
}

/// Keys with a meaning beyond typing.  Enter sends, Shift+Enter is a newline.
pub fn key_message(field_id: &str, key: &str, shift: bool) -> Option<Message> {
    if key != "Enter" || shift {
        return None;
    }
    match Field::from_id(field_id)? {
        Field::DashboardPrompt => Some(Message::PromptSubmit),
        Field::TeamsChatInput => Some(Message::ChatSend),
        _ => None,
    }
}

/// Input on an element carrying `data-field`.
pub fn field_message(id: &str, value: String) -> Option<Message> {
    Some(Message::FieldChanged {
        field: Field::from_id(id)?,
        value,
    })
}

#[cfg(target_arch = "wasm32")]
pub use dom::install_listeners;

#[cfg(target_arch = "wasm32")]
mod dom {
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use web_sys::{
        DragEvent, Event, EventTarget, HtmlInputElement, HtmlTextAreaElement, KeyboardEvent,
        PointerEvent,
    };

    use super::*;
    use crate::constants::{DRAG_DATA_FORMAT, ID_APP_ROOT, ID_CANVAS, ID_SPLIT_CONTAINER};
    use crate::dom_utils::{autogrow, by_id, closest};
    use crate::state::{dispatch_global_message, with_state};

    fn listen(
        target: &EventTarget,
        name: &str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<(), JsValue> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn canvas_origin() -> Option<(f64, f64)> {
        let rect = by_id(ID_CANVAS)?.get_bounding_client_rect();
        Some((rect.left(), rect.top()))
    }

    /// Attach every delegated listener.  Call once after the app state is
    /// installed.
    pub fn install_listeners() -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let root: EventTarget = by_id(ID_APP_ROOT)
            .ok_or_else(|| JsValue::from_str("app root not found"))?
            .into();

        listen(&root, "click", |e| {
            let Some(el) = closest(e.target(), "[data-action]") else {
                return;
            };
            let action = el.get_attribute("data-action").unwrap_or_default();
            let arg = el.get_attribute("data-arg").unwrap_or_default();
            match action_message(&action, &arg) {
                Some(msg) => dispatch_global_message(msg),
                None => crate::debug_log!("no message for action {:?} ({:?})", action, arg),
            }
        })?;

        listen(&root, "input", |e| {
            let Some(target) = e.target() else { return };
            let (id, value) = if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
                (input.get_attribute("data-field"), input.value())
            } else if let Some(area) = target.dyn_ref::<HtmlTextAreaElement>() {
                if area.has_attribute("data-autogrow") {
                    autogrow(area);
                }
                (area.get_attribute("data-field"), area.value())
            } else {
                return;
            };
            if let Some(msg) = id.and_then(|id| field_message(&id, value)) {
                dispatch_global_message(msg);
            }
        })?;

        listen(&root, "change", |e| {
            let Some(input) = e.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) else {
                return;
            };
            if let Some(msg) = input
                .get_attribute("data-check")
                .and_then(|id| check_message(&id, input.checked()))
            {
                dispatch_global_message(msg);
            }
        })?;

        listen(&root, "submit", |e| {
            e.prevent_default();
            if let Some(msg) = closest(e.target(), "form[data-form]")
                .and_then(|form| form.get_attribute("data-form"))
                .and_then(|form| form_message(&form))
            {
                dispatch_global_message(msg);
            }
        })?;

        listen(&root, "keydown", |e| {
            let Some(key) = e.dyn_ref::<KeyboardEvent>() else { return };
            let Some(id) = closest(e.target(), "[data-field]").map(|el| el.id()) else {
                return;
            };
            if let Some(msg) = key_message(&id, &key.key(), key.shift_key()) {
                e.prevent_default();
                dispatch_global_message(msg);
            }
        })?;

        // Palette drag and canvas drop.
        listen(&root, "dragstart", |e| {
            let Some(drag) = e.dyn_ref::<DragEvent>() else { return };
            let Some(node_type) =
                closest(e.target(), "[data-node-type]").and_then(|el| el.get_attribute("data-node-type"))
            else {
                return;
            };
            if let Some(dt) = drag.data_transfer() {
                let _ = dt.set_data(DRAG_DATA_FORMAT, &node_type);
                dt.set_effect_allowed("move");
            }
        })?;
        listen(&root, "dragover", |e| {
            if closest(e.target(), "[data-drop-zone]").is_none() {
                return;
            }
            e.prevent_default();
            if let Some(dt) = e.dyn_ref::<DragEvent>().and_then(|d| d.data_transfer()) {
                dt.set_drop_effect("move");
            }
        })?;
        listen(&root, "drop", |e| {
            let Some(zone) = closest(e.target(), "[data-drop-zone]") else {
                return;
            };
            e.prevent_default();
            let Some(drag) = e.dyn_ref::<DragEvent>() else { return };
            let payload = drag
                .data_transfer()
                .and_then(|dt| dt.get_data(DRAG_DATA_FORMAT).ok())
                .unwrap_or_default();
            let rect = zone.get_bounding_client_rect();
            dispatch_global_message(Message::CanvasDrop {
                payload,
                client_x: drag.client_x() as f64,
                client_y: drag.client_y() as f64,
                canvas_left: rect.left(),
                canvas_top: rect.top(),
            });
        })?;

        // Pointer drags: the split handle and canvas nodes start on the root,
        // moves and releases are tracked on the window.
        listen(&root, "pointerdown", |e| {
            let Some(pointer) = e.dyn_ref::<PointerEvent>() else { return };
            if closest(e.target(), "[data-split-handle]").is_some() {
                e.prevent_default();
                dispatch_global_message(Message::PanelPointerDown);
                return;
            }
            let Some(node_id) =
                closest(e.target(), "[data-node-id]").and_then(|el| el.get_attribute("data-node-id"))
            else {
                return;
            };
            let Some((left, top)) = canvas_origin() else { return };
            dispatch_global_message(Message::NodePointerDown {
                node_id,
                canvas_x: pointer.client_x() as f64 - left,
                canvas_y: pointer.client_y() as f64 - top,
            });
        })?;

        let window_target: &EventTarget = window.as_ref();
        listen(window_target, "pointermove", |e| {
            let Some(pointer) = e.dyn_ref::<PointerEvent>() else { return };
            let Some((panel, node)) =
                with_state(|s| (s.teams.resizer.dragging, s.editor.node_drag.is_some()))
            else {
                return;
            };
            if panel {
                if let Some(container) = by_id(ID_SPLIT_CONTAINER) {
                    dispatch_global_message(Message::PanelPointerMove {
                        container_right: container.get_bounding_client_rect().right(),
                        pointer_x: pointer.client_x() as f64,
                    });
                }
            } else if node {
                if let Some((left, top)) = canvas_origin() {
                    dispatch_global_message(Message::NodePointerMove {
                        canvas_x: pointer.client_x() as f64 - left,
                        canvas_y: pointer.client_y() as f64 - top,
                    });
                }
            }
        })?;
        listen(window_target, "pointerup", |_| {
            let Some((panel, node)) =
                with_state(|s| (s.teams.resizer.dragging, s.editor.node_drag.is_some()))
            else {
                return;
            };
            if panel {
                dispatch_global_message(Message::PanelPointerUp);
            }
            if node {
                dispatch_global_message(Message::NodePointerUp);
            }
        })?;

        listen(window_target, "hashchange", |_| {
            let hash = web_sys::window()
                .and_then(|w| w.location().hash().ok())
                .unwrap_or_default();
            dispatch_global_message(Message::RouteChanged(Route::from_hash(&hash)));
        })?;

        Ok(())
    }
}
