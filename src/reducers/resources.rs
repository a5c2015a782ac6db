//! List pages backed by the API: filters, paging, create/import forms and
//! the card actions.

use crate::components::toast::ToastKind;
use crate::i18n::Text;
use crate::messages::{ApiCall, Command, Field, Message, Mutation, Resource};
use crate::models::{ProjectDraft, ProjectKind, ScriptFormat, ScriptImport};
use crate::router::Route;
use crate::state::AppState;

/// Marks `resource` as loading and asks for its current page.
pub fn load(state: &mut AppState, resource: Resource, commands: &mut Vec<Command>) {
    state.resources.begin_load(resource);
    commands.push(Command::Api(ApiCall::List(state.resources.query(resource))));
}

/// Server-side filter changed: back to page one and refetch.
fn refilter(state: &mut AppState, resource: Resource, commands: &mut Vec<Command>) {
    state.resources.set_page(resource, 1);
    load(state, resource, commands);
}

pub fn update(state: &mut AppState, msg: &Message, commands: &mut Vec<Command>) -> bool {
    match msg {
        Message::LoadResource(resource) => {
            load(state, *resource, commands);
            true
        }
        Message::ResourceLoaded { resource, result } => {
            match result {
                Ok(page) => state.resources.store(page.clone()),
                Err(e) => {
                    crate::logging::warn(&format!("loading {} failed: {}", resource.id(), e));
                    let text = e.user_message(state.language(), Text::RequestFailed);
                    state.resources.fail(*resource, text.clone());
                    commands.push(Command::Toast {
                        kind: ToastKind::Error,
                        text,
                    });
                }
            }
            true
        }

        Message::SetAssetType(asset_type) => {
            state.resources.asset_filter.asset_type = *asset_type;
            refilter(state, Resource::Assets, commands);
            true
        }
        Message::SetAssetSort(sort) => {
            state.resources.asset_filter.sort_by = *sort;
            refilter(state, Resource::Assets, commands);
            true
        }
        Message::SetScriptStatus(status) => {
            state.resources.script_filter.status = *status;
            refilter(state, Resource::Scripts, commands);
            true
        }
        Message::SetPluginChip(chip) => {
            state.resources.plugin_chip = *chip;
            refilter(state, Resource::Plugins, commands);
            true
        }
        Message::SetWorkflowStatus(status) => {
            state.resources.workflow_status = *status;
            true
        }
        Message::SetPage { resource, page } => {
            state.resources.set_page(*resource, *page);
            load(state, *resource, commands);
            true
        }

        Message::FieldChanged { field, value } => {
            let page = &mut state.resources;
            match field {
                Field::AssetSearch => {
                    page.asset_filter.search = value.clone();
                    refilter(state, Resource::Assets, commands);
                }
                Field::ScriptSearch => {
                    page.script_filter.search = value.clone();
                    refilter(state, Resource::Scripts, commands);
                }
                Field::PluginSearch => {
                    page.plugin_search = value.clone();
                    refilter(state, Resource::Plugins, commands);
                }
                Field::ProjectSearch => page.project_search = value.clone(),
                Field::WorkflowSearch => page.workflow_search = value.clone(),
                Field::NewProjectName => page.new_project_name = value.clone(),
                Field::ScriptImportTitle => page.script_import_title = value.clone(),
                Field::ScriptImportContent => page.script_import_content = value.clone(),
                _ => return false,
            }
            true
        }

        Message::SubmitNewProject => {
            let name = state.resources.new_project_name.trim().to_string();
            if name.is_empty() {
                return true;
            }
            commands.push(Command::Api(ApiCall::Mutate(Mutation::CreateProject(
                ProjectDraft {
                    name: Some(name),
                    kind: Some(ProjectKind::Project),
                    thumbnail: None,
                },
            ))));
            state.resources.new_project_name.clear();
            state.ui.close_modal();
            true
        }
        Message::SubmitScriptImport => {
            let page = &mut state.resources;
            let title = page.script_import_title.trim().to_string();
            if title.is_empty() || page.script_import_content.trim().is_empty() {
                return true;
            }
            commands.push(Command::Api(ApiCall::Mutate(Mutation::ImportScript(
                ScriptImport {
                    title,
                    content: std::mem::take(&mut page.script_import_content),
                    format: ScriptFormat::Txt,
                },
            ))));
            page.script_import_title.clear();
            state.ui.close_modal();
            true
        }

        Message::Mutate(mutation) => {
            commands.push(Command::Api(ApiCall::Mutate(mutation.clone())));
            true
        }
        Message::MutationFinished { mutation, result } => {
            match result {
                Ok(()) => {
                    commands.push(Command::Toast {
                        kind: ToastKind::Success,
                        text: mutation.success_text().to_string(),
                    });
                    if let Mutation::DeleteAsset(_) = mutation {
                        state.ui.close_drawer();
                    }
                    if let Mutation::CreateWorkflow(_) = mutation {
                        commands.push(Command::SendMessage(Message::Navigate(
                            Route::WorkflowEditor,
                        )));
                    } else {
                        load(state, mutation.resource(), commands);
                    }
                }
                Err(e) => {
                    crate::logging::warn(&format!("{:?} failed: {}", mutation, e));
                    commands.push(Command::Toast {
                        kind: ToastKind::Error,
                        text: e.user_message(state.language(), Text::RequestFailed),
                    });
                }
            }
            true
        }
        _ => false,
    }
}
