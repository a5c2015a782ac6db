//! Dashboard home: the prompt box and its toggles.

use crate::messages::{Command, Field, Message};
use crate::router::Route;
use crate::state::AppState;

/// Handles dashboard messages. Returns true if the message was handled.
pub fn update(state: &mut AppState, msg: &Message, commands: &mut Vec<Command>) -> bool {
    let page = &mut state.dashboard;
    match msg {
        Message::FieldChanged {
            field: Field::DashboardPrompt,
            value,
        } => {
            page.prompt = value.clone();
            true
        }
        Message::ToggleAgent => {
            page.agent_enabled = !page.agent_enabled;
            true
        }
        Message::ToggleModel => {
            page.model = page.model.toggled();
            true
        }
        Message::ToggleWebSearch => {
            page.web_search = !page.web_search;
            true
        }
        Message::PromptSubmit => {
            // Opens a fresh team workspace; the prompt stays in the box.
            commands.push(Command::SendMessage(Message::Navigate(Route::teams())));
            true
        }
        _ => false,
    }
}
