// src/update.rs
//
// Root reducer.  Every message goes through the domain reducers in turn;
// the first one that recognises it wins.
//
use crate::messages::{Command, Message};
use crate::state::AppState;

pub fn update(state: &mut AppState, msg: Message) -> Vec<Command> {
    let mut commands = Vec::new();

    if crate::reducers::session::update(state, &msg, &mut commands) {
        return commands;
    }
    if crate::reducers::auth::update(state, &msg, &mut commands) {
        return commands;
    }
    if crate::reducers::dashboard::update(state, &msg, &mut commands) {
        return commands;
    }
    if crate::reducers::teams::update(state, &msg, &mut commands) {
        return commands;
    }
    if crate::reducers::canvas::update(state, &msg, &mut commands) {
        return commands;
    }
    if crate::reducers::resources::update(state, &msg, &mut commands) {
        return commands;
    }

    crate::debug_log!("unhandled message: {:?}", msg);
    commands
}
