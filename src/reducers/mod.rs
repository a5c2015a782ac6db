//! Domain reducers.
//!
//! Each module exposes `update(state, msg, commands) -> bool`; `true` means
//! the message was consumed.  Reducers only mutate state and push commands;
//! DOM work and network calls happen in the command executors.

pub mod auth;
pub mod canvas;
pub mod dashboard;
pub mod resources;
pub mod session;
pub mod teams;

#[cfg(test)]
pub(crate) mod test_support {
    use crate::messages::{Command, Message};
    use crate::network::{ApiClient, ApiConfig, FetchTransport};
    use crate::state::AppState;
    use crate::storage::MemoryStorage;
    use std::rc::Rc;

    /// State over in-memory storage.  The transport is never reached; the
    /// reducers only describe calls.
    pub fn state() -> AppState {
        let storage = Rc::new(MemoryStorage::new());
        let api = ApiClient::new(
            ApiConfig::from_url("http://api.test/v1"),
            storage.clone(),
            Rc::new(FetchTransport::default()),
        );
        AppState::new(storage, api)
    }

    pub fn logged_in() -> AppState {
        let mut s = state();
        s.auth.set_token(Some("jwt".into()));
        s
    }

    /// The message inside the first `Delayed` command.
    pub fn delayed(commands: &[Command]) -> Option<(u32, &Message)> {
        commands.iter().find_map(|c| match c {
            Command::Delayed { delay_ms, message } => Some((*delay_ms, message.as_ref())),
            _ => None,
        })
    }
}
