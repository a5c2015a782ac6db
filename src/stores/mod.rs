//! Client-side state containers.
//!
//! Each store is a plain struct owned by `AppState`; reducers mutate it
//! through the setter methods below.  Only the stores that persist
//! something hold a storage handle.

pub mod auth;
pub mod settings;
pub mod ui;
pub mod workflow;

pub use auth::AuthStore;
pub use settings::{SettingsStore, SettingsTab, Theme};
pub use ui::UiStore;
pub use workflow::WorkflowStore;
