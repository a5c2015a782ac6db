//! Reusable presentational pieces.  Each renders markup from plain data;
//! none of them touch application state.

pub mod avatar;
pub mod cards;
pub mod countdown;
pub mod drawer;
pub mod grid;
pub mod input;
pub mod modal;
pub mod settings_modal;
pub mod sidebar;
pub mod split_panel;
pub mod toast;
pub mod toggle;
