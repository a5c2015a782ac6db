//! One module per screen.  Each owns its page state and a `view` that
//! renders it to markup.

pub mod dashboard;
pub mod forgot_password;
pub mod login;
pub mod resources;
pub mod signup;
pub mod teams;
pub mod workflow_editor;
