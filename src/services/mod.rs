//! One module per backend resource.  Every function is a direct proxy for
//! one HTTP verb + path: no validation, retry or caching happens here.

pub mod asset;
pub mod auth;
pub mod plugin;
pub mod project;
pub mod script;
pub mod workflow;
