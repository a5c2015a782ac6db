//! Error type for everything that goes through the REST client.

use crate::i18n::{tr, Language, Text};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response (offline, CORS, DNS…).
    #[error("network error: {0}")]
    Network(String),

    /// Non-2xx response.  `detail` is the server's `{ "detail": "..." }`
    /// field when the body had one.
    #[error("request failed with status {status}")]
    Status { status: u16, detail: Option<String> },

    /// 2xx response whose body did not match the expected shape.
    #[error("failed to decode response: {0}")]
    Decode(String),
}

#[derive(Deserialize)]
struct ErrorBody {
    detail: serde_json::Value,
}

impl ApiError {
    /// Build a `Status` error from a raw response body.  Only a *string*
    /// `detail` is surfaced; validation arrays and other shapes are dropped
    /// so the UI falls back to its generic message.
    pub fn from_status(status: u16, body: &str) -> Self {
        let detail = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.detail.as_str().map(str::to_string))
            .filter(|d| !d.is_empty());
        ApiError::Status { status, detail }
    }

    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Status { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// Message for the UI: the server's `detail` when present; a network
    /// failure gets the network fallback; anything else gets `fallback`.
    pub fn user_message(&self, lang: Language, fallback: Text) -> String {
        match self {
            ApiError::Status { detail: Some(d), .. } => d.clone(),
            ApiError::Network(_) => tr(lang, Text::NetworkError).to_string(),
            _ => tr(lang, fallback).to_string(),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}
