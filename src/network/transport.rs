//! The HTTP seam under `ApiClient`.
//!
//! `FetchTransport` is the browser implementation; tests substitute their own
//! `Transport` that records requests and returns canned responses.

use crate::error::ApiError;
use async_trait::async_trait;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl ApiRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait(?Send)]
pub trait Transport {
    /// Perform the request.  Any HTTP status is a successful transport
    /// result; only failures to get a response at all are `Err`.
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError>;
}

/// `window.fetch` with a CORS request and an abort after `timeout_ms`.
#[derive(Debug, Clone)]
pub struct FetchTransport {
    timeout_ms: u32,
}

impl Default for FetchTransport {
    fn default() -> Self {
        Self {
            timeout_ms: crate::constants::API_TIMEOUT_MS,
        }
    }
}

impl FetchTransport {
    pub fn with_timeout(timeout_ms: u32) -> Self {
        Self { timeout_ms }
    }
}

#[cfg(target_arch = "wasm32")]
#[async_trait(?Send)]
impl Transport for FetchTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        use gloo_timers::callback::Timeout;
        use wasm_bindgen::{JsCast, JsValue};
        use wasm_bindgen_futures::JsFuture;
        use web_sys::{AbortController, Headers, Request, RequestInit, RequestMode, Response};

        let js_err = |e: JsValue| ApiError::Network(format!("{:?}", e));

        let opts = RequestInit::new();
        opts.set_method(request.method.as_str());
        opts.set_mode(RequestMode::Cors);

        let headers = Headers::new().map_err(js_err)?;
        for (name, value) in &request.headers {
            headers.append(name, value).map_err(js_err)?;
        }
        if let Some(body) = &request.body {
            opts.set_body(&JsValue::from_str(body));
        }
        opts.set_headers(&headers);

        let controller = AbortController::new().map_err(js_err)?;
        opts.set_signal(Some(&controller.signal()));

        let req = Request::new_with_str_and_init(&request.url, &opts).map_err(js_err)?;
        let window = web_sys::window().ok_or_else(|| ApiError::Network("no window".into()))?;

        // Dropping the handle after the response arrives cancels the abort.
        let abort_guard = Timeout::new(self.timeout_ms, move || controller.abort());
        let resp_value = JsFuture::from(window.fetch_with_request(&req))
            .await
            .map_err(js_err)?;
        let resp: Response = resp_value.dyn_into().map_err(js_err)?;
        let text = JsFuture::from(resp.text().map_err(js_err)?)
            .await
            .map_err(js_err)?;
        drop(abort_guard);

        Ok(ApiResponse {
            status: resp.status(),
            body: text.as_string().unwrap_or_default(),
        })
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[async_trait(?Send)]
impl Transport for FetchTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        crate::logging::warn(&format!(
            "fetch unavailable outside the browser: {} {}",
            request.method.as_str(),
            request.url
        ));
        Err(ApiError::Network("fetch is only available in the browser".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_lookup_is_case_insensitive() {
        let req = ApiRequest {
            method: HttpMethod::Get,
            url: "http://x".into(),
            headers: vec![("Authorization".into(), "Bearer t".into())],
            body: None,
        };
        assert_eq!(req.header("authorization"), Some("Bearer t"));
        assert_eq!(req.header("content-type"), None);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn fetch_transport_reports_network_error_off_browser() {
        let req = ApiRequest {
            method: HttpMethod::Get,
            url: "http://localhost/assets".into(),
            headers: Vec::new(),
            body: None,
        };
        let res = futures::executor::block_on(FetchTransport::default().send(req));
        assert!(matches!(res, Err(ApiError::Network(_))));
    }
}
