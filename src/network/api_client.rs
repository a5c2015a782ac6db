use super::config::ApiConfig;
use super::transport::{ApiRequest, FetchTransport, HttpMethod, Transport};
use crate::constants::STORAGE_KEY_TOKEN;
use crate::error::ApiError;
use crate::storage::SharedStorage;
use crate::utils::encode_query_component;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::rc::Rc;

pub type Query = Vec<(&'static str, String)>;

/// REST client shared by every service.
///
/// Reads the bearer token from storage on every request, so a login or
/// logout takes effect for the next call without rebuilding the client.
/// A browser client has no fixed config and resolves the base URL from the
/// global config per request, picking up `init_api_config_js` overrides.
#[derive(Clone)]
pub struct ApiClient {
    config: Option<ApiConfig>,
    storage: SharedStorage,
    transport: Rc<dyn Transport>,
}

impl ApiClient {
    pub fn new(config: ApiConfig, storage: SharedStorage, transport: Rc<dyn Transport>) -> Self {
        Self {
            config: Some(config),
            storage,
            transport,
        }
    }

    /// Client for the running page: global config plus `window.fetch`.
    pub fn browser(storage: SharedStorage) -> Self {
        Self {
            config: None,
            storage,
            transport: Rc::new(FetchTransport::default()),
        }
    }

    pub fn config(&self) -> ApiConfig {
        match &self.config {
            Some(config) => config.clone(),
            None => super::current_config(),
        }
    }

    pub fn base_url(&self) -> String {
        match &self.config {
            Some(config) => config.base_url().to_string(),
            None => super::get_api_base_url(),
        }
    }

    pub fn build_url(&self, path: &str, query: &[(&'static str, String)]) -> String {
        let mut url = self.config().url(path);
        let pairs: Vec<String> = query
            .iter()
            .filter(|(_, v)| !v.is_empty() && v != "all")
            .map(|(k, v)| format!("{}={}", k, encode_query_component(v)))
            .collect();
        if !pairs.is_empty() {
            url.push('?');
            url.push_str(&pairs.join("&"));
        }
        url
    }

    fn headers(&self, has_body: bool) -> Vec<(String, String)> {
        let mut headers = vec![("Accept".to_string(), "application/json".to_string())];
        if has_body {
            headers.push(("Content-Type".to_string(), "application/json".to_string()));
        }
        if let Some(token) = self.storage.get_item(STORAGE_KEY_TOKEN) {
            if !token.is_empty() {
                headers.push(("Authorization".to_string(), format!("Bearer {}", token)));
            }
        }
        headers
    }

    async fn request<R: DeserializeOwned>(
        &self,
        method: HttpMethod,
        path: &str,
        query: &[(&'static str, String)],
        body: Option<String>,
    ) -> Result<R, ApiError> {
        let request = ApiRequest {
            method,
            url: self.build_url(path, query),
            headers: self.headers(body.is_some()),
            body,
        };
        crate::debug_log!("{} {}", method.as_str(), request.url);

        let response = self.transport.send(request).await?;
        if !response.is_success() {
            crate::logging::warn(&format!(
                "API request failed: {} {} -> {}",
                method.as_str(),
                path,
                response.status
            ));
            return Err(ApiError::from_status(response.status, &response.body));
        }

        // 204 / empty bodies decode as JSON null so `()` and `Option<T>`
        // work as response types.
        let raw = response.body.trim();
        let raw = if raw.is_empty() { "null" } else { raw };
        Ok(serde_json::from_str(raw)?)
    }

    fn encode<B: Serialize>(body: &B) -> Result<String, ApiError> {
        serde_json::to_string(body).map_err(ApiError::from)
    }

    pub async fn get<R: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&'static str, String)],
    ) -> Result<R, ApiError> {
        self.request(HttpMethod::Get, path, query, None).await
    }

    pub async fn post<B: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<R, ApiError> {
        let body = Self::encode(body)?;
        self.request(HttpMethod::Post, path, &[], Some(body)).await
    }

    /// POST without a body (install, favorite, duplicate, logout…).
    pub async fn post_empty<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        self.request(HttpMethod::Post, path, &[], None).await
    }

    pub async fn put<B: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<R, ApiError> {
        let body = Self::encode(body)?;
        self.request(HttpMethod::Put, path, &[], Some(body)).await
    }

    pub async fn delete<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        self.request(HttpMethod::Delete, path, &[], None).await
    }
}
