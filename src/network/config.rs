use crate::constants::DEFAULT_API_BASE_URL;

/// REST base URL configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl Default for ApiConfig {
    /// Local development backend.  Used by tests and whenever neither the
    /// build-time `API_BASE_URL` nor a runtime override was supplied.
    fn default() -> Self {
        Self::from_url(DEFAULT_API_BASE_URL)
    }
}

impl ApiConfig {
    /// Create a new ApiConfig from the API_BASE_URL environment variable
    /// captured at compile time.
    pub fn new() -> Result<Self, &'static str> {
        match option_env!("API_BASE_URL") {
            Some(url) if !url.trim().is_empty() => Ok(Self::from_url(url)),
            _ => Err("API_BASE_URL environment variable is not set"),
        }
    }

    pub fn from_url(url: &str) -> Self {
        Self {
            base_url: url.trim().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for an API path such as `/assets/42`.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}
