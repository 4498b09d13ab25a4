//! Runtime configuration for the back-office client.
//!
//! The API base URL is baked in at build time from `BACKOFFICE_API_URL`
//! (browser bundles have no process environment to read at runtime).

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    api_base_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

impl AppConfig {
    /// Config from the compile-time environment, with a local-dev fallback.
    #[must_use]
    pub fn from_env() -> Self {
        let base = option_env!("BACKOFFICE_API_URL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL);
        Self {
            api_base_url: String::new(),
        }
        .with_api_base_url(base)
    }

    /// Override the API base URL.
    #[must_use]
    pub fn with_api_base_url(mut self, base: impl AsRef<str>) -> Self {
        self.api_base_url = base.as_ref().trim().trim_end_matches('/').to_owned();
        self
    }

    #[must_use]
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    /// Absolute URL for an API path such as `/rm/clients/`.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.api_base_url)
        } else {
            format!("{}/{path}", self.api_base_url)
        }
    }
}
