//! Backend endpoint configuration.
//!
//! The backend base URL is an explicit value constructed at startup and
//! threaded into every fetch call. Nothing in this workspace reads it from
//! a global.

/// Where the AutoBase backend lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    /// Base URL of the backend, without a trailing slash. Empty means
    /// same-origin relative URLs (the wasm deployment behind one host).
    pub base_url: String,
}

impl BackendConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    /// Root for the `/api/...` endpoints (auth, customer).
    pub fn api_url(&self) -> String {
        format!("{}/api", self.base_url)
    }

    /// Root for the table endpoints (`/tables`, `/primary_key/{t}`, `/{t}`).
    pub fn table_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self::new(if cfg!(target_arch = "wasm32") {
            // Served from the same origin as the backend.
            ""
        } else {
            "http://127.0.0.1:5000"
        })
    }
}
